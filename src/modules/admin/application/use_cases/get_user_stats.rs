use async_trait::async_trait;
use chrono::{DateTime, Datelike, Duration, Utc};
use serde::Serialize;
use std::sync::Arc;
use tracing::warn;

use crate::modules::admin::application::ports::outgoing::UserStatsQuery;

const ACTIVE_SERIES_DAYS: i64 = 31;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetUserStatsError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

/// Dashboard numbers: totals, month/day registrations and the 31-day
/// active-user line chart, oldest day first.
#[derive(Debug, Clone, Serialize)]
pub struct UserStatsResponse {
    pub total_count: u64,
    pub mon_count: u64,
    pub day_count: u64,
    pub active_time: Vec<String>,
    pub active_count: Vec<u64>,
}

#[async_trait]
pub trait GetUserStatsUseCase: Send + Sync {
    async fn execute(&self) -> Result<UserStatsResponse, GetUserStatsError>;
}

pub struct GetUserStatsService {
    stats: Arc<dyn UserStatsQuery>,
}

impl GetUserStatsService {
    pub fn new(stats: Arc<dyn UserStatsQuery>) -> Self {
        Self { stats }
    }

    fn day_start(at: DateTime<Utc>) -> DateTime<Utc> {
        at.date_naive()
            .and_hms_opt(0, 0, 0)
            .expect("midnight always exists")
            .and_utc()
    }

    fn month_start(at: DateTime<Utc>) -> DateTime<Utc> {
        at.date_naive()
            .with_day(1)
            .expect("day 1 always exists")
            .and_hms_opt(0, 0, 0)
            .expect("midnight always exists")
            .and_utc()
    }
}

#[async_trait]
impl GetUserStatsUseCase for GetUserStatsService {
    async fn execute(&self) -> Result<UserStatsResponse, GetUserStatsError> {
        let now = Utc::now();
        let today = Self::day_start(now);

        let total_count = self
            .stats
            .total_user_count()
            .await
            .map_err(GetUserStatsError::QueryFailed)?;

        let mon_count = self
            .stats
            .count_registered_since(Self::month_start(now))
            .await
            .map_err(GetUserStatsError::QueryFailed)?;

        let day_count = self
            .stats
            .count_registered_since(today)
            .await
            .map_err(GetUserStatsError::QueryFailed)?;

        let mut active_time = Vec::with_capacity(ACTIVE_SERIES_DAYS as usize);
        let mut active_count = Vec::with_capacity(ACTIVE_SERIES_DAYS as usize);

        for i in 0..ACTIVE_SERIES_DAYS {
            let begin = today - Duration::days(i);
            let end = begin + Duration::days(1);

            let count = match self.stats.active_count_between(begin, end).await {
                Ok(count) => count,
                Err(e) => {
                    warn!(error = %e, "Active-user count failed for one day");
                    0
                }
            };

            active_time.push(begin.format("%Y-%m-%d").to_string());
            active_count.push(count);
        }

        // Newest day was collected first; the chart wants it rightmost.
        active_time.reverse();
        active_count.reverse();

        Ok(UserStatsResponse {
            total_count,
            mon_count,
            day_count,
            active_time,
            active_count,
        })
    }
}
