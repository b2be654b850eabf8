pub mod user_stats_query;

pub use user_stats_query::{AdminUserPage, AdminUserRow, UserStatsQuery};
