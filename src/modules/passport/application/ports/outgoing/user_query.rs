use async_trait::async_trait;

use crate::modules::passport::application::domain::entities::UserProfile;

#[async_trait]
pub trait UserQuery: Send + Sync {
    async fn find_by_id(&self, user_id: i32) -> Result<Option<UserProfile>, String>;

    async fn find_by_mobile(&self, mobile: &str) -> Result<Option<UserProfile>, String>;

    /// Admin login looks up by mobile AND the admin flag in one query.
    async fn find_admin_by_mobile(&self, mobile: &str) -> Result<Option<UserProfile>, String>;
}
