//! User administration operations.

use async_trait::async_trait;
use outreach_core::{PageRequest, PageResponse, Role, User};

use crate::GatewayResult;

#[derive(Debug, Clone)]
pub struct ListUsersArgs {
    pub page: PageRequest,
    /// Restrict to users assigned to the given activity.
    pub activity_id: Option<i64>,
    /// Restrict to users assigned to the given campaign.
    pub campaign_id: Option<i64>,
}

#[derive(Debug, Clone)]
pub struct QueryUsersArgs {
    pub page: PageRequest,
    pub query: String,
}

#[derive(Debug, Clone)]
pub struct ChangeRoleArgs {
    pub user_id: i64,
    pub role: Role,
}

#[derive(Debug, Clone)]
pub struct ChangePasswordArgs {
    pub old_password: String,
    pub new_password: String,
}

#[async_trait]
pub trait UserGateway: Send + Sync {
    async fn list_users(&self, args: ListUsersArgs) -> GatewayResult<PageResponse<User>>;

    async fn get_user(&self, user_id: i64) -> GatewayResult<User>;

    async fn delete_user(&self, user_id: i64) -> GatewayResult<()>;

    async fn change_user_role(&self, args: ChangeRoleArgs) -> GatewayResult<()>;

    async fn change_own_password(&self, args: ChangePasswordArgs) -> GatewayResult<()>;

    /// Free-text user search.
    async fn query_users(&self, args: QueryUsersArgs) -> GatewayResult<PageResponse<User>>;
}
