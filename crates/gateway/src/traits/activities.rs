//! Activity operations.

use async_trait::async_trait;
use outreach_core::{Activity, ActivityInspection, PageRequest, PageResponse};

use crate::GatewayResult;

#[derive(Debug, Clone)]
pub struct CreateActivityArgs {
    pub name: String,
    pub description: String,
    pub step_id: i64,
    /// Epoch millis.
    pub start_date: i64,
    /// Epoch millis.
    pub end_date: i64,
}

#[derive(Debug, Clone)]
pub struct ListActivitiesArgs {
    pub page: PageRequest,
    /// Restrict to activities assigned to the caller.
    pub assigned: Option<bool>,
    /// Restrict to activities available to the caller.
    pub available: Option<bool>,
    /// Restrict to activities under the given step.
    pub step_id: Option<i64>,
}

/// Staff membership change on an activity.
#[derive(Debug, Clone)]
pub struct ActivityMemberArgs {
    pub activity_id: i64,
    pub user_id: i64,
}

#[async_trait]
pub trait ActivityGateway: Send + Sync {
    async fn create_activity(&self, args: CreateActivityArgs) -> GatewayResult<Activity>;

    async fn get_activity(&self, activity_id: i64) -> GatewayResult<Activity>;

    async fn list_activities(&self, args: ListActivitiesArgs)
    -> GatewayResult<PageResponse<Activity>>;

    async fn inspect_activity(&self, activity_id: i64) -> GatewayResult<ActivityInspection>;

    async fn open_activity(&self, activity_id: i64) -> GatewayResult<()>;

    async fn close_activity(&self, activity_id: i64) -> GatewayResult<()>;

    async fn add_user_to_activity(&self, args: ActivityMemberArgs) -> GatewayResult<()>;

    async fn remove_user_from_activity(&self, args: ActivityMemberArgs) -> GatewayResult<()>;
}
