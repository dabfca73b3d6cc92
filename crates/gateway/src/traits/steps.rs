//! Campaign step operations.

use async_trait::async_trait;
use outreach_core::{CampaignStep, CampaignStepFull, PageRequest, PageResponse, StepInspection};

use crate::GatewayResult;

#[derive(Debug, Clone)]
pub struct AddStepArgs {
    pub campaign_id: i64,
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct ListStepsArgs {
    pub page: PageRequest,
    /// Restrict to steps assigned to the caller.
    pub assigned: Option<bool>,
}

#[derive(Debug, Clone)]
pub struct AssignUserToStepArgs {
    pub step_id: i64,
    pub user_id: i64,
}

#[async_trait]
pub trait StepGateway: Send + Sync {
    async fn add_step(&self, args: AddStepArgs) -> GatewayResult<CampaignStep>;

    /// Mark a step as the campaign's active one.
    async fn activate_step(&self, step_id: i64) -> GatewayResult<()>;

    async fn inspect_step(&self, step_id: i64) -> GatewayResult<StepInspection>;

    async fn assign_user_to_step(&self, args: AssignUserToStepArgs) -> GatewayResult<()>;

    async fn list_steps(&self, args: ListStepsArgs) -> GatewayResult<PageResponse<CampaignStepFull>>;
}
