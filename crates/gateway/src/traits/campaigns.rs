//! Campaign operations.

use async_trait::async_trait;
use outreach_core::{Campaign, CampaignInspection, CampaignStepFull, PageRequest, PageResponse};

use crate::GatewayResult;

#[derive(Debug, Clone)]
pub struct CreateCampaignArgs {
    pub name: String,
    pub theme_id: i64,
}

#[derive(Debug, Clone)]
pub struct ListCampaignsArgs {
    pub page: PageRequest,
    /// Restrict to campaigns under the given theme.
    pub theme_id: Option<i64>,
    /// Restrict to campaigns assigned to the caller.
    pub assigned: Option<bool>,
}

#[derive(Debug, Clone)]
pub struct AssignUserToCampaignArgs {
    pub campaign_id: i64,
    /// `None` clears the assignment.
    pub user_id: Option<i64>,
}

/// Staff membership change on a campaign.
#[derive(Debug, Clone)]
pub struct CampaignMemberArgs {
    pub campaign_id: i64,
    pub user_id: i64,
}

#[async_trait]
pub trait CampaignGateway: Send + Sync {
    async fn create_campaign(&self, args: CreateCampaignArgs) -> GatewayResult<Campaign>;

    async fn delete_campaign(&self, campaign_id: i64) -> GatewayResult<()>;

    async fn list_campaigns(&self, args: ListCampaignsArgs)
    -> GatewayResult<PageResponse<Campaign>>;

    async fn inspect_campaign(&self, campaign_id: i64) -> GatewayResult<CampaignInspection>;

    async fn assign_user_to_campaign(&self, args: AssignUserToCampaignArgs) -> GatewayResult<()>;

    async fn add_user_to_campaign(&self, args: CampaignMemberArgs) -> GatewayResult<()>;

    async fn remove_user_from_campaign(&self, args: CampaignMemberArgs) -> GatewayResult<()>;

    /// All steps of one campaign, unpaginated.
    async fn steps_for_campaign(&self, campaign_id: i64) -> GatewayResult<Vec<CampaignStepFull>>;
}
