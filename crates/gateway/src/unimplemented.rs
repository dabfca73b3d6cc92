//! Null-object gateway.

use async_trait::async_trait;

use outreach_core::{
    Activity, ActivityInspection, Campaign, CampaignInspection, CampaignStep, CampaignStepFull,
    IdentityUser, JwtToken, PageResponse, StepInspection, Theme, User,
};

use crate::error::{GatewayError, GatewayResult};
use crate::traits::{
    ActivityGateway, ActivityMemberArgs, AddStepArgs, AssignUserToCampaignArgs,
    AssignUserToStepArgs, AuthGateway, CampaignGateway, CampaignMemberArgs, ChangePasswordArgs,
    ChangeRoleArgs, CreateActivityArgs, CreateCampaignArgs, CreateThemeArgs, ListActivitiesArgs,
    ListCampaignsArgs, ListStepsArgs, ListThemesArgs, ListUsersArgs, LoginArgs, QueryUsersArgs,
    RegisterArgs, StepGateway, ThemeGateway, UpdateThemeArgs, UserGateway,
};

/// A gateway rejecting every call, used as a stand-in before real wiring
/// exists and as a base for test doubles.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnimplementedGateway;

fn unimplemented<T>() -> GatewayResult<T> {
    Err(GatewayError::Unimplemented)
}

#[async_trait]
impl AuthGateway for UnimplementedGateway {
    async fn login(&self, _args: LoginArgs) -> GatewayResult<JwtToken> {
        unimplemented()
    }

    async fn register(&self, _args: RegisterArgs) -> GatewayResult<JwtToken> {
        unimplemented()
    }

    async fn refresh(&self) -> GatewayResult<JwtToken> {
        unimplemented()
    }

    async fn logout(&self) -> GatewayResult<()> {
        unimplemented()
    }

    async fn identity(&self) -> GatewayResult<IdentityUser> {
        unimplemented()
    }
}

#[async_trait]
impl UserGateway for UnimplementedGateway {
    async fn list_users(&self, _args: ListUsersArgs) -> GatewayResult<PageResponse<User>> {
        unimplemented()
    }

    async fn get_user(&self, _user_id: i64) -> GatewayResult<User> {
        unimplemented()
    }

    async fn delete_user(&self, _user_id: i64) -> GatewayResult<()> {
        unimplemented()
    }

    async fn change_user_role(&self, _args: ChangeRoleArgs) -> GatewayResult<()> {
        unimplemented()
    }

    async fn change_own_password(&self, _args: ChangePasswordArgs) -> GatewayResult<()> {
        unimplemented()
    }

    async fn query_users(&self, _args: QueryUsersArgs) -> GatewayResult<PageResponse<User>> {
        unimplemented()
    }
}

#[async_trait]
impl ThemeGateway for UnimplementedGateway {
    async fn create_theme(&self, _args: CreateThemeArgs) -> GatewayResult<()> {
        unimplemented()
    }

    async fn get_theme(&self, _theme_id: i64) -> GatewayResult<Theme> {
        unimplemented()
    }

    async fn update_theme(&self, _args: UpdateThemeArgs) -> GatewayResult<()> {
        unimplemented()
    }

    async fn delete_theme(&self, _theme_id: i64) -> GatewayResult<()> {
        unimplemented()
    }

    async fn list_themes(&self, _args: ListThemesArgs) -> GatewayResult<PageResponse<Theme>> {
        unimplemented()
    }

    async fn inspect_theme(&self, _theme_id: i64) -> GatewayResult<Theme> {
        unimplemented()
    }
}

#[async_trait]
impl CampaignGateway for UnimplementedGateway {
    async fn create_campaign(&self, _args: CreateCampaignArgs) -> GatewayResult<Campaign> {
        unimplemented()
    }

    async fn delete_campaign(&self, _campaign_id: i64) -> GatewayResult<()> {
        unimplemented()
    }

    async fn list_campaigns(
        &self,
        _args: ListCampaignsArgs,
    ) -> GatewayResult<PageResponse<Campaign>> {
        unimplemented()
    }

    async fn inspect_campaign(&self, _campaign_id: i64) -> GatewayResult<CampaignInspection> {
        unimplemented()
    }

    async fn assign_user_to_campaign(&self, _args: AssignUserToCampaignArgs) -> GatewayResult<()> {
        unimplemented()
    }

    async fn add_user_to_campaign(&self, _args: CampaignMemberArgs) -> GatewayResult<()> {
        unimplemented()
    }

    async fn remove_user_from_campaign(&self, _args: CampaignMemberArgs) -> GatewayResult<()> {
        unimplemented()
    }

    async fn steps_for_campaign(&self, _campaign_id: i64) -> GatewayResult<Vec<CampaignStepFull>> {
        unimplemented()
    }
}

#[async_trait]
impl StepGateway for UnimplementedGateway {
    async fn add_step(&self, _args: AddStepArgs) -> GatewayResult<CampaignStep> {
        unimplemented()
    }

    async fn activate_step(&self, _step_id: i64) -> GatewayResult<()> {
        unimplemented()
    }

    async fn inspect_step(&self, _step_id: i64) -> GatewayResult<StepInspection> {
        unimplemented()
    }

    async fn assign_user_to_step(&self, _args: AssignUserToStepArgs) -> GatewayResult<()> {
        unimplemented()
    }

    async fn list_steps(
        &self,
        _args: ListStepsArgs,
    ) -> GatewayResult<PageResponse<CampaignStepFull>> {
        unimplemented()
    }
}

#[async_trait]
impl ActivityGateway for UnimplementedGateway {
    async fn create_activity(&self, _args: CreateActivityArgs) -> GatewayResult<Activity> {
        unimplemented()
    }

    async fn get_activity(&self, _activity_id: i64) -> GatewayResult<Activity> {
        unimplemented()
    }

    async fn list_activities(
        &self,
        _args: ListActivitiesArgs,
    ) -> GatewayResult<PageResponse<Activity>> {
        unimplemented()
    }

    async fn inspect_activity(&self, _activity_id: i64) -> GatewayResult<ActivityInspection> {
        unimplemented()
    }

    async fn open_activity(&self, _activity_id: i64) -> GatewayResult<()> {
        unimplemented()
    }

    async fn close_activity(&self, _activity_id: i64) -> GatewayResult<()> {
        unimplemented()
    }

    async fn add_user_to_activity(&self, _args: ActivityMemberArgs) -> GatewayResult<()> {
        unimplemented()
    }

    async fn remove_user_from_activity(&self, _args: ActivityMemberArgs) -> GatewayResult<()> {
        unimplemented()
    }
}
