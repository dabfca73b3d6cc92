//! Gateway contract traits
//!
//! One async trait per backend domain, combined by the [`Gateway`]
//! supertrait so call sites can hold a single trait object while tests
//! fake only the domain they exercise.

pub mod activities;
pub mod auth;
pub mod campaigns;
pub mod steps;
pub mod themes;
pub mod users;

pub use activities::{ActivityGateway, ActivityMemberArgs, CreateActivityArgs, ListActivitiesArgs};
pub use auth::{AuthGateway, LoginArgs, RegisterArgs};
pub use campaigns::{
    AssignUserToCampaignArgs, CampaignGateway, CampaignMemberArgs, CreateCampaignArgs,
    ListCampaignsArgs,
};
pub use steps::{AddStepArgs, AssignUserToStepArgs, ListStepsArgs, StepGateway};
pub use themes::{CreateThemeArgs, ListThemesArgs, ThemeGateway, UpdateThemeArgs};
pub use users::{ChangePasswordArgs, ChangeRoleArgs, ListUsersArgs, QueryUsersArgs, UserGateway};

/// The full gateway contract.
pub trait Gateway:
    AuthGateway + UserGateway + ThemeGateway + CampaignGateway + StepGateway + ActivityGateway
{
}

impl<G> Gateway for G where
    G: AuthGateway + UserGateway + ThemeGateway + CampaignGateway + StepGateway + ActivityGateway
{
}
