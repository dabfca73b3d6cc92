use serde::{Deserialize, Serialize};

/// Account role as assigned by the backend.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    CampaignManager,
    StepManager,
    ActivityExecutor,
    User,
}

impl Role {
    /// Human-readable form for display surfaces.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Admin => "Administrator",
            Self::CampaignManager => "Campaign Manager",
            Self::StepManager => "Step Manager",
            Self::ActivityExecutor => "Activity Executor",
            Self::User => "User",
        }
    }
}

/// Capability flags on an identity. Drives presentational gating of UI
/// affordances only; the backend is the authority for access control.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Privilege {
    ManageUsers,
    ManageThemes,
    ManageCampaigns,
    ManageSteps,
    ViewAssignedCampaigns,
    ViewAssignedSteps,
    ViewAssignedActivities,
    ViewAvailableActivities,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub name: String,
    pub role: Role,
}

/// The authenticated principal, as returned by the identity operation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IdentityUser {
    pub id: i64,
    pub username: String,
    pub name: String,
    pub role: Role,
    pub privileges: Vec<Privilege>,
}

impl IdentityUser {
    #[must_use]
    pub fn has_privilege(&self, privilege: Privilege) -> bool {
        self.privileges.contains(&privilege)
    }
}
