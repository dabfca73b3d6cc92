use serde::{Deserialize, Serialize};

/// A campaign step as returned from creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CampaignStep {
    pub id: i64,
    pub name: String,
}

/// A campaign step with its activation flag, as returned by list reads.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CampaignStepFull {
    pub id: i64,
    pub name: String,
    pub active: bool,
}

/// Caller-specific capability flags carried on inspect responses.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
pub struct AccessPrivileges {
    #[serde(rename = "ASSIGN_STAFF", default)]
    pub assign_staff: bool,
}

/// A step plus caller-specific context from the inspect operation.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StepInspection {
    pub step: CampaignStepFull,
    #[serde(default)]
    pub assigned_user_id: Option<i64>,
    #[serde(default)]
    pub access_privileges: AccessPrivileges,
}
