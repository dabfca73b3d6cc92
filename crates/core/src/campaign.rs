use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    pub id: i64,
    pub name: String,
    pub theme_id: i64,
}

/// A campaign plus caller-specific context from the inspect operation.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CampaignInspection {
    pub campaign: Campaign,
    #[serde(default)]
    pub assigned_user_id: Option<i64>,
}
