use serde::{Deserialize, Serialize};

use crate::AccessPrivileges;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivityState {
    Open,
    InProgress,
    Closed,
}

/// An activity scheduled within a campaign step. Dates are epoch millis.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub step_id: i64,
    pub start_date: i64,
    pub end_date: i64,
    pub state: ActivityState,
}

/// An activity plus caller-specific context from the inspect operation.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ActivityInspection {
    pub activity: Activity,
    #[serde(default)]
    pub assigned_user_id: Option<i64>,
    #[serde(default)]
    pub access_privileges: AccessPrivileges,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_wire_shape() {
        let activity: Activity = serde_json::from_str(
            r#"{
                "id": 3,
                "name": "Door knocking",
                "description": "Evening round",
                "stepId": 12,
                "startDate": 1754000000000,
                "endDate": 1754100000000,
                "state": "IN_PROGRESS"
            }"#,
        )
        .unwrap();
        assert_eq!(activity.step_id, 12);
        assert_eq!(activity.state, ActivityState::InProgress);
    }

    #[test]
    fn test_inspection_defaults() {
        let inspection: ActivityInspection = serde_json::from_str(
            r#"{"activity": {"id": 1, "name": "a", "description": "", "stepId": 2,
                 "startDate": 0, "endDate": 0, "state": "OPEN"}}"#,
        )
        .unwrap();
        assert_eq!(inspection.assigned_user_id, None);
        assert!(!inspection.access_privileges.assign_staff);
    }
}
