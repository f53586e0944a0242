use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Roles a chief can hand out inside a workspace.
pub const AVAILABLE_ROLES: [&str; 7] = [
    "Member",
    "Tactician",
    "Combatant",
    "Support",
    "Sniper",
    "Tank",
    "Healer",
];

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Member {
    pub id: i32,
    pub display_name: String,
    pub avatar_url: String,
    pub mission_success_count: i64,
    pub mission_join_count: i64,
    pub bio: Option<String>,
    pub role: String,
}

/// The workspace members response: the crew plus capacity.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CrewList {
    pub members: Vec<Member>,
    pub count: usize,
    pub max_count: i32,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Task {
    pub id: i32,
    pub mission_id: i32,
    pub member_id: Option<i32>,
    pub title: String,
    pub description: Option<String>,
    pub start_date: Option<NaiveDateTime>,
    pub end_date: Option<NaiveDateTime>,
    pub priority: String,
    pub status: String,
    pub created_by: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub has_submission: bool,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CreateTask {
    pub title: String,
    pub description: Option<String>,
    pub member_id: Option<i32>,
    pub priority: Option<String>,
    pub start_date: Option<NaiveDateTime>,
    pub end_date: Option<NaiveDateTime>,
}

/// Display name for a member id, for filter chips and task rows.
pub fn member_name(members: &[Member], id: i32) -> String {
    members
        .iter()
        .find(|m| m.id == id)
        .map(|m| m.display_name.clone())
        .unwrap_or_else(|| "Unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(id: i32, display_name: &str) -> Member {
        Member {
            id,
            display_name: display_name.into(),
            avatar_url: String::new(),
            mission_success_count: 0,
            mission_join_count: 0,
            bio: None,
            role: "Member".into(),
        }
    }

    #[test]
    fn member_name_falls_back_to_unknown() {
        let members = [member(7, "Ana"), member(9, "Rui")];
        assert_eq!(member_name(&members, 9), "Rui");
        assert_eq!(member_name(&members, 12), "Unknown");
    }
}
