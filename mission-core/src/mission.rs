use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Mission {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub status: String,
    pub chief_id: i32,
    pub chief_display_name: String,
    pub member_count: i64,
    pub max_members: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub is_joined: bool,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AddMission {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct EditMission {
    pub name: Option<String>,
    pub description: Option<String>,
    pub max_members: Option<i32>,
    pub status: Option<String>,
}

/// Browse-page constraints, both optional. Statuses the server understands.
pub const MISSION_STATUSES: [&str; 3] = ["Open", "InProgress", "Completed"];

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MissionFilter {
    pub name: Option<String>,
    pub status: Option<String>,
}

impl MissionFilter {
    /// The `name=…&status=…` query suffix for the filter endpoint. A blank
    /// name is skipped entirely, matching what the server expects.
    pub fn query_string(&self) -> String {
        let mut params = Vec::new();

        if let Some(name) = &self.name {
            if !name.trim().is_empty() {
                params.push(format!("name={name}"));
            }
        }
        if let Some(status) = &self.status {
            params.push(format!("status={status}"));
        }

        params.join("&")
    }
}

/// Missions worth offering to a signed-in browser: not their own and not
/// already joined. Anonymous browsing sees everything.
pub fn browseable(missions: Vec<Mission>, user_id: Option<i32>) -> Vec<Mission> {
    match user_id {
        Some(id) => missions
            .into_iter()
            .filter(|m| m.chief_id != id && !m.is_joined)
            .collect(),
        None => missions,
    }
}

/// Normalizes a new-mission form before it goes over the wire: the name is
/// trimmed and falls back to "untitle", a blank description is dropped.
pub fn clean_new_mission(mission: AddMission) -> AddMission {
    let name = mission.name.trim();
    AddMission {
        name: if name.is_empty() {
            "untitle".to_string()
        } else {
            name.to_string()
        },
        description: mission
            .description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(ToString::to_string),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn mission(id: i32, chief_id: i32, is_joined: bool) -> Mission {
        let at = Utc.timestamp_opt(1_767_000_000, 0).single().expect("timestamp");
        Mission {
            id,
            name: format!("mission-{id}"),
            description: None,
            status: "Open".into(),
            chief_id,
            chief_display_name: "chief".into(),
            member_count: 1,
            max_members: 5,
            created_at: at,
            updated_at: at,
            is_joined,
        }
    }

    #[test]
    fn query_string_skips_blank_name() {
        let filter = MissionFilter {
            name: Some("   ".into()),
            status: Some("Open".into()),
        };
        assert_eq!(filter.query_string(), "status=Open");
    }

    #[test]
    fn query_string_joins_both_params() {
        let filter = MissionFilter {
            name: Some("heist".into()),
            status: Some("Open".into()),
        };
        assert_eq!(filter.query_string(), "name=heist&status=Open");
        assert_eq!(MissionFilter::default().query_string(), "");
    }

    #[test]
    fn browseable_hides_own_and_joined_missions() {
        let missions = vec![mission(1, 7, false), mission(2, 9, true), mission(3, 9, false)];

        let visible = browseable(missions.clone(), Some(7));
        let ids: Vec<i32> = visible.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![3]);

        let anonymous = browseable(missions, None);
        assert_eq!(anonymous.len(), 3);
    }

    #[test]
    fn clean_new_mission_trims_and_defaults() {
        let cleaned = clean_new_mission(AddMission {
            name: "  ".into(),
            description: Some("  ".into()),
        });
        assert_eq!(cleaned.name, "untitle");
        assert_eq!(cleaned.description, None);

        let cleaned = clean_new_mission(AddMission {
            name: " Bank Job ".into(),
            description: Some(" the plan ".into()),
        });
        assert_eq!(cleaned.name, "Bank Job");
        assert_eq!(cleaned.description.as_deref(), Some("the plan"));
    }
}
