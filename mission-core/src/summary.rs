use serde::{Deserialize, Serialize};

/// One calendar bucket of mission activity, as returned by the dashboard
/// summary endpoint. The server emits buckets in date-ascending order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityPoint {
    pub date: String,
    pub created: i64,
    pub joined: i64,
    pub completed: i64,
    pub active: i64,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub created_missions_count: i64,
    pub joined_missions_count: i64,
    pub active_missions_count: i64,
    pub completed_missions_count: i64,
    pub chart_data: Vec<ActivityPoint>,
}
