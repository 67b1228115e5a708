use serde::{Deserialize, Serialize};

// Activity record as served by /activities. The activity's name is not a
// field; it is the key in the store's outer map.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: i64,
    pub participants: Vec<String>,
}
