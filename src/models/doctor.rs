use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Doctor {
    pub id: i64,
    pub name: String,
    pub specialization: String,
    pub location: String,
    pub image: String,
    pub available: bool,
    pub time_slots: Vec<String>,
}
