use serde::{Deserialize, Serialize};

use crate::models::circuit::Circuit;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Race {
    pub season: String,
    pub round: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(rename = "raceName")]
    pub race_name: String,
    #[serde(rename = "Circuit")]
    pub circuit: Circuit,
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
}
