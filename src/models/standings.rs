use serde::{Deserialize, Serialize};

use crate::models::constructor::Constructor;
use crate::models::driver::Driver;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriverStanding {
    // Excluded drivers carry no position upstream.
    #[serde(default)]
    pub position: String,
    pub points: String,
    pub wins: String,
    #[serde(rename = "Driver")]
    pub driver: Driver,
    #[serde(rename = "Constructors", default)]
    pub constructors: Vec<Constructor>,
}

impl DriverStanding {
    /// Name of the entrant constructor, or "N/A" when none is listed.
    pub fn constructor_name(&self) -> &str {
        self.constructors
            .first()
            .map_or("N/A", |constructor| constructor.name.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConstructorStanding {
    #[serde(default)]
    pub position: String,
    pub points: String,
    pub wins: String,
    #[serde(rename = "Constructor")]
    pub constructor: Constructor,
}
