use serde::{Deserialize, Serialize};

use crate::models::driver::Driver;
use crate::models::standings::ConstructorStanding;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Constructor {
    #[serde(rename = "constructorId")]
    pub constructor_id: String,
    pub url: String,
    pub name: String,
    pub nationality: String,
}

/// A constructor joined with its standings entry and driver lineup for
/// the requested season.
#[derive(Debug, Clone, Serialize)]
pub struct ConstructorDetails {
    pub constructor: Constructor,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub standings: Option<ConstructorStanding>,
    pub drivers: Vec<Driver>,
}
