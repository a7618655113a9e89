use serde::{Deserialize, Serialize};

use crate::models::standings::DriverStanding;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Driver {
    #[serde(rename = "driverId")]
    pub driver_id: String,
    #[serde(rename = "permanentNumber", skip_serializing_if = "Option::is_none")]
    pub permanent_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    pub url: String,
    #[serde(rename = "givenName")]
    pub given_name: String,
    #[serde(rename = "familyName")]
    pub family_name: String,
    #[serde(rename = "dateOfBirth")]
    pub date_of_birth: String,
    pub nationality: String,
}

/// A driver joined with their standings entry for the requested season.
/// The standing is absent for drivers without a classified result.
#[derive(Debug, Clone, Serialize)]
pub struct DriverDetails {
    pub driver: Driver,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub standings: Option<DriverStanding>,
}
