use serde::Deserialize;

/// One driver record from the telemetry provider's drivers feed.
#[derive(Debug, Clone, Deserialize)]
pub struct OpenF1Driver {
    pub driver_number: Option<u32>,
    pub name_acronym: Option<String>,
    pub full_name: Option<String>,
    pub team_name: Option<String>,
    pub headshot_url: Option<String>,
}
