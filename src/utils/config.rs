use crate::services::ergast::ERGAST_BASE_URL;
use crate::services::images::OPENF1_DRIVERS_URL;

#[derive(Debug, Clone)]
pub struct Config {
    pub ergast_base_url: String,
    pub openf1_drivers_url: String,
}

impl Config {
    /// Reads the upstream endpoints from the environment, keeping the
    /// production defaults when unset.
    pub fn init() -> Self {
        Config {
            ergast_base_url: std::env::var("ERGAST_BASE_URL")
                .unwrap_or_else(|_| ERGAST_BASE_URL.to_string()),
            openf1_drivers_url: std::env::var("OPENF1_DRIVERS_URL")
                .unwrap_or_else(|_| OPENF1_DRIVERS_URL.to_string()),
        }
    }
}
