use reqwest::Client;

use crate::services::ergast::ErgastClient;
use crate::services::images::DriverImageCache;
use crate::utils::config::Config;

pub struct AppState {
    pub config: Config,
    pub ergast: ErgastClient,
    pub driver_images: DriverImageCache,
}

impl AppState {
    /// Builds the shared state, reusing one HTTP client across both
    /// upstream services.
    pub fn from_config(config: Config, http_client: Client) -> Self {
        AppState {
            ergast: ErgastClient::with_base_url(http_client.clone(), config.ergast_base_url.clone()),
            driver_images: DriverImageCache::with_endpoint(
                http_client,
                config.openf1_drivers_url.clone(),
            ),
            config,
        }
    }
}
