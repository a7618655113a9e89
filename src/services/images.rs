use std::collections::HashMap;

use tokio::sync::OnceCell;
use tracing::{info, warn};

use crate::models::error::ApiError;
use crate::models::openf1::OpenF1Driver;

/// Drivers feed of the telemetry provider, scoped to the latest session.
pub const OPENF1_DRIVERS_URL: &str = "https://api.openf1.org/v1/drivers?session_key=latest";

/// Served when neither the driver code nor the car number is mapped.
pub const DRIVER_FALLBACK_IMAGE_URL: &str =
    "https://media.formula1.com/d_driver_fallback_image.png/content/dam/fom-website/drivers/";

/// Resolves drivers to headshot URLs via the telemetry provider.
///
/// The lookup map is fetched at most once per instance: the first caller
/// starts the request, concurrent callers await that same in-flight
/// request, and the outcome is kept for the lifetime of the instance.
/// A failed fetch settles as an empty map and is not retried, so lookups
/// degrade to the fallback image rather than erroring.
#[derive(Debug)]
pub struct DriverImageCache {
    http: reqwest::Client,
    endpoint: String,
    images: OnceCell<HashMap<String, String>>,
}

impl DriverImageCache {
    pub fn new(http: reqwest::Client) -> Self {
        Self::with_endpoint(http, OPENF1_DRIVERS_URL)
    }

    /// Cache against an alternative endpoint, used by tests.
    pub fn with_endpoint(http: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            http,
            endpoint: endpoint.into(),
            images: OnceCell::new(),
        }
    }

    /// Look up a driver photo URL. The short code takes precedence over
    /// the car number; drivers known by neither get the fallback image.
    /// Never fails.
    pub async fn resolve(&self, code: Option<&str>, number: Option<&str>) -> String {
        let images = self.images.get_or_init(|| self.fetch_images()).await;
        code.and_then(|code| images.get(code))
            .or_else(|| number.and_then(|number| images.get(number)))
            .cloned()
            .unwrap_or_else(|| DRIVER_FALLBACK_IMAGE_URL.to_string())
    }

    async fn fetch_images(&self) -> HashMap<String, String> {
        match self.try_fetch_images().await {
            Ok(images) => {
                info!("driver image map populated with {} keys", images.len());
                images
            }
            Err(err) => {
                warn!("failed to fetch driver images, keeping empty map: {err}");
                HashMap::new()
            }
        }
    }

    async fn try_fetch_images(&self) -> Result<HashMap<String, String>, ApiError> {
        let res = self.http.get(&self.endpoint).send().await?;
        let status = res.status();
        if !status.is_success() {
            return Err(ApiError::UpstreamStatus {
                status,
                url: self.endpoint.clone(),
            });
        }
        let body = res.text().await?;
        let drivers: Vec<OpenF1Driver> = serde_json::from_str(&body)?;

        // Each driver is keyed by short code and by car number. Records
        // missing either the number or the headshot are unusable.
        let mut images = HashMap::new();
        for driver in drivers {
            let (Some(number), Some(headshot)) = (driver.driver_number, driver.headshot_url)
            else {
                continue;
            };
            let url = strip_transform_suffix(&headshot);
            if let Some(acronym) = driver.name_acronym {
                images.insert(acronym, url.clone());
            }
            images.insert(number.to_string(), url);
        }
        Ok(images)
    }
}

/// Headshot URLs carry a `.transform/...` resizing segment that points at
/// a downscaled rendition; everything from that segment on is dropped.
fn strip_transform_suffix(url: &str) -> String {
    match url.find(".transform/") {
        Some(idx) => url[..idx].to_string(),
        None => url.to_string(),
    }
}
