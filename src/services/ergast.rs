use chrono::{Datelike, Utc};
use tracing::debug;

use crate::models::circuit::Circuit;
use crate::models::constructor::{Constructor, ConstructorDetails};
use crate::models::driver::{Driver, DriverDetails};
use crate::models::ergast::{ErgastResponse, MrData};
use crate::models::error::ApiError;
use crate::models::race::Race;
use crate::models::standings::{ConstructorStanding, DriverStanding};

/// Base endpoint of the racing-data provider.
pub const ERGAST_BASE_URL: &str = "https://api.jolpi.ca/ergast/f1";

/// Season used when a request does not name one.
pub const DEFAULT_SEASON: &str = "2024";

/// First championship year the provider has data for.
const FIRST_SEASON: i32 = 1950;

/// Client for the season-scoped entity and standings resources of the
/// racing-data provider.
///
/// Operations take the season as a string (historical seasons are valid
/// input) and return flat entities with the `MRData` envelope already
/// unwrapped. A season with no data yields an empty list or `None`;
/// only transport failures, non-success statuses and undecodable bodies
/// surface as errors.
#[derive(Debug, Clone)]
pub struct ErgastClient {
    http: reqwest::Client,
    base_url: String,
}

impl ErgastClient {
    pub fn new(http: reqwest::Client) -> Self {
        Self::with_base_url(http, ERGAST_BASE_URL)
    }

    /// Client against an alternative endpoint, used by tests.
    pub fn with_base_url(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    async fn fetch(&self, path: &str) -> Result<MrData, ApiError> {
        let url = format!("{}/{path}", self.base_url);
        debug!("GET {url}");
        let res = self.http.get(&url).send().await?;
        let status = res.status();
        if !status.is_success() {
            return Err(ApiError::UpstreamStatus { status, url });
        }
        let body = res.text().await?;
        let envelope: ErgastResponse = serde_json::from_str(&body)?;
        Ok(envelope.mr_data)
    }

    /// All drivers entered in a season.
    pub async fn drivers(&self, season: &str) -> Result<Vec<Driver>, ApiError> {
        Ok(self.fetch(&format!("{season}/drivers.json")).await?.drivers())
    }

    /// A single driver joined with their standings entry. The identity
    /// and standings requests run in parallel and either failure fails
    /// the whole lookup. An unknown driver id yields `None`; a known
    /// driver without a standings entry still yields details.
    pub async fn driver_details(
        &self,
        season: &str,
        driver_id: &str,
    ) -> Result<Option<DriverDetails>, ApiError> {
        let (driver_data, standings_data) = tokio::try_join!(
            self.fetch(&format!("{season}/drivers/{driver_id}.json")),
            self.fetch(&format!("{season}/drivers/{driver_id}/driverStandings.json")),
        )?;

        let Some(driver) = driver_data.drivers().into_iter().next() else {
            return Ok(None);
        };
        let standings = standings_data
            .first_standings_list()
            .and_then(|list| list.driver_standings.into_iter().next());

        Ok(Some(DriverDetails { driver, standings }))
    }

    /// All constructors entered in a season.
    pub async fn constructors(&self, season: &str) -> Result<Vec<Constructor>, ApiError> {
        Ok(self
            .fetch(&format!("{season}/constructors.json"))
            .await?
            .constructors())
    }

    /// A single constructor joined with its standings entry and driver
    /// lineup, fetched as three parallel requests.
    pub async fn constructor_details(
        &self,
        season: &str,
        constructor_id: &str,
    ) -> Result<Option<ConstructorDetails>, ApiError> {
        let (constructor_data, standings_data, drivers_data) = tokio::try_join!(
            self.fetch(&format!("{season}/constructors/{constructor_id}.json")),
            self.fetch(&format!(
                "{season}/constructors/{constructor_id}/constructorStandings.json"
            )),
            self.fetch(&format!("{season}/constructors/{constructor_id}/drivers.json")),
        )?;

        let Some(constructor) = constructor_data.constructors().into_iter().next() else {
            return Ok(None);
        };
        let standings = standings_data
            .first_standings_list()
            .and_then(|list| list.constructor_standings.into_iter().next());

        Ok(Some(ConstructorDetails {
            constructor,
            standings,
            drivers: drivers_data.drivers(),
        }))
    }

    /// Championship order for a season, as the provider ranks it.
    /// Seasons without standings yield an empty list.
    pub async fn driver_standings(&self, season: &str) -> Result<Vec<DriverStanding>, ApiError> {
        Ok(self
            .fetch(&format!("{season}/driverStandings.json"))
            .await?
            .first_standings_list()
            .map(|list| list.driver_standings)
            .unwrap_or_default())
    }

    pub async fn constructor_standings(
        &self,
        season: &str,
    ) -> Result<Vec<ConstructorStanding>, ApiError> {
        Ok(self
            .fetch(&format!("{season}/constructorStandings.json"))
            .await?
            .first_standings_list()
            .map(|list| list.constructor_standings)
            .unwrap_or_default())
    }

    /// All circuits raced in a season.
    pub async fn circuits(&self, season: &str) -> Result<Vec<Circuit>, ApiError> {
        Ok(self.fetch(&format!("{season}/circuits.json")).await?.circuits())
    }

    pub async fn circuit_details(
        &self,
        season: &str,
        circuit_id: &str,
    ) -> Result<Option<Circuit>, ApiError> {
        Ok(self
            .fetch(&format!("{season}/circuits/{circuit_id}.json"))
            .await?
            .circuits()
            .into_iter()
            .next())
    }

    /// The race calendar of a season.
    pub async fn race_schedule(&self, season: &str) -> Result<Vec<Race>, ApiError> {
        Ok(self.fetch(&format!("{season}.json")).await?.races())
    }
}

/// Selectable seasons, newest first, from the current year down to the
/// first championship. Derived locally; no upstream call.
pub fn available_seasons() -> Vec<String> {
    let current = Utc::now().year();
    (FIRST_SEASON..=current).rev().map(|year| year.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> ErgastClient {
        ErgastClient::with_base_url(reqwest::Client::new(), server.uri())
    }

    fn driver_json(driver_id: &str, code: &str, number: &str) -> serde_json::Value {
        json!({
            "driverId": driver_id,
            "permanentNumber": number,
            "code": code,
            "url": format!("http://en.wikipedia.org/wiki/{driver_id}"),
            "givenName": "Max",
            "familyName": "Verstappen",
            "dateOfBirth": "1997-09-30",
            "nationality": "Dutch"
        })
    }

    fn constructor_json(constructor_id: &str, name: &str) -> serde_json::Value {
        json!({
            "constructorId": constructor_id,
            "url": format!("http://en.wikipedia.org/wiki/{name}"),
            "name": name,
            "nationality": "Austrian"
        })
    }

    fn driver_table(drivers: Vec<serde_json::Value>) -> serde_json::Value {
        json!({"MRData": {"DriverTable": {"Drivers": drivers}}})
    }

    fn constructor_table(constructors: Vec<serde_json::Value>) -> serde_json::Value {
        json!({"MRData": {"ConstructorTable": {"Constructors": constructors}}})
    }

    fn driver_standings_table(standings: serde_json::Value) -> serde_json::Value {
        json!({
            "MRData": {
                "StandingsTable": {
                    "StandingsLists": [{"DriverStandings": standings}]
                }
            }
        })
    }

    async fn mount_json(server: &MockServer, route: &str, body: serde_json::Value) {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn drivers_unwraps_the_envelope() {
        let server = MockServer::start().await;
        mount_json(
            &server,
            "/2024/drivers.json",
            driver_table(vec![
                driver_json("max_verstappen", "VER", "33"),
                driver_json("perez", "PER", "11"),
            ]),
        )
        .await;

        let drivers = client_for(&server).drivers("2024").await.unwrap();

        assert_eq!(drivers.len(), 2);
        assert_eq!(drivers[0].driver_id, "max_verstappen");
        assert_eq!(drivers[1].code.as_deref(), Some("PER"));
    }

    #[tokio::test]
    async fn drivers_with_missing_table_is_empty() {
        let server = MockServer::start().await;
        mount_json(&server, "/2024/drivers.json", json!({"MRData": {}})).await;

        let drivers = client_for(&server).drivers("2024").await.unwrap();

        assert!(drivers.is_empty());
    }

    #[tokio::test]
    async fn driver_details_joins_identity_and_standing() {
        let server = MockServer::start().await;
        mount_json(
            &server,
            "/2024/drivers/max_verstappen.json",
            driver_table(vec![driver_json("max_verstappen", "VER", "33")]),
        )
        .await;
        mount_json(
            &server,
            "/2024/drivers/max_verstappen/driverStandings.json",
            driver_standings_table(json!([{
                "position": "1",
                "points": "437",
                "wins": "9",
                "Driver": driver_json("max_verstappen", "VER", "33"),
                "Constructors": [constructor_json("red_bull", "Red Bull")]
            }])),
        )
        .await;

        let details = client_for(&server)
            .driver_details("2024", "max_verstappen")
            .await
            .unwrap()
            .unwrap();

        assert_eq!(details.driver.driver_id, "max_verstappen");
        let standing = details.standings.unwrap();
        assert_eq!(standing.position, "1");
        assert_eq!(standing.constructor_name(), "Red Bull");
    }

    #[tokio::test]
    async fn driver_details_without_standing_entry_still_resolves() {
        let server = MockServer::start().await;
        mount_json(
            &server,
            "/2024/drivers/max_verstappen.json",
            driver_table(vec![driver_json("max_verstappen", "VER", "33")]),
        )
        .await;
        mount_json(
            &server,
            "/2024/drivers/max_verstappen/driverStandings.json",
            json!({"MRData": {"StandingsTable": {"StandingsLists": []}}}),
        )
        .await;

        let details = client_for(&server)
            .driver_details("2024", "max_verstappen")
            .await
            .unwrap()
            .unwrap();

        assert_eq!(details.driver.driver_id, "max_verstappen");
        assert!(details.standings.is_none());
    }

    #[tokio::test]
    async fn driver_details_unknown_id_is_none() {
        let server = MockServer::start().await;
        mount_json(&server, "/2024/drivers/nobody.json", driver_table(vec![])).await;
        mount_json(
            &server,
            "/2024/drivers/nobody/driverStandings.json",
            json!({"MRData": {"StandingsTable": {"StandingsLists": []}}}),
        )
        .await;

        let details = client_for(&server)
            .driver_details("2024", "nobody")
            .await
            .unwrap();

        assert!(details.is_none());
    }

    #[tokio::test]
    async fn driver_details_fails_when_either_request_fails() {
        let server = MockServer::start().await;
        mount_json(
            &server,
            "/2024/drivers/max_verstappen.json",
            driver_table(vec![driver_json("max_verstappen", "VER", "33")]),
        )
        .await;
        Mock::given(method("GET"))
            .and(path("/2024/drivers/max_verstappen/driverStandings.json"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let result = client_for(&server)
            .driver_details("2024", "max_verstappen")
            .await;

        assert!(matches!(
            result,
            Err(ApiError::UpstreamStatus { status, .. }) if status == 500
        ));
    }

    #[tokio::test]
    async fn constructor_details_joins_three_requests() {
        let server = MockServer::start().await;
        mount_json(
            &server,
            "/2024/constructors/red_bull.json",
            constructor_table(vec![constructor_json("red_bull", "Red Bull")]),
        )
        .await;
        mount_json(
            &server,
            "/2024/constructors/red_bull/constructorStandings.json",
            json!({
                "MRData": {
                    "StandingsTable": {
                        "StandingsLists": [{
                            "ConstructorStandings": [{
                                "position": "3",
                                "points": "589",
                                "wins": "9",
                                "Constructor": constructor_json("red_bull", "Red Bull")
                            }]
                        }]
                    }
                }
            }),
        )
        .await;
        mount_json(
            &server,
            "/2024/constructors/red_bull/drivers.json",
            driver_table(vec![
                driver_json("max_verstappen", "VER", "33"),
                driver_json("perez", "PER", "11"),
            ]),
        )
        .await;

        let details = client_for(&server)
            .constructor_details("2024", "red_bull")
            .await
            .unwrap()
            .unwrap();

        assert_eq!(details.constructor.constructor_id, "red_bull");
        assert_eq!(details.standings.unwrap().position, "3");
        assert_eq!(details.drivers.len(), 2);
    }

    #[tokio::test]
    async fn constructor_details_unknown_id_is_none() {
        let server = MockServer::start().await;
        mount_json(&server, "/2024/constructors/nobody.json", constructor_table(vec![])).await;
        mount_json(
            &server,
            "/2024/constructors/nobody/constructorStandings.json",
            json!({"MRData": {"StandingsTable": {"StandingsLists": []}}}),
        )
        .await;
        mount_json(&server, "/2024/constructors/nobody/drivers.json", driver_table(vec![])).await;

        let details = client_for(&server)
            .constructor_details("2024", "nobody")
            .await
            .unwrap();

        assert!(details.is_none());
    }

    #[tokio::test]
    async fn constructor_details_fails_fast_on_lineup_failure() {
        let server = MockServer::start().await;
        mount_json(
            &server,
            "/2024/constructors/red_bull.json",
            constructor_table(vec![constructor_json("red_bull", "Red Bull")]),
        )
        .await;
        mount_json(
            &server,
            "/2024/constructors/red_bull/constructorStandings.json",
            json!({"MRData": {"StandingsTable": {"StandingsLists": []}}}),
        )
        .await;
        Mock::given(method("GET"))
            .and(path("/2024/constructors/red_bull/drivers.json"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let result = client_for(&server).constructor_details("2024", "red_bull").await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn driver_standings_preserve_upstream_order() {
        let server = MockServer::start().await;
        mount_json(
            &server,
            "/2024/driverStandings.json",
            driver_standings_table(json!([
                {
                    "position": "1",
                    "points": "437",
                    "wins": "9",
                    "Driver": driver_json("max_verstappen", "VER", "33"),
                    "Constructors": [constructor_json("red_bull", "Red Bull")]
                },
                {
                    "position": "2",
                    "points": "374",
                    "wins": "4",
                    "Driver": driver_json("norris", "NOR", "4"),
                    "Constructors": [constructor_json("mclaren", "McLaren")]
                }
            ])),
        )
        .await;

        let standings = client_for(&server).driver_standings("2024").await.unwrap();

        assert_eq!(standings.len(), 2);
        assert_eq!(standings[0].position, "1");
        assert_eq!(standings[1].position, "2");
    }

    #[tokio::test]
    async fn driver_standings_for_a_season_without_data_is_empty() {
        let server = MockServer::start().await;
        mount_json(
            &server,
            "/1887/driverStandings.json",
            json!({"MRData": {"StandingsTable": {"StandingsLists": []}}}),
        )
        .await;

        let standings = client_for(&server).driver_standings("1887").await.unwrap();

        assert!(standings.is_empty());
    }

    #[tokio::test]
    async fn constructor_standings_unwrap_the_first_list() {
        let server = MockServer::start().await;
        mount_json(
            &server,
            "/2024/constructorStandings.json",
            json!({
                "MRData": {
                    "StandingsTable": {
                        "StandingsLists": [{
                            "ConstructorStandings": [{
                                "position": "1",
                                "points": "666",
                                "wins": "6",
                                "Constructor": constructor_json("mclaren", "McLaren")
                            }]
                        }]
                    }
                }
            }),
        )
        .await;

        let standings = client_for(&server).constructor_standings("2024").await.unwrap();

        assert_eq!(standings.len(), 1);
        assert_eq!(standings[0].constructor.constructor_id, "mclaren");
    }

    #[tokio::test]
    async fn circuit_details_takes_the_first_match() {
        let server = MockServer::start().await;
        mount_json(
            &server,
            "/2024/circuits/monaco.json",
            json!({
                "MRData": {
                    "CircuitTable": {
                        "Circuits": [{
                            "circuitId": "monaco",
                            "url": "http://en.wikipedia.org/wiki/Circuit_de_Monaco",
                            "circuitName": "Circuit de Monaco",
                            "Location": {
                                "lat": "43.7347",
                                "long": "7.42056",
                                "locality": "Monte-Carlo",
                                "country": "Monaco"
                            }
                        }]
                    }
                }
            }),
        )
        .await;

        let circuit = client_for(&server)
            .circuit_details("2024", "monaco")
            .await
            .unwrap()
            .unwrap();

        assert_eq!(circuit.circuit_id, "monaco");
        assert_eq!(circuit.location.country, "Monaco");
    }

    #[tokio::test]
    async fn circuit_details_absent_is_none() {
        let server = MockServer::start().await;
        mount_json(
            &server,
            "/2024/circuits/nowhere.json",
            json!({"MRData": {"CircuitTable": {"Circuits": []}}}),
        )
        .await;

        let circuit = client_for(&server).circuit_details("2024", "nowhere").await.unwrap();

        assert!(circuit.is_none());
    }

    #[tokio::test]
    async fn race_schedule_unwraps_the_race_table() {
        let server = MockServer::start().await;
        mount_json(
            &server,
            "/2024.json",
            json!({
                "MRData": {
                    "RaceTable": {
                        "Races": [{
                            "season": "2024",
                            "round": "1",
                            "url": "http://en.wikipedia.org/wiki/2024_Bahrain_Grand_Prix",
                            "raceName": "Bahrain Grand Prix",
                            "Circuit": {
                                "circuitId": "bahrain",
                                "circuitName": "Bahrain International Circuit",
                                "Location": {"locality": "Sakhir", "country": "Bahrain"}
                            },
                            "date": "2024-03-02",
                            "time": "15:00:00Z"
                        }]
                    }
                }
            }),
        )
        .await;

        let races = client_for(&server).race_schedule("2024").await.unwrap();

        assert_eq!(races.len(), 1);
        assert_eq!(races[0].race_name, "Bahrain Grand Prix");
        assert_eq!(races[0].circuit.circuit_id, "bahrain");
    }

    #[tokio::test]
    async fn upstream_error_status_is_surfaced() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/2024/drivers.json"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let result = client_for(&server).drivers("2024").await;

        assert!(matches!(
            result,
            Err(ApiError::UpstreamStatus { status, .. }) if status == 404
        ));
    }

    #[tokio::test]
    async fn malformed_body_is_a_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/2024/drivers.json"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let result = client_for(&server).drivers("2024").await;

        assert!(matches!(result, Err(ApiError::Decode(_))));
    }

    #[test]
    fn available_seasons_run_newest_first_down_to_1950() {
        let seasons = available_seasons();
        let current = Utc::now().year();

        assert_eq!(seasons.first().map(String::as_str), Some(current.to_string().as_str()));
        assert_eq!(seasons.last().map(String::as_str), Some("1950"));
        assert_eq!(seasons.len(), (current - 1949) as usize);
        assert!(seasons.contains(&DEFAULT_SEASON.to_string()));
    }
}
