//! Response envelope of the racing-data provider. Every endpoint wraps
//! its payload in `MRData` with exactly one table populated; an absent
//! table or an empty list is a normal "no data" outcome, not an error.

use serde::Deserialize;

use crate::models::circuit::Circuit;
use crate::models::constructor::Constructor;
use crate::models::driver::Driver;
use crate::models::race::Race;
use crate::models::standings::{ConstructorStanding, DriverStanding};

#[derive(Debug, Deserialize)]
pub struct ErgastResponse {
    #[serde(rename = "MRData")]
    pub mr_data: MrData,
}

#[derive(Debug, Deserialize)]
pub struct MrData {
    #[serde(rename = "DriverTable")]
    pub driver_table: Option<DriverTable>,
    #[serde(rename = "ConstructorTable")]
    pub constructor_table: Option<ConstructorTable>,
    #[serde(rename = "StandingsTable")]
    pub standings_table: Option<StandingsTable>,
    #[serde(rename = "CircuitTable")]
    pub circuit_table: Option<CircuitTable>,
    #[serde(rename = "RaceTable")]
    pub race_table: Option<RaceTable>,
}

impl MrData {
    pub fn drivers(self) -> Vec<Driver> {
        self.driver_table.map(|table| table.drivers).unwrap_or_default()
    }

    pub fn constructors(self) -> Vec<Constructor> {
        self.constructor_table
            .map(|table| table.constructors)
            .unwrap_or_default()
    }

    pub fn circuits(self) -> Vec<Circuit> {
        self.circuit_table.map(|table| table.circuits).unwrap_or_default()
    }

    pub fn races(self) -> Vec<Race> {
        self.race_table.map(|table| table.races).unwrap_or_default()
    }

    /// Standings responses hold one list per season queried; season-scoped
    /// requests get at most one.
    pub fn first_standings_list(self) -> Option<StandingsList> {
        self.standings_table
            .and_then(|table| table.standings_lists.into_iter().next())
    }
}

#[derive(Debug, Deserialize)]
pub struct DriverTable {
    #[serde(rename = "Drivers", default)]
    pub drivers: Vec<Driver>,
}

#[derive(Debug, Deserialize)]
pub struct ConstructorTable {
    #[serde(rename = "Constructors", default)]
    pub constructors: Vec<Constructor>,
}

#[derive(Debug, Deserialize)]
pub struct CircuitTable {
    #[serde(rename = "Circuits", default)]
    pub circuits: Vec<Circuit>,
}

#[derive(Debug, Deserialize)]
pub struct RaceTable {
    #[serde(rename = "Races", default)]
    pub races: Vec<Race>,
}

#[derive(Debug, Deserialize)]
pub struct StandingsTable {
    #[serde(rename = "StandingsLists", default)]
    pub standings_lists: Vec<StandingsList>,
}

#[derive(Debug, Deserialize)]
pub struct StandingsList {
    #[serde(rename = "DriverStandings", default)]
    pub driver_standings: Vec<DriverStanding>,
    #[serde(rename = "ConstructorStandings", default)]
    pub constructor_standings: Vec<ConstructorStanding>,
}
