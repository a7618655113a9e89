//! Backend API for a Formula 1 statistics dashboard.
//!
//! Serves seasons, drivers, constructors, standings, circuits and race
//! schedules fetched live from the Jolpica/Ergast API, and resolves
//! driver headshots through OpenF1 with a process-wide cached lookup.

pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;
