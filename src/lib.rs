//! cwi-rs
//!
//! A lightweight Rust library for looking up country facts together with
//! the country's same-day weather. Pairs with the `cwi` CLI and the
//! `cwi-gui` desktop widget.
//!
//! ### Features
//! - Fetch a country record (names, capital, languages, population,
//!   coordinates, map/flag links) from REST Countries by name
//! - Fetch the current day's hourly rainfall and temperature for the
//!   country's coordinates from Open-Meteo
//! - Reduce the hourly series to display statistics (total rainfall,
//!   average temperature)
//! - Drive any [`controller::DisplaySurface`] through the
//!   Idle/Loading/Populated/Error cycle, with stale-run protection
//! - Export a populated report as CSV or JSON
//!
//! ### Example
//! ```no_run
//! use cwi_rs::{CountryClient, WeatherClient, run_pipeline};
//!
//! let countries = CountryClient::default();
//! let weather = WeatherClient::default();
//! let report = run_pipeline(&countries, &weather, "Japan", "en")?;
//! println!("{}: {}", report.country_name, report.temperature);
//! cwi_rs::storage::save_json(&report, "japan.json")?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod api;
pub mod controller;
pub mod models;
pub mod stats;
pub mod storage;
pub mod view;
pub mod weather;

pub use api::{CountryClient, CountryLookupError};
pub use controller::{Controller, DisplaySurface, PipelineError, RunToken, UiState, run_pipeline};
pub use models::{CountryRecord, WeatherSeries, WeatherSummary};
pub use view::DisplayModel;
pub use weather::{WeatherClient, WeatherLookupError};
