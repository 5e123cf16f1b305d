//! Live API tests. Run with: `cargo test --features online -- --nocapture`
#![cfg(feature = "online")]

use cwi_rs::{CountryClient, CountryLookupError, WeatherClient, run_pipeline};

#[test]
fn fetch_japan_record() {
    let cli = CountryClient::default();
    let record = cli.fetch_country("Japan").unwrap();
    assert_eq!(record.common_name, "Japan");
    assert!(record.population > 0);
    assert!(record.latitude != 0.0 || record.longitude != 0.0);
}

#[test]
fn unknown_country_is_an_error() {
    let cli = CountryClient::default();
    let err = cli.fetch_country("definitely-not-a-country").unwrap_err();
    match err {
        CountryLookupError::Status { .. } | CountryLookupError::NoMatch(_) => {}
        other => panic!("unexpected error kind: {other:?}"),
    }
}

#[test]
fn fetch_forecast_for_tokyo() {
    let cli = WeatherClient::default();
    let series = cli.fetch_forecast(35.6762, 139.6503).unwrap();
    // One forecast day: 24 hourly readings of each kind.
    assert_eq!(series.rain.len(), 24);
    assert_eq!(series.temperature.len(), 24);
}

#[test]
fn full_pipeline_renders_ten_fields() {
    let countries = CountryClient::default();
    let weather = WeatherClient::default();
    let report = run_pipeline(&countries, &weather, "Japan", "en").unwrap();
    assert_eq!(report.country_name, "Japan");
    assert!(report.lat_lng.starts_with("Lat: "));
    assert!(report.rainfall.ends_with(" mm"));
    assert!(report.temperature.ends_with(" °C"));
}
