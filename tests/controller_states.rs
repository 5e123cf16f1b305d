use cwi_rs::controller::{Controller, DisplaySurface, PipelineError, UiState};
use cwi_rs::view::DisplayModel;
use cwi_rs::{CountryLookupError, WeatherLookupError};

/// Test double: plain fields instead of widgets.
#[derive(Debug, Default)]
struct MockSurface {
    model: Option<DisplayModel>,
    loading: bool,
    error: Option<String>,
    clears: usize,
}

impl DisplaySurface for MockSurface {
    fn clear(&mut self) {
        self.model = None;
        self.error = None;
        self.clears += 1;
    }

    fn set_loading(&mut self, on: bool) {
        self.loading = on;
    }

    fn show_error(&mut self, message: &str) {
        self.error = Some(message.to_string());
    }

    fn render(&mut self, model: &DisplayModel) {
        self.model = Some(model.clone());
    }
}

fn model(name: &str) -> DisplayModel {
    DisplayModel {
        country_name: name.into(),
        official_name: name.into(),
        capital: "N/A".into(),
        languages: "N/A".into(),
        population: "0".into(),
        lat_lng: "Lat: 0.0000, Lng: 0.0000".into(),
        rainfall: "0.00 mm".into(),
        temperature: "0.0 °C".into(),
        map_url: None,
        flag_url: None,
    }
}

fn country_error() -> PipelineError {
    PipelineError::Country(CountryLookupError::NoMatch("Nowhere".into()))
}

fn weather_error() -> PipelineError {
    let decode = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    PipelineError::Weather(WeatherLookupError::Decode(decode))
}

#[test]
fn starts_idle() {
    let ctl = Controller::new(MockSurface::default());
    assert_eq!(ctl.state(), &UiState::Idle);
}

#[test]
fn placeholder_selection_returns_to_idle_and_clears() {
    let mut ctl = Controller::new(MockSurface::default());

    let token = ctl.select("Japan").unwrap();
    ctl.finish(token, Ok(model("Japan")));
    assert_eq!(ctl.state(), &UiState::Populated);

    // Empty selection: no token, everything blanked, indicator off.
    assert!(ctl.select("").is_none());
    assert_eq!(ctl.state(), &UiState::Idle);
    assert!(ctl.surface().model.is_none());
    assert!(ctl.surface().error.is_none());
    assert!(!ctl.surface().loading);
}

#[test]
fn whitespace_selection_counts_as_placeholder() {
    let mut ctl = Controller::new(MockSurface::default());
    assert!(ctl.select("   ").is_none());
    assert_eq!(ctl.state(), &UiState::Idle);
}

#[test]
fn successful_run_populates_all_fields() {
    let mut ctl = Controller::new(MockSurface::default());

    let token = ctl.select("Japan").unwrap();
    assert_eq!(ctl.state(), &UiState::Loading);
    assert!(ctl.surface().loading);

    ctl.finish(token, Ok(model("Japan")));
    assert_eq!(ctl.state(), &UiState::Populated);
    assert!(!ctl.surface().loading);
    assert_eq!(
        ctl.surface().model.as_ref().map(|m| m.country_name.as_str()),
        Some("Japan")
    );
    assert!(ctl.surface().error.is_none());
}

#[test]
fn country_failure_shows_error_and_no_fields() {
    let mut ctl = Controller::new(MockSurface::default());

    let token = ctl.select("Nowhere").unwrap();
    ctl.finish(token, Err(country_error()));

    match ctl.state() {
        UiState::Error(msg) => {
            assert!(msg.contains("Could not fetch country details"));
            assert!(msg.contains("Nowhere"));
        }
        other => panic!("expected Error state, got {other:?}"),
    }
    assert!(!ctl.surface().loading);
    assert!(ctl.surface().model.is_none());
    assert!(ctl.surface().error.is_some());
}

#[test]
fn weather_failure_uses_weather_message() {
    let mut ctl = Controller::new(MockSurface::default());

    let token = ctl.select("Japan").unwrap();
    ctl.finish(token, Err(weather_error()));

    match ctl.state() {
        UiState::Error(msg) => assert!(msg.contains("Could not fetch weather data")),
        other => panic!("expected Error state, got {other:?}"),
    }
}

#[test]
fn stale_outcome_is_dropped() {
    let mut ctl = Controller::new(MockSurface::default());

    let first = ctl.select("Japan").unwrap();
    let second = ctl.select("France").unwrap();

    // The slow first run completes after the user moved on.
    ctl.finish(first, Ok(model("Japan")));
    assert_eq!(ctl.state(), &UiState::Loading);
    assert!(ctl.surface().model.is_none());
    assert!(ctl.surface().loading);

    ctl.finish(second, Ok(model("France")));
    assert_eq!(ctl.state(), &UiState::Populated);
    assert_eq!(
        ctl.surface().model.as_ref().map(|m| m.country_name.as_str()),
        Some("France")
    );
}

#[test]
fn stale_error_cannot_overwrite_newer_run() {
    let mut ctl = Controller::new(MockSurface::default());

    let first = ctl.select("Nowhere").unwrap();
    let second = ctl.select("France").unwrap();

    ctl.finish(first, Err(country_error()));
    assert_eq!(ctl.state(), &UiState::Loading);
    assert!(ctl.surface().error.is_none());

    ctl.finish(second, Ok(model("France")));
    assert_eq!(ctl.state(), &UiState::Populated);
}

#[test]
fn placeholder_selection_invalidates_pending_run() {
    let mut ctl = Controller::new(MockSurface::default());

    let token = ctl.select("Japan").unwrap();
    assert!(ctl.select("").is_none());

    // The orphaned run completes; an Idle display must stay blank.
    ctl.finish(token, Ok(model("Japan")));
    assert_eq!(ctl.state(), &UiState::Idle);
    assert!(ctl.surface().model.is_none());
    assert!(!ctl.surface().loading);
}

#[test]
fn reselection_clears_previous_error() {
    let mut ctl = Controller::new(MockSurface::default());

    let token = ctl.select("Nowhere").unwrap();
    ctl.finish(token, Err(country_error()));
    assert!(ctl.surface().error.is_some());

    let _ = ctl.select("France").unwrap();
    assert_eq!(ctl.state(), &UiState::Loading);
    assert!(ctl.surface().error.is_none());
    assert!(ctl.surface().model.is_none());
}

#[test]
fn every_selection_clears_first() {
    let mut ctl = Controller::new(MockSurface::default());
    let _ = ctl.select("Japan");
    let _ = ctl.select("");
    let _ = ctl.select("France");
    assert_eq!(ctl.surface().clears, 3);
}
