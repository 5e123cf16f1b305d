use crate::api::{CountryClient, CountryLookupError};
use crate::stats;
use crate::view::DisplayModel;
use crate::weather::{WeatherClient, WeatherLookupError};
use thiserror::Error;

/// Failure of one pipeline run, tagged with the stage that failed.
/// The display messages match what the error box shows to the user.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Could not fetch country details: {0}")]
    Country(#[from] CountryLookupError),
    #[error("Could not fetch weather data: {0}")]
    Weather(#[from] WeatherLookupError),
}

/// What the selection controller is currently showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiState {
    Idle,
    Loading,
    Populated,
    Error(String),
}

/// Identifies one pipeline run. A run's outcome is applied only while its
/// token is still the newest one issued; outcomes of superseded runs are
/// dropped so a slow response cannot overwrite a later selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunToken(u64);

/// Sink for everything the controller renders. Front-ends implement this
/// over their widgets; tests implement it over plain fields.
///
/// The controller guarantees it never leaves partial output standing: a
/// surface is either cleared, showing one whole [`DisplayModel`], or
/// showing one error message.
pub trait DisplaySurface {
    /// Blank all data fields and hide the error box.
    fn clear(&mut self);
    /// Toggle the loading indicator.
    fn set_loading(&mut self, on: bool);
    /// Show `message` in the error box.
    fn show_error(&mut self, message: &str);
    /// Write all display fields at once.
    fn render(&mut self, model: &DisplayModel);
}

/// Drives a [`DisplaySurface`] through the Idle → Loading →
/// Populated/Error cycle in response to selection changes.
#[derive(Debug)]
pub struct Controller<S> {
    surface: S,
    state: UiState,
    generation: u64,
}

impl<S: DisplaySurface> Controller<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            state: UiState::Idle,
            generation: 0,
        }
    }

    /// React to a selection change. The surface is always cleared first.
    ///
    /// An empty/placeholder selection returns to Idle and yields no token;
    /// a country name starts a new run and returns the token the caller
    /// must hand back to [`finish`](Self::finish) together with the
    /// pipeline outcome.
    pub fn select(&mut self, selection: &str) -> Option<RunToken> {
        self.surface.clear();
        // Every selection change supersedes whatever run is still in
        // flight, including a change back to the placeholder.
        self.generation += 1;

        if selection.trim().is_empty() {
            self.surface.set_loading(false);
            self.state = UiState::Idle;
            return None;
        }

        self.surface.set_loading(true);
        self.state = UiState::Loading;
        Some(RunToken(self.generation))
    }

    /// Apply the outcome of a run. Outcomes whose token has been
    /// superseded by a newer `select` call are ignored entirely.
    pub fn finish(&mut self, token: RunToken, outcome: Result<DisplayModel, PipelineError>) {
        if token.0 != self.generation {
            log::debug!("dropping stale pipeline result (run {})", token.0);
            return;
        }

        match outcome {
            Ok(model) => {
                self.surface.render(&model);
                self.surface.set_loading(false);
                self.state = UiState::Populated;
            }
            Err(err) => {
                let message = err.to_string();
                self.surface.show_error(&message);
                self.surface.set_loading(false);
                self.state = UiState::Error(message);
            }
        }
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}

/// Run one full lookup: country → weather at its coordinates → aggregate
/// → compose. The two network calls are sequential; the second depends on
/// coordinates from the first. Either failure short-circuits.
pub fn run_pipeline(
    countries: &CountryClient,
    weather: &WeatherClient,
    name: &str,
    locale_tag: &str,
) -> Result<DisplayModel, PipelineError> {
    let record = countries.fetch_country(name)?;
    let series = weather.fetch_forecast(record.latitude, record.longitude)?;
    let summary = stats::summarize(&series);
    Ok(DisplayModel::compose(&record, &summary, locale_tag))
}
