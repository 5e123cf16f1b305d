/// Synchronous client for the **Open-Meteo forecast API**.
///
/// Requests hourly temperature and rainfall for the current day only
/// (`hourly=temperature_2m,rain&forecast_days=1`) at a given coordinate
/// pair and returns the raw arrays plus unit labels as a
/// [`WeatherSeries`]. No API key is required.
use crate::models::{ForecastResponse, WeatherSeries};
use reqwest::StatusCode;
use reqwest::blocking::Client as HttpClient;
use reqwest::redirect::Policy;
use std::time::Duration;
use thiserror::Error;

/// Failure modes of a forecast lookup. Terminal for the pipeline run that
/// issued it; there is no retry.
#[derive(Debug, Error)]
pub enum WeatherLookupError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("forecast service returned HTTP {0}")]
    Status(StatusCode),
    #[error("failed to decode forecast response: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Debug, Clone)]
pub struct WeatherClient {
    pub base_url: String,
    http: HttpClient,
}

impl Default for WeatherClient {
    fn default() -> Self {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .redirect(Policy::limited(5))
            .user_agent(concat!("cwi_rs/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("reqwest client build");
        Self {
            base_url: "https://api.open-meteo.com/v1/forecast".into(),
            http,
        }
    }
}

impl WeatherClient {
    /// Fetch the current-day hourly series for a coordinate pair.
    ///
    /// Array lengths and pairing are passed through exactly as the service
    /// reports them; only [`crate::stats::summarize`] interprets them.
    ///
    /// ### Errors
    /// - Network/transport error
    /// - Non-2xx HTTP status
    /// - JSON decoding error
    pub fn fetch_forecast(&self, lat: f64, lng: f64) -> Result<WeatherSeries, WeatherLookupError> {
        let url = format!(
            "{}?hourly=temperature_2m,rain&forecast_days=1&latitude={}&longitude={}",
            self.base_url, lat, lng
        );
        log::debug!("GET {url}");

        let res = self.http.get(&url).send()?;
        let status = res.status();
        if !status.is_success() {
            log::warn!("forecast lookup at ({lat}, {lng}) failed with HTTP {status}");
            return Err(WeatherLookupError::Status(status));
        }

        let body = res.text()?;
        let parsed: ForecastResponse = serde_json::from_str(&body)?;
        Ok(WeatherSeries::from(parsed))
    }
}
