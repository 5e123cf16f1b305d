/// Synchronous client for the **REST Countries API (v3.1)**.
///
/// This module wraps the `name/{name}` endpoint and returns the first match
/// as a tidy [`CountryRecord`]. The service answers with a list because
/// country names can be ambiguous ("Korea", "Congo"); taking the first
/// element is a documented simplification.
///
/// ### Notes
/// - The country name is user-supplied and not normalized; it is
///   percent-encoded before being placed in the URL path.
/// - Network timeouts use a sane default (30s) and can be adjusted by
///   editing the client builder.
/// - `base_url` is public so tests and forks can point at a different host.
///
/// Typical usage:
/// ```no_run
/// # use cwi_rs::CountryClient;
/// let client = CountryClient::default();
/// let record = client.fetch_country("Japan")?;
/// println!("{} is at {}, {}", record.common_name, record.latitude, record.longitude);
/// # Ok::<(), cwi_rs::CountryLookupError>(())
/// ```
use crate::models::{CountryEntry, CountryRecord};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};
use reqwest::StatusCode;
use reqwest::blocking::Client as HttpClient;
use reqwest::redirect::Policy;
use std::time::Duration;
use thiserror::Error;

/// Failure modes of a country lookup. Terminal for the pipeline run that
/// issued it; there is no retry.
#[derive(Debug, Error)]
pub enum CountryLookupError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("failed to find data for {name} (HTTP {status})")]
    Status { name: String, status: StatusCode },
    #[error("failed to decode country response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("no country found for {0}")]
    NoMatch(String),
}

#[derive(Debug, Clone)]
pub struct CountryClient {
    pub base_url: String,
    http: HttpClient,
}

impl Default for CountryClient {
    fn default() -> Self {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(30)) // total request timeout
            .connect_timeout(Duration::from_secs(10)) // connect timeout
            .redirect(Policy::limited(5)) // cap redirects
            .user_agent(concat!("cwi_rs/", env!("CARGO_PKG_VERSION"))) // set user agent
            .build()
            .expect("reqwest client build");
        Self {
            base_url: "https://restcountries.com/v3.1".into(),
            http,
        }
    }
}

// Allow -, _, . unescaped; everything else (including spaces) is escaped.
const SAFE: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.');

fn enc(part: &str) -> String {
    percent_encoding::utf8_percent_encode(part.trim(), SAFE).to_string()
}

impl CountryClient {
    /// Fetch the record for a country by (user-supplied) name.
    ///
    /// ### Errors
    /// - Network/transport error
    /// - Non-2xx HTTP status (404 for unknown names)
    /// - JSON decoding error
    /// - Empty result list
    pub fn fetch_country(&self, name: &str) -> Result<CountryRecord, CountryLookupError> {
        let url = format!("{}/name/{}", self.base_url, enc(name));
        log::debug!("GET {url}");

        let res = self.http.get(&url).send()?;
        let status = res.status();
        if !status.is_success() {
            log::warn!("country lookup for {name:?} failed with HTTP {status}");
            return Err(CountryLookupError::Status {
                name: name.to_string(),
                status,
            });
        }

        let body = res.text()?;
        let entries: Vec<CountryEntry> = serde_json::from_str(&body)?;
        let first = entries
            .into_iter()
            .next()
            .ok_or_else(|| CountryLookupError::NoMatch(name.to_string()))?;

        Ok(CountryRecord::from(first))
    }
}
