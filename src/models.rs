use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Raw country object as returned by the REST Countries `name/{name}` endpoint.
///
/// The service returns a *list* of these (country names can be ambiguous);
/// callers take the first element. Every field the service may omit is
/// optional here; display defaulting happens once, in [`crate::view`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountryEntry {
    #[serde(default)]
    pub name: NameBlock,
    /// Capital cities; usually one entry, sometimes absent (e.g., Antarctica).
    #[serde(default)]
    pub capital: Vec<String>,
    /// Language code → display name. BTreeMap keeps join order deterministic.
    #[serde(default)]
    pub languages: BTreeMap<String, String>,
    #[serde(default)]
    pub population: u64,
    /// `[latitude, longitude]` pair; occasionally missing for territories.
    #[serde(default)]
    pub latlng: Vec<f64>,
    #[serde(default)]
    pub maps: MapsBlock,
    #[serde(default)]
    pub flags: FlagsBlock,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NameBlock {
    #[serde(default)]
    pub common: String,
    #[serde(default)]
    pub official: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MapsBlock {
    #[serde(rename = "googleMaps", default)]
    pub google_maps: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FlagsBlock {
    #[serde(default)]
    pub png: Option<String>,
}

/// Tidy country record used by this crate (one record = one lookup).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CountryRecord {
    pub common_name: String,
    pub official_name: String,
    pub capital: Option<String>,
    /// Spoken language display names, ordered by language code.
    pub languages: Vec<String>,
    pub population: u64,
    pub latitude: f64,
    pub longitude: f64,
    pub map_url: Option<String>,
    pub flag_url: Option<String>,
}

impl From<CountryEntry> for CountryRecord {
    fn from(e: CountryEntry) -> Self {
        let capital = e.capital.into_iter().next();
        let languages = e.languages.into_values().collect();
        let (latitude, longitude) = match e.latlng.as_slice() {
            [lat, lng, ..] => (*lat, *lng),
            _ => (0.0, 0.0),
        };
        Self {
            common_name: e.name.common,
            official_name: e.name.official,
            capital,
            languages,
            population: e.population,
            latitude,
            longitude,
            map_url: e.maps.google_maps,
            flag_url: e.flags.png,
        }
    }
}

/// Raw response of the Open-Meteo forecast endpoint, reduced to the parts
/// this crate requests (`hourly=temperature_2m,rain&forecast_days=1`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastResponse {
    #[serde(default)]
    pub hourly: HourlyBlock,
    #[serde(default)]
    pub hourly_units: HourlyUnits,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HourlyBlock {
    #[serde(default)]
    pub rain: Vec<f64>,
    #[serde(default)]
    pub temperature_2m: Vec<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HourlyUnits {
    #[serde(default)]
    pub rain: Option<String>,
    #[serde(default)]
    pub temperature_2m: Option<String>,
}

/// One day of hourly readings plus the unit labels the service reported.
///
/// Both arrays cover the same hours; nothing here validates the lengths,
/// [`crate::stats::summarize`] tolerates whatever arrives.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherSeries {
    pub rain: Vec<f64>,
    pub temperature: Vec<f64>,
    pub rain_unit: Option<String>,
    pub temperature_unit: Option<String>,
}

impl From<ForecastResponse> for WeatherSeries {
    fn from(r: ForecastResponse) -> Self {
        Self {
            rain: r.hourly.rain,
            temperature: r.hourly.temperature_2m,
            rain_unit: r.hourly_units.rain,
            temperature_unit: r.hourly_units.temperature_2m,
        }
    }
}

/// Precomputed display strings derived from a [`WeatherSeries`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WeatherSummary {
    /// Total rainfall over the day, e.g. `"0.40 mm"`.
    pub rainfall: String,
    /// Mean temperature over the day, e.g. `"11.0 °C"`.
    pub temperature: String,
}
