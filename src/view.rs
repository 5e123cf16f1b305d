use crate::models::{CountryRecord, WeatherSummary};
use num_format::{Locale, ToFormattedString};
use serde::{Deserialize, Serialize};

/// Map a user-provided locale tag to a num-format Locale for population grouping.
/// Supported tags (case-insensitive): "en", "us", "en_US", "de", "de_DE", "german", "fr", "es", "it"
fn map_locale(tag: &str) -> &'static Locale {
    match tag.to_lowercase().as_str() {
        "de" | "de_de" | "german" => &Locale::de,
        "fr" | "fr_fr" => &Locale::fr,
        "es" | "es_es" => &Locale::es,
        "it" | "it_it" => &Locale::it,
        _ => &Locale::en,
    }
}

fn or_na(s: &str) -> String {
    if s.trim().is_empty() {
        "N/A".to_string()
    } else {
        s.to_string()
    }
}

/// Fully-defaulted view of one lookup, ready for display.
///
/// This is the single sanitize/normalize step: every fallback ("N/A",
/// zero coordinates, missing links) is applied here and nowhere else, so
/// a surface can write the fields verbatim.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DisplayModel {
    pub country_name: String,
    pub official_name: String,
    pub capital: String,
    /// Comma-joined language display names.
    pub languages: String,
    /// Locale-grouped population, e.g. `"125,836,021"`.
    pub population: String,
    /// `"Lat: {lat:.4}, Lng: {lng:.4}"`, four decimals each.
    pub lat_lng: String,
    pub rainfall: String,
    pub temperature: String,
    pub map_url: Option<String>,
    pub flag_url: Option<String>,
}

impl DisplayModel {
    /// Compose the ten display fields from a country record and a weather
    /// summary. `locale_tag` only affects population grouping.
    pub fn compose(record: &CountryRecord, summary: &WeatherSummary, locale_tag: &str) -> Self {
        let locale = map_locale(locale_tag);

        let languages = if record.languages.is_empty() {
            "N/A".to_string()
        } else {
            record.languages.join(", ")
        };

        Self {
            country_name: or_na(&record.common_name),
            official_name: or_na(&record.official_name),
            capital: record
                .capital
                .clone()
                .unwrap_or_else(|| "N/A".to_string()),
            languages,
            population: record.population.to_formatted_string(locale),
            lat_lng: format!(
                "Lat: {:.4}, Lng: {:.4}",
                record.latitude, record.longitude
            ),
            rainfall: summary.rainfall.clone(),
            temperature: summary.temperature.clone(),
            map_url: record.map_url.clone(),
            flag_url: record.flag_url.clone(),
        }
    }
}
