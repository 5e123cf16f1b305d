use crate::models::{WeatherSeries, WeatherSummary};

const DEFAULT_RAIN_UNIT: &str = "mm";
const DEFAULT_TEMP_UNIT: &str = "°C";

/// Reduce a day of hourly readings to two display strings.
///
/// - total rainfall: sum of all readings, 2 decimal places, unit suffix
/// - average temperature: mean of all readings (0 when the array is
///   empty), 1 decimal place, unit suffix
///
/// Unit labels missing from the response fall back to `"mm"` / `"°C"`.
/// Pure function, no error conditions.
pub fn summarize(series: &WeatherSeries) -> WeatherSummary {
    let total_rain: f64 = series.rain.iter().sum();

    let avg_temp = if series.temperature.is_empty() {
        0.0
    } else {
        series.temperature.iter().sum::<f64>() / series.temperature.len() as f64
    };

    let rain_unit = series.rain_unit.as_deref().unwrap_or(DEFAULT_RAIN_UNIT);
    let temp_unit = series
        .temperature_unit
        .as_deref()
        .unwrap_or(DEFAULT_TEMP_UNIT);

    WeatherSummary {
        rainfall: format!("{total_rain:.2} {rain_unit}"),
        temperature: format!("{avg_temp:.1} {temp_unit}"),
    }
}
