use crate::view::DisplayModel;
use anyhow::Result;
use csv::WriterBuilder;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Save a populated report as a one-row CSV with header.
pub fn save_csv<P: AsRef<Path>>(model: &DisplayModel, path: P) -> Result<()> {
    let mut wtr = WriterBuilder::new().from_path(path)?;
    wtr.serialize((
        "country_name",
        "official_name",
        "capital",
        "languages",
        "population",
        "lat_lng",
        "rainfall",
        "temperature",
        "map_url",
        "flag_url",
    ))?;
    wtr.serialize((
        &model.country_name,
        &model.official_name,
        &model.capital,
        &model.languages,
        &model.population,
        &model.lat_lng,
        &model.rainfall,
        &model.temperature,
        &model.map_url,
        &model.flag_url,
    ))?;
    wtr.flush()?;
    Ok(())
}

/// Save a populated report as pretty JSON.
pub fn save_json<P: AsRef<Path>>(model: &DisplayModel, path: P) -> Result<()> {
    let mut f = File::create(path)?;
    let s = serde_json::to_string_pretty(model)?;
    f.write_all(s.as_bytes())?;
    Ok(())
}
