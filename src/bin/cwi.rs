use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use cwi_rs::{CountryClient, WeatherClient, run_pipeline, storage};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "cwi",
    version,
    about = "Look up country facts and today's weather at its coordinates"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch country facts plus today's weather (and optionally save a report).
    Get(GetArgs),
}

#[derive(ValueEnum, Clone, Debug)]
enum OutFormat {
    Csv,
    Json,
}

#[derive(Args, Debug)]
struct GetArgs {
    /// Country name as understood by REST Countries (e.g., Japan, "South Africa")
    #[arg(short, long)]
    country: String,
    /// Locale tag for population grouping (e.g., en, de, fr).
    #[arg(long, default_value = "en")]
    locale: String,
    /// Save the report to file (format inferred by --format or extension).
    #[arg(long)]
    out: Option<PathBuf>,
    /// Output format (csv or json). If omitted, inferred from --out extension.
    #[arg(long, value_enum)]
    format: Option<OutFormat>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Get(args) => cmd_get(args),
    }
}

fn row(label: &str, value: &str) {
    println!("{label:<18}{value}");
}

fn cmd_get(args: GetArgs) -> Result<()> {
    let countries = CountryClient::default();
    let weather = WeatherClient::default();

    let report = run_pipeline(&countries, &weather, &args.country, &args.locale)?;

    println!(
        "Country facts & weather for {}",
        chrono::Local::now().format("%Y-%m-%d")
    );
    println!();
    row("Country:", &report.country_name);
    row("Official name:", &report.official_name);
    row("Capital:", &report.capital);
    row("Languages:", &report.languages);
    row("Population:", &report.population);
    row("Coordinates:", &report.lat_lng);
    row("Map:", report.map_url.as_deref().unwrap_or("N/A"));
    row("Flag:", report.flag_url.as_deref().unwrap_or("N/A"));
    row("Rainfall today:", &report.rainfall);
    row("Avg temperature:", &report.temperature);

    if let Some(path) = args.out.as_ref() {
        let fmt = match args.format {
            Some(OutFormat::Csv) => "csv",
            Some(OutFormat::Json) => "json",
            None => path.extension().and_then(|e| e.to_str()).unwrap_or("csv"),
        }
        .to_ascii_lowercase();
        match fmt.as_str() {
            "csv" => storage::save_csv(&report, path)?,
            "json" => storage::save_json(&report, path)?,
            other => anyhow::bail!("unsupported format: {}", other),
        }
        eprintln!("Saved report to {}", path.display());
    }

    Ok(())
}
