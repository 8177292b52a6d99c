//! Rank foraging locations from JSON inputs
//!
//! Usage:
//!   rank_locations <catalog.json> <locations.json> [options]
//!
//! Options:
//!   --weather <file.json>   weather snapshot (omit to score without weather)
//!   --lat <deg> --lon <deg> rank only the stored location nearest to here
//!   --month <1-12>          override the current calendar month

use std::path::Path;
use std::process;

use anyhow::{bail, Context, Result};
use chrono::Datelike;

use foray_engine::aggregate::rank_location;
use foray_engine::config::ScoringConfig;
use foray_engine::data::{self, ForagingLocation, WeatherSnapshot};
use foray_engine::utils::nearest_location;

struct Args {
    catalog_path: String,
    locations_path: String,
    weather_path: Option<String>,
    lat: Option<f64>,
    lon: Option<f64>,
    month: Option<u32>,
}

fn parse_args() -> Result<Args> {
    let mut positional = Vec::new();
    let mut weather_path = None;
    let mut lat = None;
    let mut lon = None;
    let mut month = None;

    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--weather" => {
                weather_path = Some(iter.next().context("--weather requires a file path")?);
            }
            "--lat" => {
                let value = iter.next().context("--lat requires a value")?;
                lat = Some(value.parse().context("--lat must be a number")?);
            }
            "--lon" => {
                let value = iter.next().context("--lon requires a value")?;
                lon = Some(value.parse().context("--lon must be a number")?);
            }
            "--month" => {
                let value = iter.next().context("--month requires a value")?;
                let parsed: u32 = value.parse().context("--month must be 1-12")?;
                if !(1..=12).contains(&parsed) {
                    bail!("--month must be 1-12");
                }
                month = Some(parsed);
            }
            other => positional.push(other.to_string()),
        }
    }

    if positional.len() != 2 {
        bail!("usage: rank_locations <catalog.json> <locations.json> [--weather file] [--lat deg --lon deg] [--month 1-12]");
    }

    let mut positional = positional.into_iter();
    Ok(Args {
        catalog_path: positional.next().unwrap(),
        locations_path: positional.next().unwrap(),
        weather_path,
        lat,
        lon,
        month,
    })
}

fn print_ranking(
    location: &ForagingLocation,
    catalog: &[foray_engine::MushroomSpecies],
    weather: Option<&WeatherSnapshot>,
    month: u32,
    config: &ScoringConfig,
) {
    let ranking = rank_location(location, catalog, weather, month, config);

    println!("\n{} ({})", location.name, location.id);
    println!("  Overall probability: {}%", ranking.overall_probability);
    println!("  Suitable species: {}", ranking.suitable_species.len());

    for score in &ranking.top_species {
        let b = &score.breakdown;
        println!(
            "    {:>3}%  {}  [temp {} hum {} soil {} rain {} elev {} forest {} trees {} season {}]",
            score.probability,
            score.scientific_name,
            b.temperature,
            b.humidity,
            b.soil_temperature,
            b.rainfall,
            b.elevation,
            b.forest_type,
            b.tree_species,
            b.season,
        );
    }
}

fn run() -> Result<()> {
    let args = parse_args()?;

    let catalog = data::load_catalog(Path::new(&args.catalog_path))?;
    let locations = data::load_locations(Path::new(&args.locations_path))?;

    let weather = match &args.weather_path {
        Some(path) => Some(data::load_weather(Path::new(path))?),
        None => None,
    };

    let month = args.month.unwrap_or_else(|| chrono::Local::now().month());
    let config = ScoringConfig::default();

    println!("Species catalog: {}", catalog.len());
    println!("Locations: {}", locations.len());
    println!("Month: {}", month);
    match &weather {
        Some(w) => println!(
            "Weather: {:.1} C, {:.0}% humidity, soil {:.1} C, {} days since rain",
            w.temperature, w.humidity, w.soil_temperature, w.days_since_rain
        ),
        None => println!("Weather: none (scoring with mid-range defaults)"),
    }

    match (args.lat, args.lon) {
        (Some(lat), Some(lon)) => {
            let Some(nearest) = nearest_location(&locations, lat, lon) else {
                bail!("locations file is empty");
            };
            print_ranking(nearest, &catalog, weather.as_ref(), month, &config);
        }
        (None, None) => {
            for location in &locations {
                print_ranking(location, &catalog, weather.as_ref(), month, &config);
            }
        }
        _ => bail!("--lat and --lon must be given together"),
    }

    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    if let Err(err) = run() {
        eprintln!("Error: {:#}", err);
        process::exit(1);
    }
}
