//! Benchmark location ranking over a synthetic species catalog

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use foray_engine::aggregate::rank_location;
use foray_engine::config::ScoringConfig;
use foray_engine::data::{
    Accessibility, Difficulty, ForagingLocation, MushroomSpecies, WeatherSnapshot,
};

fn synthetic_catalog(size: usize) -> Vec<MushroomSpecies> {
    let seasons = ["Spring", "Summer", "Fall", "Summer, Fall", "All Year"];
    let trees = ["Spruce", "Beech", "Fir", "Pine", "Oak", "Birch"];

    (0..size)
        .map(|i| MushroomSpecies {
            scientific_name: format!("Species benchus {}", i),
            display_name: format!("Bench {}", i),
            description: String::new(),
            season: seasons[i % seasons.len()].to_string(),
            optimal_temperature: if i % 3 == 0 { None } else { Some(12.0 + (i % 10) as f64) },
            optimal_humidity: if i % 4 == 0 { None } else { Some(70.0 + (i % 20) as f64) },
            min_soil_temperature: if i % 5 == 0 { None } else { Some(5.0 + (i % 6) as f64) },
            tree_associations: vec![trees[i % trees.len()].to_string()],
            forest_types: vec!["Mixed".to_string()],
            elevation_min: Some(300.0 + (i % 5) as f64 * 100.0),
            elevation_max: Some(1000.0 + (i % 5) as f64 * 100.0),
            edible: i % 2 == 0,
            difficulty: Difficulty::Intermediate,
            safety_notes: String::new(),
        })
        .collect()
}

fn bench_rank_location(c: &mut Criterion) {
    let catalog = synthetic_catalog(200);
    let config = ScoringConfig::default();

    let location = ForagingLocation {
        id: "bench-loc".to_string(),
        name: "Benchwald".to_string(),
        latitude: 47.0,
        longitude: 8.0,
        elevation: Some(850.0),
        forest_type: Some("Mixed".to_string()),
        tree_species: vec!["Fichte".to_string(), "Buche".to_string()],
        accessibility: Accessibility::Moderate,
    };

    let weather = WeatherSnapshot {
        temperature: 16.0,
        humidity: 82.0,
        soil_temperature: 12.0,
        days_since_rain: 2,
        wind_speed: None,
        pressure: None,
    };

    c.bench_function("rank_location_200_species", |b| {
        b.iter(|| {
            rank_location(
                black_box(&location),
                black_box(&catalog),
                Some(black_box(&weather)),
                9,
                &config,
            )
        })
    });
}

criterion_group!(benches, bench_rank_location);
criterion_main!(benches);
