//! Runs the analysis pipeline on a synthetic daily series and prints the
//! report as JSON.

use chrono::{Duration, NaiveDate};
use dotenvy::dotenv;
use klinesight::config::EngineConfig;
use klinesight::core::TechnicalAnalyzer;
use klinesight::logging;
use klinesight::models::Bar;
use tracing::info;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    logging::init_logging();

    let config = EngineConfig::from_env();
    config.validate()?;
    info!(environment = %klinesight::config::get_environment(), "Starting klinesight demo");

    let bars = sample_bars(120)?;
    let analyzer = TechnicalAnalyzer::with_config(config);
    let report = analyzer.analyze("DEMO", &bars)?;

    println!("{}", serde_json::to_string_pretty(&report)?);

    for method in ["fibonacci", "pivot", "ma", "historical"] {
        let levels = analyzer.calculate_support_resistance("DEMO", &bars, method)?;
        println!(
            "{:<10} supports={:?} resistances={:?} -> {}",
            method, levels.support_levels, levels.resistance_levels, levels.recommendation
        );
    }

    Ok(())
}

/// Gently rising series with a 20-day cycle
fn sample_bars(count: usize) -> Result<Vec<Bar>, Box<dyn std::error::Error>> {
    let start = NaiveDate::from_ymd_opt(2024, 1, 2).ok_or("invalid start date")?;

    Ok((0..count)
        .map(|i| {
            let t = i as f64;
            let close = 20.0 + t * 0.05 + (t * std::f64::consts::PI / 10.0).sin();
            let open = close - 0.1;
            Bar::new(
                start + Duration::days(i as i64),
                open,
                close.max(open) + 0.3,
                close.min(open) - 0.3,
                close,
                100_000 + (i as u64 % 7) * 5_000,
            )
        })
        .collect())
}
