use bandchart::config::Config;
use bandchart::indicators::validation::validate_style;
use bandchart::indicators::volatility::try_compute_bollinger_bands;
use bandchart::logging::init_logging;
use bandchart::models::indicators::{BandPoint, Candle};
use bandchart::models::settings::BollingerSettings;
use bandchart::overlay::{build_overlay, tooltip_at};
use bandchart::services::market_data::{CandleProvider, DemoCandleProvider, JsonFileCandleProvider};
use tracing::{info, warn};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let config = Config::from_env()?;
    info!(
        environment = %config.environment,
        data_path = %config.data_path.display(),
        "starting bandchart"
    );

    let candles = match JsonFileCandleProvider::new(config.data_path.clone()).get_candles() {
        Ok(candles) => candles,
        Err(e) => {
            warn!(error = %e, "failed to load candle file, using demo candles");
            DemoCandleProvider.get_candles()?
        }
    };

    let settings = BollingerSettings {
        inputs: config.inputs,
        ..BollingerSettings::default()
    };
    validate_style(&settings.style)?;
    let bands = try_compute_bollinger_bands(&candles, settings.inputs)?;
    let overlay = build_overlay(&bands, &settings.style);

    println!("Settings:");
    println!("{}", serde_json::to_string_pretty(&settings.inputs)?);
    println!();
    println!("Candles: {}", candles.len());
    for line in &overlay.lines {
        println!("  {:?} line: {} points", line.band, line.points.len());
    }
    if let Some(fill) = &overlay.fill {
        println!("  fill: {} points at {}% opacity", fill.points.len(), fill.opacity);
    }
    println!();

    for (i, candle) in candles.iter().enumerate() {
        print_row(candle, tooltip_at(&bands, i));
    }

    Ok(())
}

fn print_row(candle: &Candle, band: Option<&BandPoint>) {
    let time = candle
        .datetime()
        .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| candle.timestamp.to_string());

    match band {
        Some(b) => println!(
            "  {}  close {:>10.2}  basis {:>10.2}  upper {:>10.2}  lower {:>10.2}",
            time, candle.close, b.basis, b.upper, b.lower
        ),
        None => println!("  {}  close {:>10.2}  (warming up)", time, candle.close),
    }
}
