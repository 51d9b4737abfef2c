// =============================================================================
// candle-signals — Report Runner Entry Point
// =============================================================================
//
// Loads the runtime config, computes an indicator report for every configured
// candle history in parallel and prints the reports to stdout as JSON.
// =============================================================================

use std::path::PathBuf;

use anyhow::{bail, Context};
use futures_util::future::join_all;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use candle_signals::market_data::load_candles;
use candle_signals::{CandleInput, IndicatorParams, IndicatorReport, RuntimeConfig};

const DEFAULT_CONFIG_PATH: &str = "indicator_config.json";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // ── 1. Environment & config ──────────────────────────────────────────
    let _ = dotenv::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config_path = std::env::var("CANDLE_SIGNALS_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH));

    let mut config = RuntimeConfig::load(&config_path).unwrap_or_else(|e| {
        warn!(error = %e, "Failed to load config, using defaults");
        RuntimeConfig::default()
    });

    // Override inputs from env if available.
    if let Ok(list) = std::env::var("CANDLE_SIGNALS_INPUTS") {
        config.inputs = RuntimeConfig::parse_inputs(&list)
            .context("invalid CANDLE_SIGNALS_INPUTS")?;
    }

    config.params.validate().context("invalid indicator parameters")?;

    if config.inputs.is_empty() {
        bail!(
            "no candle inputs configured; set `inputs` in {} or CANDLE_SIGNALS_INPUTS",
            config_path.display()
        );
    }

    info!(
        inputs = config.inputs.len(),
        params = ?config.params,
        "Computing indicator reports"
    );

    // ── 2. One blocking task per input ───────────────────────────────────
    let tasks = config.inputs.iter().cloned().map(|input| {
        let params = config.params.clone();
        tokio::task::spawn_blocking(move || run_input(&input, &params).map_err(|e| (input, e)))
    });

    let mut reports = Vec::with_capacity(config.inputs.len());
    let mut failures = 0usize;

    for joined in join_all(tasks).await {
        match joined {
            Ok(Ok(report)) => reports.push(report),
            Ok(Err((input, e))) => {
                failures += 1;
                error!(
                    symbol = %input.symbol,
                    path = %input.path.display(),
                    error = %e,
                    "Input failed"
                );
            }
            Err(e) => {
                failures += 1;
                error!(error = %e, "Report task panicked");
            }
        }
    }

    // ── 3. Emit ──────────────────────────────────────────────────────────
    let json = serde_json::to_string_pretty(&reports).context("failed to serialise reports")?;
    println!("{json}");

    info!(reports = reports.len(), failures, "Done");
    Ok(())
}

/// Load one candle history and build its report.
fn run_input(input: &CandleInput, params: &IndicatorParams) -> anyhow::Result<IndicatorReport> {
    let candles = load_candles(&input.path)?;
    let report = IndicatorReport::build(input.symbol.as_str(), &candles, params);

    info!(
        symbol = %report.symbol,
        candles = report.candles,
        signal = %report.signal.kind,
        strength = format!("{:.1}", report.signal.strength),
        "Report ready"
    );

    Ok(report)
}
