use std::env;

use tracing::{error, info, span};
use tracing_subscriber::EnvFilter;
use weather_checks::{ApiConfig, OpenMeteoClient, scenarios};

/// Overrides the service base URL, e.g. to point the checks at a local stub
const BASE_URL_VAR: &str = "OPEN_METEO_BASE_URL";

/// Runs every forecast check once, sequentially, over a single HTTP session and
/// exits with an error if any of them failed.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match env::var(BASE_URL_VAR) {
        Ok(base_url) => ApiConfig::with_base_url(base_url),
        Err(_) => ApiConfig::default(),
    };

    let client = OpenMeteoClient::with_config(&config)?;
    let reports = scenarios::run_all(&client).await;
    client.close();

    let failed: Vec<&str> = reports
        .iter()
        .filter(|report| !report.passed())
        .map(|report| report.name.as_str())
        .collect();

    span!(tracing::Level::INFO, "summary").in_scope(|| {
        info!("{} of {} checks passed", reports.len() - failed.len(), reports.len());
        if !failed.is_empty() {
            error!("Failed checks: {}", failed.join(", "));
        }
    });

    if failed.is_empty() {
        Ok(())
    } else {
        Err(anyhow::anyhow!("{} check(s) failed", failed.len()))
    }
}
