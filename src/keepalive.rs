use std::time::Duration;

use reqwest::Client;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::config::AppConfig;

const MAX_INTERVAL_MINUTES: u64 = 24 * 60;

fn period(interval_minutes: u64) -> Duration {
    Duration::from_secs(interval_minutes.clamp(1, MAX_INTERVAL_MINUTES).saturating_mul(60))
}

/// Periodically requests the configured URL so the hosted instance is not
/// idled. Production only.
pub fn spawn(config: &AppConfig) -> Option<JoinHandle<()>> {
    if !config.is_production() {
        return None;
    }
    let keepalive = config.keepalive.clone()?;
    let client = match Client::builder()
        .timeout(Duration::from_secs(config.http_timeout_secs))
        .build()
    {
        Ok(c) => c,
        Err(e) => {
            warn!(error = %e, "keep-alive disabled: cannot build http client");
            return None;
        }
    };
    let every = period(keepalive.interval_minutes);
    info!(url = %keepalive.url, ?every, "keep-alive enabled");
    Some(tokio::spawn(run(client, keepalive.url, every)))
}

async fn run(client: Client, url: String, period: Duration) {
    let mut ticker = tokio::time::interval(period);
    // first tick completes immediately
    ticker.tick().await;
    loop {
        ticker.tick().await;
        match client.get(&url).send().await {
            Ok(res) if res.status().is_success() => debug!(%url, "keep-alive ok"),
            Ok(res) => warn!(%url, status = %res.status(), "keep-alive non-success"),
            Err(e) => warn!(%url, error = %e, "keep-alive request failed"),
        }
    }
}
