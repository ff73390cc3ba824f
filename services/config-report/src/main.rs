//! Resolves the StreamFlix settings the way the web host does at startup,
//! logs configuration hygiene warnings and prints a redacted summary.

use std::io::Write;

use streamflix_shared::Settings;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> anyhow::Result<()> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let settings = Settings::from_env();
    settings.log_hygiene();

    match settings.media_credentials() {
        Ok(creds) => info!(cloud_name = creds.cloud_name(), "media uploads enabled"),
        Err(e) => info!(%e, "media uploads disabled"),
    }

    let summary = settings.summary();
    let mut out = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, &summary)?;
    writeln!(out)?;
    Ok(())
}
