use anyhow::{Result, bail};
use tracing::{error, info, warn};

use topup_console::config::Config;
use topup_console::options::adapters::http::HttpOptionsStore;
use topup_console::options::form::SettingsForm;
use topup_console::options::save_change_set;
use topup_console::options::traits::OptionsStore;
use topup_console::options::types::SaveOutcome;
use topup_console::telemetry;

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let config = Config::from_env()?;
    if config.enable_metrics {
        telemetry::init_metrics_server();
    }

    info!(api_base = %config.api_base, "topup-console starting");

    let updates = parse_updates(std::env::args().skip(1))?;
    if updates.is_empty() {
        bail!("usage: topup-console KEY=VALUE [KEY=VALUE ...]");
    }

    let store = HttpOptionsStore::new(&config.api_base);
    let current = store.fetch_options().await?;

    let keys: Vec<&str> = updates.iter().map(|(key, _)| key.as_str()).collect();
    let mut form = SettingsForm::new(&keys);
    form.load(&current);
    for (key, value) in &updates {
        form.set(key, value.clone());
    }

    let report = save_change_set(&store, &form.change_set()).await;
    match report.outcome() {
        SaveOutcome::NoOp => {
            warn!("no changes to persist");
        }
        SaveOutcome::Success => {
            form.commit();
            info!("all options saved; restart the service for them to take effect");
        }
        outcome => {
            error!(
                failed = ?report.failed_keys(),
                outcome = outcome.label(),
                "save did not complete"
            );
            bail!("option save failed");
        }
    }

    Ok(())
}

fn parse_updates(args: impl Iterator<Item = String>) -> Result<Vec<(String, String)>> {
    args.map(|arg| match arg.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => bail!("expected KEY=VALUE, got {arg:?}"),
    })
    .collect()
}
