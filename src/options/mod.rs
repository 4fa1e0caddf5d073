pub mod adapters;
pub mod diff;
pub mod form;
pub mod traits;
pub mod types;

use std::time::Instant;

use futures::future::join_all;
use tracing::{info, warn};

use crate::telemetry;
use traits::OptionsStore;
use types::{KeySaveStatus, OptionEntry, SaveReport};

/// Dispatches one put per changed entry, concurrently, and waits for all of
/// them to settle before classifying the batch. An empty change set never
/// touches the store.
///
/// `join_all` yields results in input order, so the report's statuses line up
/// with the change set even though the calls themselves race.
pub async fn save_change_set(store: &dyn OptionsStore, change_set: &[OptionEntry]) -> SaveReport {
    if change_set.is_empty() {
        return SaveReport { statuses: Vec::new() };
    }

    let started = Instant::now();
    let calls = change_set.iter().map(|entry| async move {
        match store.put_option(&entry.key, &entry.value).await {
            Ok(()) => {
                telemetry::record_option_save(&entry.key, "saved");
                (entry.key.clone(), KeySaveStatus::Saved)
            }
            Err(err) => {
                warn!(key = %entry.key, error = %err, "option save failed");
                telemetry::record_option_save(&entry.key, "failed");
                (
                    entry.key.clone(),
                    KeySaveStatus::Failed {
                        reason: err.to_string(),
                    },
                )
            }
        }
    });

    let report = SaveReport {
        statuses: join_all(calls).await,
    };

    let outcome = report.outcome();
    telemetry::record_save_batch(outcome.label(), started.elapsed().as_secs_f64() * 1_000.0);
    info!(
        entries = change_set.len(),
        outcome = outcome.label(),
        "option batch save settled"
    );

    report
}
