use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One key/value pair as it travels to the options endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionEntry {
    pub key: String,
    pub value: String,
}

/// Flat key → value view of the console options. Two of these are compared
/// when saving a form: the last-persisted `original` and the edited `draft`.
pub type SettingsSnapshot = HashMap<String, String>;

/// Outcome of persisting a single key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeySaveStatus {
    Saved,
    Failed { reason: String },
}

/// Aggregate classification of a batch save.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Nothing changed, nothing was persisted.
    NoOp,
    /// Every changed field persisted.
    Success,
    /// The only changed field failed to persist.
    SingleFailure,
    /// Several fields changed and at least one failed.
    PartialFailure,
}

/// Which class of user-facing notification the caller should raise.
/// Raising it is the notification surface's job, not ours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationClass {
    Success,
    Warning,
    Error,
}

impl SaveOutcome {
    pub fn notification(self) -> NotificationClass {
        match self {
            SaveOutcome::NoOp => NotificationClass::Warning,
            SaveOutcome::Success => NotificationClass::Success,
            SaveOutcome::SingleFailure | SaveOutcome::PartialFailure => NotificationClass::Error,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SaveOutcome::NoOp => "no_op",
            SaveOutcome::Success => "success",
            SaveOutcome::SingleFailure => "single_failure",
            SaveOutcome::PartialFailure => "partial_failure",
        }
    }
}

/// Result of dispatching a change set: one status per entry, in change-set
/// order.
#[derive(Debug, Clone)]
pub struct SaveReport {
    pub statuses: Vec<(String, KeySaveStatus)>,
}

impl SaveReport {
    pub fn outcome(&self) -> SaveOutcome {
        if self.statuses.is_empty() {
            return SaveOutcome::NoOp;
        }
        let failed = self
            .statuses
            .iter()
            .filter(|(_, status)| matches!(status, KeySaveStatus::Failed { .. }))
            .count();
        match (self.statuses.len(), failed) {
            (_, 0) => SaveOutcome::Success,
            (1, _) => SaveOutcome::SingleFailure,
            _ => SaveOutcome::PartialFailure,
        }
    }

    pub fn fully_saved(&self) -> bool {
        !self.statuses.is_empty()
            && self
                .statuses
                .iter()
                .all(|(_, status)| matches!(status, KeySaveStatus::Saved))
    }

    pub fn failed_keys(&self) -> Vec<&str> {
        self.statuses
            .iter()
            .filter(|(_, status)| matches!(status, KeySaveStatus::Failed { .. }))
            .map(|(key, _)| key.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn saved(key: &str) -> (String, KeySaveStatus) {
        (key.to_string(), KeySaveStatus::Saved)
    }

    fn failed(key: &str) -> (String, KeySaveStatus) {
        (
            key.to_string(),
            KeySaveStatus::Failed {
                reason: "rejected".to_string(),
            },
        )
    }

    #[test]
    fn empty_report_is_a_no_op() {
        let report = SaveReport { statuses: vec![] };
        assert_eq!(report.outcome(), SaveOutcome::NoOp);
        assert!(!report.fully_saved());
        assert_eq!(report.outcome().notification(), NotificationClass::Warning);
    }

    #[test]
    fn all_saved_is_success() {
        let report = SaveReport {
            statuses: vec![saved("a"), saved("b")],
        };
        assert_eq!(report.outcome(), SaveOutcome::Success);
        assert!(report.fully_saved());
        assert_eq!(report.outcome().notification(), NotificationClass::Success);
    }

    #[test]
    fn lone_failure_is_single_failure() {
        let report = SaveReport {
            statuses: vec![failed("a")],
        };
        assert_eq!(report.outcome(), SaveOutcome::SingleFailure);
        assert_eq!(report.outcome().notification(), NotificationClass::Error);
    }

    #[test]
    fn any_failure_among_many_is_partial() {
        let report = SaveReport {
            statuses: vec![saved("a"), failed("b"), saved("c")],
        };
        assert_eq!(report.outcome(), SaveOutcome::PartialFailure);
        assert_eq!(report.failed_keys(), vec!["b"]);
    }

    #[test]
    fn every_entry_failing_still_classifies_as_partial() {
        let report = SaveReport {
            statuses: vec![failed("a"), failed("b")],
        };
        assert_eq!(report.outcome(), SaveOutcome::PartialFailure);
    }
}
