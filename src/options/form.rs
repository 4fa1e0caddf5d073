use super::diff::compute_change_set;
use super::types::{OptionEntry, SettingsSnapshot};

/// Option keys managed by the SEO settings form.
pub const SEO_TRACKED_KEYS: &[&str] = &["SEODescription", "SEOKeywords"];

/// Edit-state holder for a settings form: the last-persisted snapshot plus an
/// in-progress draft, restricted to a fixed tracked-key list.
///
/// The save path never mutates either snapshot; `commit` is the caller's
/// acknowledgement of a fully successful save and replaces the baseline.
#[derive(Debug, Clone)]
pub struct SettingsForm {
    tracked_keys: Vec<String>,
    original: SettingsSnapshot,
    draft: SettingsSnapshot,
}

impl SettingsForm {
    pub fn new(tracked_keys: &[&str]) -> Self {
        Self {
            tracked_keys: tracked_keys.iter().map(|k| (*k).to_string()).collect(),
            original: SettingsSnapshot::new(),
            draft: SettingsSnapshot::new(),
        }
    }

    /// Seeds both snapshots from freshly fetched options, dropping anything
    /// the form does not track.
    pub fn load(&mut self, options: &SettingsSnapshot) {
        let current: SettingsSnapshot = self
            .tracked_keys
            .iter()
            .filter_map(|key| options.get(key.as_str()).map(|v| (key.clone(), v.clone())))
            .collect();
        self.draft = current.clone();
        self.original = current;
    }

    /// Edits one draft field. Untracked keys are ignored.
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        if self.tracked_keys.iter().any(|k| k == key) {
            self.draft.insert(key.to_string(), value.into());
        }
    }

    pub fn draft(&self) -> &SettingsSnapshot {
        &self.draft
    }

    pub fn change_set(&self) -> Vec<OptionEntry> {
        let keys: Vec<&str> = self.tracked_keys.iter().map(String::as_str).collect();
        compute_change_set(&self.original, &self.draft, &keys)
    }

    /// Replaces the baseline after every entry persisted successfully.
    pub fn commit(&mut self) {
        self.original = self.draft.clone();
    }

    /// Drops unsaved edits, returning the draft to the baseline.
    pub fn discard(&mut self) {
        self.draft = self.original.clone();
    }
}
