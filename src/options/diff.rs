use super::types::{OptionEntry, SettingsSnapshot};

/// Collects `{key, draft value}` for every tracked key whose draft value
/// differs from the original. Values are opaque strings, compared strictly;
/// keys outside `tracked_keys` are never looked at. A key present on one side
/// only also counts as changed, with a missing draft value sent as empty.
pub fn compute_change_set(
    original: &SettingsSnapshot,
    draft: &SettingsSnapshot,
    tracked_keys: &[&str],
) -> Vec<OptionEntry> {
    tracked_keys
        .iter()
        .filter_map(|key| {
            let before = original.get(*key);
            let after = draft.get(*key);
            if before == after {
                return None;
            }
            Some(OptionEntry {
                key: (*key).to_string(),
                value: after.cloned().unwrap_or_default(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn snapshot(pairs: &[(&str, &str)]) -> SettingsSnapshot {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn identical_snapshots_produce_an_empty_change_set() {
        let original = snapshot(&[("SEODescription", "an api gateway"), ("SEOKeywords", "api")]);
        let draft = original.clone();
        let changes = compute_change_set(&original, &draft, &["SEODescription", "SEOKeywords"]);
        assert!(changes.is_empty());
    }

    #[test]
    fn only_edited_tracked_keys_are_included() {
        let original = snapshot(&[("SEODescription", "old"), ("SEOKeywords", "api")]);
        let draft = snapshot(&[("SEODescription", "new"), ("SEOKeywords", "api")]);
        let changes = compute_change_set(&original, &draft, &["SEODescription", "SEOKeywords"]);
        assert_eq!(
            changes,
            vec![OptionEntry {
                key: "SEODescription".to_string(),
                value: "new".to_string(),
            }]
        );
    }

    #[test]
    fn differences_outside_the_tracked_list_are_ignored() {
        let original = snapshot(&[("SEODescription", "same"), ("Theme", "light")]);
        let draft = snapshot(&[("SEODescription", "same"), ("Theme", "dark")]);
        let changes = compute_change_set(&original, &draft, &["SEODescription"]);
        assert!(changes.is_empty());
    }

    #[test]
    fn order_follows_the_tracked_key_list() {
        let original = snapshot(&[("a", "1"), ("b", "2"), ("c", "3")]);
        let draft = snapshot(&[("a", "x"), ("b", "2"), ("c", "y")]);
        let changes = compute_change_set(&original, &draft, &["c", "a", "b"]);
        let keys: Vec<&str> = changes.iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, vec!["c", "a"]);
    }

    #[test]
    fn a_key_new_in_the_draft_counts_as_changed() {
        let original = snapshot(&[]);
        let draft = snapshot(&[("SEOKeywords", "api,gateway")]);
        let changes = compute_change_set(&original, &draft, &["SEOKeywords"]);
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].value, "api,gateway");
    }

    #[test]
    fn a_key_cleared_from_the_draft_is_sent_as_empty() {
        let original = snapshot(&[("SEOKeywords", "api")]);
        let draft = snapshot(&[]);
        let changes = compute_change_set(&original, &draft, &["SEOKeywords"]);
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].value, "");
    }

    #[test]
    fn values_are_not_coerced() {
        // "0" vs "0.0" are different option values even if numerically equal.
        let original = snapshot(&[("MinTopUp", "0")]);
        let draft = snapshot(&[("MinTopUp", "0.0")]);
        let changes = compute_change_set(&original, &draft, &["MinTopUp"]);
        assert_eq!(changes.len(), 1);
    }
}
