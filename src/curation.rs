use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::models::{Id, Message};

/// Transient curation overrides made by the admin reviewer.
///
/// The canonical fixture collections are never mutated; this overlay holds
/// per-message `curated` overrides for the process lifetime only. There is
/// no persistence path: a restart discards every override.
#[derive(Clone, Default)]
pub struct CurationDraft {
    overrides: Arc<RwLock<HashMap<Id, bool>>>,
}

impl CurationDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an override for one message.
    pub fn set(&self, id: &str, curated: bool) {
        self.overrides
            .write()
            .unwrap()
            .insert(id.to_string(), curated);
    }

    /// Drop the override for one message, reverting to the fixture value.
    pub fn reset(&self, id: &str) {
        self.overrides.write().unwrap().remove(id);
    }

    pub fn get(&self, id: &str) -> Option<bool> {
        self.overrides.read().unwrap().get(id).copied()
    }

    /// Apply the overrides to a message list (typically a repository query
    /// result), leaving order untouched.
    pub fn apply(&self, mut messages: Vec<Message>) -> Vec<Message> {
        let overrides = self.overrides.read().unwrap();
        if overrides.is_empty() {
            return messages;
        }
        for msg in &mut messages {
            if let Some(&curated) = overrides.get(&msg.id) {
                msg.curated = curated;
            }
        }
        messages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(id: &str, curated: bool) -> Message {
        serde_json::from_value(serde_json::json!({
            "id": id, "author": "A", "relation": "Friend",
            "text": "hi", "date": "2020-01-01", "curated": curated
        }))
        .unwrap()
    }

    #[test]
    fn overrides_apply_and_reset() {
        let draft = CurationDraft::new();
        let canonical = vec![message("m1", false), message("m2", true)];

        let out = draft.apply(canonical.clone());
        assert_eq!(out, canonical);

        draft.set("m1", true);
        let out = draft.apply(canonical.clone());
        assert!(out[0].curated);
        assert!(out[1].curated);
        // canonical input untouched
        assert!(!canonical[0].curated);

        draft.reset("m1");
        assert_eq!(draft.get("m1"), None);
        assert_eq!(draft.apply(canonical.clone()), canonical);
    }
}
