use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::tags::reconcile::TagIndex;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tag {
    pub key: String,
    pub value: String,
}

impl Tag {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Changes that turn one tag set into another.
///
/// A key appears in at most one of the three lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagDelta {
    pub added: Vec<Tag>,
    pub updated: Vec<Tag>,
    pub deleted: Vec<Tag>,
}

impl TagDelta {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.updated.is_empty() && self.deleted.is_empty()
    }

    /// Tags for a single tag-resource call: additions first, then updates.
    pub fn tags_to_set(&self) -> Vec<Tag> {
        self.added.iter().chain(&self.updated).cloned().collect()
    }

    pub fn keys_to_remove(&self) -> Vec<String> {
        self.deleted.iter().map(|tag| tag.key.clone()).collect()
    }

    /// Applies the delta to `current`, keeping surviving tags in place and
    /// appending new keys.
    ///
    /// `current` is collapsed with the same rule `compare_tags` uses (first
    /// position, last value), so the result never repeats a key.
    pub fn apply(&self, current: &[Tag]) -> Vec<Tag> {
        let current_index = TagIndex::build(current);
        let removed: HashSet<&str> = self.deleted.iter().map(|tag| tag.key.as_str()).collect();
        let to_set = self.tags_to_set();
        let set_index = TagIndex::build(&to_set);

        let mut result: Vec<Tag> = current_index
            .entries()
            .filter(|(key, _)| !removed.contains(key))
            .map(|(key, value)| Tag::new(key, set_index.get(key).unwrap_or(value)))
            .collect();
        result.extend(
            set_index
                .entries()
                .filter(|(key, _)| !current_index.contains(key))
                .map(|(key, value)| Tag::new(key, value)),
        );
        result
    }
}
