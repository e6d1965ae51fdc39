use std::collections::HashMap;

use crate::tags::types::{Tag, TagDelta};

/// Key lookup over a tag list: last occurrence of a key wins its value,
/// first occurrence fixes its position.
pub(crate) struct TagIndex<'a> {
    order: Vec<&'a str>,
    values: HashMap<&'a str, &'a str>,
}

impl<'a> TagIndex<'a> {
    pub(crate) fn build(tags: &'a [Tag]) -> Self {
        let mut order = Vec::with_capacity(tags.len());
        let mut values = HashMap::with_capacity(tags.len());
        for tag in tags {
            if values
                .insert(tag.key.as_str(), tag.value.as_str())
                .is_none()
            {
                order.push(tag.key.as_str());
            }
        }
        Self { order, values }
    }

    pub(crate) fn get(&self, key: &str) -> Option<&'a str> {
        self.values.get(key).copied()
    }

    pub(crate) fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub(crate) fn entries(&self) -> impl Iterator<Item = (&'a str, &'a str)> {
        self.order
            .iter()
            .filter_map(|key| self.get(key).map(|value| (*key, value)))
    }
}

/// Partitions the difference between `old` and `new` into added, updated and
/// deleted tags.
///
/// `added` and `updated` carry the new value and follow key order in `new`;
/// `deleted` carries the old value and follows key order in `old`. Unchanged
/// pairs are omitted. When a list repeats a key, its last value is used.
pub fn compare_tags(old: &[Tag], new: &[Tag]) -> TagDelta {
    let old_index = TagIndex::build(old);
    let new_index = TagIndex::build(new);
    let mut delta = TagDelta::default();

    for (key, value) in new_index.entries() {
        match old_index.get(key) {
            None => delta.added.push(Tag::new(key, value)),
            Some(previous) if previous != value => delta.updated.push(Tag::new(key, value)),
            Some(_) => {}
        }
    }

    for (key, value) in old_index.entries() {
        if !new_index.contains(key) {
            delta.deleted.push(Tag::new(key, value));
        }
    }

    tracing::debug!(
        target: "tags",
        old = old.len(),
        new = new.len(),
        added = delta.added.len(),
        updated = delta.updated.len(),
        deleted = delta.deleted.len(),
        "tags_compared"
    );

    delta
}
