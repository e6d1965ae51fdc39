use std::collections::BTreeMap;

use crate::tags::types::Tag;

/// Renders key/value pairs as `k1=v1,k2=v2`, sorted by key.
///
/// Accepts anything iterable as pairs of string-likes, e.g.
/// `&HashMap<String, String>` or `&BTreeMap<String, String>`.
pub fn format_map<I, K, V>(entries: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut pairs: Vec<(K, V)> = entries.into_iter().collect();
    pairs.sort_by(|(left, _), (right, _)| left.as_ref().cmp(right.as_ref()));

    pairs
        .iter()
        .map(|(key, value)| format!("{}={}", key.as_ref(), value.as_ref()))
        .collect::<Vec<_>>()
        .join(",")
}

/// Renders a tag list the way `format_map` renders a map; repeated keys keep
/// their last value.
pub fn format_tags(tags: &[Tag]) -> String {
    let collapsed: BTreeMap<&str, &str> = tags
        .iter()
        .map(|tag| (tag.key.as_str(), tag.value.as_str()))
        .collect();
    format_map(collapsed)
}
