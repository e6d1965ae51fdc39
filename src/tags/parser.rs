use crate::{
    error::{MetaError, invalid_tag_syntax},
    tags::types::Tag,
};

pub const TAG_SEPARATOR: char = ',';
pub const KEY_VALUE_SEPARATOR: char = '=';

/// Parses `Key=Value,Key2=Value2` into tags, preserving input order.
///
/// Empty segments (e.g. from a trailing comma) are skipped and values may be
/// empty. Each segment splits on its first `=`, so values may contain `=`.
/// Duplicate keys are returned as given.
pub fn parse_tags(src: &str) -> Result<Vec<Tag>, MetaError> {
    let mut tags = Vec::new();

    for segment in src.split(TAG_SEPARATOR) {
        if segment.is_empty() {
            continue;
        }

        let Some((key, value)) = segment.split_once(KEY_VALUE_SEPARATOR) else {
            tracing::debug!(target: "tags", segment = %segment, "tag_segment_missing_separator");
            return Err(invalid_tag_syntax(format!(
                "invalid tags '{}': segment '{}' is not Key=Value",
                src, segment
            )));
        };
        if key.is_empty() {
            tracing::debug!(target: "tags", segment = %segment, "tag_segment_empty_key");
            return Err(invalid_tag_syntax(format!(
                "invalid tags '{}': segment '{}' has an empty key",
                src, segment
            )));
        }

        tags.push(Tag::new(key, value));
    }

    Ok(tags)
}
