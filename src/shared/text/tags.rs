// src/shared/text/tags.rs
//
// Tag lists are persisted as JSONB string arrays. The comma-separated
// rendition only exists at the text boundary (imports from legacy data,
// display strings), so both directions live here and nowhere else.

/// Splits a comma-separated string into an ordered tag list.
/// Tokens are trimmed; blanks are dropped.
pub fn parse_tag_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Renders a tag list back into its comma-separated form.
pub fn format_tag_list(tags: &[String]) -> String {
    tags.join(", ")
}
