/// Character budget for card content in the list view.
pub const EXCERPT_CHAR_LIMIT: usize = 300;
pub const ELLIPSIS: &str = "...";

/// Truncates `content` to [`EXCERPT_CHAR_LIMIT`] characters, appending [`ELLIPSIS`]
/// only when something was cut.
pub fn excerpt(content: &str) -> String {
    match content.char_indices().nth(EXCERPT_CHAR_LIMIT) {
        Some((end, _)) => format!("{}{ELLIPSIS}", &content[..end]),
        None => content.to_string(),
    }
}
