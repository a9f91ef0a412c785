//! Newline rules for the output sinks.

/// Appends a `\n` unless the text already ends with one.
///
/// # Examples
///
/// ```
/// use caps_locker::core::ensure_trailing_newline;
///
/// assert_eq!(ensure_trailing_newline("ABC".to_string()), "ABC\n");
/// assert_eq!(ensure_trailing_newline("ABC\n".to_string()), "ABC\n");
/// ```
#[must_use]
pub fn ensure_trailing_newline(mut text: String) -> String {
    if !text.ends_with('\n') {
        text.push('\n');
    }
    text
}

/// Strips every trailing `\n`.
///
/// Applied to the GUI input so a widget's final line break does not show
/// up as a blank line in the output.
#[must_use]
pub fn strip_trailing_newlines(text: &str) -> &str {
    text.trim_end_matches('\n')
}

/// Strips at most one trailing `\n`.
#[must_use]
pub fn trim_trailing_newline(text: &str) -> &str {
    text.strip_suffix('\n').unwrap_or(text)
}
