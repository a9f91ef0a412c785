//! The uppercase transform.
//!
//! Uses the standard library's Unicode default case mapping. No locale
//! tailoring is applied, so `i` always maps to `I`.

/// Converts text to uppercase, treating absent input as empty.
///
/// # Examples
///
/// ```
/// use caps_locker::core::to_caps;
///
/// assert_eq!(
///     to_caps(Some("ST010_FG01_BG1_Container_Present")),
///     "ST010_FG01_BG1_CONTAINER_PRESENT"
/// );
/// assert_eq!(to_caps(None), "");
/// ```
#[must_use]
pub fn to_caps(text: Option<&str>) -> String {
    text.map(uppercase).unwrap_or_default()
}

/// Converts text to uppercase.
///
/// Characters without an uppercase form (digits, underscores, CJK) are
/// copied as-is. Some characters expand, e.g. `ß` becomes `SS`.
#[must_use]
pub fn uppercase(text: &str) -> String {
    text.to_uppercase()
}
