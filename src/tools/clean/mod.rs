mod tests;
mod utils;

use utils::*;

/// Clean visible text.
///
/// Performs the following operations in order:
/// 1. Remove zero-width characters
/// 2. Remove control characters (except newlines/tabs)
/// 3. Normalize whitespace (collapse runs, including non-breaking spaces, and trim)
///
/// # Examples
/// ```
/// use seoscope::tools::clean::clean_text;
///
/// let dirty = "  Hello\u{200B}\n\n   world\u{00A0} ";
/// assert_eq!(clean_text(dirty), "Hello world");
/// ```
pub fn clean_text(text: &str) -> String {
    let result = remove_zero_width_chars(text);
    let result = remove_control_chars(&result);
    normalize_whitespace(&result)
}

/// Count whitespace-delimited, non-empty tokens.
///
/// # Examples
/// ```
/// use seoscope::tools::clean::word_count;
///
/// assert_eq!(word_count("  one two\n\tthree "), 3);
/// assert_eq!(word_count(""), 0);
/// ```
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
