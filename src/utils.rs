//! Text helpers shared by the extractor and the validator.
//!
//! - Title to filename derivation (the join key between a scraped article and
//!   the file the scraper under test wrote)
//! - Body normalization for whitespace-tolerant comparison
//! - String truncation for log fields

/// Turn an article title into the stem of the file the scraper should write.
///
/// ASCII punctuation is removed outright (not replaced), then each space
/// becomes an underscore. The underscore itself survives so that applying
/// the derivation to its own output changes nothing.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(filename_stem("Hello, World!"), "Hello_World");
/// assert_eq!(filename_stem("COVID-19: what's next?"), "COVID19_whats_next");
/// ```
pub fn filename_stem(title: &str) -> String {
    title
        .chars()
        .filter(|c| !c.is_ascii_punctuation() || *c == '_')
        .map(|c| if c == ' ' { '_' } else { c })
        .collect()
}

/// Full filename for a title, `extension` including its leading dot.
pub fn expected_filename(title: &str, extension: &str) -> String {
    format!("{}{}", filename_stem(title), extension)
}

/// Trim and drop every carriage return and line feed.
///
/// This is the form shown back to the user in a content mismatch.
pub fn strip_line_breaks(s: &str) -> String {
    s.trim().chars().filter(|c| !matches!(c, '\r' | '\n')).collect()
}

/// Comparison form of an article body: trimmed, no line breaks, no spaces.
///
/// Only U+0020 is removed from the interior; tabs and other whitespace
/// still count.
pub fn normalize_body(s: &str) -> String {
    strip_line_breaks(s).replace(' ', "")
}

/// Truncate a string for logging purposes.
///
/// Long strings are cut to at most `max` bytes (backing off to a char
/// boundary) with `"…(+N bytes)"` appended.
pub fn truncate_for_log(s: &str, max: usize) -> String {
    if s.len() <= max {
        return s.to_string();
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}…(+{} bytes)", &s[..end], s.len() - end)
}
