//! Common utility functions shared across the codebase.

use unicode_width::UnicodeWidthStr;

/// Truncates text to a maximum display width, appending an ellipsis when
/// anything was cut. Width is measured in terminal columns, so CJK text
/// and other wide scripts truncate correctly.
///
/// # Examples
///
/// ```
/// use lingo::utils::truncate_display;
///
/// assert_eq!(truncate_display("Save Crate", 20), "Save Crate");
/// assert_eq!(truncate_display("Analyze entire Crate", 10), "Analyze e…");
/// ```
pub fn truncate_display(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }

    let mut result = String::new();
    let mut width = 0;
    for c in text.chars() {
        let char_width = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if width + char_width > max_width.saturating_sub(1) {
            break;
        }
        width += char_width;
        result.push(c);
    }
    result.push('…');
    result
}

/// Replaces line breaks with a visible marker so multi-line source strings
/// stay on one report line.
pub fn single_line(text: &str) -> String {
    text.replace('\n', "⏎")
}
