//! Test utilities for TUI component tests.

/// Removes ANSI escape sequences, leaving only visible text.
///
/// # Example
///
/// ```
/// use rmbs_desk::tui::components::test_utils::strip_ansi_codes;
///
/// assert_eq!(strip_ansi_codes("\x1b[32m[AAA]\x1b[0m"), "[AAA]");
/// ```
#[must_use]
pub fn strip_ansi_codes(text: &str) -> String {
    let mut visible = String::with_capacity(text.len());
    let mut chars = text.chars();

    while let Some(ch) = chars.next() {
        if ch != '\x1b' {
            visible.push(ch);
            continue;
        }
        // Skip to the final byte of the sequence.
        for escaped in chars.by_ref() {
            if escaped.is_ascii_alphabetic() {
                break;
            }
        }
    }

    visible
}
