//! Display-width aware text helpers

use unicode_width::UnicodeWidthChar;

/// Hard-wrap `text` into lines of at most `width` terminal columns.
///
/// Breaks fall on character boundaries; record dumps are a single long
/// JSON line with no reliable word breaks.
pub fn wrap_to_width(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if current_width + w > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
        }
        current.push(ch);
        current_width += w;
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}
