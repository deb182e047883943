use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Cuts `text` to at most `max_width` terminal columns, ending in `…` when shortened.
pub fn fit_width(text: &str, max_width: usize) -> String {
    if UnicodeWidthStr::width(text) <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut result = String::new();
    let mut width = 0;
    for c in text.chars() {
        let char_width = UnicodeWidthChar::width(c).unwrap_or(0);
        // Leave one column for the ellipsis
        if width + char_width > max_width - 1 {
            break;
        }
        result.push(c);
        width += char_width;
    }
    result.push('…');
    result
}
