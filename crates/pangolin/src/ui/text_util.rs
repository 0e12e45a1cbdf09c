use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

/// Truncates `text` to at most `max_width` display columns, ending in `...`
/// when anything was cut.
pub fn truncate_with_ellipsis(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }

    let mut truncated = String::new();
    let mut width = 0;
    for character in text.chars() {
        let character_width = character.width().unwrap_or(0);
        if width + character_width > max_width - 3 {
            break;
        }
        truncated.push(character);
        width += character_width;
    }
    truncated.push_str("...");

    truncated
}
