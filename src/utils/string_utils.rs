use std::borrow::Cow;

/// Appended to text that was cut short
pub const ELLIPSIS: &str = "...";

/// Truncate text to `max_length` characters and add an ellipsis
///
/// Length is counted in `char`s, so multi-byte text is never split inside a
/// character. Text that already fits is returned borrowed and untouched.
/// Otherwise the first `max_length` characters are trimmed of surrounding
/// whitespace before [`ELLIPSIS`] is appended; the result may therefore be
/// up to three characters longer than `max_length`.
pub fn truncate_text(text: &str, max_length: usize) -> Cow<'_, str> {
    match text.char_indices().nth(max_length) {
        None => Cow::Borrowed(text),
        Some((cut, _)) => Cow::Owned(format!("{}{}", text[..cut].trim(), ELLIPSIS)),
    }
}
