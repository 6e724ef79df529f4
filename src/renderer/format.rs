use crate::constants::LINE_END;

/// Whitespace removed around rendered blocks.
const BLANKS: &[char] = &[' ', '\t', '\n', '\r', '\0', '\x0B'];

/// Trims `content` on both sides and appends exactly one line terminator.
pub fn terminate(content: &str) -> String {
    format!("{}{LINE_END}", content.trim_matches(BLANKS))
}

/// Right-trims one loop item, keeping its leading line break and padding.
pub fn trim_item(content: &str) -> &str {
    content.trim_end_matches(BLANKS)
}

/// Left-trims concatenated loop items and appends exactly one line terminator.
pub fn terminate_items(items: &str) -> String {
    format!("{}{LINE_END}", items.trim_start_matches(BLANKS))
}

/// Prefixes every line of a captured block with `width` spaces.
///
/// The capture is first prefixed with a line terminator, so the result always
/// starts with a line break followed by the padding.
pub fn indent(captured: &str, width: usize) -> String {
    let padded = format!("{LINE_END}{}", " ".repeat(width));
    format!("{LINE_END}{captured}").replace(LINE_END, &padded)
}
