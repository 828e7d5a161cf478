/// Canonical whitespace form of extracted resume text.
///
/// Splits on every line boundary, trims each line, drops blank lines and
/// joins the rest with `\n`. Idempotent; whitespace-only input yields `""`.
pub fn normalize_text(text: &str) -> String {
    text.split(is_line_boundary)
        .map(|line| line.trim_matches(is_space))
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// True when the text holds nothing but whitespace, which is exactly when
/// [`normalize_text`] yields `""`.
pub fn is_blank(text: &str) -> bool {
    text.chars().all(is_space)
}

// Unicode whitespace plus the ASCII information separators, which extracted
// text uses as line or field breaks.
fn is_space(c: char) -> bool {
    c.is_whitespace() || matches!(c, '\u{1c}'..='\u{1f}')
}

// `\r\n` splits into a line and an empty segment, which is then filtered.
fn is_line_boundary(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r'
            | '\u{0b}'
            | '\u{0c}'
            | '\u{1c}'
            | '\u{1d}'
            | '\u{1e}'
            | '\u{85}'
            | '\u{2028}'
            | '\u{2029}'
    )
}
