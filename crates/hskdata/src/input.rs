//! Types modeling the input files.

pub mod cjk_radicals;
pub mod complete_hsk;
pub mod hsk_grammar;
pub mod unihan;

/// Parses a hexadecimal codepoint such as `2F00` or `U+2F00`.
fn parse_codepoint(value: &str) -> Option<char> {
    let hex = value.strip_prefix("U+").unwrap_or(value);
    u32::from_str_radix(hex, 16).ok().and_then(char::from_u32)
}

/// Iterates through the lines that are not blank or `#` comments, with their 1-based line numbers.
fn content_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
}
