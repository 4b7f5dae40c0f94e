//! Text normalization shared by every renderer.
//!
//! Both the PDF and the DOCX path build their lines exclusively through
//! these helpers, so bullet segmentation and header composition cannot
//! drift between formats.

/// Characters stripped from the start of each description line.
///
/// Users frequently paste bullets from other editors; these are removed so
/// the renderer's own bullet glyph is not doubled.
pub const BULLET_GLYPHS: &[char] = &[
    '\u{2022}', // • bullet
    '\u{00B7}', // · middle dot
    '\u{2013}', // – en dash
    '\u{2014}', // — em dash
    '-',
    '*',
    '\u{25CF}', // ● black circle
    ' ',
];

/// Separator between contact fields.
pub const CONTACT_SEPARATOR: &str = "  |  ";

/// Separator between the parts of an entry header.
pub const HEADER_SEPARATOR: &str = " | ";

/// Split a free-text description into render-ready bullet lines.
///
/// Each line is trimmed, stripped of leading bullet glyphs and trimmed
/// again; empty lines are dropped. A description with content but no
/// surviving line (one made only of bullet glyphs, say) still yields its
/// whole trimmed text as a single line.
pub fn normalize_description(raw: &str) -> Vec<String> {
    let lines: Vec<String> = raw
        .split('\n')
        .map(strip_bullet_prefix)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    if lines.is_empty() {
        let trimmed = raw.trim();
        if !trimmed.is_empty() {
            return vec![trimmed.to_string()];
        }
    }

    lines
}

/// Trim a single line and remove any leading run of [`BULLET_GLYPHS`].
pub fn strip_bullet_prefix(line: &str) -> &str {
    line.trim().trim_start_matches(BULLET_GLYPHS).trim()
}

/// Join the non-empty parts with `separator`.
///
/// Returns an empty string when every part is empty.
pub fn join_non_empty<'a, I>(parts: I, separator: &str) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    parts
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(separator)
}

/// Append `" (location)"` to a header when the location is present.
pub fn with_location(header: String, location: &str) -> String {
    match (header.is_empty(), location.is_empty()) {
        (_, true) => header,
        (true, false) => format!("({})", location),
        (false, false) => format!("{} ({})", header, location),
    }
}

/// `label: value`, degrading to whichever side is present.
pub fn label_value(label: &str, value: &str) -> String {
    join_non_empty([label, value], ": ")
}

/// `degree in field`, degrading to whichever side is present.
pub fn degree_with_field(degree: &str, field: &str) -> String {
    join_non_empty([degree, field], " in ")
}

/// Return `value` unless it is blank, otherwise `fallback`.
pub fn label_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.trim().is_empty() {
        fallback
    } else {
        value
    }
}
