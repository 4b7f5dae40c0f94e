//! Month/year date-range formatting.

/// Three-letter English month abbreviations, January first.
const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Separator placed between the two ends of a range.
pub const RANGE_SEPARATOR: &str = " – ";

/// Default word for ongoing ranges.
pub const DEFAULT_PRESENT_LABEL: &str = "Present";

/// Format a `YYYY-MM` pair as `"Mon YYYY – Mon YYYY"` using "Present" for
/// ongoing ranges.
///
/// See [`format_date_range_with`] for the full rules.
pub fn format_date_range(start: &str, end: &str, is_current: bool) -> String {
    format_date_range_with(start, end, is_current, DEFAULT_PRESENT_LABEL)
}

/// Format a date range with a caller-chosen word for ongoing ranges.
///
/// - both ends empty and not current: empty string (caller omits the line)
/// - current: `"<start> – <present>"`, even when start is empty
/// - both ends present: `"<start> – <end>"`
/// - otherwise whichever end is present
pub fn format_date_range_with(start: &str, end: &str, is_current: bool, present: &str) -> String {
    if start.is_empty() && end.is_empty() && !is_current {
        return String::new();
    }

    let start = format_month_year(start);
    if is_current {
        return format!("{}{}{}", start, RANGE_SEPARATOR, present);
    }

    let end = format_month_year(end);
    match (start.is_empty(), end.is_empty()) {
        (false, false) => format!("{}{}{}", start, RANGE_SEPARATOR, end),
        (false, true) => start,
        _ => end,
    }
}

/// Format a single `YYYY-MM` token as `"Mon YYYY"`.
///
/// Tokens without exactly one `-` pass through unchanged. An unparsable or
/// out-of-range month yields the year alone.
pub fn format_month_year(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }

    let mut parts = value.split('-');
    let (year, month) = match (parts.next(), parts.next(), parts.next()) {
        (Some(year), Some(month), None) => (year, month),
        _ => return value.to_string(),
    };

    match month_abbreviation(month) {
        Some(abbr) => format!("{} {}", abbr, year),
        None => year.to_string(),
    }
}

/// Parse the leading digits of a month token and map 1..=12 to its name.
fn month_abbreviation(token: &str) -> Option<&'static str> {
    let digits: String = token
        .trim_start()
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    let month: usize = digits.parse().ok()?;
    if (1..=12).contains(&month) {
        Some(MONTHS[month - 1])
    } else {
        None
    }
}
