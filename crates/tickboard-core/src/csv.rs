//! Lenient CSV primitives for the published feed documents.
//!
//! The upstream sheets are republished CSV with light quoting: a double
//! quote toggles an in-quotes mode in which commas are literal, and quote
//! characters never appear in emitted values. Malformed cells degrade to
//! defaults instead of failing the row; feed noise (separator rows, blank
//! trailing lines) is normal and must not surface as errors.

/// Split one CSV line into trimmed fields.
///
/// Commas inside double quotes are treated as literal content; the quote
/// characters themselves are stripped from the emitted field.
pub fn split_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(ch),
        }
    }
    fields.push(current.trim().to_string());
    fields
}

/// Coerce a raw feed cell into a number.
///
/// Strips grouping commas and stray quotes before parsing. Empty,
/// unparseable, or non-finite input yields exactly `0.0`; this never fails
/// and never produces NaN.
pub fn parse_number(value: &str) -> f64 {
    if value.is_empty() {
        return 0.0;
    }
    let cleaned: String = value.chars().filter(|c| *c != ',' && *c != '"').collect();
    cleaned
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .unwrap_or(0.0)
}

/// Return the data lines of a feed body: blank and whitespace-only lines
/// removed, then the header (first remaining line) dropped.
pub fn data_lines(body: &str) -> impl Iterator<Item = &str> {
    body.lines().filter(|line| !line.trim().is_empty()).skip(1)
}
