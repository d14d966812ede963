//! Parsing of the human-readable fields YouTube renders

/// Extract a numeric view count from text such as `"994,843 views"`.
///
/// Every non-digit is dropped and the remaining digits are read as one
/// number, so abbreviated counts like `"1.2M views"` come out as `12`.
/// Text without digits yields 0. Counts beyond `u64` saturate.
pub fn parse_view_count(views: &str) -> u64 {
    let digits: String = views.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return 0;
    }
    digits.parse().unwrap_or(u64::MAX)
}

/// Convert a colon-separated timestamp (`"21:53"`, `"1:02:30"`, `"45"`)
/// into an ISO 8601 duration. Never fails: unparseable input gives `PT0S`.
pub fn duration_to_iso(duration: &str) -> String {
    let duration = if duration.is_empty() { "0" } else { duration };
    let parts: Vec<&str> = duration.split(':').collect();
    iso_from_parts(&parts).unwrap_or_else(|| "PT0S".to_string())
}

fn iso_from_parts(parts: &[&str]) -> Option<String> {
    let num = |s: &str| s.trim().parse::<i64>().ok();

    match parts {
        [h, m, s] => Some(format!("PT{}H{}M{}S", num(h)?, num(m)?, num(s)?)),
        [m, s] => Some(format!("PT{}M{}S", num(m)?, num(s)?)),
        [first, ..] => Some(format!("PT{}S", num(first)?)),
        [] => None,
    }
}
