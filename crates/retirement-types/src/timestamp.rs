//! ISO-8601 timestamp → display date and time.

/// Split `2024-03-01T10:15:30.500Z` into `("2024-03-01", "10:15:30")`.
///
/// Fractional seconds and a trailing `Z` are dropped from the time. A value
/// without a `T` separator is returned whole as the date. Absent or empty
/// input yields two empty strings.
pub fn split_timestamp(timestamp: Option<&str>) -> (String, String) {
    let Some(ts) = timestamp.filter(|t| !t.is_empty()) else {
        return (String::new(), String::new());
    };

    match ts.split_once('T') {
        Some((date, time)) => {
            let time = match time.split_once('.') {
                Some((whole, _)) => whole,
                None => time.strip_suffix('Z').unwrap_or(time),
            };
            (date.to_string(), time.to_string())
        }
        None => (ts.to_string(), String::new()),
    }
}
