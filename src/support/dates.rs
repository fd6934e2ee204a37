use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

/// True if `date` parses with the strftime-style `format` and formats back to
/// the identical string, so `"2024-2-3"` is rejected for `"%Y-%m-%d"`.
pub fn validate_date(format: &str, date: &str) -> bool {
    let rendered = if let Ok(dt) = DateTime::parse_from_str(date, format) {
        dt.format(format).to_string()
    } else if let Ok(dt) = NaiveDateTime::parse_from_str(date, format) {
        dt.format(format).to_string()
    } else if let Ok(d) = NaiveDate::parse_from_str(date, format) {
        d.format(format).to_string()
    } else if let Ok(t) = NaiveTime::parse_from_str(date, format) {
        t.format(format).to_string()
    } else {
        return false;
    };

    rendered == date
}
