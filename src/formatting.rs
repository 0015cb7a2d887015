use chrono::{DateTime, NaiveDate};

/// Formats a size given in megabytes, switching to gigabytes with one decimal
/// place from 1024 MB upward. Halves round away from zero (1.25 GB reads as
/// 1.3 GB).
pub fn format_file_size(size_in_mb: f64) -> String {
    if size_in_mb >= 1024.0 {
        let gigabytes = (size_in_mb / 1024.0 * 10.0).round() / 10.0;
        format!("{gigabytes:.1} GB")
    } else {
        format!("{size_in_mb} MB")
    }
}

/// Formats a date such as `2024-01-05` or `2024-01-05T10:00:00Z` as
/// `Jan 5, 2024`. Returns `None` for unparseable input.
pub fn format_date(value: &str) -> Option<String> {
    let value = value.trim();
    let date = DateTime::parse_from_rfc3339(value)
        .map(|datetime| datetime.date_naive())
        .or_else(|_| NaiveDate::parse_from_str(value, "%Y-%m-%d"))
        .ok()?;

    Some(date.format("%b %-d, %Y").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_sizes() {
        assert_eq!(format_file_size(512.0), "512 MB");
        assert_eq!(format_file_size(1.5), "1.5 MB");
        assert_eq!(format_file_size(1024.0), "1.0 GB");
        assert_eq!(format_file_size(2560.0), "2.5 GB");
        assert_eq!(format_file_size(1280.0), "1.3 GB");
        assert_eq!(format_file_size(3328.0), "3.3 GB");
    }

    #[test]
    fn dates() {
        assert_eq!(format_date("2024-01-05").as_deref(), Some("Jan 5, 2024"));
        assert_eq!(
            format_date("2023-11-30T22:15:00+00:00").as_deref(),
            Some("Nov 30, 2023")
        );
        assert_eq!(format_date("yesterday"), None);
    }
}
