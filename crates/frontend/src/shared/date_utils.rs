/// Utilities for date and time formatting
///
/// Provides consistent date/time formatting across the application

/// Format ISO datetime string to DD.MM.YYYY HH:MM:SS format
/// Example: "2024-03-15T14:02:26.123Z" -> "15.03.2024 14:02:26"
pub fn format_datetime(datetime_str: &str) -> String {
    if let Some((date_part, time_part)) = datetime_str.split_once('T') {
        if let Some((year, rest)) = date_part.split_once('-') {
            if let Some((month, day)) = rest.split_once('-') {
                return format!("{}.{}.{} {}", day, month, year, clean_time(time_part));
            }
        }
    }
    datetime_str.to_string()
}

/// Short HH:MM time from ISO datetime
/// Example: "2024-03-15T14:02:26.123Z" -> "14:02"
pub fn format_time(datetime_str: &str) -> String {
    match datetime_str.split_once('T') {
        Some((_, time_part)) => {
            let time = clean_time(time_part);
            let mut pieces = time.splitn(3, ':');
            match (pieces.next(), pieces.next()) {
                (Some(hours), Some(minutes)) => format!("{}:{}", hours, minutes),
                _ => time.to_string(),
            }
        }
        None => datetime_str.to_string(),
    }
}

/// Отрезать долю секунды и смещение зоны
fn clean_time(time_part: &str) -> &str {
    let end = time_part
        .find(['.', 'Z', 'z', '+', '-'])
        .unwrap_or(time_part.len());
    &time_part[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_datetime() {
        assert_eq!(
            format_datetime("2024-03-15T14:02:26.123Z"),
            "15.03.2024 14:02:26"
        );
        assert_eq!(
            format_datetime("2024-12-31T23:59:59Z"),
            "31.12.2024 23:59:59"
        );
        assert_eq!(
            format_datetime("2024-05-01T10:00:00+03:00"),
            "01.05.2024 10:00:00"
        );
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time("2024-03-15T14:02:26.123Z"), "14:02");
        assert_eq!(format_time("2024-05-01T09:05:00-05:00"), "09:05");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_datetime("invalid"), "invalid");
        assert_eq!(format_time("invalid"), "invalid");
        assert_eq!(format_datetime(""), "");
    }
}
