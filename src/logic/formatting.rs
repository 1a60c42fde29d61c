//! Formatting and display logic
//!
//! Pure functions for formatting data for human-readable display.

use chrono::NaiveDateTime;

/// Date shown in the "Date Modified" column of every backup-set row
pub const BACKUP_SET_TIMESTAMP: &str = "2024/08/30 11:56:42 AM";

/// Size column of backup-set rows (sizes are not known)
pub const SIZE_PLACEHOLDER: &str = "-";

/// Format a timestamp the way a browser prints a local date
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use backuptui::logic::formatting::format_modified;
///
/// let t = NaiveDate::from_ymd_opt(2026, 10, 9).unwrap().and_hms_opt(15, 4, 5).unwrap();
/// assert_eq!(format_modified(&t), "10/9/2026, 3:04:05 PM");
/// ```
pub fn format_modified(time: &NaiveDateTime) -> String {
    time.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string()
}

/// Shorten a name to `max` display columns, keeping the start
pub fn truncate_name(name: &str, max: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    if unicode_width::UnicodeWidthStr::width(name) <= max {
        return name.to_string();
    }
    if max == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut width = 0;
    for ch in name.chars() {
        let w = ch.width().unwrap_or(0);
        if width + w > max - 1 {
            break;
        }
        out.push(ch);
        width += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_format_modified_midnight() {
        let t = NaiveDate::from_ymd_opt(2024, 1, 2)
            .unwrap()
            .and_hms_opt(0, 0, 7)
            .unwrap();
        assert_eq!(format_modified(&t), "1/2/2024, 12:00:07 AM");
    }

    #[test]
    fn test_truncate_name_short() {
        assert_eq!(truncate_name("a.txt", 10), "a.txt");
    }

    #[test]
    fn test_truncate_name_long() {
        assert_eq!(truncate_name("holiday-photos", 8), "holiday…");
        assert_eq!(truncate_name("abc", 0), "");
    }
}
