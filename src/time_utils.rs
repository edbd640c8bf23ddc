use chrono::{DateTime, NaiveDate, NaiveTime};

pub const MS_PER_DAY: f64 = 24.0 * 60.0 * 60.0 * 1000.0;

/// Parse a date-picker value (`YYYY-MM-DD`).
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

/// Epoch milliseconds at UTC midnight of the given date.
pub fn date_to_epoch_ms(date: NaiveDate) -> i64 {
    date.and_time(NaiveTime::MIN).and_utc().timestamp_millis()
}

/// Format a time-axis tick according to the visible span.
///
/// - span under ~4 months -> `DD.MM`
/// - anything wider -> `MM.YYYY`
pub fn format_tick_label(timestamp_ms: f64, span_ms: f64) -> String {
    let Some(datetime) = DateTime::from_timestamp_millis(timestamp_ms as i64) else {
        return String::new();
    };
    let date = datetime.date_naive();
    if span_ms <= 120.0 * MS_PER_DAY {
        date.format("%d.%m").to_string()
    } else {
        date.format("%m.%Y").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_picker_values() {
        let date = parse_date("2020-01-01").unwrap();
        assert_eq!(date_to_epoch_ms(date), 1_577_836_800_000);
        assert!(parse_date("01/02/2020").is_none());
        assert!(parse_date("").is_none());
    }

    #[test]
    fn tick_labels_follow_span() {
        let ts = 1_577_836_800_000.0; // 2020-01-01
        assert_eq!(format_tick_label(ts, 30.0 * MS_PER_DAY), "01.01");
        assert_eq!(format_tick_label(ts, 400.0 * MS_PER_DAY), "01.2020");
    }
}
