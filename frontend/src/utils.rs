use crate::models::Thumbnails;
use chrono::{DateTime, Local, NaiveDateTime, Utc};

pub const CHANNEL_THUMBNAIL_PLACEHOLDER: &str =
    "https://via.placeholder.com/80x80/ff0000/ffffff?text=YT";
pub const VIDEO_THUMBNAIL_PLACEHOLDER: &str =
    "https://via.placeholder.com/320x240/cccccc/666666?text=Video";

// Compact form used on cards: 1.5K, 2.3M
pub fn format_number(number: u64) -> String {
    if number >= 1_000_000 {
        format!("{:.1}M", number as f64 / 1_000_000.0)
    } else if number >= 1_000 {
        format!("{:.1}K", number as f64 / 1_000.0)
    } else {
        number.to_string()
    }
}

// Formats each x1000 step
pub fn format_grouped(number: u64) -> String {
    let num_str = number.to_string();
    let mut result = String::new();
    let len = num_str.len();

    for (i, c) in num_str.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(datetime) = raw.parse::<DateTime<Utc>>() {
        return Some(datetime);
    }
    // The backend emits naive UTC timestamps without an offset
    raw.parse::<NaiveDateTime>().ok().map(|naive| naive.and_utc())
}

/// Calendar date in the viewer's time zone. Unparsable input is shown as is.
pub fn format_display_date(raw: &str) -> String {
    match parse_timestamp(raw) {
        Some(datetime) => datetime.with_timezone(&Local).format("%Y-%m-%d").to_string(),
        None => raw.to_string(),
    }
}

/// `PT1H2M3S` -> `01:02:03`, `PT4M5S` -> `04:05`. Days fold into hours.
pub fn format_iso8601_duration(duration: &str) -> Option<String> {
    let body = duration.strip_prefix('P')?;
    let (date_part, time_part) = match body.split_once('T') {
        Some((date, time)) => (date, time),
        None => (body, ""),
    };

    let mut hours = 0u64;
    let mut minutes = 0u64;
    let mut seconds = 0u64;
    let mut digits = String::new();

    for c in date_part.chars() {
        match c {
            '0'..='9' => digits.push(c),
            'D' => hours += digits.parse::<u64>().ok()? * 24,
            _ => return None,
        }
        if !c.is_ascii_digit() {
            digits.clear();
        }
    }
    if !digits.is_empty() {
        return None;
    }

    for c in time_part.chars() {
        match c {
            '0'..='9' => digits.push(c),
            'H' => hours += digits.parse::<u64>().ok()?,
            'M' => minutes = digits.parse().ok()?,
            // Fractions of a second are dropped
            'S' => seconds = digits.split('.').next()?.parse().ok()?,
            '.' => digits.push(c),
            _ => return None,
        }
        if matches!(c, 'H' | 'M' | 'S') {
            digits.clear();
        }
    }
    if !digits.is_empty() {
        return None;
    }

    if hours != 0 {
        Some(format!("{:02}:{:02}:{:02}", hours, minutes, seconds))
    } else {
        Some(format!("{:02}:{:02}", minutes, seconds))
    }
}

/// Custom URLs come with or without the leading `@`.
pub fn display_handle(custom_url: &str) -> Option<String> {
    let handle = custom_url.trim().trim_start_matches('@');
    if handle.is_empty() {
        None
    } else {
        Some(format!("@{handle}"))
    }
}

/// First available thumbnail in `preferred` order, then any size at all.
pub fn thumbnail_url(thumbnails: &Thumbnails, preferred: &[&str], placeholder: &str) -> String {
    let usable = |url: &Option<String>| url.as_deref().filter(|u| !u.is_empty()).map(str::to_string);

    preferred
        .iter()
        .filter_map(|size| thumbnails.get(*size).and_then(usable))
        .next()
        .or_else(|| thumbnails.values().filter_map(usable).next())
        .unwrap_or_else(|| placeholder.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn compact_numbers() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1_000), "1.0K");
        assert_eq!(format_number(1_500), "1.5K");
        assert_eq!(format_number(2_300_000), "2.3M");
        assert_eq!(format_number(50_000_000), "50.0M");
    }

    #[test]
    fn grouped_numbers() {
        assert_eq!(format_grouped(7), "7");
        assert_eq!(format_grouped(1_000), "1,000");
        assert_eq!(format_grouped(50_000_000), "50,000,000");
    }

    #[test]
    fn dates_render_in_local_time() {
        let expected = Utc
            .with_ymd_and_hms(2024, 3, 5, 12, 0, 0)
            .unwrap()
            .with_timezone(&Local)
            .format("%Y-%m-%d")
            .to_string();

        assert_eq!(format_display_date("2024-03-05T12:00:00Z"), expected);
        assert_eq!(format_display_date("2024-03-05T12:00:00"), expected);
        assert_eq!(format_display_date("2024-03-05T12:00:00.123456"), expected);
    }

    #[test]
    fn unparsable_dates_pass_through() {
        assert_eq!(format_display_date("sometime"), "sometime");
        assert_eq!(format_display_date(""), "");
    }

    #[test]
    fn durations() {
        assert_eq!(format_iso8601_duration("PT4M5S").as_deref(), Some("04:05"));
        assert_eq!(format_iso8601_duration("PT1H2M3S").as_deref(), Some("01:02:03"));
        assert_eq!(format_iso8601_duration("PT45S").as_deref(), Some("00:45"));
        assert_eq!(format_iso8601_duration("PT2H").as_deref(), Some("02:00:00"));
        assert_eq!(format_iso8601_duration("P1DT1M").as_deref(), Some("24:01:00"));
        assert_eq!(format_iso8601_duration("PT10.5S").as_deref(), Some("00:10"));
        assert_eq!(format_iso8601_duration("4:05"), None);
        assert_eq!(format_iso8601_duration("PT5X"), None);
        assert_eq!(format_iso8601_duration("PT12"), None);
    }

    #[test]
    fn handles_get_one_at_sign() {
        assert_eq!(display_handle("@GoogleDevelopers").as_deref(), Some("@GoogleDevelopers"));
        assert_eq!(display_handle("googledevelopers").as_deref(), Some("@googledevelopers"));
        assert_eq!(display_handle("  "), None);
    }

    #[test]
    fn thumbnails_prefer_requested_size() {
        let mut thumbnails = Thumbnails::new();
        thumbnails.insert("default".into(), Some("d.jpg".into()));
        thumbnails.insert("high".into(), None);
        thumbnails.insert("medium".into(), Some("m.jpg".into()));

        assert_eq!(thumbnail_url(&thumbnails, &["medium"], "p"), "m.jpg");
        assert_eq!(thumbnail_url(&thumbnails, &["high"], "p"), "d.jpg");
        assert_eq!(
            thumbnail_url(&Thumbnails::new(), &["high"], VIDEO_THUMBNAIL_PLACEHOLDER),
            VIDEO_THUMBNAIL_PLACEHOLDER
        );
    }
}
