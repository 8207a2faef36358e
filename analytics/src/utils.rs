use crate::error::{AnalyticsError, Result};
use crate::models::VideoRecord;
use chrono::{DateTime, Utc};
use url::Url;

/// Parse an RFC 3339 / ISO 8601 timestamp into UTC
pub fn parse_timestamp(date_str: &str) -> Option<DateTime<Utc>> {
    if date_str.is_empty() {
        return None;
    }
    DateTime::parse_from_rfc3339(date_str.trim())
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Parse ISO 8601 duration string (PT1H2M3S) to total seconds.
///
/// Hours, minutes and seconds are each optional but must appear in that
/// order after `PT`. Input without `PT` yields 0.
pub fn parse_iso8601_duration_to_seconds(duration_str: &str) -> u64 {
    let Some(start) = duration_str.find("PT") else {
        return 0;
    };

    let mut rest = &duration_str[start + 2..];
    let mut total_seconds: u64 = 0;

    for (unit, factor) in [('H', 3600), ('M', 60), ('S', 1)] {
        let digits = rest.bytes().take_while(|b| b.is_ascii_digit()).count();
        if digits > 0 && rest[digits..].starts_with(unit) {
            let value = rest[..digits].parse::<u64>().unwrap_or(0);
            total_seconds = total_seconds.saturating_add(value.saturating_mul(factor));
            rest = &rest[digits + 1..];
        }
    }

    total_seconds
}

/// Accepts a channel URL or a bare channel id and returns what the backend
/// expects as `{channelId}`.
///
/// `/channel/<id>` URLs yield the id, custom `/c/...` and `/@handle` URLs are
/// passed through whole, and a bare `UC...` id of 24 characters is accepted
/// as is.
pub fn extract_channel_id(input: &str) -> Result<String> {
    let input = input.trim();

    if let Ok(url) = Url::parse(input) {
        if matches!(url.host_str(), Some("www.youtube.com") | Some("youtube.com")) {
            let path = url.path();
            if let Some(rest) = path.strip_prefix("/channel/") {
                if let Some(id) = rest.split('/').next().filter(|id| !id.is_empty()) {
                    return Ok(id.to_string());
                }
            } else if path.starts_with("/c/") || path.starts_with("/@") {
                return Ok(input.to_string());
            }
        }
    }

    if input.starts_with("UC") && input.chars().count() == 24 {
        return Ok(input.to_string());
    }

    Err(AnalyticsError::InvalidChannel(input.to_string()))
}

// Formats each x1000 step
pub fn format_number(number: u64) -> String {
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

pub fn format_date(datetime: &DateTime<Utc>) -> String {
    datetime.format("%Y-%m-%d").to_string()
}

pub fn format_duration(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    if hours != 0 {
        format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{:02}:{:02}", minutes, seconds)
    }
}

/// Total views, saturating at `u64::MAX`, and the mean views per video.
pub fn view_totals(videos: &[VideoRecord]) -> (u64, f64) {
    let total = videos
        .iter()
        .fold(0u64, |sum, video| sum.saturating_add(video.view_count));
    let avg = mean(videos.iter().map(|video| video.view_count as f64).sum(), videos.len());
    (total, avg)
}

/// Arithmetic mean that reads 0 for an empty set.
pub(crate) fn mean(sum: f64, count: usize) -> f64 {
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_duration_codes() {
        assert_eq!(parse_iso8601_duration_to_seconds("PT1H2M3S"), 3723);
        assert_eq!(parse_iso8601_duration_to_seconds("PT45S"), 45);
        assert_eq!(parse_iso8601_duration_to_seconds("PT10M"), 600);
        assert_eq!(parse_iso8601_duration_to_seconds("PT2H5S"), 7205);
        assert_eq!(parse_iso8601_duration_to_seconds("PT"), 0);
        assert_eq!(parse_iso8601_duration_to_seconds("garbage"), 0);
        assert_eq!(parse_iso8601_duration_to_seconds(""), 0);
    }

    #[test]
    fn test_duration_out_of_order_units_are_ignored() {
        // Seconds before minutes never match the minute slot
        assert_eq!(parse_iso8601_duration_to_seconds("PT5S3M"), 5);
        assert_eq!(parse_iso8601_duration_to_seconds("PT1.5S"), 0);
    }

    #[test]
    fn test_parse_timestamp() {
        let ts = parse_timestamp("2024-05-06T07:08:09Z").unwrap();
        assert_eq!(ts.timestamp(), 1_714_979_289);
        let offset = parse_timestamp("2024-05-06T09:08:09+02:00").unwrap();
        assert_eq!(offset, ts);
        assert!(parse_timestamp("").is_none());
        assert!(parse_timestamp("06/05/2024").is_none());
    }

    #[test]
    fn test_extract_channel_id() {
        assert_eq!(
            extract_channel_id("https://www.youtube.com/channel/UCabcdefghijklmnopqrstuv").unwrap(),
            "UCabcdefghijklmnopqrstuv"
        );
        assert_eq!(
            extract_channel_id("https://youtube.com/@somecreator").unwrap(),
            "https://youtube.com/@somecreator"
        );
        assert_eq!(
            extract_channel_id("UCabcdefghijklmnopqrstuv").unwrap(),
            "UCabcdefghijklmnopqrstuv"
        );
        assert!(extract_channel_id("https://example.com/channel/UC1").is_err());
        assert!(extract_channel_id("UCshort").is_err());
        assert!(extract_channel_id("").is_err());
    }

    #[test]
    fn test_formatting() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(1234567), "1,234,567");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_duration(3723), "01:02:03");
        assert_eq!(format_duration(75), "01:15");
        assert_eq!(format_date(&parse_timestamp("2023-12-31T23:59:59Z").unwrap()), "2023-12-31");
    }

    #[test]
    fn test_view_totals_saturate() {
        let videos = vec![
            VideoRecord {
                view_count: u64::MAX,
                ..Default::default()
            },
            VideoRecord {
                view_count: 1,
                ..Default::default()
            },
        ];
        let (total, avg) = view_totals(&videos);
        assert_eq!(total, u64::MAX);
        assert!(avg.is_finite());
        assert_eq!(view_totals(&[]), (0, 0.0));
    }

    #[test]
    fn test_mean_of_empty_set_is_zero() {
        assert_eq!(mean(0.0, 0), 0.0);
        assert_eq!(mean(9.0, 3), 3.0);
    }
}
