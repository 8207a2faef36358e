use crate::models::VideoRecord;
use chrono::{Datelike, FixedOffset, Timelike};
use serde::{Deserialize, Serialize};

pub const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// When the channel publishes, in the viewer's local time.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct UploadPatterns {
    /// Sunday first
    pub by_weekday: [usize; 7],
    pub by_hour: [usize; 24],
    /// Mean days between consecutive uploads
    pub average_interval_days: Option<f64>,
}

impl UploadPatterns {
    /// Earliest weekday among the busiest, `None` without uploads.
    pub fn busiest_weekday(&self) -> Option<usize> {
        busiest(&self.by_weekday)
    }

    pub fn busiest_hour(&self) -> Option<usize> {
        busiest(&self.by_hour)
    }
}

fn busiest(counts: &[usize]) -> Option<usize> {
    let max = *counts.iter().max()?;
    if max == 0 {
        return None;
    }
    counts.iter().position(|count| *count == max)
}

pub fn analyze_upload_patterns(videos: &[VideoRecord], offset: FixedOffset) -> UploadPatterns {
    let mut by_weekday = [0usize; 7];
    let mut by_hour = [0usize; 24];

    for video in videos {
        let local = video.published_at.with_timezone(&offset);
        by_weekday[local.weekday().num_days_from_sunday() as usize] += 1;
        by_hour[local.hour() as usize] += 1;
    }

    UploadPatterns {
        by_weekday,
        by_hour,
        average_interval_days: average_interval_days(videos),
    }
}

fn average_interval_days(videos: &[VideoRecord]) -> Option<f64> {
    if videos.len() < 2 {
        return None;
    }
    let mut times: Vec<i64> = videos
        .iter()
        .map(|video| video.published_at.timestamp())
        .collect();
    times.sort_unstable();
    let span_days = (times[times.len() - 1] - times[0]) as f64 / 86_400.0;
    Some(span_days / (times.len() - 1) as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::parse_timestamp;
    use pretty_assertions::assert_eq;

    fn video(published: &str) -> VideoRecord {
        VideoRecord {
            published_at: parse_timestamp(published).unwrap(),
            ..Default::default()
        }
    }

    fn utc() -> FixedOffset {
        FixedOffset::east_opt(0).unwrap()
    }

    #[test]
    fn test_weekday_and_hour_histograms() {
        // 2024-06-02 is a Sunday
        let videos = vec![
            video("2024-06-02T18:30:00Z"),
            video("2024-06-09T18:30:00Z"),
            video("2024-06-04T09:00:00Z"),
        ];
        let patterns = analyze_upload_patterns(&videos, utc());

        assert_eq!(patterns.by_weekday, [2, 0, 1, 0, 0, 0, 0]);
        assert_eq!(patterns.by_hour[18], 2);
        assert_eq!(patterns.by_hour[9], 1);
        assert_eq!(patterns.by_weekday.iter().sum::<usize>(), videos.len());
        assert_eq!(patterns.busiest_weekday(), Some(0));
        assert_eq!(patterns.busiest_hour(), Some(18));
        assert_eq!(patterns.average_interval_days, Some(3.5));
    }

    #[test]
    fn test_offset_shifts_day_and_hour() {
        // Sunday 23:00 UTC is Monday 08:00 in UTC+9
        let videos = vec![video("2024-06-02T23:00:00Z")];
        let patterns = analyze_upload_patterns(&videos, FixedOffset::east_opt(9 * 3600).unwrap());
        assert_eq!(patterns.by_weekday[1], 1);
        assert_eq!(patterns.by_hour[8], 1);
    }

    #[test]
    fn test_no_uploads() {
        let patterns = analyze_upload_patterns(&[], utc());
        assert_eq!(patterns.busiest_weekday(), None);
        assert_eq!(patterns.busiest_hour(), None);
        assert_eq!(patterns.average_interval_days, None);
    }

    #[test]
    fn test_busiest_tie_takes_earliest() {
        let videos = vec![video("2024-06-03T10:00:00Z"), video("2024-06-05T07:00:00Z")];
        let patterns = analyze_upload_patterns(&videos, utc());
        assert_eq!(patterns.busiest_weekday(), Some(1));
        assert_eq!(patterns.busiest_hour(), Some(7));
    }
}
