use crate::engagement::VideoEngagement;
use crate::models::VideoRecord;
use crate::utils::format_date;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Points on each side of the current one in the smoothing window
pub const MOVING_AVERAGE_RADIUS: usize = 3;

/// Engagement of one video at its publish time. `date` is only for display.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TrendPoint {
    pub published_at: DateTime<Utc>,
    pub date: String,
    pub title: String,
    /// `(likes + comments) / views` in percent
    pub engagement: f64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ViewPoint {
    pub published_at: DateTime<Utc>,
    pub date: String,
    pub title: String,
    pub views: u64,
    pub moving_average: f64,
}

fn chronological(videos: &[VideoRecord]) -> Vec<&VideoRecord> {
    let mut sorted: Vec<&VideoRecord> = videos.iter().collect();
    // Stable, so same-instant uploads keep their input order
    sorted.sort_by_key(|video| video.published_at);
    sorted
}

/// Engagement over time, oldest first. Unwatched videos are skipped.
pub fn engagement_trend(videos: &[VideoRecord]) -> Vec<TrendPoint> {
    chronological(videos)
        .into_iter()
        .filter_map(|video| {
            VideoEngagement::from_video(video).map(|engagement| TrendPoint {
                published_at: video.published_at,
                date: format_date(&video.published_at),
                title: video.title.clone(),
                engagement: engagement.total_engagement,
            })
        })
        .collect()
}

/// Centered 7-point mean. The window shrinks at both ends of the series.
pub fn moving_average(values: &[f64]) -> Vec<f64> {
    (0..values.len())
        .map(|index| {
            let start = index.saturating_sub(MOVING_AVERAGE_RADIUS);
            let end = (index + MOVING_AVERAGE_RADIUS + 1).min(values.len());
            let window = &values[start..end];
            window.iter().sum::<f64>() / window.len() as f64
        })
        .collect()
}

/// Views per upload, oldest first, with the smoothed series alongside.
pub fn view_series(videos: &[VideoRecord]) -> Vec<ViewPoint> {
    let sorted = chronological(videos);
    let views: Vec<f64> = sorted.iter().map(|v| v.view_count as f64).collect();
    let smoothed = moving_average(&views);

    sorted
        .into_iter()
        .zip(smoothed)
        .map(|(video, moving_average)| ViewPoint {
            published_at: video.published_at,
            date: format_date(&video.published_at),
            title: video.title.clone(),
            views: video.view_count,
            moving_average,
        })
        .collect()
}
