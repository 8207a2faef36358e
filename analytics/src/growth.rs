use crate::models::VideoRecord;
use crate::utils::mean;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

pub const RECENT_WINDOW_DAYS: i64 = 30;

/// Percentage change of the recent window against everything older.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum GrowthRate {
    Change(f64),
    /// One side has no videos, or the baseline is zero
    InsufficientData,
}

impl GrowthRate {
    fn between(recent: f64, older: f64, recent_count: usize, older_count: usize) -> Self {
        if recent_count == 0 || older_count == 0 || older == 0.0 {
            return GrowthRate::InsufficientData;
        }
        GrowthRate::Change((recent - older) / older * 100.0)
    }

    /// Numeric value for charts; "no data" reads as 0.
    pub fn as_percent(self) -> f64 {
        match self {
            GrowthRate::Change(pct) => pct,
            GrowthRate::InsufficientData => 0.0,
        }
    }

    pub fn is_known(self) -> bool {
        matches!(self, GrowthRate::Change(_))
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct GrowthMetrics {
    pub recent_count: usize,
    pub older_count: usize,
    pub recent_avg_views: f64,
    pub older_avg_views: f64,
    /// Mean `(likes + comments) / views` of watched videos
    pub recent_engagement: f64,
    pub older_engagement: f64,
    pub view_growth: GrowthRate,
    pub engagement_growth: GrowthRate,
}

struct Window {
    count: usize,
    avg_views: f64,
    engagement: f64,
    watched: usize,
}

impl Window {
    fn of<'a>(videos: impl Iterator<Item = &'a VideoRecord>) -> Self {
        let mut count = 0;
        let mut views = 0.0;
        let mut engagement = 0.0;
        let mut watched = 0;
        for video in videos {
            count += 1;
            views += video.view_count as f64;
            if let Some(ratio) = video.engagement_ratio() {
                engagement += ratio;
                watched += 1;
            }
        }
        Self {
            count,
            avg_views: mean(views, count),
            engagement: mean(engagement, watched),
            watched,
        }
    }
}

/// Compare uploads from the last [`RECENT_WINDOW_DAYS`] days before `now`
/// with all earlier uploads.
pub fn calculate_growth(videos: &[VideoRecord], now: DateTime<Utc>) -> GrowthMetrics {
    let cutoff = now - Duration::days(RECENT_WINDOW_DAYS);
    let recent = Window::of(videos.iter().filter(|v| v.published_at >= cutoff));
    let older = Window::of(videos.iter().filter(|v| v.published_at < cutoff));

    GrowthMetrics {
        recent_count: recent.count,
        older_count: older.count,
        recent_avg_views: recent.avg_views,
        older_avg_views: older.avg_views,
        recent_engagement: recent.engagement,
        older_engagement: older.engagement,
        view_growth: GrowthRate::between(
            recent.avg_views,
            older.avg_views,
            recent.count,
            older.count,
        ),
        engagement_growth: GrowthRate::between(
            recent.engagement,
            older.engagement,
            recent.watched,
            older.watched,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::parse_timestamp;
    use pretty_assertions::assert_eq;

    fn now() -> DateTime<Utc> {
        parse_timestamp("2024-06-30T00:00:00Z").unwrap()
    }

    fn video(days_ago: i64, views: u64, likes: u64) -> VideoRecord {
        VideoRecord {
            published_at: now() - Duration::days(days_ago),
            view_count: views,
            like_count: likes,
            ..Default::default()
        }
    }

    #[test]
    fn test_growth_against_older_uploads() {
        let videos = vec![video(2, 300, 30), video(10, 100, 10), video(60, 100, 5), video(90, 100, 5)];
        let growth = calculate_growth(&videos, now());

        assert_eq!(growth.recent_count, 2);
        assert_eq!(growth.older_count, 2);
        assert_eq!(growth.recent_avg_views, 200.0);
        assert_eq!(growth.older_avg_views, 100.0);
        assert_eq!(growth.view_growth, GrowthRate::Change(100.0));
        assert_eq!(growth.engagement_growth, GrowthRate::Change(100.0));
    }

    #[test]
    fn test_window_boundary_is_inclusive() {
        let growth = calculate_growth(&[video(30, 10, 0), video(31, 10, 0)], now());
        assert_eq!(growth.recent_count, 1);
        assert_eq!(growth.older_count, 1);
    }

    #[test]
    fn test_no_recent_uploads_is_defined() {
        let videos = vec![video(45, 100, 1), video(400, 50, 2)];
        let growth = calculate_growth(&videos, now());

        assert_eq!(growth.recent_count, 0);
        assert_eq!(growth.view_growth, GrowthRate::InsufficientData);
        assert!(growth.view_growth.as_percent().is_finite());
        assert!(growth.engagement_growth.as_percent().is_finite());
        assert_eq!(growth.view_growth.as_percent(), 0.0);
    }

    #[test]
    fn test_no_older_uploads_is_defined() {
        let growth = calculate_growth(&[video(1, 100, 1)], now());
        assert_eq!(growth.older_count, 0);
        assert!(!growth.view_growth.is_known());
        assert!(!growth.engagement_growth.is_known());
    }

    #[test]
    fn test_zero_baseline_is_insufficient() {
        let growth = calculate_growth(&[video(1, 100, 1), video(50, 0, 0)], now());
        assert_eq!(growth.older_avg_views, 0.0);
        assert_eq!(growth.view_growth, GrowthRate::InsufficientData);
        // The unwatched older video has no engagement ratio at all
        assert_eq!(growth.engagement_growth, GrowthRate::InsufficientData);
    }

    #[test]
    fn test_empty_input() {
        let growth = calculate_growth(&[], now());
        assert_eq!(growth.recent_avg_views, 0.0);
        assert_eq!(growth.view_growth.as_percent(), 0.0);
    }
}
