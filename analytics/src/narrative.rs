//! Request bodies for the one-sentence chart commentary served by
//! `POST /analysis/chart`. Field names follow the backend's prompt templates.

use crate::classify::VideoCategory;
use crate::content::ContentPerformance;
use crate::engagement::EngagementReport;
use crate::fans::FanProfile;
use crate::growth::GrowthMetrics;
use crate::models::{ChartAnalysisRequest, ChartType};
use crate::uploads::{UploadPatterns, WEEKDAY_NAMES};
use serde_json::json;

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

pub fn engagement(report: &EngagementReport) -> ChartAnalysisRequest {
    ChartAnalysisRequest {
        chart_type: ChartType::Engagement,
        data: json!({
            "like_ratio": round_to(report.average.like_ratio, 2),
            "comment_ratio": round_to(report.average.comment_ratio, 2),
            "total_engagement": round_to(report.average.total_engagement, 2),
        }),
    }
}

/// `total_views` and `avg_views` as returned by [`view_totals`].
///
/// [`view_totals`]: crate::utils::view_totals
pub fn growth(total_views: u64, avg_views: f64, metrics: &GrowthMetrics) -> ChartAnalysisRequest {
    ChartAnalysisRequest {
        chart_type: ChartType::Growth,
        data: json!({
            "total_views": total_views,
            "avg_views": avg_views.round(),
            "view_growth": round_to(metrics.view_growth.as_percent(), 1),
        }),
    }
}

/// `None` until there is at least one upload to describe.
pub fn upload(patterns: &UploadPatterns) -> Option<ChartAnalysisRequest> {
    let day = patterns.busiest_weekday()?;
    let hour = patterns.busiest_hour()?;
    Some(ChartAnalysisRequest {
        chart_type: ChartType::Upload,
        data: json!({
            "top_day": WEEKDAY_NAMES[day],
            "top_hour": format!("{hour:02}:00"),
            "upload_interval": round_to(patterns.average_interval_days.unwrap_or(0.0), 1),
        }),
    })
}

pub fn content_performance(performance: &ContentPerformance) -> Option<ChartAnalysisRequest> {
    let (best, stats) = performance.best()?;
    let views = |category| performance.stats(category).avg_views.round();
    Some(ChartAnalysisRequest {
        chart_type: ChartType::ContentPerformance,
        data: json!({
            "best_duration": best.display_name(),
            "best_views": stats.avg_views.round(),
            "best_engagement": round_to(stats.avg_engagement * 100.0, 1),
            "shorts_views": views(VideoCategory::Shorts),
            "short_views": views(VideoCategory::Short),
            "medium_views": views(VideoCategory::Medium),
            "long_views": views(VideoCategory::Long),
        }),
    })
}

/// `None` when the channel has no core fans.
pub fn core_fans(fans: &[FanProfile]) -> Option<ChartAnalysisRequest> {
    let top = fans.first()?;
    let n = fans.len() as f64;
    let avg_comments = fans.iter().map(|f| f.comment_count as f64).sum::<f64>() / n;
    let avg_rate = fans.iter().map(|f| f.engagement_rate).sum::<f64>() / n;
    Some(ChartAnalysisRequest {
        chart_type: ChartType::CoreFans,
        data: json!({
            "total_core_fans": fans.len(),
            "top_fan_comments": top.comment_count,
            "top_fan_likes": top.total_likes,
            "top_fan_engagement": round_to(top.engagement_rate * 100.0, 1),
            "avg_comments_per_fan": round_to(avg_comments, 1),
            "avg_engagement_rate": round_to(avg_rate * 100.0, 1),
        }),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::analyze_content;
    use crate::engagement::analyze_engagement;
    use crate::fans::rank_core_fans;
    use crate::growth::calculate_growth;
    use crate::models::{CommentRecord, VideoRecord};
    use crate::uploads::analyze_upload_patterns;
    use crate::utils::{parse_timestamp, view_totals};
    use chrono::FixedOffset;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn video(views: u64, likes: u64, duration: &str, published: &str) -> VideoRecord {
        VideoRecord {
            view_count: views,
            like_count: likes,
            duration: duration.to_string(),
            published_at: parse_timestamp(published).unwrap(),
            width: 1920,
            height: 1080,
            ..Default::default()
        }
    }

    fn sample() -> Vec<VideoRecord> {
        vec![
            video(300, 30, "PT5M", "2024-06-03T10:00:00Z"),
            video(900, 45, "PT25M", "2024-06-10T10:00:00Z"),
        ]
    }

    #[test]
    fn test_engagement_payload() {
        let request = engagement(&analyze_engagement(&sample()));
        assert_eq!(request.chart_type, ChartType::Engagement);
        assert_eq!(request.data["like_ratio"], json!(7.5));
        assert_eq!(request.data["comment_ratio"], json!(0.0));
    }

    #[test]
    fn test_content_performance_payload() {
        let request = content_performance(&analyze_content(&sample())).unwrap();
        assert_eq!(request.data["best_duration"], json!("Over 20 min"));
        assert_eq!(request.data["best_views"], json!(900.0));
        assert_eq!(request.data["best_engagement"], json!(5.0));
        assert_eq!(request.data["medium_views"], json!(0.0));
    }

    #[test]
    fn test_upload_payload() {
        let patterns = analyze_upload_patterns(&sample(), FixedOffset::east_opt(0).unwrap());
        let request = upload(&patterns).unwrap();
        assert_eq!(request.data["top_day"], json!("Monday"));
        assert_eq!(request.data["top_hour"], json!("10:00"));
        assert_eq!(request.data["upload_interval"], json!(7.0));
    }

    #[test]
    fn test_growth_payload_with_huge_view_counts() {
        let videos = vec![
            video(u64::MAX, 0, "PT5M", "2024-06-03T10:00:00Z"),
            video(7, 0, "PT5M", "2024-06-10T10:00:00Z"),
        ];
        let now = parse_timestamp("2024-06-12T00:00:00Z").unwrap();
        let (total, avg) = view_totals(&videos);
        let request = growth(total, avg, &calculate_growth(&videos, now));
        assert_eq!(request.chart_type, ChartType::Growth);
        assert_eq!(request.data["total_views"], json!(u64::MAX));
        assert!(request.data["avg_views"].as_f64().is_some_and(f64::is_finite));
    }

    #[test]
    fn test_payloads_absent_without_data() {
        assert!(content_performance(&analyze_content(&[])).is_none());
        assert!(core_fans(&[]).is_none());
        let patterns = analyze_upload_patterns(&[], FixedOffset::east_opt(0).unwrap());
        assert!(upload(&patterns).is_none());
    }

    #[test]
    fn test_core_fans_payload() {
        let comments: Vec<CommentRecord> = (1..=4)
            .map(|day| CommentRecord {
                author: "fan".to_string(),
                video_id: format!("v{}", day % 2),
                published_at: parse_timestamp(&format!("2024-06-0{day}T00:00:00Z")).unwrap(),
                like_count: 2,
                ..Default::default()
            })
            .collect();
        let ranking = rank_core_fans(&comments, "Channel", "UC1");
        let request = core_fans(&ranking.fans).unwrap();
        assert_eq!(request.data["total_core_fans"], json!(1));
        assert_eq!(request.data["top_fan_likes"], json!(8));
        assert_eq!(request.data["top_fan_engagement"], json!(50.0));
        assert_eq!(request.data["avg_comments_per_fan"], json!(4.0));
    }
}
