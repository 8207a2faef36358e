use crate::models::VideoRecord;
use crate::utils::mean;
use log::debug;
use serde::{Deserialize, Serialize};

/// Per-video ratios, all in percent of views.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct VideoEngagement {
    pub id: String,
    pub title: String,
    pub views: u64,
    pub like_ratio: f64,
    pub comment_ratio: f64,
    pub total_engagement: f64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct EngagementAverages {
    pub like_ratio: f64,
    pub comment_ratio: f64,
    pub total_engagement: f64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct EngagementReport {
    pub videos: Vec<VideoEngagement>,
    pub average: EngagementAverages,
    /// Videos without a single view, left out of both lists and averages
    pub filtered_count: usize,
}

impl VideoEngagement {
    /// `None` for an unwatched video.
    pub fn from_video(video: &VideoRecord) -> Option<Self> {
        if video.view_count == 0 {
            return None;
        }
        let views = video.view_count as f64;
        let likes = video.like_count as f64;
        let comments = video.comment_count as f64;
        Some(Self {
            id: video.id.clone(),
            title: video.title.clone(),
            views: video.view_count,
            like_ratio: 100.0 * likes / views,
            comment_ratio: 100.0 * comments / views,
            total_engagement: 100.0 * (likes + comments) / views,
        })
    }
}

pub fn analyze_engagement(videos: &[VideoRecord]) -> EngagementReport {
    let per_video: Vec<VideoEngagement> = videos
        .iter()
        .filter_map(VideoEngagement::from_video)
        .collect();
    let filtered_count = videos.len() - per_video.len();

    let n = per_video.len();
    let average = EngagementAverages {
        like_ratio: mean(per_video.iter().map(|v| v.like_ratio).sum(), n),
        comment_ratio: mean(per_video.iter().map(|v| v.comment_ratio).sum(), n),
        total_engagement: mean(per_video.iter().map(|v| v.total_engagement).sum(), n),
    };

    debug!("Engagement over {n} videos, {filtered_count} without views");

    EngagementReport {
        videos: per_video,
        average,
        filtered_count,
    }
}
