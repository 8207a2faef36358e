use crate::content::{analyze_content, ContentPerformance};
use crate::engagement::{analyze_engagement, EngagementReport};
use crate::fans::{rank_core_fans, FanRanking};
use crate::growth::{calculate_growth, GrowthMetrics};
use crate::models::{ChannelInfo, ChartAnalysisRequest, CommentRecord, VideoRecord};
use crate::narrative;
use crate::ranking::{top_videos, TOP_VIDEOS};
use crate::titles::{analyze_titles, TitleAnalysis};
use crate::trend::{engagement_trend, view_series, TrendPoint, ViewPoint};
use crate::uploads::{analyze_upload_patterns, UploadPatterns};
use crate::utils::view_totals;
use chrono::{DateTime, FixedOffset, Utc};
use log::debug;
use serde::{Deserialize, Serialize};

/// Everything the dashboard shows for one channel snapshot.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DashboardReport {
    pub channel: ChannelInfo,
    pub generated_at: DateTime<Utc>,
    pub video_count: usize,
    /// Sum of all view counts, saturating
    pub total_views: u64,
    pub avg_views: f64,
    pub growth: GrowthMetrics,
    pub views: Vec<ViewPoint>,
    pub engagement: EngagementReport,
    pub engagement_trend: Vec<TrendPoint>,
    pub content: ContentPerformance,
    pub titles: TitleAnalysis,
    pub uploads: UploadPatterns,
    pub top_videos: Vec<VideoRecord>,
    /// Absent when channel comments were not available
    pub core_fans: Option<FanRanking>,
}

impl DashboardReport {
    /// Run every aggregation over one snapshot. `now` anchors the growth
    /// window and `offset` the upload histograms.
    pub fn build(
        channel: ChannelInfo,
        videos: &[VideoRecord],
        comments: Option<&[CommentRecord]>,
        now: DateTime<Utc>,
        offset: FixedOffset,
    ) -> Self {
        let core_fans =
            comments.map(|comments| rank_core_fans(comments, &channel.title, &channel.id));

        debug!(
            "Building report for {:?}: {} videos, {} comments",
            channel.title,
            videos.len(),
            comments.map_or(0, <[CommentRecord]>::len)
        );

        let (total_views, avg_views) = view_totals(videos);

        Self {
            generated_at: now,
            total_views,
            avg_views,
            video_count: videos.len(),
            growth: calculate_growth(videos, now),
            views: view_series(videos),
            engagement: analyze_engagement(videos),
            engagement_trend: engagement_trend(videos),
            content: analyze_content(videos),
            titles: analyze_titles(videos),
            uploads: analyze_upload_patterns(videos, offset),
            top_videos: top_videos(videos, TOP_VIDEOS).into_iter().cloned().collect(),
            core_fans,
            channel,
        }
    }

    /// Narrative requests for every chart that has data behind it.
    pub fn narrative_requests(&self) -> Vec<ChartAnalysisRequest> {
        let mut requests = vec![
            narrative::engagement(&self.engagement),
            narrative::growth(self.total_views, self.avg_views, &self.growth),
        ];
        requests.extend(narrative::upload(&self.uploads));
        requests.extend(narrative::content_performance(&self.content));
        if let Some(ranking) = &self.core_fans {
            requests.extend(narrative::core_fans(&ranking.fans));
        }
        requests
    }
}
