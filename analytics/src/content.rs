use crate::classify::{classify, VideoCategory};
use crate::models::VideoRecord;
use crate::utils::mean;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Aggregate numbers for one duration bucket. All zero when the bucket is empty.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct CategoryStats {
    pub avg_views: f64,
    /// Mean of `(likes + comments) / views`, as a fraction
    pub avg_engagement: f64,
    pub count: usize,
    pub vertical_count: usize,
    /// Seconds
    pub avg_duration: f64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ContentPerformance {
    /// Always holds all four categories
    pub categories: BTreeMap<VideoCategory, CategoryStats>,
    /// Videos left out because nobody watched them yet
    pub filtered_count: usize,
    /// Bucket with the highest mean views, `None` when no video was counted
    pub best_category: Option<VideoCategory>,
}

impl ContentPerformance {
    pub fn stats(&self, category: VideoCategory) -> &CategoryStats {
        &self.categories[&category]
    }

    pub fn best(&self) -> Option<(VideoCategory, &CategoryStats)> {
        self.best_category.map(|category| (category, self.stats(category)))
    }
}

#[derive(Default)]
struct Accumulator {
    views: f64,
    engagement: f64,
    duration: f64,
    count: usize,
    vertical: usize,
}

impl Accumulator {
    fn add(&mut self, video: &VideoRecord, engagement: f64) {
        self.views += video.view_count as f64;
        self.engagement += engagement;
        self.duration += video.duration_seconds() as f64;
        self.count += 1;
        if video.is_vertical() {
            self.vertical += 1;
        }
    }

    fn finish(&self) -> CategoryStats {
        CategoryStats {
            avg_views: mean(self.views, self.count),
            avg_engagement: mean(self.engagement, self.count),
            count: self.count,
            vertical_count: self.vertical,
            avg_duration: mean(self.duration, self.count),
        }
    }
}

/// Partition videos by [`VideoCategory`] and summarise each bucket.
pub fn analyze_content(videos: &[VideoRecord]) -> ContentPerformance {
    let mut buckets: BTreeMap<VideoCategory, Accumulator> = VideoCategory::ALL
        .iter()
        .map(|category| (*category, Accumulator::default()))
        .collect();
    let mut filtered_count = 0;

    for video in videos {
        let Some(engagement) = video.engagement_ratio() else {
            filtered_count += 1;
            continue;
        };
        if let Some(bucket) = buckets.get_mut(&classify(video)) {
            bucket.add(video, engagement);
        }
    }

    let categories: BTreeMap<VideoCategory, CategoryStats> = buckets
        .iter()
        .map(|(category, acc)| (*category, acc.finish()))
        .collect();

    // Strictly greater keeps the earlier bucket on ties
    let best_category = VideoCategory::ALL
        .iter()
        .copied()
        .filter(|category| categories[category].count > 0)
        .fold(None, |best: Option<VideoCategory>, current| match best {
            Some(b) if categories[&b].avg_views >= categories[&current].avg_views => Some(b),
            _ => Some(current),
        });

    debug!(
        "Content performance over {} videos ({} filtered), best: {:?}",
        videos.len(),
        filtered_count,
        best_category
    );

    ContentPerformance {
        categories,
        filtered_count,
        best_category,
    }
}
