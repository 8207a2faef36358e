use crate::models::CommentRecord;
use chrono::{DateTime, Utc};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

pub const MIN_FAN_COMMENTS: usize = 3;
pub const TOP_FANS: usize = 10;
pub const COMMENT_PREVIEW_CHARS: usize = 100;

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// A frequent commenter on the channel.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct FanProfile {
    pub author: String,
    pub comment_count: usize,
    pub total_likes: u64,
    /// Oldest first
    pub comments: Vec<CommentRecord>,
    pub unique_videos: usize,
    pub first_activity: DateTime<Utc>,
    pub last_activity: DateTime<Utc>,
    /// Text of the most recent comment
    pub last_comment: String,
    /// Distinct videos commented on, divided by all counted comments on the
    /// channel. Measures breadth of participation, not views.
    pub engagement_rate: f64,
}

impl FanProfile {
    /// Full history for the detail view, most recent first.
    pub fn comments_newest_first(&self) -> Vec<&CommentRecord> {
        let mut comments: Vec<&CommentRecord> = self.comments.iter().collect();
        comments.sort_by(|a, b| b.published_at.cmp(&a.published_at));
        comments
    }

    /// Whole days between first and last comment, rounded up.
    pub fn active_days(&self) -> i64 {
        let millis = (self.last_activity - self.first_activity)
            .num_milliseconds()
            .max(0);
        (millis + MILLIS_PER_DAY - 1) / MILLIS_PER_DAY
    }

    pub fn last_comment_preview(&self) -> String {
        if self.last_comment.chars().count() > COMMENT_PREVIEW_CHARS {
            let cut: String = self.last_comment.chars().take(COMMENT_PREVIEW_CHARS).collect();
            format!("{cut}...")
        } else {
            self.last_comment.clone()
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct FanRanking {
    pub fans: Vec<FanProfile>,
    /// Comments left after removing the channel's own
    pub total_comments: usize,
    pub own_comments: usize,
}

/// Whether the comment was written by the channel itself.
pub fn is_channel_owner(comment: &CommentRecord, channel_title: &str, channel_id: &str) -> bool {
    if comment.author.to_lowercase() == channel_title.to_lowercase() {
        return true;
    }
    !channel_id.is_empty()
        && comment
            .author_channel_id
            .as_deref()
            .is_some_and(|id| id.contains(channel_id))
}

struct AuthorActivity<'a> {
    author: &'a str,
    total_likes: u64,
    comments: Vec<&'a CommentRecord>,
    videos: HashSet<&'a str>,
}

/// Rank the channel's most active commenters.
///
/// Authors need at least [`MIN_FAN_COMMENTS`] comments; the top
/// [`TOP_FANS`] by comment count are kept, ties in first-seen order.
pub fn rank_core_fans(
    comments: &[CommentRecord],
    channel_title: &str,
    channel_id: &str,
) -> FanRanking {
    let counted: Vec<&CommentRecord> = comments
        .iter()
        .filter(|comment| !is_channel_owner(comment, channel_title, channel_id))
        .collect();
    let total_comments = counted.len();

    let mut authors: Vec<AuthorActivity> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for comment in counted.iter().copied() {
        let slot = *index.entry(comment.author.as_str()).or_insert_with(|| {
            authors.push(AuthorActivity {
                author: comment.author.as_str(),
                total_likes: 0,
                comments: Vec::new(),
                videos: HashSet::new(),
            });
            authors.len() - 1
        });
        let activity = &mut authors[slot];
        activity.total_likes = activity.total_likes.saturating_add(comment.like_count);
        activity.comments.push(comment);
        activity.videos.insert(comment.video_id.as_str());
    }

    let mut fans: Vec<FanProfile> = authors
        .into_iter()
        .filter(|activity| activity.comments.len() >= MIN_FAN_COMMENTS)
        .filter_map(|activity| build_profile(activity, total_comments))
        .collect();

    fans.sort_by(|a, b| b.comment_count.cmp(&a.comment_count));
    fans.truncate(TOP_FANS);

    debug!(
        "{} core fans from {} comments ({} by the channel)",
        fans.len(),
        total_comments,
        comments.len() - total_comments
    );

    FanRanking {
        fans,
        total_comments,
        own_comments: comments.len() - total_comments,
    }
}

fn build_profile(activity: AuthorActivity, total_comments: usize) -> Option<FanProfile> {
    let mut sorted: Vec<CommentRecord> = activity.comments.into_iter().cloned().collect();
    sorted.sort_by_key(|comment| comment.published_at);

    let first = sorted.first()?;
    let last = sorted.last()?;
    let first_activity = first.published_at;
    let last_activity = last.published_at;
    let last_comment = last.text.clone();
    let unique_videos = activity.videos.len();

    Some(FanProfile {
        author: activity.author.to_string(),
        comment_count: sorted.len(),
        total_likes: activity.total_likes,
        unique_videos,
        first_activity,
        last_activity,
        last_comment,
        engagement_rate: unique_videos as f64 / total_comments as f64,
        comments: sorted,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::parse_timestamp;
    use pretty_assertions::assert_eq;

    fn comment(author: &str, video: &str, day: u32, likes: u64) -> CommentRecord {
        CommentRecord {
            author: author.to_string(),
            text: format!("{author} on {video} day {day}"),
            published_at: parse_timestamp(&format!("2024-03-{day:02}T10:00:00Z")).unwrap(),
            like_count: likes,
            video_id: video.to_string(),
            video_title: format!("Title {video}"),
            ..Default::default()
        }
    }

    fn sample() -> Vec<CommentRecord> {
        let mut comments = Vec::new();
        for day in [5, 1, 3, 2, 4] {
            comments.push(comment("A", if day % 2 == 0 { "v1" } else { "v2" }, day, 1));
        }
        comments.push(comment("B", "v1", 1, 9));
        comments.push(comment("B", "v1", 2, 9));
        for day in [7, 6, 8] {
            comments.push(comment("C", "v3", day, 2));
        }
        comments
    }

    #[test]
    fn test_threshold_and_order() {
        let ranking = rank_core_fans(&sample(), "My Channel", "UCmine");
        let authors: Vec<_> = ranking.fans.iter().map(|f| f.author.as_str()).collect();
        assert_eq!(authors, vec!["A", "C"]);
        assert_eq!(ranking.total_comments, 10);
    }

    #[test]
    fn test_profile_fields() {
        let ranking = rank_core_fans(&sample(), "My Channel", "UCmine");
        let a = &ranking.fans[0];

        assert_eq!(a.comment_count, 5);
        assert_eq!(a.total_likes, 5);
        assert_eq!(a.unique_videos, 2);
        assert_eq!(a.first_activity, parse_timestamp("2024-03-01T10:00:00Z").unwrap());
        assert_eq!(a.last_activity, parse_timestamp("2024-03-05T10:00:00Z").unwrap());
        assert_eq!(a.last_comment, "A on v2 day 5");
        assert_eq!(a.engagement_rate, 2.0 / 10.0);
        assert_eq!(a.active_days(), 4);

        let days: Vec<_> = a.comments.iter().map(|c| c.published_at.format("%d").to_string()).collect();
        assert_eq!(days, vec!["01", "02", "03", "04", "05"]);

        let newest: Vec<_> = a
            .comments_newest_first()
            .iter()
            .map(|c| c.published_at.format("%d").to_string())
            .collect();
        assert_eq!(newest, vec!["05", "04", "03", "02", "01"]);
    }

    #[test]
    fn test_total_likes_saturate() {
        let comments = vec![
            comment("A", "v1", 1, u64::MAX),
            comment("A", "v1", 2, 5),
            comment("A", "v2", 3, 1),
        ];
        let ranking = rank_core_fans(&comments, "My Channel", "UCmine");
        assert_eq!(ranking.fans.len(), 1);
        assert_eq!(ranking.fans[0].total_likes, u64::MAX);
    }

    #[test]
    fn test_channel_comments_excluded() {
        let mut comments = sample();
        for day in 1..=4 {
            let mut own = comment("my channel", "v1", day, 0);
            own.author = "MY CHANNEL".to_string();
            comments.push(own);
        }
        for day in 1..=3 {
            let mut own = comment("Renamed Owner", "v2", day, 0);
            own.author_channel_id = Some("prefix-UCmine".to_string());
            comments.push(own);
        }

        let ranking = rank_core_fans(&comments, "My Channel", "UCmine");
        assert_eq!(ranking.own_comments, 7);
        assert_eq!(ranking.total_comments, 10);
        assert!(ranking.fans.iter().all(|f| f.author != "MY CHANNEL" && f.author != "Renamed Owner"));
    }

    #[test]
    fn test_empty_channel_id_matches_nobody() {
        let mut c = comment("X", "v1", 1, 0);
        c.author_channel_id = Some("UCsomeone".to_string());
        assert!(!is_channel_owner(&c, "Channel", ""));
    }

    #[test]
    fn test_top_ten_only() {
        let mut comments = Vec::new();
        for fan in 0..12 {
            for day in 1..=(3 + fan) {
                comments.push(comment(&format!("fan{fan}"), "v1", day as u32, 0));
            }
        }
        let ranking = rank_core_fans(&comments, "Channel", "UC1");
        assert_eq!(ranking.fans.len(), TOP_FANS);
        assert_eq!(ranking.fans[0].author, "fan11");
        assert_eq!(ranking.fans[9].author, "fan2");
    }

    #[test]
    fn test_preview_truncates_long_comment() {
        let mut comments = vec![comment("A", "v", 1, 0), comment("A", "v", 2, 0)];
        let mut long = comment("A", "v", 3, 0);
        long.text = "x".repeat(150);
        comments.push(long);

        let ranking = rank_core_fans(&comments, "Channel", "UC1");
        let preview = ranking.fans[0].last_comment_preview();
        assert_eq!(preview.chars().count(), COMMENT_PREVIEW_CHARS + 3);
        assert!(preview.ends_with("..."));
    }

    #[test]
    fn test_no_comments() {
        let ranking = rank_core_fans(&[], "Channel", "UC1");
        assert!(ranking.fans.is_empty());
        assert_eq!(ranking.total_comments, 0);
    }
}
