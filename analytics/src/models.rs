use crate::error::Result;
use crate::utils::{parse_iso8601_duration_to_seconds, parse_timestamp};
use chrono::{DateTime, Utc};
use log::warn;
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One uploaded video as served by `GET /channel/{id}/videos`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct VideoRecord {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub published_at: DateTime<Utc>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub view_count: u64,
    #[serde(default, deserialize_with = "lenient_count")]
    pub like_count: u64,
    #[serde(default, deserialize_with = "lenient_count")]
    pub comment_count: u64,
    /// ISO 8601 duration code, e.g. `PT4M13S`
    #[serde(default)]
    pub duration: String,
    #[serde(default, deserialize_with = "lenient_dimension")]
    pub width: u32,
    #[serde(default, deserialize_with = "lenient_dimension")]
    pub height: u32,
}

impl VideoRecord {
    pub fn duration_seconds(&self) -> u64 {
        parse_iso8601_duration_to_seconds(&self.duration)
    }

    /// `width / height`, or `None` while either dimension is unknown.
    pub fn aspect_ratio(&self) -> Option<f64> {
        if self.width == 0 || self.height == 0 {
            return None;
        }
        Some(f64::from(self.width) / f64::from(self.height))
    }

    pub fn is_vertical(&self) -> bool {
        self.aspect_ratio().is_some_and(|ratio| ratio < 1.0)
    }

    /// `(likes + comments) / views` as a fraction. Undefined for unwatched videos.
    pub fn engagement_ratio(&self) -> Option<f64> {
        if self.view_count == 0 {
            return None;
        }
        Some((self.like_count as f64 + self.comment_count as f64) / self.view_count as f64)
    }
}

/// One top-level comment, tagged with the video it was left on.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CommentRecord {
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub text: String,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub published_at: DateTime<Utc>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub like_count: u64,
    #[serde(default)]
    pub video_id: String,
    #[serde(default)]
    pub video_title: String,
    #[serde(
        default,
        deserialize_with = "lenient_optional_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub video_published_at: Option<DateTime<Utc>>,
    #[serde(
        default,
        deserialize_with = "lenient_channel_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub author_channel_id: Option<String>,
}

/// Channel metadata from `GET /channel/{id}`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ChannelInfo {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "lenient_count")]
    pub subscriber_count: u64,
    #[serde(default, deserialize_with = "lenient_count")]
    pub video_count: u64,
    #[serde(default, deserialize_with = "lenient_count")]
    pub view_count: u64,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default)]
    pub custom_url: String,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub published_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct CommentKeyword {
    #[serde(default)]
    pub word: String,
    #[serde(default, deserialize_with = "lenient_count")]
    pub count: u64,
    #[serde(default)]
    pub examples: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct SentimentExamples {
    #[serde(default)]
    pub positive: Vec<String>,
    #[serde(default)]
    pub negative: Vec<String>,
    #[serde(default)]
    pub neutral: Vec<String>,
}

/// Sentiment split in percent.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct Sentiment {
    #[serde(default)]
    pub positive: f64,
    #[serde(default)]
    pub negative: f64,
    #[serde(default)]
    pub neutral: f64,
    #[serde(default)]
    pub examples: SentimentExamples,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct CommentCategory {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub examples: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct CommentFeedback {
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub examples: Vec<String>,
}

/// Result of `GET /videos/{id}/analysis`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct CommentAnalysis {
    #[serde(default)]
    pub keywords: Vec<CommentKeyword>,
    #[serde(default)]
    pub sentiment: Sentiment,
    #[serde(default)]
    pub categories: Vec<CommentCategory>,
    #[serde(default)]
    pub feedback: Vec<CommentFeedback>,
}

impl CommentAnalysis {
    /// The backend sometimes double-encodes the document as a JSON string.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::String(inner) => Ok(serde_json::from_str(&inner)?),
            other => Ok(serde_json::from_value(other)?),
        }
    }
}

/// Chart kinds the narrative endpoint knows how to describe.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ChartType {
    Engagement,
    Growth,
    Upload,
    ContentPerformance,
    CoreFans,
}

/// Body of `POST /analysis/chart`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ChartAnalysisRequest {
    pub chart_type: ChartType,
    pub data: Value,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct ChartAnalysisResponse {
    #[serde(default)]
    pub analysis: String,
}

pub fn parse_videos(json: &str) -> Result<Vec<VideoRecord>> {
    Ok(serde_json::from_str(json)?)
}

pub fn parse_comments(json: &str) -> Result<Vec<CommentRecord>> {
    Ok(serde_json::from_str(json)?)
}

pub fn parse_channel(json: &str) -> Result<ChannelInfo> {
    Ok(serde_json::from_str(json)?)
}

pub fn parse_comment_analysis(json: &str) -> Result<CommentAnalysis> {
    CommentAnalysis::from_value(serde_json::from_str(json)?)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CountRepr {
    Unsigned(u64),
    Signed(i64),
    Float(f64),
    Text(String),
    Other(IgnoredAny),
}

/// Reads a count sent as a decimal string, a number or null. Anything
/// unusable becomes 0.
fn lenient_count<'de, D>(deserializer: D) -> std::result::Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let count = match Option::<CountRepr>::deserialize(deserializer)? {
        Some(CountRepr::Unsigned(n)) => n,
        Some(CountRepr::Float(f)) if f.is_finite() && f > 0.0 => f as u64,
        Some(CountRepr::Text(text)) => parse_count(&text),
        Some(CountRepr::Signed(_)) | Some(CountRepr::Float(_)) | Some(CountRepr::Other(_)) => {
            warn!("Unusable count value, defaulting to 0");
            0
        }
        None => 0,
    };
    Ok(count)
}

fn lenient_dimension<'de, D>(deserializer: D) -> std::result::Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(u32::try_from(lenient_count(deserializer)?).unwrap_or(0))
}

/// Leading decimal digits of `text`, the way the platform's string counts
/// are read. `"12"` is 12, `"12abc"` is 12, `"abc"` is 0.
pub fn parse_count(text: &str) -> u64 {
    let trimmed = text.trim();
    let digits = trimmed.bytes().take_while(|b| b.is_ascii_digit()).count();
    trimmed[..digits].parse().unwrap_or(0)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TimestampRepr {
    Text(String),
    Other(IgnoredAny),
}

fn lenient_optional_timestamp<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let parsed = match Option::<TimestampRepr>::deserialize(deserializer)? {
        Some(TimestampRepr::Text(text)) => {
            let parsed = parse_timestamp(&text);
            if parsed.is_none() {
                warn!("Malformed timestamp {text:?}");
            }
            parsed
        }
        Some(TimestampRepr::Other(_)) => {
            warn!("Timestamp is not a string");
            None
        }
        None => None,
    };
    Ok(parsed)
}

fn lenient_timestamp<'de, D>(deserializer: D) -> std::result::Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_optional_timestamp(deserializer)?.unwrap_or_default())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ChannelIdRepr {
    Plain(String),
    Wrapped { value: String },
    Other(IgnoredAny),
}

/// `authorChannelId` arrives either as a string or as `{ "value": "..." }`.
fn lenient_channel_id<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let id = match Option::<ChannelIdRepr>::deserialize(deserializer)? {
        Some(ChannelIdRepr::Plain(value)) | Some(ChannelIdRepr::Wrapped { value }) => Some(value),
        Some(ChannelIdRepr::Other(_)) | None => None,
    };
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_video_counts_from_strings() {
        let videos = parse_videos(
            r#"[{
                "id": "abc",
                "title": "First upload",
                "publishedAt": "2024-03-01T12:00:00Z",
                "viewCount": "1500",
                "likeCount": "30",
                "commentCount": "12",
                "duration": "PT4M13S",
                "width": 1920,
                "height": 1080
            }]"#,
        )
        .unwrap();

        let video = &videos[0];
        assert_eq!(video.view_count, 1500);
        assert_eq!(video.like_count, 30);
        assert_eq!(video.comment_count, 12);
        assert_eq!(video.duration_seconds(), 253);
        assert_eq!(video.published_at.to_rfc3339(), "2024-03-01T12:00:00+00:00");
        assert!(!video.is_vertical());
    }

    #[test]
    fn test_missing_and_malformed_fields_default() {
        let videos = parse_videos(
            r#"[{
                "id": "x",
                "publishedAt": "yesterday",
                "viewCount": null,
                "likeCount": "-4",
                "commentCount": true
            }]"#,
        )
        .unwrap();

        let video = &videos[0];
        assert_eq!(video.title, "");
        assert_eq!(video.view_count, 0);
        assert_eq!(video.like_count, 0);
        assert_eq!(video.comment_count, 0);
        assert_eq!(video.published_at, DateTime::<Utc>::default());
        assert_eq!(video.aspect_ratio(), None);
        assert_eq!(video.engagement_ratio(), None);
    }

    #[test]
    fn test_numeric_counts_accepted() {
        let videos = parse_videos(r#"[{"viewCount": 10, "likeCount": 2.0, "commentCount": -1}]"#)
            .unwrap();
        assert_eq!(videos[0].view_count, 10);
        assert_eq!(videos[0].like_count, 2);
        assert_eq!(videos[0].comment_count, 0);
        assert_eq!(videos[0].engagement_ratio(), Some(0.2));
    }

    #[test]
    fn test_engagement_ratio_with_maximal_likes() {
        let videos = parse_videos(
            r#"[{"viewCount": "10", "likeCount": "18446744073709551615", "commentCount": "1"}]"#,
        )
        .unwrap();
        assert_eq!(videos[0].like_count, u64::MAX);
        let ratio = videos[0].engagement_ratio().unwrap();
        assert!(ratio.is_finite());
        assert!(ratio > 1e18);
    }

    #[test]
    fn test_parse_count_reads_leading_digits() {
        assert_eq!(parse_count("12"), 12);
        assert_eq!(parse_count(" 12abc"), 12);
        assert_eq!(parse_count("abc"), 0);
        assert_eq!(parse_count(""), 0);
    }

    #[test]
    fn test_author_channel_id_shapes() {
        let comments = parse_comments(
            r#"[
                {"author": "a", "authorChannelId": {"value": "UC1"}},
                {"author": "b", "authorChannelId": "UC2"},
                {"author": "c"},
                {"author": "d", "authorChannelId": 7}
            ]"#,
        )
        .unwrap();

        let ids: Vec<_> = comments
            .iter()
            .map(|c| c.author_channel_id.as_deref())
            .collect();
        assert_eq!(ids, vec![Some("UC1"), Some("UC2"), None, None]);
    }

    #[test]
    fn test_channel_info_counts() {
        let channel = parse_channel(
            r#"{"id": "UC1", "title": "Chan", "subscriberCount": "1200", "videoCount": "34", "viewCount": "99000"}"#,
        )
        .unwrap();
        assert_eq!(channel.subscriber_count, 1200);
        assert_eq!(channel.video_count, 34);
        assert_eq!(channel.view_count, 99000);
        assert_eq!(channel.custom_url, "");
    }

    #[test]
    fn test_comment_analysis_defaults_and_string_payload() {
        let analysis = parse_comment_analysis(r#"{"keywords": [{"word": "great", "count": 4}]}"#)
            .unwrap();
        assert_eq!(analysis.keywords[0].word, "great");
        assert_eq!(analysis.keywords[0].count, 4);
        assert!(analysis.keywords[0].examples.is_empty());
        assert_eq!(analysis.sentiment, Sentiment::default());

        let wrapped = parse_comment_analysis(
            r#""{\"feedback\": [{\"type\": \"request\", \"content\": \"more tutorials\"}]}""#,
        )
        .unwrap();
        assert_eq!(wrapped.feedback[0].kind, "request");
        assert_eq!(wrapped.feedback[0].content, "more tutorials");
    }

    #[test]
    fn test_malformed_payload_is_an_error() {
        assert!(parse_videos("{not json").is_err());
        assert!(parse_videos(r#"{"id": "single object"}"#).is_err());
    }

    #[test]
    fn test_chart_request_wire_shape() {
        let request = ChartAnalysisRequest {
            chart_type: ChartType::ContentPerformance,
            data: serde_json::json!({ "best_views": 10 }),
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({ "chart_type": "content_performance", "data": { "best_views": 10 } })
        );
    }
}
