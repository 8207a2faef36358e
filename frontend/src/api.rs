use crate::env_variable_utils::BACKEND_URL;
use analytics::{
    parse_channel, parse_comment_analysis, parse_comments, parse_videos, AnalyticsError,
    ChannelInfo, ChartAnalysisRequest, ChartAnalysisResponse, CommentAnalysis, CommentRecord,
    VideoRecord,
};
use gloo_net::http::{Request, Response};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Failed to connect to backend: {0}")]
    Network(String),

    #[error("Request failed: HTTP {status} - {body}")]
    Http { status: u16, body: String },

    #[error("Failed to parse response: {0}")]
    Parse(String),
}

impl From<gloo_net::Error> for ApiError {
    fn from(e: gloo_net::Error) -> Self {
        ApiError::Network(e.to_string())
    }
}

impl From<AnalyticsError> for ApiError {
    fn from(e: AnalyticsError) -> Self {
        ApiError::Parse(e.to_string())
    }
}

/// `{BACKEND_URL}/seg/seg/...` with every segment percent-encoded, so a
/// custom channel URL stays a single path segment.
fn endpoint(segments: &[&str]) -> String {
    let path: Vec<String> = segments
        .iter()
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect();
    format!("{}/{}", &*BACKEND_URL, path.join("/"))
}

async fn read_body(response: Response) -> Result<String, ApiError> {
    if response.ok() {
        Ok(response.text().await?)
    } else {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::Http { status, body })
    }
}

async fn get_text(segments: &[&str]) -> Result<String, ApiError> {
    let url = endpoint(segments);
    log::debug!("GET {url}");
    let response = Request::get(&url).send().await?;
    read_body(response).await
}

pub async fn get_channel_info(channel_id: &str) -> Result<ChannelInfo, ApiError> {
    let body = get_text(&["channel", channel_id]).await?;
    Ok(parse_channel(&body)?)
}

pub async fn get_channel_videos(channel_id: &str) -> Result<Vec<VideoRecord>, ApiError> {
    let body = get_text(&["channel", channel_id, "videos"]).await?;
    Ok(parse_videos(&body)?)
}

pub async fn get_channel_comments(channel_id: &str) -> Result<Vec<CommentRecord>, ApiError> {
    let body = get_text(&["channel", channel_id, "comments"]).await?;
    Ok(parse_comments(&body)?)
}

pub async fn get_video_comments(video_id: &str) -> Result<Vec<CommentRecord>, ApiError> {
    let body = get_text(&["videos", video_id, "comments"]).await?;
    Ok(parse_comments(&body)?)
}

pub async fn get_video_analysis(video_id: &str) -> Result<CommentAnalysis, ApiError> {
    let body = get_text(&["videos", video_id, "analysis"]).await?;
    Ok(parse_comment_analysis(&body)?)
}

pub async fn get_chart_analysis(request: &ChartAnalysisRequest) -> Result<String, ApiError> {
    let url = endpoint(&["analysis", "chart"]);
    let response = Request::post(&url).json(request)?.send().await?;
    let body = read_body(response).await?;
    let parsed: ChartAnalysisResponse =
        serde_json::from_str(&body).map_err(|e| ApiError::Parse(e.to_string()))?;
    Ok(parsed.analysis)
}

/// Log a failure to the browser console and hand back the user-facing text.
pub fn handle_error(context: &str, error: &ApiError) -> String {
    let message = format!("{context}: {error}");
    web_sys::console::error_1(&message.clone().into());
    message
}
