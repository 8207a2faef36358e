use crate::config::{create_http_client, BACKEND_URL};
use analytics::{
    parse_channel, parse_comment_analysis, parse_comments, parse_videos, AnalyticsError,
    ChannelInfo, ChartAnalysisRequest, ChartAnalysisResponse, CommentAnalysis, CommentRecord,
    VideoRecord,
};
use log::{debug, error};
use reqwest::{Client, StatusCode};
use thiserror::Error;
use url::Url;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Failed to connect to backend: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Request failed: HTTP {status} - {body}")]
    Status { status: StatusCode, body: String },

    #[error("Failed to parse response: {0}")]
    Payload(#[from] AnalyticsError),

    #[error("Invalid backend URL: {0}")]
    BaseUrl(#[from] url::ParseError),
}

/// Thin client for the analysis backend's JSON endpoints.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: Client,
    base_url: Url,
}

impl BackendClient {
    pub fn new(http: Client, base_url: &str) -> Result<Self, ClientError> {
        Ok(Self {
            http,
            base_url: Url::parse(base_url)?,
        })
    }

    pub fn from_config() -> anyhow::Result<Self> {
        Ok(Self::new(create_http_client()?, &BACKEND_URL)?)
    }

    /// Append path segments to the base URL, percent-encoding each one.
    pub fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn get_text(&self, segments: &[&str]) -> Result<String, ClientError> {
        let url = self.endpoint(segments);
        debug!("GET {url}");
        let response = self.http.get(url).send().await?;
        Self::read_body(response).await
    }

    async fn read_body(response: reqwest::Response) -> Result<String, ClientError> {
        let status = response.status();
        if status.is_success() {
            Ok(response.text().await?)
        } else {
            let body = response.text().await.unwrap_or_default();
            error!("Backend answered {status}: {body}");
            Err(ClientError::Status { status, body })
        }
    }

    pub async fn channel_info(&self, channel_id: &str) -> Result<ChannelInfo, ClientError> {
        let body = self.get_text(&["channel", channel_id]).await?;
        Ok(parse_channel(&body)?)
    }

    pub async fn channel_videos(&self, channel_id: &str) -> Result<Vec<VideoRecord>, ClientError> {
        let body = self.get_text(&["channel", channel_id, "videos"]).await?;
        Ok(parse_videos(&body)?)
    }

    pub async fn channel_comments(
        &self,
        channel_id: &str,
    ) -> Result<Vec<CommentRecord>, ClientError> {
        let body = self.get_text(&["channel", channel_id, "comments"]).await?;
        Ok(parse_comments(&body)?)
    }

    pub async fn video_comments(&self, video_id: &str) -> Result<Vec<CommentRecord>, ClientError> {
        let body = self.get_text(&["videos", video_id, "comments"]).await?;
        Ok(parse_comments(&body)?)
    }

    pub async fn video_analysis(&self, video_id: &str) -> Result<CommentAnalysis, ClientError> {
        let body = self.get_text(&["videos", video_id, "analysis"]).await?;
        Ok(parse_comment_analysis(&body)?)
    }

    pub async fn chart_analysis(
        &self,
        request: &ChartAnalysisRequest,
    ) -> Result<String, ClientError> {
        let url = self.endpoint(&["analysis", "chart"]);
        debug!("POST {url} ({:?})", request.chart_type);
        let response = self.http.post(url).json(request).send().await?;
        let body = Self::read_body(response).await?;
        let parsed: ChartAnalysisResponse =
            serde_json::from_str(&body).map_err(AnalyticsError::from)?;
        Ok(parsed.analysis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn client(base: &str) -> BackendClient {
        BackendClient::new(Client::new(), base).unwrap()
    }

    #[test]
    fn test_endpoint_paths() {
        let client = client("http://localhost:8000/api");
        assert_eq!(
            client.endpoint(&["channel", "UC123", "videos"]).as_str(),
            "http://localhost:8000/api/channel/UC123/videos"
        );
        assert_eq!(
            client.endpoint(&["analysis", "chart"]).as_str(),
            "http://localhost:8000/api/analysis/chart"
        );
    }

    #[test]
    fn test_trailing_slash_base() {
        let client = client("http://localhost:8000/api/");
        assert_eq!(
            client.endpoint(&["videos", "abc", "analysis"]).as_str(),
            "http://localhost:8000/api/videos/abc/analysis"
        );
    }

    #[test]
    fn test_channel_url_is_one_segment() {
        let client = client("http://localhost:8000/api");
        let url = client.endpoint(&["channel", "https://youtube.com/@someone"]);
        assert_eq!(url.path_segments().map(|s| s.count()), Some(3));
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(BackendClient::new(Client::new(), "not a url").is_err());
    }
}
