//! Channel statistics for the dashboard
//!
//! Typed records for everything the analysis backend serves, plus the pure
//! aggregations the dashboard charts: content performance by duration,
//! engagement ratios, view trends, title keywords, upload patterns, growth
//! and the core fan ranking. Every function takes an immutable snapshot and
//! rebuilds its output from scratch.

pub mod classify;
pub mod content;
pub mod engagement;
mod error;
pub mod fans;
pub mod growth;
pub mod models;
pub mod narrative;
pub mod ranking;
pub mod report;
pub mod titles;
pub mod trend;
pub mod uploads;
pub mod utils;

pub use classify::{classify, VideoCategory};
pub use content::{analyze_content, CategoryStats, ContentPerformance};
pub use engagement::{analyze_engagement, EngagementAverages, EngagementReport, VideoEngagement};
pub use error::*;
pub use fans::{rank_core_fans, FanProfile, FanRanking};
pub use growth::{calculate_growth, GrowthMetrics, GrowthRate};
pub use models::*;
pub use ranking::top_videos;
pub use report::DashboardReport;
pub use titles::{analyze_titles, KeywordStats, TitleAnalysis, TitleBucket, TitleLength};
pub use trend::{engagement_trend, moving_average, view_series, TrendPoint, ViewPoint};
pub use uploads::{analyze_upload_patterns, UploadPatterns};
