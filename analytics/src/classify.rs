use crate::models::VideoRecord;
use serde::{Deserialize, Serialize};

/// Longest a portrait video may run and still count as a Short
pub const SHORTS_MAX_SECONDS: u64 = 60;
pub const SHORT_MAX_SECONDS: u64 = 600;
pub const MEDIUM_MAX_SECONDS: u64 = 1200;

/// Duration/format bucket. Every video lands in exactly one.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum VideoCategory {
    Shorts,
    Short,
    Medium,
    Long,
}

impl VideoCategory {
    pub const ALL: [VideoCategory; 4] = [
        VideoCategory::Shorts,
        VideoCategory::Short,
        VideoCategory::Medium,
        VideoCategory::Long,
    ];

    pub fn label(self) -> &'static str {
        match self {
            VideoCategory::Shorts => "shorts",
            VideoCategory::Short => "short",
            VideoCategory::Medium => "medium",
            VideoCategory::Long => "long",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            VideoCategory::Shorts => "Shorts",
            VideoCategory::Short => "Under 10 min",
            VideoCategory::Medium => "10-20 min",
            VideoCategory::Long => "Over 20 min",
        }
    }
}

pub fn classify(video: &VideoRecord) -> VideoCategory {
    classify_parts(video.duration_seconds(), video.aspect_ratio())
}

pub fn classify_parts(duration_seconds: u64, aspect_ratio: Option<f64>) -> VideoCategory {
    let portrait = aspect_ratio.is_some_and(|ratio| ratio < 1.0);
    if portrait && duration_seconds <= SHORTS_MAX_SECONDS {
        VideoCategory::Shorts
    } else if duration_seconds < SHORT_MAX_SECONDS {
        VideoCategory::Short
    } else if duration_seconds < MEDIUM_MAX_SECONDS {
        VideoCategory::Medium
    } else {
        VideoCategory::Long
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn video(width: u32, height: u32, duration: &str) -> VideoRecord {
        VideoRecord {
            width,
            height,
            duration: duration.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_classification_rules() {
        assert_eq!(classify(&video(40, 100, "PT30S")), VideoCategory::Shorts);
        assert_eq!(classify(&video(1920, 1080, "PT8M20S")), VideoCategory::Short);
        assert_eq!(classify(&video(1920, 1080, "PT16M40S")), VideoCategory::Medium);
        assert_eq!(classify(&video(1920, 1080, "PT25M")), VideoCategory::Long);
    }

    #[test]
    fn test_boundaries() {
        assert_eq!(classify(&video(1080, 1920, "PT60S")), VideoCategory::Shorts);
        assert_eq!(classify(&video(1080, 1920, "PT61S")), VideoCategory::Short);
        // Landscape under a minute is still a regular short video
        assert_eq!(classify(&video(1920, 1080, "PT30S")), VideoCategory::Short);
        // Square is not portrait
        assert_eq!(classify(&video(1080, 1080, "PT30S")), VideoCategory::Short);
        assert_eq!(classify(&video(1920, 1080, "PT10M")), VideoCategory::Medium);
        assert_eq!(classify(&video(1920, 1080, "PT20M")), VideoCategory::Long);
    }

    #[test]
    fn test_unknown_dimensions_never_shorts() {
        assert_eq!(classify(&video(0, 0, "PT15S")), VideoCategory::Short);
        assert_eq!(classify_parts(15, None), VideoCategory::Short);
    }

    #[test]
    fn test_every_duration_has_exactly_one_bucket() {
        for seconds in [0, 59, 60, 61, 599, 600, 1199, 1200, 86_400] {
            for ratio in [None, Some(0.5), Some(1.0), Some(1.78)] {
                let category = classify_parts(seconds, ratio);
                assert!(VideoCategory::ALL.contains(&category));
            }
        }
    }
}
