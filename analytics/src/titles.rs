use crate::models::VideoRecord;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

pub const SHORT_TITLE_CHARS: usize = 20;
pub const MEDIUM_TITLE_CHARS: usize = 40;
pub const MIN_KEYWORD_CHARS: usize = 2;
pub const TOP_KEYWORDS: usize = 5;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TitleLength {
    Short,
    Medium,
    Long,
}

impl TitleLength {
    pub const ALL: [TitleLength; 3] = [TitleLength::Short, TitleLength::Medium, TitleLength::Long];

    pub fn of(title: &str) -> Self {
        let length = title.chars().count();
        if length < SHORT_TITLE_CHARS {
            TitleLength::Short
        } else if length < MEDIUM_TITLE_CHARS {
            TitleLength::Medium
        } else {
            TitleLength::Long
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            TitleLength::Short => "Under 20 chars",
            TitleLength::Medium => "20-40 chars",
            TitleLength::Long => "40+ chars",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct TitleBucket {
    pub count: usize,
    pub total_views: u64,
}

impl TitleBucket {
    pub fn avg_views(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.total_views as f64 / self.count as f64
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct KeywordStats {
    pub keyword: String,
    /// Occurrences across all titles
    pub count: usize,
    /// Each occurrence adds the full view count of its video
    pub total_views: u64,
}

impl KeywordStats {
    /// Average views when this keyword is used
    pub fn avg_views(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.total_views as f64 / self.count as f64
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TitleAnalysis {
    pub lengths: BTreeMap<TitleLength, TitleBucket>,
    pub top_keywords: Vec<KeywordStats>,
}

pub fn analyze_titles(videos: &[VideoRecord]) -> TitleAnalysis {
    let mut lengths: BTreeMap<TitleLength, TitleBucket> = TitleLength::ALL
        .iter()
        .map(|length| (*length, TitleBucket::default()))
        .collect();

    // First-seen order breaks ties between keywords with equal views
    let mut keywords: Vec<KeywordStats> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for video in videos {
        if let Some(bucket) = lengths.get_mut(&TitleLength::of(&video.title)) {
            bucket.count += 1;
            bucket.total_views = bucket.total_views.saturating_add(video.view_count);
        }

        for word in video.title.to_lowercase().split_whitespace() {
            if word.chars().count() < MIN_KEYWORD_CHARS {
                continue;
            }
            let slot = *index.entry(word.to_string()).or_insert_with(|| {
                keywords.push(KeywordStats {
                    keyword: word.to_string(),
                    count: 0,
                    total_views: 0,
                });
                keywords.len() - 1
            });
            let keyword = &mut keywords[slot];
            keyword.count += 1;
            keyword.total_views = keyword.total_views.saturating_add(video.view_count);
        }
    }

    keywords.sort_by(|a, b| b.total_views.cmp(&a.total_views));
    keywords.truncate(TOP_KEYWORDS);

    TitleAnalysis {
        lengths,
        top_keywords: keywords,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn video(title: &str, views: u64) -> VideoRecord {
        VideoRecord {
            title: title.to_string(),
            view_count: views,
            ..Default::default()
        }
    }

    #[test]
    fn test_length_buckets() {
        let videos = vec![
            video("Short one", 100),
            video("A title that is somewhat longer", 300),
            video("A title that keeps going and going until it is long", 50),
            video("Tiny", 200),
        ];
        let analysis = analyze_titles(&videos);

        let short = &analysis.lengths[&TitleLength::Short];
        assert_eq!(short.count, 2);
        assert_eq!(short.avg_views(), 150.0);
        assert_eq!(analysis.lengths[&TitleLength::Medium].count, 1);
        assert_eq!(analysis.lengths[&TitleLength::Long].total_views, 50);

        let total: usize = analysis.lengths.values().map(|b| b.count).sum();
        assert_eq!(total, videos.len());
    }

    #[test]
    fn test_length_boundaries() {
        assert_eq!(TitleLength::of(&"x".repeat(19)), TitleLength::Short);
        assert_eq!(TitleLength::of(&"x".repeat(20)), TitleLength::Medium);
        assert_eq!(TitleLength::of(&"x".repeat(39)), TitleLength::Medium);
        assert_eq!(TitleLength::of(&"x".repeat(40)), TitleLength::Long);
        // Counted in characters, not bytes
        assert_eq!(TitleLength::of(&"가".repeat(19)), TitleLength::Short);
    }

    #[test]
    fn test_keywords_get_full_views_per_token() {
        let videos = vec![
            video("Rust tutorial part 1", 1000),
            video("rust  tips", 500),
            video("Cooking tutorial", 10),
        ];
        let analysis = analyze_titles(&videos);
        let keywords: Vec<_> = analysis
            .top_keywords
            .iter()
            .map(|k| (k.keyword.as_str(), k.count, k.total_views))
            .collect();

        assert_eq!(
            keywords,
            vec![
                ("rust", 2, 1500),
                ("tutorial", 2, 1010),
                ("part", 1, 1000),
                ("tips", 1, 500),
                ("cooking", 1, 10),
            ]
        );
        assert_eq!(analysis.top_keywords[0].avg_views(), 750.0);
        // "1" is a single character and never counted
        assert!(analysis.top_keywords.iter().all(|k| k.keyword != "1"));
    }

    #[test]
    fn test_only_top_five_keywords() {
        let videos = vec![video("aa bb cc dd ee ff gg", 10), video("gg", 5)];
        let analysis = analyze_titles(&videos);
        assert_eq!(analysis.top_keywords.len(), TOP_KEYWORDS);
        assert_eq!(analysis.top_keywords[0].keyword, "gg");
        assert_eq!(analysis.top_keywords[1].keyword, "aa");
    }

    #[test]
    fn test_view_totals_saturate() {
        let analysis = analyze_titles(&[video("aa", u64::MAX), video("aa", 1)]);
        assert_eq!(analysis.lengths[&TitleLength::Short].total_views, u64::MAX);
        assert_eq!(analysis.top_keywords[0].count, 2);
        assert_eq!(analysis.top_keywords[0].total_views, u64::MAX);
    }

    #[test]
    fn test_empty_input() {
        let analysis = analyze_titles(&[]);
        assert!(analysis.top_keywords.is_empty());
        assert_eq!(analysis.lengths[&TitleLength::Short].avg_views(), 0.0);
    }
}
