use crate::models::VideoRecord;

pub const TOP_VIDEOS: usize = 10;

/// Most viewed videos first. Equal view counts keep input order.
pub fn top_videos(videos: &[VideoRecord], limit: usize) -> Vec<&VideoRecord> {
    let mut ranked: Vec<&VideoRecord> = videos.iter().collect();
    ranked.sort_by(|a, b| b.view_count.cmp(&a.view_count));
    ranked.truncate(limit);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn video(id: &str, views: u64) -> VideoRecord {
        VideoRecord {
            id: id.to_string(),
            view_count: views,
            ..Default::default()
        }
    }

    #[test]
    fn test_top_videos_order_and_limit() {
        let videos: Vec<_> = (0..15).map(|i| video(&format!("v{i}"), i * 10)).collect();
        let top = top_videos(&videos, TOP_VIDEOS);
        assert_eq!(top.len(), 10);
        assert_eq!(top[0].id, "v14");
        assert_eq!(top[9].id, "v5");
    }

    #[test]
    fn test_ties_keep_input_order() {
        let videos = vec![video("a", 5), video("b", 9), video("c", 5)];
        let ids: Vec<_> = top_videos(&videos, 3).iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
    }
}
