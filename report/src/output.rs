use analytics::utils::{format_date, format_duration, format_number};
use analytics::{ChartType, DashboardReport, GrowthRate, TitleLength, VideoCategory};
use log::error;
use serde::Serialize;
use std::fmt::{self, Write};

#[derive(Debug, Serialize)]
pub struct Narrative {
    pub chart_type: ChartType,
    pub analysis: String,
}

#[derive(Debug, Serialize)]
pub struct ReportOutput<'a> {
    pub report: &'a DashboardReport,
    pub narratives: &'a [Narrative],
}

fn growth_text(rate: GrowthRate) -> String {
    match rate {
        GrowthRate::Change(pct) => format!("{pct:+.1}%"),
        GrowthRate::InsufficientData => "no data".to_string(),
    }
}

/// Plain-text summary for the terminal.
pub fn render_summary(report: &DashboardReport, narratives: &[Narrative]) -> String {
    let mut out = String::new();
    if let Err(e) = write_summary(&mut out, report, narratives) {
        error!("Summary rendering stopped early: {e}");
    }
    out
}

fn write_summary(
    out: &mut String,
    report: &DashboardReport,
    narratives: &[Narrative],
) -> fmt::Result {
    let channel = &report.channel;

    writeln!(out, "== {} ({}) ==", channel.title, channel.id)?;
    writeln!(
        out,
        "Subscribers: {}  Views: {}  Videos: {}",
        format_number(channel.subscriber_count),
        format_number(channel.view_count),
        format_number(channel.video_count)
    )?;
    writeln!(out, "Generated: {}", report.generated_at.to_rfc3339())?;
    writeln!(
        out,
        "Analysed uploads: {}  total views {}  avg views {}",
        report.video_count,
        format_number(report.total_views),
        format_number(report.avg_views.round() as u64)
    )?;

    let growth = &report.growth;
    writeln!(out, "\n-- Growth (last 30 days vs. before) --")?;
    writeln!(
        out,
        "Views: {}  Engagement: {}  ({} recent / {} older uploads)",
        growth_text(growth.view_growth),
        growth_text(growth.engagement_growth),
        growth.recent_count,
        growth.older_count
    )?;

    let engagement = &report.engagement;
    writeln!(out, "\n-- Engagement --")?;
    writeln!(
        out,
        "Likes {:.2}%  Comments {:.2}%  Total {:.2}%",
        engagement.average.like_ratio,
        engagement.average.comment_ratio,
        engagement.average.total_engagement
    )?;
    if engagement.filtered_count > 0 {
        writeln!(
            out,
            "({} videos without views left out)",
            engagement.filtered_count
        )?;
    }

    writeln!(out, "\n-- Content performance --")?;
    for category in VideoCategory::ALL {
        let stats = report.content.stats(category);
        let marker = if report.content.best_category == Some(category) {
            " *"
        } else {
            ""
        };
        writeln!(
            out,
            "{:<13} {:>4} videos  avg views {:>10}  engagement {:>5.1}%  avg length {}{}",
            category.display_name(),
            stats.count,
            format_number(stats.avg_views.round() as u64),
            stats.avg_engagement * 100.0,
            format_duration(stats.avg_duration.round() as u64),
            marker
        )?;
    }

    writeln!(out, "\n-- Titles --")?;
    for length in TitleLength::ALL {
        let bucket = &report.titles.lengths[&length];
        writeln!(
            out,
            "{:<15} {:>4} videos  avg views {}",
            length.display_name(),
            bucket.count,
            format_number(bucket.avg_views().round() as u64)
        )?;
    }
    for keyword in &report.titles.top_keywords {
        writeln!(
            out,
            "  #{} ({}x) avg views {}",
            keyword.keyword,
            keyword.count,
            format_number(keyword.avg_views().round() as u64)
        )?;
    }

    writeln!(out, "\n-- Top videos --")?;
    for (rank, video) in report.top_videos.iter().enumerate() {
        writeln!(
            out,
            "{:>2}. {} ({} views, {})",
            rank + 1,
            video.title,
            format_number(video.view_count),
            format_date(&video.published_at)
        )?;
    }

    if let Some(ranking) = &report.core_fans {
        writeln!(out, "\n-- Core fans --")?;
        if ranking.fans.is_empty() {
            writeln!(out, "No commenter has 3 or more comments yet.")?;
        }
        for (rank, fan) in ranking.fans.iter().enumerate() {
            writeln!(
                out,
                "{:>2}. {} - {} comments, {} likes, {} videos, {:.1}% participation, active {} days",
                rank + 1,
                fan.author,
                fan.comment_count,
                fan.total_likes,
                fan.unique_videos,
                fan.engagement_rate * 100.0,
                fan.active_days()
            )?;
            writeln!(out, "    \"{}\"", fan.last_comment_preview())?;
        }
    }

    if !narratives.is_empty() {
        writeln!(out, "\n-- Commentary --")?;
        for narrative in narratives {
            writeln!(out, "[{:?}] {}", narrative.chart_type, narrative.analysis)?;
        }
    }

    Ok(())
}
