use crate::components::{NarrativeCard, Section, StatCard};
use crate::utils::{format_growth, format_number, format_percent, growth_color};
use analytics::growth::RECENT_WINDOW_DAYS;
use analytics::utils::view_totals;
use analytics::{calculate_growth, narrative, VideoRecord};
use chrono::{DateTime, Utc};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct GrowthMetricsProps {
    pub videos: Rc<Vec<VideoRecord>>,
    pub now: DateTime<Utc>,
}

#[function_component(GrowthMetricsView)]
pub fn growth_metrics_view(props: &GrowthMetricsProps) -> Html {
    let metrics = calculate_growth(&props.videos, props.now);
    let (total_views, avg_views) = view_totals(&props.videos);
    let request = narrative::growth(total_views, avg_views, &metrics);

    html! {
        <Section title={format!("Growth (last {RECENT_WINDOW_DAYS} days vs. before)")}>
            <NarrativeCard request={Some(request)} />
            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                <StatCard
                    title="Average views growth"
                    value={format_growth(metrics.view_growth)}
                    value_class={growth_color(metrics.view_growth)}
                    subtitle={format!(
                        "{} recent vs. {} before ({} / {} uploads)",
                        format_number(metrics.recent_avg_views.round() as u64),
                        format_number(metrics.older_avg_views.round() as u64),
                        metrics.recent_count,
                        metrics.older_count,
                    )}
                />
                <StatCard
                    title="Engagement growth"
                    value={format_growth(metrics.engagement_growth)}
                    value_class={growth_color(metrics.engagement_growth)}
                    subtitle={format!(
                        "{} recent vs. {} before",
                        format_percent(metrics.recent_engagement * 100.0),
                        format_percent(metrics.older_engagement * 100.0),
                    )}
                />
            </div>
        </Section>
    }
}
