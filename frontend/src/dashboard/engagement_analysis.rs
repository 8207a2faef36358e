use crate::components::{
    ChartSeries, LineChart, NarrativeCard, ScatterPlot, ScatterPoint, Section, StatCard,
};
use crate::utils::format_percent;
use analytics::{analyze_engagement, engagement_trend, narrative, VideoRecord};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Clone, Copy, PartialEq)]
enum EngagementTab {
    Trend,
    Scatter,
}

#[derive(Properties, PartialEq)]
pub struct EngagementAnalysisProps {
    pub videos: Rc<Vec<VideoRecord>>,
}

#[function_component(EngagementAnalysis)]
pub fn engagement_analysis(props: &EngagementAnalysisProps) -> Html {
    let tab = use_state(|| EngagementTab::Trend);
    let report = analyze_engagement(&props.videos);
    let request = narrative::engagement(&report);

    let tab_button = |target: EngagementTab, label: &'static str| {
        let tab = tab.clone();
        let active = *tab == target;
        html! {
            <button
                onclick={Callback::from(move |_: MouseEvent| tab.set(target))}
                class={if active {
                    "px-4 py-2 rounded bg-blue-600 text-white"
                } else {
                    "px-4 py-2 rounded bg-gray-200 text-gray-700 hover:bg-gray-300"
                }}
            >
                { label }
            </button>
        }
    };

    let chart = match *tab {
        EngagementTab::Trend => {
            let points = engagement_trend(&props.videos);
            let labels: Rc<Vec<String>> = Rc::new(
                points
                    .iter()
                    .map(|point| format!("{} · {}", point.date, point.title))
                    .collect(),
            );
            let series = vec![ChartSeries {
                name: "Engagement rate (%)".to_string(),
                color: "#10b981".to_string(),
                values: points.iter().map(|point| point.engagement).collect(),
            }];
            html! { <LineChart {labels} {series} /> }
        }
        EngagementTab::Scatter => {
            let points: Vec<ScatterPoint> = report
                .videos
                .iter()
                .map(|video| ScatterPoint {
                    x: video.views as f64,
                    y: video.total_engagement,
                    label: video.title.clone(),
                })
                .collect();
            html! { <ScatterPlot {points} x_label="Views" y_label="Engagement (%)" /> }
        }
    };

    html! {
        <Section title="Engagement">
            <NarrativeCard request={Some(request)} />
            <div class="grid grid-cols-1 md:grid-cols-3 gap-4 mb-4">
                <StatCard title="Average like rate" value={format_percent(report.average.like_ratio)} />
                <StatCard title="Average comment rate" value={format_percent(report.average.comment_ratio)} value_class="text-green-600" />
                <StatCard title="Average engagement" value={format_percent(report.average.total_engagement)} value_class="text-purple-600" />
            </div>
            {
                if report.filtered_count > 0 {
                    html! {
                        <p class="text-xs text-gray-500 mb-4">
                            { format!("{} videos without views are left out of these figures.", report.filtered_count) }
                        </p>
                    }
                } else {
                    html! {}
                }
            }
            <div class="flex gap-2 mb-4">
                { tab_button(EngagementTab::Trend, "Trend") }
                { tab_button(EngagementTab::Scatter, "Views vs. engagement") }
            </div>
            { chart }
        </Section>
    }
}
