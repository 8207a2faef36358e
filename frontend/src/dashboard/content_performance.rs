use crate::components::{NarrativeCard, Section};
use crate::utils::{format_duration, format_number};
use analytics::{analyze_content, narrative, VideoCategory, VideoRecord};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ContentPerformanceProps {
    pub videos: Rc<Vec<VideoRecord>>,
}

/// Average reach and engagement per duration category.
#[function_component(ContentPerformanceView)]
pub fn content_performance_view(props: &ContentPerformanceProps) -> Html {
    let performance = analyze_content(&props.videos);
    let request = narrative::content_performance(&performance);

    html! {
        <Section title="Performance by video length">
            <NarrativeCard {request} />
            <div class="grid grid-cols-1 md:grid-cols-4 gap-4">
                {
                    for VideoCategory::ALL.into_iter().map(|category| {
                        let stats = performance.stats(category);
                        let best = performance.best_category == Some(category);
                        html! {
                            <div class={if best { "p-4 rounded-lg bg-blue-50 border-2 border-blue-400" } else { "p-4 rounded-lg bg-gray-50" }}>
                                <h3 class="font-semibold text-gray-800 mb-2">
                                    { category.display_name() }
                                    { if best { " ★" } else { "" } }
                                </h3>
                                <p class="text-sm text-gray-600">{ format!("{} videos", stats.count) }</p>
                                <p class="text-sm text-gray-600">{ format!("Avg. views: {}", format_number(stats.avg_views.round() as u64)) }</p>
                                <p class="text-sm text-gray-600">{ format!("Avg. engagement: {:.1}%", stats.avg_engagement * 100.0) }</p>
                                <p class="text-sm text-gray-600">{ format!("Avg. length: {}", format_duration(stats.avg_duration.round() as u64)) }</p>
                                {
                                    if category == VideoCategory::Shorts || stats.vertical_count == 0 {
                                        html! {}
                                    } else {
                                        html! { <p class="text-xs text-gray-400">{ format!("{} vertical", stats.vertical_count) }</p> }
                                    }
                                }
                            </div>
                        }
                    })
                }
            </div>
            {
                if performance.filtered_count > 0 {
                    html! {
                        <p class="text-xs text-gray-500 mt-4">
                            { format!("{} videos without views are left out.", performance.filtered_count) }
                        </p>
                    }
                } else {
                    html! {}
                }
            }
        </Section>
    }
}
