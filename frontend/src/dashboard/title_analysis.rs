use crate::components::Section;
use crate::utils::format_number;
use analytics::{analyze_titles, TitleLength, VideoRecord};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TitleAnalysisProps {
    pub videos: Rc<Vec<VideoRecord>>,
}

#[function_component(TitleAnalysisView)]
pub fn title_analysis_view(props: &TitleAnalysisProps) -> Html {
    let analysis = analyze_titles(&props.videos);

    html! {
        <Section title="Title analysis">
            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                <div>
                    <h3 class="font-semibold text-gray-700 mb-2">{"Title length"}</h3>
                    <table class="w-full text-sm">
                        <thead>
                            <tr class="text-left text-gray-500">
                                <th>{"Length"}</th>
                                <th>{"Videos"}</th>
                                <th>{"Avg. views"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            {
                                for TitleLength::ALL.into_iter().map(|length| {
                                    let bucket = analysis.lengths.get(&length).cloned().unwrap_or_default();
                                    html! {
                                        <tr class="border-t">
                                            <td class="py-1">{ length.display_name() }</td>
                                            <td>{ bucket.count }</td>
                                            <td>{ format_number(bucket.avg_views().round() as u64) }</td>
                                        </tr>
                                    }
                                })
                            }
                        </tbody>
                    </table>
                </div>
                <div>
                    <h3 class="font-semibold text-gray-700 mb-2">{"Top keywords"}</h3>
                    {
                        if analysis.top_keywords.is_empty() {
                            html! { <p class="text-gray-500 text-sm">{"No recurring keywords."}</p> }
                        } else {
                            html! {
                                <ul class="space-y-1">
                                    {
                                        for analysis.top_keywords.iter().map(|keyword| html! {
                                            <li class="flex justify-between text-sm">
                                                <span class="font-medium text-gray-800">{ format!("#{}", keyword.keyword) }</span>
                                                <span class="text-gray-500">
                                                    { format!("{}x · avg. {} views", keyword.count, format_number(keyword.avg_views().round() as u64)) }
                                                </span>
                                            </li>
                                        })
                                    }
                                </ul>
                            }
                        }
                    }
                </div>
            </div>
        </Section>
    }
}
