use crate::components::{BarChart, BarDatum, NarrativeCard, Section};
use crate::utils::local_offset;
use analytics::uploads::WEEKDAY_NAMES;
use analytics::{analyze_upload_patterns, narrative, VideoRecord};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct UploadPatternsProps {
    pub videos: Rc<Vec<VideoRecord>>,
}

/// Upload histograms by weekday and hour in the browser's time zone.
#[function_component(UploadPatternsView)]
pub fn upload_patterns_view(props: &UploadPatternsProps) -> Html {
    let patterns = analyze_upload_patterns(&props.videos, local_offset());
    let request = narrative::upload(&patterns);

    let weekdays: Vec<BarDatum> = WEEKDAY_NAMES
        .iter()
        .zip(patterns.by_weekday)
        .map(|(name, count)| BarDatum {
            label: name[..3].to_string(),
            value: count as f64,
        })
        .collect();
    let hours: Vec<BarDatum> = patterns
        .by_hour
        .iter()
        .enumerate()
        .map(|(hour, count)| BarDatum {
            label: format!("{hour}"),
            value: *count as f64,
        })
        .collect();

    html! {
        <Section title="Upload patterns">
            <NarrativeCard {request} />
            {
                if let Some(days) = patterns.average_interval_days {
                    html! { <p class="text-gray-600 mb-4">{ format!("One upload every {days:.1} days on average.") }</p> }
                } else {
                    html! {}
                }
            }
            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                <div>
                    <h3 class="font-semibold text-gray-700 mb-2">{"By weekday"}</h3>
                    <BarChart bars={weekdays} />
                </div>
                <div>
                    <h3 class="font-semibold text-gray-700 mb-2">{"By hour"}</h3>
                    <BarChart bars={hours} bar_class="bg-orange-400" />
                </div>
            </div>
        </Section>
    }
}
