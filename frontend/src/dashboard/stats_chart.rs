use crate::components::{ChartSeries, LineChart, Section};
use analytics::trend::MOVING_AVERAGE_RADIUS;
use analytics::{view_series, VideoRecord};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ViewsChartProps {
    pub videos: Rc<Vec<VideoRecord>>,
}

/// Views per upload in publication order with a centred moving average.
#[function_component(ViewsChart)]
pub fn views_chart(props: &ViewsChartProps) -> Html {
    let points = view_series(&props.videos);

    if points.is_empty() {
        return html! {
            <Section title="Views over time">
                <p class="text-gray-500">{"No uploads yet."}</p>
            </Section>
        };
    }

    let labels: Rc<Vec<String>> = Rc::new(
        points
            .iter()
            .map(|point| format!("{} · {}", point.date, point.title))
            .collect(),
    );
    let series = vec![
        ChartSeries {
            name: "Views".to_string(),
            color: "#3b82f6".to_string(),
            values: points.iter().map(|point| point.views as f64).collect(),
        },
        ChartSeries {
            name: format!("{}-video moving average", 2 * MOVING_AVERAGE_RADIUS + 1),
            color: "#f97316".to_string(),
            values: points.iter().map(|point| point.moving_average).collect(),
        },
    ];

    html! {
        <Section title="Views over time">
            <LineChart {labels} {series} />
        </Section>
    }
}
