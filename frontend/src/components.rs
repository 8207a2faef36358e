use crate::api::get_chart_analysis;
use analytics::ChartAnalysisRequest;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

const CHART_WIDTH: f64 = 600.0;
const CHART_HEIGHT: f64 = 220.0;
const CHART_PADDING: f64 = 24.0;

#[derive(Properties, PartialEq)]
pub struct ErrorMessageProps {
    pub error_message: Option<String>,
    #[prop_or_default]
    pub on_retry: Option<Callback<MouseEvent>>,
}

#[function_component(ErrorMessage)]
pub fn error_message(props: &ErrorMessageProps) -> Html {
    let Some(msg) = &props.error_message else {
        return html! {};
    };
    html! {
        <div class="bg-red-100 border border-red-400 text-red-700 px-4 py-3 rounded mb-4 flex justify-between items-center">
            <span>{ msg }</span>
            {
                if let Some(on_retry) = &props.on_retry {
                    html! {
                        <button
                            onclick={on_retry.clone()}
                            class="ml-4 bg-red-600 text-white px-3 py-1 rounded hover:bg-red-700"
                        >
                            {"Retry"}
                        </button>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct LoadingProps {
    #[prop_or(AttrValue::from("Loading..."))]
    pub label: AttrValue,
}

#[function_component(Loading)]
pub fn loading(props: &LoadingProps) -> Html {
    html! {
        <div class="flex items-center justify-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-blue-600 mr-3"></div>
            <span class="text-gray-600">{ &props.label }</span>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SectionProps {
    pub title: AttrValue,
    pub children: Children,
}

#[function_component(Section)]
pub fn section(props: &SectionProps) -> Html {
    html! {
        <div class="bg-white rounded-lg shadow-lg p-6 mb-6">
            <h2 class="text-xl font-semibold text-gray-800 mb-4">{ &props.title }</h2>
            { for props.children.iter() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub title: AttrValue,
    pub value: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
    #[prop_or(AttrValue::from("text-blue-600"))]
    pub value_class: AttrValue,
}

#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    html! {
        <div class="bg-gray-50 p-4 rounded-lg">
            <h3 class="text-sm font-semibold text-gray-600">{ &props.title }</h3>
            <p class={classes!("text-2xl", "font-bold", props.value_class.to_string())}>{ &props.value }</p>
            {
                if let Some(subtitle) = &props.subtitle {
                    html! { <p class="text-xs text-gray-500 mt-1">{ subtitle }</p> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct NarrativeCardProps {
    pub request: Option<ChartAnalysisRequest>,
}

/// One-sentence commentary for a chart. Hidden while there is nothing to
/// describe or when the backend could not produce it.
#[function_component(NarrativeCard)]
pub fn narrative_card(props: &NarrativeCardProps) -> Html {
    let analysis = use_state(|| None::<String>);
    let loading = use_state(|| false);
    let generation = use_mut_ref(|| 0u32);

    {
        let analysis = analysis.clone();
        let loading = loading.clone();
        use_effect_with(props.request.clone(), move |request| {
            let request_id = {
                let mut current = generation.borrow_mut();
                *current += 1;
                *current
            };
            analysis.set(None);

            if let Some(request) = request.clone() {
                loading.set(true);
                spawn_local(async move {
                    let result = get_chart_analysis(&request).await;
                    if *generation.borrow() != request_id {
                        return;
                    }
                    match result {
                        Ok(text) => analysis.set(Some(text)),
                        Err(e) => log::warn!("Chart commentary for {:?} failed: {e}", request.chart_type),
                    }
                    loading.set(false);
                });
            } else {
                loading.set(false);
            }
            || ()
        });
    }

    if *loading {
        return html! {
            <div class="bg-blue-50 border border-blue-200 text-blue-700 px-4 py-3 rounded mb-4 animate-pulse">
                {"Analyzing chart..."}
            </div>
        };
    }

    match &*analysis {
        Some(text) => html! {
            <div class="bg-blue-50 border border-blue-200 text-blue-800 px-4 py-3 rounded mb-4">
                { text }
            </div>
        },
        None => html! {},
    }
}

#[derive(Clone, PartialEq)]
pub struct ChartSeries {
    pub name: String,
    /// SVG stroke color
    pub color: String,
    pub values: Vec<f64>,
}

#[derive(Properties, PartialEq)]
pub struct LineChartProps {
    /// One label per x position, shown as hover text
    pub labels: Rc<Vec<String>>,
    pub series: Vec<ChartSeries>,
}

fn scale(value: f64, max: f64, extent: f64) -> f64 {
    if max <= 0.0 {
        0.0
    } else {
        value / max * extent
    }
}

fn x_position(index: usize, count: usize) -> f64 {
    let span = CHART_WIDTH - 2.0 * CHART_PADDING;
    if count <= 1 {
        CHART_PADDING + span / 2.0
    } else {
        CHART_PADDING + span * index as f64 / (count - 1) as f64
    }
}

fn y_position(value: f64, max: f64) -> f64 {
    CHART_HEIGHT - CHART_PADDING - scale(value, max, CHART_HEIGHT - 2.0 * CHART_PADDING)
}

#[function_component(LineChart)]
pub fn line_chart(props: &LineChartProps) -> Html {
    let max = props
        .series
        .iter()
        .flat_map(|series| series.values.iter().copied())
        .fold(0.0_f64, f64::max);
    let view_box = format!("0 0 {CHART_WIDTH} {CHART_HEIGHT}");

    html! {
        <div>
            <svg viewBox={view_box} class="w-full h-56">
                <line
                    x1={CHART_PADDING.to_string()} y1={(CHART_HEIGHT - CHART_PADDING).to_string()}
                    x2={(CHART_WIDTH - CHART_PADDING).to_string()} y2={(CHART_HEIGHT - CHART_PADDING).to_string()}
                    stroke="#d1d5db"
                />
                {
                    for props.series.iter().map(|series| {
                        let count = series.values.len();
                        let points = series
                            .values
                            .iter()
                            .enumerate()
                            .map(|(i, v)| format!("{:.1},{:.1}", x_position(i, count), y_position(*v, max)))
                            .collect::<Vec<_>>()
                            .join(" ");
                        html! {
                            <g>
                                <polyline points={points} fill="none" stroke={series.color.clone()} stroke-width="2" />
                                {
                                    for series.values.iter().enumerate().map(|(i, v)| {
                                        let label = props.labels.get(i).cloned().unwrap_or_default();
                                        html! {
                                            <circle
                                                cx={format!("{:.1}", x_position(i, count))}
                                                cy={format!("{:.1}", y_position(*v, max))}
                                                r="3"
                                                fill={series.color.clone()}
                                            >
                                                <title>{ format!("{label}\n{}: {v:.2}", series.name) }</title>
                                            </circle>
                                        }
                                    })
                                }
                            </g>
                        }
                    })
                }
            </svg>
            <div class="flex gap-4 justify-center text-sm text-gray-600">
                {
                    for props.series.iter().map(|series| html! {
                        <span class="flex items-center">
                            <span class="inline-block w-3 h-3 rounded-full mr-1" style={format!("background-color: {}", series.color)}></span>
                            { &series.name }
                        </span>
                    })
                }
            </div>
        </div>
    }
}

#[derive(Clone, PartialEq)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: f64,
    pub label: String,
}

#[derive(Properties, PartialEq)]
pub struct ScatterPlotProps {
    pub points: Vec<ScatterPoint>,
    pub x_label: AttrValue,
    pub y_label: AttrValue,
}

#[function_component(ScatterPlot)]
pub fn scatter_plot(props: &ScatterPlotProps) -> Html {
    let max_x = props.points.iter().map(|p| p.x).fold(0.0_f64, f64::max);
    let max_y = props.points.iter().map(|p| p.y).fold(0.0_f64, f64::max);
    let span = CHART_WIDTH - 2.0 * CHART_PADDING;
    let view_box = format!("0 0 {CHART_WIDTH} {CHART_HEIGHT}");

    html! {
        <div>
            <svg viewBox={view_box} class="w-full h-56">
                {
                    for props.points.iter().map(|point| html! {
                        <circle
                            cx={format!("{:.1}", CHART_PADDING + scale(point.x, max_x, span))}
                            cy={format!("{:.1}", y_position(point.y, max_y))}
                            r="4"
                            fill="#8b5cf6"
                            fill-opacity="0.7"
                        >
                            <title>{ format!("{}\n{}: {:.0}\n{}: {:.2}", point.label, props.x_label, point.x, props.y_label, point.y) }</title>
                        </circle>
                    })
                }
            </svg>
            <div class="flex justify-between text-xs text-gray-500">
                <span>{ format!("y: {}", props.y_label) }</span>
                <span>{ format!("x: {}", props.x_label) }</span>
            </div>
        </div>
    }
}

#[derive(Clone, PartialEq)]
pub struct BarDatum {
    pub label: String,
    pub value: f64,
}

#[derive(Properties, PartialEq)]
pub struct BarChartProps {
    pub bars: Vec<BarDatum>,
    #[prop_or(AttrValue::from("bg-blue-500"))]
    pub bar_class: AttrValue,
}

#[function_component(BarChart)]
pub fn bar_chart(props: &BarChartProps) -> Html {
    let max = props.bars.iter().map(|b| b.value).fold(0.0_f64, f64::max);

    html! {
        <div class="flex items-end h-48 gap-1">
            {
                for props.bars.iter().map(|bar| {
                    let height = scale(bar.value, max, 100.0);
                    html! {
                        <div class="flex-1 flex flex-col items-center justify-end h-full" title={format!("{}: {}", bar.label, bar.value)}>
                            <div
                                class={classes!("w-full", "rounded-t", props.bar_class.to_string())}
                                style={format!("height: {height:.1}%")}
                            ></div>
                            <span class="text-xs text-gray-500 mt-1 truncate">{ &bar.label }</span>
                        </div>
                    }
                })
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub title: AttrValue,
    pub on_close: Callback<MouseEvent>,
    pub children: Children,
}

#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    html! {
        <div class="fixed inset-0 bg-black bg-opacity-50 flex items-center justify-center z-50 p-4">
            <div class="bg-white rounded-lg shadow-xl w-full max-w-2xl max-h-[80vh] overflow-y-auto p-6">
                <div class="flex justify-between items-center mb-4">
                    <h3 class="text-lg font-semibold text-gray-800">{ &props.title }</h3>
                    <button onclick={props.on_close.clone()} class="text-gray-500 hover:text-gray-800">
                        {"✕"}
                    </button>
                </div>
                { for props.children.iter() }
            </div>
        </div>
    }
}
