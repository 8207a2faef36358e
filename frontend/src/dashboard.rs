mod content_performance;
mod core_fans;
mod engagement_analysis;
mod growth_metrics;
mod overview;
mod stats_chart;
mod title_analysis;
mod top_videos;
mod upload_patterns;
mod video_list;

use crate::api::{get_channel_info, get_channel_videos, handle_error};
use crate::components::{ErrorMessage, Loading};
use crate::router::Route;
use analytics::{ChannelInfo, VideoRecord};
use chrono::{DateTime, Utc};
use content_performance::ContentPerformanceView;
use core_fans::CoreFans;
use engagement_analysis::EngagementAnalysis;
use futures_util::future::try_join;
use growth_metrics::GrowthMetricsView;
use overview::ChannelOverview;
use stats_chart::ViewsChart;
use std::rc::Rc;
use title_analysis::TitleAnalysisView;
use top_videos::TopVideos;
use upload_patterns::UploadPatternsView;
use video_list::VideoList;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

/// One channel snapshot: channel metadata and its uploads, fetched together.
#[derive(PartialEq)]
pub struct DashboardData {
    pub channel: ChannelInfo,
    pub videos: Rc<Vec<VideoRecord>>,
    pub loaded_at: DateTime<Utc>,
}

#[derive(Clone, PartialEq)]
enum LoadState {
    Loading,
    Failed(String),
    Ready(Rc<DashboardData>),
}

#[derive(Properties, PartialEq)]
pub struct DashboardPageProps {
    pub channel_id: String,
}

#[function_component(DashboardPage)]
pub fn dashboard_page(props: &DashboardPageProps) -> Html {
    let state = use_state(|| LoadState::Loading);
    let attempt = use_state(|| 0u32);
    let generation = use_mut_ref(|| 0u32);

    {
        let state = state.clone();
        use_effect_with(
            (props.channel_id.clone(), *attempt),
            move |(channel_id, _)| {
                let request_id = {
                    let mut current = generation.borrow_mut();
                    *current += 1;
                    *current
                };
                state.set(LoadState::Loading);

                let channel_id = channel_id.clone();
                spawn_local(async move {
                    let result =
                        try_join(get_channel_info(&channel_id), get_channel_videos(&channel_id))
                            .await;

                    // A newer channel id or retry superseded this request.
                    if *generation.borrow() != request_id {
                        log::debug!("Discarding stale dashboard data for {channel_id}");
                        return;
                    }

                    match result {
                        Ok((channel, videos)) => {
                            log::info!("Loaded {} videos for {}", videos.len(), channel.title);
                            state.set(LoadState::Ready(Rc::new(DashboardData {
                                channel,
                                videos: Rc::new(videos),
                                loaded_at: Utc::now(),
                            })));
                        }
                        Err(e) => {
                            let message = handle_error("Could not load channel", &e);
                            state.set(LoadState::Failed(message));
                        }
                    }
                });
                || ()
            },
        );
    }

    let on_retry = {
        let attempt = attempt.clone();
        Callback::from(move |_: MouseEvent| attempt.set(*attempt + 1))
    };

    let body = match &*state {
        LoadState::Loading => html! { <Loading label="Loading channel data..." /> },
        LoadState::Failed(message) => html! {
            <ErrorMessage error_message={Some(message.clone())} on_retry={Some(on_retry)} />
        },
        LoadState::Ready(data) => {
            let videos = data.videos.clone();
            html! {
                <>
                    <ChannelOverview channel={data.channel.clone()} loaded_at={data.loaded_at} />
                    <GrowthMetricsView videos={videos.clone()} now={data.loaded_at} />
                    <ViewsChart videos={videos.clone()} />
                    <EngagementAnalysis videos={videos.clone()} />
                    <ContentPerformanceView videos={videos.clone()} />
                    <UploadPatternsView videos={videos.clone()} />
                    <TitleAnalysisView videos={videos.clone()} />
                    <TopVideos videos={videos.clone()} />
                    <CoreFans
                        channel_id={props.channel_id.clone()}
                        owner_id={data.channel.id.clone()}
                        owner_title={data.channel.title.clone()}
                    />
                    <VideoList {videos} />
                </>
            }
        }
    };

    html! {
        <div class="min-h-screen bg-gray-700 p-4">
            <div class="max-w-6xl mx-auto">
                <div class="flex justify-between items-center mb-6">
                    <h1 class="text-3xl font-bold text-white">{"Channel Dashboard"}</h1>
                    <Link<Route> to={Route::Home} classes="text-blue-200 hover:underline">
                        {"← Analyze another channel"}
                    </Link<Route>>
                </div>
                { body }
            </div>
        </div>
    }
}
