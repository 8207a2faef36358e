use crate::components::Section;
use crate::router::Route;
use crate::utils::{format_date, format_number};
use analytics::ranking::TOP_VIDEOS;
use analytics::{top_videos, VideoRecord};
use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TopVideosProps {
    pub videos: Rc<Vec<VideoRecord>>,
}

#[function_component(TopVideos)]
pub fn top_videos_view(props: &TopVideosProps) -> Html {
    let ranked = top_videos(&props.videos, TOP_VIDEOS);

    html! {
        <Section title={format!("Top {TOP_VIDEOS} videos by views")}>
            <ol class="space-y-2">
                {
                    for ranked.into_iter().enumerate().map(|(rank, video)| html! {
                        <li class="flex items-center">
                            <span class="w-8 text-gray-500 font-bold">{ rank + 1 }</span>
                            {
                                if video.thumbnail.is_empty() {
                                    html! {}
                                } else {
                                    html! { <img src={video.thumbnail.clone()} alt="" class="w-24 h-14 object-cover rounded mr-3" /> }
                                }
                            }
                            <div class="flex-1">
                                <Link<Route> to={Route::Analysis { video_id: video.id.clone() }} classes="text-blue-600 hover:underline">
                                    { &video.title }
                                </Link<Route>>
                                <p class="text-xs text-gray-500">
                                    { format!("{} views · {} likes · {}", format_number(video.view_count), format_number(video.like_count), format_date(&video.published_at)) }
                                </p>
                            </div>
                        </li>
                    })
                }
            </ol>
        </Section>
    }
}
