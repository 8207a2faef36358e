use crate::components::Section;
use crate::router::Route;
use crate::utils::{format_date, format_duration, format_number};
use analytics::{classify, VideoRecord};
use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct VideoListProps {
    pub videos: Rc<Vec<VideoRecord>>,
}

#[function_component(VideoList)]
pub fn video_list(props: &VideoListProps) -> Html {
    html! {
        <Section title={format!("All videos ({})", props.videos.len())}>
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4">
                {
                    for props.videos.iter().map(|video| html! {
                        <Link<Route> to={Route::Analysis { video_id: video.id.clone() }} classes="block bg-gray-50 rounded-lg p-3 hover:bg-gray-100">
                            {
                                if video.thumbnail.is_empty() {
                                    html! {}
                                } else {
                                    html! { <img src={video.thumbnail.clone()} alt="" class="w-full h-40 object-cover rounded mb-2" /> }
                                }
                            }
                            <h3 class="font-medium text-gray-800 line-clamp-2">{ &video.title }</h3>
                            <p class="text-xs text-gray-500">
                                { format!(
                                    "{} views · {} · {} · {}",
                                    format_number(video.view_count),
                                    format_duration(video.duration_seconds()),
                                    classify(video).display_name(),
                                    format_date(&video.published_at)
                                ) }
                            </p>
                        </Link<Route>>
                    })
                }
            </div>
        </Section>
    }
}
