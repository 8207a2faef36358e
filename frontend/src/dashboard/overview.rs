use crate::components::StatCard;
use crate::utils::{format_date, format_number};
use analytics::ChannelInfo;
use chrono::{DateTime, Utc};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ChannelOverviewProps {
    pub channel: ChannelInfo,
    pub loaded_at: DateTime<Utc>,
}

#[function_component(ChannelOverview)]
pub fn channel_overview(props: &ChannelOverviewProps) -> Html {
    let channel = &props.channel;

    html! {
        <div class="bg-white rounded-lg shadow-lg p-6 mb-6">
            <div class="flex items-center mb-4">
                {
                    if channel.thumbnail.is_empty() {
                        html! {}
                    } else {
                        html! { <img src={channel.thumbnail.clone()} alt={channel.title.clone()} class="w-16 h-16 rounded-full mr-4" /> }
                    }
                }
                <div>
                    <h2 class="text-2xl font-bold text-gray-800">{ &channel.title }</h2>
                    {
                        if channel.custom_url.is_empty() {
                            html! {}
                        } else {
                            html! { <p class="text-gray-500">{ &channel.custom_url }</p> }
                        }
                    }
                </div>
            </div>
            <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                <StatCard title="Subscribers" value={format_number(channel.subscriber_count)} />
                <StatCard title="Total views" value={format_number(channel.view_count)} value_class="text-green-600" />
                <StatCard title="Videos" value={format_number(channel.video_count)} value_class="text-purple-600" />
            </div>
            <p class="text-xs text-gray-400 mt-4 text-right">
                { format!("Last updated {}", props.loaded_at.format("%Y-%m-%d %H:%M UTC")) }
                { format!(" · channel since {}", format_date(&channel.published_at)) }
            </p>
        </div>
    }
}
