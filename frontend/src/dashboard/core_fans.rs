use crate::api::{get_channel_comments, handle_error};
use crate::components::{ErrorMessage, Loading, Modal, NarrativeCard, Section};
use crate::utils::format_date;
use analytics::fans::MIN_FAN_COMMENTS;
use analytics::{narrative, rank_core_fans, FanProfile, FanRanking};
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Clone, PartialEq)]
enum FansState {
    Loading,
    Failed(String),
    Ready(Rc<FanRanking>),
}

#[derive(Properties, PartialEq)]
pub struct CoreFansProps {
    /// Reference used for the comments request
    pub channel_id: String,
    /// Resolved channel id and title, used to leave out the owner's replies
    pub owner_id: String,
    pub owner_title: String,
}

#[function_component(CoreFans)]
pub fn core_fans(props: &CoreFansProps) -> Html {
    let state = use_state(|| FansState::Loading);
    let selected = use_state(|| None::<usize>);
    let attempt = use_state(|| 0u32);
    let generation = use_mut_ref(|| 0u32);

    {
        let state = state.clone();
        let selected = selected.clone();
        let deps = (
            props.channel_id.clone(),
            props.owner_id.clone(),
            props.owner_title.clone(),
            *attempt,
        );
        use_effect_with(deps, move |(channel_id, owner_id, owner_title, _)| {
            let request_id = {
                let mut current = generation.borrow_mut();
                *current += 1;
                *current
            };
            state.set(FansState::Loading);
            selected.set(None);

            let channel_id = channel_id.clone();
            let owner_id = owner_id.clone();
            let owner_title = owner_title.clone();
            spawn_local(async move {
                let result = get_channel_comments(&channel_id).await;
                if *generation.borrow() != request_id {
                    log::debug!("Discarding stale comments for {channel_id}");
                    return;
                }
                match result {
                    Ok(comments) => {
                        let ranking = rank_core_fans(&comments, &owner_title, &owner_id);
                        state.set(FansState::Ready(Rc::new(ranking)));
                    }
                    Err(e) => {
                        let message = handle_error("Could not load channel comments", &e);
                        state.set(FansState::Failed(message));
                    }
                }
            });
            || ()
        });
    }

    let on_retry = {
        let attempt = attempt.clone();
        Callback::from(move |_: MouseEvent| attempt.set(*attempt + 1))
    };

    let body = match &*state {
        FansState::Loading => html! { <Loading label="Loading comments..." /> },
        FansState::Failed(message) => html! {
            <ErrorMessage error_message={Some(message.clone())} on_retry={Some(on_retry)} />
        },
        FansState::Ready(ranking) if ranking.fans.is_empty() => html! {
            <p class="text-gray-500">
                { format!("No commenter has {MIN_FAN_COMMENTS} or more comments yet.") }
            </p>
        },
        FansState::Ready(ranking) => {
            let modal = (*selected)
                .and_then(|index| ranking.fans.get(index))
                .map(|fan| {
                    let selected = selected.clone();
                    let on_close = Callback::from(move |_: MouseEvent| selected.set(None));
                    html! { <FanHistory fan={fan.clone()} {on_close} /> }
                })
                .unwrap_or_default();

            html! {
                <>
                    <NarrativeCard request={narrative::core_fans(&ranking.fans)} />
                    <p class="text-xs text-gray-500 mb-4">
                        { format!(
                            "{} comments analysed, {} replies by the channel left out.",
                            ranking.total_comments, ranking.own_comments
                        ) }
                    </p>
                    <div class="overflow-x-auto">
                        <table class="w-full text-sm">
                            <thead>
                                <tr class="text-left text-gray-500">
                                    <th>{"#"}</th>
                                    <th>{"Fan"}</th>
                                    <th>{"Comments"}</th>
                                    <th>{"Likes"}</th>
                                    <th>{"Videos"}</th>
                                    <th>{"Participation"}</th>
                                    <th>{"Active days"}</th>
                                    <th>{"Last comment"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                {
                                    for ranking.fans.iter().enumerate().map(|(index, fan)| {
                                        let selected = selected.clone();
                                        let onclick = Callback::from(move |_: MouseEvent| selected.set(Some(index)));
                                        html! {
                                            <tr class="border-t hover:bg-gray-50 cursor-pointer" {onclick}>
                                                <td class="py-2">{ index + 1 }</td>
                                                <td class="font-medium text-gray-800">{ &fan.author }</td>
                                                <td>{ fan.comment_count }</td>
                                                <td>{ fan.total_likes }</td>
                                                <td>{ fan.unique_videos }</td>
                                                <td>{ format!("{:.1}%", fan.engagement_rate * 100.0) }</td>
                                                <td>{ fan.active_days() }</td>
                                                <td class="text-gray-600">{ fan.last_comment_preview() }</td>
                                            </tr>
                                        }
                                    })
                                }
                            </tbody>
                        </table>
                    </div>
                    { modal }
                </>
            }
        }
    };

    html! {
        <Section title="Core fans">
            { body }
        </Section>
    }
}

#[derive(Properties, PartialEq)]
struct FanHistoryProps {
    fan: FanProfile,
    on_close: Callback<MouseEvent>,
}

/// Every comment of one fan, newest first.
#[function_component(FanHistory)]
fn fan_history(props: &FanHistoryProps) -> Html {
    let fan = &props.fan;

    html! {
        <Modal title={format!("Comments by {}", fan.author)} on_close={props.on_close.clone()}>
            <p class="text-sm text-gray-500 mb-4">
                { format!(
                    "{} comments on {} videos between {} and {}",
                    fan.comment_count,
                    fan.unique_videos,
                    format_date(&fan.first_activity),
                    format_date(&fan.last_activity)
                ) }
            </p>
            <ul class="space-y-3">
                {
                    for fan.comments_newest_first().into_iter().map(|comment| html! {
                        <li class="border-b pb-2">
                            <p class="text-xs text-gray-500">
                                { format!("{} · {} · {} likes", format_date(&comment.published_at), comment.video_title, comment.like_count) }
                            </p>
                            <p class="text-gray-800">{ &comment.text }</p>
                        </li>
                    })
                }
            </ul>
        </Modal>
    }
}
