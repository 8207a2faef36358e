use crate::api::{get_video_analysis, get_video_comments, handle_error};
use crate::components::{ErrorMessage, Loading, Section};
use crate::router::Route;
use crate::utils::format_date;
use analytics::{CommentAnalysis, CommentRecord, Sentiment};
use futures_util::future::join;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, PartialEq)]
enum AnalysisState {
    Loading,
    Failed(String),
    Ready {
        analysis: Rc<CommentAnalysis>,
        comments: Option<Rc<Vec<CommentRecord>>>,
    },
}

#[derive(Properties, PartialEq)]
pub struct AnalysisPageProps {
    pub video_id: String,
}

#[function_component(AnalysisPage)]
pub fn analysis_page(props: &AnalysisPageProps) -> Html {
    let state = use_state(|| AnalysisState::Loading);
    let attempt = use_state(|| 0u32);
    let generation = use_mut_ref(|| 0u32);
    let navigator = use_navigator();

    {
        let state = state.clone();
        use_effect_with((props.video_id.clone(), *attempt), move |(video_id, _)| {
            let request_id = {
                let mut current = generation.borrow_mut();
                *current += 1;
                *current
            };
            state.set(AnalysisState::Loading);

            let video_id = video_id.clone();
            spawn_local(async move {
                let (analysis, comments) =
                    join(get_video_analysis(&video_id), get_video_comments(&video_id)).await;
                if *generation.borrow() != request_id {
                    log::debug!("Discarding stale analysis for {video_id}");
                    return;
                }

                // The comment list is optional; the analysis is what the page is for.
                let comments = match comments {
                    Ok(comments) => Some(Rc::new(comments)),
                    Err(e) => {
                        handle_error("Could not load comments", &e);
                        None
                    }
                };
                match analysis {
                    Ok(analysis) => state.set(AnalysisState::Ready {
                        analysis: Rc::new(analysis),
                        comments,
                    }),
                    Err(e) => {
                        let message = handle_error("Comment analysis failed", &e);
                        state.set(AnalysisState::Failed(message));
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

    let on_back = Callback::from(move |_: MouseEvent| {
        if let Some(navigator) = &navigator {
            navigator.back();
        }
    });

    let body = match &*state {
        AnalysisState::Loading => html! { <Loading label="Analyzing comments..." /> },
        AnalysisState::Failed(message) => html! {
            <ErrorMessage error_message={Some(message.clone())} on_retry={Some(on_retry)} />
        },
        AnalysisState::Ready { analysis, comments } => html! {
            <>
                <KeywordSummary analysis={analysis.clone()} />
                <SentimentSummary sentiment={analysis.sentiment.clone()} />
                <CategoryAndFeedback analysis={analysis.clone()} />
                {
                    if let Some(comments) = comments {
                        html! { <CommentList comments={comments.clone()} /> }
                    } else {
                        html! {}
                    }
                }
            </>
        },
    };

    html! {
        <div class="min-h-screen bg-gray-700 p-4">
            <div class="max-w-4xl mx-auto">
                <div class="flex justify-between items-center mb-6">
                    <h1 class="text-3xl font-bold text-white">{"Comment Analysis"}</h1>
                    <div class="flex gap-4">
                        <button onclick={on_back} class="text-blue-200 hover:underline">
                            {"← Back to dashboard"}
                        </button>
                        <Link<Route> to={Route::Home} classes="text-blue-200 hover:underline">
                            {"Home"}
                        </Link<Route>>
                    </div>
                </div>
                { body }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct AnalysisProps {
    analysis: Rc<CommentAnalysis>,
}

#[function_component(KeywordSummary)]
fn keyword_summary(props: &AnalysisProps) -> Html {
    html! {
        <Section title="Keywords">
            {
                if props.analysis.keywords.is_empty() {
                    html! { <p class="text-gray-500">{"No keywords found."}</p> }
                } else {
                    html! {
                        <div class="flex flex-wrap gap-2">
                            {
                                for props.analysis.keywords.iter().map(|keyword| html! {
                                    <span
                                        class="bg-blue-100 text-blue-800 px-3 py-1 rounded-full text-sm"
                                        title={keyword.examples.join("\n")}
                                    >
                                        { format!("{} ({}x)", keyword.word, keyword.count) }
                                    </span>
                                })
                            }
                        </div>
                    }
                }
            }
        </Section>
    }
}

#[derive(Properties, PartialEq)]
struct SentimentProps {
    sentiment: Sentiment,
}

fn share(part: f64, total: f64) -> f64 {
    if total <= 0.0 {
        0.0
    } else {
        part / total * 100.0
    }
}

#[function_component(SentimentSummary)]
fn sentiment_summary(props: &SentimentProps) -> Html {
    let sentiment = &props.sentiment;
    let total = sentiment.positive + sentiment.negative + sentiment.neutral;
    let parts = [
        ("Positive", sentiment.positive, "bg-green-500", &sentiment.examples.positive),
        ("Negative", sentiment.negative, "bg-red-500", &sentiment.examples.negative),
        ("Neutral", sentiment.neutral, "bg-yellow-400", &sentiment.examples.neutral),
    ];

    html! {
        <Section title="Sentiment">
            <div class="flex h-6 rounded overflow-hidden mb-4">
                {
                    for parts.iter().map(|(name, value, color, _)| html! {
                        <div
                            class={*color}
                            style={format!("width: {:.1}%", share(*value, total))}
                            title={format!("{name}: {:.1}%", share(*value, total))}
                        ></div>
                    })
                }
            </div>
            <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                {
                    for parts.iter().map(|(name, value, _, examples)| html! {
                        <div>
                            <h3 class="font-semibold text-gray-700">{ format!("{name} ({:.1}%)", share(*value, total)) }</h3>
                            <ul class="text-sm text-gray-600 list-disc ml-5">
                                { for examples.iter().map(|example| html! { <li>{ example }</li> }) }
                            </ul>
                        </div>
                    })
                }
            </div>
        </Section>
    }
}

#[function_component(CategoryAndFeedback)]
fn category_and_feedback(props: &AnalysisProps) -> Html {
    let analysis = &props.analysis;

    html! {
        <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
            <Section title="Categories">
                <ul class="space-y-3">
                    {
                        for analysis.categories.iter().map(|category| html! {
                            <li>
                                <h3 class="font-semibold text-gray-800">{ &category.name }</h3>
                                <ul class="text-sm text-gray-600 list-disc ml-5">
                                    { for category.examples.iter().map(|example| html! { <li>{ example }</li> }) }
                                </ul>
                            </li>
                        })
                    }
                </ul>
            </Section>
            <Section title="Feedback">
                <ul class="space-y-3">
                    {
                        for analysis.feedback.iter().map(|feedback| html! {
                            <li>
                                <span class="text-xs uppercase bg-gray-200 text-gray-700 px-2 py-0.5 rounded mr-2">{ &feedback.kind }</span>
                                <span class="text-gray-800">{ &feedback.content }</span>
                                <ul class="text-sm text-gray-600 list-disc ml-5">
                                    { for feedback.examples.iter().map(|example| html! { <li>{ example }</li> }) }
                                </ul>
                            </li>
                        })
                    }
                </ul>
            </Section>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct CommentListProps {
    comments: Rc<Vec<CommentRecord>>,
}

#[function_component(CommentList)]
fn comment_list(props: &CommentListProps) -> Html {
    html! {
        <Section title={format!("Comments ({})", props.comments.len())}>
            <ul class="space-y-3">
                {
                    for props.comments.iter().map(|comment| html! {
                        <li class="border-b pb-2">
                            <div class="flex justify-between text-xs text-gray-500">
                                <span class="font-medium text-gray-700">{ &comment.author }</span>
                                <span>{ format!("{} · {} likes", format_date(&comment.published_at), comment.like_count) }</span>
                            </div>
                            <p class="text-gray-800">{ &comment.text }</p>
                        </li>
                    })
                }
            </ul>
        </Section>
    }
}
