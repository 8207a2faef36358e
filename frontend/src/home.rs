use crate::components::ErrorMessage;
use crate::env_variable_utils::get_app_name;
use crate::router::Route;
use analytics::utils::extract_channel_id;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let channel_input = use_state(String::new);
    let error_message = use_state(|| None::<String>);
    let navigator = use_navigator();

    let on_input = {
        let channel_input = channel_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            channel_input.set(input.value());
        })
    };

    let on_submit = {
        let channel_input = channel_input.clone();
        let error_message = error_message.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if channel_input.trim().is_empty() {
                error_message.set(Some("Please enter a channel URL or ID.".to_string()));
                return;
            }

            match extract_channel_id(&channel_input) {
                Ok(channel_id) => {
                    error_message.set(None);
                    if let Some(navigator) = &navigator {
                        navigator.push(&Route::Dashboard { channel_id });
                    }
                }
                Err(e) => error_message.set(Some(e.to_string())),
            }
        })
    };

    html! {
        <div class="min-h-screen flex flex-col items-center justify-center bg-gray-700 p-4">
            <div class="bg-white p-8 rounded-lg shadow-lg w-full max-w-2xl">
                <h1 class="text-3xl font-bold text-center text-gray-800 mb-2">
                    { get_app_name() }
                </h1>
                <p class="text-center text-gray-600 mb-6">
                    {"Statistics and audience insights for any YouTube channel"}
                </p>

                <ErrorMessage error_message={(*error_message).clone()} />

                <form onsubmit={on_submit}>
                    <label class="block text-gray-700 text-sm font-bold mb-2" for="channel">
                        {"YouTube channel URL or ID"}
                    </label>
                    <input
                        id="channel"
                        type="text"
                        class="w-full p-3 border border-gray-300 rounded mb-4 focus:outline-none focus:ring-2 focus:ring-blue-500"
                        placeholder="https://www.youtube.com/@handle or UC..."
                        value={(*channel_input).clone()}
                        oninput={on_input}
                    />
                    <button
                        type="submit"
                        class="w-full bg-blue-600 text-white p-3 rounded hover:bg-blue-700"
                    >
                        {"Analyze channel"}
                    </button>
                </form>
            </div>
        </div>
    }
}
