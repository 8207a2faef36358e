use crate::analysis::AnalysisPage;
use crate::dashboard::DashboardPage;
use crate::home::HomePage;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/dashboard/:channel_id")]
    Dashboard { channel_id: String },
    #[at("/analysis/:video_id")]
    Analysis { video_id: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <HomePage /> },
        Route::Dashboard { channel_id } => html! { <DashboardPage {channel_id} /> },
        Route::Analysis { video_id } => html! { <AnalysisPage {video_id} /> },
        Route::NotFound => html! {
            <div class="min-h-screen flex items-center justify-center bg-gray-700">
                <div class="bg-white p-8 rounded-lg shadow-lg text-center">
                    <h1 class="text-2xl font-bold text-gray-800 mb-4">{"404 - Page Not Found"}</h1>
                    <Link<Route> to={Route::Home} classes="text-blue-600 hover:underline">
                        {"Go back to channel search"}
                    </Link<Route>>
                </div>
            </div>
        },
    }
}
