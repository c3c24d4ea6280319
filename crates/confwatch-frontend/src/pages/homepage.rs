use yew::prelude::*;

use confwatch::loader::{HOMEPAGE_CHUNK, LoadState};

use crate::components::NavBar;
use crate::hooks::use_lazy_view;

#[function_component(Homepage)]
pub fn homepage() -> Html {
    let (state, retry) = use_lazy_view(HOMEPAGE_CHUNK);

    let body = match state {
        LoadState::Idle | LoadState::Pending => html! {
            <div class="flex items-center justify-center py-12">
                <div class="flex items-center space-x-2">
                    <svg class="animate-spin h-6 w-6 text-blue-600" xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24">
                        <circle class="opacity-25" cx="12" cy="12" r="10" stroke="currentColor" stroke-width="4"></circle>
                        <path class="opacity-75" fill="currentColor" d="M4 12a8 8 0 018-8V0C5.373 0 0 5.373 0 12h4zm2 5.291A7.962 7.962 0 014 12H0c0 3.042 1.135 5.824 3 7.938l3-2.647z"></path>
                    </svg>
                    <span class="text-gray-600 dark:text-gray-400">{ "Loading conferences..." }</span>
                </div>
            </div>
        },
        LoadState::Ready(markup) => Html::from_html_unchecked(AttrValue::from(markup)),
        LoadState::Failed(err) => html! {
            <div class="bg-red-50 dark:bg-red-950 border border-red-200 dark:border-red-800 rounded-lg p-6">
                <h2 class="text-lg font-medium text-red-800 dark:text-red-200 mb-2">{ "Couldn't load this page" }</h2>
                <p class="text-red-700 dark:text-red-300 mb-4">{ err.to_string() }</p>
                <button
                    class="px-4 py-2 bg-red-600 text-white rounded-md hover:bg-red-700 focus:outline-none focus:ring-2 focus:ring-red-500"
                    onclick={retry}
                >
                    { "Retry" }
                </button>
            </div>
        },
    };

    html! {
        <>
            <NavBar />
            <main class="container mx-auto px-4 py-8">
                { body }
            </main>
        </>
    }
}
