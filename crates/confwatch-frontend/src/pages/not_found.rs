use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::NavBar;
use crate::routes::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    let path = use_location()
        .map(|location| location.path().to_string())
        .unwrap_or_default();

    html! {
        <>
            <NavBar />
            <main class="container mx-auto px-4 py-16 text-center">
                <h1 class="text-3xl font-bold text-gray-900 dark:text-gray-100 mb-2">{ "404 Not Found" }</h1>
                <p class="text-gray-600 dark:text-gray-400 mb-6">
                    { "Nothing lives at " }<code class="font-mono">{ path }</code>
                </p>
                <Link<Route> to={Route::Homepage} classes="text-blue-600 hover:underline">
                    { "Back to the conference tracker" }
                </Link<Route>>
            </main>
        </>
    }
}
