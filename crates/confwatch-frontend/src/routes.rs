use yew::prelude::*;
use yew_router::prelude::*;

use confwatch::log::debug;
use confwatch::route::{RouteTable, Transition, View};

use crate::components::Redirector;
use crate::pages::{Homepage, NotFound};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Root,
    #[at("/v1")]
    Homepage,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// How a redirect target is written into the browser history.
#[derive(Debug, Clone, PartialEq)]
pub enum Replacement {
    /// The target is exactly a declared route's URL.
    Route(Route),
    /// Anything carrying a query, a fragment or an unrouted path goes in verbatim,
    /// so the address bar shows what was asked for.
    Raw(String),
}

impl Replacement {
    pub fn for_target(to: &str) -> Self {
        match Route::recognize(to) {
            Some(route) if route != Route::NotFound && route.to_path() == to => {
                Replacement::Route(route)
            }
            _ => Replacement::Raw(to.to_string()),
        }
    }
}

/// Runs the on-enter action `table` assigns to `route`.
pub fn switch(table: &RouteTable, route: Route) -> Html {
    let path = route.to_path();
    match table.enter(&path) {
        Transition::Replace { from, to } => {
            debug!("Entering {} replaces it with {}", from, to);
            html! { <Redirector to={to} /> }
        }
        Transition::Render(View::Homepage) => html! { <Homepage /> },
        Transition::Render(View::NotFound) => html! { <NotFound /> },
    }
}
