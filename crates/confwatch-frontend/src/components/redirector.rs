use yew::prelude::*;
use yew_router::history::{BrowserHistory, History};
use yew_router::prelude::*;

use confwatch::log::info;

use crate::routes::Replacement;

#[derive(Properties, PartialEq)]
pub struct RedirectorProps {
    pub to: AttrValue,
}

/// Renders nothing and replaces the current history entry with `to` once
/// the first render has committed. Unmounting before then navigates nowhere.
#[function_component(Redirector)]
pub fn redirector(props: &RedirectorProps) -> Html {
    let navigator = use_navigator();

    use_effect_with(props.to.clone(), move |to| {
        info!("Redirecting to {}", to);
        match (Replacement::for_target(to), navigator) {
            (Replacement::Route(route), Some(navigator)) => navigator.replace(&route),
            // `BrowserHistory::new` hands out the instance `BrowserRouter` listens on.
            _ => BrowserHistory::new().replace(to.to_string()),
        }
    });

    html! {}
}
