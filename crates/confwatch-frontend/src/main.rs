mod components;
mod hooks;
mod pages;
mod providers;
mod routes;

use std::rc::Rc;

use yew::prelude::*;
use yew_router::prelude::*;

use confwatch::config::AppConfig;
use confwatch::errors::BootError;
use confwatch::log::{debug, error, info, warn};
use confwatch::nav;
use confwatch::route::RouteTable;

use providers::{ThemeProvider, ViewCacheProvider, config::read_config};
use routes::Route;

#[derive(Properties, PartialEq)]
struct AppProps {
    config: Rc<AppConfig>,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let table = use_memo(props.config.clone(), |config| RouteTable::from_config(config));
    let render = Callback::from(move |route: Route| routes::switch(&table, route));

    html! {
        <ContextProvider<Rc<AppConfig>> context={props.config.clone()}>
            <ThemeProvider>
                <ViewCacheProvider>
                    <BrowserRouter>
                        <div class="min-h-screen touch-manipulation select-none bg-white text-gray-900 dark:bg-gray-950 dark:text-gray-100">
                            <Switch<Route> render={render} />
                        </div>
                    </BrowserRouter>
                </ViewCacheProvider>
            </ThemeProvider>
        </ContextProvider<Rc<AppConfig>>>
    }
}

/// Finds the element the application renders into.
fn mount_point(id: &str) -> Result<web_sys::Element, BootError> {
    let window = web_sys::window().ok_or(BootError::NoWindow)?;
    let document = window.document().ok_or(BootError::NoDocument)?;
    document
        .get_element_by_id(id)
        .ok_or_else(|| BootError::MissingMountPoint(id.to_string()))
}

fn main() {
    confwatch::log::setup().expect("Failed to setup logging");

    let config = Rc::new(read_config());
    let root = match mount_point(&config.mount_id) {
        Ok(root) => root,
        Err(err) => {
            error!("Bootstrap aborted: {}", err);
            return;
        }
    };

    let table = RouteTable::from_config(&config);
    for link in nav::undeclared(&table) {
        warn!("Nav link {:?} points at {}, which is not routed here", link.label, link.href);
    }
    if let Some(path) = web_sys::window().and_then(|w| w.location().pathname().ok()) {
        let (landing, view) = table.settle(&path);
        debug!("Initial path {} settles on {} ({:?})", path, landing, view);
    }

    info!("Mounting confwatch into #{}", config.mount_id);
    yew::Renderer::<App>::with_root_and_props(root, AppProps { config }).render();
}
