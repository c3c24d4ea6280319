use std::cell::RefCell;
use std::rc::Rc;

use yew::prelude::*;

use confwatch::loader::{HttpViewLoader, LazySlot, ViewLoader};

use crate::providers::config::use_config;

/// Holds the lazily loaded homepage chunk for the lifetime of the page, so
/// leaving and re-entering the route does not fetch it again.
#[derive(Clone)]
pub struct ViewCache {
    pub slot: Rc<RefCell<LazySlot<String>>>,
    pub loader: Rc<dyn ViewLoader>,
}

impl ViewCache {
    pub fn new(loader: impl ViewLoader + 'static) -> Self {
        Self {
            slot: Rc::new(RefCell::new(LazySlot::new())),
            loader: Rc::new(loader),
        }
    }
}

impl PartialEq for ViewCache {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.slot, &other.slot)
    }
}

#[derive(Properties, PartialEq)]
pub struct ViewCacheProviderProps {
    pub children: Children,
}

#[function_component(ViewCacheProvider)]
pub fn view_cache_provider(props: &ViewCacheProviderProps) -> Html {
    let config = use_config();
    let cache = use_memo(config.chunk_base.clone(), |base| {
        ViewCache::new(HttpViewLoader::new(base.as_str()))
    });

    html! {
        <ContextProvider<ViewCache> context={(*cache).clone()}>
            {props.children.clone()}
        </ContextProvider<ViewCache>>
    }
}

#[hook]
pub fn use_view_cache() -> ViewCache {
    use_context::<ViewCache>().expect("use_view_cache must be used within a ViewCacheProvider")
}
