use yew::prelude::*;

use confwatch::async_callback;
use confwatch::loader::{LoadState, complete_load};

use crate::providers::views::use_view_cache;

/// Loads `chunk` the first time a component using this hook mounts.
///
/// Returns the current load state and a callback that retries a failed load.
/// A chunk that is already ready is served from the view cache.
#[hook]
pub fn use_lazy_view(chunk: &'static str) -> (LoadState<String>, Callback<MouseEvent>) {
    let cache = use_view_cache();
    let refresh = use_force_update();

    {
        let cache = cache.clone();
        let refresh = refresh.clone();
        use_effect_with(chunk, move |chunk| {
            let chunk = *chunk;
            let ticket = cache.slot.borrow_mut().begin();
            if let Some(ticket) = ticket {
                refresh.force_update();
                wasm_bindgen_futures::spawn_local(async move {
                    if complete_load(&cache.slot, ticket, &*cache.loader, chunk).await {
                        refresh.force_update();
                    }
                });
            }
        });
    }

    let retry = async_callback!([cache, refresh] |_event: MouseEvent| {
        let Some(ticket) = cache.slot.borrow_mut().begin() else {
            return;
        };
        refresh.force_update();
        if complete_load(&cache.slot, ticket, &*cache.loader, chunk).await {
            refresh.force_update();
        }
    });

    let state = cache.slot.borrow().state().clone();
    (state, retry)
}
