use gloo_events::EventListener;
use yew::prelude::*;

use confwatch::config::AppConfig;
use confwatch::log::debug;
use confwatch::nav::Layout;

use crate::providers::config::use_config;

fn current_layout(config: &AppConfig) -> Layout {
    let Some(window) = web_sys::window() else {
        return Layout::default();
    };
    match window.match_media(&config.wide_media_query()) {
        Ok(Some(query)) => Layout::from_wide_match(query.matches()),
        _ => window
            .inner_width()
            .ok()
            .and_then(|w| w.as_f64())
            .map(|width| Layout::for_width(width, config.breakpoint_px))
            .unwrap_or_default(),
    }
}

/// Tracks which side of the navigation breakpoint the viewport is on.
#[hook]
pub fn use_layout() -> Layout {
    let config = use_config();
    let layout = use_state(|| current_layout(&config));

    {
        let layout = layout.clone();
        use_effect_with(config.wide_media_query(), move |query| {
            let listener = web_sys::window()
                .and_then(|w| w.match_media(query).ok().flatten())
                .map(|media| {
                    let target = media.clone();
                    EventListener::new(&media, "change", move |_| {
                        let next = Layout::from_wide_match(target.matches());
                        debug!("Viewport layout changed to {:?}", next);
                        layout.set(next);
                    })
                });

            move || drop(listener)
        });
    }

    *layout
}
