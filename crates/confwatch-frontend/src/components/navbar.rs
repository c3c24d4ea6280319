use yew::prelude::*;

use confwatch::log::debug;
use confwatch::nav::{self, BRAND, Layout, NavAction, NavLink, NavState};

use crate::components::{Sheet, ThemeToggle};
use crate::hooks::use_layout;
use crate::providers::theme::use_theme;

const LINK_CLASSES: &str = "text-sm font-medium text-gray-600 hover:text-gray-900 dark:text-gray-300 dark:hover:text-white transition-colors";

fn nav_link(link: &NavLink, onclick: Option<Callback<MouseEvent>>) -> Html {
    html! {
        <a href={link.href} class={LINK_CLASSES} {onclick}>{ link.label }</a>
    }
}

/// Top bar rendered by every page. Owns the mobile menu state; the theme
/// lives in the [`ThemeProvider`](crate::providers::ThemeProvider).
#[function_component(NavBar)]
pub fn navbar() -> Html {
    let theme = use_theme();
    let layout = use_layout();
    let menu = use_state(NavState::default);

    let dispatch = {
        let menu = menu.clone();
        let toggle_theme = theme.toggle.clone();
        Callback::from(move |action: NavAction| {
            let outcome = menu.apply(action);
            debug!("Nav {:?} -> {:?}", action, outcome);
            if outcome.flip_theme {
                toggle_theme.emit(());
            }
            menu.set(NavState {
                menu_open: outcome.menu_open,
            });
        })
    };

    let brand = html! {
        <a href={BRAND.href} class="flex items-center gap-2 text-lg font-bold text-gray-900 dark:text-gray-100">
            <span class="inline-block h-6 w-6 rounded-full bg-gradient-to-br from-blue-500 to-purple-600"></span>
            <span>{ BRAND.label }</span>
        </a>
    };

    let controls = match layout {
        Layout::Inline => html! {
            <div class="flex items-center gap-6">
                { for nav::links().iter().filter(|l| l.inline()).map(|l| nav_link(l, None)) }
                // <a href="/motivation" class={LINK_CLASSES}>{ "Why We Track Conferences" }</a>
                <ThemeToggle on_toggle={dispatch.reform(|_: ()| NavAction::ToggleTheme { in_sheet: false })} />
            </div>
        },
        Layout::Sheet => {
            let follow = dispatch.reform(|_: MouseEvent| NavAction::FollowLink);
            html! {
                <>
                    <button
                        type="button"
                        class="inline-flex h-9 w-9 items-center justify-center rounded-md hover:bg-gray-100 dark:hover:bg-gray-800"
                        aria-label="Toggle menu"
                        aria-expanded={menu.menu_open.to_string()}
                        onclick={dispatch.reform(|_: MouseEvent| NavAction::TriggerMenu)}
                    >
                        <svg class="h-5 w-5" fill="none" stroke="currentColor" stroke-width="2" viewBox="0 0 24 24">
                            <path stroke-linecap="round" d="M4 6h16M4 12h16M4 18h16" />
                        </svg>
                    </button>
                    <Sheet
                        open={layout.shows_sheet(menu.menu_open)}
                        on_close={dispatch.reform(|_: ()| NavAction::Close)}
                    >
                        <ThemeToggle on_toggle={dispatch.reform(|_: ()| NavAction::ToggleTheme { in_sheet: true })} />
                        <nav class="flex flex-col gap-4">
                            { for nav::links().iter().filter(|l| l.in_sheet()).map(|l| nav_link(l, Some(follow.clone()))) }
                        </nav>
                    </Sheet>
                </>
            }
        }
    };

    html! {
        <header class="sticky top-0 z-30 w-full border-b border-gray-200 dark:border-gray-700 bg-white/95 dark:bg-gray-900/95 backdrop-blur">
            <nav class="container mx-auto flex h-14 items-center justify-between px-4">
                { brand }
                { controls }
            </nav>
        </header>
    }
}
