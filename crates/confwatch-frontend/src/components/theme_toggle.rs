use yew::prelude::*;

use confwatch::theme::IconState;

use crate::providers::theme::use_theme;

#[derive(Properties, PartialEq)]
pub struct ThemeToggleProps {
    /// Fired on click; the owner decides how the shared theme changes.
    pub on_toggle: Callback<()>,
}

/// Sun/moon button reflecting the shared theme. Each instance shows exactly
/// one of the two icons.
#[function_component(ThemeToggle)]
pub fn theme_toggle(props: &ThemeToggleProps) -> Html {
    let theme = use_theme();
    let icons = IconState::for_theme(theme.theme);

    let onclick = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |_: MouseEvent| on_toggle.emit(()))
    };

    html! {
        <button
            type="button"
            class="relative inline-flex h-9 w-9 items-center justify-center rounded-md hover:bg-gray-100 dark:hover:bg-gray-800 focus:outline-none focus:ring-2 focus:ring-blue-500"
            aria-label={format!("Switch to {} theme", theme.theme.toggled())}
            data-theme={theme.theme.as_str()}
            {onclick}
        >
            <svg
                class={classes!("h-5", "w-5", "transition-all", icons.sun.split(' ').collect::<Vec<_>>())}
                aria-hidden={(!icons.sun_visible()).to_string()}
                fill="none" stroke="currentColor" stroke-width="2" viewBox="0 0 24 24"
            >
                <circle cx="12" cy="12" r="4" />
                <path stroke-linecap="round" d="M12 2v2m0 16v2M4.93 4.93l1.41 1.41m11.32 11.32 1.41 1.41M2 12h2m16 0h2M4.93 19.07l1.41-1.41M17.66 6.34l1.41-1.41" />
            </svg>
            <svg
                class={classes!("absolute", "h-5", "w-5", "transition-all", icons.moon.split(' ').collect::<Vec<_>>())}
                aria-hidden={(!icons.moon_visible()).to_string()}
                fill="none" stroke="currentColor" stroke-width="2" viewBox="0 0 24 24"
            >
                <path stroke-linecap="round" stroke-linejoin="round" d="M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z" />
            </svg>
        </button>
    }
}
