use std::rc::Rc;

use gloo_storage::{LocalStorage, Storage};
use yew::prelude::*;

use confwatch::errors::StoreError;
use confwatch::log::warn;
use confwatch::theme::{Theme, ThemeState, ThemeStore};

use crate::providers::config::use_config;

/// Persists the theme as a bare string in `localStorage`.
pub struct BrowserStore;

impl ThemeStore for BrowserStore {
    fn load(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StoreError> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|e| StoreError::Write {
                key: key.to_string(),
                reason: format!("{e:?}"),
            })
    }
}

pub enum ThemeAction {
    Set(Theme),
    Toggle,
}

/// Theme state paired with the store every change is mirrored to.
pub struct ThemeModel<S> {
    state: ThemeState,
    store: Rc<S>,
}

impl<S: ThemeStore> ThemeModel<S> {
    pub fn load(store: Rc<S>, key: &str, default: Theme) -> Self {
        let state = ThemeState::load(store.as_ref(), key, default);
        Self { state, store }
    }

    pub fn theme(&self) -> Theme {
        self.state.theme()
    }
}

impl<S: ThemeStore> Reducible for ThemeModel<S> {
    type Action = ThemeAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut state = self.state.clone();
        let result = match action {
            ThemeAction::Set(theme) => state.set(theme, self.store.as_ref()),
            ThemeAction::Toggle => state.toggle(self.store.as_ref()).map(|_| ()),
        };
        if let Err(err) = result {
            warn!("Theme not persisted: {}", err);
        }
        Rc::new(Self {
            state,
            store: self.store.clone(),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ThemeContext {
    pub theme: Theme,
    pub set_theme: Callback<Theme>,
    pub toggle: Callback<()>,
}

#[derive(Properties, PartialEq)]
pub struct ThemeProviderProps {
    pub children: Children,
}

fn apply_root_class(theme: Theme) {
    if let Some(html) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let class_list = html.class_list();
        match theme.root_class() {
            Some(class) => {
                class_list.add_1(class).ok();
            }
            None => {
                class_list.remove_1("dark").ok();
            }
        }
    }
}

#[function_component(ThemeProvider)]
pub fn theme_provider(props: &ThemeProviderProps) -> Html {
    let config = use_config();
    let model = use_reducer(|| {
        ThemeModel::load(Rc::new(BrowserStore), config.storage_key.as_str(), config.default_theme)
    });

    // Both dispatch against the latest state, so back-to-back toggles compose.
    let set_theme = {
        let model = model.clone();
        Callback::from(move |theme: Theme| model.dispatch(ThemeAction::Set(theme)))
    };
    let toggle = {
        let model = model.clone();
        Callback::from(move |_| model.dispatch(ThemeAction::Toggle))
    };

    use_effect_with(model.theme(), |theme| apply_root_class(*theme));

    let context = ThemeContext {
        theme: model.theme(),
        set_theme,
        toggle,
    };

    html! {
        <ContextProvider<ThemeContext> context={context}>
            {props.children.clone()}
        </ContextProvider<ThemeContext>>
    }
}

#[hook]
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("use_theme must be used within a ThemeProvider")
}
