#[macro_export]
/// Allow defining an async callback that can be used in Yew components.
/// This macro simplifies the creation of async callbacks by automatically
/// handling the cloning of variables and the spawning of async tasks.
/// The expansion names `yew` and `wasm_bindgen_futures`, so the calling crate
/// must depend on both.
///
/// ## With the macro
/// The macro can be used in two forms:
///
/// 1. Without an event parameter:
/// ```compile_fail
/// let retry = async_callback!([cache, refresh] {
///     let Some(ticket) = cache.slot.borrow_mut().begin() else { return };
///     refresh.force_update();
///     if complete_load(&cache.slot, ticket, &*cache.loader, HOMEPAGE_CHUNK).await {
///         refresh.force_update();
///     }
/// });
/// ```
///
/// 2. With an event parameter, optionally typed:
/// ```compile_fail
/// let on_click = async_callback!([cache, refresh] |event: MouseEvent| {
///     event.prevent_default();
///     let Some(ticket) = cache.slot.borrow_mut().begin() else { return };
///     refresh.force_update();
///     if complete_load(&cache.slot, ticket, &*cache.loader, HOMEPAGE_CHUNK).await {
///         refresh.force_update();
///     }
/// });
/// ```
///
/// ## Without the macro
/// ```compile_fail
/// // Manual approach - verbose and error-prone
/// let cache_clone = cache.clone();
/// let refresh_clone = refresh.clone();
/// let retry = Callback::from(move |_| {
///     let cache = cache_clone.clone();
///     let refresh = refresh_clone.clone();
///     wasm_bindgen_futures::spawn_local(async move {
///         let Some(ticket) = cache.slot.borrow_mut().begin() else { return };
///         refresh.force_update();
///         if complete_load(&cache.slot, ticket, &*cache.loader, HOMEPAGE_CHUNK).await {
///             refresh.force_update();
///         }
///     });
/// });
/// ```
macro_rules! async_callback {
    // Event arms come first: a closure is itself an expression and would
    // otherwise be swallowed by the `$body:expr` arm.

    // Version with a typed event parameter
    ([$($var:ident),* $(,)?] |$event:ident : $event_ty:ty| $body:expr) => {
        {
            $(let $var = $var.clone();)*
            ::yew::Callback::from(move |$event: $event_ty| {
                $(let $var = $var.clone();)*
                ::wasm_bindgen_futures::spawn_local(async move {
                    $body
                });
            })
        }
    };

    // Version with event parameter
    ([$($var:ident),* $(,)?] |$event:ident| $body:expr) => {
        {
            $(let $var = $var.clone();)*
            ::yew::Callback::from(move |$event| {
                $(let $var = $var.clone();)*
                ::wasm_bindgen_futures::spawn_local(async move {
                    $body
                });
            })
        }
    };

    // Version without event parameter
    ([$($var:ident),* $(,)?] $body:expr) => {
        {
            $(let $var = $var.clone();)*
            ::yew::Callback::from(move |_| {
                $(let $var = $var.clone();)*
                ::wasm_bindgen_futures::spawn_local(async move {
                    $body
                });
            })
        }
    };
}
