use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SheetProps {
    pub open: bool,
    /// Fired when the backdrop is clicked.
    pub on_close: Callback<()>,
    pub children: Children,
}

/// Slide-in panel from the right edge used for the mobile menu.
#[function_component(Sheet)]
pub fn sheet(props: &SheetProps) -> Html {
    let on_backdrop = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let panel_classes = classes!(
        "fixed", "inset-y-0", "right-0", "z-50", "flex", "h-full", "w-3/4", "max-w-sm",
        "flex-col", "gap-6", "border-l", "border-gray-200", "dark:border-gray-700",
        "bg-white", "dark:bg-gray-900", "p-6", "shadow-lg", "transition-transform",
        "duration-300",
        if props.open { "translate-x-0" } else { "translate-x-full" }
    );

    html! {
        <>
            if props.open {
                <div class="fixed inset-0 z-40 bg-black/60" onclick={on_backdrop}></div>
            }
            <aside
                class={panel_classes}
                role="dialog"
                aria-modal="true"
                aria-hidden={(!props.open).to_string()}
            >
                {props.children.clone()}
            </aside>
        </>
    }
}
