//! Row action menus with component-local open state.

use crate::shared::icons::icon;
use leptos::ev;
use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Runs `on_outside` for every click whose target is not inside `target`.
pub fn use_click_outside<F>(target: NodeRef<html::Div>, on_outside: F)
where
    F: Fn() + 'static,
{
    let handle = window_event_listener(ev::click, move |event| {
        let Some(container) = target.get_untracked() else {
            return;
        };
        let clicked = event
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Node>().ok());
        if !container.contains(clicked.as_ref()) {
            on_outside();
        }
    });
    on_cleanup(move || handle.remove());
}

/// Kebab button with a dropdown; closes on outside click or after an item
/// was chosen.
#[component]
pub fn ActionMenu(children: ChildrenFn) -> impl IntoView {
    let open = RwSignal::new(false);
    let container = NodeRef::<html::Div>::new();
    use_click_outside(container, move || open.set(false));

    view! {
        <div class="action-menu" node_ref=container>
            <button
                class="button button--icon"
                title="Actions"
                on:click=move |_| open.update(|o| *o = !*o)
            >
                {icon("more-vertical")}
            </button>
            <Show when=move || open.get()>
                <div class="action-menu__dropdown" on:click=move |_| open.set(false)>
                    {children()}
                </div>
            </Show>
        </div>
    }
}

#[component]
pub fn ActionMenuItem(
    #[prop(into)] label: String,
    on_select: Callback<()>,
    #[prop(optional)] danger: bool,
) -> impl IntoView {
    view! {
        <button
            class="action-menu__item"
            class:action-menu__item--danger=danger
            on:click=move |_| on_select.run(())
        >
            {label}
        </button>
    }
}
