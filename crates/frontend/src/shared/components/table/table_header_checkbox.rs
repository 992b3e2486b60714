//! "Select all" checkbox in the table header
//!
//! The tri-state comes from the list's selection; clicking always delegates to
//! the idempotent toggle, so two clicks return to an empty selection.

use contracts::shared::selection::CheckState;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen::JsCast;

/// Bare checkbox with an indeterminate state, also used by category rows.
#[component]
pub fn TriStateCheckbox(
    #[prop(into)]
    state: Signal<CheckState>,

    #[prop(into, optional)]
    disabled: Signal<bool>,

    on_toggle: Callback<()>,
) -> impl IntoView {
    let checkbox_ref = NodeRef::<leptos::html::Input>::new();

    // `indeterminate` is a DOM property only
    Effect::new(move |_| {
        if let Some(input) = checkbox_ref.get() {
            let state = state.get();
            if let Some(input_el) = input.dyn_ref::<web_sys::HtmlInputElement>() {
                input_el.set_indeterminate(state == CheckState::Indeterminate);
            }
        }
    });

    view! {
        <input
            node_ref=checkbox_ref
            type="checkbox"
            class="table__checkbox"
            prop:checked=move || state.get() == CheckState::Checked
            disabled=move || disabled.get()
            on:click=|e| e.stop_propagation()
            on:change=move |_| on_toggle.run(())
        />
    }
}

#[component]
pub fn TableHeaderCheckbox(
    /// Checked / unchecked / indeterminate
    #[prop(into)]
    state: Signal<CheckState>,

    /// Disabled when nothing on the page is selectable
    #[prop(into, optional)]
    disabled: Signal<bool>,

    on_toggle: Callback<()>,
) -> impl IntoView {
    view! {
        <TableHeaderCell resizable=false class="fixed-checkbox-column">
            <TriStateCheckbox state=state disabled=disabled on_toggle=on_toggle />
        </TableHeaderCell>
    }
}
