//! Row selection checkbox
//!
//! Rows excluded from bulk actions render a disabled box.

use leptos::prelude::*;
use thaw::*;

#[component]
pub fn TableCellCheckbox(
    #[prop(into)]
    checked: Signal<bool>,

    /// `false` for rows the resource excludes from bulk selection
    selectable: bool,

    on_change: Callback<bool>,
) -> impl IntoView {
    view! {
        <TableCell class="fixed-checkbox-column" on:click=|e| e.stop_propagation()>
            <input
                type="checkbox"
                class="table__checkbox"
                disabled=!selectable
                prop:checked=move || checked.get()
                on:change=move |ev| {
                    on_change.run(event_target_checked(&ev));
                }
            />
        </TableCell>
    }
}
