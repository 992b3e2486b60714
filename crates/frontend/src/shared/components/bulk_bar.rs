use crate::shared::resource_list::ResourceList;
use contracts::domain::common::AdminResource;
use contracts::shared::mutation::BulkAction;
use leptos::prelude::*;
use thaw::*;

/// Bar above the table shown while rows are selected.
#[component]
pub fn BulkBar<R: AdminResource>(list: ResourceList<R>, actions: Vec<BulkAction>) -> impl IntoView {
    let selected = Signal::derive(move || list.core.with(|c| c.selection().len()));

    view! {
        <Show when=move || (R::SUPPORTS_BULK && selected.get() > 0)>
            <div class="bulk-bar">
                <span class="bulk-bar__count">{move || format!("{} selected", selected.get())}</span>
                {actions.iter().copied().map(|action| {
                    view! {
                        <Button
                            appearance=ButtonAppearance::Secondary
                            size=ButtonSize::Small
                            on_click=move |_| list.bulk(action)
                        >
                            {action.label()}
                        </Button>
                    }
                }).collect_view()}
                <Button
                    appearance=ButtonAppearance::Transparent
                    size=ButtonSize::Small
                    on_click=move |_| list.clear_selection()
                >
                    "Clear"
                </Button>
            </div>
        </Show>
    }
}
