//! Services table grouped by category.
//!
//! Each category gets a header row with a collapse toggle and a "select all
//! within category" checkbox that leaves other categories untouched.

use crate::shared::components::resource_table::ListPlaceholder;
use crate::shared::components::table::{
    format_count, format_percent, format_usd, TableCellCheckbox, TableHeaderCheckbox,
    TriStateCheckbox,
};
use crate::shared::components::ui::StatusBadge;
use crate::shared::icons::icon;
use crate::shared::resource_list::ResourceList;
use contracts::domain::a006_service::Service;
use contracts::domain::common::AdminResource;
use contracts::shared::grouping::{group_by_category, CollapsedCategories};
use leptos::prelude::*;
use thaw::*;

const COLUMN_COUNT: usize = 8;

fn service_row(
    list: ResourceList<Service>,
    item: Service,
    on_view: Callback<Service>,
    row_actions: Callback<Service, AnyView>,
) -> impl IntoView {
    let core = list.core;
    let id = item.id.clone();
    let id_for_checked = id.clone();
    let selectable = item.is_selectable();
    let actions = row_actions.run(item.clone());
    let margin = item.margin_percent().map(format_percent).unwrap_or_default();
    let limits = format!("{} - {}", format_count(item.min), format_count(item.max));
    let item_for_view = item.clone();

    view! {
        <TableRow>
            <TableCellCheckbox
                checked=Signal::derive(move || core.with(|c| c.selection().contains(&id_for_checked)))
                selectable=selectable
                on_change=Callback::new(move |checked| list.select_row(&id, checked))
            />
            <TableCell>
                <TableCellLayout truncate=true>
                    <div class="cell-stack">
                        <span class="cell-stack__main">{item.name.clone()}</span>
                        <span class="cell-stack__sub">{item.description.clone().unwrap_or_default()}</span>
                    </div>
                </TableCellLayout>
            </TableCell>
            <TableCell>
                <TableCellLayout truncate=true>
                    {item.provider_name.clone().unwrap_or_default()}
                </TableCellLayout>
            </TableCell>
            <TableCell class="table__cell--numeric">{format_usd(item.provider_rate)}</TableCell>
            <TableCell class="table__cell--numeric">{format_usd(item.rate)}</TableCell>
            <TableCell class="table__cell--numeric">{margin}</TableCell>
            <TableCell class="table__cell--numeric">{limits}</TableCell>
            <TableCell>
                <StatusBadge status=item.status />
            </TableCell>
            <TableCell class="table__actions-column">
                <div class="table__actions">
                    <button
                        class="button button--icon"
                        title="View"
                        on:click=move |_| on_view.run(item_for_view.clone())
                    >
                        {icon("eye")}
                    </button>
                    {actions}
                </div>
            </TableCell>
        </TableRow>
    }
}

#[component]
pub fn ServiceGroupedTable(
    list: ResourceList<Service>,
    on_view: Callback<Service>,
    row_actions: Callback<Service, AnyView>,
) -> impl IntoView {
    let core = list.core;
    let collapsed = RwSignal::new(CollapsedCategories::default());

    let groups = move || {
        core.with(|c| {
            let revision = c.list_slot().revision();
            group_by_category(c.page().items(), |s| s.category.as_str())
                .into_iter()
                .map(|g| {
                    let items: Vec<Service> = g.items.into_iter().cloned().collect();
                    (format!("{}:{}", revision, g.category), g.category, items)
                })
                .collect::<Vec<_>>()
        })
    };

    let collapse_all = move |_| {
        let categories = core.with_untracked(|c| {
            group_by_category(c.page().items(), |s| s.category.as_str())
                .into_iter()
                .map(|g| g.category)
                .collect::<Vec<_>>()
        });
        collapsed.update(|c| c.collapse_all(categories));
    };

    let is_loading = Signal::derive(move || core.with(|c| c.list_slot().is_loading()));
    let is_empty = Signal::derive(move || core.with(|c| c.page().is_empty()));

    view! {
        <div class="table-wrapper table-view">
            <div class="table__toolbar">
                <Button
                    appearance=ButtonAppearance::Transparent
                    size=ButtonSize::Small
                    on_click=move |_| collapsed.update(|c| c.expand_all())
                >
                    "Expand all"
                </Button>
                <Button appearance=ButtonAppearance::Transparent size=ButtonSize::Small on_click=collapse_all>
                    "Collapse all"
                </Button>
            </div>
            <Table attr:style="width: 100%;">
                <TableHeader>
                    <TableRow>
                        <TableHeaderCheckbox
                            state=Signal::derive(move || core.with(|c| c.select_all_state()))
                            disabled=Signal::derive(move || core.with(|c| c.selectable_ids().is_empty()))
                            on_toggle=Callback::new(move |_| list.toggle_select_all())
                        />
                        <TableHeaderCell resizable=false>"Service"</TableHeaderCell>
                        <TableHeaderCell resizable=false>"Provider"</TableHeaderCell>
                        <TableHeaderCell resizable=false class="table__cell--numeric">"Cost"</TableHeaderCell>
                        <TableHeaderCell resizable=false class="table__cell--numeric">"Rate"</TableHeaderCell>
                        <TableHeaderCell resizable=false class="table__cell--numeric">"Margin"</TableHeaderCell>
                        <TableHeaderCell resizable=false class="table__cell--numeric">"Min - max"</TableHeaderCell>
                        <TableHeaderCell resizable=false>"Status"</TableHeaderCell>
                        <TableHeaderCell resizable=false class="table__actions-column">"Actions"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    <For
                        each=groups
                        key=|(key, _, _)| key.clone()
                        children=move |(_, category, items): (String, String, Vec<Service>)| {
                            let count = items.len();
                            let items = StoredValue::new(items);
                            let category = StoredValue::new(category);
                            let in_group = move |s: &Service| category.with_value(|c| s.category == *c);
                            let is_collapsed = move || {
                                collapsed.with(|c| category.with_value(|cat| c.is_collapsed(cat)))
                            };

                            view! {
                                <TableRow class="table__group-row">
                                    <TableCell class="fixed-checkbox-column">
                                        <TriStateCheckbox
                                            state=Signal::derive(move || core.with(|c| c.group_state(in_group)))
                                            on_toggle=Callback::new(move |_| list.toggle_group(in_group))
                                        />
                                    </TableCell>
                                    <TableCell attr:colspan=COLUMN_COUNT.to_string()>
                                        <div
                                            class="table__group-header"
                                            on:click=move |_| {
                                                collapsed.update(|c| category.with_value(|cat| c.toggle(cat)))
                                            }
                                        >
                                            {move || if is_collapsed() {
                                                icon("folder-closed")
                                            } else {
                                                icon("folder-open")
                                            }}
                                            <span class="table__group-title">{category.get_value()}</span>
                                            <span class="badge badge--neutral">{count}</span>
                                        </div>
                                    </TableCell>
                                </TableRow>
                                <Show when=move || !is_collapsed()>
                                    {items
                                        .get_value()
                                        .into_iter()
                                        .map(|item| service_row(list, item, on_view, row_actions))
                                        .collect_view()}
                                </Show>
                            }
                        }
                    />
                </TableBody>
            </Table>
            <ListPlaceholder is_loading=is_loading is_empty=is_empty list_name=Service::LIST_NAME />
        </div>
    }
}
