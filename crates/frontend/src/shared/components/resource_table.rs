//! Generic renderer for one page of resources.
//!
//! The same column list drives the desktop table and the mobile cards. Rows
//! are keyed by list revision, id and status, so a refetch or an optimistic
//! status overlay re-renders the affected row.

use crate::shared::components::table::{TableCellCheckbox, TableHeaderCheckbox};
use crate::shared::components::ui::StatusBadge;
use crate::shared::icons::icon;
use crate::shared::resource_list::ResourceList;
use contracts::domain::common::{AdminResource, ResourceStatus};
use leptos::prelude::*;
use thaw::*;

pub struct Column<R> {
    pub label: &'static str,
    pub sort_field: Option<&'static str>,
    pub numeric: bool,
    pub render: fn(&R) -> AnyView,
}

impl<R> Clone for Column<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for Column<R> {}

impl<R> Column<R> {
    pub fn new(label: &'static str, render: fn(&R) -> AnyView) -> Self {
        Self {
            label,
            sort_field: None,
            numeric: false,
            render,
        }
    }

    pub fn sortable(mut self, field: &'static str) -> Self {
        self.sort_field = Some(field);
        self
    }

    pub fn numeric(mut self) -> Self {
        self.numeric = true;
        self
    }
}

pub fn row_key<R: AdminResource>(revision: u64, item: &R) -> String {
    format!("{}:{}:{}", revision, item.id(), item.status().as_str())
}

#[component]
pub fn ResourceTable<R: AdminResource>(
    list: ResourceList<R>,
    columns: Vec<Column<R>>,
    /// Opens the read-only detail dialog
    on_view: Callback<R>,
    /// Resource-specific action menu of a row
    row_actions: Callback<R, AnyView>,
) -> impl IntoView {
    let core = list.core;
    let columns = StoredValue::new(columns);

    let rows = move || {
        core.with(|c| {
            let revision = c.list_slot().revision();
            c.page()
                .items()
                .iter()
                .map(|item| (row_key(revision, item), item.clone()))
                .collect::<Vec<_>>()
        })
    };
    let is_loading = Signal::derive(move || core.with(|c| c.list_slot().is_loading()));
    let is_empty = Signal::derive(move || core.with(|c| c.page().is_empty()));

    let select_all_state = Signal::derive(move || core.with(|c| c.select_all_state()));
    let nothing_selectable = Signal::derive(move || core.with(|c| c.selectable_ids().is_empty()));

    let sort_indicator = move |field: &'static str| {
        core.with(|c| match c.query().sort() {
            Some(sort) if sort.field == field => {
                if sort.ascending {
                    " ▲"
                } else {
                    " ▼"
                }
            }
            _ => "",
        })
    };

    view! {
        <div class="table-wrapper table-view">
            <Table attr:style="width: 100%;">
                <TableHeader>
                    <TableRow>
                        {R::SUPPORTS_BULK.then(|| view! {
                            <TableHeaderCheckbox
                                state=select_all_state
                                disabled=nothing_selectable
                                on_toggle=Callback::new(move |_| list.toggle_select_all())
                            />
                        })}
                        {columns.get_value().into_iter().map(|column| {
                            let class = if column.numeric { "table__cell--numeric" } else { "" };
                            match column.sort_field {
                                Some(field) => view! {
                                    <TableHeaderCell resizable=false class=class>
                                        <div
                                            class="table__sortable-header"
                                            style="cursor: pointer;"
                                            on:click=move |_| list.toggle_sort(field)
                                        >
                                            {column.label}
                                            <span class="table__sort-indicator">{move || sort_indicator(field)}</span>
                                        </div>
                                    </TableHeaderCell>
                                }.into_any(),
                                None => view! {
                                    <TableHeaderCell resizable=false class=class>
                                        {column.label}
                                    </TableHeaderCell>
                                }.into_any(),
                            }
                        }).collect_view()}
                        <TableHeaderCell resizable=false class="table__actions-column">
                            "Actions"
                        </TableHeaderCell>
                    </TableRow>
                </TableHeader>

                <TableBody>
                    <For
                        each=rows
                        key=|(key, _)| key.clone()
                        children=move |(_, item): (String, R)| {
                            let id = item.id().to_string();
                            let id_for_checked = id.clone();
                            let selectable = item.is_selectable();
                            let item_for_view = item.clone();
                            let actions = row_actions.run(item.clone());

                            view! {
                                <TableRow>
                                    {R::SUPPORTS_BULK.then(|| view! {
                                        <TableCellCheckbox
                                            checked=Signal::derive(move || core.with(|c| c.selection().contains(&id_for_checked)))
                                            selectable=selectable
                                            on_change=Callback::new(move |checked| list.select_row(&id, checked))
                                        />
                                    })}
                                    {columns.get_value().into_iter().map(|column| {
                                        let class = if column.numeric { "table__cell--numeric" } else { "" };
                                        let item = item.clone();
                                        view! {
                                            <TableCell class=class>
                                                <TableCellLayout truncate=true>
                                                    {(column.render)(&item)}
                                                </TableCellLayout>
                                            </TableCell>
                                        }
                                    }).collect_view()}
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
                    />
                </TableBody>
            </Table>
            <ListPlaceholder is_loading=is_loading is_empty=is_empty list_name=R::LIST_NAME />
        </div>

        <ResourceCards list=list columns=columns.get_value() on_view=on_view row_actions=row_actions />
    }
}

/// Mobile rendering of the current page: one card per row.
#[component]
pub fn ResourceCards<R: AdminResource>(
    list: ResourceList<R>,
    columns: Vec<Column<R>>,
    on_view: Callback<R>,
    row_actions: Callback<R, AnyView>,
) -> impl IntoView {
    let core = list.core;
    let columns = StoredValue::new(columns);

    let rows = move || {
        core.with(|c| {
            let revision = c.list_slot().revision();
            c.page()
                .items()
                .iter()
                .map(|item| (row_key(revision, item), item.clone()))
                .collect::<Vec<_>>()
        })
    };
    let is_loading = Signal::derive(move || core.with(|c| c.list_slot().is_loading()));
    let is_empty = Signal::derive(move || core.with(|c| c.page().is_empty()));

    view! {
        <div class="card-view">
            <For
                each=rows
                key=|(key, _)| key.clone()
                children=move |(_, item): (String, R)| {
                    let id = item.id().to_string();
                    let id_for_checked = id.clone();
                    let selectable = R::SUPPORTS_BULK && item.is_selectable();
                    let item_for_view = item.clone();
                    let actions = row_actions.run(item.clone());

                    view! {
                        <div class="resource-card">
                            <div class="resource-card__header">
                                {selectable.then(|| view! {
                                    <input
                                        type="checkbox"
                                        class="table__checkbox"
                                        prop:checked=move || core.with(|c| c.selection().contains(&id_for_checked))
                                        on:change=move |ev| list.select_row(&id, event_target_checked(&ev))
                                    />
                                })}
                                <span class="resource-card__title">{item.display_name()}</span>
                                <StatusBadge status=item.status() />
                            </div>
                            <dl class="resource-card__fields">
                                {columns.get_value().into_iter().map(|column| view! {
                                    <dt>{column.label}</dt>
                                    <dd>{(column.render)(&item)}</dd>
                                }).collect_view()}
                            </dl>
                            <div class="resource-card__actions">
                                <Button
                                    appearance=ButtonAppearance::Secondary
                                    size=ButtonSize::Small
                                    on_click=move |_| on_view.run(item_for_view.clone())
                                >
                                    "View"
                                </Button>
                                {actions}
                            </div>
                        </div>
                    }
                }
            />
            <ListPlaceholder is_loading=is_loading is_empty=is_empty list_name=R::LIST_NAME />
        </div>
    }
}

/// Loading / empty state shown under a list.
#[component]
pub fn ListPlaceholder(
    #[prop(into)] is_loading: Signal<bool>,
    #[prop(into)] is_empty: Signal<bool>,
    list_name: &'static str,
) -> impl IntoView {
    view! {
        {move || {
            if is_loading.get() && is_empty.get() {
                view! {
                    <div class="list-placeholder">
                        <Spinner />
                    </div>
                }.into_any()
            } else if is_empty.get() {
                view! {
                    <div class="list-placeholder">
                        {format!("No {} found", list_name.to_lowercase())}
                    </div>
                }.into_any()
            } else {
                view! { <></> }.into_any()
            }
        }}
    }
}
