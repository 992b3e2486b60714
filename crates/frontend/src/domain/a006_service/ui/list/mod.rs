pub mod grouped_table;

use self::grouped_table::ServiceGroupedTable;
use super::details::ServiceDetails;
use crate::shared::click_outside::{ActionMenu, ActionMenuItem};
use crate::shared::components::bulk_bar::BulkBar;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::resource_table::{Column, ResourceCards};
use crate::shared::components::stat_card::{StatCard, StatTone};
use crate::shared::components::table::{format_count, format_percent, format_usd};
use crate::shared::mutation_dialog::{DeleteDialog, StatusChangeDialog};
use crate::shared::page_frame::{PageFrame, PageHeader, PAGE_CAT_LIST};
use crate::shared::resource_list::use_resource_list;
use contracts::domain::a006_service::{delete_form, status_form, Service};
use contracts::shared::mutation::BulkAction;
use leptos::prelude::*;

type Col = Column<Service>;

#[derive(Debug, Clone)]
enum RowAction {
    View(Service),
    ChangeStatus(Service),
    Delete(Service),
}

/// Fields shown on the mobile cards.
fn card_columns() -> Vec<Col> {
    vec![
        Col::new("Category", |s| s.category.clone().into_any()),
        Col::new("Rate", |s| format_usd(s.rate).into_any()).numeric(),
        Col::new("Margin", |s| {
            s.margin_percent().map(format_percent).unwrap_or_default().into_any()
        })
        .numeric(),
    ]
}

#[component]
pub fn ServicesPage() -> impl IntoView {
    let list = use_resource_list::<Service>();
    let action = RwSignal::new(None::<RowAction>);
    let close = Callback::new(move |_| action.set(None));

    let on_view = Callback::new(move |item: Service| action.set(Some(RowAction::View(item))));

    let row_actions = Callback::new(move |item: Service| {
        let item = StoredValue::new(item);
        view! {
            <ActionMenu>
                <ActionMenuItem
                    label="Change status"
                    on_select=Callback::new(move |_| {
                        action.set(Some(RowAction::ChangeStatus(item.get_value())))
                    })
                />
                <ActionMenuItem
                    label="Delete"
                    danger=true
                    on_select=Callback::new(move |_| {
                        action.set(Some(RowAction::Delete(item.get_value())))
                    })
                />
            </ActionMenu>
        }
        .into_any()
    });

    view! {
        <PageFrame page_id="a006_service--list" category=PAGE_CAT_LIST>
            <PageHeader title="Services" count=list.total_count() />

            <div class="stats-grid">
                <StatCard
                    label="Total services"
                    icon_name="layers"
                    value=list.stat(|s| format_count(s.total_services))
                    loading=list.stats_loading()
                />
                <StatCard
                    label="Active"
                    icon_name="check"
                    value=list.stat(|s| format_count(s.active_services))
                    loading=list.stats_loading()
                    tone=StatTone::Success
                />
                <StatCard
                    label="Inactive"
                    icon_name="x-circle"
                    value=list.stat(|s| format_count(s.inactive_services))
                    loading=list.stats_loading()
                    tone=StatTone::Warning
                />
                <StatCard
                    label="Categories"
                    icon_name="folder-open"
                    value=list.stat(|s| format_count(s.categories))
                    loading=list.stats_loading()
                    subtitle=list.stat(|s| format!("{} providers", format_count(s.providers)))
                />
            </div>

            <FilterPanel list=list search_placeholder="Name, category or provider" />
            <BulkBar list=list actions=vec![BulkAction::Suspend, BulkAction::Delete] />
            <ServiceGroupedTable list=list on_view=on_view row_actions=row_actions />
            <ResourceCards list=list columns=card_columns() on_view=on_view row_actions=row_actions />

            {move || action.get().map(|a| match a {
                RowAction::View(item) => view! {
                    <ServiceDetails item=item on_close=close />
                }.into_any(),
                RowAction::ChangeStatus(item) => {
                    let form = status_form(&item);
                    view! {
                        <StatusChangeDialog list=list item=item form=form on_closed=close />
                    }.into_any()
                }
                RowAction::Delete(item) => view! {
                    <DeleteDialog list=list item=item form=delete_form() on_closed=close />
                }.into_any(),
            })}
        </PageFrame>
    }
}
