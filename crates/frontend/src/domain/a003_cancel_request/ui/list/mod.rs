use super::details::CancelRequestDetails;
use super::dialogs::ApproveCancelDialog;
use crate::shared::click_outside::{ActionMenu, ActionMenuItem};
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::resource_table::{Column, ResourceTable};
use crate::shared::components::stat_card::{StatCard, StatTone};
use crate::shared::components::table::{format_count, format_usd};
use crate::shared::components::ui::StatusBadge;
use crate::shared::date_utils::format_date;
use crate::shared::mutation_dialog::DeclineDialog;
use crate::shared::page_frame::{PageFrame, PageHeader, PAGE_CAT_LIST};
use crate::shared::resource_list::use_resource_list;
use contracts::domain::a003_cancel_request::{decline_form, CancelRequest, CancelRequestStatus};
use leptos::prelude::*;

type Col = Column<CancelRequest>;

#[derive(Debug, Clone)]
enum RowAction {
    View(CancelRequest),
    Approve(CancelRequest),
    Decline(CancelRequest),
}

fn columns() -> Vec<Col> {
    vec![
        Col::new("Order", |r| {
            view! {
                <div class="cell-stack">
                    <span class="cell-stack__main">{format!("#{}", r.order_id)}</span>
                    <span class="cell-stack__sub">{r.service_name.clone().unwrap_or_default()}</span>
                </div>
            }
            .into_any()
        })
        .sortable("orderId"),
        Col::new("User", |r| r.username.clone().into_any()).sortable("username"),
        Col::new("Charge", |r| format_usd(r.charge).into_any())
            .sortable("charge")
            .numeric(),
        Col::new("Reason", |r| r.reason.clone().unwrap_or_default().into_any()),
        Col::new("Status", |r| view! { <StatusBadge status=r.status /> }.into_any())
            .sortable("status"),
        Col::new("Requested", |r| format_date(&r.created_at).into_any()).sortable("createdAt"),
    ]
}

#[component]
pub fn CancelRequestsPage() -> impl IntoView {
    let list = use_resource_list::<CancelRequest>();
    let action = RwSignal::new(None::<RowAction>);
    let close = Callback::new(move |_| action.set(None));

    let on_view =
        Callback::new(move |item: CancelRequest| action.set(Some(RowAction::View(item))));

    let row_actions = Callback::new(move |item: CancelRequest| {
        if item.status != CancelRequestStatus::Pending {
            return view! { <></> }.into_any();
        }
        let item = StoredValue::new(item);
        view! {
            <ActionMenu>
                <ActionMenuItem
                    label="Approve"
                    on_select=Callback::new(move |_| {
                        action.set(Some(RowAction::Approve(item.get_value())))
                    })
                />
                <ActionMenuItem
                    label="Decline"
                    danger=true
                    on_select=Callback::new(move |_| {
                        action.set(Some(RowAction::Decline(item.get_value())))
                    })
                />
            </ActionMenu>
        }
        .into_any()
    });

    view! {
        <PageFrame page_id="a003_cancel_request--list" category=PAGE_CAT_LIST>
            <PageHeader title="Cancel requests" count=list.total_count() />

            <div class="stats-grid">
                <StatCard
                    label="Total requests"
                    icon_name="x-circle"
                    value=list.stat(|s| format_count(s.total_requests))
                    loading=list.stats_loading()
                />
                <StatCard
                    label="Pending"
                    icon_name="clock"
                    value=list.stat(|s| format_count(s.pending_requests))
                    loading=list.stats_loading()
                    tone=StatTone::Warning
                />
                <StatCard
                    label="Approved"
                    icon_name="check"
                    value=list.stat(|s| format_count(s.approved_requests))
                    loading=list.stats_loading()
                    tone=StatTone::Success
                />
                <StatCard
                    label="Declined"
                    icon_name="x"
                    value=list.stat(|s| format_count(s.declined_requests))
                    loading=list.stats_loading()
                    tone=StatTone::Error
                />
                <StatCard
                    label="Refunded"
                    icon_name="dollar-sign"
                    value=list.stat(|s| format_usd(s.total_refunded))
                    loading=list.stats_loading()
                />
            </div>

            <FilterPanel list=list search_placeholder="Order ID or username" />
            <ResourceTable list=list columns=columns() on_view=on_view row_actions=row_actions />

            {move || action.get().map(|a| match a {
                RowAction::View(item) => view! {
                    <CancelRequestDetails item=item on_close=close />
                }.into_any(),
                RowAction::Approve(item) => view! {
                    <ApproveCancelDialog list=list item=item on_closed=close />
                }.into_any(),
                RowAction::Decline(item) => view! {
                    <DeclineDialog list=list item=item form=decline_form() on_closed=close />
                }.into_any(),
            })}
        </PageFrame>
    }
}
