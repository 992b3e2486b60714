use super::details::WithdrawalDetails;
use super::dialogs::{ApproveWithdrawalDialog, CancelWithdrawalDialog, UpdateTransactionIdDialog};
use crate::shared::click_outside::{ActionMenu, ActionMenuItem};
use crate::shared::components::bulk_bar::BulkBar;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::resource_table::{Column, ResourceTable};
use crate::shared::components::stat_card::{StatCard, StatTone};
use crate::shared::components::table::{format_count, format_usd};
use crate::shared::components::ui::StatusBadge;
use crate::shared::date_utils::format_date;
use crate::shared::mutation_dialog::DeclineDialog;
use crate::shared::page_frame::{PageFrame, PageHeader, PAGE_CAT_LIST};
use crate::shared::resource_list::use_resource_list;
use contracts::domain::a002_withdrawal::{decline_form, Withdrawal};
use contracts::shared::mutation::BulkAction;
use leptos::prelude::*;

type Col = Column<Withdrawal>;

#[derive(Debug, Clone)]
enum RowAction {
    View(Withdrawal),
    Approve(Withdrawal),
    Decline(Withdrawal),
    UpdateTransactionId(Withdrawal),
    Cancel(Withdrawal),
}

fn columns() -> Vec<Col> {
    vec![
        Col::new("User", |w| {
            view! {
                <div class="cell-stack">
                    <span class="cell-stack__main">{w.username.clone()}</span>
                    <span class="cell-stack__sub">{w.email.clone().unwrap_or_default()}</span>
                </div>
            }
            .into_any()
        })
        .sortable("username"),
        Col::new("Amount", |w| format_usd(w.amount).into_any())
            .sortable("amount")
            .numeric(),
        Col::new("Method", |w| w.method.clone().into_any()),
        Col::new("Status", |w| view! { <StatusBadge status=w.status /> }.into_any())
            .sortable("status"),
        Col::new("Transaction", |w| {
            view! { <code>{w.transaction_id.clone().unwrap_or_default()}</code> }.into_any()
        }),
        Col::new("Requested", |w| format_date(&w.created_at).into_any()).sortable("createdAt"),
    ]
}

#[component]
pub fn WithdrawalsPage() -> impl IntoView {
    let list = use_resource_list::<Withdrawal>();
    let action = RwSignal::new(None::<RowAction>);
    let close = Callback::new(move |_| action.set(None));

    let on_view = Callback::new(move |item: Withdrawal| action.set(Some(RowAction::View(item))));

    let row_actions = Callback::new(move |item: Withdrawal| {
        let can_approve = item.can_approve();
        let can_update = item.can_update_transaction_id();
        let can_cancel = item.can_cancel();
        let item = StoredValue::new(item);
        let open = move |make: fn(Withdrawal) -> RowAction| {
            Callback::new(move |_| action.set(Some(make(item.get_value()))))
        };

        if !(can_approve || can_update || can_cancel) {
            return view! { <></> }.into_any();
        }

        view! {
            <ActionMenu>
                {can_approve.then(|| view! {
                    <ActionMenuItem label="Approve" on_select=open(RowAction::Approve) />
                    <ActionMenuItem label="Decline" on_select=open(RowAction::Decline) danger=true />
                })}
                {can_update.then(|| view! {
                    <ActionMenuItem
                        label="Update transaction ID"
                        on_select=open(RowAction::UpdateTransactionId)
                    />
                })}
                {can_cancel.then(|| view! {
                    <ActionMenuItem label="Cancel" on_select=open(RowAction::Cancel) danger=true />
                })}
            </ActionMenu>
        }
        .into_any()
    });

    view! {
        <PageFrame page_id="a002_withdrawal--list" category=PAGE_CAT_LIST>
            <PageHeader title="Withdrawals" count=list.total_count() />

            <div class="stats-grid">
                <StatCard
                    label="Total requests"
                    icon_name="wallet"
                    value=list.stat(|s| format_count(s.total_requests))
                    loading=list.stats_loading()
                    subtitle=list.stat(|s| format_usd(s.total_amount))
                />
                <StatCard
                    label="Pending"
                    icon_name="clock"
                    value=list.stat(|s| format_count(s.pending_requests))
                    loading=list.stats_loading()
                    tone=StatTone::Warning
                    subtitle=list.stat(|s| format_usd(s.pending_amount))
                />
                <StatCard
                    label="Processing"
                    icon_name="activity"
                    value=list.stat(|s| format_count(s.processing_requests))
                    loading=list.stats_loading()
                />
                <StatCard
                    label="Approved"
                    icon_name="check"
                    value=list.stat(|s| format_count(s.approved_requests))
                    loading=list.stats_loading()
                    tone=StatTone::Success
                    subtitle=list.stat(|s| format_usd(s.approved_amount))
                />
                <StatCard
                    label="Rejected"
                    icon_name="x-circle"
                    value=list.stat(|s| format_count(s.rejected_requests))
                    loading=list.stats_loading()
                    tone=StatTone::Error
                />
            </div>

            <FilterPanel list=list search_placeholder="Username, email or transaction ID" />
            <BulkBar list=list actions=vec![BulkAction::Approve, BulkAction::Decline] />
            <ResourceTable list=list columns=columns() on_view=on_view row_actions=row_actions />

            {move || action.get().map(|a| match a {
                RowAction::View(item) => view! {
                    <WithdrawalDetails item=item on_close=close />
                }.into_any(),
                RowAction::Approve(item) => view! {
                    <ApproveWithdrawalDialog list=list item=item on_closed=close />
                }.into_any(),
                RowAction::Decline(item) => view! {
                    <DeclineDialog list=list item=item form=decline_form() on_closed=close />
                }.into_any(),
                RowAction::UpdateTransactionId(item) => view! {
                    <UpdateTransactionIdDialog list=list item=item on_closed=close />
                }.into_any(),
                RowAction::Cancel(item) => view! {
                    <CancelWithdrawalDialog list=list item=item on_closed=close />
                }.into_any(),
            })}
        </PageFrame>
    }
}
