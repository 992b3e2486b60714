use super::details::AffiliateDetails;
use super::dialogs::PayoutDialog;
use crate::shared::click_outside::{ActionMenu, ActionMenuItem};
use crate::shared::components::bulk_bar::BulkBar;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::resource_table::{Column, ResourceTable};
use crate::shared::components::stat_card::{StatCard, StatTone};
use crate::shared::components::table::{format_count, format_percent, format_usd};
use crate::shared::components::ui::StatusBadge;
use crate::shared::date_utils::format_date;
use crate::shared::mutation_dialog::StatusChangeDialog;
use crate::shared::page_frame::{PageFrame, PageHeader, PAGE_CAT_LIST};
use crate::shared::resource_list::use_resource_list;
use contracts::domain::a001_affiliate::{status_form, Affiliate};
use contracts::shared::mutation::BulkAction;
use leptos::prelude::*;

type Col = Column<Affiliate>;

#[derive(Debug, Clone)]
enum RowAction {
    View(Affiliate),
    ChangeStatus(Affiliate),
    Payout(Affiliate),
}

fn columns() -> Vec<Col> {
    vec![
        Col::new("Username", |a| {
            view! {
                <div class="cell-stack">
                    <span class="cell-stack__main">{a.username.clone()}</span>
                    <span class="cell-stack__sub">{a.email.clone()}</span>
                </div>
            }
            .into_any()
        })
        .sortable("username"),
        Col::new("Code", |a| view! { <code>{a.referral_code.clone()}</code> }.into_any()),
        Col::new("Status", |a| view! { <StatusBadge status=a.status /> }.into_any())
            .sortable("status"),
        Col::new("Commission", |a| format_percent(a.commission_rate).into_any())
            .sortable("commissionRate")
            .numeric(),
        Col::new("Referrals", |a| format_count(a.total_referrals).into_any())
            .sortable("totalReferrals")
            .numeric(),
        Col::new("Earnings", |a| format_usd(a.total_earnings).into_any())
            .sortable("totalEarnings")
            .numeric(),
        Col::new("Balance", |a| format_usd(a.available_balance).into_any()).numeric(),
        Col::new("Joined", |a| format_date(&a.created_at).into_any()).sortable("createdAt"),
    ]
}

#[component]
pub fn AffiliatesPage() -> impl IntoView {
    let list = use_resource_list::<Affiliate>();
    let action = RwSignal::new(None::<RowAction>);
    let close = Callback::new(move |_| action.set(None));

    let on_view = Callback::new(move |item: Affiliate| action.set(Some(RowAction::View(item))));

    let row_actions = Callback::new(move |item: Affiliate| {
        let can_payout = item.can_receive_payout();
        let item = StoredValue::new(item);
        view! {
            <ActionMenu>
                <ActionMenuItem
                    label="Change status"
                    on_select=Callback::new(move |_| {
                        action.set(Some(RowAction::ChangeStatus(item.get_value())))
                    })
                />
                {can_payout.then(|| view! {
                    <ActionMenuItem
                        label="Process payout"
                        on_select=Callback::new(move |_| {
                            action.set(Some(RowAction::Payout(item.get_value())))
                        })
                    />
                })}
            </ActionMenu>
        }
        .into_any()
    });

    view! {
        <PageFrame page_id="a001_affiliate--list" category=PAGE_CAT_LIST>
            <PageHeader title="Affiliates" count=list.total_count() />

            <div class="stats-grid">
                <StatCard
                    label="Total affiliates"
                    icon_name="affiliates"
                    value=list.stat(|s| format_count(s.total_affiliates))
                    loading=list.stats_loading()
                    subtitle=list.stat(|s| format!("{} active", format_count(s.active_affiliates)))
                />
                <StatCard
                    label="Pending approval"
                    icon_name="clock"
                    value=list.stat(|s| format_count(s.pending_affiliates))
                    loading=list.stats_loading()
                    tone=StatTone::Warning
                />
                <StatCard
                    label="Total earnings"
                    icon_name="dollar-sign"
                    value=list.stat(|s| format_usd(s.total_earnings))
                    loading=list.stats_loading()
                    tone=StatTone::Success
                    subtitle=list.stat(|s| format!("{} referrals", format_count(s.total_referrals)))
                />
                <StatCard
                    label="Pending payouts"
                    icon_name="wallet"
                    value=list.stat(|s| format_usd(s.pending_payouts))
                    loading=list.stats_loading()
                    subtitle=list.stat(|s| format!("{} paid out", format_usd(s.total_paid_out)))
                />
            </div>

            <FilterPanel list=list search_placeholder="Username, email or referral code" />
            <BulkBar list=list actions=vec![BulkAction::Approve, BulkAction::Suspend] />
            <ResourceTable list=list columns=columns() on_view=on_view row_actions=row_actions />

            {move || action.get().map(|a| match a {
                RowAction::View(item) => view! {
                    <AffiliateDetails item=item on_close=close />
                }.into_any(),
                RowAction::ChangeStatus(item) => {
                    let form = status_form(&item);
                    view! {
                        <StatusChangeDialog list=list item=item form=form on_closed=close />
                    }.into_any()
                }
                RowAction::Payout(item) => view! {
                    <PayoutDialog list=list item=item on_closed=close />
                }.into_any(),
            })}
        </PageFrame>
    }
}
