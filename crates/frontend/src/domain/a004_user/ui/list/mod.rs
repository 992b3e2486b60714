use super::details::UserDetails;
use super::dialogs::{BalanceDialog, DiscountDialog};
use crate::shared::click_outside::{ActionMenu, ActionMenuItem};
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::resource_table::{Column, ResourceTable};
use crate::shared::components::stat_card::{StatCard, StatTone};
use crate::shared::components::stats_filter::StatsFilterBar;
use crate::shared::components::table::{format_count, format_percent, format_usd};
use crate::shared::components::ui::StatusBadge;
use crate::shared::date_utils::format_date;
use crate::shared::mutation_dialog::{DeleteDialog, StatusChangeDialog};
use crate::shared::page_frame::{PageFrame, PageHeader, PAGE_CAT_LIST};
use crate::shared::resource_list::use_resource_list;
use contracts::domain::a004_user::{delete_form, status_form, User};
use leptos::prelude::*;

type Col = Column<User>;

#[derive(Debug, Clone)]
enum RowAction {
    View(User),
    ChangeStatus(User),
    Balance(User),
    Discount(User),
    Delete(User),
}

fn columns() -> Vec<Col> {
    vec![
        Col::new("User", |u| {
            view! {
                <div class="cell-stack">
                    <span class="cell-stack__main">{u.username.clone()}</span>
                    <span class="cell-stack__sub">{u.email.clone()}</span>
                </div>
            }
            .into_any()
        })
        .sortable("username"),
        Col::new("Status", |u| view! { <StatusBadge status=u.status /> }.into_any())
            .sortable("status"),
        Col::new("Balance", |u| format_usd(u.balance).into_any())
            .sortable("balance")
            .numeric(),
        Col::new("Discount", |u| format_percent(u.discount).into_any()).numeric(),
        Col::new("Orders", |u| format_count(u.total_orders).into_any())
            .sortable("totalOrders")
            .numeric(),
        Col::new("Spent", |u| format_usd(u.total_spent).into_any())
            .sortable("totalSpent")
            .numeric(),
        Col::new("Registered", |u| format_date(&u.created_at).into_any()).sortable("createdAt"),
    ]
}

#[component]
pub fn UsersPage() -> impl IntoView {
    let list = use_resource_list::<User>();
    let action = RwSignal::new(None::<RowAction>);
    let close = Callback::new(move |_| action.set(None));

    let on_view = Callback::new(move |item: User| action.set(Some(RowAction::View(item))));

    let row_actions = Callback::new(move |item: User| {
        let item = StoredValue::new(item);
        let open = move |make: fn(User) -> RowAction| {
            Callback::new(move |_| action.set(Some(make(item.get_value()))))
        };
        view! {
            <ActionMenu>
                <ActionMenuItem label="Change status" on_select=open(RowAction::ChangeStatus) />
                <ActionMenuItem label="Edit balance" on_select=open(RowAction::Balance) />
                <ActionMenuItem label="Edit discount" on_select=open(RowAction::Discount) />
                <ActionMenuItem label="Delete" on_select=open(RowAction::Delete) danger=true />
            </ActionMenu>
        }
        .into_any()
    });

    view! {
        <PageFrame page_id="a004_user--list" category=PAGE_CAT_LIST>
            <PageHeader title="Users" count=list.total_count() />
            <StatsFilterBar list=list />

            <div class="stats-grid">
                <StatCard
                    label="Total users"
                    icon_name="users"
                    value=list.stat(|s| format_count(s.total_users))
                    loading=list.stats_loading()
                    subtitle=list.stat(|s| format!("{} new", format_count(s.new_users)))
                />
                <StatCard
                    label="Active"
                    icon_name="check"
                    value=list.stat(|s| format_count(s.active_users))
                    loading=list.stats_loading()
                    tone=StatTone::Success
                />
                <StatCard
                    label="Banned"
                    icon_name="x-circle"
                    value=list.stat(|s| format_count(s.banned_users))
                    loading=list.stats_loading()
                    tone=StatTone::Error
                />
                <StatCard
                    label="Balances"
                    icon_name="wallet"
                    value=list.stat(|s| format_usd(s.total_balance))
                    loading=list.stats_loading()
                    subtitle=list.stat(|s| format!("{} spent", format_usd(s.total_spent)))
                />
            </div>

            <FilterPanel list=list search_placeholder="Username or email" />
            <ResourceTable list=list columns=columns() on_view=on_view row_actions=row_actions />

            {move || action.get().map(|a| match a {
                RowAction::View(item) => view! {
                    <UserDetails item=item on_close=close />
                }.into_any(),
                RowAction::ChangeStatus(item) => {
                    let form = status_form(&item);
                    view! {
                        <StatusChangeDialog list=list item=item form=form on_closed=close />
                    }.into_any()
                }
                RowAction::Balance(item) => view! {
                    <BalanceDialog list=list item=item on_closed=close />
                }.into_any(),
                RowAction::Discount(item) => view! {
                    <DiscountDialog list=list item=item on_closed=close />
                }.into_any(),
                RowAction::Delete(item) => view! {
                    <DeleteDialog list=list item=item form=delete_form() on_closed=close />
                }.into_any(),
            })}
        </PageFrame>
    }
}
