use super::details::ModeratorDetails;
use super::dialogs::RoleChangeDialog;
use crate::shared::click_outside::{ActionMenu, ActionMenuItem};
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::resource_table::{Column, ResourceTable};
use crate::shared::components::stat_card::{StatCard, StatTone};
use crate::shared::components::stats_filter::StatsFilterBar;
use crate::shared::components::table::format_count;
use crate::shared::components::ui::{Badge, StatusBadge};
use crate::shared::date_utils::{format_date, format_optional_datetime};
use crate::shared::mutation_dialog::{DeleteDialog, StatusChangeDialog};
use crate::shared::page_frame::{PageFrame, PageHeader, PAGE_CAT_LIST};
use crate::shared::resource_list::use_resource_list;
use contracts::domain::a005_moderator::{
    delete_form, status_form, Moderator, ModeratorRole,
};
use leptos::prelude::*;

type Col = Column<Moderator>;

#[derive(Debug, Clone)]
enum RowAction {
    View(Moderator),
    ChangeRole(Moderator),
    ChangeStatus(Moderator),
    Delete(Moderator),
}

fn role_variant(role: ModeratorRole) -> &'static str {
    match role {
        ModeratorRole::Admin => "error",
        ModeratorRole::Moderator => "primary",
        ModeratorRole::Support => "neutral",
    }
}

fn columns() -> Vec<Col> {
    vec![
        Col::new("Moderator", |m| {
            view! {
                <div class="cell-stack">
                    <span class="cell-stack__main">{m.username.clone()}</span>
                    <span class="cell-stack__sub">{m.email.clone()}</span>
                </div>
            }
            .into_any()
        })
        .sortable("username"),
        Col::new("Role", |m| {
            let role = m.role;
            view! {
                <Badge variant=role_variant(role).to_string()>{role.label()}</Badge>
            }
            .into_any()
        })
        .sortable("role"),
        Col::new("Status", |m| view! { <StatusBadge status=m.status /> }.into_any())
            .sortable("status"),
        Col::new("Actions", |m| format_count(m.actions_count).into_any())
            .sortable("actionsCount")
            .numeric(),
        Col::new("Last login", |m| {
            format_optional_datetime(m.last_login_at.as_ref()).into_any()
        }),
        Col::new("Created", |m| format_date(&m.created_at).into_any()).sortable("createdAt"),
    ]
}

#[component]
pub fn ModeratorsPage() -> impl IntoView {
    let list = use_resource_list::<Moderator>();
    let action = RwSignal::new(None::<RowAction>);
    let close = Callback::new(move |_| action.set(None));

    let on_view = Callback::new(move |item: Moderator| action.set(Some(RowAction::View(item))));

    let row_actions = Callback::new(move |item: Moderator| {
        let item = StoredValue::new(item);
        let open = move |make: fn(Moderator) -> RowAction| {
            Callback::new(move |_| action.set(Some(make(item.get_value()))))
        };
        view! {
            <ActionMenu>
                <ActionMenuItem label="Change role" on_select=open(RowAction::ChangeRole) />
                <ActionMenuItem label="Change status" on_select=open(RowAction::ChangeStatus) />
                <ActionMenuItem label="Delete" on_select=open(RowAction::Delete) danger=true />
            </ActionMenu>
        }
        .into_any()
    });

    let roles = ModeratorRole::ALL
        .into_iter()
        .map(|r| (r.as_str(), r.label()))
        .collect::<Vec<_>>();

    view! {
        <PageFrame page_id="a005_moderator--list" category=PAGE_CAT_LIST>
            <PageHeader title="Moderators" count=list.total_count() />
            <StatsFilterBar list=list roles=roles />

            <div class="stats-grid">
                <StatCard
                    label="Total moderators"
                    icon_name="shield"
                    value=list.stat(|s| format_count(s.total_moderators))
                    loading=list.stats_loading()
                    subtitle=list.stat(|s| format!("{} active", format_count(s.active_moderators)))
                />
                <StatCard
                    label="Admins"
                    icon_name="shield"
                    value=list.stat(|s| format_count(s.admins))
                    loading=list.stats_loading()
                    tone=StatTone::Error
                />
                <StatCard
                    label="Moderators"
                    icon_name="users"
                    value=list.stat(|s| format_count(s.moderators))
                    loading=list.stats_loading()
                />
                <StatCard
                    label="Support"
                    icon_name="info"
                    value=list.stat(|s| format_count(s.support))
                    loading=list.stats_loading()
                />
                <StatCard
                    label="Actions"
                    icon_name="activity"
                    value=list.stat(|s| format_count(s.total_actions))
                    loading=list.stats_loading()
                    tone=StatTone::Success
                />
            </div>

            <FilterPanel list=list search_placeholder="Username or email" />
            <ResourceTable list=list columns=columns() on_view=on_view row_actions=row_actions />

            {move || action.get().map(|a| match a {
                RowAction::View(item) => view! {
                    <ModeratorDetails item=item on_close=close />
                }.into_any(),
                RowAction::ChangeRole(item) => view! {
                    <RoleChangeDialog list=list item=item on_closed=close />
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
