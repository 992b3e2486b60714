use crate::shared::components::table::format_count;
use crate::shared::date_utils::{format_datetime, format_optional_datetime};
use crate::shared::detail_dialog::{DetailDialog, DetailRow};
use contracts::domain::a005_moderator::Moderator;
use contracts::domain::common::ResourceStatus;
use leptos::prelude::*;

fn detail_rows(m: &Moderator) -> Vec<DetailRow> {
    vec![
        ("Username", m.username.clone()),
        ("Email", m.email.clone()),
        ("Role", m.role.label().to_string()),
        ("Status", m.status.label().to_string()),
        ("Permissions", m.permissions.join(", ")),
        ("Actions", format_count(m.actions_count)),
        ("Created", format_datetime(&m.created_at)),
        ("Last login", format_optional_datetime(m.last_login_at.as_ref())),
    ]
}

#[component]
pub fn ModeratorDetails(item: Moderator, on_close: Callback<()>) -> impl IntoView {
    view! {
        <DetailDialog
            title=format!("Moderator {}", item.username)
            rows=detail_rows(&item)
            on_close=on_close
        />
    }
}
