use crate::shared::components::table::{format_count, format_percent, format_usd};
use crate::shared::date_utils::{format_datetime, format_optional_datetime};
use crate::shared::detail_dialog::{DetailDialog, DetailRow};
use contracts::domain::a004_user::User;
use contracts::domain::common::ResourceStatus;
use leptos::prelude::*;

fn detail_rows(u: &User) -> Vec<DetailRow> {
    vec![
        ("Username", u.username.clone()),
        ("Email", u.email.clone()),
        ("Status", u.status.label().to_string()),
        ("Balance", format_usd(u.balance)),
        ("Discount", format_percent(u.discount)),
        ("Orders", format_count(u.total_orders)),
        ("Total spent", format_usd(u.total_spent)),
        ("Registered", format_datetime(&u.created_at)),
        ("Last login", format_optional_datetime(u.last_login_at.as_ref())),
    ]
}

#[component]
pub fn UserDetails(item: User, on_close: Callback<()>) -> impl IntoView {
    view! {
        <DetailDialog title=format!("User {}", item.username) rows=detail_rows(&item) on_close=on_close />
    }
}
