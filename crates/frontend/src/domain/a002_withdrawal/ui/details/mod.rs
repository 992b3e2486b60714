use crate::shared::components::table::format_usd;
use crate::shared::date_utils::{format_datetime, format_optional_datetime};
use crate::shared::detail_dialog::{opt_text, DetailDialog, DetailRow};
use contracts::domain::a002_withdrawal::Withdrawal;
use contracts::domain::common::ResourceStatus;
use leptos::prelude::*;

fn detail_rows(w: &Withdrawal) -> Vec<DetailRow> {
    vec![
        ("User", w.username.clone()),
        ("Email", opt_text(&w.email)),
        ("User ID", opt_text(&w.user_id)),
        ("Amount", format_usd(w.amount)),
        ("Method", w.method.clone()),
        ("Account details", opt_text(&w.account_details)),
        ("Status", w.status.label().to_string()),
        ("Transaction ID", opt_text(&w.transaction_id)),
        ("Admin notes", opt_text(&w.admin_notes)),
        ("Rejection reason", opt_text(&w.rejection_reason)),
        ("Requested", format_datetime(&w.created_at)),
        ("Processed", format_optional_datetime(w.processed_at.as_ref())),
    ]
}

#[component]
pub fn WithdrawalDetails(item: Withdrawal, on_close: Callback<()>) -> impl IntoView {
    view! {
        <DetailDialog
            title=format!("Withdrawal of {}", item.username)
            rows=detail_rows(&item)
            on_close=on_close
        />
    }
}
