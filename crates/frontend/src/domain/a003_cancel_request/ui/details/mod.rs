use crate::shared::components::table::format_usd;
use crate::shared::date_utils::{format_datetime, format_optional_datetime};
use crate::shared::detail_dialog::{opt_text, DetailDialog, DetailRow};
use contracts::domain::a003_cancel_request::CancelRequest;
use contracts::domain::common::ResourceStatus;
use leptos::prelude::*;

fn detail_rows(r: &CancelRequest) -> Vec<DetailRow> {
    vec![
        ("Order", format!("#{}", r.order_id)),
        ("User", r.username.clone()),
        ("Service", opt_text(&r.service_name)),
        ("Link", opt_text(&r.link)),
        ("Quantity", r.quantity.map(|q| q.to_string()).unwrap_or_default()),
        ("Charge", format_usd(r.charge)),
        ("Reason", opt_text(&r.reason)),
        ("Status", r.status.label().to_string()),
        ("Refund", r.refund_amount.map(format_usd).unwrap_or_default()),
        ("Transaction ID", opt_text(&r.transaction_id)),
        ("Admin notes", opt_text(&r.admin_notes)),
        ("Decline reason", opt_text(&r.decline_reason)),
        ("Requested", format_datetime(&r.created_at)),
        ("Processed", format_optional_datetime(r.processed_at.as_ref())),
    ]
}

#[component]
pub fn CancelRequestDetails(item: CancelRequest, on_close: Callback<()>) -> impl IntoView {
    view! {
        <DetailDialog
            title=format!("Cancel request for order #{}", item.order_id)
            rows=detail_rows(&item)
            on_close=on_close
        />
    }
}
