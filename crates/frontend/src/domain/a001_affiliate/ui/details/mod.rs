use crate::shared::components::table::{format_count, format_percent, format_usd};
use crate::shared::date_utils::{format_datetime, format_optional_datetime};
use crate::shared::detail_dialog::{opt_text, DetailDialog, DetailRow};
use contracts::domain::a001_affiliate::Affiliate;
use contracts::domain::common::ResourceStatus;
use leptos::prelude::*;

fn detail_rows(a: &Affiliate) -> Vec<DetailRow> {
    vec![
        ("Username", a.username.clone()),
        ("Email", a.email.clone()),
        ("Referral code", a.referral_code.clone()),
        ("Status", a.status.label().to_string()),
        ("Commission rate", format_percent(a.commission_rate)),
        ("Referrals", format_count(a.total_referrals)),
        ("Total earnings", format_usd(a.total_earnings)),
        ("Available balance", format_usd(a.available_balance)),
        ("Paid out", format_usd(a.total_paid_out)),
        ("Payment method", opt_text(&a.payment_method)),
        ("Payment details", opt_text(&a.payment_details)),
        ("Joined", format_datetime(&a.created_at)),
        ("Last activity", format_optional_datetime(a.last_activity_at.as_ref())),
    ]
}

#[component]
pub fn AffiliateDetails(item: Affiliate, on_close: Callback<()>) -> impl IntoView {
    view! {
        <DetailDialog
            title=format!("Affiliate {}", item.username)
            rows=detail_rows(&item)
            on_close=on_close
        />
    }
}
