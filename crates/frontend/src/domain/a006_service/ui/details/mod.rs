use crate::shared::components::table::{format_count, format_percent, format_usd};
use crate::shared::date_utils::{format_datetime, format_optional_datetime};
use crate::shared::detail_dialog::{opt_text, DetailDialog, DetailRow};
use contracts::domain::a006_service::Service;
use contracts::domain::common::ResourceStatus;
use leptos::prelude::*;

fn detail_rows(s: &Service) -> Vec<DetailRow> {
    vec![
        ("Name", s.name.clone()),
        ("Category", s.category.clone()),
        ("Description", opt_text(&s.description)),
        ("Status", s.status.label().to_string()),
        ("Provider", opt_text(&s.provider_name)),
        ("Provider service ID", opt_text(&s.provider_service_id)),
        ("Provider rate / 1000", format_usd(s.provider_rate)),
        ("Rate / 1000", format_usd(s.rate)),
        ("Margin", s.margin_percent().map(format_percent).unwrap_or_default()),
        ("Min order", format_count(s.min)),
        ("Max order", format_count(s.max)),
        ("Created", format_datetime(&s.created_at)),
        ("Updated", format_optional_datetime(s.updated_at.as_ref())),
    ]
}

#[component]
pub fn ServiceDetails(item: Service, on_close: Callback<()>) -> impl IntoView {
    view! {
        <DetailDialog title=item.name.clone() rows=detail_rows(&item) on_close=on_close />
    }
}
