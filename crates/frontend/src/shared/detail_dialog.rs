use crate::shared::modal::Modal;
use leptos::prelude::*;
use thaw::*;

/// One labelled value of a detail dialog.
pub type DetailRow = (&'static str, String);

/// Read-only field list of one record.
#[component]
pub fn DetailDialog(
    #[prop(into)] title: String,
    rows: Vec<DetailRow>,
    on_close: Callback<()>,
) -> impl IntoView {
    let footer: ChildrenFn = std::sync::Arc::new(move || {
        view! {
            <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                "Close"
            </Button>
        }
        .into_any()
    });

    view! {
        <Modal title=title on_close=on_close footer=footer>
            <dl class="detail-list">
                {rows
                    .into_iter()
                    .map(|(label, value)| {
                        let value = if value.is_empty() { "—".to_string() } else { value };
                        view! {
                            <dt class="detail-list__label">{label}</dt>
                            <dd class="detail-list__value">{value}</dd>
                        }
                    })
                    .collect_view()}
            </dl>
        </Modal>
    }
}

/// `Some` text or an empty string, which the dialog renders as a dash.
pub fn opt_text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}
