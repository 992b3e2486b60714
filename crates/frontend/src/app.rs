use crate::layout::global_context::AppGlobalContext;
use crate::layout::left::Sidebar;
use crate::layout::Shell;
use crate::shared::config::load_config;
use crate::shared::toast::{ToastHost, ToastService};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = load_config();
    let toast_ms = config.ui.toast_ms;

    provide_context(StoredValue::new(config));
    provide_context(ToastService::new(toast_ms));

    let ctx = AppGlobalContext::new();
    ctx.init_url_sync();
    provide_context(ctx);

    view! {
        <Shell left=|| view! { <Sidebar /> }.into_any() />
        <ToastHost />
    }
}
