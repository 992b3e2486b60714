use crate::domain::a001_affiliate::ui::AffiliatesPage;
use crate::domain::a002_withdrawal::ui::WithdrawalsPage;
use crate::domain::a003_cancel_request::ui::CancelRequestsPage;
use crate::domain::a004_user::ui::UsersPage;
use crate::domain::a005_moderator::ui::ModeratorsPage;
use crate::domain::a006_service::ui::ServicesPage;
use crate::layout::global_context::{AdminSection, AppGlobalContext};
use crate::usecases::u501_service_import::ServiceImportPage;
use leptos::prelude::*;

/// Renders the active section. Switching sections unmounts the previous
/// page, so each page starts from a fresh list state.
#[component]
pub fn Center() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    view! {
        <div data-zone="center" class="app-content" style="flex: 1; overflow: auto;">
            {move || match ctx.active.get() {
                AdminSection::Affiliates => view! { <AffiliatesPage /> }.into_any(),
                AdminSection::Withdrawals => view! { <WithdrawalsPage /> }.into_any(),
                AdminSection::CancelRequests => view! { <CancelRequestsPage /> }.into_any(),
                AdminSection::Users => view! { <UsersPage /> }.into_any(),
                AdminSection::Moderators => view! { <ModeratorsPage /> }.into_any(),
                AdminSection::Services => view! { <ServicesPage /> }.into_any(),
                AdminSection::ServiceImport => view! { <ServiceImportPage /> }.into_any(),
            }}
        </div>
    }
}
