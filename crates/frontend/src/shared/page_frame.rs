//! PageFrame: standard root wrapper for every admin section.
//!
//! Puts `id="{entity}--{category}"` and `data-page-category` on the root
//! element, e.g. `id="a002_withdrawal--list"`, so a DOM id leads straight to
//! the `domain/a002_withdrawal/` directory.

use leptos::prelude::*;

/// List of records with filters and pagination.
pub const PAGE_CAT_LIST: &str = "list";

/// Use-case wizard such as the service import.
pub const PAGE_CAT_USECASE: &str = "usecase";

#[component]
pub fn PageFrame(
    /// HTML id in format `{entity}--{category}`
    page_id: &'static str,
    /// One of the PAGE_CAT_* constants
    category: &'static str,
    children: Children,
) -> impl IntoView {
    let class = match category {
        PAGE_CAT_USECASE => "page page--usecase",
        _ => "page",
    };

    view! {
        <div id=page_id class=class data-page-category=category>
            {children()}
        </div>
    }
}

/// Title row with the total count badge.
#[component]
pub fn PageHeader(
    #[prop(into)] title: String,
    #[prop(into, optional)] count: Option<Signal<u64>>,
) -> impl IntoView {
    view! {
        <div class="page__header">
            <div class="page__header-left">
                <h1 class="page__title">{title}</h1>
                {count.map(|count| view! {
                    <span class="badge badge--primary">{move || count.get().to_string()}</span>
                })}
            </div>
        </div>
    }
}
