use crate::shared::icons::icon;
use contracts::shared::query::PageSize;
use leptos::prelude::*;

/// PaginationControls component - first/prev/next/last plus a page-size select
///
/// Pages are 1-based. The page-size select always offers an "All" entry, which
/// the list maps to the configured cap.
#[component]
pub fn PaginationControls(
    /// Current page (1-based)
    #[prop(into)]
    current_page: Signal<u32>,

    /// Total number of pages
    #[prop(into)]
    total_pages: Signal<u32>,

    /// Total count of items
    #[prop(into)]
    total_count: Signal<u64>,

    /// Current page size
    #[prop(into)]
    page_size: Signal<PageSize>,

    /// Callback when page changes
    on_page_change: Callback<u32>,

    /// Callback when page size changes
    on_page_size_change: Callback<PageSize>,

    /// Fixed page size options
    page_size_options: Vec<u32>,
) -> impl IntoView {
    let last_page = move || total_pages.get().max(1);

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(1)
                disabled=move || current_page.get() <= 1
                title="First page"
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page > 1 {
                        on_page_change.run(page - 1);
                    }
                }
                disabled=move || current_page.get() <= 1
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || {
                    format!("{} / {} ({})", current_page.get(), last_page(), total_count.get())
                }}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page < total_pages.get() {
                        on_page_change.run(page + 1);
                    }
                }
                disabled=move || current_page.get() >= total_pages.get()
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let total = total_pages.get();
                    if total > 0 {
                        on_page_change.run(total);
                    }
                }
                disabled=move || current_page.get() >= total_pages.get()
                title="Last page"
            >
                {icon("chevrons-right")}
            </button>
            <select
                class="page-size-select"
                on:change=move |ev| {
                    if let Some(size) = PageSize::from_option_value(&event_target_value(&ev)) {
                        on_page_size_change.run(size);
                    }
                }
                prop:value=move || page_size.get().as_option_value()
            >
                {page_size_options.into_iter().map(|size| {
                    let value = PageSize::Fixed(size);
                    view! {
                        <option value=value.as_option_value() selected=move || page_size.get() == value>
                            {size.to_string()}
                        </option>
                    }
                }).collect_view()}
                <option value="all" selected=move || page_size.get() == PageSize::All>
                    "All"
                </option>
            </select>
        </div>
    }
}
