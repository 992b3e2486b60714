use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::icons::icon;
use crate::shared::resource_list::ResourceList;
use contracts::domain::common::{AdminResource, ResourceStatus};
use contracts::shared::query::StatusFilter;
use leptos::prelude::*;
use thaw::*;

/// Collapsible filter panel of a list page: search, status filter,
/// pagination and refresh.
#[component]
pub fn FilterPanel<R: AdminResource>(
    list: ResourceList<R>,

    #[prop(into, optional)]
    search_placeholder: Option<String>,

    /// Extra filter fields rendered after the status select
    #[prop(optional)]
    extra_filters: Option<ChildrenFn>,
) -> impl IntoView {
    let is_expanded = RwSignal::new(true);
    let core = list.core;
    let config = list.config();
    let search_placeholder = search_placeholder.unwrap_or_else(|| "Search...".to_string());

    let active_filters_count = Signal::derive(move || {
        core.with(|c| {
            let q = c.query();
            usize::from(!q.search().is_empty()) + usize::from(q.status() != StatusFilter::All)
        })
    });
    let loading = Signal::derive(move || {
        core.with(|c| c.list_slot().is_loading() || c.stats_slot().is_loading())
    });

    view! {
        <div class="filter-panel">
            <div class="filter-panel-header">
                <div
                    class="filter-panel-header__left"
                    on:click=move |_| is_expanded.update(|e| *e = !*e)
                >
                    <span class=move || {
                        if is_expanded.get() {
                            "filter-panel__chevron filter-panel__chevron--expanded"
                        } else {
                            "filter-panel__chevron"
                        }
                    }>
                        {icon("chevron-down")}
                    </span>
                    {icon("search")}
                    <span class="filter-panel__title">"Filters"</span>
                    {move || {
                        let count = active_filters_count.get();
                        (count > 0).then(|| view! { <span class="badge badge--primary">{count}</span> })
                    }}
                </div>

                <div class="filter-panel-header__center">
                    <PaginationControls
                        current_page=Signal::derive(move || core.with(|c| c.page().page()))
                        total_pages=Signal::derive(move || core.with(|c| c.page().total_pages()))
                        total_count=Signal::derive(move || core.with(|c| c.page().total()))
                        page_size=Signal::derive(move || core.with(|c| c.query().page_size()))
                        on_page_change=Callback::new(move |page| list.set_page(page))
                        on_page_size_change=Callback::new(move |size| list.set_page_size(size))
                        page_size_options=config.list.page_size_options.clone()
                    />
                    <span class="pagination-range">
                        {move || {
                            core.with(|c| {
                                c.page()
                                    .visible_range()
                                    .map(|(first, last)| {
                                        format!("Showing {}-{} of {}", first, last, c.page().total())
                                    })
                                    .unwrap_or_default()
                            })
                        }}
                    </span>
                </div>

                <div class="filter-panel-header__right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| list.refresh()
                        disabled=loading
                    >
                        {icon("refresh")}
                        {move || if loading.get() { " Loading..." } else { " Refresh" }}
                    </Button>
                </div>
            </div>

            <div class=move || {
                if is_expanded.get() {
                    "filter-panel__collapsible filter-panel__collapsible--expanded"
                } else {
                    "filter-panel__collapsible filter-panel__collapsible--collapsed"
                }
            }>
                <div class="filter-panel-content">
                    <Flex gap=FlexGap::Small align=FlexAlign::End>
                        <div style="flex: 1; max-width: 360px;">
                            <Flex vertical=true gap=FlexGap::Small>
                                <Label>"Search:"</Label>
                                <Input value=list.search_input placeholder=search_placeholder />
                            </Flex>
                        </div>
                        <Flex vertical=true gap=FlexGap::Small>
                            <Label>"Status:"</Label>
                            <select
                                class="filter-select"
                                on:change=move |ev| {
                                    list.set_status_filter(StatusFilter::from_option_value(&event_target_value(&ev)));
                                }
                                prop:value=move || core.with(|c| c.query().status().as_option_value())
                            >
                                <option value="all">"All statuses"</option>
                                {R::Status::ALL.iter().map(|status| {
                                    view! { <option value=status.as_str()>{status.label()}</option> }
                                }).collect_view()}
                            </select>
                        </Flex>
                        {extra_filters.as_ref().map(|extra| extra())}
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| list.reset_filters()
                            disabled=Signal::derive(move || active_filters_count.get() == 0)
                        >
                            "Reset"
                        </Button>
                    </Flex>

                    {move || {
                        let status = core.with(|c| c.query().status());
                        match status {
                            StatusFilter::All => None,
                            StatusFilter::Only(s) => Some(view! {
                                <div class="filter-tags">
                                    <FilterTag
                                        label=status_tag(s)
                                        on_remove=Callback::new(move |_| list.set_status_filter(StatusFilter::All))
                                    />
                                </div>
                            }),
                        }
                    }}
                </div>
            </div>
        </div>
    }
}

fn status_tag<S: ResourceStatus>(status: S) -> String {
    format!("Status: {}", status.label())
}

/// FilterTag component - individual filter tag/chip
#[component]
pub fn FilterTag(
    /// Tag label
    #[prop(into)]
    label: String,

    /// Callback when remove is clicked
    on_remove: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="filter-tag">
            <span>{label}</span>
            <span
                class="filter-tag__remove"
                on:click=move |e| {
                    e.stop_propagation();
                    on_remove.run(());
                }
            >
                {icon("x")}
            </span>
        </div>
    }
}
