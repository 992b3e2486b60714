use super::api;
use crate::shared::components::table::{format_count, format_money, format_usd, TriStateCheckbox};
use crate::shared::config::use_config;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PageHeader, PAGE_CAT_USECASE};
use crate::shared::toast::use_toasts;
use contracts::shared::selection::CheckState;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u501_service_import::{
    ImportDraft, ImportStep, ImportWizard, ProviderInfo, ProviderService, ServiceImport,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Category with its rows, cloned out of the draft for rendering.
type GroupRows = (String, Vec<ProviderService>);

fn draft_groups<F>(draft: &ImportDraft, keep: F) -> Vec<GroupRows>
where
    F: Fn(&ProviderService) -> bool,
{
    draft
        .groups()
        .into_iter()
        .map(|g| {
            let rows: Vec<ProviderService> =
                g.items.into_iter().filter(|s| keep(s)).cloned().collect();
            (g.category, rows)
        })
        .filter(|(_, rows)| !rows.is_empty())
        .collect()
}

fn step_class(step: ImportStep, current: ImportStep) -> &'static str {
    if step == current {
        "wizard__step wizard__step--active"
    } else if step.number() < current.number() {
        "wizard__step wizard__step--done"
    } else {
        "wizard__step"
    }
}

/// Reads a draft value, falling back when no services are loaded.
fn with_draft<T>(wizard: RwSignal<ImportWizard>, fallback: T, f: impl FnOnce(&ImportDraft) -> T) -> T {
    wizard.with(|w| w.draft().map(f).unwrap_or(fallback))
}

fn edit_draft(wizard: RwSignal<ImportWizard>, f: impl FnOnce(&mut ImportDraft)) {
    wizard.update(|w| {
        if let Some(draft) = w.draft_mut() {
            f(draft);
        }
    });
}

fn parse_percent(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

#[component]
pub fn ServiceImportPage() -> impl IntoView {
    let config = use_config();
    let toasts = use_toasts();
    let api_config = StoredValue::new(config.api.clone());
    let wizard = RwSignal::new(ImportWizard::new(config.ui.default_profit_percent));

    let providers = RwSignal::new(Vec::<ProviderInfo>::new());
    let providers_loading = RwSignal::new(true);
    // Provider whose services are being fetched.
    let loading_for = RwSignal::new(None::<String>);
    let importing = RwSignal::new(false);

    Effect::new(move |_| {
        spawn_local(async move {
            let config = api_config.get_value();
            match api::fetch_providers(&config).await {
                Ok(list) => {
                    log::debug!("Loaded {} providers", list.len());
                    providers.set(list);
                }
                Err(e) => {
                    log::warn!("Failed to load providers: {}", e);
                    toasts.error(e.user_message());
                }
            }
            providers_loading.set(false);
        });
    });

    let pick_provider = Callback::new(move |provider: ProviderInfo| {
        let provider_id = provider.id.clone();
        let has_services = wizard.with_untracked(|w| {
            w.provider().map(|p| p.id == provider_id) == Some(true) && w.draft().is_some()
        });
        wizard.update(|w| w.select_provider(provider));
        if has_services {
            return;
        }

        loading_for.set(Some(provider_id.clone()));
        spawn_local(async move {
            let config = api_config.get_value();
            let result = api::fetch_provider_services(&config, &provider_id).await;
            if loading_for.get_untracked().as_deref() == Some(provider_id.as_str()) {
                loading_for.set(None);
            }
            match result {
                Ok(services) => {
                    let count = services.len();
                    let applied = wizard
                        .try_update(|w| w.services_loaded(&provider_id, services))
                        .unwrap_or(false);
                    if applied {
                        log::debug!("Loaded {} services of provider {}", count, provider_id);
                    } else {
                        log::debug!("Discarded services of provider {}", provider_id);
                    }
                }
                Err(e) => {
                    log::warn!("Failed to load services of provider {}: {}", provider_id, e);
                    toasts.error(e.user_message());
                }
            }
        });
    });

    let submit = move |_| {
        if importing.get_untracked() {
            return;
        }
        let request = match wizard.with_untracked(|w| w.import_request()) {
            Ok(request) => request,
            Err(e) => {
                toasts.error(e.to_string());
                return;
            }
        };

        importing.set(true);
        spawn_local(async move {
            let config = api_config.get_value();
            let result = api::import_services(&config, &request).await;
            importing.set(false);
            match result {
                Ok(result) => {
                    log::info!(
                        "Imported {} services from provider {} ({} skipped)",
                        result.imported,
                        request.provider_id,
                        result.skipped
                    );
                    toasts.success(format!("Imported {} services", result.imported));
                    wizard.update(|w| w.finish(result));
                }
                Err(e) => {
                    log::error!("Service import failed: {}", e);
                    toasts.error(e.user_message());
                }
            }
        });
    };

    // Step bodies re-render on step changes only, so inputs keep focus while editing.
    let step = Memo::new(move |_| wizard.with(|w| w.step()));
    let can_advance = Signal::derive(move || wizard.with(|w| w.can_advance()));
    let selected = Signal::derive(move || with_draft(wizard, 0, |d| d.selected_count()));

    let body = move || match step.get() {
        ImportStep::SelectProvider => view! {
            <ProviderStep
                wizard=wizard
                providers=providers
                providers_loading=providers_loading
                loading_for=loading_for
                on_pick=pick_provider
            />
        }
        .into_any(),
        ImportStep::SelectServices => view! { <ServicesStep wizard=wizard /> }.into_any(),
        ImportStep::Pricing => view! { <PricingStep wizard=wizard /> }.into_any(),
        ImportStep::Review => view! { <ReviewStep wizard=wizard /> }.into_any(),
        ImportStep::Done => view! { <DoneStep wizard=wizard /> }.into_any(),
    };

    view! {
        <PageFrame page_id="u501_service_import--usecase" category=PAGE_CAT_USECASE>
            <PageHeader title=ServiceImport::display_name() />
            <p class="page__description">{ServiceImport::description()}</p>

            <ol class="wizard__steps">
                {ImportStep::ALL
                    .iter()
                    .copied()
                    .map(|s| {
                        view! {
                            <li class=move || step_class(s, step.get())>
                                <span class="wizard__step-number">{s.number()}</span>
                                <span class="wizard__step-title">{s.title()}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>

            <div class="wizard__body">{body}</div>

            <Show when=move || step.get() != ImportStep::Done>
                <div class="wizard__footer">
                    <span class="wizard__counter">
                        {move || format!("{} selected", format_count(selected.get() as u64))}
                    </span>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        disabled=Signal::derive(move || {
                            step.get() == ImportStep::SelectProvider || importing.get()
                        })
                        on_click=move |_| {
                            wizard.update(|w| {
                                w.back();
                            });
                        }
                    >
                        "Back"
                    </Button>
                    <Show
                        when=move || step.get() == ImportStep::Review
                        fallback=move || {
                            view! {
                                <Button
                                    appearance=ButtonAppearance::Primary
                                    disabled=Signal::derive(move || !can_advance.get())
                                    on_click=move |_| {
                                        wizard.update(|w| {
                                            w.next();
                                        });
                                    }
                                >
                                    "Next"
                                </Button>
                            }
                        }
                    >
                        <Button
                            appearance=ButtonAppearance::Primary
                            disabled=Signal::derive(move || importing.get() || selected.get() == 0)
                            on_click=submit
                        >
                            {move || if importing.get() { "Importing..." } else { "Import" }}
                        </Button>
                    </Show>
                </div>
            </Show>
        </PageFrame>
    }
}

#[component]
fn ProviderStep(
    wizard: RwSignal<ImportWizard>,
    providers: RwSignal<Vec<ProviderInfo>>,
    providers_loading: RwSignal<bool>,
    loading_for: RwSignal<Option<String>>,
    on_pick: Callback<ProviderInfo>,
) -> impl IntoView {
    view! {
        <Show when=move || !providers_loading.get() && providers.with(|p| p.is_empty())>
            <div class="list-placeholder">"No providers configured"</div>
        </Show>
        <Show when=move || providers_loading.get()>
            <div class="list-placeholder">
                <Spinner size=SpinnerSize::Small />
                "Loading providers..."
            </div>
        </Show>
        <div class="provider-list">
            <For
                each=move || providers.get()
                key=|p| p.id.clone()
                children=move |provider: ProviderInfo| {
                    let id = provider.id.clone();
                    let is_selected = move || {
                        wizard.with(|w| w.provider().map(|p| p.id == id) == Some(true))
                    };
                    let count = provider
                        .services_count
                        .map(|c| format!("{} services", format_count(c)))
                        .unwrap_or_default();
                    let balance = provider
                        .balance
                        .map(|b| {
                            format!(
                                "Balance {} {}",
                                format_money(b),
                                provider.currency.clone().unwrap_or_default()
                            )
                        })
                        .unwrap_or_default();
                    let name = provider.name.clone();

                    view! {
                        <button
                            class=move || {
                                if is_selected() {
                                    "provider-card provider-card--selected"
                                } else {
                                    "provider-card"
                                }
                            }
                            on:click=move |_| on_pick.run(provider.clone())
                        >
                            <span class="provider-card__name">{name}</span>
                            <span class="provider-card__meta">{count}</span>
                            <span class="provider-card__meta">{balance}</span>
                        </button>
                    }
                }
            />
        </div>
        {move || {
            loading_for
                .get()
                .map(|_| {
                    view! {
                        <div class="list-placeholder">
                            <Spinner size=SpinnerSize::Small />
                            "Loading services..."
                        </div>
                    }
                })
        }}
        {move || {
            with_draft(wizard, None, |d| Some(d.services().len()))
                .map(|n| {
                    view! {
                        <div class="form-hint">
                            {format!("{} services available", format_count(n as u64))}
                        </div>
                    }
                })
        }}
    }
}

/// Category header with a group checkbox and collapse toggle.
#[component]
fn CategoryHeader(
    wizard: RwSignal<ImportWizard>,
    category: StoredValue<String>,
    count: usize,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let is_collapsed = move || with_draft(wizard, false, |d| category.with_value(|c| d.is_collapsed(c)));
    let state = Signal::derive(move || {
        with_draft(wizard, CheckState::Unchecked, |d| {
            category.with_value(|c| d.category_state(c))
        })
    });

    view! {
        <div class="import-group__header">
            <TriStateCheckbox
                state=state
                on_toggle=Callback::new(move |_| {
                    edit_draft(wizard, |d| category.with_value(|c| d.toggle_category(c)))
                })
            />
            <div
                class="import-group__title"
                on:click=move |_| edit_draft(wizard, |d| category.with_value(|c| d.toggle_collapsed(c)))
            >
                {move || if is_collapsed() { icon("folder-closed") } else { icon("folder-open") }}
                <span>{category.get_value()}</span>
                <span class="badge badge--neutral">{count}</span>
            </div>
            {children.map(|c| c())}
        </div>
    }
}

fn collapse_controls(wizard: RwSignal<ImportWizard>) -> impl IntoView {
    view! {
        <Button
            appearance=ButtonAppearance::Transparent
            size=ButtonSize::Small
            on_click=move |_| edit_draft(wizard, |d| d.expand_all())
        >
            "Expand all"
        </Button>
        <Button
            appearance=ButtonAppearance::Transparent
            size=ButtonSize::Small
            on_click=move |_| edit_draft(wizard, |d| d.collapse_all())
        >
            "Collapse all"
        </Button>
    }
}

#[component]
fn ServicesStep(wizard: RwSignal<ImportWizard>) -> impl IntoView {
    let groups = move || wizard.with(|w| w.draft().map(|d| draft_groups(d, |_| true)).unwrap_or_default());
    let all_state = Signal::derive(move || with_draft(wizard, CheckState::Unchecked, |d| d.all_state()));

    view! {
        <div class="table__toolbar">
            <label class="import-select-all">
                <TriStateCheckbox
                    state=all_state
                    on_toggle=Callback::new(move |_| edit_draft(wizard, |d| d.toggle_all()))
                />
                "Select all"
            </label>
            {collapse_controls(wizard)}
        </div>
        <For
            each=groups
            key=|(category, _)| category.clone()
            children=move |(category, rows): GroupRows| {
                let count = rows.len();
                let rows = StoredValue::new(rows);
                let category = StoredValue::new(category);
                let is_collapsed = move || {
                    with_draft(wizard, false, |d| category.with_value(|c| d.is_collapsed(c)))
                };

                view! {
                    <div class="import-group">
                        <CategoryHeader wizard=wizard category=category count=count />
                        <Show when=move || !is_collapsed()>
                            <Table attr:style="width: 100%;">
                                <TableBody>
                                    {rows.with_value(|rows| rows
                                        .iter()
                                        .cloned()
                                        .map(|service| select_row(wizard, service))
                                        .collect_view())}
                                </TableBody>
                            </Table>
                        </Show>
                    </div>
                }
            }
        />
    }
}

fn select_row(wizard: RwSignal<ImportWizard>, service: ProviderService) -> impl IntoView {
    let id = StoredValue::new(service.id.clone());
    let checked = move || with_draft(wizard, false, |d| id.with_value(|id| d.is_selected(id)));
    let limits = format!("{} - {}", format_count(service.min), format_count(service.max));

    view! {
        <TableRow>
            <TableCell class="fixed-checkbox-column">
                <input
                    type="checkbox"
                    class="table__checkbox"
                    prop:checked=checked
                    on:change=move |ev| {
                        let value = event_target_checked(&ev);
                        edit_draft(wizard, |d| id.with_value(|id| d.set_selected(id, value)));
                    }
                />
            </TableCell>
            <TableCell>
                <TableCellLayout truncate=true>
                    <div class="cell-stack">
                        <span class="cell-stack__main">{service.name.clone()}</span>
                        <span class="cell-stack__sub">{service.description.clone().unwrap_or_default()}</span>
                    </div>
                </TableCellLayout>
            </TableCell>
            <TableCell>{service.service_type.clone().unwrap_or_default()}</TableCell>
            <TableCell class="table__cell--numeric">{format_usd(service.rate)}</TableCell>
            <TableCell class="table__cell--numeric">{limits}</TableCell>
        </TableRow>
    }
}

#[component]
fn PricingStep(wizard: RwSignal<ImportWizard>) -> impl IntoView {
    let groups = move || {
        wizard.with(|w| {
            w.draft()
                .map(|d| draft_groups(d, |s| d.is_selected(&s.id)))
                .unwrap_or_default()
        })
    };

    view! {
        <div class="table__toolbar">{collapse_controls(wizard)}</div>
        <For
            each=groups
            key=|(category, rows)| format!("{}:{}", category, rows.len())
            children=move |(category, rows): GroupRows| {
                let count = rows.len();
                let rows = StoredValue::new(rows);
                let category = StoredValue::new(category);
                let is_collapsed = move || {
                    with_draft(wizard, false, |d| category.with_value(|c| d.is_collapsed(c)))
                };
                let category_percent = move || {
                    with_draft(wizard, 0.0, |d| category.with_value(|c| d.category_percent(c)))
                };

                view! {
                    <div class="import-group">
                        <CategoryHeader wizard=wizard category=category count=count>
                            <label class="import-group__percent">
                                "Category profit %"
                                <input
                                    class="form__input form__input--narrow"
                                    type="number"
                                    min="0"
                                    step="0.1"
                                    prop:value=move || category_percent().to_string()
                                    on:change=move |ev| {
                                        if let Some(pct) = parse_percent(&event_target_value(&ev)) {
                                            edit_draft(wizard, |d| {
                                                category.with_value(|c| d.set_category_percent(c, pct))
                                            });
                                        }
                                    }
                                />
                            </label>
                        </CategoryHeader>
                        <Show when=move || !is_collapsed()>
                            <Table attr:style="width: 100%;">
                                <TableHeader>
                                    <TableRow>
                                        <TableHeaderCell resizable=false>"Name"</TableHeaderCell>
                                        <TableHeaderCell resizable=false>"Description"</TableHeaderCell>
                                        <TableHeaderCell resizable=false class="table__cell--numeric">"Cost"</TableHeaderCell>
                                        <TableHeaderCell resizable=false class="table__cell--numeric">"Profit %"</TableHeaderCell>
                                        <TableHeaderCell resizable=false class="table__cell--numeric">"Sale price"</TableHeaderCell>
                                        <TableHeaderCell resizable=false class="table__actions-column">""</TableHeaderCell>
                                    </TableRow>
                                </TableHeader>
                                <TableBody>
                                    {rows.with_value(|rows| rows
                                        .iter()
                                        .cloned()
                                        .map(|service| pricing_row(wizard, service))
                                        .collect_view())}
                                </TableBody>
                            </Table>
                        </Show>
                    </div>
                }
            }
        />
    }
}

fn pricing_row(wizard: RwSignal<ImportWizard>, service: ProviderService) -> impl IntoView {
    let id = StoredValue::new(service.id.clone());
    let name = move || {
        with_draft(wizard, String::new(), |d| {
            id.with_value(|id| d.current_name(id).unwrap_or_default().to_string())
        })
    };
    let description = move || {
        with_draft(wizard, String::new(), |d| {
            id.with_value(|id| d.current_description(id).unwrap_or_default().to_string())
        })
    };
    let percent = move || with_draft(wizard, 0.0, |d| id.with_value(|id| d.profit_percent(id)));
    let price = move || {
        with_draft(wizard, None, |d| id.with_value(|id| d.sale_price(id)))
            .map(format_usd)
            .unwrap_or_default()
    };
    let edited = Signal::derive(move || {
        with_draft(wizard, false, |d| id.with_value(|id| d.override_for(id).is_some()))
    });

    view! {
        <TableRow class=Signal::derive(move || {
            if edited.get() { "table__row--edited".to_string() } else { String::new() }
        })>
            <TableCell>
                <input
                    class="form__input"
                    type="text"
                    prop:value=name
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        edit_draft(wizard, |d| id.with_value(|id| d.set_name(id, &value)));
                    }
                />
            </TableCell>
            <TableCell>
                <input
                    class="form__input"
                    type="text"
                    prop:value=description
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        edit_draft(wizard, |d| id.with_value(|id| d.set_description(id, &value)));
                    }
                />
            </TableCell>
            <TableCell class="table__cell--numeric">{format_usd(service.rate)}</TableCell>
            <TableCell class="table__cell--numeric">
                <input
                    class="form__input form__input--narrow"
                    type="number"
                    min="0"
                    step="0.1"
                    prop:value=move || percent().to_string()
                    on:change=move |ev| {
                        if let Some(pct) = parse_percent(&event_target_value(&ev)) {
                            edit_draft(wizard, |d| id.with_value(|id| d.set_profit_percent(id, pct)));
                        }
                    }
                />
            </TableCell>
            <TableCell class="table__cell--numeric">{price}</TableCell>
            <TableCell class="table__actions-column">
                <button
                    class="button button--icon"
                    title="Revert to provider values"
                    disabled=move || !edited.get()
                    on:click=move |_| edit_draft(wizard, |d| id.with_value(|id| d.revert(id)))
                >
                    {icon("refresh")}
                </button>
            </TableCell>
        </TableRow>
    }
}

#[component]
fn ReviewStep(wizard: RwSignal<ImportWizard>) -> impl IntoView {
    let request = wizard.with_untracked(|w| w.import_request());
    let provider = wizard.with_untracked(|w| w.provider().map(|p| p.name.clone()).unwrap_or_default());

    match request {
        Err(e) => view! { <div class="alert alert--error">{e.to_string()}</div> }.into_any(),
        Ok(request) => {
            let total_cost: f64 = request.services.iter().map(|s| s.provider_rate).sum();
            let total_sale: f64 = request.services.iter().map(|s| s.rate).sum();
            let summary = format!(
                "{} services from {}, cost {}, sale {}",
                format_count(request.services.len() as u64),
                provider,
                format_usd(total_cost),
                format_usd(total_sale)
            );

            view! {
                <div class="wizard__summary">{summary}</div>
                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell resizable=false>"Name"</TableHeaderCell>
                            <TableHeaderCell resizable=false>"Category"</TableHeaderCell>
                            <TableHeaderCell resizable=false class="table__cell--numeric">"Cost"</TableHeaderCell>
                            <TableHeaderCell resizable=false class="table__cell--numeric">"Profit %"</TableHeaderCell>
                            <TableHeaderCell resizable=false class="table__cell--numeric">"Sale price"</TableHeaderCell>
                            <TableHeaderCell resizable=false class="table__cell--numeric">"Min - max"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {request
                            .services
                            .into_iter()
                            .map(|item| {
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout truncate=true>{item.name}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>{item.category}</TableCell>
                                        <TableCell class="table__cell--numeric">{format_usd(item.provider_rate)}</TableCell>
                                        <TableCell class="table__cell--numeric">{format!("{}%", format_money(item.profit_percent))}</TableCell>
                                        <TableCell class="table__cell--numeric">{format_usd(item.rate)}</TableCell>
                                        <TableCell class="table__cell--numeric">
                                            {format!("{} - {}", format_count(item.min), format_count(item.max))}
                                        </TableCell>
                                    </TableRow>
                                }
                            })
                            .collect_view()}
                    </TableBody>
                </Table>
            }
            .into_any()
        }
    }
}

#[component]
fn DoneStep(wizard: RwSignal<ImportWizard>) -> impl IntoView {
    let result = wizard.with_untracked(|w| w.result().cloned()).unwrap_or_default();

    view! {
        <div class="wizard__result">
            <div class="wizard__result-line">
                {icon("check")}
                {format!("Imported: {}", format_count(result.imported))}
            </div>
            <div class="wizard__result-line">{format!("Skipped: {}", format_count(result.skipped))}</div>
            {(!result.errors.is_empty())
                .then(|| {
                    view! {
                        <div class="alert alert--error">
                            <ul>
                                {result
                                    .errors
                                    .into_iter()
                                    .map(|e| view! { <li>{e}</li> })
                                    .collect_view()}
                            </ul>
                        </div>
                    }
                })}
            <Button appearance=ButtonAppearance::Primary on_click=move |_| wizard.update(|w| w.reset())>
                "Import more"
            </Button>
        </div>
    }
}
