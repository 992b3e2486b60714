use crate::shared::resource_list::ResourceList;
use contracts::domain::common::AdminResource;
use contracts::shared::query::{StatsFilter, StatsPeriod};
use leptos::prelude::*;

/// Period (and optionally role) selector above the stats cards.
///
/// Only the stats request is reissued; the list query is untouched.
#[component]
pub fn StatsFilterBar<R: AdminResource>(
    list: ResourceList<R>,
    /// `(wire value, label)` pairs; omitted when the resource has no roles
    #[prop(optional)]
    roles: Option<Vec<(&'static str, &'static str)>>,
) -> impl IntoView {
    let core = list.core;

    let current_period = move || {
        core.with(|c| c.stats_filter().period.unwrap_or(StatsPeriod::All.as_str()))
    };
    let current_role = move || core.with(|c| c.stats_filter().role.clone().unwrap_or_default());

    let on_period = move |ev| {
        let period = StatsPeriod::parse(&event_target_value(&ev));
        let role = core.with_untracked(|c| c.stats_filter().role.clone());
        list.set_stats_filter(StatsFilter::default().with_period(period).with_role(role));
    };

    let on_role = move |ev| {
        let value = event_target_value(&ev);
        let role = (!value.is_empty()).then_some(value);
        let filter = core.with_untracked(|c| c.stats_filter().clone());
        list.set_stats_filter(filter.with_role(role));
    };

    view! {
        <div class="stats-filter">
            <select class="form__select stats-filter__period" on:change=on_period>
                {StatsPeriod::ALL
                    .into_iter()
                    .map(|period| {
                        view! {
                            <option
                                value=period.as_str()
                                selected=move || current_period() == period.as_str()
                            >
                                {period.label()}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
            {roles.map(|roles| view! {
                <select class="form__select stats-filter__role" on:change=on_role>
                    <option value="" selected=move || current_role().is_empty()>
                        "All roles"
                    </option>
                    {roles
                        .into_iter()
                        .map(|(value, label)| {
                            view! {
                                <option value=value selected=move || current_role() == value>
                                    {label}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            })}
        </div>
    }
}
