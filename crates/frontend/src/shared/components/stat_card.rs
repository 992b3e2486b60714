use crate::shared::icons::icon;
use leptos::prelude::*;

/// Colour of a stat card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatTone {
    #[default]
    Neutral,
    Success,
    Warning,
    Error,
}

#[component]
pub fn StatCard(
    /// Label displayed above the value
    #[prop(into)]
    label: String,
    /// Icon name from the icon() helper
    icon_name: &'static str,
    /// Formatted value
    #[prop(into)]
    value: Signal<String>,
    /// Shows a placeholder while the stats request is running
    #[prop(into)]
    loading: Signal<bool>,
    #[prop(optional)]
    tone: StatTone,
    /// Optional subtitle below the value
    #[prop(optional)]
    subtitle: Option<Signal<String>>,
) -> impl IntoView {
    let status_class = match tone {
        StatTone::Success => "stat-card stat-card--success",
        StatTone::Error => "stat-card stat-card--error",
        StatTone::Warning => "stat-card stat-card--warning",
        StatTone::Neutral => "stat-card",
    };

    let formatted = move || {
        if loading.get() {
            "…".to_string()
        } else {
            value.get()
        }
    };

    let subtitle_view = move || {
        subtitle.map(|s| s.get()).map(|s| {
            view! { <div class="stat-card__subtitle">{s}</div> }
        })
    };

    view! {
        <div class=status_class>
            <div class="stat-card__icon">
                {icon(icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{formatted}</div>
                {subtitle_view}
            </div>
        </div>
    }
}
