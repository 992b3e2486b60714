//! Sidebar with collapsible menu groups

use crate::layout::global_context::{AdminSection, AppGlobalContext};
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<AdminSection>,
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "finance",
            label: "Finance",
            icon: "dollar-sign",
            items: vec![
                AdminSection::Affiliates,
                AdminSection::Withdrawals,
                AdminSection::CancelRequests,
            ],
        },
        MenuGroup {
            id: "people",
            label: "People",
            icon: "users",
            items: vec![AdminSection::Users, AdminSection::Moderators],
        },
        MenuGroup {
            id: "catalog",
            label: "Catalog",
            icon: "layers",
            items: vec![AdminSection::Services, AdminSection::ServiceImport],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let expanded_groups = RwSignal::new(
        get_menu_groups()
            .iter()
            .map(|g| g.id.to_string())
            .collect::<Vec<_>>(),
    );

    view! {
        <div class="app-sidebar__content">
            {get_menu_groups().into_iter().map(|group| {
                let group_id = group.id.to_string();
                let group_id_for_exp = group_id.clone();
                let group_id_for_show = group_id.clone();
                let items = StoredValue::new(group.items);

                view! {
                    <div>
                        <div
                            class="app-sidebar__item"
                            style:padding-left="12px"
                            on:click=move |_| {
                                let gid = group_id.clone();
                                expanded_groups.update(move |ids| {
                                    if let Some(pos) = ids.iter().position(|x| x == &gid) {
                                        ids.remove(pos);
                                    } else {
                                        ids.push(gid);
                                    }
                                });
                            }
                        >
                            <div class="app-sidebar__item-content">
                                {icon(group.icon)}
                                <span>{group.label}</span>
                            </div>
                            <div
                                class="app-sidebar__chevron"
                                class:app-sidebar__chevron--expanded=move || {
                                    expanded_groups.get().contains(&group_id_for_exp)
                                }
                            >
                                {icon("chevron-right")}
                            </div>
                        </div>

                        <Show when=move || expanded_groups.get().contains(&group_id_for_show)>
                            <div class="app-sidebar__children">
                                {items.get_value().into_iter().map(|section| view! {
                                    <div
                                        class="app-sidebar__item"
                                        class:app-sidebar__item--active=move || ctx.active.get() == section
                                        style:padding-left="10px"
                                        on:click=move |_| ctx.open(section)
                                    >
                                        <div class="app-sidebar__item-content">
                                            {icon(section.icon())}
                                            <span>{section.label()}</span>
                                        </div>
                                    </div>
                                }).collect_view()}
                            </div>
                        </Show>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
