use crate::shared::mutation_dialog::{opened_dialog, select_input, FormField, MutationDialog};
use crate::shared::resource_list::ResourceList;
use contracts::domain::a005_moderator::{Moderator, ModeratorRole, RoleChangeForm};
use leptos::prelude::*;

#[component]
pub fn RoleChangeDialog(
    list: ResourceList<Moderator>,
    item: Moderator,
    on_closed: Callback<()>,
) -> impl IntoView {
    let form = RwSignal::new(RoleChangeForm::for_moderator(&item));
    let options = ModeratorRole::ALL
        .into_iter()
        .map(|r| (r.as_str(), r.label()))
        .collect::<Vec<_>>();

    view! {
        <MutationDialog
            list=list
            title=format!("Change role: {}", item.username)
            resource_id=item.id.clone()
            form=form
            dialog=opened_dialog()
            on_closed=on_closed
            submit_label="Update role"
        >
            <FormField label="Current role">
                <span class="form__static">{item.role.label()}</span>
            </FormField>
            <FormField label="New role">
                {select_input(
                    form,
                    options,
                    |f| f.proposed.as_str(),
                    |f, value| {
                        if let Some(role) = ModeratorRole::parse(value) {
                            f.proposed = role;
                        }
                    },
                )}
            </FormField>
        </MutationDialog>
    }
}
