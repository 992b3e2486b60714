use crate::shared::components::table::{format_percent, format_usd};
use crate::shared::mutation_dialog::{opened_dialog, text_input, FormField, MutationDialog};
use crate::shared::resource_list::ResourceList;
use contracts::domain::a004_user::{BalanceForm, DiscountForm, User};
use leptos::prelude::*;

#[component]
pub fn BalanceDialog(list: ResourceList<User>, item: User, on_closed: Callback<()>) -> impl IntoView {
    let form = RwSignal::new(BalanceForm::for_user(&item));

    view! {
        <MutationDialog
            list=list
            title=format!("Edit balance: {}", item.username)
            resource_id=item.id.clone()
            form=form
            dialog=opened_dialog()
            on_closed=on_closed
            submit_label="Save balance"
        >
            <FormField label="Current balance">
                <span class="form__static">{format_usd(item.balance)}</span>
            </FormField>
            <FormField label="New balance">
                {text_input(form, |f| f.balance.clone(), |f, v| f.balance = v, "0.00")}
            </FormField>
        </MutationDialog>
    }
}

#[component]
pub fn DiscountDialog(list: ResourceList<User>, item: User, on_closed: Callback<()>) -> impl IntoView {
    let form = RwSignal::new(DiscountForm::for_user(&item));

    view! {
        <MutationDialog
            list=list
            title=format!("Edit discount: {}", item.username)
            resource_id=item.id.clone()
            form=form
            dialog=opened_dialog()
            on_closed=on_closed
            submit_label="Save discount"
        >
            <FormField label="Current discount">
                <span class="form__static">{format_percent(item.discount)}</span>
            </FormField>
            <FormField label="Discount, % (0-100)">
                {text_input(form, |f| f.discount.clone(), |f, v| f.discount = v, "0")}
            </FormField>
        </MutationDialog>
    }
}
