use crate::shared::components::table::format_usd;
use crate::shared::mutation_dialog::{
    opened_dialog, text_area, text_input, FormField, MutationDialog,
};
use crate::shared::resource_list::ResourceList;
use contracts::domain::a001_affiliate::{Affiliate, PayoutForm};
use leptos::prelude::*;

#[component]
pub fn PayoutDialog(
    list: ResourceList<Affiliate>,
    item: Affiliate,
    on_closed: Callback<()>,
) -> impl IntoView {
    let form = RwSignal::new(PayoutForm::for_affiliate(&item));

    view! {
        <MutationDialog
            list=list
            title=format!("Process payout: {}", item.username)
            resource_id=item.id.clone()
            form=form
            dialog=opened_dialog()
            on_closed=on_closed
            submit_label="Process payout"
        >
            <FormField label="Available balance">
                <span class="form__static">{format_usd(item.available_balance)}</span>
            </FormField>
            <FormField label="Amount">
                {text_input(form, |f| f.amount.clone(), |f, v| f.amount = v, "0.00")}
            </FormField>
            <FormField label="Payment method">
                {text_input(form, |f| f.method.clone(), |f, v| f.method = v, "PayPal, bank transfer, USDT")}
            </FormField>
            <FormField label="Notes (optional)">
                {text_area(form, |f| f.notes.clone(), |f, v| f.notes = v, "Internal notes")}
            </FormField>
        </MutationDialog>
    }
}
