use crate::shared::components::table::format_usd;
use crate::shared::mutation_dialog::{
    opened_dialog, text_area, text_input, FormField, MutationDialog,
};
use crate::shared::resource_list::ResourceList;
use contracts::domain::a003_cancel_request::{ApproveCancelForm, CancelRequest};
use leptos::prelude::*;

/// Approving cancels the order and refunds the user.
#[component]
pub fn ApproveCancelDialog(
    list: ResourceList<CancelRequest>,
    item: CancelRequest,
    on_closed: Callback<()>,
) -> impl IntoView {
    let form = RwSignal::new(ApproveCancelForm::for_request(&item));

    view! {
        <MutationDialog
            list=list
            title=format!("Approve cancellation of order #{}", item.order_id)
            resource_id=item.id.clone()
            form=form
            dialog=opened_dialog()
            on_closed=on_closed
            submit_label="Approve and refund"
        >
            <FormField label="Order charge">
                <span class="form__static">{format_usd(item.charge)}</span>
            </FormField>
            {item.reason.clone().map(|reason| view! {
                <FormField label="User's reason">
                    <span class="form__static">{reason}</span>
                </FormField>
            })}
            <FormField label="Refund amount">
                {text_input(form, |f| f.refund_amount.clone(), |f, v| f.refund_amount = v, "0.00")}
            </FormField>
            <FormField label="Refund transaction ID">
                {text_input(form, |f| f.transaction_id.clone(), |f, v| f.transaction_id = v, "Balance transaction reference")}
            </FormField>
            <FormField label="Notes (optional)">
                {text_area(form, |f| f.notes.clone(), |f, v| f.notes = v, "Internal notes")}
            </FormField>
        </MutationDialog>
    }
}
