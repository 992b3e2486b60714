use crate::shared::components::table::format_usd;
use crate::shared::mutation_dialog::{
    opened_dialog, text_area, text_input, FormField, MutationDialog,
};
use crate::shared::resource_list::ResourceList;
use contracts::domain::a002_withdrawal::{
    apply_optimistic_cancel, ApproveWithdrawalForm, CancelWithdrawalForm,
    UpdateTransactionIdForm, Withdrawal,
};
use leptos::prelude::*;

#[component]
pub fn ApproveWithdrawalDialog(
    list: ResourceList<Withdrawal>,
    item: Withdrawal,
    on_closed: Callback<()>,
) -> impl IntoView {
    let form = RwSignal::new(ApproveWithdrawalForm::for_withdrawal(&item));
    let summary = format!(
        "{} requested {} via {}",
        item.username,
        format_usd(item.amount),
        item.method
    );

    view! {
        <MutationDialog
            list=list
            title="Approve withdrawal"
            resource_id=item.id.clone()
            form=form
            dialog=opened_dialog()
            on_closed=on_closed
            submit_label="Approve"
        >
            <p class="dialog__text">{summary}</p>
            {item.account_details.clone().map(|details| view! {
                <FormField label="Account details">
                    <span class="form__static">{details}</span>
                </FormField>
            })}
            <FormField label="Transaction ID">
                {text_input(form, |f| f.transaction_id.clone(), |f, v| f.transaction_id = v, "Payment system reference")}
            </FormField>
            <FormField label="Amount paid">
                {text_input(form, |f| f.amount.clone(), |f, v| f.amount = v, "0.00")}
            </FormField>
            <FormField label="Notes (optional)">
                {text_area(form, |f| f.notes.clone(), |f, v| f.notes = v, "Internal notes")}
            </FormField>
        </MutationDialog>
    }
}

#[component]
pub fn UpdateTransactionIdDialog(
    list: ResourceList<Withdrawal>,
    item: Withdrawal,
    on_closed: Callback<()>,
) -> impl IntoView {
    let form = RwSignal::new(UpdateTransactionIdForm::for_withdrawal(&item));

    view! {
        <MutationDialog
            list=list
            title="Update transaction ID"
            resource_id=item.id.clone()
            form=form
            dialog=opened_dialog()
            on_closed=on_closed
            submit_label="Save"
        >
            <FormField label="Transaction ID">
                {text_input(form, |f| f.transaction_id.clone(), |f, v| f.transaction_id = v, "Payment system reference")}
            </FormField>
        </MutationDialog>
    }
}

/// The row shows "cancelled" while the request is in flight.
#[component]
pub fn CancelWithdrawalDialog(
    list: ResourceList<Withdrawal>,
    item: Withdrawal,
    on_closed: Callback<()>,
) -> impl IntoView {
    let form = RwSignal::new(CancelWithdrawalForm::default());
    let text = format!(
        "Cancel the {} withdrawal of {}? The amount returns to the user's balance.",
        format_usd(item.amount),
        item.username
    );

    view! {
        <MutationDialog
            list=list
            title="Cancel withdrawal"
            resource_id=item.id.clone()
            form=form
            dialog=opened_dialog()
            on_closed=on_closed
            submit_label="Cancel withdrawal"
            danger=true
            optimistic={apply_optimistic_cancel as fn(&mut Withdrawal)}
        >
            <p class="dialog__text">{text}</p>
            <FormField label="Reason (optional)">
                {text_area(form, |f| f.reason.clone(), |f, v| f.reason = v, "Shown to the user")}
            </FormField>
        </MutationDialog>
    }
}
