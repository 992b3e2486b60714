use crate::shared::components::ui::StatusBadge;
use crate::shared::modal::Modal;
use crate::shared::resource_list::ResourceList;
use contracts::domain::common::{AdminResource, ResourceStatus};
use contracts::shared::mutation::{
    DeclineForm, DeleteForm, DialogLifecycle, MutationForm, StatusChangeForm,
};
use leptos::prelude::*;
use thaw::*;

/// A lifecycle that starts in the editing phase.
pub fn opened_dialog() -> RwSignal<DialogLifecycle> {
    let mut lifecycle = DialogLifecycle::default();
    lifecycle.open();
    RwSignal::new(lifecycle)
}

/// Modal around one mutation form.
///
/// The submit button is enabled exactly when the form validates and no
/// request for the same resource and operation is in flight. `on_closed`
/// fires once the lifecycle reaches `Closed`, after cancel or success.
#[component]
pub fn MutationDialog<R, F>(
    list: ResourceList<R>,
    #[prop(into)] title: String,
    #[prop(into)] resource_id: String,
    form: RwSignal<F>,
    dialog: RwSignal<DialogLifecycle>,
    on_closed: Callback<()>,
    #[prop(optional, into)] submit_label: Option<String>,
    #[prop(optional)] danger: bool,
    #[prop(optional)] optimistic: Option<fn(&mut R)>,
    children: Children,
) -> impl IntoView
where
    R: AdminResource,
    F: MutationForm + Send + Sync + 'static,
{
    let submit_label = submit_label.unwrap_or_else(|| "Submit".to_string());
    let resource_id = StoredValue::new(resource_id);

    Effect::new(move |_| {
        if !dialog.with(|d| d.is_open()) {
            on_closed.run(());
        }
    });

    let request_key = Signal::derive(move || {
        form.with(|f| {
            resource_id.with_value(|id| f.to_request(id).ok().map(|r| r.in_flight_key()))
        })
    });
    let submitting = Signal::derive(move || {
        dialog.with(|d| d.is_submitting())
            || request_key
                .get()
                .is_some_and(|key| list.is_pending(&key))
    });
    let can_submit = Signal::derive(move || form.with(|f| f.can_submit()) && !submitting.get());
    let hint = Signal::derive(move || form.with(|f| f.validate().err().map(|e| e.to_string())));

    let close = Callback::new(move |_| dialog.update(|d| d.close()));
    let submit = move |_| {
        list.submit(form, resource_id.get_value(), dialog, optimistic);
    };

    let footer: ChildrenFn = std::sync::Arc::new(move || {
        let submit_label = submit_label.clone();
        view! {
            <Button
                appearance=ButtonAppearance::Secondary
                on_click=move |_| close.run(())
                disabled=submitting
            >
                "Cancel"
            </Button>
            <Button
                appearance=ButtonAppearance::Primary
                class=if danger { "button--danger" } else { "" }
                on_click=submit
                disabled=Signal::derive(move || !can_submit.get())
            >
                {move || if submitting.get() { "Saving...".to_string() } else { submit_label.clone() }}
            </Button>
        }
        .into_any()
    });

    view! {
        <Modal title=title on_close=close footer=footer>
            <Flex vertical=true gap=FlexGap::Medium>
                {children()}
                {move || {
                    hint.get().map(|text| view! { <div class="form-hint">{text}</div> })
                }}
                {move || {
                    dialog
                        .with(|d| d.error().map(str::to_string))
                        .map(|err| view! { <div class="alert alert--error">{err}</div> })
                }}
            </Flex>
        </Modal>
    }
}

/// Single-line input bound to one string field of a form.
pub fn text_input<F>(
    form: RwSignal<F>,
    get: fn(&F) -> String,
    set: fn(&mut F, String),
    placeholder: &'static str,
) -> impl IntoView
where
    F: Send + Sync + 'static,
{
    view! {
        <input
            class="form__input"
            type="text"
            placeholder=placeholder
            prop:value=move || form.with(get)
            on:input=move |ev| form.update(|f| set(f, event_target_value(&ev)))
        />
    }
}

/// Multi-line variant of [`text_input`].
pub fn text_area<F>(
    form: RwSignal<F>,
    get: fn(&F) -> String,
    set: fn(&mut F, String),
    placeholder: &'static str,
) -> impl IntoView
where
    F: Send + Sync + 'static,
{
    view! {
        <textarea
            class="form__textarea"
            rows="3"
            placeholder=placeholder
            prop:value=move || form.with(get)
            on:input=move |ev| form.update(|f| set(f, event_target_value(&ev)))
        />
    }
}

/// Native select over `(wire value, label)` options.
pub fn select_input<F>(
    form: RwSignal<F>,
    options: Vec<(&'static str, &'static str)>,
    get: fn(&F) -> &'static str,
    set: fn(&mut F, &str),
) -> impl IntoView
where
    F: Send + Sync + 'static,
{
    view! {
        <select
            class="form__select"
            on:change=move |ev| form.update(|f| set(f, &event_target_value(&ev)))
        >
            {options
                .into_iter()
                .map(|(value, label)| {
                    view! {
                        <option value=value selected=move || form.with(get) == value>
                            {label}
                        </option>
                    }
                })
                .collect_view()}
        </select>
    }
}

/// Status picker of a [`StatusChangeForm`] with an optional note.
#[component]
pub fn StatusChangeFields<S: ResourceStatus + Send + Sync>(
    form: RwSignal<StatusChangeForm<S>>,
) -> impl IntoView {
    let options = S::ALL
        .iter()
        .map(|s| (s.as_str(), s.label()))
        .collect::<Vec<_>>();

    view! {
        <FormField label="Current status">
            <StatusBadge status=form.with_untracked(|f| f.current) />
        </FormField>
        <FormField label="New status">
            {select_input(
                form,
                options,
                |f| f.proposed.as_str(),
                |f, value| {
                    if let Some(status) = S::parse(value) {
                        f.proposed = status;
                    }
                },
            )}
        </FormField>
        <FormField label="Note (optional)">
            {text_area(form, |f| f.note.clone(), |f, v| f.note = v, "Reason for the change")}
        </FormField>
    }
}

/// "Change status" dialog shared by every resource with a status picker.
#[component]
pub fn StatusChangeDialog<R: AdminResource>(
    list: ResourceList<R>,
    item: R,
    form: StatusChangeForm<R::Status>,
    on_closed: Callback<()>,
) -> impl IntoView {
    let form = RwSignal::new(form);

    view! {
        <MutationDialog
            list=list
            title=format!("Change status: {}", item.display_name())
            resource_id=item.id().to_string()
            form=form
            dialog=opened_dialog()
            on_closed=on_closed
            submit_label="Update status"
        >
            <StatusChangeFields form=form />
        </MutationDialog>
    }
}

/// "Decline with reason" dialog; the reason is mandatory.
#[component]
pub fn DeclineDialog<R: AdminResource>(
    list: ResourceList<R>,
    item: R,
    form: DeclineForm,
    on_closed: Callback<()>,
) -> impl IntoView {
    let form = RwSignal::new(form);

    view! {
        <MutationDialog
            list=list
            title=format!("Decline {}: {}", R::ELEMENT_NAME.to_lowercase(), item.display_name())
            resource_id=item.id().to_string()
            form=form
            dialog=opened_dialog()
            on_closed=on_closed
            submit_label="Decline"
            danger=true
        >
            <FormField label="Reason">
                {text_area(form, |f| f.reason.clone(), |f, v| f.reason = v, "Shown to the user")}
            </FormField>
        </MutationDialog>
    }
}

/// Delete confirmation.
#[component]
pub fn DeleteDialog<R: AdminResource>(
    list: ResourceList<R>,
    item: R,
    form: DeleteForm,
    on_closed: Callback<()>,
) -> impl IntoView {
    let form = RwSignal::new(form);
    let name = item.display_name();

    view! {
        <MutationDialog
            list=list
            title=format!("Delete {}", R::ELEMENT_NAME.to_lowercase())
            resource_id=item.id().to_string()
            form=form
            dialog=opened_dialog()
            on_closed=on_closed
            submit_label="Delete"
            danger=true
        >
            <p class="dialog__text">
                {format!("Delete \"{}\"? This cannot be undone.", name)}
            </p>
        </MutationDialog>
    }
}

/// Labelled form row used inside dialogs.
#[component]
pub fn FormField(#[prop(into)] label: String, children: Children) -> impl IntoView {
    view! {
        <Flex vertical=true gap=FlexGap::Small>
            <Label>{label}</Label>
            {children()}
        </Flex>
    }
}
