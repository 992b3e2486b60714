//! Reactive shell around [`ResourceListCore`].
//!
//! One [`ResourceList`] is created per list page. It owns the list state
//! machine, turns the requests the machine hands out into HTTP calls and feeds
//! the responses back. Everything that decides *what* happens (page resets,
//! stale-response discarding, selection pruning) lives in `contracts`; this
//! module only wires it to signals, timers and the network.

use crate::shared::api_utils::{fetch_list, fetch_stats, send_mutation};
use crate::shared::config::use_config;
use crate::shared::toast::{use_toasts, ToastService};
use contracts::domain::common::AdminResource;
use contracts::shared::config::AdminConfig;
use contracts::shared::debounce::Debouncer;
use contracts::shared::list_state::{FetchOutcome, ListRequest, ResourceListCore, StatsRequest};
use contracts::shared::mutation::{
    BulkAction, BulkOutcome, DialogLifecycle, InFlight, MutationForm, MutationRequest,
};
use contracts::shared::query::{PageSize, StatsFilter, StatusFilter};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

pub struct ResourceList<R: AdminResource> {
    pub core: RwSignal<ResourceListCore<R>>,
    /// Raw text of the search box; committed to the query after the debounce.
    pub search_input: RwSignal<String>,
    debouncer: StoredValue<Debouncer<String>>,
    in_flight: RwSignal<InFlight>,
    config: StoredValue<AdminConfig>,
    toasts: ToastService,
}

impl<R: AdminResource> Clone for ResourceList<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: AdminResource> Copy for ResourceList<R> {}

/// Creates the list state of one page and starts the first fetch.
pub fn use_resource_list<R: AdminResource>() -> ResourceList<R> {
    let config = use_config();
    let core = ResourceListCore::<R>::new(
        PageSize::Fixed(config.list.default_page_size),
        config.list.show_all_cap,
    );
    let list = ResourceList {
        core: RwSignal::new(core),
        search_input: RwSignal::new(String::new()),
        debouncer: StoredValue::new(Debouncer::new(u64::from(config.list.search_debounce_ms))),
        in_flight: RwSignal::new(InFlight::default()),
        config: StoredValue::new(config),
        toasts: use_toasts(),
    };

    let search_input = list.search_input;
    Effect::new(move |_| {
        let value = search_input.get();
        list.on_search_input(value);
    });

    list.refresh();
    list
}

impl<R: AdminResource> ResourceList<R> {
    pub fn config(&self) -> AdminConfig {
        self.config.get_value()
    }

    /// One formatted figure of the stats snapshot, for a stat card.
    pub fn stat(&self, format: fn(&R::Stats) -> String) -> Signal<String> {
        let core = self.core;
        Signal::derive(move || core.with(|c| format(c.stats())))
    }

    pub fn stats_loading(&self) -> Signal<bool> {
        let core = self.core;
        Signal::derive(move || core.with(|c| c.stats_slot().is_loading()))
    }

    pub fn total_count(&self) -> Signal<u64> {
        let core = self.core;
        Signal::derive(move || core.with(|c| c.page().total()))
    }

    // ------------------------------------------------------------------
    // Fetching
    // ------------------------------------------------------------------

    fn run_list(&self, request: ListRequest) {
        let this = *self;
        let api = self.config.with_value(|c| c.api.clone());
        spawn_local(async move {
            let result = fetch_list::<R>(&api, &request.params).await;
            let outcome = this
                .core
                .try_update(|c| c.resolve_list(request.generation, result));
            this.report(R::LIST_NAME, outcome);
        });
    }

    fn run_stats(&self, request: StatsRequest) {
        let this = *self;
        let api = self.config.with_value(|c| c.api.clone());
        spawn_local(async move {
            let result = fetch_stats::<R>(&api, &request.filter).await;
            let outcome = this
                .core
                .try_update(|c| c.resolve_stats(request.generation, result));
            this.report("stats", outcome);
        });
    }

    fn report(&self, what: &str, outcome: Option<FetchOutcome>) {
        match outcome {
            Some(FetchOutcome::Applied) | None => {}
            Some(FetchOutcome::Stale) => {
                log::debug!("Discarded stale {} response for {}", what, R::COLLECTION);
            }
            Some(FetchOutcome::Failed(e)) => {
                log::warn!("Failed to load {} for {}: {}", what, R::COLLECTION, e);
                self.toasts.error(e.user_message());
            }
        }
    }

    fn send(&self, request: Option<ListRequest>) {
        if let Some(request) = request {
            self.run_list(request);
        }
    }

    /// Refetches both the current page and the stats.
    pub fn refresh(&self) {
        if let Some((list, stats)) = self.core.try_update(|c| c.refresh()) {
            self.run_list(list);
            self.run_stats(stats);
        }
    }

    // ------------------------------------------------------------------
    // Query
    // ------------------------------------------------------------------

    pub fn set_page(&self, page: u32) {
        self.send(self.core.try_update(|c| c.set_page(page)));
    }

    pub fn set_page_size(&self, page_size: PageSize) {
        self.send(self.core.try_update(|c| c.set_page_size(page_size)));
    }

    pub fn set_status_filter(&self, status: StatusFilter<R::Status>) {
        self.send(self.core.try_update(|c| c.set_status_filter(status)));
    }

    pub fn toggle_sort(&self, field: &str) {
        self.send(self.core.try_update(|c| c.toggle_sort(field)));
    }

    pub fn reset_filters(&self) {
        self.debouncer.update_value(|d| d.cancel());
        self.search_input.set(String::new());
        self.send(self.core.try_update(|c| c.reset_filters()));
    }

    pub fn set_stats_filter(&self, filter: StatsFilter) {
        if let Some(request) = self.core.try_update(|c| c.set_stats_filter(filter)) {
            self.run_stats(request);
        }
    }

    fn on_search_input(&self, value: String) {
        let committed = self
            .core
            .with_untracked(|c| c.query().search() == value.as_str());
        let pending = self.debouncer.with_value(|d| d.is_pending());
        if committed && !pending {
            return;
        }

        let now = js_sys::Date::now() as u64;
        let Some((token, delay)) = self
            .debouncer
            .try_update_value(|d| (d.push(value, now), d.delay_ms()))
        else {
            return;
        };

        let this = *self;
        spawn_local(async move {
            TimeoutFuture::new(delay as u32).await;
            if let Some(search) = this.debouncer.try_update_value(|d| d.settle(token)).flatten() {
                this.send(this.core.try_update(|c| c.commit_search(search)));
            }
        });
    }

    // ------------------------------------------------------------------
    // Selection
    // ------------------------------------------------------------------

    pub fn select_row(&self, id: &str, checked: bool) {
        self.core.update(|c| c.select_row(id, checked));
    }

    pub fn toggle_select_all(&self) {
        self.core.update(|c| c.toggle_select_all());
    }

    pub fn clear_selection(&self) {
        self.core.update(|c| c.clear_selection());
    }

    pub fn toggle_group<F>(&self, in_group: F)
    where
        F: Fn(&R) -> bool,
    {
        self.core.update(|c| c.toggle_group(in_group));
    }

    pub fn bulk(&self, action: BulkAction) {
        let selected = self.core.with_untracked(|c| c.selection().len());
        match action.dispatch(selected) {
            BulkOutcome::Unsupported { message } => {
                log::info!("{} on {}: {}", action.label(), R::COLLECTION, message);
                self.toasts.info(message);
            }
        }
    }

    // ------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------

    /// Whether a submission with this key is awaiting its response.
    pub fn is_pending(&self, key: &str) -> bool {
        self.in_flight.with(|f| f.is_pending(key))
    }

    /// Submits the dialog's form for one resource.
    ///
    /// On success the list and the stats are refetched once and the dialog is
    /// closed; on failure the dialog stays open with the server's message.
    pub fn submit<F>(
        &self,
        form: RwSignal<F>,
        resource_id: String,
        dialog: RwSignal<DialogLifecycle>,
        optimistic: Option<fn(&mut R)>,
    ) where
        F: MutationForm + Send + Sync + 'static,
    {
        let request = match form.with_untracked(|f| f.to_request(&resource_id)) {
            Ok(request) => request,
            Err(e) => {
                dialog.update(|d| d.fail(e.to_string()));
                return;
            }
        };

        let key = request.in_flight_key();
        if !self.in_flight.try_update(|f| f.try_begin(&key)).unwrap_or(false) {
            log::debug!("Ignoring duplicate submission of {}", key);
            return;
        }
        if !dialog.try_update(|d| d.begin_submit()).unwrap_or(false) {
            self.in_flight.update(|f| f.finish(&key));
            return;
        }

        if let Some(patch) = optimistic {
            self.core.update(|c| {
                c.patch_row(&resource_id, patch);
            });
        }

        let this = *self;
        let patched = optimistic.is_some();
        spawn_local(async move {
            this.finish_submit(request, key, form, dialog, patched).await;
        });
    }

    async fn finish_submit<F>(
        self,
        request: MutationRequest,
        key: String,
        form: RwSignal<F>,
        dialog: RwSignal<DialogLifecycle>,
        patched: bool,
    ) where
        F: MutationForm + Send + Sync + 'static,
    {
        let api = self.config.with_value(|c| c.api.clone());
        let result = send_mutation(&api, &request).await;
        self.in_flight.update(|f| f.finish(&key));

        match result {
            Ok(message) => {
                self.toasts.success(
                    message.unwrap_or_else(|| request.operation.success_message().to_string()),
                );
                if let Some((list, stats)) = self.core.try_update(|c| c.after_mutation()) {
                    self.run_list(list);
                    self.run_stats(stats);
                }
                form.update(|f| f.reset());
                dialog.update(|d| d.succeed());
            }
            Err(e) => {
                log::error!("{} failed: {}", key, e);
                let message = e.user_message();
                self.toasts.error(message.clone());
                dialog.update(|d| d.fail(message));
                if patched {
                    // Drops the optimistic overlay.
                    self.refresh();
                }
            }
        }
    }
}
