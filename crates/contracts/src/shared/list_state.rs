//! Fetch/paginate/filter/mutate lifecycle of one admin list page.
//!
//! [`ResourceListCore`] owns the query, the current page, the stats snapshot
//! and the selection. It never performs I/O: every state change that needs
//! data returns a request descriptor carrying a generation number, and the
//! response is fed back with that number. Responses whose generation is no
//! longer current are discarded, so a slow response to an old filter can never
//! overwrite a newer one.

use super::error::ApiError;
use super::pagination::Page;
use super::query::{ListParams, PageSize, QueryState, StatsFilter, StatusFilter};
use super::selection::{CheckState, Selection};
use crate::domain::common::AdminResource;

/// What happened to a response fed back into a [`FetchSlot`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Applied,
    /// A newer request superseded this one; nothing changed.
    Stale,
    /// The slot was reset to its empty value.
    Failed(ApiError),
}

/// Value plus independent loading/error state of one fetch kind.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchSlot<V> {
    value: V,
    loading: bool,
    error: Option<String>,
    generation: u64,
    revision: u64,
}

impl<V> FetchSlot<V> {
    pub fn new(value: V) -> Self {
        Self {
            value,
            loading: false,
            error: None,
            generation: 0,
            revision: 0,
        }
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    pub fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Bumped every time a response replaces the value; renderers key rows
    /// by it so refetched data is redrawn even when ids repeat.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Starts a request and supersedes every earlier one.
    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.loading = true;
        self.generation
    }

    pub fn resolve<E>(&mut self, generation: u64, result: Result<V, ApiError>, empty: E) -> FetchOutcome
    where
        E: FnOnce() -> V,
    {
        if generation != self.generation {
            return FetchOutcome::Stale;
        }
        self.loading = false;
        self.revision += 1;
        match result {
            Ok(value) => {
                self.value = value;
                self.error = None;
                FetchOutcome::Applied
            }
            Err(err) => {
                self.value = empty();
                self.error = Some(err.user_message());
                FetchOutcome::Failed(err)
            }
        }
    }
}

/// A list fetch to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRequest {
    pub generation: u64,
    pub params: ListParams,
}

/// A stats fetch to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsRequest {
    pub generation: u64,
    pub filter: StatsFilter,
}

/// State of one resource list page.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceListCore<R: AdminResource> {
    query: QueryState<R::Status>,
    list: FetchSlot<Page<R>>,
    stats: FetchSlot<R::Stats>,
    stats_filter: StatsFilter,
    selection: Selection,
    show_all_cap: u32,
}

impl<R: AdminResource> ResourceListCore<R> {
    pub fn new(page_size: PageSize, show_all_cap: u32) -> Self {
        let query = QueryState::new(page_size);
        let limit = page_size.resolve(show_all_cap);
        Self {
            query,
            list: FetchSlot::new(Page::empty(limit)),
            stats: FetchSlot::new(R::Stats::default()),
            stats_filter: StatsFilter::default(),
            selection: Selection::new(),
            show_all_cap,
        }
    }

    pub fn query(&self) -> &QueryState<R::Status> {
        &self.query
    }

    pub fn page(&self) -> &Page<R> {
        self.list.value()
    }

    pub fn list_slot(&self) -> &FetchSlot<Page<R>> {
        &self.list
    }

    pub fn stats(&self) -> &R::Stats {
        self.stats.value()
    }

    pub fn stats_slot(&self) -> &FetchSlot<R::Stats> {
        &self.stats
    }

    pub fn stats_filter(&self) -> &StatsFilter {
        &self.stats_filter
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn show_all_cap(&self) -> u32 {
        self.show_all_cap
    }

    pub fn begin_list(&mut self) -> ListRequest {
        ListRequest {
            generation: self.list.begin(),
            params: self.query.params(self.show_all_cap),
        }
    }

    pub fn begin_stats(&mut self) -> StatsRequest {
        StatsRequest {
            generation: self.stats.begin(),
            filter: self.stats_filter.clone(),
        }
    }

    /// Initial load and manual refresh: list and stats together.
    pub fn refresh(&mut self) -> (ListRequest, StatsRequest) {
        (self.begin_list(), self.begin_stats())
    }

    /// After any successful mutation both the list and the stats are
    /// re-fetched once; stats are never patched locally.
    pub fn after_mutation(&mut self) -> (ListRequest, StatsRequest) {
        self.refresh()
    }

    pub fn set_page(&mut self, page: u32) -> ListRequest {
        self.query.set_page(page);
        self.begin_list()
    }

    pub fn set_page_size(&mut self, page_size: PageSize) -> ListRequest {
        self.query.set_page_size(page_size);
        self.begin_list()
    }

    /// Takes the settled output of the search debouncer.
    pub fn commit_search(&mut self, search: impl Into<String>) -> ListRequest {
        self.query.set_search(search);
        self.begin_list()
    }

    pub fn set_status_filter(&mut self, status: StatusFilter<R::Status>) -> ListRequest {
        self.query.set_status(status);
        self.begin_list()
    }

    pub fn toggle_sort(&mut self, field: &str) -> ListRequest {
        self.query.toggle_sort(field);
        self.begin_list()
    }

    pub fn reset_filters(&mut self) -> ListRequest {
        self.query.reset_filters();
        self.begin_list()
    }

    pub fn set_stats_filter(&mut self, filter: StatsFilter) -> StatsRequest {
        self.stats_filter = filter;
        self.begin_stats()
    }

    pub fn resolve_list(&mut self, generation: u64, result: Result<Page<R>, ApiError>) -> FetchOutcome {
        let limit = self.query.page_size().resolve(self.show_all_cap);
        let outcome = self.list.resolve(generation, result, || Page::empty(limit));
        match outcome {
            FetchOutcome::Applied => {
                let page = self.list.value();
                self.selection.retain(|id| {
                    page.items()
                        .iter()
                        .any(|item| item.id() == id && item.is_selectable())
                });
            }
            FetchOutcome::Failed(_) => {
                self.query.set_page(1);
                self.selection.clear();
            }
            FetchOutcome::Stale => {}
        }
        outcome
    }

    pub fn resolve_stats(&mut self, generation: u64, result: Result<R::Stats, ApiError>) -> FetchOutcome {
        self.stats.resolve(generation, result, R::Stats::default)
    }

    /// Ids of the rows on the current page that may be selected.
    pub fn selectable_ids(&self) -> Vec<String> {
        self.page()
            .items()
            .iter()
            .filter(|item| item.is_selectable())
            .map(|item| item.id().to_string())
            .collect()
    }

    /// Ignores rows excluded by the resource's selection rule.
    pub fn select_row(&mut self, id: &str, checked: bool) {
        let selectable = self
            .page()
            .items()
            .iter()
            .any(|item| item.id() == id && item.is_selectable());
        if selectable || !checked {
            self.selection.set(id, checked);
        }
    }

    pub fn toggle_select_all(&mut self) {
        let ids = self.selectable_ids();
        self.selection.toggle_all(ids);
    }

    pub fn select_all_state(&self) -> CheckState {
        let ids = self.selectable_ids();
        self.selection.check_state(ids.iter().map(String::as_str))
    }

    fn selectable_ids_where<F>(&self, in_group: F) -> Vec<String>
    where
        F: Fn(&R) -> bool,
    {
        self.page()
            .items()
            .iter()
            .filter(|item| item.is_selectable() && in_group(item))
            .map(|item| item.id().to_string())
            .collect()
    }

    /// "Select all within category" over the selectable rows of one group.
    pub fn toggle_group<F>(&mut self, in_group: F)
    where
        F: Fn(&R) -> bool,
    {
        let ids = self.selectable_ids_where(in_group);
        self.selection.toggle_group(ids);
    }

    pub fn group_state<F>(&self, in_group: F) -> CheckState
    where
        F: Fn(&R) -> bool,
    {
        let ids = self.selectable_ids_where(in_group);
        self.selection.check_state(ids.iter().map(String::as_str))
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    pub fn selected_items(&self) -> Vec<R> {
        self.page()
            .items()
            .iter()
            .filter(|item| self.selection.contains(item.id()))
            .cloned()
            .collect()
    }

    /// Optimistic overlay on one row; the next list refetch replaces it.
    pub fn patch_row<F>(&mut self, id: &str, patch: F) -> bool
    where
        F: FnMut(&mut R),
    {
        self.list
            .value_mut()
            .patch_where(|item| item.id() == id, patch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_withdrawal::{Withdrawal, WithdrawalStats, WithdrawalStatus};
    use crate::shared::mutation::{DeclineForm, DialogLifecycle, MutationForm};
    use crate::shared::pagination::PaginationMeta;

    fn withdrawal(id: &str, status: WithdrawalStatus) -> Withdrawal {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "username": format!("user{}", id),
            "amount": 25.0,
            "method": "paypal",
            "status": status,
            "createdAt": "2024-05-01T10:00:00Z"
        }))
        .unwrap()
    }

    fn page_of(items: Vec<Withdrawal>, page: u32, total_pages: u32) -> Page<Withdrawal> {
        let total = items.len() as u64;
        Page::from_parts(
            items,
            PaginationMeta {
                page,
                limit: 25,
                total,
                total_pages,
                has_next: false,
                has_prev: false,
            },
        )
    }

    fn core() -> ResourceListCore<Withdrawal> {
        ResourceListCore::new(PageSize::Fixed(25), 1000)
    }

    #[test]
    fn test_filter_changes_request_page_one() {
        let mut c = core();
        assert_eq!(c.set_page(3).params.page, 3);
        assert_eq!(c.commit_search("john").params.page, 1);

        c.set_page(2);
        assert_eq!(
            c.set_status_filter(StatusFilter::Only(WithdrawalStatus::Pending))
                .params
                .page,
            1
        );

        c.set_page(2);
        assert_eq!(c.set_page_size(PageSize::Fixed(50)).params.page, 1);
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut c = core();
        let slow = c.commit_search("jo");
        let fast = c.commit_search("john");

        let fresh = page_of(vec![withdrawal("2", WithdrawalStatus::Pending)], 1, 1);
        assert_eq!(c.resolve_list(fast.generation, Ok(fresh)), FetchOutcome::Applied);

        let old = page_of(vec![withdrawal("1", WithdrawalStatus::Pending)], 1, 1);
        assert_eq!(c.resolve_list(slow.generation, Ok(old)), FetchOutcome::Stale);

        assert_eq!(c.page().items()[0].id, "2");
        assert!(!c.list_slot().is_loading());
    }

    #[test]
    fn test_revision_tracks_applied_responses() {
        let mut c = core();
        let slow = c.begin_list();
        let fast = c.begin_list();
        assert_eq!(c.list_slot().revision(), 0);

        c.resolve_list(slow.generation, Ok(page_of(vec![], 1, 0)));
        assert_eq!(c.list_slot().revision(), 0);

        c.resolve_list(fast.generation, Ok(page_of(vec![], 1, 0)));
        assert_eq!(c.list_slot().revision(), 1);
    }

    #[test]
    fn test_loading_flags_are_per_kind() {
        let mut c = core();
        let (list, _stats) = c.refresh();
        assert!(c.list_slot().is_loading());
        assert!(c.stats_slot().is_loading());

        c.resolve_list(list.generation, Ok(page_of(vec![], 1, 0)));
        assert!(!c.list_slot().is_loading());
        assert!(c.stats_slot().is_loading());
    }

    #[test]
    fn test_failure_resets_to_empty_page() {
        let mut c = core();
        let first = c.set_page(2);
        c.resolve_list(
            first.generation,
            Ok(page_of(vec![withdrawal("1", WithdrawalStatus::Pending)], 2, 3)),
        );
        c.select_row("1", true);

        let second = c.set_page(3);
        let outcome = c.resolve_list(second.generation, Err(ApiError::Network("offline".into())));
        assert!(matches!(outcome, FetchOutcome::Failed(_)));

        let meta = c.page().meta();
        assert_eq!(meta.page, 1);
        assert_eq!(meta.limit, 25);
        assert_eq!(meta.total, 0);
        assert_eq!(meta.total_pages, 0);
        assert!(!meta.has_next && !meta.has_prev);
        assert!(c.page().is_empty());
        assert!(!c.list_slot().is_loading());
        assert!(c.list_slot().error().is_some());
        assert_eq!(c.query().page(), 1);
        assert!(c.selection().is_empty());
    }

    #[test]
    fn test_stats_failure_resets_to_default() {
        let mut c = core();
        let req = c.begin_stats();
        let stats = WithdrawalStats {
            pending_requests: 4,
            ..WithdrawalStats::default()
        };
        c.resolve_stats(req.generation, Ok(stats));
        assert_eq!(c.stats().pending_requests, 4);

        let req = c.begin_stats();
        c.resolve_stats(req.generation, Err(ApiError::Http { status: 502, message: None }));
        assert_eq!(c.stats(), &WithdrawalStats::default());
    }

    #[test]
    fn test_select_all_skips_terminal_rows() {
        let mut c = core();
        let req = c.begin_list();
        c.resolve_list(
            req.generation,
            Ok(page_of(
                vec![
                    withdrawal("1", WithdrawalStatus::Pending),
                    withdrawal("2", WithdrawalStatus::Approved),
                    withdrawal("3", WithdrawalStatus::Processing),
                ],
                1,
                1,
            )),
        );

        c.select_row("2", true);
        assert!(c.selection().is_empty());

        c.toggle_select_all();
        assert_eq!(c.selection().ids().collect::<Vec<_>>(), vec!["1", "3"]);
        assert_eq!(c.select_all_state(), CheckState::Checked);

        c.toggle_select_all();
        assert!(c.selection().is_empty());
    }

    #[test]
    fn test_group_toggle_leaves_other_groups() {
        let mut c = core();
        let req = c.begin_list();
        c.resolve_list(
            req.generation,
            Ok(page_of(
                vec![
                    withdrawal("1", WithdrawalStatus::Pending),
                    withdrawal("2", WithdrawalStatus::Approved),
                    withdrawal("3", WithdrawalStatus::Pending),
                ],
                1,
                1,
            )),
        );
        let paypal_group = |w: &Withdrawal| w.id != "3";

        c.select_row("3", true);
        c.toggle_group(paypal_group);
        assert_eq!(c.selection().ids().collect::<Vec<_>>(), vec!["1", "3"]);
        assert_eq!(c.group_state(paypal_group), CheckState::Checked);

        c.toggle_group(paypal_group);
        assert_eq!(c.selection().ids().collect::<Vec<_>>(), vec!["3"]);
        assert_eq!(c.group_state(paypal_group), CheckState::Unchecked);
    }

    #[test]
    fn test_selection_pruned_on_new_page() {
        let mut c = core();
        let req = c.begin_list();
        c.resolve_list(
            req.generation,
            Ok(page_of(
                vec![
                    withdrawal("1", WithdrawalStatus::Pending),
                    withdrawal("2", WithdrawalStatus::Pending),
                ],
                1,
                2,
            )),
        );
        c.toggle_select_all();

        let req = c.set_page(2);
        c.resolve_list(
            req.generation,
            Ok(page_of(vec![withdrawal("2", WithdrawalStatus::Pending)], 2, 2)),
        );
        assert_eq!(c.selection().ids().collect::<Vec<_>>(), vec!["2"]);
    }

    #[test]
    fn test_successful_mutation_refetches_list_and_stats_once() {
        let mut c = core();
        let (list, stats) = c.refresh();
        c.resolve_list(
            list.generation,
            Ok(page_of(vec![withdrawal("1", WithdrawalStatus::Pending)], 1, 1)),
        );
        c.resolve_stats(stats.generation, Ok(WithdrawalStats::default()));
        let list_gen = c.list_slot().generation();
        let stats_gen = c.stats_slot().generation();

        let mut dialog = DialogLifecycle::default();
        let mut form = DeclineForm::new("withdrawals", "rejected");
        form.reason = "Duplicate order".into();
        dialog.open();
        assert!(dialog.begin_submit());
        let req = form.to_request("1").unwrap();
        assert_eq!(req.resource_id, "1");

        dialog.succeed();
        form.reset();
        let (list_req, stats_req) = c.after_mutation();

        assert_eq!(c.list_slot().generation(), list_gen + 1);
        assert_eq!(c.stats_slot().generation(), stats_gen + 1);
        assert_eq!(list_req.generation, list_gen + 1);
        assert_eq!(stats_req.generation, stats_gen + 1);
        assert!(!dialog.is_open());
        assert!(form.reason.is_empty());
    }

    #[test]
    fn test_optimistic_patch_is_superseded_by_refetch() {
        let mut c = core();
        let req = c.begin_list();
        c.resolve_list(
            req.generation,
            Ok(page_of(vec![withdrawal("1", WithdrawalStatus::Pending)], 1, 1)),
        );

        assert!(c.patch_row("1", |w| w.status = WithdrawalStatus::Cancelled));
        assert_eq!(c.page().items()[0].status, WithdrawalStatus::Cancelled);

        let (list, _) = c.after_mutation();
        c.resolve_list(
            list.generation,
            Ok(page_of(vec![withdrawal("1", WithdrawalStatus::Pending)], 1, 1)),
        );
        assert_eq!(c.page().items()[0].status, WithdrawalStatus::Pending);
    }
}
