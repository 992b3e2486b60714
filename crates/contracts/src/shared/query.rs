//! Query state driving a list fetch: page, page size, search, status filter, sort

use crate::domain::common::ResourceStatus;
use serde::Serialize;

/// Status filter of a list page; `All` sends no `status=` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter<S> {
    All,
    Only(S),
}

impl<S> Default for StatusFilter<S> {
    fn default() -> Self {
        StatusFilter::All
    }
}

impl<S: ResourceStatus> StatusFilter<S> {
    /// Value of the `<select>` option.
    pub fn as_option_value(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Only(s) => s.as_str(),
        }
    }

    pub fn from_option_value(value: &str) -> Self {
        S::parse(value).map_or(StatusFilter::All, StatusFilter::Only)
    }
}

/// Requested page size; `All` is the "show every row" option and is mapped to
/// the configured cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSize {
    Fixed(u32),
    All,
}

impl PageSize {
    pub fn resolve(self, show_all_cap: u32) -> u32 {
        match self {
            PageSize::Fixed(n) => n.clamp(1, show_all_cap.max(1)),
            PageSize::All => show_all_cap.max(1),
        }
    }

    pub fn as_option_value(&self) -> String {
        match self {
            PageSize::Fixed(n) => n.to_string(),
            PageSize::All => "all".to_string(),
        }
    }

    pub fn from_option_value(value: &str) -> Option<Self> {
        if value == "all" {
            return Some(PageSize::All);
        }
        value
            .parse::<u32>()
            .ok()
            .filter(|n| *n > 0)
            .map(PageSize::Fixed)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortOrder {
    pub field: String,
    pub ascending: bool,
}

/// Query parameters of `GET /api/admin/<collection>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    pub page: u32,
    pub limit: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<&'static str>,
}

/// Current page/limit/search/filter of one list page.
///
/// Every setter other than [`QueryState::set_page`] puts the user back on
/// page 1, so a narrowed filter never leaves them on a page that no longer
/// exists.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryState<S> {
    page: u32,
    page_size: PageSize,
    search: String,
    status: StatusFilter<S>,
    sort: Option<SortOrder>,
}

impl<S: ResourceStatus> QueryState<S> {
    pub fn new(page_size: PageSize) -> Self {
        Self {
            page: 1,
            page_size,
            search: String::new(),
            status: StatusFilter::All,
            sort: None,
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn status(&self) -> StatusFilter<S> {
        self.status
    }

    pub fn sort(&self) -> Option<&SortOrder> {
        self.sort.as_ref()
    }

    pub fn set_page(&mut self, page: u32) {
        self.page = page.max(1);
    }

    pub fn set_page_size(&mut self, page_size: PageSize) {
        self.page_size = page_size;
        self.page = 1;
    }

    /// Commits an already debounced search term.
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.page = 1;
    }

    pub fn set_status(&mut self, status: StatusFilter<S>) {
        self.status = status;
        self.page = 1;
    }

    /// Same field flips direction, a new field starts ascending.
    pub fn toggle_sort(&mut self, field: &str) {
        self.sort = match self.sort.take() {
            Some(current) if current.field == field => Some(SortOrder {
                field: current.field,
                ascending: !current.ascending,
            }),
            _ => Some(SortOrder {
                field: field.to_string(),
                ascending: true,
            }),
        };
        self.page = 1;
    }

    pub fn reset_filters(&mut self) {
        self.search.clear();
        self.status = StatusFilter::All;
        self.sort = None;
        self.page = 1;
    }

    pub fn has_active_filters(&self) -> bool {
        !self.search.trim().is_empty() || self.status != StatusFilter::All
    }

    pub fn params(&self, show_all_cap: u32) -> ListParams {
        let search = self.search.trim();
        ListParams {
            page: self.page,
            limit: self.page_size.resolve(show_all_cap),
            status: match self.status {
                StatusFilter::All => None,
                StatusFilter::Only(s) => Some(s.as_str().to_string()),
            },
            search: (!search.is_empty()).then(|| search.to_string()),
            sort_by: self.sort.as_ref().map(|s| s.field.clone()),
            sort_order: self
                .sort
                .as_ref()
                .map(|s| if s.ascending { "asc" } else { "desc" }),
        }
    }
}

/// Window the stats endpoint aggregates over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatsPeriod {
    Today,
    Week,
    Month,
    #[default]
    All,
}

impl StatsPeriod {
    pub const ALL: [StatsPeriod; 4] = [
        StatsPeriod::Today,
        StatsPeriod::Week,
        StatsPeriod::Month,
        StatsPeriod::All,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StatsPeriod::Today => "today",
            StatsPeriod::Week => "week",
            StatsPeriod::Month => "month",
            StatsPeriod::All => "all",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatsPeriod::Today => "Today",
            StatsPeriod::Week => "This week",
            StatsPeriod::Month => "This month",
            StatsPeriod::All => "All time",
        }
    }

    pub fn parse(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == value)
            .unwrap_or_default()
    }
}

/// Query parameters of `GET /api/admin/<collection>/stats`.
///
/// Independent of page and limit.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct StatsFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl StatsFilter {
    pub fn with_period(mut self, period: StatsPeriod) -> Self {
        self.period = match period {
            StatsPeriod::All => None,
            other => Some(other.as_str()),
        };
        self
    }

    pub fn with_role(mut self, role: Option<String>) -> Self {
        self.role = role;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_withdrawal::WithdrawalStatus;

    fn query() -> QueryState<WithdrawalStatus> {
        let mut q = QueryState::new(PageSize::Fixed(25));
        q.set_page(4);
        q
    }

    #[test]
    fn test_every_non_page_change_resets_page() {
        let mut q = query();
        q.set_search("john");
        assert_eq!(q.params(1000).page, 1);

        let mut q = query();
        q.set_page_size(PageSize::Fixed(50));
        assert_eq!(q.params(1000).page, 1);

        let mut q = query();
        q.set_status(StatusFilter::Only(WithdrawalStatus::Pending));
        assert_eq!(q.params(1000).page, 1);

        let mut q = query();
        q.toggle_sort("amount");
        assert_eq!(q.params(1000).page, 1);

        let mut q = query();
        q.reset_filters();
        assert_eq!(q.params(1000).page, 1);
    }

    #[test]
    fn test_page_change_keeps_other_fields() {
        let mut q = QueryState::new(PageSize::Fixed(10));
        q.set_search("alice");
        q.set_status(StatusFilter::Only(WithdrawalStatus::Approved));
        q.set_page(3);
        let params = q.params(1000);
        assert_eq!(params.page, 3);
        assert_eq!(params.limit, 10);
        assert_eq!(params.search.as_deref(), Some("alice"));
        assert_eq!(params.status.as_deref(), Some("approved"));
    }

    #[test]
    fn test_all_filter_and_blank_search_are_omitted() {
        let mut q: QueryState<WithdrawalStatus> = QueryState::new(PageSize::Fixed(25));
        q.set_search("   ");
        let params = q.params(1000);
        assert_eq!(params.status, None);
        assert_eq!(params.search, None);
        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            serde_json::json!({ "page": 1, "limit": 25 })
        );
    }

    #[test]
    fn test_show_all_uses_configured_cap() {
        let q: QueryState<WithdrawalStatus> = QueryState::new(PageSize::All);
        assert_eq!(q.params(1000).limit, 1000);
        assert_eq!(q.params(5000).limit, 5000);
        assert_eq!(PageSize::from_option_value("all"), Some(PageSize::All));
        assert_eq!(PageSize::from_option_value("0"), None);
    }

    #[test]
    fn test_sort_toggle() {
        let mut q: QueryState<WithdrawalStatus> = QueryState::new(PageSize::Fixed(25));
        q.toggle_sort("amount");
        assert_eq!(q.params(1000).sort_order, Some("asc"));
        q.toggle_sort("amount");
        assert_eq!(q.params(1000).sort_order, Some("desc"));
        q.toggle_sort("createdAt");
        let params = q.params(1000);
        assert_eq!(params.sort_by.as_deref(), Some("createdAt"));
        assert_eq!(params.sort_order, Some("asc"));
    }

    #[test]
    fn test_status_filter_option_values() {
        let f = StatusFilter::<WithdrawalStatus>::from_option_value("rejected");
        assert_eq!(f, StatusFilter::Only(WithdrawalStatus::Rejected));
        assert_eq!(
            StatusFilter::<WithdrawalStatus>::from_option_value("whatever"),
            StatusFilter::All
        );
    }

    #[test]
    fn test_stats_filter_omits_all_period() {
        let f = StatsFilter::default().with_period(StatsPeriod::All);
        assert_eq!(f.period, None);
        let f = StatsFilter::default()
            .with_period(StatsPeriod::Week)
            .with_role(Some("admin".into()));
        assert_eq!(
            serde_json::to_value(&f).unwrap(),
            serde_json::json!({ "period": "week", "role": "admin" })
        );
    }
}
