//! Paginated result windows returned by the list endpoints

use serde::{Deserialize, Serialize};

/// The `pagination` object of a list response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PaginationMeta {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub total_pages: u32,
    pub has_next: bool,
    pub has_prev: bool,
}

/// One window of a resource list.
///
/// Built only through [`Page::empty`] and [`Page::from_parts`], which keep
/// `items.len() <= limit`, `has_next == (page < total_pages)` and
/// `has_prev == (page > 1)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    items: Vec<T>,
    page: u32,
    limit: u32,
    total: u64,
    total_pages: u32,
    has_next: bool,
    has_prev: bool,
}

impl<T> Page<T> {
    /// The well-formed empty page a failed fetch resets to.
    pub fn empty(limit: u32) -> Self {
        Self {
            items: Vec::new(),
            page: 1,
            limit: limit.max(1),
            total: 0,
            total_pages: 0,
            has_next: false,
            has_prev: false,
        }
    }

    /// Normalises a server window; the flags sent by the server are
    /// recomputed rather than trusted.
    pub fn from_parts(mut items: Vec<T>, meta: PaginationMeta) -> Self {
        let limit = meta.limit.max(1);
        if items.len() > limit as usize {
            items.truncate(limit as usize);
        }
        let page = meta.page.max(1);
        let total = meta.total.max(items.len() as u64);
        let total_pages = if meta.total_pages == 0 && total > 0 {
            total.div_ceil(limit as u64) as u32
        } else {
            meta.total_pages
        };
        Self {
            items,
            page,
            limit,
            total,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1,
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn has_next(&self) -> bool {
        self.has_next
    }

    pub fn has_prev(&self) -> bool {
        self.has_prev
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn meta(&self) -> PaginationMeta {
        PaginationMeta {
            page: self.page,
            limit: self.limit,
            total: self.total,
            total_pages: self.total_pages,
            has_next: self.has_next,
            has_prev: self.has_prev,
        }
    }

    /// 1-based row numbers shown as "Showing {first}-{last} of {total}".
    pub fn visible_range(&self) -> Option<(u64, u64)> {
        if self.items.is_empty() {
            return None;
        }
        let first = (self.page as u64 - 1) * self.limit as u64 + 1;
        Some((first, first + self.items.len() as u64 - 1))
    }

    /// Local overlay applied before the confirming refetch lands.
    /// Returns `false` when no row matched.
    pub fn patch_where<P, F>(&mut self, predicate: P, mut patch: F) -> bool
    where
        P: Fn(&T) -> bool,
        F: FnMut(&mut T),
    {
        match self.items.iter_mut().find(|item| predicate(item)) {
            Some(item) => {
                patch(item);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta(page: u32, limit: u32, total: u64, total_pages: u32) -> PaginationMeta {
        PaginationMeta {
            page,
            limit,
            total,
            total_pages,
            has_next: false,
            has_prev: false,
        }
    }

    #[test]
    fn test_flags_follow_page_and_total_pages() {
        let page = Page::from_parts(vec![1, 2, 3], meta(1, 3, 7, 3));
        assert!(page.has_next());
        assert!(!page.has_prev());

        let page = Page::from_parts(vec![7], meta(3, 3, 7, 3));
        assert!(!page.has_next());
        assert!(page.has_prev());
    }

    #[test]
    fn test_items_never_exceed_limit() {
        let page = Page::from_parts((0..30).collect::<Vec<_>>(), meta(1, 25, 30, 2));
        assert_eq!(page.items().len(), 25);
        assert!(page.items().len() <= page.limit() as usize);
    }

    #[test]
    fn test_missing_total_pages_is_derived() {
        let page = Page::from_parts(vec!['a', 'b'], meta(1, 2, 5, 0));
        assert_eq!(page.total_pages(), 3);
        assert!(page.has_next());
    }

    #[test]
    fn test_empty_page_shape() {
        let page: Page<u8> = Page::empty(50);
        assert_eq!(
            page.meta(),
            PaginationMeta {
                page: 1,
                limit: 50,
                total: 0,
                total_pages: 0,
                has_next: false,
                has_prev: false,
            }
        );
        assert_eq!(page.visible_range(), None);
    }

    #[test]
    fn test_visible_range_on_second_page() {
        let page = Page::from_parts(vec![0; 10], meta(2, 25, 35, 2));
        assert_eq!(page.visible_range(), Some((26, 35)));
    }

    #[test]
    fn test_patch_where() {
        let mut page = Page::from_parts(vec![1, 2, 3], meta(1, 10, 3, 1));
        assert!(page.patch_where(|v| *v == 2, |v| *v = 20));
        assert_eq!(page.items(), &[1, 20, 3]);
        assert!(!page.patch_where(|v| *v == 99, |v| *v = 0));
    }
}
