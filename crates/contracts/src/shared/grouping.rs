//! Category grouping for the service tables

use std::collections::BTreeSet;

/// Rows sharing one category key, in the order they arrived.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryGroup<'a, T> {
    pub category: String,
    pub items: Vec<&'a T>,
}

/// Groups rows by category, ordering groups by first appearance.
pub fn group_by_category<'a, T, F>(items: &'a [T], category_of: F) -> Vec<CategoryGroup<'a, T>>
where
    F: Fn(&T) -> &str,
{
    let mut groups: Vec<CategoryGroup<'a, T>> = Vec::new();
    for item in items {
        let category = category_of(item);
        match groups.iter_mut().find(|g| g.category == category) {
            Some(group) => group.items.push(item),
            None => groups.push(CategoryGroup {
                category: category.to_string(),
                items: vec![item],
            }),
        }
    }
    groups
}

/// Per-category collapse/expand state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollapsedCategories {
    collapsed: BTreeSet<String>,
}

impl CollapsedCategories {
    pub fn is_collapsed(&self, category: &str) -> bool {
        self.collapsed.contains(category)
    }

    pub fn toggle(&mut self, category: &str) {
        if !self.collapsed.remove(category) {
            self.collapsed.insert(category.to_string());
        }
    }

    pub fn collapse_all<I, S>(&mut self, categories: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.collapsed.extend(categories.into_iter().map(Into::into));
    }

    pub fn expand_all(&mut self) {
        self.collapsed.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_groups_keep_first_appearance_order() {
        let rows = vec![
            ("Instagram", 1),
            ("YouTube", 2),
            ("Instagram", 3),
            ("TikTok", 4),
        ];
        let groups = group_by_category(&rows, |r| r.0);
        let names: Vec<_> = groups.iter().map(|g| g.category.as_str()).collect();
        assert_eq!(names, vec!["Instagram", "YouTube", "TikTok"]);
        assert_eq!(groups[0].items.len(), 2);
        assert_eq!(groups[0].items[1].1, 3);
    }

    #[test]
    fn test_collapse_toggle() {
        let mut c = CollapsedCategories::default();
        c.toggle("YouTube");
        assert!(c.is_collapsed("YouTube"));
        c.toggle("YouTube");
        assert!(!c.is_collapsed("YouTube"));
        c.collapse_all(["A", "B"]);
        assert!(c.is_collapsed("B"));
        c.expand_all();
        assert!(!c.is_collapsed("A"));
    }
}
