//! Checkbox selection for bulk actions

use std::collections::BTreeSet;

/// Tri-state of a "select all" header checkbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckState {
    Unchecked,
    Checked,
    Indeterminate,
}

/// Set of selected row ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: BTreeSet<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn set(&mut self, id: &str, checked: bool) {
        if checked {
            self.ids.insert(id.to_string());
        } else {
            self.ids.remove(id);
        }
    }

    /// Page-level "select all".
    ///
    /// When every selectable row is already selected the selection is emptied,
    /// otherwise it becomes exactly the selectable rows. Two calls in a row
    /// always come back to an empty selection.
    pub fn toggle_all<I, S>(&mut self, selectable: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let selectable: BTreeSet<String> = selectable.into_iter().map(Into::into).collect();
        if selectable.is_empty() || selectable.is_subset(&self.ids) {
            self.ids.clear();
        } else {
            self.ids = selectable;
        }
    }

    /// "Select all within category": adds or removes just the members of one
    /// group, leaving other groups untouched.
    pub fn toggle_group<I, S>(&mut self, members: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let members: Vec<String> = members.into_iter().map(Into::into).collect();
        if members.is_empty() {
            return;
        }
        if members.iter().all(|id| self.ids.contains(id)) {
            for id in &members {
                self.ids.remove(id);
            }
        } else {
            self.ids.extend(members);
        }
    }

    pub fn check_state<'a, I>(&self, selectable: I) -> CheckState
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut total = 0usize;
        let mut selected = 0usize;
        for id in selectable {
            total += 1;
            if self.ids.contains(id) {
                selected += 1;
            }
        }
        match (selected, total) {
            (0, _) => CheckState::Unchecked,
            (s, t) if s == t => CheckState::Checked,
            _ => CheckState::Indeterminate,
        }
    }

    /// Drops ids that are no longer visible or selectable.
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&str) -> bool,
    {
        self.ids.retain(|id| keep(id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_all_twice_returns_to_empty() {
        let mut sel = Selection::new();
        sel.toggle_all(["1", "3"]);
        assert_eq!(sel.ids().collect::<Vec<_>>(), vec!["1", "3"]);
        sel.toggle_all(["1", "3"]);
        assert!(sel.is_empty());
    }

    #[test]
    fn test_select_all_from_partial_selects_exactly_selectable() {
        let mut sel = Selection::new();
        sel.set("3", true);
        assert_eq!(sel.check_state(["1", "3"]), CheckState::Indeterminate);

        sel.toggle_all(["1", "3"]);
        assert_eq!(sel.check_state(["1", "3"]), CheckState::Checked);
        assert_eq!(sel.len(), 2);

        sel.toggle_all(["1", "3"]);
        assert!(sel.is_empty());
    }

    #[test]
    fn test_select_all_with_nothing_selectable() {
        let mut sel = Selection::new();
        sel.toggle_all(Vec::<String>::new());
        assert!(sel.is_empty());
        assert_eq!(sel.check_state([]), CheckState::Unchecked);
    }

    #[test]
    fn test_group_toggle_leaves_other_groups() {
        let mut sel = Selection::new();
        sel.set("ig-1", true);
        sel.toggle_group(["yt-1", "yt-2"]);
        assert_eq!(sel.len(), 3);
        sel.toggle_group(["yt-1", "yt-2"]);
        assert_eq!(sel.ids().collect::<Vec<_>>(), vec!["ig-1"]);
    }

    #[test]
    fn test_retain() {
        let mut sel = Selection::new();
        sel.toggle_all(["a", "b", "c"]);
        sel.retain(|id| id != "b");
        assert_eq!(sel.ids().collect::<Vec<_>>(), vec!["a", "c"]);
    }
}
