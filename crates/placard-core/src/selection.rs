//! Selection set with replace-on-write semantics.

use crate::element::ElementId;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// The set of element ids currently marked selected.
///
/// Mutations are pure: each produces a NEW set which the owner writes back
/// wholesale, so a "current" and a "next" selection can never alias each
/// other mid-update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionSet {
    ids: HashSet<ElementId>,
}

impl SelectionSet {
    /// The empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// A selection containing exactly the given ids.
    pub fn of(ids: impl IntoIterator<Item = ElementId>) -> Self {
        Self {
            ids: ids.into_iter().collect(),
        }
    }

    /// This selection plus `id`.
    pub fn added(&self, id: ElementId) -> Self {
        let mut ids = self.ids.clone();
        ids.insert(id);
        Self { ids }
    }

    /// This selection minus `id`.
    pub fn removed(&self, id: &ElementId) -> Self {
        let mut ids = self.ids.clone();
        ids.remove(id);
        Self { ids }
    }

    /// The empty selection.
    pub fn cleared(&self) -> Self {
        Self::new()
    }

    /// This selection filtered down to the ids `keep` accepts.
    pub fn retained(&self, keep: impl Fn(&ElementId) -> bool) -> Self {
        Self {
            ids: self.ids.iter().filter(|id| keep(id)).cloned().collect(),
        }
    }

    pub fn contains(&self, id: &ElementId) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// The distinguished exactly-one-selected state: true when `id` is the
    /// sole selected element. Resize handles are shown only in this state.
    pub fn is_sole(&self, id: &ElementId) -> bool {
        self.len() == 1 && self.contains(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ElementId> {
        self.ids.iter()
    }

    /// Snapshot of the ids, for bulk store operations.
    pub fn to_id_set(&self) -> HashSet<ElementId> {
        self.ids.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: &str) -> ElementId {
        ElementId::from(raw)
    }

    #[test]
    fn test_mutations_produce_new_sets() {
        let empty = SelectionSet::new();
        let one = empty.added(id("TEXT__1__0"));
        assert!(empty.is_empty());
        assert_eq!(one.len(), 1);

        let none = one.removed(&id("TEXT__1__0"));
        assert!(one.contains(&id("TEXT__1__0")));
        assert!(none.is_empty());
    }

    #[test]
    fn test_added_is_idempotent() {
        let set = SelectionSet::new()
            .added(id("TEXT__1__0"))
            .added(id("TEXT__1__0"));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_is_sole() {
        let a = id("TEXT__1__0");
        let b = id("IMAGE__1__1");
        let one = SelectionSet::of([a.clone()]);
        assert!(one.is_sole(&a));

        let two = one.added(b.clone());
        assert!(!two.is_sole(&a));
        assert!(!two.is_sole(&b));
    }

    #[test]
    fn test_retained() {
        let a = id("TEXT__1__0");
        let b = id("IMAGE__1__1");
        let set = SelectionSet::of([a.clone(), b.clone()]);
        let only_a = set.retained(|candidate| candidate == &a);
        assert!(only_a.contains(&a));
        assert!(!only_a.contains(&b));
    }
}
