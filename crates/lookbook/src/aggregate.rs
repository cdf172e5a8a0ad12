use std::collections::HashSet;

use crate::Identifier;

/// Union of `existing` and `incoming`, deduplicated by exact identifier, in
/// first-seen order over `existing ++ incoming`.
pub fn merge(existing: &[Identifier], incoming: &[Identifier]) -> Vec<Identifier> {
    let mut seen: HashSet<&Identifier> = HashSet::with_capacity(existing.len() + incoming.len());
    existing
        .iter()
        .chain(incoming)
        .filter(|id| seen.insert(*id))
        .cloned()
        .collect()
}

/// Ordered, duplicate-free list of every identifier fetched for the current query.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResultList {
    items: Vec<Identifier>,
}

impl ResultList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn merged(&self, incoming: &[Identifier]) -> Self {
        Self { items: merge(&self.items, incoming) }
    }

    pub fn as_slice(&self) -> &[Identifier] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Identifier> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a> IntoIterator for &'a ResultList {
    type Item = &'a Identifier;
    type IntoIter = std::slice::Iter<'a, Identifier>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[&str]) -> Vec<Identifier> {
        raw.iter().map(|s| Identifier::from(*s)).collect()
    }

    #[test]
    fn drops_duplicates_keeping_first_position() {
        let merged = merge(&ids(&["a", "b"]), &ids(&["c", "a", "d", "c"]));
        assert_eq!(merged, ids(&["a", "b", "c", "d"]));
    }

    #[test]
    fn merge_into_empty_dedups_incoming() {
        let incoming = ids(&[
            "A/HouseX/housex-leather-jacket-12.jpg",
            "A/HouseX/housex-leather-jacket-12.jpg",
            "A/HouseY/housey-silk-dress-3.jpg",
        ]);
        assert_eq!(merge(&[], &incoming).len(), 2);
    }

    #[test]
    fn merging_same_page_twice_changes_nothing() {
        let a = ids(&["x", "y"]);
        let b = ids(&["y", "z"]);
        let once = merge(&a, &b);
        assert_eq!(merge(&once, &b), once);
    }

    #[test]
    fn result_list_merged_leaves_original_untouched() {
        let first = ResultList::new().merged(&ids(&["a", "b"]));
        let second = first.merged(&ids(&["b", "c"]));
        assert_eq!(first.len(), 2);
        assert_eq!(second.as_slice(), ids(&["a", "b", "c"]).as_slice());
    }
}
