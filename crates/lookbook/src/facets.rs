use std::collections::BTreeSet;

use serde::Serialize;

use crate::Identifier;

/// Facet value meaning "no designer narrowing".
pub const ALL_DESIGNERS: &str = "All Designers";

/// Designer facet derived from a result list: the sentinel followed by every
/// distinct designer, sorted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct FacetVocabulary {
    designers: Vec<String>,
}

impl FacetVocabulary {
    /// Rebuilds the vocabulary from scratch. Identifiers without a designer
    /// segment contribute nothing.
    pub fn from_results(list: &[Identifier]) -> Self {
        let designers: BTreeSet<String> = list.iter().filter_map(Identifier::designer).collect();
        Self { designers: designers.into_iter().collect() }
    }

    /// Designers only, without the sentinel.
    pub fn designers(&self) -> &[String] {
        &self.designers
    }

    /// Every selectable label, sentinel first.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        std::iter::once(ALL_DESIGNERS).chain(self.designers.iter().map(String::as_str))
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.labels().map(str::to_string).collect()
    }

    pub fn contains(&self, label: &str) -> bool {
        label == ALL_DESIGNERS || self.designers.binary_search_by(|d| d.as_str().cmp(label)).is_ok()
    }
}

pub fn vocabulary(list: &[Identifier]) -> FacetVocabulary {
    FacetVocabulary::from_results(list)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_then_sorted_designers() {
        let list: Vec<Identifier> = [
            "A/HouseY/housey-silk-dress-3.jpg",
            "A/HouseX/housex-leather-jacket-12.jpg",
            "A/HouseY/housey-silk-dress-4.jpg",
        ]
        .into_iter()
        .map(Identifier::from)
        .collect();

        let vocab = vocabulary(&list);
        assert_eq!(vocab.to_vec(), vec!["All Designers", "HouseX", "HouseY"]);
        assert!(vocab.contains("HouseY"));
        assert!(!vocab.contains("HouseZ"));
    }

    #[test]
    fn empty_list_has_only_sentinel() {
        let vocab = vocabulary(&[]);
        assert_eq!(vocab.to_vec(), vec![ALL_DESIGNERS]);
        assert!(vocab.designers().is_empty());
    }

    #[test]
    fn sorting_is_case_sensitive() {
        let list =
            vec![Identifier::from("A/alaia/a-1.jpg"), Identifier::from("A/Zimmermann/z-1.jpg")];
        assert_eq!(vocabulary(&list).designers(), ["Zimmermann", "alaia"]);
    }
}
