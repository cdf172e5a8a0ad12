use crate::{Identifier, ALL_DESIGNERS};

/// Client-side designer narrowing over already fetched results.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum DesignerFilter {
    #[default]
    All,
    Only(String),
}

impl DesignerFilter {
    pub fn from_label(label: &str) -> Self {
        if label == ALL_DESIGNERS {
            Self::All
        } else {
            Self::Only(label.to_string())
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::All => ALL_DESIGNERS,
            Self::Only(designer) => designer,
        }
    }

    pub fn matches(&self, id: &Identifier) -> bool {
        match self {
            Self::All => true,
            Self::Only(designer) => id.designer().as_deref() == Some(designer.as_str()),
        }
    }
}

/// Subsequence of `list` matching `filter`, in list order.
pub fn visible<'a>(list: &'a [Identifier], filter: &DesignerFilter) -> Vec<&'a Identifier> {
    match filter {
        DesignerFilter::All => list.iter().collect(),
        DesignerFilter::Only(_) => list.iter().filter(|id| filter.matches(id)).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Identifier> {
        [
            "A/HouseX/housex-coat-1.jpg",
            "A/HouseY/housey-dress-2.jpg",
            "A/HouseX/housex-boots-3.jpg",
            "A/House%20Z/house-z-cape-4.jpg",
        ]
        .into_iter()
        .map(Identifier::from)
        .collect()
    }

    #[test]
    fn sentinel_is_identity() {
        let list = sample();
        let shown = visible(&list, &DesignerFilter::from_label(ALL_DESIGNERS));
        assert_eq!(shown, list.iter().collect::<Vec<_>>());
    }

    #[test]
    fn narrows_in_order() {
        let list = sample();
        let shown = visible(&list, &DesignerFilter::from_label("HouseX"));
        assert_eq!(shown, vec![&list[0], &list[2]]);
    }

    #[test]
    fn compares_decoded_segment() {
        let list = sample();
        let shown = visible(&list, &DesignerFilter::Only("House Z".into()));
        assert_eq!(shown, vec![&list[3]]);
    }

    #[test]
    fn unknown_designer_shows_nothing() {
        let list = sample();
        assert!(visible(&list, &DesignerFilter::Only("Nobody".into())).is_empty());
        assert_eq!(DesignerFilter::Only("Nobody".into()).label(), "Nobody");
    }
}
