use std::fmt;
use std::str::FromStr;

use lookbook::DesignerFilter;

use crate::ParseOptionError;

pub const DEFAULT_QUERY: &str = "bohemian";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Category {
    #[default]
    Womenwear,
    Menswear,
    Couture,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Womenwear, Category::Menswear, Category::Couture];

    pub fn label(self) -> &'static str {
        match self {
            Category::Womenwear => "Womenwear",
            Category::Menswear => "Menswear",
            Category::Couture => "Couture",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Season {
    #[default]
    FallWinter2025,
    SpringSummer2025,
}

impl Season {
    pub const ALL: [Season; 2] = [Season::FallWinter2025, Season::SpringSummer2025];

    pub fn label(self) -> &'static str {
        match self {
            Season::FallWinter2025 => "Fall/Winter 2025",
            Season::SpringSummer2025 => "Spring/Summer 2025",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum City {
    #[default]
    Paris,
    Milan,
    NewYork,
    London,
}

impl City {
    pub const ALL: [City; 4] = [City::Paris, City::Milan, City::NewYork, City::London];

    pub fn label(self) -> &'static str {
        match self {
            City::Paris => "Paris",
            City::Milan => "Milan",
            City::NewYork => "New York",
            City::London => "London",
        }
    }
}

fn parse_label<T: Copy>(
    kind: &'static str,
    options: &[T],
    label: fn(T) -> &'static str,
    value: &str,
) -> Result<T, ParseOptionError> {
    let wanted = value.trim();
    options
        .iter()
        .copied()
        .find(|o| label(*o).eq_ignore_ascii_case(wanted))
        .ok_or_else(|| ParseOptionError { kind, value: value.to_string() })
}

impl FromStr for Category {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_label("category", &Self::ALL, Self::label, s)
    }
}

impl FromStr for Season {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_label("season", &Self::ALL, Self::label, s)
    }
}

impl FromStr for City {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_label("city", &Self::ALL, Self::label, s)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Tag of one submitted query. Responses carrying an older tag are stale.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(u64);

impl Generation {
    pub fn next(self) -> Self {
        Generation(self.0 + 1)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Everything the user has chosen plus the paging cursor.
///
/// Category, season and city are kept for display only: they are neither sent
/// to the endpoint nor applied to the results.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryState {
    pub query: String,
    pub category: Category,
    pub season: Season,
    pub city: City,
    pub designer: DesignerFilter,
    /// 1-based page of the most recent request.
    pub page: u32,
    pub loading: bool,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            query: DEFAULT_QUERY.to_string(),
            category: Category::default(),
            season: Season::default(),
            city: City::default(),
            designer: DesignerFilter::All,
            page: 1,
            loading: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_first_load() {
        let st = QueryState::default();
        assert_eq!(st.query, "bohemian");
        assert_eq!(st.category, Category::Womenwear);
        assert_eq!(st.season.label(), "Fall/Winter 2025");
        assert_eq!(st.city, City::Paris);
        assert_eq!(st.designer, DesignerFilter::All);
        assert_eq!(st.page, 1);
        assert!(!st.loading);
    }

    #[test]
    fn options_parse_from_labels() {
        assert_eq!("new york".parse::<City>().unwrap(), City::NewYork);
        assert_eq!(" Couture ".parse::<Category>().unwrap(), Category::Couture);
        assert_eq!("spring/summer 2025".parse::<Season>().unwrap(), Season::SpringSummer2025);

        let err = "Tokyo".parse::<City>().unwrap_err();
        assert_eq!(err.to_string(), "unknown city: \"Tokyo\"");
    }

    #[test]
    fn generations_increase() {
        let g = Generation::default();
        assert!(g.next() > g);
        assert_eq!(g.next().next().get(), 2);
    }
}
