use std::collections::HashSet;

use crate::{DisplayItem, Identifier};

/// Noise words dropped from look descriptions: show names, cities and the
/// designer names that leak into file slugs.
pub const DEFAULT_STOPWORDS: &[&str] = &[
    "fashion",
    "week",
    "paris",
    "chloe",
    "hermes",
    "courreges",
    "alaia",
    "alexander",
    "mcqueen",
];

/// Parsed card label for one identifier.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Label {
    pub designer: String,
    pub description: String,
    /// Last token left after stopword removal, if any.
    pub look: Option<String>,
}

impl Label {
    pub fn subtitle(&self) -> String {
        match &self.look {
            Some(look) if self.description.is_empty() => format!("Look {look}"),
            Some(look) => format!("{} - Look {look}", self.description),
            None => self.description.clone(),
        }
    }
}

/// Turns identifiers into designer names and subtitles.
#[derive(Clone, Debug)]
pub struct LabelFormatter {
    stopwords: HashSet<String>,
}

impl Default for LabelFormatter {
    fn default() -> Self {
        Self::with_stopwords(DEFAULT_STOPWORDS.iter().copied())
    }
}

impl LabelFormatter {
    pub fn with_stopwords<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let stopwords = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { stopwords }
    }

    pub fn is_stopword(&self, token: &str) -> bool {
        self.stopwords.contains(&token.to_lowercase())
    }

    pub fn format(&self, id: &Identifier) -> Label {
        let parts = id.parts();
        let designer = parts.designer.unwrap_or_default();

        let slug = spaced(strip_extension(&parts.filename));
        let remainder = strip_prefix_ignore_case(&slug, &spaced(&designer))
            .unwrap_or(&slug)
            .trim();

        let mut tokens: Vec<&str> = remainder
            .split_whitespace()
            .filter(|t| !self.is_stopword(t))
            .collect();
        let look = tokens.pop().map(str::to_string);

        Label { designer, description: tokens.join(" "), look }
    }

    pub fn display(&self, id: &Identifier) -> DisplayItem {
        let label = self.format(id);
        DisplayItem {
            identifier: id.clone(),
            designer: label.designer.to_uppercase(),
            subtitle: label.subtitle(),
        }
    }
}

/// Drops a trailing `.ext`; a bare trailing dot is kept.
fn strip_extension(filename: &str) -> &str {
    match filename.rfind('.') {
        Some(dot) if dot + 1 < filename.len() => &filename[..dot],
        _ => filename,
    }
}

fn spaced(text: &str) -> String {
    text.replace(['-', '_'], " ")
}

fn strip_prefix_ignore_case<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    let mut chars = text.char_indices();
    let mut end = 0;
    for expected in prefix.chars() {
        let (at, found) = chars.next()?;
        if !found.to_lowercase().eq(expected.to_lowercase()) {
            return None;
        }
        end = at + found.len_utf8();
    }
    Some(&text[end..])
}
