use std::fmt::Write as _;

use anyhow::{bail, Result};
use feed::{Category, City, QueryController, Season};
use lookbook::ALL_DESIGNERS;

pub const HELP: &str = "\
commands:
  <text> | /search <text>   new search
  /more                     scroll to the end of the feed
  /designer <name|all>      narrow by designer
  /category <name>          Womenwear, Menswear, Couture
  /season <name>            Fall/Winter 2025, Spring/Summer 2025
  /city <name>              Paris, Milan, New York, London
  /facets                   list designers seen so far
  /show                     print the feed again
  /help
  /quit";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Search(String),
    More,
    Designer(String),
    Category(Category),
    Season(Season),
    City(City),
    Facets,
    Show,
    Help,
    Quit,
}

/// `Ok(None)` for blank input.
pub fn parse(line: &str) -> Result<Option<Command>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let Some(rest) = line.strip_prefix('/') else {
        return Ok(Some(Command::Search(line.to_string())));
    };

    let (name, arg) = match rest.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (rest, ""),
    };

    let cmd = match (name, arg) {
        ("search" | "s", "") => bail!("/search needs a query"),
        ("search" | "s", q) => Command::Search(q.to_string()),
        ("more" | "m", _) => Command::More,
        ("designer" | "d", "") => bail!("/designer needs a name or 'all'"),
        ("designer" | "d", d) => Command::Designer(d.to_string()),
        ("category", c) => Command::Category(c.parse()?),
        ("season", s) => Command::Season(s.parse()?),
        ("city", c) => Command::City(c.parse()?),
        ("facets" | "f", _) => Command::Facets,
        ("show", _) => Command::Show,
        ("help" | "h", _) => Command::Help,
        ("quit" | "q", _) => Command::Quit,
        (other, _) => bail!("unknown command /{other} (try /help)"),
    };
    Ok(Some(cmd))
}

/// Maps user input onto a facet label, ignoring case when the designer is known.
pub fn resolve_designer(ctl: &QueryController, wanted: &str) -> String {
    if wanted.eq_ignore_ascii_case("all") {
        return ALL_DESIGNERS.to_string();
    }
    ctl.vocabulary()
        .labels()
        .find(|label| label.eq_ignore_ascii_case(wanted))
        .unwrap_or(wanted)
        .to_string()
}

/// A note for labels with no looks in the current results.
pub fn unknown_designer(ctl: &QueryController, label: &str) -> Option<String> {
    if ctl.vocabulary().contains(label) {
        return None;
    }
    Some(format!("no looks from {label:?} yet; the view stays empty until some arrive"))
}

pub fn render(ctl: &QueryController) -> String {
    let st = ctl.state();
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:?} | {} / {} / {} | {} | page {}",
        st.query,
        st.category,
        st.season,
        st.city,
        st.designer.label(),
        st.page,
    );

    let cards = ctl.display_items();
    for (i, card) in cards.iter().enumerate() {
        let _ = writeln!(out, "{:>4}. {} | {}", i + 1, card.designer, card.subtitle);
    }
    let _ = write!(out, "showing {} of {}", cards.len(), ctl.results().len());

    if ctl.is_loading() {
        out.push_str(" | loading...");
    } else if ctl.is_exhausted() {
        out.push_str(" | end of results");
    }
    out
}

pub fn render_facets(ctl: &QueryController) -> String {
    ctl.vocabulary().labels().collect::<Vec<_>>().join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use feed::SearchResponse;
    use lookbook::Identifier;

    #[test]
    fn plain_text_searches() {
        assert_eq!(
            parse("  red leather jacket ").unwrap(),
            Some(Command::Search("red leather jacket".into()))
        );
        assert_eq!(parse("   ").unwrap(), None);
    }

    #[test]
    fn slash_commands() {
        assert_eq!(parse("/search silk").unwrap(), Some(Command::Search("silk".into())));
        assert_eq!(parse("/more").unwrap(), Some(Command::More));
        assert_eq!(
            parse("/designer Alexander McQueen").unwrap(),
            Some(Command::Designer("Alexander McQueen".into()))
        );
        assert_eq!(parse("/city new york").unwrap(), Some(Command::City(City::NewYork)));
        assert_eq!(
            parse("/season Spring/Summer 2025").unwrap(),
            Some(Command::Season(Season::SpringSummer2025))
        );
        assert_eq!(parse("/q").unwrap(), Some(Command::Quit));
    }

    #[test]
    fn bad_commands() {
        assert!(parse("/search").is_err());
        assert!(parse("/designer").is_err());
        assert!(parse("/category Kidswear").is_err());
        assert!(parse("/teleport").is_err());
    }

    fn loaded() -> QueryController {
        let mut ctl = QueryController::default();
        let ticket = ctl.submit("leather");
        let results = ["A/HouseX/housex-leather-jacket-12.jpg", "A/HouseY/housey-silk-dress-3.jpg"]
            .into_iter()
            .map(Identifier::from)
            .collect();
        ctl.complete(&ticket, Ok(SearchResponse { results }));
        ctl
    }

    #[test]
    fn resolves_designer_case_insensitively() {
        let ctl = loaded();
        assert_eq!(resolve_designer(&ctl, "housex"), "HouseX");
        assert_eq!(resolve_designer(&ctl, "ALL"), ALL_DESIGNERS);
        assert_eq!(resolve_designer(&ctl, "Unknown"), "Unknown");
    }

    #[test]
    fn notes_designers_missing_from_results() {
        let ctl = loaded();
        assert_eq!(unknown_designer(&ctl, "HouseX"), None);
        assert_eq!(unknown_designer(&ctl, ALL_DESIGNERS), None);
        let note = unknown_designer(&ctl, "HouseZ").unwrap();
        assert!(note.contains("\"HouseZ\""), "{note}");
    }

    #[test]
    fn renders_cards() {
        let mut ctl = loaded();
        ctl.select_designer("HouseX");
        let text = render(&ctl);
        assert!(text.contains("1. HOUSEX | leather jacket - Look 12"), "{text}");
        assert!(text.ends_with("showing 1 of 2"), "{text}");
        assert_eq!(render_facets(&ctl), "All Designers\nHouseX\nHouseY");
    }
}
