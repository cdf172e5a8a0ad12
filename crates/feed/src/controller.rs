use lookbook::{
    DesignerFilter, DisplayItem, FacetVocabulary, Identifier, LabelFormatter, ResultList,
};
use tracing::{debug, info, warn};

use crate::{
    Category, City, FetchError, Generation, QueryState, ScrollPhase, ScrollTrigger, SearchRequest,
    SearchResponse, Season,
};

pub const DEFAULT_PAGE_SIZE: u32 = 24;
pub const DEFAULT_EXHAUSTION_THRESHOLD: u32 = 1;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedConfig {
    /// `top_k` sent with every request.
    pub page_size: u32,
    /// Consecutive empty pages that end pagination for a query. 0 never ends it.
    pub exhaustion_threshold: u32,
    /// Also count pages that add no new identifiers as empty.
    pub exhaust_on_stale_pages: bool,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            exhaustion_threshold: DEFAULT_EXHAUSTION_THRESHOLD,
            exhaust_on_stale_pages: false,
        }
    }
}

/// A page request tagged with the query generation that issued it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageTicket {
    pub generation: Generation,
    pub request: SearchRequest,
}

/// What happened when a fetch outcome was applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Completion {
    Merged { generation: Generation, page: u32, added: usize },
    /// Merged, and no further pages will be requested for this generation.
    Exhausted { generation: Generation, page: u32 },
    /// Belonged to a superseded query; nothing changed.
    Stale { generation: Generation, page: u32 },
    Failed { generation: Generation, page: u32, error: FetchError },
}

/// Owns the query state and the results fetched for it.
///
/// Every operation is a synchronous transition; the network round trip sits
/// between [`submit`](Self::submit)/[`advance`](Self::advance), which hand out
/// a [`PageTicket`], and [`complete`](Self::complete), which takes it back.
pub struct QueryController {
    config: FeedConfig,
    formatter: LabelFormatter,
    state: QueryState,
    generation: Generation,
    active: bool,
    results: ResultList,
    vocabulary: FacetVocabulary,
    scroll: ScrollTrigger,
    empty_streak: u32,
}

impl Default for QueryController {
    fn default() -> Self {
        Self::new(FeedConfig::default(), LabelFormatter::default())
    }
}

impl QueryController {
    pub fn new(config: FeedConfig, formatter: LabelFormatter) -> Self {
        Self {
            config,
            formatter,
            state: QueryState::default(),
            generation: Generation::default(),
            active: false,
            results: ResultList::new(),
            vocabulary: FacetVocabulary::default(),
            scroll: ScrollTrigger::new(),
            empty_streak: 0,
        }
    }

    pub fn state(&self) -> &QueryState {
        &self.state
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn results(&self) -> &ResultList {
        &self.results
    }

    pub fn vocabulary(&self) -> &FacetVocabulary {
        &self.vocabulary
    }

    pub fn scroll_phase(&self) -> ScrollPhase {
        self.scroll.phase()
    }

    pub fn is_loading(&self) -> bool {
        self.state.loading
    }

    pub fn is_exhausted(&self) -> bool {
        self.scroll.is_exhausted()
    }

    /// Starts a new generation: clears results and asks for page 1.
    pub fn submit(&mut self, text: impl Into<String>) -> PageTicket {
        self.generation = self.generation.next();
        self.active = true;
        self.state.query = text.into();
        self.state.page = 1;
        self.state.loading = true;
        self.results = ResultList::new();
        self.vocabulary = FacetVocabulary::default();
        self.empty_streak = 0;
        self.scroll.reset();
        self.scroll.rearm(true, true);

        debug!(generation=%self.generation, query=%self.state.query, "feed: submit");
        self.ticket()
    }

    /// Next page of the current query, unless one is loading or there are no more.
    pub fn advance(&mut self) -> Option<PageTicket> {
        if !self.active || self.state.loading || self.scroll.is_exhausted() {
            debug!(
                generation=%self.generation,
                loading=self.state.loading,
                exhausted=self.scroll.is_exhausted(),
                "feed: page advance ignored"
            );
            return None;
        }
        self.state.page += 1;
        self.state.loading = true;
        self.scroll.rearm(true, true);

        debug!(generation=%self.generation, page=self.state.page, "feed: advance");
        Some(self.ticket())
    }

    /// Visibility report for the sentinel after the last rendered card.
    pub fn sentinel_visibility(&mut self, visible: bool) -> Option<PageTicket> {
        if !self.scroll.report(visible) {
            return None;
        }
        self.advance()
    }

    pub fn complete(
        &mut self,
        ticket: &PageTicket,
        outcome: Result<SearchResponse, FetchError>,
    ) -> Completion {
        let generation = ticket.generation;
        let page = ticket.request.page;

        if generation != self.generation {
            debug!(%generation, current=%self.generation, page, "feed: discarding stale response");
            return Completion::Stale { generation, page };
        }

        self.state.loading = false;
        let completion = match outcome {
            Ok(response) => self.absorb(generation, page, response.results),
            Err(error) => {
                warn!(%generation, page, error=%error, "feed: page fetch failed");
                Completion::Failed { generation, page, error }
            }
        };
        self.scroll.rearm(self.active, false);
        completion
    }

    fn absorb(
        &mut self,
        generation: Generation,
        page: u32,
        incoming: Vec<Identifier>,
    ) -> Completion {
        let before = self.results.len();
        self.results = self.results.merged(&incoming);
        // Facets follow the merged list, never a pre-merge snapshot.
        self.vocabulary = FacetVocabulary::from_results(self.results.as_slice());
        let added = self.results.len() - before;

        let empty = incoming.is_empty() || (self.config.exhaust_on_stale_pages && added == 0);
        self.empty_streak = if empty { self.empty_streak + 1 } else { 0 };

        let threshold = self.config.exhaustion_threshold;
        if threshold > 0 && self.empty_streak >= threshold {
            self.scroll.exhaust();
            info!(%generation, page, total=self.results.len(), "feed: no further pages");
            return Completion::Exhausted { generation, page };
        }

        debug!(%generation, page, added, total=self.results.len(), "feed: page merged");
        Completion::Merged { generation, page, added }
    }

    /// Narrows the shown results. Never fetches; the rendered list changed, so
    /// the sentinel is observed afresh.
    pub fn select_designer(&mut self, label: &str) {
        self.state.designer = DesignerFilter::from_label(label);
        self.scroll.rearm(self.active, self.state.loading);
    }

    pub fn set_category(&mut self, category: Category) {
        self.state.category = category;
    }

    pub fn set_season(&mut self, season: Season) {
        self.state.season = season;
    }

    pub fn set_city(&mut self, city: City) {
        self.state.city = city;
    }

    pub fn visible(&self) -> Vec<&Identifier> {
        lookbook::visible(self.results.as_slice(), &self.state.designer)
    }

    pub fn display_items(&self) -> Vec<DisplayItem> {
        self.visible().into_iter().map(|id| self.formatter.display(id)).collect()
    }

    fn ticket(&self) -> PageTicket {
        PageTicket {
            generation: self.generation,
            request: SearchRequest {
                query: self.state.query.clone(),
                top_k: self.config.page_size,
                page: self.state.page,
            },
        }
    }
}
