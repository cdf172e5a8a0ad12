/// Where the end-of-feed sentinel observer stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollPhase {
    /// No sentinel, a page is loading, or the query is exhausted.
    Idle,
    Armed,
    /// Fired on the last transition into visibility; waits for the next change.
    Firing,
}

/// Edge detector over sentinel visibility reports.
///
/// Only a transition into visibility fires. Re-observing (after the rendered
/// list or the loading flag changes) forgets the last report, so a sentinel
/// that is still on screen fires again once armed.
#[derive(Clone, Debug)]
pub struct ScrollTrigger {
    phase: ScrollPhase,
    visible: bool,
    exhausted: bool,
}

impl Default for ScrollTrigger {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollTrigger {
    pub fn new() -> Self {
        Self { phase: ScrollPhase::Idle, visible: false, exhausted: false }
    }

    pub fn phase(&self) -> ScrollPhase {
        self.phase
    }

    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    pub fn rearm(&mut self, sentinel_present: bool, loading: bool) {
        self.visible = false;
        self.phase = if sentinel_present && !loading && !self.exhausted {
            ScrollPhase::Armed
        } else {
            ScrollPhase::Idle
        };
    }

    /// Stays idle until [`reset`](Self::reset).
    pub fn exhaust(&mut self) {
        self.exhausted = true;
        self.phase = ScrollPhase::Idle;
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Feeds one visibility report; `true` means request the next page.
    pub fn report(&mut self, visible: bool) -> bool {
        let entered = visible && !self.visible;
        self.visible = visible;
        match self.phase {
            ScrollPhase::Idle => false,
            ScrollPhase::Armed if entered => {
                self.phase = ScrollPhase::Firing;
                true
            }
            ScrollPhase::Armed => false,
            ScrollPhase::Firing => {
                if !visible {
                    self.phase = ScrollPhase::Armed;
                }
                false
            }
        }
    }
}
