use super::data::Book;

/// Identifies one search request
///
/// Every search takes a new ticket; only the response carrying the latest
/// ticket may replace the results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchTicket(u64);

impl SearchTicket {
    pub fn generation(&self) -> u64 {
        self.0
    }
}

/// The two states the UI can observe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No results yet, or results left over from an earlier search
    Idle,
    /// Results reflect the last completed search
    Loaded,
}

/// Query text and current results, owned by the application
///
/// This is the only source the renderer reads from. Results are replaced
/// wholesale, never merged.
#[derive(Debug, Default)]
pub struct SearchViewState {
    query: String,
    results: Vec<Book>,
    /// Generation of the most recent search request
    generation: u64,
    /// The most recent search has not completed yet
    pending: bool,
    /// Results reflect the most recent completed search
    loaded: bool,
}

impl SearchViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Empty the query; no-op when it is already empty
    pub fn clear_query(&mut self) {
        if !self.query.is_empty() {
            self.query.clear();
        }
    }

    pub fn results(&self) -> &[Book] {
        &self.results
    }

    /// Replace the results with `books`
    pub fn set_results(&mut self, books: Vec<Book>) {
        self.results = books;
        self.pending = false;
        self.loaded = true;
    }

    /// Start a new search, invalidating any in-flight one
    pub fn begin_search(&mut self) -> SearchTicket {
        self.generation += 1;
        self.pending = true;
        SearchTicket(self.generation)
    }

    /// Whether `ticket` belongs to the most recent search
    pub fn is_current(&self, ticket: SearchTicket) -> bool {
        ticket.0 == self.generation
    }

    /// Replace the results if `ticket` is still current.
    /// Returns false (and leaves the results untouched) for stale responses.
    pub fn apply_results(&mut self, ticket: SearchTicket, books: Vec<Book>) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.set_results(books);
        true
    }

    /// Record that the search behind `ticket` failed.
    /// The previous results stay on screen but no longer count as loaded.
    pub fn fail_search(&mut self, ticket: SearchTicket) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.pending = false;
        self.loaded = false;
        true
    }

    /// True while the latest search has not completed
    pub fn is_searching(&self) -> bool {
        self.pending
    }

    pub fn phase(&self) -> Phase {
        if self.loaded {
            Phase::Loaded
        } else {
            Phase::Idle
        }
    }
}
