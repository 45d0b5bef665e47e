//! Search state: current selection, last result and the fetch lifecycle.
//!
//! A fetch is split in two so the UI never holds state across an await:
//! [`SearchState::begin`] hands out a [`SearchTicket`], the caller runs the
//! request, and [`SearchState::finish`] applies whatever came back.

use crate::error::JokeError;
use crate::ledger::RecentSearches;
use crate::request::{self, RequestDescriptor};
use crate::service::JokeService;
use crate::types::{Category, Joke, JokeBody, RecentSearchEntry, SearchSelection};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchTicket {
    pub sequence: u64,
    pub selection: SearchSelection,
    pub request: RequestDescriptor,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    Found,
    NoResults,
    Failed,
    /// A newer request was issued before this one answered.
    Stale,
}

/// What the result area shows. Error and joke are never shown together.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResultPanel<'a> {
    Empty,
    Error(&'a str),
    Joke(&'a Joke),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchState {
    pub selection: SearchSelection,
    joke: Option<Joke>,
    error: Option<String>,
    loading: bool,
    issued: u64,
    discard_stale: bool,
}

impl SearchState {
    pub fn new(discard_stale: bool) -> Self {
        Self {
            discard_stale,
            ..Self::default()
        }
    }

    pub fn set_topic(&mut self, topic: impl Into<String>) {
        self.selection.topic = topic.into();
    }

    pub fn set_category(&mut self, category: Category) {
        self.selection.category = category;
    }

    pub fn set_safe_mode(&mut self, safe_mode: bool) {
        self.selection.safe_mode = safe_mode;
    }

    pub fn joke(&self) -> Option<&Joke> {
        self.joke.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn result_panel(&self) -> ResultPanel<'_> {
        match (&self.error, &self.joke) {
            (Some(message), _) if !message.is_empty() => ResultPanel::Error(message),
            (_, Some(joke)) => ResultPanel::Joke(joke),
            _ => ResultPanel::Empty,
        }
    }

    /// Overwrites the selection from a recent search and returns the values
    /// to fetch with. Callers fetch with the returned selection rather than
    /// reading `self.selection` back.
    pub fn apply_recent(&mut self, entry: &RecentSearchEntry) -> SearchSelection {
        self.selection = entry.selection();
        entry.selection()
    }

    pub fn begin(&mut self, selection: SearchSelection) -> SearchTicket {
        self.loading = true;
        self.error = None;
        self.issued += 1;
        let request = request::build(&selection);
        tracing::debug!(sequence = self.issued, path = %request.path(), "search started");
        SearchTicket {
            sequence: self.issued,
            selection,
            request,
        }
    }

    pub fn finish(
        &mut self,
        ticket: SearchTicket,
        result: Result<Joke, JokeError>,
        ledger: &mut RecentSearches,
    ) -> SearchOutcome {
        if self.discard_stale && ticket.sequence < self.issued {
            tracing::debug!(
                sequence = ticket.sequence,
                latest = self.issued,
                "dropping stale joke response"
            );
            return SearchOutcome::Stale;
        }

        let outcome = match result {
            Ok(joke) => {
                self.joke = Some(joke);
                self.error = None;
                ledger.record(&ticket.selection);
                SearchOutcome::Found
            }
            Err(err) => {
                if let JokeError::Transport(detail) = &err {
                    tracing::warn!(error = %detail, "joke request failed");
                }
                self.error = Some(err.user_message().to_string());
                self.joke = None;
                match err {
                    JokeError::NoResults => SearchOutcome::NoResults,
                    JokeError::Transport(_) => SearchOutcome::Failed,
                }
            }
        };
        self.loading = false;
        outcome
    }

    pub async fn submit<S>(
        &mut self,
        service: &S,
        ledger: &mut RecentSearches,
        selection: SearchSelection,
    ) -> SearchOutcome
    where
        S: JokeService + ?Sized,
    {
        let ticket = self.begin(selection);
        let result = service.fetch(&ticket.request).await;
        self.finish(ticket, result, ledger)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum JokeBlock<'a> {
    Text(&'a str),
    Setup(&'a str),
    Delivery(&'a str),
}

/// Text blocks for a joke, in display order.
pub fn joke_blocks(joke: &Joke) -> Vec<JokeBlock<'_>> {
    match &joke.body {
        JokeBody::Single { joke } => vec![JokeBlock::Text(joke)],
        JokeBody::TwoPart { setup, delivery } => {
            vec![JokeBlock::Setup(setup), JokeBlock::Delivery(delivery)]
        }
    }
}

pub fn submit_label(loading: bool) -> (&'static str, &'static str) {
    if loading {
        ("⏳", "Fetching...")
    } else {
        ("🎲", "Get Joke")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use std::sync::Arc;

    fn sample_joke(id: u64) -> Joke {
        Joke {
            id,
            category: "Misc".into(),
            body: JokeBody::Single {
                joke: format!("joke {id}"),
            },
            safe: true,
            lang: Some("en".into()),
        }
    }

    fn empty_ledger() -> RecentSearches {
        RecentSearches::load(Arc::new(MemoryStore::new()))
    }

    #[test]
    fn test_begin_sets_loading_and_clears_error() {
        let mut state = SearchState::default();
        let mut ledger = empty_ledger();
        let ticket = state.begin(SearchSelection::default());
        state.finish(ticket, Err(JokeError::NoResults), &mut ledger);
        assert!(state.error().is_some());

        let ticket = state.begin(SearchSelection::new("cats", Category::Any, true));
        assert!(state.is_loading());
        assert!(state.error().is_none());
        assert_eq!(
            ticket.request.query_string().as_deref(),
            Some("contains=cats&safe-mode")
        );
    }

    #[test]
    fn test_found_records_trimmed_search() {
        let mut state = SearchState::default();
        let mut ledger = empty_ledger();
        let ticket = state.begin(SearchSelection::new(" cats ", Category::Any, true));
        let outcome = state.finish(ticket, Ok(sample_joke(1)), &mut ledger);

        assert_eq!(outcome, SearchOutcome::Found);
        assert!(!state.is_loading());
        assert_eq!(state.joke().map(|j| j.id), Some(1));
        assert_eq!(ledger.entries()[0].topic, "cats");
    }

    #[test]
    fn test_no_results_clears_joke_and_skips_ledger() {
        let mut state = SearchState::default();
        let mut ledger = empty_ledger();
        let ticket = state.begin(SearchSelection::default());
        state.finish(ticket, Ok(sample_joke(1)), &mut ledger);

        let ticket = state.begin(SearchSelection::new("zzzz", Category::Pun, false));
        let outcome = state.finish(ticket, Err(JokeError::NoResults), &mut ledger);

        assert_eq!(outcome, SearchOutcome::NoResults);
        assert!(state.joke().is_none());
        assert_eq!(
            state.error(),
            Some("No jokes found for that topic. Try another keyword.")
        );
        assert_eq!(ledger.len(), 1);
        assert!(!state.is_loading());
    }

    #[test]
    fn test_transport_failure_uses_generic_message() {
        let mut state = SearchState::default();
        let mut ledger = empty_ledger();
        let ticket = state.begin(SearchSelection::default());
        let outcome = state.finish(
            ticket,
            Err(JokeError::Transport("dns failure".into())),
            &mut ledger,
        );

        assert_eq!(outcome, SearchOutcome::Failed);
        assert_eq!(state.error(), Some("Something went wrong. Please try again."));
        assert!(ledger.is_empty());
        assert!(!state.is_loading());
    }

    #[test]
    fn test_result_panel_is_exclusive() {
        let mut state = SearchState::default();
        let mut ledger = empty_ledger();
        assert_eq!(state.result_panel(), ResultPanel::Empty);

        let ticket = state.begin(SearchSelection::default());
        state.finish(ticket, Ok(sample_joke(3)), &mut ledger);
        assert!(matches!(state.result_panel(), ResultPanel::Joke(j) if j.id == 3));

        let ticket = state.begin(SearchSelection::default());
        state.finish(ticket, Err(JokeError::NoResults), &mut ledger);
        assert!(matches!(state.result_panel(), ResultPanel::Error(_)));
    }

    #[test]
    fn test_apply_recent_overwrites_selection() {
        let mut state = SearchState::default();
        let entry = RecentSearchEntry {
            topic: "ghosts".into(),
            category: Category::Spooky,
            safe_mode: false,
            id: "ghosts-Spooky-false-1".into(),
        };
        let selection = state.apply_recent(&entry);

        assert_eq!(state.selection, selection);
        assert_eq!(selection, SearchSelection::new("ghosts", Category::Spooky, false));
    }

    #[test]
    fn test_late_response_overwrites_by_default() {
        let mut state = SearchState::new(false);
        let mut ledger = empty_ledger();
        let first = state.begin(SearchSelection::new("slow", Category::Any, false));
        let second = state.begin(SearchSelection::new("fast", Category::Any, false));

        state.finish(second, Ok(sample_joke(2)), &mut ledger);
        let outcome = state.finish(first, Ok(sample_joke(1)), &mut ledger);

        assert_eq!(outcome, SearchOutcome::Found);
        assert_eq!(state.joke().map(|j| j.id), Some(1));
    }

    #[test]
    fn test_late_response_dropped_when_guarded() {
        let mut state = SearchState::new(true);
        let mut ledger = empty_ledger();
        let first = state.begin(SearchSelection::new("slow", Category::Any, false));
        let second = state.begin(SearchSelection::new("fast", Category::Any, false));

        let outcome = state.finish(first, Ok(sample_joke(1)), &mut ledger);
        assert_eq!(outcome, SearchOutcome::Stale);
        assert!(state.is_loading());
        assert!(ledger.is_empty());

        state.finish(second, Ok(sample_joke(2)), &mut ledger);
        assert_eq!(state.joke().map(|j| j.id), Some(2));
        assert!(!state.is_loading());
    }

    #[test]
    fn test_joke_blocks() {
        let single = sample_joke(1);
        assert_eq!(joke_blocks(&single), vec![JokeBlock::Text("joke 1")]);

        let twopart = Joke {
            body: JokeBody::TwoPart {
                setup: "Knock knock".into(),
                delivery: "Who's there?".into(),
            },
            ..sample_joke(2)
        };
        assert_eq!(
            joke_blocks(&twopart),
            vec![
                JokeBlock::Setup("Knock knock"),
                JokeBlock::Delivery("Who's there?")
            ]
        );
    }

    #[test]
    fn test_submit_label() {
        assert_eq!(submit_label(true), ("⏳", "Fetching..."));
        assert_eq!(submit_label(false), ("🎲", "Get Joke"));
    }
}
