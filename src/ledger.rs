use crate::error::StoreError;
use crate::store::{RECENT_SEARCHES_KEY, SharedStore};
use crate::types::{RecentSearchEntry, SearchSelection};
use std::sync::atomic::{AtomicU64, Ordering};
use web_time::SystemTime;

pub const MAX_RECENT_SEARCHES: usize = 6;

static LAST_TOKEN: AtomicU64 = AtomicU64::new(0);

/// Millisecond timestamp, bumped so that no two calls return the same value.
fn next_token() -> u64 {
    let now = SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|dur| dur.as_millis() as u64)
        .unwrap_or_default();
    let mut last = LAST_TOKEN.load(Ordering::Relaxed);
    loop {
        let candidate = now.max(last + 1);
        match LAST_TOKEN.compare_exchange_weak(last, candidate, Ordering::Relaxed, Ordering::Relaxed)
        {
            Ok(_) => return candidate,
            Err(actual) => last = actual,
        }
    }
}

pub fn next_entry_id(topic: &str, selection: &SearchSelection) -> String {
    format!(
        "{}-{}-{}-{}",
        topic,
        selection.category,
        selection.safe_mode,
        next_token()
    )
}

/// Recent searches, newest first, written through to the store on change.
pub struct RecentSearches {
    entries: Vec<RecentSearchEntry>,
    store: SharedStore,
}

impl RecentSearches {
    pub fn load(store: SharedStore) -> Self {
        let entries = match store.get(RECENT_SEARCHES_KEY) {
            Some(raw) => match serde_json::from_str::<Vec<RecentSearchEntry>>(&raw) {
                Ok(stored) => {
                    let mut entries: Vec<RecentSearchEntry> = Vec::with_capacity(stored.len());
                    for entry in stored {
                        if !entries
                            .iter()
                            .any(|kept| kept.same_search(&entry.topic, entry.category, entry.safe_mode))
                        {
                            entries.push(entry);
                        }
                    }
                    entries.truncate(MAX_RECENT_SEARCHES);
                    entries
                }
                Err(err) => {
                    tracing::warn!(error = %err, "discarding unreadable recent searches");
                    Vec::new()
                }
            },
            None => Vec::new(),
        };
        Self { entries, store }
    }

    pub fn entries(&self) -> &[RecentSearchEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn record(&mut self, selection: &SearchSelection) -> &RecentSearchEntry {
        let topic = selection.trimmed_topic();
        let entry = RecentSearchEntry {
            topic: topic.to_string(),
            category: selection.category,
            safe_mode: selection.safe_mode,
            id: next_entry_id(topic, selection),
        };

        self.entries
            .retain(|existing| !existing.same_search(&entry.topic, entry.category, entry.safe_mode));
        self.entries.insert(0, entry);
        self.entries.truncate(MAX_RECENT_SEARCHES);
        self.persist();
        &self.entries[0]
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.persist();
    }

    fn persist(&self) {
        let result = serde_json::to_string(&self.entries)
            .map_err(StoreError::from)
            .and_then(|json| self.store.set(RECENT_SEARCHES_KEY, &json));
        if let Err(err) = result {
            tracing::warn!(error = %err, "failed to persist recent searches");
        }
    }
}

impl PartialEq for RecentSearches {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::RecordingStore;
    use crate::types::Category;
    use std::sync::Arc;

    fn ledger_with(store: Arc<RecordingStore>) -> RecentSearches {
        RecentSearches::load(store)
    }

    #[test]
    fn test_record_trims_topic_and_prepends() {
        let store = Arc::new(RecordingStore::new());
        let mut ledger = ledger_with(store.clone());

        ledger.record(&SearchSelection::new("  cats ", Category::Any, true));
        ledger.record(&SearchSelection::new("dogs", Category::Pun, false));

        let topics: Vec<&str> = ledger.entries().iter().map(|e| e.topic.as_str()).collect();
        assert_eq!(topics, ["dogs", "cats"]);
        assert!(ledger.entries()[1].id.starts_with("cats-Any-true-"));
    }

    #[test]
    fn test_duplicate_moves_to_front() {
        let store = Arc::new(RecordingStore::new());
        let mut ledger = ledger_with(store);

        ledger.record(&SearchSelection::new("cats", Category::Any, true));
        ledger.record(&SearchSelection::new("dogs", Category::Any, true));
        ledger.record(&SearchSelection::new("cats ", Category::Any, true));

        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.entries()[0].topic, "cats");
        assert_eq!(ledger.entries()[1].topic, "dogs");
    }

    #[test]
    fn test_same_topic_different_filters_are_distinct() {
        let store = Arc::new(RecordingStore::new());
        let mut ledger = ledger_with(store);

        ledger.record(&SearchSelection::new("cats", Category::Any, true));
        ledger.record(&SearchSelection::new("cats", Category::Any, false));
        ledger.record(&SearchSelection::new("cats", Category::Pun, true));

        assert_eq!(ledger.len(), 3);
    }

    #[test]
    fn test_cap_evicts_oldest() {
        let store = Arc::new(RecordingStore::new());
        let mut ledger = ledger_with(store);

        for i in 0..7 {
            ledger.record(&SearchSelection::new(format!("topic{i}"), Category::Misc, false));
        }

        assert_eq!(ledger.len(), MAX_RECENT_SEARCHES);
        assert_eq!(ledger.entries()[0].topic, "topic6");
        assert!(ledger.entries().iter().all(|e| e.topic != "topic0"));
    }

    #[test]
    fn test_every_mutation_writes_once() {
        let store = Arc::new(RecordingStore::new());
        let mut ledger = ledger_with(store.clone());

        ledger.record(&SearchSelection::new("cats", Category::Any, true));
        ledger.record(&SearchSelection::new("dogs", Category::Any, true));
        ledger.clear();

        let writes = store.writes();
        assert_eq!(writes.len(), 3);
        assert_eq!(writes[2], (RECENT_SEARCHES_KEY.to_string(), "[]".to_string()));
    }

    #[test]
    fn test_load_round_trips_persisted_entries() {
        let store = Arc::new(RecordingStore::new());
        let mut ledger = ledger_with(store.clone());
        ledger.record(&SearchSelection::new("cats", Category::Christmas, false));

        let reloaded = RecentSearches::load(store);
        assert!(reloaded == ledger);
    }

    #[test]
    fn test_corrupt_data_loads_empty() {
        let store = Arc::new(RecordingStore::with_value(RECENT_SEARCHES_KEY, "{not json"));
        let ledger = ledger_with(store.clone());
        assert!(ledger.is_empty());
        assert!(store.writes().is_empty());
    }

    #[test]
    fn test_load_reads_browser_format() {
        let raw = r#"[{"topic":"space","category":"Spooky","safeMode":true,"id":"space-Spooky-true-1700000000000"}]"#;
        let store = Arc::new(RecordingStore::with_value(RECENT_SEARCHES_KEY, raw));
        let ledger = ledger_with(store);
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.entries()[0].category, Category::Spooky);
        assert!(ledger.entries()[0].safe_mode);
    }

    #[test]
    fn test_load_drops_repeated_searches() {
        let raw = r#"[{"topic":"a","category":"Any","safeMode":true,"id":"1"},{"topic":"a","category":"Any","safeMode":true,"id":"2"}]"#;
        let store = Arc::new(RecordingStore::with_value(RECENT_SEARCHES_KEY, raw));
        let ledger = ledger_with(store.clone());
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.entries()[0].id, "1");
        assert!(store.writes().is_empty());
    }

    #[test]
    fn test_load_truncates_long_lists() {
        let stored: Vec<RecentSearchEntry> = (0..9)
            .map(|i| RecentSearchEntry {
                topic: format!("topic{i}"),
                category: Category::Misc,
                safe_mode: true,
                id: format!("topic{i}-Misc-true-{i}"),
            })
            .collect();
        let raw = serde_json::to_string(&stored).unwrap();
        let store = Arc::new(RecordingStore::with_value(RECENT_SEARCHES_KEY, &raw));

        let ledger = ledger_with(store);
        let topics: Vec<&str> = ledger.entries().iter().map(|e| e.topic.as_str()).collect();
        assert_eq!(
            topics,
            ["topic0", "topic1", "topic2", "topic3", "topic4", "topic5"]
        );
    }

    #[test]
    fn test_ids_are_unique_within_a_millisecond() {
        let selection = SearchSelection::new("x", Category::Any, true);
        let ids: Vec<String> = (0..100).map(|_| next_entry_id("x", &selection)).collect();
        let mut deduped = ids.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), ids.len());
    }
}
