//! Behavior-driven tests for graceful degradation.
//!
//! No failure in the data layer may surface to a view: every boundary
//! degrades to an empty or default value and keeps going.

use std::sync::Arc;

use tickwatch_core::StockDirectory;
use tickwatch_store::watchlist::WATCHLIST_KEY;
use tickwatch_store::{MemoryStorage, SessionStore, Storage, WatchlistStore};
use tickwatch_tests::{FailingProvider, ReadOnlyStorage};

// =============================================================================
// Directory: provider failures degrade to empty
// =============================================================================

#[tokio::test]
async fn when_the_provider_is_down_search_returns_empty_instead_of_failing() {
    // Given: A directory over a provider whose every call fails
    let directory = StockDirectory::new(Arc::new(FailingProvider));

    // When: A view searches
    let results = directory.search_stocks("AAPL").await;

    // Then: The result is empty and no error escapes
    assert!(results.is_empty());
}

#[tokio::test]
async fn when_the_provider_is_down_series_returns_empty_instead_of_failing() {
    let directory = StockDirectory::new(Arc::new(FailingProvider));

    let points = directory.daily_series("AAPL").await;

    assert!(points.is_empty());
}

#[tokio::test]
async fn when_the_symbol_is_garbage_series_returns_empty_instead_of_failing() {
    // Even with a healthy provider, a malformed symbol never escapes as an
    // error.
    let directory = StockDirectory::default();

    assert!(directory.daily_series("not a ticker!").await.is_empty());
    assert!(directory.daily_series("").await.is_empty());
}

// =============================================================================
// Watchlist: corrupted and unavailable storage
// =============================================================================

#[test]
fn when_persisted_watchlist_is_corrupted_load_starts_empty() {
    for corrupted in ["{not json", "42", r#"{"a":1}"#, r#"[1,2,3]"#] {
        let storage = Arc::new(MemoryStorage::new());
        storage
            .set(WATCHLIST_KEY, corrupted)
            .expect("seed must succeed");

        let store = WatchlistStore::new(storage);
        assert!(store.load().is_empty(), "expected empty for {corrupted:?}");
    }
}

#[test]
fn when_storage_is_absent_load_starts_empty() {
    let store = WatchlistStore::new(Arc::new(MemoryStorage::new()));
    assert!(store.load().is_empty());
}

#[test]
fn when_the_write_fails_the_in_memory_toggle_still_applies() {
    // Given: Storage that reads fine but rejects every write
    let storage = Arc::new(ReadOnlyStorage::seeded_with(WATCHLIST_KEY, r#"["AAPL"]"#));
    let store = WatchlistStore::new(storage.clone());

    // When: A symbol is toggled
    let watchlist = store.toggle("MSFT");

    // Then: The returned list reflects the toggle even though nothing was
    // persisted
    assert!(watchlist.contains("MSFT"));
    assert!(watchlist.contains("AAPL"));
    assert_eq!(
        storage
            .get(WATCHLIST_KEY)
            .expect("read must succeed")
            .as_deref(),
        Some(r#"["AAPL"]"#)
    );
}

// =============================================================================
// Session: degraded reads
// =============================================================================

#[test]
fn when_session_state_is_corrupted_reads_degrade_to_signed_out() {
    let storage = Arc::new(MemoryStorage::new());
    storage.set("isAuthenticated", "yes").expect("seed");
    storage.set("user", "{broken json").expect("seed");

    let session = SessionStore::new(storage);

    assert!(!session.is_authenticated());
    assert!(session.current_user().is_none());
}
