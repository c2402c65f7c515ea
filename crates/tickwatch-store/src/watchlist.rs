//! User watchlist with write-through persistence.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::storage::Storage;

/// Storage key holding the watchlist JSON array.
pub const WATCHLIST_KEY: &str = "stockWatchlist";

/// Insertion-ordered set of watched symbols.
///
/// Membership is exact string comparison. Symbols that have dropped out of
/// the catalog are kept; pruning them is a presentation decision, not this
/// store's.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Watchlist(Vec<String>);

impl Watchlist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pure membership test.
    pub fn contains(&self, symbol: &str) -> bool {
        self.0.iter().any(|entry| entry == symbol)
    }

    /// Flip membership: remove if present, append otherwise.
    pub fn toggle(&mut self, symbol: &str) {
        if let Some(index) = self.0.iter().position(|entry| entry == symbol) {
            self.0.remove(index);
        } else {
            self.0.push(symbol.to_owned());
        }
    }

    pub fn symbols(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for Watchlist {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// Watchlist store over an injected [`Storage`] capability.
///
/// Every mutation persists the whole list before returning (write-through).
pub struct WatchlistStore {
    storage: Arc<dyn Storage>,
}

impl WatchlistStore {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    /// Read the persisted watchlist.
    ///
    /// Absent or malformed state loads as an empty watchlist; this never
    /// fails the caller.
    pub fn load(&self) -> Watchlist {
        let raw = match self.storage.get(WATCHLIST_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Watchlist::new(),
            Err(error) => {
                tracing::warn!(%error, "watchlist read failed; starting empty");
                return Watchlist::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(watchlist) => watchlist,
            Err(error) => {
                tracing::warn!(%error, "persisted watchlist is malformed; starting empty");
                Watchlist::new()
            }
        }
    }

    /// Flip `symbol` in the persisted watchlist and return the updated list.
    ///
    /// The returned list always reflects the toggle; a failed persistence
    /// write is logged and does not roll it back.
    pub fn toggle(&self, symbol: &str) -> Watchlist {
        let mut watchlist = self.load();
        watchlist.toggle(symbol);
        self.persist(&watchlist);
        watchlist
    }

    fn persist(&self, watchlist: &Watchlist) {
        let encoded = match serde_json::to_string(watchlist) {
            Ok(encoded) => encoded,
            Err(error) => {
                tracing::warn!(%error, "watchlist could not be encoded; state not persisted");
                return;
            }
        };

        if let Err(error) = self.storage.set(WATCHLIST_KEY, &encoded) {
            tracing::warn!(%error, "watchlist write failed; in-memory state kept");
        }
    }
}
