//! Local persistence for tickwatch.
//!
//! This crate holds the user-visible client state: the watchlist and the
//! mock sign-in session. Everything persists through the [`Storage`]
//! capability, a flat string key-value contract whose values are UTF-8
//! JSON, so callers choose between the in-memory fake and the state-file
//! implementation, and tests never touch the real filesystem unless they
//! mean to.
//!
//! Persisted layout (key → JSON value):
//!
//! | Key | Value |
//! |-----|-------|
//! | `stockWatchlist` | array of symbol strings |
//! | `isAuthenticated` | string literal `"true"` while signed in |
//! | `user` | object `{"email": string}` |

pub mod session;
pub mod storage;
pub mod watchlist;

use thiserror::Error;

pub use session::{SessionStore, UserProfile};
pub use storage::{JsonFileStorage, MemoryStorage, Storage};
pub use watchlist::{Watchlist, WatchlistStore};

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// I/O error (state-file operations).
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Persisted value could not be encoded or decoded.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The backing store rejected the operation.
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}
