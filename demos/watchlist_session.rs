//! # Watchlist and Session Demo
//!
//! Signs in, toggles a few symbols, and shows the persisted state file.
//!
//! ## Usage
//!
//! ```bash
//! TICKWATCH_HOME=/tmp/tickwatch-demo cargo run --example watchlist_session
//! ```

use std::sync::Arc;

use tickwatch_store::{JsonFileStorage, SessionStore, WatchlistStore};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let storage = Arc::new(JsonFileStorage::open_default()?);
    println!("State file: {}", storage.path().display());

    let session = SessionStore::new(storage.clone());
    session.sign_in("trader@example.com")?;
    println!(
        "Signed in as {}",
        session.current_user().map(|u| u.email).unwrap_or_default()
    );

    let store = WatchlistStore::new(storage);
    store.toggle("AAPL");
    store.toggle("MSFT");
    let watchlist = store.toggle("TSLA");

    println!("Watching {} symbols:", watchlist.len());
    for symbol in watchlist.symbols() {
        println!("  {symbol}");
    }

    Ok(())
}
