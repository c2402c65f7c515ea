//! Mock sign-in session persisted next to the watchlist.
//!
//! There is no credential validation anywhere in the system; the session
//! only gates navigation, so signing in is just writing the two keys the
//! dashboard checks.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::storage::Storage;
use crate::StoreError;

/// Storage key holding the `"true"` literal while signed in.
pub const AUTHENTICATED_KEY: &str = "isAuthenticated";
/// Storage key holding the signed-in user profile.
pub const USER_KEY: &str = "user";

/// Signed-in user profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub email: String,
}

/// Session state over an injected [`Storage`] capability.
pub struct SessionStore {
    storage: Arc<dyn Storage>,
}

impl SessionStore {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    /// Persist a signed-in session for `email`.
    pub fn sign_in(&self, email: &str) -> Result<(), StoreError> {
        let profile = UserProfile {
            email: email.to_owned(),
        };
        self.storage.set(AUTHENTICATED_KEY, "true")?;
        self.storage
            .set(USER_KEY, &serde_json::to_string(&profile)?)?;
        Ok(())
    }

    /// Remove the persisted session.
    pub fn sign_out(&self) -> Result<(), StoreError> {
        self.storage.remove(AUTHENTICATED_KEY)?;
        self.storage.remove(USER_KEY)?;
        Ok(())
    }

    /// Whether a signed-in session is persisted.
    ///
    /// Anything other than the exact `"true"` literal, including a storage
    /// failure, reads as signed out.
    pub fn is_authenticated(&self) -> bool {
        match self.storage.get(AUTHENTICATED_KEY) {
            Ok(Some(raw)) => raw == "true",
            Ok(None) => false,
            Err(error) => {
                tracing::warn!(%error, "session read failed; treating as signed out");
                false
            }
        }
    }

    /// The signed-in user, if a readable profile is persisted.
    pub fn current_user(&self) -> Option<UserProfile> {
        let raw = match self.storage.get(USER_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(error) => {
                tracing::warn!(%error, "user read failed; treating as signed out");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(profile) => Some(profile),
            Err(error) => {
                tracing::warn!(%error, "persisted user profile is malformed");
                None
            }
        }
    }
}
