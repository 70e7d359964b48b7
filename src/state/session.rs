//! Session state for the signed-in employee.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided once as an `RwSignal<Session>` context at the application root.
//! Route guarding and request authorization derive everything from this
//! signal; there is no other credential storage in memory.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::api;
use crate::net::http::ApiError;
use crate::util::storage;

/// Role label the backend issues for administrator accounts.
pub const ADMIN_ROLE: &str = "ADMIN";

/// Durable storage key for the bearer token.
pub const TOKEN_KEY: &str = "attendance_token";

/// Durable storage key for the role label.
pub const ROLE_KEY: &str = "attendance_role";

/// The current user's credential and role.
///
/// Empty strings mean signed out. The two fields are always set and cleared
/// together; a session with one but not the other never exists.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub role: String,
}

impl Session {
    /// Rehydrate the session from durable storage.
    ///
    /// Reads the token and role entries, defaulting to empty strings when
    /// absent or off-browser. No network call; safe to repeat.
    pub fn restore() -> Self {
        Self {
            token: storage::load_string(TOKEN_KEY).unwrap_or_default(),
            role: storage::load_string(ROLE_KEY).unwrap_or_default(),
        }
    }

    /// Whether a credential is present.
    pub fn is_authenticated(&self) -> bool {
        !self.token.is_empty()
    }

    /// Whether the signed-in user carries the administrator role.
    pub fn is_admin(&self) -> bool {
        self.role == ADMIN_ROLE
    }
}

/// Authenticate against the backend and persist the granted session.
///
/// On success both storage entries are written and the in-memory session is
/// replaced in a single step. On failure nothing is mutated and the error
/// reaches the caller; there is no retry.
///
/// # Errors
///
/// Returns the transport or status error from the login request.
pub async fn login(
    session: RwSignal<Session>,
    username: &str,
    password: &str,
) -> Result<(), ApiError> {
    let granted = api::login(session, username, password).await?;
    storage::save_string(TOKEN_KEY, &granted.token);
    storage::save_string(ROLE_KEY, &granted.role);
    session.set(Session {
        token: granted.token,
        role: granted.role,
    });
    Ok(())
}

/// Clear the session and its durable entries.
///
/// Idempotent: signing out while already signed out leaves the same end
/// state. Never fails.
pub fn logout(session: RwSignal<Session>) {
    storage::remove(TOKEN_KEY);
    storage::remove(ROLE_KEY);
    session.set(Session::default());
}
