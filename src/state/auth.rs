//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server renders the session into a page global; hydration reads it once
//! and components branch on it for like gating and the account menu.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

/// Whether the current browser session is logged in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub authenticated: bool,
}
