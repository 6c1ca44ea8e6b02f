//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owned by the `App` shell and provided as `RwSignal<AuthState>` context.
//! The header never touches it directly; logout flows through the callback the
//! shell hands to `Header`. The session cookie is `HttpOnly`, so the page starts
//! signed in and only logout moves it out of that state.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

/// Authentication state of the rendered page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub signed_in: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { signed_in: true }
    }
}

impl AuthState {
    /// Drop the session after logout.
    pub fn sign_out(&mut self) {
        self.signed_in = false;
    }
}
