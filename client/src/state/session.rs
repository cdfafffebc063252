//! Session store for the signed-in actor.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route guards, the nav bar and every page read the session; only the auth
//! exchange, `refresh` and `clear` write it. The reactive [`SessionStore`] is
//! provided once through Leptos context so readers re-render on change.
//!
//! TRADE-OFFS
//! ==========
//! Nothing is cached in browser storage: the opaque cookie is the only
//! persisted state and `/auth/me` is the source of truth on every start.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::api::Api;
use crate::net::error::ApiError;
use crate::net::types::User;
use crate::routes::AppRoute;
use crate::state::toast::Notice;
use crate::state::view::{Effects, StateCell};

/// Coarse view of the session for readers that only care whether there is
/// an identity, not which fields it carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthStatus {
    Loading,
    SignedIn,
    SignedOut,
}

/// Current identity plus whether it is still being resolved.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub user: Option<User>,
    pub loading: bool,
}

impl SessionState {
    /// State at start-up, before the first refresh or exchange settles.
    pub fn pending() -> Self {
        Self { user: None, loading: true }
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    pub fn status(&self) -> AuthStatus {
        match (self.loading, self.is_signed_in()) {
            (true, _) => AuthStatus::Loading,
            (false, true) => AuthStatus::SignedIn,
            (false, false) => AuthStatus::SignedOut,
        }
    }

    pub fn begin_refresh(&mut self) {
        self.loading = true;
    }

    /// Replace the identity with the outcome of `/auth/me`; any failure
    /// means signed out.
    pub fn finish_refresh(&mut self, result: Result<User, ApiError>) {
        self.user = result.ok();
        self.loading = false;
    }

    /// Take the identity handed back by a session exchange.
    pub fn adopt(&mut self, user: User) {
        self.user = Some(user);
        self.loading = false;
    }

    pub fn clear(&mut self) {
        self.user = None;
        self.loading = false;
    }
}

/// Re-derive the session from the cookie.
pub async fn refresh<A, C>(api: &A, session: &C)
where
    A: Api + ?Sized,
    C: StateCell<SessionState>,
{
    session.write_with(SessionState::begin_refresh);
    let result = api.current_user().await;
    if let Err(err) = &result {
        log::info!("no active session: {err}");
    }
    session.write_with(|s| s.finish_refresh(result));
}

/// End the session server-side, then locally.
pub async fn sign_out<A, C>(api: &A, session: &C) -> Effects
where
    A: Api + ?Sized,
    C: StateCell<SessionState>,
{
    match api.logout().await {
        Ok(()) => {
            session.write_with(SessionState::clear);
            Effects::navigate(AppRoute::Landing)
        }
        Err(err) => {
            log::warn!("logout failed: {err}");
            Effects::notice(Notice::error("Logout failed"))
        }
    }
}

/// Context handle over the reactive session.
#[derive(Clone, Copy, Debug)]
pub struct SessionStore {
    state: RwSignal<SessionState>,
}

impl SessionStore {
    pub fn new(initial: SessionState) -> Self {
        Self { state: RwSignal::new(initial) }
    }

    /// Tracked snapshot of the whole state.
    pub fn state(&self) -> SessionState {
        self.state.get()
    }

    /// Tracked read of the current user.
    pub fn get(&self) -> Option<User> {
        self.state.with(|s| s.user.clone())
    }

    /// Tracked read of [`SessionState::status`].
    pub fn status(&self) -> AuthStatus {
        self.state.with(SessionState::status)
    }

    pub fn get_untracked(&self) -> Option<User> {
        self.state.with_untracked(|s| s.user.clone())
    }

    pub async fn sign_out<A: Api + ?Sized>(&self, api: &A) -> Effects {
        sign_out(api, &self.state).await
    }
}

impl StateCell<SessionState> for SessionStore {
    fn write_with<R>(&self, f: impl FnOnce(&mut SessionState) -> R) -> Option<R> {
        self.state.write_with(f)
    }

    fn read_with<R>(&self, f: impl FnOnce(&SessionState) -> R) -> Option<R> {
        self.state.read_with(f)
    }
}
