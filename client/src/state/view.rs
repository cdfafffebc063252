//! Lifecycle and side-effect vocabulary shared by the page controllers.
//!
//! DESIGN
//! ======
//! Controllers never touch the router or the toast stack directly. Each
//! transition returns [`Effects`]; the page applies them. This keeps every
//! controller runnable in native tests.
//!
//! The async flows in each controller module take a [`StateCell`] rather than
//! `&mut` state: pages pass their `RwSignal`, tests pass a `RefCell`. Every
//! write happens between suspension points and is skipped once the page that
//! owns the signal is gone.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use std::cell::RefCell;

use leptos::prelude::*;

use crate::net::error::ApiError;
use crate::routes::AppRoute;
use crate::state::toast::Notice;

/// Lifecycle of a page: `Loading → Ready` or `Loading → Redirected`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Loading,
    Ready,
    /// Loading failed and the page asked to navigate elsewhere.
    Redirected,
}

/// Side effects requested by a controller transition.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Effects {
    pub notice: Option<Notice>,
    pub navigate: Option<AppRoute>,
}

impl Effects {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn notice(notice: Notice) -> Self {
        Self { notice: Some(notice), navigate: None }
    }

    pub fn navigate(route: AppRoute) -> Self {
        Self { notice: None, navigate: Some(route) }
    }

    #[must_use]
    pub fn then_navigate(mut self, route: AppRoute) -> Self {
        self.navigate = Some(route);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.notice.is_none() && self.navigate.is_none()
    }
}

/// Why a user action did not reach (or failed at) the API.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    /// Input rejected locally; the message is shown verbatim.
    #[error("{0}")]
    Validation(&'static str),
    /// The user dismissed a confirmation prompt.
    #[error("cancelled")]
    Declined,
    /// The same action is already in flight.
    #[error("already in progress")]
    Busy,
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl ActionError {
    /// Effects for a rejection that happened before any request was sent.
    pub fn local_effects(&self) -> Effects {
        match self {
            Self::Validation(message) => Effects::notice(Notice::error(*message)),
            Self::Declined | Self::Busy => Effects::none(),
            Self::Api(err) => Effects::notice(Notice::error(err.to_string())),
        }
    }
}

/// Shared handle to a controller's state.
pub trait StateCell<S> {
    /// Mutate the state; `None` once its owner is disposed.
    fn write_with<R>(&self, f: impl FnOnce(&mut S) -> R) -> Option<R>;

    /// Untracked read; `None` once its owner is disposed.
    fn read_with<R>(&self, f: impl FnOnce(&S) -> R) -> Option<R>;

    /// Run a `begin_*` transition. A rejection (or a disposed owner) comes
    /// back as the effects to apply instead.
    fn begin_action<T>(&self, f: impl FnOnce(&mut S) -> Result<T, ActionError>) -> Result<T, Effects> {
        match self.write_with(f) {
            Some(Ok(value)) => Ok(value),
            Some(Err(err)) => Err(err.local_effects()),
            None => Err(Effects::none()),
        }
    }

    /// Run a `finish_*` transition; nothing happens once the owner is gone.
    fn finish_action(&self, f: impl FnOnce(&mut S) -> Effects) -> Effects {
        self.write_with(f).unwrap_or_default()
    }
}

impl<S: Send + Sync + 'static> StateCell<S> for RwSignal<S> {
    fn write_with<R>(&self, f: impl FnOnce(&mut S) -> R) -> Option<R> {
        self.try_update(f)
    }

    fn read_with<R>(&self, f: impl FnOnce(&S) -> R) -> Option<R> {
        self.try_with_untracked(f)
    }
}

impl<S> StateCell<S> for RefCell<S> {
    fn write_with<R>(&self, f: impl FnOnce(&mut S) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }

    fn read_with<R>(&self, f: impl FnOnce(&S) -> R) -> Option<R> {
        Some(f(&self.borrow()))
    }
}
