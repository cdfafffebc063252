//! One-shot exchange of a redirect `session_id` for a session cookie.
//!
//! ARCHITECTURE
//! ============
//! The identity provider sends the browser back with
//! `#session_id=...` in the URL. On start-up `App` calls [`bootstrap`] once:
//! if the fragment carries an id, an [`ExchangeTask`] is created and taken
//! exactly once; otherwise the session is refreshed from the cookie.
//!
//! On success the fragment is stripped with `history.replaceState`, so a
//! reload cannot replay the exchange.

#[cfg(test)]
#[path = "auth_exchange_test.rs"]
mod auth_exchange_test;

use crate::net::api::Api;
use crate::net::error::ApiError;
use crate::net::types::User;
use crate::routes::AppRoute;
use crate::state::session::{self, SessionState};
use crate::state::toast::Notice;
use crate::state::view::{Effects, StateCell};

const SESSION_ID_KEY: &str = "session_id";

/// Pull the `session_id` value out of a URL fragment such as
/// `#session_id=abc&other=x`. The value is passed on exactly as it appears;
/// the provider's ids are opaque and never percent-decoded.
pub fn extract_session_id(fragment: &str) -> Option<String> {
    let fragment = fragment.strip_prefix('#').unwrap_or(fragment);
    fragment
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == SESSION_ID_KEY)
        .map(|(_, value)| value.to_owned())
        .filter(|value| !value.is_empty())
}

/// `href` without its fragment.
pub fn strip_fragment(href: &str) -> String {
    match url::Url::parse(href) {
        Ok(mut url) => {
            url.set_fragment(None);
            url.to_string()
        }
        Err(_) => href.split('#').next().unwrap_or_default().to_owned(),
    }
}

/// Guarded `Pending → Consumed` transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExchangeTask {
    Pending(String),
    Consumed,
}

impl ExchangeTask {
    /// A task only exists when the entry URL carried a session id.
    pub fn from_fragment(fragment: &str) -> Option<Self> {
        extract_session_id(fragment).map(Self::Pending)
    }

    /// Hand out the session id the first time only.
    pub fn take(&mut self) -> Option<String> {
        match std::mem::replace(self, Self::Consumed) {
            Self::Pending(id) => Some(id),
            Self::Consumed => None,
        }
    }
}

/// Result of a completed exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExchangeOutcome {
    Adopted {
        user: User,
        /// The entry URL with the fragment removed.
        clean_url: String,
    },
    Failed(ApiError),
}

impl ExchangeOutcome {
    /// Write the outcome into the session.
    pub fn apply(&self, session: &mut SessionState) {
        match self {
            Self::Adopted { user, .. } => session.adopt(user.clone()),
            Self::Failed(_) => session.clear(),
        }
    }

    pub fn effects(&self) -> Effects {
        match self {
            Self::Adopted { .. } => {
                Effects::notice(Notice::success("Welcome to NightBlog!")).then_navigate(AppRoute::Feed)
            }
            Self::Failed(_) => {
                Effects::notice(Notice::error("Authentication failed")).then_navigate(AppRoute::Landing)
            }
        }
    }
}

/// Submit `session_id` and describe the outcome.
pub async fn exchange<A: Api + ?Sized>(api: &A, session_id: &str, href: &str) -> ExchangeOutcome {
    match api.exchange_session(session_id).await {
        Ok(user) => {
            log::info!("session exchange succeeded for {}", user.username);
            ExchangeOutcome::Adopted { user, clean_url: strip_fragment(href) }
        }
        Err(err) => {
            log::warn!("session exchange failed: {err}");
            ExchangeOutcome::Failed(err)
        }
    }
}

/// Establish the session at start-up.
///
/// A `#session_id=` fragment runs the exchange once: on success the URL is
/// cleaned through `replace_url` before the user is adopted, on failure the
/// session is cleared. Without a fragment the session is refreshed from the
/// cookie and no effects are produced.
pub async fn bootstrap<A, C>(api: &A, fragment: &str, href: &str, session: &C, replace_url: impl FnOnce(&str)) -> Effects
where
    A: Api + ?Sized,
    C: StateCell<SessionState>,
{
    let Some(session_id) = ExchangeTask::from_fragment(fragment).and_then(|mut task| task.take()) else {
        session::refresh(api, session).await;
        return Effects::none();
    };
    session.write_with(SessionState::begin_refresh);
    let outcome = exchange(api, &session_id, href).await;
    if let ExchangeOutcome::Adopted { clean_url, .. } = &outcome {
        replace_url(clean_url);
    }
    session.write_with(|s| outcome.apply(s));
    outcome.effects()
}
