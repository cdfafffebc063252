//! Route table and session gating.
//!
//! SYSTEM CONTEXT
//! ==============
//! `app.rs` wires these paths into `leptos_router`; controllers return
//! [`AppRoute`] values in their effects, and [`access`] decides whether the
//! current session may see a route.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::state::session::SessionState;

/// Every navigable screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppRoute {
    Landing,
    Feed,
    NewPost,
    EditPost(String),
    Post(String),
    Profile(String),
    Settings,
}

impl AppRoute {
    /// Parse a URL path (query and fragment ignored).
    pub fn parse(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Some(Self::Landing),
            ["feed"] => Some(Self::Feed),
            ["editor"] => Some(Self::NewPost),
            ["editor", id] => Some(Self::EditPost((*id).to_owned())),
            ["blog", id] => Some(Self::Post((*id).to_owned())),
            ["profile", username] => Some(Self::Profile((*username).to_owned())),
            ["settings"] => Some(Self::Settings),
            _ => None,
        }
    }

    /// Canonical path for navigation.
    pub fn path(&self) -> String {
        match self {
            Self::Landing => "/".to_owned(),
            Self::Feed => "/feed".to_owned(),
            Self::NewPost => "/editor".to_owned(),
            Self::EditPost(id) => format!("/editor/{id}"),
            Self::Post(id) => format!("/blog/{id}"),
            Self::Profile(username) => format!("/profile/{username}"),
            Self::Settings => "/settings".to_owned(),
        }
    }

    /// Routes that only a signed-in actor may open.
    pub fn requires_session(&self) -> bool {
        matches!(self, Self::Feed | Self::NewPost | Self::EditPost(_) | Self::Settings)
    }
}

/// Outcome of checking a route against the session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Access {
    Allow,
    /// The session is still being resolved; render a loading state.
    Wait,
    Redirect(AppRoute),
}

/// Gate `route` on the current session.
///
/// Protected routes bounce signed-out visitors to the landing page, and the
/// landing page forwards signed-in actors to the feed.
pub fn access(route: &AppRoute, session: &SessionState) -> Access {
    if session.loading {
        return Access::Wait;
    }
    let signed_in = session.is_signed_in();
    if route.requires_session() && !signed_in {
        return Access::Redirect(AppRoute::Landing);
    }
    if *route == AppRoute::Landing && signed_in {
        return Access::Redirect(AppRoute::Feed);
    }
    Access::Allow
}
