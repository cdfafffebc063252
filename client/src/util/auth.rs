//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every routed page installs the same guard so protected screens bounce
//! signed-out visitors and the landing page forwards signed-in ones.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::config::ClientConfig;
use crate::routes::{Access, AppRoute, access};
use crate::state::session::{SessionState, SessionStore};
use crate::util::browser;

/// Where `route` must send the actor, once the session has settled.
pub fn redirect_target(route: &AppRoute, session: &SessionState) -> Option<AppRoute> {
    match access(route, session) {
        Access::Redirect(target) => Some(target),
        Access::Allow | Access::Wait => None,
    }
}

/// Re-check `route` whenever the session changes.
pub fn install_route_guard<F>(session: SessionStore, route: AppRoute, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let Some(target) = redirect_target(&route, &session.state()) {
            navigate(&target.path(), NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}

/// Leave for the identity provider; it returns to `/feed#session_id=...`.
pub fn start_sign_in(config: &ClientConfig) {
    let url = config.login_redirect_url(&browser::origin());
    log::info!("redirecting to identity provider");
    browser::redirect(&url);
}
