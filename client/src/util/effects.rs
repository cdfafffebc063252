//! Applying controller [`Effects`] to the running app.
//!
//! SYSTEM CONTEXT
//! ==============
//! Controllers return effects; pages hand them to the [`EffectSink`] provided
//! by `App`. Notices go onto the toast stack (auto-dismissed) and navigation
//! requests are written to a signal that a relay inside the router turns into
//! `navigate` calls, so async tasks never hold a navigator themselves.

use std::future::Future;

use leptos::prelude::*;

use crate::routes::AppRoute;
use crate::state::toast::{Notice, ToastState};
use crate::state::view::Effects;

/// Context handle for toasts and pending navigation.
#[derive(Clone, Copy, Debug)]
pub struct EffectSink {
    pub toasts: RwSignal<ToastState>,
    pub navigation: RwSignal<Option<AppRoute>>,
}

impl EffectSink {
    pub fn new() -> Self {
        Self { toasts: RwSignal::new(ToastState::default()), navigation: RwSignal::new(None) }
    }

    pub fn apply(self, effects: Effects) {
        if let Some(notice) = effects.notice {
            self.notify(notice);
        }
        if let Some(route) = effects.navigate {
            self.navigation.set(Some(route));
        }
    }

    /// Push a toast and schedule its dismissal.
    pub fn notify(self, notice: Notice) {
        let toasts = self.toasts;
        let Some(id) = toasts.try_update(|t| t.push(notice)) else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(crate::state::toast::TOAST_TTL_MS).await;
            toasts.try_update(|t| t.dismiss(id));
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    }
}

impl Default for EffectSink {
    fn default() -> Self {
        Self::new()
    }
}

/// Run a browser task. Server rendering never fetches, so the future is
/// dropped there.
pub fn spawn<F>(fut: F)
where
    F: Future<Output = ()> + 'static,
{
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(fut);
    #[cfg(not(feature = "hydrate"))]
    drop(fut);
}
