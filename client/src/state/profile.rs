//! Public profile controller.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use crate::net::api::Api;
use crate::net::error::ApiError;
use crate::net::types::{DEFAULT_THEME_COLOR, Post, Profile, User};
use crate::routes::AppRoute;
use crate::state::toast::Notice;
use crate::state::view::{Effects, Phase, StateCell};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileState {
    /// Handle from the route.
    pub username: String,
    pub profile: Option<Profile>,
    pub phase: Phase,
}

impl ProfileState {
    pub fn new(username: impl Into<String>) -> Self {
        Self { username: username.into(), ..Self::default() }
    }

    /// Apply the response for `username`. A response for a profile the page
    /// has since navigated away from is dropped.
    pub fn finish_load(&mut self, username: &str, result: Result<Profile, ApiError>) -> Effects {
        if username != self.username {
            log::debug!("dropping stale profile {username}");
            return Effects::none();
        }
        match result {
            Ok(profile) => {
                self.profile = Some(profile);
                self.phase = Phase::Ready;
                Effects::none()
            }
            Err(err) => {
                log::warn!("profile {} unavailable: {err}", self.username);
                self.phase = Phase::Redirected;
                Effects::notice(Notice::error("User not found")).then_navigate(AppRoute::Feed)
            }
        }
    }

    /// The viewer is looking at their own profile.
    pub fn is_own(&self, viewer: Option<&User>) -> bool {
        viewer.is_some_and(|u| u.username == self.username)
    }

    pub fn theme_color(&self) -> &str {
        self.profile.as_ref().map_or(DEFAULT_THEME_COLOR, |p| p.user.theme_color.as_str())
    }

    pub fn posts(&self) -> &[Post] {
        self.profile.as_ref().map(|p| p.blogs.as_slice()).unwrap_or_default()
    }

    pub fn post_count(&self) -> usize {
        self.posts().len()
    }

    /// Offer "Write Your First Post" to an owner with nothing published.
    pub fn invites_first_post(&self, viewer: Option<&User>) -> bool {
        self.is_own(viewer) && self.posts().is_empty()
    }
}

pub async fn load<A, C>(api: &A, state: &C) -> Effects
where
    A: Api + ?Sized,
    C: StateCell<ProfileState>,
{
    let Some(username) = state.read_with(|s| s.username.clone()) else {
        return Effects::none();
    };
    let result = api.get_profile(&username).await;
    state.finish_action(|s| s.finish_load(&username, result))
}
