//! Feed controller: the post list plus its search box.
//!
//! The query is sent to the server as-is (trimmed); the client never filters
//! or pages locally.

#[cfg(test)]
#[path = "feed_test.rs"]
mod feed_test;

use crate::net::api::Api;
use crate::net::error::ApiError;
use crate::net::types::Post;
use crate::state::toast::Notice;
use crate::state::view::{ActionError, Effects, Phase, StateCell};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FeedState {
    /// Text currently in the search box.
    pub query: String,
    pub posts: Vec<Post>,
    pub phase: Phase,
    /// A list request is in flight.
    pub searching: bool,
}

impl FeedState {
    /// Mark a fetch as started and return the server-side filter to send.
    pub fn begin_search(&mut self) -> Result<Option<String>, ActionError> {
        if self.searching {
            return Err(ActionError::Busy);
        }
        self.searching = true;
        let trimmed = self.query.trim();
        Ok((!trimmed.is_empty()).then(|| trimmed.to_owned()))
    }

    /// Replace the list with the server result. A failure keeps whatever
    /// was shown before.
    pub fn finish_search(&mut self, result: Result<Vec<Post>, ApiError>) -> Effects {
        self.searching = false;
        self.phase = Phase::Ready;
        match result {
            Ok(posts) => {
                self.posts = posts;
                Effects::none()
            }
            Err(_) => Effects::notice(Notice::error("Failed to fetch posts")),
        }
    }

    /// A settled fetch returned nothing: render the empty state.
    pub fn is_empty(&self) -> bool {
        self.phase == Phase::Ready && !self.searching && self.posts.is_empty()
    }

    pub fn is_filtered(&self) -> bool {
        !self.query.trim().is_empty()
    }
}

/// Fetch the list for the current query.
pub async fn search<A, C>(api: &A, state: &C) -> Effects
where
    A: Api + ?Sized,
    C: StateCell<FeedState>,
{
    let filter = match state.begin_action(FeedState::begin_search) {
        Ok(filter) => filter,
        Err(fx) => return fx,
    };
    let result = api.list_posts(filter.as_deref()).await;
    state.finish_action(|s| s.finish_search(result))
}
