//! Post viewer controller: the post, its like counter and the comment thread.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reading is public. Liking and commenting need a session; the thread shows
//! a login prompt in place of the form when signed out.
//!
//! TRADE-OFFS
//! ==========
//! The like counter is adjusted locally by ±1 from the toggle response and is
//! only resynchronised on the next full load. Two quick toggles that race on
//! the server can leave the displayed count off until then.

#[cfg(test)]
#[path = "post_view_test.rs"]
mod post_view_test;

use crate::net::api::Api;
use crate::net::error::ApiError;
use crate::net::types::{Comment, Post, User};
use crate::routes::AppRoute;
use crate::state::toast::Notice;
use crate::state::view::{ActionError, Effects, Phase, StateCell};

/// What the thread renders below the comments header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommentGate {
    Form,
    LoginPrompt,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PostViewState {
    pub post_id: String,
    pub post: Option<Post>,
    /// Newest first.
    pub comments: Vec<Comment>,
    pub liked: bool,
    pub phase: Phase,
    /// Text in the comment box.
    pub draft: String,
    pub liking: bool,
    pub commenting: bool,
    pub share_open: bool,
}

impl PostViewState {
    pub fn new(post_id: impl Into<String>) -> Self {
        Self { post_id: post_id.into(), ..Self::default() }
    }

    /// Whether a response fetched for `post_id` still belongs on this page.
    fn is_current(&self, post_id: &str) -> bool {
        if post_id == self.post_id {
            return true;
        }
        log::debug!("dropping stale response for post {post_id}");
        false
    }

    pub fn finish_load_post(&mut self, post_id: &str, result: Result<Post, ApiError>) -> Effects {
        if !self.is_current(post_id) {
            return Effects::none();
        }
        match result {
            Ok(post) => {
                self.post = Some(post);
                self.phase = Phase::Ready;
                Effects::none()
            }
            Err(err) => {
                log::warn!("post {} unavailable: {err}", self.post_id);
                self.phase = Phase::Redirected;
                Effects::notice(Notice::error("Post not found")).then_navigate(AppRoute::Feed)
            }
        }
    }

    pub fn finish_load_comments(&mut self, post_id: &str, result: Result<Vec<Comment>, ApiError>) -> Effects {
        if !self.is_current(post_id) {
            return Effects::none();
        }
        match result {
            Ok(comments) => {
                self.comments = comments;
                Effects::none()
            }
            Err(_) => Effects::notice(Notice::error("Failed to load comments")),
        }
    }

    /// Like status is decoration; a failure only logs.
    pub fn finish_liked(&mut self, post_id: &str, result: Result<bool, ApiError>) {
        if !self.is_current(post_id) {
            return;
        }
        match result {
            Ok(liked) => self.liked = liked,
            Err(err) => log::warn!("like status for {} unavailable: {err}", self.post_id),
        }
    }

    /// Record the membership returned by a toggle and move the counter by one.
    pub fn apply_like(&mut self, liked: bool) {
        self.liked = liked;
        if let Some(post) = self.post.as_mut() {
            post.likes += if liked { 1 } else { -1 };
        }
    }

    /// Counter as displayed; never negative.
    pub fn like_count(&self) -> i64 {
        self.post.as_ref().map_or(0, |p| p.likes.max(0))
    }

    pub fn begin_like(&mut self, signed_in: bool) -> Result<String, ActionError> {
        if !signed_in {
            return Err(ActionError::Validation("Please login to like"));
        }
        if self.liking {
            return Err(ActionError::Busy);
        }
        if self.post.is_none() {
            return Err(ActionError::Declined);
        }
        self.liking = true;
        Ok(self.post_id.clone())
    }

    pub fn finish_like(&mut self, post_id: &str, result: Result<bool, ApiError>) -> Effects {
        if !self.is_current(post_id) {
            return Effects::none();
        }
        self.liking = false;
        match result {
            Ok(liked) => {
                self.apply_like(liked);
                Effects::none()
            }
            Err(_) => Effects::notice(Notice::error("Failed to like")),
        }
    }

    pub fn comment_gate(signed_in: bool) -> CommentGate {
        if signed_in { CommentGate::Form } else { CommentGate::LoginPrompt }
    }

    /// Returns `(post_id, text)` to submit.
    pub fn begin_comment(&mut self, signed_in: bool) -> Result<(String, String), ActionError> {
        if !signed_in {
            return Err(ActionError::Validation("Please login to comment"));
        }
        if self.commenting {
            return Err(ActionError::Busy);
        }
        if self.draft.trim().is_empty() {
            return Err(ActionError::Validation("Comment cannot be empty"));
        }
        self.commenting = true;
        Ok((self.post_id.clone(), self.draft.clone()))
    }

    /// The server orders comments newest first, so a new one goes on top.
    pub fn finish_comment(&mut self, post_id: &str, result: Result<Comment, ApiError>) -> Effects {
        if !self.is_current(post_id) {
            return Effects::none();
        }
        self.commenting = false;
        match result {
            Ok(comment) => {
                self.comments.insert(0, comment);
                self.draft.clear();
                Effects::notice(Notice::success("Comment added"))
            }
            Err(_) => Effects::notice(Notice::error("Failed to add comment")),
        }
    }

    pub fn is_owner(&self, user: Option<&User>) -> bool {
        self.post.as_ref().is_some_and(|p| p.is_owned_by(user))
    }

    pub fn toggle_share(&mut self) {
        self.share_open = !self.share_open;
    }
}

/// Load the post, then its comments, then (signed in only) the like status.
pub async fn load<A, C>(api: &A, state: &C, signed_in: bool) -> Effects
where
    A: Api + ?Sized,
    C: StateCell<PostViewState>,
{
    let Some(post_id) = state.read_with(|s| s.post_id.clone()) else {
        return Effects::none();
    };
    let post = api.get_post(&post_id).await;
    let fx = state.finish_action(|s| s.finish_load_post(&post_id, post));
    let loaded = state.read_with(|s| s.post_id == post_id && s.phase == Phase::Ready);
    if loaded != Some(true) {
        return fx;
    }
    let comments = api.list_comments(&post_id).await;
    let fx = state.finish_action(|s| s.finish_load_comments(&post_id, comments));
    if signed_in {
        let liked = api.liked(&post_id).await;
        state.write_with(|s| s.finish_liked(&post_id, liked));
    }
    fx
}

pub async fn like<A, C>(api: &A, state: &C, signed_in: bool) -> Effects
where
    A: Api + ?Sized,
    C: StateCell<PostViewState>,
{
    let post_id = match state.begin_action(|s| s.begin_like(signed_in)) {
        Ok(id) => id,
        Err(fx) => return fx,
    };
    let result = api.toggle_like(&post_id).await;
    state.finish_action(|s| s.finish_like(&post_id, result))
}

pub async fn comment<A, C>(api: &A, state: &C, signed_in: bool) -> Effects
where
    A: Api + ?Sized,
    C: StateCell<PostViewState>,
{
    let (post_id, text) = match state.begin_action(|s| s.begin_comment(signed_in)) {
        Ok(parts) => parts,
        Err(fx) => return fx,
    };
    let result = api.add_comment(&post_id, &text).await;
    state.finish_action(|s| s.finish_comment(&post_id, result))
}
