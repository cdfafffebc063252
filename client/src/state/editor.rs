//! Editor controller for creating and editing posts.
//!
//! DESIGN
//! ======
//! The mode is decided only by the route: `/editor` creates, `/editor/{id}`
//! edits. Ownership is enforced by the server; a 403 on save is surfaced and
//! the draft is left exactly as typed.
//!
//! ERROR HANDLING
//! ==============
//! Validation and the delete confirmation run before any request, so a
//! rejected save or a declined delete never reaches the network.

#[cfg(test)]
#[path = "editor_test.rs"]
mod editor_test;

use crate::net::api::Api;
use crate::net::error::ApiError;
use crate::net::types::{Post, PostForm, Upload};
use crate::routes::AppRoute;
use crate::state::toast::Notice;
use crate::state::view::{ActionError, Effects, Phase, StateCell};

const UNTITLED: &str = "Untitled";
const NO_CONTENT: &str = "No content yet...";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditorMode {
    Create,
    Edit(String),
}

impl EditorMode {
    pub fn from_route_id(id: Option<String>) -> Self {
        match id.filter(|id| !id.is_empty()) {
            Some(id) => Self::Edit(id),
            None => Self::Create,
        }
    }

    pub fn post_id(&self) -> Option<&str> {
        match self {
            Self::Create => None,
            Self::Edit(id) => Some(id),
        }
    }
}

/// Cover image as shown in the editor.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum CoverImage {
    #[default]
    None,
    /// Already stored on the server.
    Existing(String),
    /// Picked locally; uploaded with the next save.
    Picked { upload: Upload, preview_url: String },
}

impl CoverImage {
    pub fn preview_src(&self) -> Option<&str> {
        match self {
            Self::None => None,
            Self::Existing(url) => Some(url),
            Self::Picked { preview_url, .. } => Some(preview_url),
        }
    }

    fn pending_upload(&self) -> Option<Upload> {
        match self {
            Self::Picked { upload, .. } => Some(upload.clone()),
            Self::None | Self::Existing(_) => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditorState {
    pub mode: EditorMode,
    pub title: String,
    pub content: String,
    pub is_published: bool,
    pub cover: CoverImage,
    /// Show the rendered markdown instead of the form.
    pub preview: bool,
    pub phase: Phase,
    pub saving: bool,
    pub deleting: bool,
}

impl EditorState {
    pub fn new(mode: EditorMode) -> Self {
        let phase = match mode {
            EditorMode::Create => Phase::Ready,
            EditorMode::Edit(_) => Phase::Loading,
        };
        Self {
            mode,
            title: String::new(),
            content: String::new(),
            is_published: false,
            cover: CoverImage::None,
            preview: false,
            phase,
            saving: false,
            deleting: false,
        }
    }

    pub fn is_edit(&self) -> bool {
        matches!(self.mode, EditorMode::Edit(_))
    }

    /// Whether a response for a request started in `mode` still applies.
    fn is_current(&self, mode: &EditorMode) -> bool {
        if *mode == self.mode {
            return true;
        }
        log::debug!("dropping editor response for {mode:?}");
        false
    }

    /// Fill the form from the stored post, or bail out to the feed.
    pub fn finish_load(&mut self, post_id: &str, result: Result<Post, ApiError>) -> Effects {
        if self.mode.post_id() != Some(post_id) {
            log::debug!("dropping editor load for post {post_id}");
            return Effects::none();
        }
        match result {
            Ok(post) => {
                self.fill_from(&post);
                self.phase = Phase::Ready;
                Effects::none()
            }
            Err(err) => {
                log::warn!("editor could not load post: {err}");
                self.phase = Phase::Redirected;
                Effects::notice(Notice::error("Failed to load post")).then_navigate(AppRoute::Feed)
            }
        }
    }

    fn fill_from(&mut self, post: &Post) {
        self.title.clone_from(&post.title);
        self.content.clone_from(&post.content);
        self.is_published = post.is_published;
        self.cover = post.cover_image.clone().map_or(CoverImage::None, CoverImage::Existing);
    }

    pub fn toggle_preview(&mut self) {
        self.preview = !self.preview;
    }

    pub fn preview_title(&self) -> &str {
        if self.title.is_empty() { UNTITLED } else { &self.title }
    }

    pub fn preview_content(&self) -> &str {
        if self.content.is_empty() { NO_CONTENT } else { &self.content }
    }

    pub fn pick_cover(&mut self, upload: Upload, preview_url: String) {
        self.cover = CoverImage::Picked { upload, preview_url };
    }

    pub fn remove_cover(&mut self) {
        self.cover = CoverImage::None;
    }

    /// Title and body must both be non-blank.
    pub fn validate(&self) -> Result<(), ActionError> {
        if self.title.trim().is_empty() || self.content.trim().is_empty() {
            return Err(ActionError::Validation("Title and content are required"));
        }
        Ok(())
    }

    pub fn form(&self) -> PostForm {
        PostForm {
            title: self.title.clone(),
            content: self.content.clone(),
            is_published: self.is_published,
            cover_image: self.cover.pending_upload(),
        }
    }

    /// Validate and mark the save in flight; returns the payload to send.
    pub fn begin_save(&mut self) -> Result<PostForm, ActionError> {
        if self.saving {
            return Err(ActionError::Busy);
        }
        self.validate()?;
        self.saving = true;
        Ok(self.form())
    }

    pub fn finish_save(&mut self, mode: &EditorMode, result: Result<Post, ApiError>) -> Effects {
        if !self.is_current(mode) {
            return Effects::none();
        }
        self.saving = false;
        match result {
            Ok(post) => match self.mode {
                EditorMode::Create => Effects::notice(Notice::success("Post created successfully"))
                    .then_navigate(AppRoute::Post(post.id)),
                EditorMode::Edit(_) => {
                    self.cover = post.cover_image.map_or(CoverImage::None, CoverImage::Existing);
                    Effects::notice(Notice::success("Post updated successfully"))
                }
            },
            Err(ApiError::Forbidden) => Effects::notice(Notice::error("You can only edit your own posts")),
            Err(_) => Effects::notice(Notice::error("Failed to save post")),
        }
    }

    /// Gate a delete on the user's confirmation; returns the id to delete.
    pub fn begin_delete(&mut self, confirmed: bool) -> Result<String, ActionError> {
        if self.deleting {
            return Err(ActionError::Busy);
        }
        let Some(id) = self.mode.post_id() else {
            return Err(ActionError::Declined);
        };
        if !confirmed {
            return Err(ActionError::Declined);
        }
        let id = id.to_owned();
        self.deleting = true;
        Ok(id)
    }

    pub fn finish_delete(&mut self, post_id: &str, result: Result<(), ApiError>) -> Effects {
        if self.mode.post_id() != Some(post_id) {
            log::debug!("dropping delete result for post {post_id}");
            return Effects::none();
        }
        self.deleting = false;
        match result {
            Ok(()) => Effects::notice(Notice::success("Post deleted successfully")).then_navigate(AppRoute::Feed),
            Err(ApiError::Forbidden) => Effects::notice(Notice::error("You can only delete your own posts")),
            Err(_) => Effects::notice(Notice::error("Failed to delete post")),
        }
    }
}

/// Load the post being edited. Create mode issues no request.
pub async fn load<A, C>(api: &A, state: &C) -> Effects
where
    A: Api + ?Sized,
    C: StateCell<EditorState>,
{
    let Some(Some(id)) = state.read_with(|s| s.mode.post_id().map(str::to_owned)) else {
        state.write_with(|s| s.phase = Phase::Ready);
        return Effects::none();
    };
    let result = api.get_post(&id).await;
    state.finish_action(|s| s.finish_load(&id, result))
}

pub async fn save<A, C>(api: &A, state: &C) -> Effects
where
    A: Api + ?Sized,
    C: StateCell<EditorState>,
{
    let (mode, form) = match state.begin_action(|s| Ok((s.mode.clone(), s.begin_save()?))) {
        Ok(parts) => parts,
        Err(fx) => return fx,
    };
    let result = match mode.post_id() {
        Some(id) => api.update_post(id, &form).await,
        None => api.create_post(&form).await,
    };
    state.finish_action(|s| s.finish_save(&mode, result))
}

/// Ask `confirm` first; only a confirmed delete reaches the API.
pub async fn delete<A, C>(api: &A, state: &C, confirm: impl FnOnce() -> bool) -> Effects
where
    A: Api + ?Sized,
    C: StateCell<EditorState>,
{
    let offered = state.read_with(|s| s.mode.post_id().is_some() && !s.deleting);
    if offered != Some(true) {
        return Effects::none();
    }
    let confirmed = confirm();
    let id = match state.begin_action(|s| s.begin_delete(confirmed)) {
        Ok(id) => id,
        Err(fx) => return fx,
    };
    let result = api.delete_post(&id).await;
    state.finish_action(|s| s.finish_delete(&id, result))
}
