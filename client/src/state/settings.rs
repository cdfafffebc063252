//! Settings controller: the signed-in actor's bio, theme color and avatar.
//!
//! Edits are held in a local draft that the page previews live. Nothing is
//! written into the session directly; after a successful save the session is
//! refreshed from the server.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use crate::net::api::Api;
use crate::net::error::ApiError;
use crate::net::types::{ProfileForm, Upload, User};
use crate::routes::AppRoute;
use crate::state::session::{self, SessionState};
use crate::state::toast::Notice;
use crate::state::view::{ActionError, Effects, StateCell};

pub const BIO_MAX_CHARS: usize = 200;

/// A preset accent color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeSwatch {
    pub name: &'static str,
    pub value: &'static str,
}

pub const THEME_COLORS: [ThemeSwatch; 6] = [
    ThemeSwatch { name: "Neon Green", value: "#00ff88" },
    ThemeSwatch { name: "Cyber Blue", value: "#00d4ff" },
    ThemeSwatch { name: "Hot Pink", value: "#ff006e" },
    ThemeSwatch { name: "Purple", value: "#a855f7" },
    ThemeSwatch { name: "Orange", value: "#fb923c" },
    ThemeSwatch { name: "Red", value: "#ef4444" },
];

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SettingsState {
    pub username: String,
    pub name: String,
    pub bio: String,
    pub theme_color: String,
    /// Newly picked avatar, uploaded on save.
    pub picture: Option<Upload>,
    /// Current avatar or a local preview of the picked one.
    pub preview_url: Option<String>,
    pub saving: bool,
}

impl SettingsState {
    pub fn from_user(user: &User) -> Self {
        let mut state = Self {
            username: user.username.clone(),
            name: user.name.clone(),
            theme_color: user.theme_color.clone(),
            preview_url: user.picture.clone(),
            ..Self::default()
        };
        state.set_bio(&user.bio);
        state
    }

    /// Replace the bio, cut at [`BIO_MAX_CHARS`] characters.
    pub fn set_bio(&mut self, text: &str) {
        self.bio = text.chars().take(BIO_MAX_CHARS).collect();
    }

    pub fn bio_counter(&self) -> String {
        format!("{}/{BIO_MAX_CHARS}", self.bio.chars().count())
    }

    pub fn select_theme(&mut self, color: &str) {
        color.clone_into(&mut self.theme_color);
    }

    pub fn is_selected(&self, swatch: &ThemeSwatch) -> bool {
        self.theme_color.eq_ignore_ascii_case(swatch.value)
    }

    pub fn pick_picture(&mut self, upload: Upload, preview_url: String) {
        self.picture = Some(upload);
        self.preview_url = Some(preview_url);
    }

    pub fn form(&self) -> ProfileForm {
        ProfileForm {
            bio: self.bio.clone(),
            theme_color: self.theme_color.clone(),
            profile_picture: self.picture.clone(),
        }
    }

    pub fn begin_save(&mut self) -> Result<ProfileForm, ActionError> {
        if self.saving {
            return Err(ActionError::Busy);
        }
        self.saving = true;
        Ok(self.form())
    }

    /// On success the caller must refresh the session before applying the
    /// returned effects.
    pub fn finish_save(&mut self, result: Result<User, ApiError>) -> Effects {
        self.saving = false;
        match result {
            Ok(_) => {
                self.picture = None;
                Effects::notice(Notice::success("Profile updated successfully"))
                    .then_navigate(AppRoute::Profile(self.username.clone()))
            }
            Err(_) => Effects::notice(Notice::error("Failed to update profile")),
        }
    }
}

/// Submit the draft, then re-derive the session so every view sees the edit.
pub async fn save<A, C, S>(api: &A, state: &C, session: &S) -> Effects
where
    A: Api + ?Sized,
    C: StateCell<SettingsState>,
    S: StateCell<SessionState>,
{
    let form = match state.begin_action(SettingsState::begin_save) {
        Ok(form) => form,
        Err(fx) => return fx,
    };
    let result = api.update_profile(&form).await;
    if result.is_ok() {
        session::refresh(api, session).await;
    }
    state.finish_action(|s| s.finish_save(result))
}
