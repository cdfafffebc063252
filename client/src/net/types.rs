//! Wire DTOs for the NightBlog REST API.
//!
//! DESIGN
//! ======
//! Field names follow the API's JSON (`blogs`, `picture`, `is_published`) so
//! serde stays attribute-light; Rust-side names (`Post`) only appear at the
//! type level.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

pub const DEFAULT_THEME_COLOR: &str = "#00ff88";

/// The signed-in actor as returned by `/auth/me`, `/auth/session` and
/// `PUT /users/profile`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier.
    pub id: String,
    #[serde(default)]
    pub email: String,
    /// Display name.
    pub name: String,
    /// Unique handle used in profile URLs.
    pub username: String,
    /// Avatar image URL, if available.
    #[serde(default)]
    pub picture: Option<String>,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub bio: String,
    /// Accent color (hex) used on the profile page.
    #[serde(default = "default_theme_color", deserialize_with = "deserialize_theme_color")]
    pub theme_color: String,
}

impl User {
    /// First character of the display name, for avatar fallbacks.
    pub fn initial(&self) -> String {
        initial_of(&self.name)
    }
}

/// A blog post. The API calls these "blogs".
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    /// Owner's user id.
    pub user_id: String,
    /// Owner's username, denormalized for display.
    pub username: String,
    pub title: String,
    /// Markdown body.
    pub content: String,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub is_published: bool,
    #[serde(default, deserialize_with = "deserialize_count")]
    pub likes: i64,
    #[serde(default, deserialize_with = "deserialize_count")]
    pub views: i64,
    /// ISO 8601 timestamp.
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Post {
    /// Whether `user` owns this post.
    pub fn is_owned_by(&self, user: Option<&User>) -> bool {
        user.is_some_and(|u| u.id == self.user_id)
    }
}

/// A comment on a post.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub blog_id: String,
    pub user_id: String,
    pub username: String,
    #[serde(default)]
    pub user_picture: Option<String>,
    pub text: String,
    #[serde(default)]
    pub created_at: String,
}

/// Public profile: the user plus their published posts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub user: User,
    #[serde(default)]
    pub blogs: Vec<Post>,
}

/// Response body of `POST /auth/session`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SessionResponse {
    pub user: User,
}

/// Response body of the like endpoints.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct LikeStatus {
    pub liked: bool,
}

/// A file picked in the browser, already read into memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Upload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Multipart payload for creating or updating a post.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PostForm {
    pub title: String,
    pub content: String,
    pub is_published: bool,
    pub cover_image: Option<Upload>,
}

/// Multipart payload for `PUT /users/profile`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileForm {
    pub bio: String,
    pub theme_color: String,
    pub profile_picture: Option<Upload>,
}

/// First character of `name`, uppercased, or `?` when empty.
pub fn initial_of(name: &str) -> String {
    name.chars()
        .next()
        .map_or_else(|| "?".to_owned(), |c| c.to_uppercase().collect())
}

fn default_theme_color() -> String {
    DEFAULT_THEME_COLOR.to_owned()
}

fn deserialize_nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn deserialize_theme_color<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?
        .filter(|c| !c.trim().is_empty())
        .unwrap_or_else(default_theme_color))
}

/// Counters arrive as integers, floats or `null` depending on the writer.
fn deserialize_count<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Null => Ok(0),
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(int);
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= i64::MIN as f64
                && float <= i64::MAX as f64
            {
                return Ok(float as i64);
            }
            Err(D::Error::custom("expected integer-compatible number"))
        }
        _ => Err(D::Error::custom("expected number")),
    }
}
