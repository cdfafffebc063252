//! REST API access for the NightBlog backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, always sending the
//! session cookie (`credentials: include`) since the API may live on another
//! origin.
//! Server-side (SSR) and native builds: every call fails with
//! [`ApiError::Unavailable`]; pages never fetch during server rendering.
//!
//! DESIGN
//! ======
//! View controllers depend on the [`Api`] trait rather than on `HttpApi`, so
//! their flows run natively in tests against an in-memory fake. Request
//! shapes (paths, query, multipart fields) are built by pure helpers that the
//! tests exercise directly.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::fmt;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::types::{Comment, LikeStatus, Post, PostForm, Profile, ProfileForm, SessionResponse, Upload, User};

/// Resource fetchers used by every view controller.
///
/// Futures are `?Send`: the browser runtime is single-threaded.
#[async_trait(?Send)]
pub trait Api {
    /// `GET /auth/me`: the actor behind the current session cookie.
    async fn current_user(&self) -> Result<User, ApiError>;
    /// `POST /auth/session`: trade a redirect `session_id` for a cookie.
    async fn exchange_session(&self, session_id: &str) -> Result<User, ApiError>;
    /// `POST /auth/logout`.
    async fn logout(&self) -> Result<(), ApiError>;

    /// `GET /blogs`, optionally filtered server-side by `search`.
    async fn list_posts(&self, search: Option<&str>) -> Result<Vec<Post>, ApiError>;
    async fn get_post(&self, id: &str) -> Result<Post, ApiError>;
    async fn create_post(&self, form: &PostForm) -> Result<Post, ApiError>;
    async fn update_post(&self, id: &str, form: &PostForm) -> Result<Post, ApiError>;
    async fn delete_post(&self, id: &str) -> Result<(), ApiError>;

    /// Comments for a post, newest first.
    async fn list_comments(&self, post_id: &str) -> Result<Vec<Comment>, ApiError>;
    async fn add_comment(&self, post_id: &str, text: &str) -> Result<Comment, ApiError>;

    /// Flip the actor's like; returns the new membership.
    async fn toggle_like(&self, post_id: &str) -> Result<bool, ApiError>;
    async fn liked(&self, post_id: &str) -> Result<bool, ApiError>;

    async fn get_profile(&self, username: &str) -> Result<Profile, ApiError>;
    async fn update_profile(&self, form: &ProfileForm) -> Result<User, ApiError>;
}

/// HTTP verb of a request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        })
    }
}

/// One multipart field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormField {
    Text { name: &'static str, value: String },
    File { name: &'static str, upload: Upload },
}

/// Request body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Body {
    Empty,
    Multipart(Vec<FormField>),
}

/// Browser HTTP client bound to an API base such as `/api` or
/// `https://blog.example.com/api`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpApi {
    base: String,
}

impl HttpApi {
    pub fn new(base: &str) -> Self {
        Self { base: base.trim_end_matches('/').to_owned() }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base)
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
        body: Body,
    ) -> Result<T, ApiError> {
        let url = self.url(path);
        let result = self.send_json(method, &url, query, body).await;
        if let Err(err) = &result {
            log::warn!("{method} {url} failed: {err}");
        }
        result
    }

    #[cfg(feature = "hydrate")]
    async fn send_json<T: DeserializeOwned>(
        &self,
        method: Method,
        url: &str,
        query: &[(&str, &str)],
        body: Body,
    ) -> Result<T, ApiError> {
        use gloo_net::http::Request;

        let builder = match method {
            Method::Get => Request::get(url),
            Method::Post => Request::post(url),
            Method::Put => Request::put(url),
            Method::Delete => Request::delete(url),
        }
        .credentials(web_sys::RequestCredentials::Include);
        let builder = if query.is_empty() { builder } else { builder.query(query.iter().copied()) };

        let request = match body {
            Body::Empty => builder.build(),
            Body::Multipart(fields) => builder.body(to_form_data(&fields)?),
        }
        .map_err(|e| ApiError::Transport(e.to_string()))?;

        let resp = request.send().await.map_err(|e| ApiError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::from_status(resp.status()));
        }
        resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }

    #[cfg(not(feature = "hydrate"))]
    async fn send_json<T: DeserializeOwned>(
        &self,
        method: Method,
        url: &str,
        query: &[(&str, &str)],
        body: Body,
    ) -> Result<T, ApiError> {
        let _ = (method, url, query, body);
        Err(ApiError::Unavailable)
    }
}

#[async_trait(?Send)]
impl Api for HttpApi {
    async fn current_user(&self) -> Result<User, ApiError> {
        self.fetch(Method::Get, "/auth/me", &[], Body::Empty).await
    }

    async fn exchange_session(&self, session_id: &str) -> Result<User, ApiError> {
        let body = Body::Multipart(session_form_fields(session_id));
        let resp: SessionResponse = self.fetch(Method::Post, "/auth/session", &[], body).await?;
        Ok(resp.user)
    }

    async fn logout(&self) -> Result<(), ApiError> {
        self.fetch::<serde_json::Value>(Method::Post, "/auth/logout", &[], Body::Empty)
            .await
            .map(|_| ())
    }

    async fn list_posts(&self, search: Option<&str>) -> Result<Vec<Post>, ApiError> {
        let query = search_query(search);
        self.fetch(Method::Get, "/blogs", &query, Body::Empty).await
    }

    async fn get_post(&self, id: &str) -> Result<Post, ApiError> {
        self.fetch(Method::Get, &post_path(id), &[], Body::Empty).await
    }

    async fn create_post(&self, form: &PostForm) -> Result<Post, ApiError> {
        let body = Body::Multipart(post_form_fields(form));
        self.fetch(Method::Post, "/blogs", &[], body).await
    }

    async fn update_post(&self, id: &str, form: &PostForm) -> Result<Post, ApiError> {
        let body = Body::Multipart(post_form_fields(form));
        self.fetch(Method::Put, &post_path(id), &[], body).await
    }

    async fn delete_post(&self, id: &str) -> Result<(), ApiError> {
        self.fetch::<serde_json::Value>(Method::Delete, &post_path(id), &[], Body::Empty)
            .await
            .map(|_| ())
    }

    async fn list_comments(&self, post_id: &str) -> Result<Vec<Comment>, ApiError> {
        self.fetch(Method::Get, &comments_path(post_id), &[], Body::Empty).await
    }

    async fn add_comment(&self, post_id: &str, text: &str) -> Result<Comment, ApiError> {
        let body = Body::Multipart(vec![FormField::Text { name: "text", value: text.to_owned() }]);
        self.fetch(Method::Post, &comments_path(post_id), &[], body).await
    }

    async fn toggle_like(&self, post_id: &str) -> Result<bool, ApiError> {
        let status: LikeStatus = self.fetch(Method::Post, &like_path(post_id), &[], Body::Empty).await?;
        Ok(status.liked)
    }

    async fn liked(&self, post_id: &str) -> Result<bool, ApiError> {
        let status: LikeStatus = self.fetch(Method::Get, &liked_path(post_id), &[], Body::Empty).await?;
        Ok(status.liked)
    }

    async fn get_profile(&self, username: &str) -> Result<Profile, ApiError> {
        self.fetch(Method::Get, &profile_path(username), &[], Body::Empty).await
    }

    async fn update_profile(&self, form: &ProfileForm) -> Result<User, ApiError> {
        let body = Body::Multipart(profile_form_fields(form));
        self.fetch(Method::Put, "/users/profile", &[], body).await
    }
}

// =============================================================================
// REQUEST SHAPES
// =============================================================================

/// Percent-encode a single path segment.
fn encode_segment(raw: &str) -> String {
    url::form_urlencoded::byte_serialize(raw.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

fn post_path(id: &str) -> String {
    format!("/blogs/{}", encode_segment(id))
}

fn comments_path(post_id: &str) -> String {
    format!("/blogs/{}/comments", encode_segment(post_id))
}

fn like_path(post_id: &str) -> String {
    format!("/blogs/{}/like", encode_segment(post_id))
}

fn liked_path(post_id: &str) -> String {
    format!("/blogs/{}/liked", encode_segment(post_id))
}

fn profile_path(username: &str) -> String {
    format!("/users/{}", encode_segment(username))
}

/// `search` is only sent for a non-blank query.
fn search_query(search: Option<&str>) -> Vec<(&'static str, &str)> {
    match search.map(str::trim) {
        Some(q) if !q.is_empty() => vec![("search", q)],
        _ => Vec::new(),
    }
}

fn session_form_fields(session_id: &str) -> Vec<FormField> {
    vec![FormField::Text { name: "session_id", value: session_id.to_owned() }]
}

fn post_form_fields(form: &PostForm) -> Vec<FormField> {
    let mut fields = vec![
        FormField::Text { name: "title", value: form.title.clone() },
        FormField::Text { name: "content", value: form.content.clone() },
        FormField::Text { name: "is_published", value: form.is_published.to_string() },
    ];
    if let Some(upload) = &form.cover_image {
        fields.push(FormField::File { name: "cover_image", upload: upload.clone() });
    }
    fields
}

fn profile_form_fields(form: &ProfileForm) -> Vec<FormField> {
    let mut fields = vec![
        FormField::Text { name: "bio", value: form.bio.clone() },
        FormField::Text { name: "theme_color", value: form.theme_color.clone() },
    ];
    if let Some(upload) = &form.profile_picture {
        fields.push(FormField::File { name: "profile_picture", upload: upload.clone() });
    }
    fields
}

#[cfg(feature = "hydrate")]
fn to_form_data(fields: &[FormField]) -> Result<web_sys::FormData, ApiError> {
    let js_err = |e: wasm_bindgen::JsValue| ApiError::Transport(format!("{e:?}"));
    let form = web_sys::FormData::new().map_err(js_err)?;
    for field in fields {
        match field {
            FormField::Text { name, value } => form.append_with_str(name, value).map_err(js_err)?,
            FormField::File { name, upload } => {
                let blob = upload_to_blob(upload).map_err(js_err)?;
                form.append_with_blob_and_filename(name, &blob, &upload.file_name)
                    .map_err(js_err)?;
            }
        }
    }
    Ok(form)
}

#[cfg(feature = "hydrate")]
pub(crate) fn upload_to_blob(upload: &Upload) -> Result<web_sys::Blob, wasm_bindgen::JsValue> {
    let bytes = js_sys::Uint8Array::from(upload.bytes.as_slice());
    let parts = js_sys::Array::of1(&bytes);
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(&upload.content_type);
    web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
}
