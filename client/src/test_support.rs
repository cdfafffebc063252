//! Fixtures and an in-memory [`Api`] for controller tests.

use std::cell::{Cell, RefCell};

use async_trait::async_trait;

use crate::net::api::Api;
use crate::net::error::ApiError;
use crate::net::types::{Comment, DEFAULT_THEME_COLOR, Post, PostForm, Profile, ProfileForm, User};

pub fn make_user(id: &str, username: &str) -> User {
    User {
        id: id.to_owned(),
        email: format!("{username}@example.com"),
        name: username.to_owned(),
        username: username.to_owned(),
        picture: None,
        bio: String::new(),
        theme_color: DEFAULT_THEME_COLOR.to_owned(),
    }
}

pub fn make_post(id: &str, user_id: &str) -> Post {
    Post {
        id: id.to_owned(),
        user_id: user_id.to_owned(),
        username: "ada".to_owned(),
        title: "Night notes".to_owned(),
        content: "# Heading\n\nBody text.".to_owned(),
        cover_image: None,
        is_published: true,
        likes: 3,
        views: 10,
        created_at: "2025-01-02T03:04:05Z".to_owned(),
        updated_at: None,
    }
}

pub fn make_comment(id: &str, post_id: &str) -> Comment {
    Comment {
        id: id.to_owned(),
        blog_id: post_id.to_owned(),
        user_id: "u-2".to_owned(),
        username: "bob".to_owned(),
        user_picture: None,
        text: format!("comment {id}"),
        created_at: "2025-01-03T00:00:00Z".to_owned(),
    }
}

/// A recorded API invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    CurrentUser,
    ExchangeSession(String),
    Logout,
    ListPosts(Option<String>),
    GetPost(String),
    CreatePost(PostForm),
    UpdatePost(String, PostForm),
    DeletePost(String),
    ListComments(String),
    AddComment(String, String),
    ToggleLike(String),
    Liked(String),
    GetProfile(String),
    UpdateProfile(ProfileForm),
}

/// Canned responses plus a call log.
pub struct FakeApi {
    pub(crate) calls: RefCell<Vec<Call>>,
    pub current_user: Result<User, ApiError>,
    pub exchange: Result<User, ApiError>,
    pub logout: Result<(), ApiError>,
    pub posts: Result<Vec<Post>, ApiError>,
    pub post: Result<Post, ApiError>,
    pub saved_post: Result<Post, ApiError>,
    pub delete: Result<(), ApiError>,
    pub comments: Result<Vec<Comment>, ApiError>,
    pub new_comment: Result<Comment, ApiError>,
    /// Error returned by `toggle_like`; `None` flips [`Self::membership`].
    pub toggle_error: Option<ApiError>,
    pub membership: Cell<bool>,
    pub liked: Result<bool, ApiError>,
    pub profile: Result<Profile, ApiError>,
    pub updated_user: Result<User, ApiError>,
}

impl Default for FakeApi {
    fn default() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            current_user: Err(ApiError::Unauthorized),
            exchange: Err(ApiError::Status(500)),
            logout: Ok(()),
            posts: Ok(Vec::new()),
            post: Err(ApiError::NotFound),
            saved_post: Err(ApiError::Status(500)),
            delete: Ok(()),
            comments: Ok(Vec::new()),
            new_comment: Err(ApiError::Status(500)),
            toggle_error: None,
            membership: Cell::new(false),
            liked: Ok(false),
            profile: Err(ApiError::NotFound),
            updated_user: Err(ApiError::Status(500)),
        }
    }
}

impl FakeApi {
    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.calls.borrow().iter().filter(|c| pred(c)).count()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }
}

#[async_trait(?Send)]
impl Api for FakeApi {
    async fn current_user(&self) -> Result<User, ApiError> {
        self.record(Call::CurrentUser);
        self.current_user.clone()
    }

    async fn exchange_session(&self, session_id: &str) -> Result<User, ApiError> {
        self.record(Call::ExchangeSession(session_id.to_owned()));
        self.exchange.clone()
    }

    async fn logout(&self) -> Result<(), ApiError> {
        self.record(Call::Logout);
        self.logout.clone()
    }

    async fn list_posts(&self, search: Option<&str>) -> Result<Vec<Post>, ApiError> {
        self.record(Call::ListPosts(search.map(str::to_owned)));
        self.posts.clone()
    }

    async fn get_post(&self, id: &str) -> Result<Post, ApiError> {
        self.record(Call::GetPost(id.to_owned()));
        self.post.clone()
    }

    async fn create_post(&self, form: &PostForm) -> Result<Post, ApiError> {
        self.record(Call::CreatePost(form.clone()));
        self.saved_post.clone()
    }

    async fn update_post(&self, id: &str, form: &PostForm) -> Result<Post, ApiError> {
        self.record(Call::UpdatePost(id.to_owned(), form.clone()));
        self.saved_post.clone()
    }

    async fn delete_post(&self, id: &str) -> Result<(), ApiError> {
        self.record(Call::DeletePost(id.to_owned()));
        self.delete.clone()
    }

    async fn list_comments(&self, post_id: &str) -> Result<Vec<Comment>, ApiError> {
        self.record(Call::ListComments(post_id.to_owned()));
        self.comments.clone()
    }

    async fn add_comment(&self, post_id: &str, text: &str) -> Result<Comment, ApiError> {
        self.record(Call::AddComment(post_id.to_owned(), text.to_owned()));
        self.new_comment.clone()
    }

    async fn toggle_like(&self, post_id: &str) -> Result<bool, ApiError> {
        self.record(Call::ToggleLike(post_id.to_owned()));
        if let Some(err) = &self.toggle_error {
            return Err(err.clone());
        }
        let next = !self.membership.get();
        self.membership.set(next);
        Ok(next)
    }

    async fn liked(&self, post_id: &str) -> Result<bool, ApiError> {
        self.record(Call::Liked(post_id.to_owned()));
        self.liked.clone()
    }

    async fn get_profile(&self, username: &str) -> Result<Profile, ApiError> {
        self.record(Call::GetProfile(username.to_owned()));
        self.profile.clone()
    }

    async fn update_profile(&self, form: &ProfileForm) -> Result<User, ApiError> {
        self.record(Call::UpdateProfile(form.clone()));
        self.updated_user.clone()
    }
}
