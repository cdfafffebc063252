use std::cell::RefCell;

use futures::executor::block_on;

use super::*;
use crate::state::toast::ToastKind;
use crate::test_support::{Call, FakeApi, make_user};

// =============================================================
// SessionState transitions
// =============================================================

#[test]
fn session_state_default_signed_out_not_loading() {
    let state = SessionState::default();
    assert!(state.user.is_none());
    assert!(!state.loading);
}

#[test]
fn pending_session_is_loading() {
    let state = SessionState::pending();
    assert!(state.loading);
    assert!(!state.is_signed_in());
}

#[test]
fn status_ignores_profile_edits() {
    let mut state = SessionState::pending();
    assert_eq!(state.status(), AuthStatus::Loading);

    state.finish_refresh(Ok(make_user("u-1", "ada")));
    assert_eq!(state.status(), AuthStatus::SignedIn);

    let before = state.status();
    if let Some(user) = state.user.as_mut() {
        user.bio = "edited".to_owned();
        user.theme_color = "#ef4444".to_owned();
    }
    assert_eq!(state.status(), before);

    state.clear();
    assert_eq!(state.status(), AuthStatus::SignedOut);
}

#[test]
fn finish_refresh_replaces_prior_user() {
    let mut state = SessionState { user: Some(make_user("u-1", "ada")), loading: false };
    state.begin_refresh();
    assert!(state.loading);
    state.finish_refresh(Ok(make_user("u-2", "bob")));
    assert_eq!(state.user().map(|u| u.username.as_str()), Some("bob"));
    assert!(!state.loading);
}

#[test]
fn finish_refresh_error_means_signed_out() {
    let mut state = SessionState { user: Some(make_user("u-1", "ada")), loading: true };
    state.finish_refresh(Err(ApiError::Unauthorized));
    assert!(!state.is_signed_in());
    assert!(!state.loading);
}

#[test]
fn adopt_and_clear() {
    let mut state = SessionState::pending();
    state.adopt(make_user("u-1", "ada"));
    assert!(state.is_signed_in());
    assert!(!state.loading);
    state.clear();
    assert!(!state.is_signed_in());
}

// =============================================================
// refresh / sign_out
// =============================================================

#[test]
fn refresh_reads_auth_me_once() {
    let api = FakeApi { current_user: Ok(make_user("u-1", "ada")), ..FakeApi::default() };
    let session = RefCell::new(SessionState::pending());
    block_on(refresh(&api, &session));
    assert_eq!(api.calls(), vec![Call::CurrentUser]);
    assert_eq!(session.borrow().user().map(|u| u.id.as_str()), Some("u-1"));
}

#[test]
fn refresh_without_cookie_leaves_session_absent() {
    let api = FakeApi::default();
    let session = RefCell::new(SessionState::pending());
    block_on(refresh(&api, &session));
    assert!(!session.borrow().is_signed_in());
    assert!(!session.borrow().loading);
}

#[test]
fn refresh_replaces_a_stale_identity() {
    let api = FakeApi { current_user: Ok(make_user("u-2", "bob")), ..FakeApi::default() };
    let session = RefCell::new(SessionState { user: Some(make_user("u-1", "ada")), loading: false });
    block_on(refresh(&api, &session));
    assert_eq!(session.borrow().user().map(|u| u.username.as_str()), Some("bob"));
}

#[test]
fn sign_out_clears_and_goes_to_landing() {
    let api = FakeApi::default();
    let session = RefCell::new(SessionState { user: Some(make_user("u-1", "ada")), loading: false });
    let fx = block_on(sign_out(&api, &session));
    assert_eq!(api.calls(), vec![Call::Logout]);
    assert!(!session.borrow().is_signed_in());
    assert_eq!(fx.navigate, Some(AppRoute::Landing));
}

#[test]
fn failed_sign_out_keeps_session_and_notifies() {
    let api = FakeApi { logout: Err(ApiError::Transport("offline".to_owned())), ..FakeApi::default() };
    let session = RefCell::new(SessionState { user: Some(make_user("u-1", "ada")), loading: false });
    let fx = block_on(sign_out(&api, &session));
    assert!(session.borrow().is_signed_in());
    assert!(fx.navigate.is_none());
    let notice = fx.notice.unwrap();
    assert_eq!(notice.kind, ToastKind::Error);
    assert_eq!(notice.message, "Logout failed");
}
