use std::cell::RefCell;

use futures::executor::block_on;

use super::*;
use crate::test_support::{Call, FakeApi, make_post, make_user};

fn profile_of(username: &str, posts: usize) -> Profile {
    let mut user = make_user("u-1", username);
    user.theme_color = "#a855f7".to_owned();
    Profile { user, blogs: (0..posts).map(|i| make_post(&format!("p-{i}"), "u-1")).collect() }
}

#[test]
fn load_fetches_by_username() {
    let api = FakeApi { profile: Ok(profile_of("ada", 2)), ..FakeApi::default() };
    let state = RefCell::new(ProfileState::new("ada"));
    let fx = block_on(load(&api, &state));
    assert!(fx.is_empty());
    assert_eq!(api.calls(), vec![Call::GetProfile("ada".to_owned())]);
    let state = state.into_inner();
    assert_eq!(state.phase, Phase::Ready);
    assert_eq!(state.post_count(), 2);
    assert_eq!(state.theme_color(), "#a855f7");
}

#[test]
fn unknown_user_redirects_to_feed() {
    let api = FakeApi::default();
    let state = RefCell::new(ProfileState::new("ghost"));
    let fx = block_on(load(&api, &state));
    assert_eq!(state.borrow().phase, Phase::Redirected);
    assert_eq!(fx.navigate, Some(AppRoute::Feed));
    assert_eq!(fx.notice.unwrap().message, "User not found");
}

#[test]
fn ownership_is_by_username() {
    let state = ProfileState::new("ada");
    assert!(state.is_own(Some(&make_user("any-id", "ada"))));
    assert!(!state.is_own(Some(&make_user("u-1", "bob"))));
    assert!(!state.is_own(None));
}

#[test]
fn first_post_invite_only_for_empty_own_profile() {
    let mut state = ProfileState::new("ada");
    state.finish_load("ada", Ok(profile_of("ada", 0)));
    let ada = make_user("u-1", "ada");
    assert!(state.invites_first_post(Some(&ada)));
    assert!(!state.invites_first_post(Some(&make_user("u-2", "bob"))));

    state.finish_load("ada", Ok(profile_of("ada", 1)));
    assert!(!state.invites_first_post(Some(&ada)));
}

#[test]
fn unloaded_profile_uses_default_theme() {
    let state = ProfileState::new("ada");
    assert_eq!(state.theme_color(), DEFAULT_THEME_COLOR);
    assert_eq!(state.post_count(), 0);
}

#[test]
fn response_for_previous_username_is_dropped() {
    let mut state = ProfileState::new("bob");
    let fx = state.finish_load("alice", Ok(profile_of("alice", 2)));
    assert!(fx.is_empty());
    assert!(state.profile.is_none());
    assert_eq!(state.phase, Phase::Loading);
    assert!(!state.invites_first_post(Some(&make_user("u-2", "bob"))));
}

#[test]
fn stale_failure_does_not_redirect() {
    let mut state = ProfileState::new("bob");
    let fx = state.finish_load("alice", Err(ApiError::NotFound));
    assert!(fx.is_empty());
    assert_eq!(state.phase, Phase::Loading);
}

#[test]
fn load_started_before_navigation_leaves_new_profile_alone() {
    let api = FakeApi { profile: Ok(profile_of("alice", 2)), ..FakeApi::default() };
    let state = RefCell::new(ProfileState::new("alice"));
    let username = state.borrow().username.clone();
    *state.borrow_mut() = ProfileState::new("bob");

    let fx = state.finish_action(|s| s.finish_load(&username, block_on(api.get_profile(&username))));

    assert!(fx.is_empty());
    assert!(state.borrow().profile.is_none());
}
