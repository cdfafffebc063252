use std::borrow::Borrow;
use std::cell::RefCell;

use futures::executor::block_on;

use super::*;
use crate::state::toast::ToastKind;
use crate::test_support::{Call, FakeApi, make_user};

fn ada() -> User {
    let mut user = make_user("u-1", "ada");
    user.bio = "hello".to_owned();
    user.picture = Some("https://cdn.test/ada.png".to_owned());
    user
}

#[test]
fn draft_starts_from_session_user() {
    let state = SettingsState::from_user(&ada());
    assert_eq!(state.username, "ada");
    assert_eq!(state.bio, "hello");
    assert_eq!(state.theme_color, "#00ff88");
    assert_eq!(state.preview_url.as_deref(), Some("https://cdn.test/ada.png"));
    assert!(state.borrow().picture.is_none());
    assert!(!state.borrow().saving);
}

#[test]
fn bio_is_capped_in_characters() {
    let mut state = SettingsState::default();
    state.set_bio(&"é".repeat(250));
    assert_eq!(state.bio.chars().count(), BIO_MAX_CHARS);
    assert_eq!(state.bio_counter(), "200/200");
    state.set_bio("hi");
    assert_eq!(state.bio_counter(), "2/200");
}

#[test]
fn palette_has_six_swatches_and_selection_ignores_case() {
    assert_eq!(THEME_COLORS.len(), 6);
    assert_eq!(THEME_COLORS[0].value, "#00ff88");
    let mut state = SettingsState::default();
    state.select_theme("#A855F7");
    assert!(state.is_selected(&THEME_COLORS[3]));
    assert!(!state.is_selected(&THEME_COLORS[0]));
}

#[test]
fn save_sends_draft_refreshes_session_and_opens_profile() {
    let mut updated = ada();
    updated.theme_color = "#ef4444".to_owned();
    let api = FakeApi {
        updated_user: Ok(updated.clone()),
        current_user: Ok(updated),
        ..FakeApi::default()
    };
    let session = RefCell::new(SessionState { user: Some(ada()), loading: false });
    let mut draft = SettingsState::from_user(&ada());
    draft.select_theme("#ef4444");
    let avatar = Upload { file_name: "a.png".to_owned(), content_type: "image/png".to_owned(), bytes: vec![9] };
    draft.pick_picture(avatar.clone(), "blob:a".to_owned());
    let state = RefCell::new(draft);

    let fx = block_on(save(&api, &state, &session));

    assert_eq!(
        api.calls(),
        vec![
            Call::UpdateProfile(ProfileForm {
                bio: "hello".to_owned(),
                theme_color: "#ef4444".to_owned(),
                profile_picture: Some(avatar),
            }),
            Call::CurrentUser,
        ]
    );
    assert_eq!(session.borrow().user().map(|u| u.theme_color.clone()), Some("#ef4444".to_owned()));
    assert_eq!(fx.navigate, Some(AppRoute::Profile("ada".to_owned())));
    assert_eq!(fx.notice.unwrap().message, "Profile updated successfully");
    assert!(state.borrow().picture.is_none());
    assert!(!state.borrow().saving);
}

#[test]
fn failed_save_does_not_touch_session() {
    let api = FakeApi::default();
    let session = RefCell::new(SessionState { user: Some(ada()), loading: false });
    let mut draft = SettingsState::from_user(&ada());
    draft.set_bio("changed");
    let state = RefCell::new(draft);

    let fx = block_on(save(&api, &state, &session));

    assert_eq!(api.count(|c| matches!(c, Call::CurrentUser)), 0);
    assert_eq!(session.borrow().user().map(|u| u.bio.clone()), Some("hello".to_owned()));
    let notice = fx.notice.unwrap();
    assert_eq!(notice.kind, ToastKind::Error);
    assert_eq!(notice.message, "Failed to update profile");
    assert!(fx.navigate.is_none());
    assert_eq!(state.borrow().bio, "changed");
}

#[test]
fn overlapping_save_is_rejected() {
    let mut state = SettingsState::from_user(&ada());
    assert!(state.begin_save().is_ok());
    assert_eq!(state.begin_save(), Err(ActionError::Busy));
}

#[test]
fn save_while_saving_sends_nothing() {
    let api = FakeApi::default();
    let session = RefCell::new(SessionState { user: Some(ada()), loading: false });
    let mut draft = SettingsState::from_user(&ada());
    draft.saving = true;
    let state = RefCell::new(draft);

    let fx = block_on(save(&api, &state, &session));

    assert!(fx.is_empty());
    assert!(api.calls().is_empty());
}
