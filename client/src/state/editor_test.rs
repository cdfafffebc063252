use std::cell::RefCell;

use futures::executor::block_on;

use super::*;
use crate::state::toast::ToastKind;
use crate::test_support::{Call, FakeApi, make_post};

fn upload() -> Upload {
    Upload { file_name: "cover.png".to_owned(), content_type: "image/png".to_owned(), bytes: vec![1, 2, 3] }
}

fn filled(mode: EditorMode) -> EditorState {
    let mut state = EditorState::new(mode);
    state.phase = Phase::Ready;
    state.title = "Hello".to_owned();
    state.content = "World".to_owned();
    state
}

// =============================================================
// Mode and load
// =============================================================

#[test]
fn mode_follows_route_id() {
    assert_eq!(EditorMode::from_route_id(None), EditorMode::Create);
    assert_eq!(EditorMode::from_route_id(Some(String::new())), EditorMode::Create);
    assert_eq!(EditorMode::from_route_id(Some("p-1".to_owned())), EditorMode::Edit("p-1".to_owned()));
}

#[test]
fn create_mode_loads_nothing() {
    let api = FakeApi::default();
    let state = RefCell::new(EditorState::new(EditorMode::Create));
    let fx = block_on(load(&api, &state));
    assert!(fx.is_empty());
    assert!(api.calls().is_empty());
    assert_eq!(state.borrow().phase, Phase::Ready);
}

#[test]
fn edit_mode_fills_form_from_post() {
    let mut post = make_post("p-1", "u-1");
    post.cover_image = Some("https://cdn.test/c.png".to_owned());
    let api = FakeApi { post: Ok(post), ..FakeApi::default() };
    let state = RefCell::new(EditorState::new(EditorMode::Edit("p-1".to_owned())));
    assert_eq!(state.borrow().phase, Phase::Loading);

    block_on(load(&api, &state));

    let state = state.into_inner();
    assert_eq!(api.calls(), vec![Call::GetPost("p-1".to_owned())]);
    assert_eq!(state.title, "Night notes");
    assert!(state.is_published);
    assert_eq!(state.cover.preview_src(), Some("https://cdn.test/c.png"));
    assert_eq!(state.phase, Phase::Ready);
}

#[test]
fn failed_load_redirects_to_feed() {
    let api = FakeApi::default();
    let state = RefCell::new(EditorState::new(EditorMode::Edit("gone".to_owned())));
    let fx = block_on(load(&api, &state));
    assert_eq!(state.borrow().phase, Phase::Redirected);
    assert_eq!(fx.navigate, Some(AppRoute::Feed));
    assert_eq!(fx.notice.unwrap().message, "Failed to load post");
}

#[test]
fn load_for_previous_post_is_dropped() {
    let mut state = EditorState::new(EditorMode::Edit("p-2".to_owned()));
    let fx = state.finish_load("p-1", Ok(make_post("p-1", "u-1")));
    assert!(fx.is_empty());
    assert!(state.title.is_empty());
    assert_eq!(state.phase, Phase::Loading);

    let mut state = EditorState::new(EditorMode::Create);
    let fx = state.finish_load("p-1", Err(ApiError::NotFound));
    assert!(fx.is_empty());
    assert_eq!(state.phase, Phase::Ready);
}

// =============================================================
// Preview and cover
// =============================================================

#[test]
fn preview_uses_placeholders_for_empty_fields() {
    let mut state = EditorState::new(EditorMode::Create);
    state.toggle_preview();
    assert!(state.preview);
    assert_eq!(state.preview_title(), "Untitled");
    assert_eq!(state.preview_content(), "No content yet...");
    state.title = "T".to_owned();
    assert_eq!(state.preview_title(), "T");
    state.toggle_preview();
    assert!(!state.preview);
}

#[test]
fn only_picked_cover_is_uploaded() {
    let mut state = filled(EditorMode::Create);
    state.cover = CoverImage::Existing("https://cdn.test/old.png".to_owned());
    assert!(state.form().cover_image.is_none());
    state.pick_cover(upload(), "blob:preview".to_owned());
    assert_eq!(state.cover.preview_src(), Some("blob:preview"));
    assert_eq!(state.form().cover_image, Some(upload()));
    state.remove_cover();
    assert_eq!(state.cover, CoverImage::None);
}

// =============================================================
// Save
// =============================================================

#[test]
fn blank_title_or_body_never_calls_api() {
    for (title, content) in [("", "body"), ("title", ""), ("  ", "body"), ("title", "\n\t"), ("", "")] {
        let api = FakeApi::default();
        let mut start = EditorState::new(EditorMode::Create);
        start.title = title.to_owned();
        start.content = content.to_owned();
        let state = RefCell::new(start);

        let fx = block_on(save(&api, &state));

        assert!(api.calls().is_empty());
        let notice = fx.notice.unwrap();
        assert_eq!(notice.kind, ToastKind::Error);
        assert_eq!(notice.message, "Title and content are required");
        assert!(!state.borrow().saving);
    }
}

#[test]
fn create_posts_form_and_opens_new_post() {
    let api = FakeApi { saved_post: Ok(make_post("p-9", "u-1")), ..FakeApi::default() };
    let mut start = filled(EditorMode::Create);
    start.is_published = true;
    let state = RefCell::new(start);

    let fx = block_on(save(&api, &state));

    assert_eq!(
        api.calls(),
        vec![Call::CreatePost(PostForm {
            title: "Hello".to_owned(),
            content: "World".to_owned(),
            is_published: true,
            cover_image: None,
        })]
    );
    assert_eq!(fx.navigate, Some(AppRoute::Post("p-9".to_owned())));
    assert_eq!(fx.notice.unwrap().message, "Post created successfully");
}

#[test]
fn update_reports_success_and_stays() {
    let api = FakeApi { saved_post: Ok(make_post("p-1", "u-1")), ..FakeApi::default() };
    let mut start = filled(EditorMode::Edit("p-1".to_owned()));
    start.pick_cover(upload(), "blob:x".to_owned());
    let state = RefCell::new(start);

    let fx = block_on(save(&api, &state));

    assert_eq!(api.count(|c| matches!(c, Call::UpdatePost(id, _) if id == "p-1")), 1);
    assert!(fx.navigate.is_none());
    assert_eq!(fx.notice.unwrap().message, "Post updated successfully");
    assert_eq!(state.borrow().cover, CoverImage::None);
    assert!(!state.borrow().saving);
}

#[test]
fn forbidden_save_keeps_draft_untouched() {
    let api = FakeApi { saved_post: Err(ApiError::Forbidden), ..FakeApi::default() };
    let before = filled(EditorMode::Edit("theirs".to_owned()));
    let state = RefCell::new(before.clone());

    let fx = block_on(save(&api, &state));

    let notice = fx.notice.unwrap();
    assert_eq!(notice.kind, ToastKind::Error);
    assert_eq!(notice.message, "You can only edit your own posts");
    assert!(fx.navigate.is_none());
    assert_eq!(state.into_inner(), before);
}

#[test]
fn other_save_failures_are_generic() {
    let mut state = filled(EditorMode::Create);
    state.begin_save().unwrap();
    let fx = state.finish_save(&EditorMode::Create, Err(ApiError::Transport("offline".to_owned())));
    assert_eq!(fx.notice.unwrap().message, "Failed to save post");
    assert!(!state.saving);
}

#[test]
fn save_in_flight_rejects_second_submit() {
    let mut state = filled(EditorMode::Create);
    assert!(state.begin_save().is_ok());
    assert_eq!(state.begin_save(), Err(ActionError::Busy));
}

#[test]
fn save_answer_after_route_change_is_dropped() {
    let mut state = filled(EditorMode::Edit("p-2".to_owned()));
    state.saving = true;
    let fx = state.finish_save(&EditorMode::Create, Ok(make_post("p-9", "u-1")));
    assert!(fx.is_empty());
    assert!(state.saving);
}

// =============================================================
// Delete
// =============================================================

#[test]
fn declined_delete_makes_zero_calls() {
    let api = FakeApi::default();
    let state = RefCell::new(filled(EditorMode::Edit("p-1".to_owned())));
    let fx = block_on(delete(&api, &state, || false));
    assert!(fx.is_empty());
    assert!(api.calls().is_empty());
    assert!(!state.borrow().deleting);
}

#[test]
fn confirmed_delete_calls_once_and_returns_to_feed() {
    let api = FakeApi::default();
    let state = RefCell::new(filled(EditorMode::Edit("p-1".to_owned())));
    let fx = block_on(delete(&api, &state, || true));
    assert_eq!(api.calls(), vec![Call::DeletePost("p-1".to_owned())]);
    assert_eq!(fx.navigate, Some(AppRoute::Feed));
    assert_eq!(fx.notice.unwrap().message, "Post deleted successfully");
}

#[test]
fn delete_is_never_offered_in_create_mode() {
    let api = FakeApi::default();
    let state = RefCell::new(filled(EditorMode::Create));
    let mut asked = false;
    block_on(delete(&api, &state, || {
        asked = true;
        true
    }));
    assert!(!asked);
    assert!(api.calls().is_empty());
}

#[test]
fn failed_delete_stays_on_page() {
    let api = FakeApi { delete: Err(ApiError::Status(500)), ..FakeApi::default() };
    let state = RefCell::new(filled(EditorMode::Edit("p-1".to_owned())));
    let fx = block_on(delete(&api, &state, || true));
    assert!(fx.navigate.is_none());
    assert_eq!(fx.notice.unwrap().message, "Failed to delete post");
    assert!(!state.borrow().deleting);
}

#[test]
fn delete_result_for_previous_post_is_dropped() {
    let mut state = filled(EditorMode::Edit("p-2".to_owned()));
    let fx = state.finish_delete("p-1", Ok(()));
    assert!(fx.is_empty());
}

#[test]
fn delete_already_running_does_not_ask_again() {
    let api = FakeApi::default();
    let mut start = filled(EditorMode::Edit("p-1".to_owned()));
    start.deleting = true;
    let state = RefCell::new(start);
    let mut asked = false;
    let fx = block_on(delete(&api, &state, || {
        asked = true;
        true
    }));
    assert!(!asked);
    assert!(fx.is_empty());
    assert!(api.calls().is_empty());
}
