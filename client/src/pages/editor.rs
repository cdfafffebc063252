//! Editor page for `/editor` (create) and `/editor/{id}` (edit).

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::loading_screen::LoadingScreen;
use crate::components::markdown_view::MarkdownView;
use crate::net::api::HttpApi;
use crate::routes::AppRoute;
use crate::state::editor::{self, EditorMode, EditorState};
use crate::state::session::SessionStore;
use crate::state::view::{Effects, Phase};
use crate::util::auth::install_route_guard;
use crate::util::browser;
use crate::util::effects::{EffectSink, spawn};

#[component]
pub fn EditorPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let params = use_params_map();
    let route = match params.with_untracked(|p| p.get("id")) {
        Some(id) => AppRoute::EditPost(id),
        None => AppRoute::NewPost,
    };
    install_route_guard(session, route, use_navigate());

    view! {
        <Show when=move || session.get().is_some() fallback=LoadingScreen>
            <EditorBody/>
        </Show>
    }
}

#[component]
fn EditorBody() -> impl IntoView {
    let sink = expect_context::<EffectSink>();
    let api = expect_context::<HttpApi>();
    let params = use_params_map();
    let state = RwSignal::new(EditorState::new(EditorMode::from_route_id(params.with_untracked(|p| p.get("id")))));

    let load_api = api.clone();
    Effect::new(move || {
        let mode = EditorMode::from_route_id(params.with(|p| p.get("id")));
        state.set(EditorState::new(mode));
        let api = load_api.clone();
        spawn(async move { sink.apply(editor::load(&api, &state).await) });
    });

    let save_api = api.clone();
    let on_save = move |_| {
        let api = save_api.clone();
        spawn(async move { sink.apply(editor::save(&api, &state).await) });
    };

    let api = StoredValue::new(api);
    let on_delete = move |_| {
        let api = api.get_value();
        spawn(async move {
            let confirm = || browser::confirm("Are you sure you want to delete this post?");
            sink.apply(editor::delete(&api, &state, confirm).await);
        });
    };

    let on_cover = move |ev: leptos::ev::Event| {
        spawn(async move {
            if let Some(upload) = browser::read_picked_file(ev).await {
                let preview = browser::object_url(&upload).unwrap_or_default();
                state.update(|s| s.pick_cover(upload, preview));
            }
        });
    };

    let cover_src = move || state.with(|s| s.cover.preview_src().map(str::to_owned));
    let preview_content = Signal::derive(move || state.with(|s| s.preview_content().to_owned()));

    view! {
        <Show when=move || state.with(|s| s.phase == Phase::Ready) fallback=LoadingScreen>
            <div class="editor">
                <header class="editor__toolbar">
                    <button class="btn btn--ghost" on:click=move |_| sink.apply(Effects::navigate(AppRoute::Feed))>
                        "← Back"
                    </button>
                    <span class="editor__spacer"></span>
                    <button class="btn" on:click=move |_| state.update(EditorState::toggle_preview)>
                        {move || if state.with(|s| s.preview) { "Edit" } else { "Preview" }}
                    </button>
                    <Show when=move || state.with(EditorState::is_edit)>
                        <button
                            class="btn btn--danger"
                            disabled=move || state.with(|s| s.deleting)
                            on:click=on_delete.clone()
                        >
                            "Delete"
                        </button>
                    </Show>
                    <button
                        class="btn btn--primary"
                        disabled=move || state.with(|s| s.saving)
                        on:click=on_save.clone()
                    >
                        {move || if state.with(|s| s.saving) { "Saving..." } else { "Save" }}
                    </button>
                </header>

                <Show
                    when=move || state.with(|s| s.preview)
                    fallback=move || view! {
                        <div class="editor__form">
                            <div class="editor__cover">
                                {move || match cover_src() {
                                    Some(src) => view! {
                                        <div class="editor__cover-preview">
                                            <img src=src alt="Cover"/>
                                            <button
                                                class="btn btn--ghost editor__cover-remove"
                                                on:click=move |_| state.update(EditorState::remove_cover)
                                            >
                                                "✕"
                                            </button>
                                        </div>
                                    }.into_any(),
                                    None => view! {
                                        <label class="editor__cover-pick">
                                            "Upload Cover Image"
                                            <input type="file" accept="image/*" on:change=on_cover/>
                                        </label>
                                    }.into_any(),
                                }}
                            </div>
                            <input
                                class="editor__title"
                                type="text"
                                placeholder="Post title..."
                                prop:value=move || state.with(|s| s.title.clone())
                                on:input=move |ev| state.update(|s| s.title = event_target_value(&ev))
                            />
                            <label class="editor__publish">
                                <input
                                    type="checkbox"
                                    prop:checked=move || state.with(|s| s.is_published)
                                    on:change=move |ev| state.update(|s| s.is_published = event_target_checked(&ev))
                                />
                                {move || if state.with(|s| s.is_published) { "Published" } else { "Draft" }}
                            </label>
                            <textarea
                                class="editor__content"
                                placeholder="Write your story in markdown..."
                                prop:value=move || state.with(|s| s.content.clone())
                                on:input=move |ev| state.update(|s| s.content = event_target_value(&ev))
                            ></textarea>
                        </div>
                    }
                >
                    <article class="editor__preview">
                        {move || cover_src().map(|src| view! { <img class="editor__preview-cover" src=src alt="Cover"/> })}
                        <h1>{move || state.with(|s| s.preview_title().to_owned())}</h1>
                        <MarkdownView content=preview_content/>
                    </article>
                </Show>
            </div>
        </Show>
    }
}
