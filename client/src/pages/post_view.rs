//! Post viewer page for `/blog/{id}`. Readable without a session.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::avatar::Avatar;
use crate::components::comment_thread::CommentThread;
use crate::components::loading_screen::LoadingScreen;
use crate::components::markdown_view::MarkdownView;
use crate::components::share_menu::ShareMenu;
use crate::net::api::HttpApi;
use crate::routes::AppRoute;
use crate::state::post_view::{self, PostViewState};
use crate::state::session::{AuthStatus, SessionStore};
use crate::state::view::Phase;
use crate::util::date::long_date;
use crate::util::effects::{EffectSink, spawn};

#[component]
pub fn PostViewPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let sink = expect_context::<EffectSink>();
    let api = expect_context::<HttpApi>();
    let params = use_params_map();
    let state = RwSignal::new(PostViewState::default());

    // Reload when the id changes or the sign-in status settles.
    let status = Memo::new(move |_| session.status());
    let load_api = api.clone();
    Effect::new(move || {
        let id = params.with(|p| p.get("id")).unwrap_or_default();
        let signed_in = match status.get() {
            AuthStatus::Loading => return,
            AuthStatus::SignedIn => true,
            AuthStatus::SignedOut => false,
        };
        state.set(PostViewState::new(id));
        let api = load_api.clone();
        spawn(async move { sink.apply(post_view::load(&api, &state, signed_in).await) });
    });

    let on_like = move |_| {
        let signed_in = session.get_untracked().is_some();
        let api = api.clone();
        spawn(async move { sink.apply(post_view::like(&api, &state, signed_in).await) });
    };

    let post = move || state.with(|s| s.post.clone());
    let is_owner = move || state.with(|s| s.is_owner(session.get().as_ref()));
    let content = Signal::derive(move || state.with(|s| s.post.as_ref().map(|p| p.content.clone()).unwrap_or_default()));

    view! {
        <Show when=move || state.with(|s| s.phase == Phase::Ready) fallback=LoadingScreen>
            <article class="post">
                <header class="post__toolbar">
                    <a href=AppRoute::Feed.path() class="btn btn--ghost">"← Back"</a>
                    <span class="post__spacer"></span>
                    <Show when=is_owner>
                        <a
                            href=move || AppRoute::EditPost(state.with(|s| s.post_id.clone())).path()
                            class="btn"
                        >
                            "Edit"
                        </a>
                    </Show>
                </header>
                {move || post().map(|post| {
                    let author_href = AppRoute::Profile(post.username.clone()).path();
                    view! {
                        {post.cover_image.clone().map(|src| view! { <img class="post__cover" src=src alt=post.title.clone()/> })}
                        <h1 class="post__title">{post.title.clone()}</h1>
                        <div class="post__meta">
                            <a href=author_href class="post__author">
                                <Avatar picture=None name=post.username.clone() class="avatar avatar--sm"/>
                                {format!("@{}", post.username)}
                            </a>
                            <span class="post__date">{long_date(&post.created_at)}</span>
                            <span class="post__views">{format!("{} views", post.views.max(0))}</span>
                        </div>
                    }
                })}
                <div class="post__actions">
                    <button
                        class=move || if state.with(|s| s.liked) { "btn post__like post__like--on" } else { "btn post__like" }
                        disabled=move || state.with(|s| s.liking)
                        on:click=on_like.clone()
                    >
                        {move || format!("♥ {}", state.with(PostViewState::like_count))}
                    </button>
                    <ShareMenu state=state/>
                </div>
                <MarkdownView content=content/>
                <CommentThread state=state/>
            </article>
        </Show>
    }
}
