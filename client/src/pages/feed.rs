//! Feed page: searchable list of published posts.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::loading_screen::LoadingScreen;
use crate::components::post_card::PostCard;
use crate::net::api::HttpApi;
use crate::routes::AppRoute;
use crate::state::feed::{self, FeedState};
use crate::state::session::SessionStore;
use crate::state::view::Phase;
use crate::util::auth::install_route_guard;
use crate::util::effects::{EffectSink, spawn};
use crate::util::text::FEED_EXCERPT_CHARS;

#[component]
pub fn FeedPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    install_route_guard(session, AppRoute::Feed, use_navigate());

    view! {
        <Show when=move || session.get().is_some() fallback=LoadingScreen>
            <FeedBody/>
        </Show>
    }
}

#[component]
fn FeedBody() -> impl IntoView {
    let sink = expect_context::<EffectSink>();
    let api = expect_context::<HttpApi>();
    let state = RwSignal::new(FeedState::default());

    let run_search = move || {
        let api = api.clone();
        spawn(async move { sink.apply(feed::search(&api, &state).await) });
    };

    let initial = run_search.clone();
    Effect::new(move || initial());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        run_search();
    };

    view! {
        <div class="feed">
            <header class="feed__header">
                <h1>"Latest Posts"</h1>
                <form class="feed__search" on:submit=on_submit>
                    <input
                        class="feed__search-input"
                        type="search"
                        placeholder="Search posts..."
                        prop:value=move || state.with(|s| s.query.clone())
                        on:input=move |ev| state.update(|s| s.query = event_target_value(&ev))
                    />
                    <button class="btn" type="submit" disabled=move || state.with(|s| s.searching)>
                        "Search"
                    </button>
                </form>
            </header>
            <Show when=move || state.with(|s| s.phase != Phase::Loading) fallback=LoadingScreen>
                <Show
                    when=move || !state.with(FeedState::is_empty)
                    fallback=|| view! {
                        <div class="feed__empty">
                            <p>"No posts found. Be the first to write!"</p>
                            <a href=AppRoute::NewPost.path() class="btn btn--primary">"Create First Post"</a>
                        </div>
                    }
                >
                    <div class="feed__grid">
                        <For
                            each=move || state.with(|s| s.posts.clone())
                            key=|post| post.id.clone()
                            children=|post| view! { <PostCard post=post excerpt_chars=FEED_EXCERPT_CHARS show_author=true/> }
                        />
                    </div>
                </Show>
            </Show>
        </div>
    }
}
