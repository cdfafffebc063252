//! Public profile page for `/profile/{username}`.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::avatar::Avatar;
use crate::components::loading_screen::LoadingScreen;
use crate::components::post_card::PostCard;
use crate::net::api::HttpApi;
use crate::routes::AppRoute;
use crate::state::profile::{self, ProfileState};
use crate::state::session::SessionStore;
use crate::state::view::Phase;
use crate::util::color::{theme_color, tint};
use crate::util::effects::{EffectSink, spawn};
use crate::util::text::PROFILE_EXCERPT_CHARS;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let sink = expect_context::<EffectSink>();
    let api = expect_context::<HttpApi>();
    let params = use_params_map();
    let state = RwSignal::new(ProfileState::default());

    Effect::new(move || {
        let username = params.with(|p| p.get("username")).unwrap_or_default();
        state.set(ProfileState::new(username));
        let api = api.clone();
        spawn(async move { sink.apply(profile::load(&api, &state).await) });
    });

    let accent = move || state.with(|s| theme_color(s.theme_color()));
    let is_own = move || state.with(|s| s.is_own(session.get().as_ref()));
    let invites_first_post = move || state.with(|s| s.invites_first_post(session.get().as_ref()));

    view! {
        <Show when=move || state.with(|s| s.phase == Phase::Ready) fallback=LoadingScreen>
            <div class="profile">
                <header class="profile__toolbar">
                    <a href=AppRoute::Feed.path() class="btn btn--ghost">"← Back"</a>
                    <span class="profile__spacer"></span>
                    <Show when=is_own>
                        <a href=AppRoute::Settings.path() class="btn">"Edit Profile"</a>
                    </Show>
                </header>
                <section
                    class="profile__card"
                    style:border-top=move || format!("4px solid {}", accent())
                    style:box-shadow=move || format!("0 0 40px {}", tint(&accent(), 0.125))
                >
                    {move || state.with(|s| s.profile.as_ref().map(|p| p.user.clone())).map(|user| view! {
                        <Avatar picture=user.picture.clone() name=user.name.clone() class="avatar avatar--xl"/>
                        <div class="profile__identity">
                            <h1 class="profile__name">{user.name.clone()}</h1>
                            <span
                                class="profile__handle"
                                style:background-color=tint(&user.theme_color, 0.19)
                                style:color=theme_color(&user.theme_color)
                            >
                                {format!("@{}", user.username)}
                            </span>
                            <p class="profile__bio">{if user.bio.is_empty() { "No bio yet.".to_owned() } else { user.bio.clone() }}</p>
                        </div>
                    })}
                    <div class="profile__stats">
                        <span class="profile__count" style:color=accent>{move || state.with(ProfileState::post_count)}</span>
                        <span class="profile__count-label">"Posts"</span>
                    </div>
                </section>
                <h2 class="profile__section-title" style:border-bottom=move || format!("3px solid {}", accent())>
                    "Posts"
                </h2>
                <Show
                    when=move || state.with(|s| s.post_count() > 0)
                    fallback=move || view! {
                        <div class="profile__empty">
                            <p>"No posts yet"</p>
                            <Show when=invites_first_post>
                                <a href=AppRoute::NewPost.path() class="btn btn--primary">"Write Your First Post"</a>
                            </Show>
                        </div>
                    }
                >
                    <div class="profile__grid">
                        <For
                            each=move || state.with(|s| s.posts().to_vec())
                            key=|post| post.id.clone()
                            children=|post| view! { <PostCard post=post excerpt_chars=PROFILE_EXCERPT_CHARS/> }
                        />
                    </div>
                </Show>
            </div>
        </Show>
    }
}
