//! Comment list plus the add-comment form (or a login prompt).

use leptos::prelude::*;

use crate::components::avatar::Avatar;
use crate::config::ClientConfig;
use crate::net::api::HttpApi;
use crate::routes::AppRoute;
use crate::state::post_view::{self, CommentGate, PostViewState};
use crate::state::session::SessionStore;
use crate::util::auth::start_sign_in;
use crate::util::date::short_date;
use crate::util::effects::{EffectSink, spawn};

#[component]
pub fn CommentThread(state: RwSignal<PostViewState>) -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let sink = expect_context::<EffectSink>();
    let api = expect_context::<HttpApi>();
    let config = expect_context::<ClientConfig>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let signed_in = session.get_untracked().is_some();
        let api = api.clone();
        spawn(async move { sink.apply(post_view::comment(&api, &state, signed_in).await) });
    };

    let gate = move || PostViewState::comment_gate(session.get().is_some());
    let count = move || state.with(|s| s.comments.len());

    view! {
        <section class="comments">
            <h3 class="comments__title">{move || format!("Comments ({})", count())}</h3>
            <Show
                when=move || gate() == CommentGate::Form
                fallback=move || {
                    let config = config.clone();
                    view! {
                        <div class="comments__login">
                            <p>"Login to join the conversation"</p>
                            <button class="btn btn--primary" on:click=move |_| start_sign_in(&config)>
                                "Sign In"
                            </button>
                        </div>
                    }
                }
            >
                <form class="comments__form" on:submit=on_submit.clone()>
                    <textarea
                        class="comments__input"
                        placeholder="Share your thoughts..."
                        prop:value=move || state.with(|s| s.draft.clone())
                        on:input=move |ev| state.update(|s| s.draft = event_target_value(&ev))
                    ></textarea>
                    <button
                        class="btn btn--primary"
                        type="submit"
                        disabled=move || state.with(|s| s.commenting)
                    >
                        {move || if state.with(|s| s.commenting) { "Posting..." } else { "Post Comment" }}
                    </button>
                </form>
            </Show>
            <Show
                when=move || { count() > 0 }
                fallback=|| view! { <p class="comments__empty">"No comments yet. Be the first!"</p> }
            >
                <ul class="comments__list">
                    <For
                        each=move || state.with(|s| s.comments.clone())
                        key=|comment| comment.id.clone()
                        children=move |comment| {
                            let profile = AppRoute::Profile(comment.username.clone()).path();
                            view! {
                                <li class="comment">
                                    <a href=profile.clone() class="comment__avatar">
                                        <Avatar
                                            picture=comment.user_picture.clone()
                                            name=comment.username.clone()
                                            class="avatar avatar--sm"
                                        />
                                    </a>
                                    <div class="comment__body">
                                        <div class="comment__meta">
                                            <a href=profile class="comment__author">
                                                {format!("@{}", comment.username)}
                                            </a>
                                            <span class="comment__date">{short_date(&comment.created_at)}</span>
                                        </div>
                                        <p class="comment__text">{comment.text}</p>
                                    </div>
                                </li>
                            }
                        }
                    />
                </ul>
            </Show>
        </section>
    }
}
