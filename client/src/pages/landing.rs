//! Public landing page.
//!
//! Every call to action leaves for the identity provider. A visitor who is
//! already signed in is forwarded to the feed by the route guard.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::config::ClientConfig;
use crate::routes::AppRoute;
use crate::state::session::SessionStore;
use crate::util::auth::{install_route_guard, start_sign_in};

const FEATURES: [(&str, &str); 3] = [
    ("Write in Markdown", "Draft with a live preview and publish when you are ready."),
    ("Build a Following", "Likes, comments and share links for every post."),
    ("Make It Yours", "Pick an accent color and tell readers who you are."),
];

#[component]
pub fn LandingPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let config = expect_context::<ClientConfig>();
    install_route_guard(session, AppRoute::Landing, use_navigate());

    let sign_in = move |_| start_sign_in(&config);

    view! {
        <div class="landing">
            <section class="landing__hero">
                <h1 class="landing__title">"Write in the dark."</h1>
                <p class="landing__subtitle">
                    "NightBlog is a home for late-night thoughts, long reads and short notes."
                </p>
                <button class="btn btn--primary btn--lg" on:click=sign_in.clone()>"Get Started"</button>
            </section>
            <section class="landing__features">
                {FEATURES
                    .into_iter()
                    .map(|(title, body)| view! {
                        <div class="feature-card">
                            <h3>{title}</h3>
                            <p>{body}</p>
                        </div>
                    })
                    .collect_view()}
            </section>
            <section class="landing__cta">
                <h2>"Ready to start writing?"</h2>
                <button class="btn btn--primary" on:click=sign_in>"Sign In to NightBlog"</button>
            </section>
        </div>
    }
}
