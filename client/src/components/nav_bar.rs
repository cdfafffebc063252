//! Top navigation bar with the avatar menu.
//!
//! Signed in: write button plus a menu with profile, settings and logout.
//! Signed out: a single sign-in button that leaves for the identity provider.

use leptos::prelude::*;

use crate::components::avatar::Avatar;
use crate::config::ClientConfig;
use crate::net::api::HttpApi;
use crate::routes::AppRoute;
use crate::state::session::SessionStore;
use crate::util::auth::start_sign_in;
use crate::util::effects::{EffectSink, spawn};

#[component]
pub fn NavBar() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let sink = expect_context::<EffectSink>();
    let api = expect_context::<HttpApi>();
    let config = expect_context::<ClientConfig>();
    let menu_open = RwSignal::new(false);

    let on_sign_in = move |_| start_sign_in(&config);

    let api = StoredValue::new(api);
    let on_logout = move |_| {
        menu_open.set(false);
        let api = api.get_value();
        spawn(async move {
            let effects = session.sign_out(&api).await;
            sink.apply(effects);
        });
    };

    let profile_href = move || session.get().map(|u| AppRoute::Profile(u.username).path()).unwrap_or_default();

    view! {
        <nav class="nav-bar">
            <a href=AppRoute::Feed.path() class="nav-bar__brand">"NightBlog"</a>
            <span class="nav-bar__spacer"></span>
            <Show
                when=move || session.get().is_some()
                fallback=move || view! {
                    <button class="btn btn--primary" on:click=on_sign_in.clone()>"Sign In"</button>
                }
            >
                <a href=AppRoute::NewPost.path() class="btn btn--primary nav-bar__write">"Write"</a>
                <div class="nav-bar__menu">
                    <button
                        class="nav-bar__avatar-btn"
                        aria-label="Account menu"
                        on:click=move |_| menu_open.update(|open| *open = !*open)
                    >
                        {move || {
                            let user = session.get();
                            view! {
                                <Avatar
                                    picture=user.as_ref().and_then(|u| u.picture.clone())
                                    name=user.map(|u| u.name).unwrap_or_default()
                                    class="avatar avatar--sm"
                                />
                            }
                        }}
                    </button>
                    <Show when=move || menu_open.get()>
                        <div class="nav-bar__dropdown" on:click=move |_| menu_open.set(false)>
                            <a href=profile_href class="nav-bar__item">"My Profile"</a>
                            <a href=AppRoute::Settings.path() class="nav-bar__item">"Settings"</a>
                            <button class="nav-bar__item nav-bar__item--danger" on:click=on_logout.clone()>
                                "Logout"
                            </button>
                        </div>
                    </Show>
                </div>
            </Show>
        </nav>
    }
}
