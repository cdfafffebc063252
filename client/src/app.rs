//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` provides the session store, the effect sink, the API client and the
//! client config, then decides once how the session is established: a
//! `#session_id=` fragment on entry runs the auth exchange, anything else
//! refreshes from the cookie.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::NavigateOptions;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::hooks::use_navigate;
use leptos_router::{ParamSegment, StaticSegment};

use crate::components::nav_bar::NavBar;
use crate::components::toaster::Toaster;
use crate::config::{API_BASE_META, AUTH_URL_META, ClientConfig};
use crate::net::api::HttpApi;
use crate::pages::{
    editor::EditorPage, feed::FeedPage, landing::LandingPage, post_view::PostViewPage, profile::ProfilePage,
    settings::SettingsPage,
};
use crate::state::auth_exchange;
use crate::state::session::{SessionState, SessionStore};
use crate::util::browser;
use crate::util::effects::{EffectSink, spawn};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    let config = ClientConfig::load();
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=API_BASE_META content=config.api_base/>
                <meta name=AUTH_URL_META content=config.auth_url/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::load();
    let api = HttpApi::new(&config.api_base);
    let session = SessionStore::new(SessionState::pending());
    let sink = EffectSink::new();

    provide_context(config);
    provide_context(api.clone());
    provide_context(session);
    provide_context(sink);

    // Runs once on the client after mount.
    Effect::new(move || {
        let api = api.clone();
        spawn(async move {
            let (fragment, href) = (browser::current_hash(), browser::current_href());
            let effects = auth_exchange::bootstrap(&api, &fragment, &href, &session, browser::replace_url).await;
            sink.apply(effects);
        });
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/nightblog.css"/>
        <Title text="NightBlog"/>
        <Meta name="description" content="NightBlog: write in the dark."/>

        <Router>
            <NavBar/>
            <main class="app-main">
                <Routes fallback=|| view! { <p class="not-found">"Page not found."</p> }>
                    <Route path=StaticSegment("") view=LandingPage/>
                    <Route path=StaticSegment("feed") view=FeedPage/>
                    <Route path=StaticSegment("editor") view=EditorPage/>
                    <Route path=(StaticSegment("editor"), ParamSegment("id")) view=EditorPage/>
                    <Route path=(StaticSegment("blog"), ParamSegment("id")) view=PostViewPage/>
                    <Route path=(StaticSegment("profile"), ParamSegment("username")) view=ProfilePage/>
                    <Route path=StaticSegment("settings") view=SettingsPage/>
                </Routes>
            </main>
            <NavigationRelay/>
        </Router>
        <Toaster/>
    }
}

/// Turns navigation requests written to the [`EffectSink`] into router
/// navigation.
#[component]
fn NavigationRelay() -> impl IntoView {
    let sink = expect_context::<EffectSink>();
    let navigate = use_navigate();
    Effect::new(move || {
        if let Some(route) = sink.navigation.get() {
            sink.navigation.set(None);
            navigate(&route.path(), NavigateOptions::default());
        }
    });
}
