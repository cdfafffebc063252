//! Settings page: edit bio, accent color and avatar with a live preview.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::avatar::Avatar;
use crate::components::loading_screen::LoadingScreen;
use crate::net::api::HttpApi;
use crate::routes::AppRoute;
use crate::state::session::SessionStore;
use crate::state::settings::{self, BIO_MAX_CHARS, SettingsState, THEME_COLORS};
use crate::state::view::Effects;
use crate::util::auth::install_route_guard;
use crate::util::browser;
use crate::util::color::{theme_color, tint};
use crate::util::effects::{EffectSink, spawn};

#[component]
pub fn SettingsPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    install_route_guard(session, AppRoute::Settings, use_navigate());

    view! {
        <Show when=move || session.get().is_some() fallback=LoadingScreen>
            <SettingsBody/>
        </Show>
    }
}

#[component]
fn SettingsBody() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let sink = expect_context::<EffectSink>();
    let api = expect_context::<HttpApi>();
    let state = RwSignal::new(
        session
            .get_untracked()
            .map(|user| SettingsState::from_user(&user))
            .unwrap_or_default(),
    );

    let on_save = move |_| {
        let api = api.clone();
        spawn(async move { sink.apply(settings::save(&api, &state, &session).await) });
    };

    let on_picture = move |ev: leptos::ev::Event| {
        spawn(async move {
            if let Some(upload) = browser::read_picked_file(ev).await {
                let preview = browser::object_url(&upload).unwrap_or_default();
                state.update(|s| s.pick_picture(upload, preview));
            }
        });
    };

    let on_back = move |_| {
        let username = state.with_untracked(|s| s.username.clone());
        sink.apply(Effects::navigate(AppRoute::Profile(username)));
    };

    let accent = move || state.with(|s| theme_color(&s.theme_color));

    view! {
        <div class="settings">
            <header class="settings__toolbar">
                <button class="btn btn--ghost" on:click=on_back>"← Back to Profile"</button>
                <span class="settings__spacer"></span>
                <button class="btn btn--primary" disabled=move || state.with(|s| s.saving) on:click=on_save>
                    {move || if state.with(|s| s.saving) { "Saving..." } else { "Save Changes" }}
                </button>
            </header>
            <h1>"Profile Settings"</h1>

            <section class="settings__panel">
                <h2>"Profile Picture"</h2>
                <div class="settings__avatar-row">
                    {move || state.with(|s| view! {
                        <Avatar picture=s.preview_url.clone() name=s.name.clone() class="avatar avatar--lg"/>
                    })}
                    <label class="btn settings__upload">
                        "Upload New Picture"
                        <input type="file" accept="image/*" on:change=on_picture/>
                    </label>
                </div>
            </section>

            <section class="settings__panel">
                <h2>"Bio"</h2>
                <textarea
                    class="settings__bio"
                    placeholder="Tell us about yourself..."
                    maxlength=BIO_MAX_CHARS.to_string()
                    prop:value=move || state.with(|s| s.bio.clone())
                    on:input=move |ev| state.update(|s| s.set_bio(&event_target_value(&ev)))
                ></textarea>
                <p class="settings__counter">{move || state.with(SettingsState::bio_counter)}</p>
            </section>

            <section class="settings__panel">
                <h2>"Theme Color"</h2>
                <div class="settings__swatches">
                    {THEME_COLORS
                        .into_iter()
                        .map(|swatch| view! {
                            <button
                                class=move || {
                                    if state.with(|s| s.is_selected(&swatch)) {
                                        "swatch swatch--selected"
                                    } else {
                                        "swatch"
                                    }
                                }
                                title=swatch.name
                                style:background-color=swatch.value
                                on:click=move |_| state.update(|s| s.select_theme(swatch.value))
                            >
                                <span class="swatch__label">{swatch.name}</span>
                            </button>
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="settings__panel">
                <h2>"Preview"</h2>
                <div
                    class="settings__preview"
                    style:border-top=move || format!("4px solid {}", accent())
                    style:box-shadow=move || format!("0 0 30px {}", tint(&accent(), 0.125))
                >
                    {move || state.with(|s| view! {
                        <Avatar picture=s.preview_url.clone() name=s.name.clone() class="avatar avatar--md"/>
                    })}
                    <div>
                        <h3>{move || state.with(|s| s.name.clone())}</h3>
                        <span
                            class="settings__preview-handle"
                            style:background-color=move || tint(&accent(), 0.19)
                            style:color=accent
                        >
                            {move || state.with(|s| format!("@{}", s.username))}
                        </span>
                        <p>{move || state.with(|s| if s.bio.is_empty() { "No bio yet.".to_owned() } else { s.bio.clone() })}</p>
                    </div>
                </div>
            </section>
        </div>
    }
}
