//! Share button with social links and copy-to-clipboard.

use leptos::prelude::*;

use crate::state::post_view::PostViewState;
use crate::state::toast::Notice;
use crate::util::browser;
use crate::util::effects::{EffectSink, spawn};
use crate::util::share::{ShareTarget, share_url};

#[component]
pub fn ShareMenu(state: RwSignal<PostViewState>) -> impl IntoView {
    let sink = expect_context::<EffectSink>();
    let title = move || state.with(|s| s.post.as_ref().map(|p| p.title.clone()).unwrap_or_default());

    let on_copy = move |_| {
        let url = share_url(&browser::current_href());
        spawn(async move {
            if browser::copy_to_clipboard(&url).await {
                sink.notify(Notice::success("Link copied to clipboard!"));
            } else {
                sink.notify(Notice::error("Failed to copy link"));
            }
        });
        state.update(|s| s.share_open = false);
    };

    view! {
        <div class="share">
            <button class="btn share__toggle" on:click=move |_| state.update(PostViewState::toggle_share)>
                "Share"
            </button>
            <Show when=move || state.with(|s| s.share_open)>
                <div class="share__menu">
                    {ShareTarget::ALL
                        .into_iter()
                        .map(|target| {
                            let href = move || target.link(&share_url(&browser::current_href()), &title());
                            view! {
                                <a class="share__item" href=href target="_blank" rel="noopener noreferrer">
                                    {target.label()}
                                </a>
                            }
                        })
                        .collect_view()}
                    <button class="share__item share__copy" on:click=on_copy>"Copy Link"</button>
                </div>
            </Show>
        </div>
    }
}
