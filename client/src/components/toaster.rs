//! Toast stack in the corner of the screen.

use leptos::prelude::*;

use crate::util::effects::EffectSink;

#[component]
pub fn Toaster() -> impl IntoView {
    let sink = expect_context::<EffectSink>();
    let toasts = sink.toasts;

    view! {
        <div class="toaster" role="status" aria-live="polite">
            <For
                each=move || toasts.get().items
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div
                            class=format!("toast {}", toast.notice.kind.css_modifier())
                            on:click=move |_| toasts.update(|t| t.dismiss(id))
                        >
                            {toast.notice.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
