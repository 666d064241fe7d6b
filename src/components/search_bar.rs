//! Search Bar Component
//!
//! Keyword input that switches the listing to `/search` results.

use leptos::prelude::*;

use crate::context::AppContext;

#[component]
pub fn SearchBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (draft, set_draft) = signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.search(draft.get().trim().to_string());
    };

    let clear = move |_: web_sys::MouseEvent| {
        set_draft.set(String::new());
        ctx.search(String::new());
    };

    view! {
        <form class="search-form" on:submit=submit>
            <input
                type="search"
                placeholder="Search items..."
                prop:value=move || draft.get()
                on:input=move |ev| set_draft.set(event_target_value(&ev))
            />
            <button type="submit">"Search"</button>
            <Show when=move || !ctx.keyword.get().is_empty()>
                <button type="button" class="cancel-btn" on:click=clear>
                    "Clear (" {move || ctx.keyword.get()} ")"
                </button>
            </Show>
        </form>
    }
}
