//! Simple Mercari Frontend App
//!
//! Header, search toolbar, and the item grid.

use leptos::prelude::*;

use crate::config::ApiConfig;
use crate::context::AppContext;
use crate::components::{ItemList, SearchBar};

#[component]
pub fn App(config: ApiConfig) -> impl IntoView {
    // State
    let (reload, set_reload) = signal(true);
    let (keyword, set_keyword) = signal(String::new());
    let (load_error, set_load_error) = signal::<Option<String>>(None);

    let ctx = AppContext::new((reload, set_reload), (keyword, set_keyword), config);
    provide_context(ctx);

    let on_load_completed = move |_: ()| {
        set_load_error.set(None);
        ctx.finish_reload();
    };
    let on_load_failed = move |message: String| {
        set_load_error.set(Some(format!("Could not load items: {}", message)));
        ctx.finish_reload();
    };

    view! {
        <div class="app-layout">
            <header class="Title">
                <p><b>"Simple Mercari"</b></p>
            </header>

            <div class="toolbar">
                <SearchBar />
                <button type="button" class="refresh-btn" on:click=move |_| ctx.request_reload()>
                    "Refresh"
                </button>
            </div>

            {move || load_error.get().map(|message| view! { <p class="load-error">{message}</p> })}

            <ItemList
                config=ctx.config()
                reload=reload
                keyword=keyword
                on_load_completed=on_load_completed
                on_load_failed=on_load_failed
            />
        </div>
    }
}
