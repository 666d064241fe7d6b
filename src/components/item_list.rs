//! Item List Component
//!
//! Fetches the item collection from the backend and renders it as a grid.
//! Fetches on mount and whenever `reload` becomes true; a failed fetch
//! leaves the previous collection on screen.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, ApiError, ItemQuery};
use crate::components::{card_views, ItemCard};
use crate::config::ApiConfig;
use crate::loader::{LoadTracker, ReloadGate, Settled, Ticket};
use crate::models::Item;

pub const EMPTY_MESSAGE: &str = "No items found.";

/// Text shown instead of the grid, if any
fn empty_message(items: &[Item]) -> Option<&'static str> {
    if items.is_empty() {
        Some(EMPTY_MESSAGE)
    } else {
        None
    }
}

/// State changes and callbacks owed for one finished fetch
#[derive(Debug, Default, PartialEq)]
struct LoadEffect {
    /// Replacement list; `None` keeps what is on screen
    items: Option<Vec<Item>>,
    /// Clears the loading flag
    settled: bool,
    completed: bool,
    failure: Option<String>,
}

fn load_effect(settled: Settled<Vec<Item>, ApiError>, ticket: Ticket) -> LoadEffect {
    match settled {
        Settled::Apply(loaded) => {
            log::info!("[ItemList] Loaded {} items", loaded.len());
            LoadEffect {
                items: Some(loaded),
                settled: true,
                completed: true,
                failure: None,
            }
        }
        Settled::Fail(err) => {
            log::error!("[ItemList] GET error: {}", err);
            LoadEffect {
                items: None,
                settled: true,
                completed: false,
                failure: Some(err.to_string()),
            }
        }
        Settled::Stale => {
            log::debug!("[ItemList] Dropped stale response (generation {})", ticket.generation());
            LoadEffect::default()
        }
    }
}

#[component]
pub fn ItemList(
    config: ApiConfig,
    /// Fetch when this is (or becomes) true. Defaults to true.
    #[prop(into, optional)]
    reload: Option<Signal<bool>>,
    /// Search keyword; blank lists every item.
    #[prop(into, optional)]
    keyword: Option<Signal<String>>,
    /// Runs after a successful fetch has replaced the list.
    #[prop(into, optional)]
    on_load_completed: Option<Callback<()>>,
    /// Runs with the error message when a fetch fails.
    #[prop(into, optional)]
    on_load_failed: Option<Callback<String>>,
) -> impl IntoView {
    let reload = reload.unwrap_or_else(|| Signal::stored(true));

    let (items, set_items) = signal(Vec::<Item>::new());
    let (loading, set_loading) = signal(false);

    let config = StoredValue::new(config);
    let gate = StoredValue::new(ReloadGate::new());
    let tracker = StoredValue::new(LoadTracker::new());

    on_cleanup(move || {
        tracker.try_update_value(|t| t.cancel());
    });

    Effect::new(move |_| {
        let reload = reload.get();
        let query = ItemQuery::from_keyword(&keyword.map(|k| k.get()).unwrap_or_default());

        if !gate.try_update_value(|g| g.observe(reload, &query)).unwrap_or(false) {
            return;
        }
        if tracker.try_with_value(|t| t.is_loading()).unwrap_or(false) {
            log::debug!("[ItemList] Superseding in-flight fetch");
        }
        let (Some(ticket), Some(config)) = (
            tracker.try_update_value(|t| t.begin()),
            config.try_get_value(),
        ) else {
            return;
        };

        log::info!("[ItemList] Fetching {} (generation {})", query.url(&config), ticket.generation());
        set_loading.set(true);

        spawn_local(async move {
            let result = api::fetch_items(&config, &query).await;
            let settled = tracker
                .try_update_value(|t| t.settle(ticket, result))
                .unwrap_or(Settled::Stale);

            let effect = load_effect(settled, ticket);
            if let Some(loaded) = effect.items {
                let _ = set_items.try_set(loaded);
            }
            if effect.settled {
                let _ = set_loading.try_set(false);
            }
            if effect.completed {
                if let Some(callback) = on_load_completed {
                    callback.run(());
                }
            }
            if let (Some(message), Some(callback)) = (effect.failure, on_load_failed) {
                callback.run(message);
            }
        });
    });

    view! {
        <div class="wrapper" class:loading=move || loading.get()>
            <Show
                when=move || items.with(|list| empty_message(list).is_none())
                fallback=|| view! { <p class="empty-message">{EMPTY_MESSAGE}</p> }
            >
                <For
                    each=move || items.with(|list| config.with_value(|cfg| card_views(list, cfg)))
                    key=|card| card.key
                    children=move |card| view! { <ItemCard card=card /> }
                />
            </Show>
        </div>
    }
}
