//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::config::ApiConfig;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Whether ItemList should fetch - read
    pub reload: ReadSignal<bool>,
    /// Whether ItemList should fetch - write
    set_reload: WriteSignal<bool>,
    /// Current search keyword (empty = all items) - read
    pub keyword: ReadSignal<String>,
    /// Current search keyword - write
    set_keyword: WriteSignal<String>,
    config: StoredValue<ApiConfig>,
}

impl AppContext {
    pub fn new(
        reload: (ReadSignal<bool>, WriteSignal<bool>),
        keyword: (ReadSignal<String>, WriteSignal<String>),
        config: ApiConfig,
    ) -> Self {
        Self {
            reload: reload.0,
            set_reload: reload.1,
            keyword: keyword.0,
            set_keyword: keyword.1,
            config: StoredValue::new(config),
        }
    }

    pub fn config(&self) -> ApiConfig {
        self.config.get_value()
    }

    /// Ask ItemList to fetch again
    pub fn request_reload(&self) {
        self.set_reload.set(true);
    }

    /// Called once a load settles, so the next request is a fresh transition
    pub fn finish_reload(&self) {
        self.set_reload.set(false);
    }

    /// Switch the listing to a keyword search and fetch it
    pub fn search(&self, keyword: String) {
        self.set_keyword.set(keyword);
        self.request_reload();
    }
}
