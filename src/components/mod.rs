//! UI Components
//!
//! Leptos components for the storefront listing.

mod item_card;
mod item_list;
mod search_bar;

pub use item_card::{card_views, ItemCard};
pub use item_list::ItemList;
pub use search_bar::SearchBar;
