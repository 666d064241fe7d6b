//! Item Card Component
//!
//! One grid cell: photo (or placeholder), name, and category.

use leptos::prelude::*;

use crate::config::ApiConfig;
use crate::models::Item;

/// Everything a card renders, resolved against the API config
#[derive(Debug, Clone, PartialEq)]
pub struct ItemCardView {
    pub key: i64,
    pub image_src: String,
    pub image_alt: String,
    pub is_placeholder: bool,
    pub name_label: String,
    pub category_label: String,
}

impl ItemCardView {
    pub fn new(item: &Item, config: &ApiConfig) -> Self {
        Self {
            key: item.id,
            image_src: config.image_src(item),
            image_alt: item.name.clone(),
            is_placeholder: !item.has_image(),
            name_label: format!("Name: {}", item.name),
            category_label: format!("Category: {}", item.category),
        }
    }
}

/// Card views in server order
pub fn card_views(items: &[Item], config: &ApiConfig) -> Vec<ItemCardView> {
    items.iter().map(|item| ItemCardView::new(item, config)).collect()
}

#[component]
pub fn ItemCard(card: ItemCardView) -> impl IntoView {
    let is_placeholder = card.is_placeholder;

    view! {
        <div class="ItemList">
            <img
                class="image"
                class:placeholder=is_placeholder
                src=card.image_src
                alt=card.image_alt
            />
            <p>
                <span>{card.name_label}</span>
                <br />
                <span>{card.category_label}</span>
            </p>
        </div>
    }
}
