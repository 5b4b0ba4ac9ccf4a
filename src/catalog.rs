pub mod dto;
pub mod model;

use crate::catalog::model::{Category, Event};
use itertools::Itertools;
use lazy_static::lazy_static;

const BUNDLED_EVENTS: &str = include_str!("../data/events.json");

lazy_static! {
    static ref CATALOG: Vec<Event> =
        dto::parse_catalog(BUNDLED_EVENTS).expect("Bundled event catalog is invalid");
}

/// The static catalog bundled with the application, in file order.
pub fn bundled() -> &'static [Event] {
    &CATALOG
}

/// Distinct categories used across `events`, sorted by name.
pub fn all_categories(events: &[Event]) -> Vec<Category> {
    events
        .iter()
        .flat_map(|event| event.categories.iter().copied())
        .unique()
        .sorted_by_key(|category| category.to_string())
        .collect()
}
