use crate::catalog::model::{Category, Event};
use indexmap::IndexMap;

/// Events bucketed per category, buckets in first-seen order.
pub type CategoryGroups = IndexMap<Category, Vec<Event>>;

/// Puts each event in the bucket of every category it belongs to.
///
/// An event with several categories appears once per category.
pub fn group_by_category(events: &[Event]) -> CategoryGroups {
    let mut groups = CategoryGroups::new();

    for event in events {
        for category in event.categories.iter() {
            groups.entry(*category).or_default().push(event.clone());
        }
    }

    groups
}
