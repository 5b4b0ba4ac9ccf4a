use crate::catalog;
use crate::catalog::model::{Category, Event};
use crate::filter::{filter, FilterCriteria};
use crate::grouping::{group_by_category, CategoryGroups};
use crate::timeline::normalize;
use crate::tracked::{Storage, TrackedEventsStore};
use crate::viewport::{visible_within, GeoBounds};
use chrono::NaiveDate;
use tracing::{debug, info, warn};

/// What the pages of the application are fed with.
///
/// Owns the catalog, the criteria last applied and the tracked events store,
/// and derives every view from them on demand.
pub struct EventBrowser<S: Storage> {
    catalog: Vec<Event>,
    criteria: FilterCriteria,
    tracked: TrackedEventsStore<S>,
    selected_event: Option<u32>,
}

impl<S: Storage> EventBrowser<S> {
    pub fn new(catalog: Vec<Event>, tracked: TrackedEventsStore<S>) -> Self {
        Self {
            catalog,
            criteria: FilterCriteria::default(),
            tracked,
            selected_event: None,
        }
    }

    pub fn catalog(&self) -> &[Event] {
        &self.catalog
    }

    /// Category choices for the search form.
    pub fn all_categories(&self) -> Vec<Category> {
        catalog::all_categories(&self.catalog)
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn apply_criteria(&mut self, criteria: FilterCriteria) {
        info!(
            search_term = %criteria.search_term,
            categories = criteria.selected_categories.len(),
            "Applying criteria"
        );
        self.criteria = criteria;
    }

    /// Events listed in the sidebar.
    pub fn sidebar_events(&self) -> Vec<Event> {
        filter(&self.catalog, &self.criteria)
    }

    /// Markers inside the map viewport.
    pub fn map_events(&self, bounds: &GeoBounds) -> Vec<Event> {
        let visible = visible_within(&self.sidebar_events(), bounds);

        debug!("{} events visible on the map", visible.len());

        visible
    }

    /// Upcoming matching events per category, for the events grid.
    pub fn grid(&self, today: NaiveDate) -> CategoryGroups {
        group_by_category(&normalize(&self.sidebar_events(), today))
    }

    /// Upcoming tracked events, nearest first.
    pub fn tracked_page(&self, today: NaiveDate) -> Vec<Event> {
        normalize(&self.tracked.tracked_events(), today)
    }

    pub fn toggle_tracked(&mut self, event: &Event) -> bool {
        self.tracked.toggle_tracked(event)
    }

    pub fn is_tracked(&self, event_id: u32) -> bool {
        self.tracked.is_tracked(event_id)
    }

    pub fn tracked(&self) -> &TrackedEventsStore<S> {
        &self.tracked
    }

    /// Selects the event shown in the details panel, `None` to go back to the list.
    ///
    /// The selection is kept across criteria changes.
    pub fn select_event(&mut self, event_id: Option<u32>) {
        match event_id {
            Some(id) if !self.catalog.iter().any(|event| event.id == id) => {
                warn!("Ignoring selection of unknown event {}", id);
            }
            _ => self.selected_event = event_id,
        }
    }

    pub fn selected_event(&self) -> Option<&Event> {
        let id = self.selected_event?;

        self.catalog.iter().find(|event| event.id == id)
    }
}
