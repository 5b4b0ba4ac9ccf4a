use crate::catalog::model::{Category, Event};
use crate::error::CriteriaError;
use chrono::NaiveDate;
use std::collections::BTreeSet;
use tracing::{debug, trace};

/// The user's current search parameters.
///
/// Every unset field is unrestricted: an empty search term or category set
/// lets every event through.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub search_term: String,
    pub selected_categories: BTreeSet<Category>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
}

impl FilterCriteria {
    pub fn is_active(&self) -> bool {
        !self.search_term.is_empty()
            || !self.selected_categories.is_empty()
            || self.date_from.is_some()
            || self.date_to.is_some()
    }

    /// Whether `event` passes every active predicate.
    pub fn matches(&self, event: &Event) -> bool {
        self.matches_search_term(event)
            && self.matches_categories(event)
            && self.date_from.map_or(true, |from| event.date >= from)
            && self.date_to.map_or(true, |to| event.date <= to)
    }

    fn matches_search_term(&self, event: &Event) -> bool {
        if self.search_term.is_empty() {
            return true;
        }

        let term = self.search_term.to_lowercase();

        event.title.to_lowercase().contains(&term)
            || event.description.to_lowercase().contains(&term)
    }

    fn matches_categories(&self, event: &Event) -> bool {
        self.selected_categories.is_empty()
            || event
                .categories
                .iter()
                .any(|category| self.selected_categories.contains(category))
    }
}

/// Keeps the events of `catalog` matching `criteria`, in catalog order.
///
/// Date bounds are applied literally; inverted bounds yield nothing.
#[tracing::instrument(skip(catalog), fields(catalog_size = catalog.len()))]
pub fn filter(catalog: &[Event], criteria: &FilterCriteria) -> Vec<Event> {
    let events: Vec<Event> = catalog
        .iter()
        .filter(|event| criteria.matches(event))
        .cloned()
        .collect();

    debug!("{} events match", events.len());

    events
}

/// Editing surface for [`FilterCriteria`].
///
/// Unlike [`filter`], it refuses date bounds in the past or out of order.
/// A rejected edit leaves the criteria as they were.
#[derive(Debug, Clone, Default)]
pub struct CriteriaEditor {
    criteria: FilterCriteria,
}

impl CriteriaEditor {
    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.criteria.search_term = term.into();
    }

    pub fn clear_search_term(&mut self) {
        self.criteria.search_term.clear();
    }

    /// Selects `category` if it was not selected, deselects it otherwise.
    pub fn toggle_category(&mut self, category: Category) {
        if !self.criteria.selected_categories.remove(&category) {
            self.criteria.selected_categories.insert(category);
        }

        trace!("Selected categories: {:?}", self.criteria.selected_categories);
    }

    pub fn clear_categories(&mut self) {
        self.criteria.selected_categories.clear();
    }

    pub fn set_date_from(
        &mut self,
        date: NaiveDate,
        today: NaiveDate,
    ) -> Result<(), CriteriaError> {
        if date < today {
            return Err(CriteriaError::DateFromInPast(date));
        }
        if self.criteria.date_to.is_some_and(|to| date > to) {
            return Err(CriteriaError::DateFromAfterDateTo(date));
        }

        self.criteria.date_from = Some(date);

        Ok(())
    }

    pub fn set_date_to(
        &mut self,
        date: NaiveDate,
        today: NaiveDate,
    ) -> Result<(), CriteriaError> {
        if date < today {
            return Err(CriteriaError::DateToInPast(date));
        }
        if self.criteria.date_from.is_some_and(|from| date < from) {
            return Err(CriteriaError::DateToBeforeDateFrom(date));
        }

        self.criteria.date_to = Some(date);

        Ok(())
    }

    pub fn clear_date_from(&mut self) {
        self.criteria.date_from = None;
    }

    pub fn clear_date_to(&mut self) {
        self.criteria.date_to = None;
    }

    pub fn clear_all(&mut self) {
        self.criteria = FilterCriteria::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::model::Position;
    use chrono::NaiveTime;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn event(
        id: u32,
        title: &str,
        description: &str,
        on: NaiveDate,
        categories: &[Category],
    ) -> Event {
        Event::new(
            id,
            title.to_string(),
            description.to_string(),
            on,
            NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
            Position::new(54.68, 25.28),
            categories.to_vec(),
        )
    }

    fn catalog() -> Vec<Event> {
        vec![
            event(
                1,
                "Tech Conference",
                "Talks for tech professionals.",
                date(2025, 10, 26),
                &[Category::Technology, Category::Education],
            ),
            event(
                2,
                "Art Exhibition",
                "Contemporary art from local artists.",
                date(2025, 10, 27),
                &[Category::Art, Category::Community],
            ),
            event(
                3,
                "Music Festival",
                "Outdoor music festival.",
                date(2025, 10, 28),
                &[Category::Music],
            ),
            event(
                4,
                "Yoga in the Park",
                "A relaxing outdoor session.",
                date(2025, 11, 2),
                &[Category::Health, Category::Sports],
            ),
            event(
                5,
                "Food Truck Rally",
                "The best food trucks in town.",
                date(2025, 10, 30),
                &[Category::Food],
            ),
            event(
                6,
                "Kūčios Dinner",
                "Traditional Christmas Eve supper in Užupis.",
                date(2025, 12, 24),
                &[Category::Food, Category::Community],
            ),
        ]
    }

    fn ids(events: &[Event]) -> Vec<u32> {
        events.iter().map(|event| event.id).collect()
    }

    #[test_log::test]
    fn when_criteria_are_empty_should_return_catalog_unchanged() {
        let catalog = catalog();

        assert_eq!(filter(&catalog, &FilterCriteria::default()), catalog);
    }

    #[test_log::test]
    fn should_match_search_term_case_insensitively_in_title_or_description() {
        let criteria = FilterCriteria {
            search_term: "OUTDOOR".to_string(),
            ..Default::default()
        };

        assert_eq!(ids(&filter(&catalog(), &criteria)), vec![3, 4]);
    }

    #[test_log::test]
    fn should_keep_events_sharing_any_selected_category() {
        let criteria = FilterCriteria {
            selected_categories: BTreeSet::from([Category::Education, Category::Art]),
            ..Default::default()
        };

        assert_eq!(ids(&filter(&catalog(), &criteria)), vec![1, 2]);
    }

    #[test_log::test]
    fn should_apply_date_bounds_inclusively() {
        let criteria = FilterCriteria {
            date_from: Some(date(2025, 10, 27)),
            date_to: Some(date(2025, 10, 30)),
            ..Default::default()
        };

        assert_eq!(ids(&filter(&catalog(), &criteria)), vec![2, 3, 5]);
    }

    #[test_log::test]
    fn when_date_bounds_are_inverted_should_return_nothing() {
        let criteria = FilterCriteria {
            date_from: Some(date(2025, 11, 1)),
            date_to: Some(date(2025, 10, 1)),
            ..Default::default()
        };

        assert!(filter(&catalog(), &criteria).is_empty());
    }

    #[test_log::test]
    fn should_combine_predicates_conjunctively() {
        let criteria = FilterCriteria {
            search_term: "o".to_string(),
            selected_categories: BTreeSet::from([
                Category::Music,
                Category::Food,
                Category::Art,
            ]),
            date_from: None,
            date_to: Some(date(2025, 10, 28)),
        };

        let result = filter(&catalog(), &criteria);

        assert_eq!(ids(&result), vec![2, 3]);
        assert!(result.iter().all(|event| criteria.matches(event)));
    }

    #[test_log::test]
    fn should_return_exactly_the_events_matching_every_predicate() {
        let catalog = catalog();
        let all_criteria = vec![
            FilterCriteria::default(),
            FilterCriteria {
                search_term: "KŪČIOS".to_string(),
                ..Default::default()
            },
            FilterCriteria {
                search_term: "užupis".to_string(),
                selected_categories: BTreeSet::from([Category::Community]),
                ..Default::default()
            },
            FilterCriteria {
                date_from: Some(date(2025, 10, 28)),
                ..Default::default()
            },
            FilterCriteria {
                date_to: Some(date(2025, 10, 27)),
                ..Default::default()
            },
            FilterCriteria {
                search_term: "a".to_string(),
                selected_categories: BTreeSet::from([Category::Community, Category::Health]),
                date_from: Some(date(2025, 10, 27)),
                date_to: None,
            },
        ];

        for criteria in all_criteria.iter() {
            let expected: Vec<Event> = catalog
                .iter()
                .filter(|event| criteria.matches(event))
                .cloned()
                .collect();

            assert_eq!(filter(&catalog, criteria), expected, "{criteria:?}");
        }

        assert_eq!(ids(&filter(&catalog, &all_criteria[1])), vec![6]);
        assert_eq!(ids(&filter(&catalog, &all_criteria[2])), vec![6]);
        assert_eq!(ids(&filter(&catalog, &all_criteria[3])), vec![3, 4, 5, 6]);
        assert_eq!(ids(&filter(&catalog, &all_criteria[4])), vec![1, 2]);
        assert_eq!(ids(&filter(&catalog, &all_criteria[5])), vec![2, 4, 6]);
    }

    #[test_log::test]
    fn should_report_whether_any_predicate_is_set() {
        assert!(!FilterCriteria::default().is_active());
        assert!(FilterCriteria {
            date_to: Some(date(2025, 10, 28)),
            ..Default::default()
        }
        .is_active());
    }

    #[test_log::test]
    fn toggling_a_category_twice_should_deselect_it() {
        let mut editor = CriteriaEditor::default();

        editor.toggle_category(Category::Music);
        assert!(editor.criteria().selected_categories.contains(&Category::Music));

        editor.toggle_category(Category::Music);
        assert!(editor.criteria().selected_categories.is_empty());
    }

    #[test_log::test]
    fn when_date_from_is_in_the_past_should_reject_it() {
        let today = date(2026, 10, 15);
        let mut editor = CriteriaEditor::default();

        assert_eq!(
            editor.set_date_from(date(2026, 10, 14), today),
            Err(CriteriaError::DateFromInPast(date(2026, 10, 14)))
        );
        assert_eq!(editor.criteria().date_from, None);

        assert_eq!(editor.set_date_from(today, today), Ok(()));
        assert_eq!(editor.criteria().date_from, Some(today));
    }

    #[test_log::test]
    fn when_date_range_would_invert_should_keep_previous_bounds() {
        let today = date(2026, 10, 15);
        let mut editor = CriteriaEditor::default();

        editor.set_date_from(date(2026, 10, 20), today).unwrap();
        editor.set_date_to(date(2026, 10, 25), today).unwrap();

        assert_eq!(
            editor.set_date_to(date(2026, 10, 19), today),
            Err(CriteriaError::DateToBeforeDateFrom(date(2026, 10, 19)))
        );
        assert_eq!(
            editor.set_date_from(date(2026, 10, 26), today),
            Err(CriteriaError::DateFromAfterDateTo(date(2026, 10, 26)))
        );
        assert_eq!(
            editor.set_date_to(date(2026, 10, 1), today),
            Err(CriteriaError::DateToInPast(date(2026, 10, 1)))
        );
        assert_eq!(editor.criteria().date_from, Some(date(2026, 10, 20)));
        assert_eq!(editor.criteria().date_to, Some(date(2026, 10, 25)));
    }

    #[test_log::test]
    fn clearing_each_predicate_should_leave_criteria_inactive() {
        let today = date(2026, 10, 15);
        let mut editor = CriteriaEditor::default();

        editor.set_search_term("yoga");
        assert!(editor.criteria().is_active());
        editor.clear_search_term();
        assert!(!editor.criteria().is_active());

        editor.toggle_category(Category::Health);
        editor.toggle_category(Category::Sports);
        assert!(editor.criteria().is_active());
        editor.clear_categories();
        assert!(!editor.criteria().is_active());

        editor.set_date_from(today, today).unwrap();
        assert!(editor.criteria().is_active());
        editor.clear_date_from();
        assert!(!editor.criteria().is_active());

        editor.set_date_to(today, today).unwrap();
        assert!(editor.criteria().is_active());
        editor.clear_date_to();
        assert!(!editor.criteria().is_active());

        assert_eq!(editor.criteria(), &FilterCriteria::default());
    }

    #[test_log::test]
    fn clear_all_should_reset_every_predicate() {
        let today = date(2026, 10, 15);
        let mut editor = CriteriaEditor::default();

        editor.set_search_term("yoga");
        editor.toggle_category(Category::Health);
        editor.set_date_to(today, today).unwrap();
        editor.clear_all();

        assert_eq!(editor.criteria(), &FilterCriteria::default());
    }
}
