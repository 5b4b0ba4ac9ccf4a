use crate::catalog::model::Event;
use chrono::{Local, NaiveDate};

/// Drops events dated before `today` and orders the rest by date, nearest first.
///
/// Only the calendar day is compared; an event later today is still upcoming.
/// Events sharing a date keep their relative input order.
pub fn normalize(events: &[Event], today: NaiveDate) -> Vec<Event> {
    let mut upcoming: Vec<Event> = events
        .iter()
        .filter(|event| event.date >= today)
        .cloned()
        .collect();

    upcoming.sort_by_key(|event| event.date);

    upcoming
}

/// The local calendar day, used as "today" by the pages.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
