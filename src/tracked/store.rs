use super::storage::Storage;
use crate::catalog::model::Event;
use crate::error::StorageError;
use std::collections::BTreeMap;
use tracing::{debug, error, info, instrument, warn};

/// Storage key holding the JSON array of tracked events.
pub const TRACKED_EVENTS_KEY: &str = "trackedEvents";

/// The events the user marked as tracked, mirrored to [`Storage`].
///
/// Records are kept whole and ordered by id, so the persisted array is the
/// same for the same set of records. Re-adding an id stores the record given,
/// replacing whatever was tracked under it before. Every toggle rewrites the
/// stored value.
///
/// Storage failures are logged and never surface; the in-memory set stays
/// authoritative for the session.
#[derive(Debug)]
pub struct TrackedEventsStore<S: Storage> {
    storage: S,
    tracked: BTreeMap<u32, Event>,
}

impl<S: Storage> TrackedEventsStore<S> {
    /// Restores the tracked set from `storage`, starting empty when nothing
    /// usable is stored.
    #[instrument(skip(storage))]
    pub fn load(storage: S) -> Self {
        let tracked = match Self::read_tracked(&storage) {
            Ok(events) => events,
            Err(err) => {
                error!("Failed to load tracked events, starting empty: {}", err);
                BTreeMap::new()
            }
        };

        info!("Loaded {} tracked events", tracked.len());

        Self { storage, tracked }
    }

    fn read_tracked(storage: &S) -> Result<BTreeMap<u32, Event>, StorageError> {
        let Some(json) = storage.get_item(TRACKED_EVENTS_KEY)? else {
            debug!("No tracked events stored yet");
            return Ok(BTreeMap::new());
        };

        let events = serde_json::from_str::<Vec<Event>>(&json)?;
        let mut tracked = BTreeMap::new();

        for event in events {
            if let Some(previous) = tracked.insert(event.id, event) {
                warn!("Tracked event {} was stored twice, keeping the last", previous.id);
            }
        }

        Ok(tracked)
    }

    /// Tracks `event` if no event with its id is tracked, untracks it otherwise.
    ///
    /// Returns whether the event is tracked afterwards.
    #[instrument(skip(self, event), fields(event.id = event.id, event.title = %event.title))]
    pub fn toggle_tracked(&mut self, event: &Event) -> bool {
        let is_tracked = if self.tracked.remove(&event.id).is_some() {
            info!("Untracked event");
            false
        } else {
            self.tracked.insert(event.id, event.clone());
            info!("Tracked event");
            true
        };

        self.persist();

        is_tracked
    }

    pub fn is_tracked(&self, event_id: u32) -> bool {
        self.tracked.contains_key(&event_id)
    }

    pub fn tracked_events(&self) -> Vec<Event> {
        self.tracked.values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.tracked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracked.is_empty()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn persist(&mut self) {
        let events: Vec<&Event> = self.tracked.values().collect();

        let result = serde_json::to_string(&events)
            .map_err(StorageError::from)
            .and_then(|json| self.storage.set_item(TRACKED_EVENTS_KEY, &json));

        match result {
            Ok(_) => debug!("Persisted {} tracked events", events.len()),
            Err(err) => error!("Failed to save tracked events: {}", err),
        }
    }
}
