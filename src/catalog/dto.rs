use super::model::{Category, Event, Position};
use crate::error::CatalogError;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::collections::HashSet;
use tracing::{debug, warn};

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";

/// Raw catalog record, before the event invariants are checked.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRecord {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub date: String,
    pub time: String,
    pub position: [f64; 2],
    pub categories: Vec<Category>,
    #[serde(default, deserialize_with = "deserialize_optional_str")]
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_str")]
    pub location: Option<String>,
}

impl EventRecord {
    #[tracing::instrument(skip(self), fields(self.id = self.id))]
    pub fn to_model(&self) -> Result<Event, CatalogError> {
        if self.categories.is_empty() {
            return Err(CatalogError::NoCategories(self.id));
        }

        let date = NaiveDate::parse_from_str(&self.date, DATE_FORMAT).map_err(|err| {
            warn!("Failed to parse date. Err: {err}");
            CatalogError::InvalidDate {
                id: self.id,
                value: self.date.clone(),
            }
        })?;
        let time = NaiveTime::parse_from_str(&self.time, TIME_FORMAT).map_err(|err| {
            warn!("Failed to parse time. Err: {err}");
            CatalogError::InvalidTime {
                id: self.id,
                value: self.time.clone(),
            }
        })?;

        Ok(Event {
            id: self.id,
            title: self.title.clone(),
            description: self.description.clone(),
            date,
            time,
            position: Position::from(self.position),
            categories: self.categories.clone(),
            image_url: self.image_url.clone(),
            location: self.location.clone(),
        })
    }
}

/// Parses a JSON array of catalog records into events, keeping their order.
pub fn parse_catalog(json: &str) -> Result<Vec<Event>, CatalogError> {
    let records = serde_json::from_str::<Vec<EventRecord>>(json)?;
    let mut seen_ids = HashSet::with_capacity(records.len());
    let mut events = Vec::with_capacity(records.len());

    for record in records.iter() {
        if !seen_ids.insert(record.id) {
            return Err(CatalogError::DuplicateId(record.id));
        }

        events.push(record.to_model()?);
    }

    debug!("Parsed {} catalog events", events.len());

    Ok(events)
}

fn deserialize_optional_str<'de, D>(d: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(d)? {
        Value::String(s) if !s.trim().is_empty() => Some(s),
        _ => None,
    })
}
