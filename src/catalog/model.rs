use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// A local event shown on the map, in the sidebar and in the grid.
///
/// The `id` identifies the event in the catalog and in the tracked set.
/// Equality compares whole records, so two versions of the same event
/// differ when any field does.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    #[serde(with = "hh_mm")]
    pub time: NaiveTime,
    pub position: Position,
    pub categories: Vec<Category>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl Event {
    pub fn new(
        id: u32,
        title: String,
        description: String,
        date: NaiveDate,
        time: NaiveTime,
        position: Position,
        categories: Vec<Category>,
    ) -> Self {
        Self {
            id,
            title,
            description,
            date,
            time,
            position,
            categories,
            image_url: None,
            location: None,
        }
    }

    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn starts_at(&self) -> NaiveDateTime {
        self.date.and_time(self.time)
    }

    pub fn has_category(&self, category: Category) -> bool {
        self.categories.contains(&category)
    }
}

/// Latitude/longitude pair, stored as `[lat, lng]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Position {
    pub lat: f64,
    pub lng: f64,
}

impl Position {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl From<[f64; 2]> for Position {
    fn from([lat, lng]: [f64; 2]) -> Self {
        Self { lat, lng }
    }
}

impl From<Position> for [f64; 2] {
    fn from(position: Position) -> Self {
        [position.lat, position.lng]
    }
}

#[derive(
    strum::IntoStaticStr,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
pub enum Category {
    Technology,
    Art,
    Music,
    Sports,
    Food,
    Education,
    Community,
    Health,
    Business,
    Science,
}

/// Event times are written as 24-hour `HH:MM`, without seconds.
pub(crate) mod hh_mm {
    use chrono::NaiveTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%H:%M";

    pub fn serialize<S>(time: &NaiveTime, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        s.serialize_str(&time.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(d: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(d)?;

        NaiveTime::parse_from_str(&raw, FORMAT).map_err(de::Error::custom)
    }
}
