use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Catalog is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Event {id} has an invalid date '{value}'. Expected YYYY-MM-DD")]
    InvalidDate { id: u32, value: String },

    #[error("Event {id} has an invalid time '{value}'. Expected HH:MM")]
    InvalidTime { id: u32, value: String },

    #[error("Event {0} has no categories")]
    NoCategories(u32),

    #[error("Event id {0} is used more than once")]
    DuplicateId(u32),
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid storage key '{0}'")]
    InvalidKey(String),
}

/// Rejected edits on the search criteria.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CriteriaError {
    #[error("Start date cannot be in the past.")]
    DateFromInPast(NaiveDate),

    #[error("Start date cannot be after end date.")]
    DateFromAfterDateTo(NaiveDate),

    #[error("End date cannot be in the past.")]
    DateToInPast(NaiveDate),

    #[error("End date cannot be before start date.")]
    DateToBeforeDateFrom(NaiveDate),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid config '{name}'. Expected {expected}, got '{value}'")]
    Invalid {
        name: &'static str,
        expected: &'static str,
        value: String,
    },
}
