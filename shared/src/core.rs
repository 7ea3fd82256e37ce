use async_trait::async_trait;
use aws_sdk_dynamodb::types::TableStatus;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

#[cfg(any(test, feature = "mocks"))]
use mockall::automock;

pub const UNKNOWN_TITLE: &str = "Unknown Title";
pub const UNKNOWN_YEAR: &str = "Unknown Year";
pub const UNKNOWN_GENRE: &str = "Unknown Genre";
pub const UNKNOWN_RATING: &str = "Unknown Rating";
pub const NO_URL: &str = "No URL";

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Error executing scan: {0}")]
    Scan(String),
    #[error("Error executing query: {0}")]
    Query(String),
    #[error("Error adding item: {0}")]
    PutItem(String),
    #[error("Error creating table: {0}")]
    CreateTable(String),
    #[error("Error describing table: {0}")]
    DescribeTable(String),
    #[error("Table {0} already exists")]
    TableAlreadyExists(String),
    #[error("Table {table_name} did not become active after {attempts} attempts")]
    TableNotActive { table_name: String, attempts: u32 },
}

#[cfg_attr(any(test, feature = "mocks"), automock)]
#[async_trait]
pub trait MovieRepository: Debug {
    /// Issues the create request only; use `table_status` to wait for it.
    async fn create_table(
        &self,
        read_capacity_units: i64,
        write_capacity_units: i64,
    ) -> Result<(), StoreError>;
    /// `None` while the table cannot be found yet.
    async fn table_status(&self) -> Result<Option<TableStatus>, StoreError>;
    async fn put_movie(&self, movie: MovieRecord) -> Result<(), StoreError>;
    async fn list_movies(&self) -> Result<Vec<MovieRecord>, StoreError>;
    async fn find_movies_by_year(&self, year: &str) -> Result<Vec<MovieRecord>, StoreError>;
}

/// A movie item as stored in the table. Only the key is enforced by the
/// store, so every attribute may be missing on read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct MovieRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_url: Option<String>,
}

impl MovieRecord {
    pub fn new(
        year: impl Into<String>,
        title: impl Into<String>,
        genre: impl Into<String>,
        rating: impl Into<String>,
        cover_url: impl Into<String>,
    ) -> Self {
        Self {
            year: Some(year.into()),
            title: Some(title.into()),
            genre: Some(genre.into()),
            rating: Some(rating.into()),
            cover_url: Some(cover_url.into()),
        }
    }
}

/// The shape returned by the by-year lookup. Field order is the serialized
/// key order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct MovieSummary {
    pub title: String,
    pub year: String,
    pub genre: String,
    pub rating: String,
    pub cover_url: String,
}

impl From<MovieRecord> for MovieSummary {
    fn from(movie: MovieRecord) -> Self {
        Self {
            title: movie.title.unwrap_or_else(|| UNKNOWN_TITLE.to_string()),
            year: movie.year.unwrap_or_else(|| UNKNOWN_YEAR.to_string()),
            genre: movie.genre.unwrap_or_else(|| UNKNOWN_GENRE.to_string()),
            rating: movie.rating.unwrap_or_else(|| UNKNOWN_RATING.to_string()),
            cover_url: movie.cover_url.unwrap_or_else(|| NO_URL.to_string()),
        }
    }
}
