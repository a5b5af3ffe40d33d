//! Core data types for bookshelf-lib.
//!
//! Field names serialize in camelCase (`pageCount`, `insertedAt`, ...) so the
//! JSON shape matches what HTTP clients of the service expect.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

/// Serialize a timestamp as ISO-8601 UTC with millisecond precision.
fn serialize_iso_millis<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
}

/// A book record as held by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: String,
    pub name: String,
    pub year: Option<Value>,
    pub author: Option<Value>,
    pub summary: Option<Value>,
    pub publisher: Option<Value>,
    pub page_count: u32,
    pub read_page: u32,
    /// Derived: `read_page == page_count` at the last write.
    pub finished: bool,
    pub reading: bool,
    #[serde(serialize_with = "serialize_iso_millis")]
    pub inserted_at: DateTime<Utc>,
    #[serde(serialize_with = "serialize_iso_millis")]
    pub updated_at: DateTime<Utc>,
}

impl Book {
    /// Build a fresh record from validated input.
    #[must_use]
    pub fn from_input(id: String, input: BookInput, now: DateTime<Utc>) -> Self {
        let mut book = Self {
            id,
            name: String::new(),
            year: None,
            author: None,
            summary: None,
            publisher: None,
            page_count: 0,
            read_page: 0,
            finished: false,
            reading: false,
            inserted_at: now,
            updated_at: now,
        };
        book.apply(input, now);
        book
    }

    /// Replace every mutable field with `input`, keeping `id` and `inserted_at`.
    pub fn apply(&mut self, input: BookInput, now: DateTime<Utc>) {
        self.name = input.name.unwrap_or_default();
        self.year = input.year;
        self.author = input.author;
        self.summary = input.summary;
        self.publisher = input.publisher;
        self.page_count = input.page_count;
        self.read_page = input.read_page;
        self.reading = input.reading;
        self.finished = self.read_page == self.page_count;
        self.updated_at = now;
    }

    /// Project to the listing shape.
    #[must_use]
    pub fn summary(&self) -> BookSummary {
        BookSummary::from(self)
    }
}

/// Client-supplied fields for create and update.
///
/// `year`, `author`, `summary` and `publisher` are stored as whatever JSON
/// value the client sent and echoed back unchanged.
///
/// `name` stays optional here so a missing name surfaces as a validation
/// failure instead of a deserialization error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookInput {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub year: Option<Value>,
    #[serde(default)]
    pub author: Option<Value>,
    #[serde(default)]
    pub summary: Option<Value>,
    #[serde(default)]
    pub publisher: Option<Value>,
    #[serde(default)]
    pub page_count: u32,
    #[serde(default)]
    pub read_page: u32,
    #[serde(default)]
    pub reading: bool,
}

impl BookInput {
    /// Input with just a name and page counters, the rest left empty.
    #[must_use]
    pub fn new(name: impl Into<String>, page_count: u32, read_page: u32) -> Self {
        Self {
            name: Some(name.into()),
            page_count,
            read_page,
            ..Default::default()
        }
    }
}

/// Listing projection of a book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookSummary {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher: Option<Value>,
}

impl From<&Book> for BookSummary {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id.clone(),
            name: book.name.clone(),
            publisher: book.publisher.clone(),
        }
    }
}
