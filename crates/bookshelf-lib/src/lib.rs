//! `bookshelf-lib` — In-process book collection store.
//!
//! Provides a standalone API for managing book records held entirely in
//! memory: create with derived fields, filtered listing, lookup, full-field
//! update and deletion.
//!
//! # Quick Start
//!
//! ```
//! use bookshelf_lib::{BookInput, BookStore, ListFilters};
//!
//! let mut store = BookStore::new();
//!
//! // Create
//! let id = store.create_book(BookInput::new("The Hobbit", 310, 310)).unwrap();
//!
//! // Query
//! assert!(store.get_book(&id).unwrap().finished);
//! let finished = store.list_books(&ListFilters::default().with_finished(true));
//! assert_eq!(finished.len(), 1);
//!
//! // Update
//! store.update_book(&id, BookInput::new("The Hobbit", 310, 12)).unwrap();
//!
//! // Delete
//! store.delete_book(&id).unwrap();
//! assert!(store.is_empty());
//! ```

pub mod error;
pub mod model;
pub mod query;
pub mod store;
pub mod util;
pub mod validation;

pub use error::{BookshelfError, Result, ValidationError};
pub use model::{Book, BookInput, BookSummary};
pub use query::ListFilters;
pub use store::BookStore;
pub use util::{Clock, SystemClock};
