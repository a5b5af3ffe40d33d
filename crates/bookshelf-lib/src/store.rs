//! In-memory book store backed by an ordered `Vec`.
//!
//! Provides the CRUD API for books without any database dependency.
//! Insertion order is preserved across every operation.

use std::sync::Arc;

use tracing::debug;

use crate::error::{BookshelfError, Result};
use crate::model::{Book, BookInput, BookSummary};
use crate::query::ListFilters;
use crate::util::{Clock, SystemClock, generate_id};
use crate::validation::BookValidator;

/// In-memory book store.
///
/// All data lives in memory and is lost when the store is dropped.
/// Callers sharing a store across threads wrap it in a single lock so each
/// operation runs as one atomic step.
pub struct BookStore {
    books: Vec<Book>,
    clock: Arc<dyn Clock>,
}

impl BookStore {
    // ========================================================================
    // Lifecycle
    // ========================================================================

    /// Create a new empty store using the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }

    /// Create a new empty store with a custom timestamp source.
    #[must_use]
    pub fn with_clock(clock: impl Clock + 'static) -> Self {
        Self {
            books: Vec::new(),
            clock: Arc::new(clock),
        }
    }

    // ========================================================================
    // CRUD
    // ========================================================================

    /// Add a new book and return its generated ID.
    ///
    /// # Errors
    ///
    /// Returns `Validation` if the name is missing or empty, or if
    /// `readPage` exceeds `pageCount`. The store is unchanged on error.
    pub fn create_book(&mut self, input: BookInput) -> Result<String> {
        BookValidator::validate(&input)?;

        let id = generate_id(|candidate| self.contains(candidate));
        let book = Book::from_input(id.clone(), input, self.clock.now());

        debug!(id = %book.id, name = %book.name, finished = book.finished, "Book created");
        self.books.push(book);

        Ok(id)
    }

    /// List books matching `filters`, projected to id/name/publisher.
    #[must_use]
    pub fn list_books(&self, filters: &ListFilters) -> Vec<BookSummary> {
        if filters.is_empty() {
            return self.books.iter().map(BookSummary::from).collect();
        }

        let matcher = filters.matcher();
        self.books
            .iter()
            .filter(|book| matcher.matches(book))
            .map(BookSummary::from)
            .collect()
    }

    /// Get a single book by ID.
    ///
    /// # Errors
    ///
    /// Returns `BookNotFound` if no book has that ID.
    pub fn get_book(&self, id: &str) -> Result<&Book> {
        self.books
            .iter()
            .find(|book| book.id == id)
            .ok_or_else(|| BookshelfError::not_found(id))
    }

    /// Replace every mutable field of a book.
    ///
    /// The payload is validated before the ID is looked up, so a malformed
    /// payload is rejected even for an unknown ID.
    ///
    /// # Errors
    ///
    /// Returns `Validation` for an invalid payload, or `BookNotFound` if
    /// the ID does not exist.
    pub fn update_book(&mut self, id: &str, input: BookInput) -> Result<Book> {
        BookValidator::validate(&input)?;

        let now = self.clock.now();
        let book = self
            .books
            .iter_mut()
            .find(|book| book.id == id)
            .ok_or_else(|| BookshelfError::not_found(id))?;

        book.apply(input, now);
        debug!(id, finished = book.finished, "Book updated");

        Ok(book.clone())
    }

    /// Delete a book, keeping the order of the remaining ones.
    ///
    /// # Errors
    ///
    /// Returns `BookNotFound` if the ID does not exist.
    pub fn delete_book(&mut self, id: &str) -> Result<()> {
        let index = self
            .books
            .iter()
            .position(|book| book.id == id)
            .ok_or_else(|| BookshelfError::not_found(id))?;

        self.books.remove(index);
        debug!(id, "Book deleted");

        Ok(())
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Whether a book with this ID exists.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.books.iter().any(|book| book.id == id)
    }

    /// All books in insertion order.
    #[must_use]
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.books.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

impl Default for BookStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for BookStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BookStore")
            .field("books", &self.books.len())
            .finish_non_exhaustive()
    }
}
