//! Filter types for listing books.

use regex::{Regex, RegexBuilder};

use crate::model::Book;

/// Filter options for listing books.
///
/// Every supplied criterion must match (logical AND). With no criteria the
/// listing returns every book.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListFilters {
    /// Case-insensitive pattern matched anywhere in the name.
    pub name_contains: Option<String>,
    pub reading: Option<bool>,
    pub finished: Option<bool>,
}

impl ListFilters {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name_contains.is_none() && self.reading.is_none() && self.finished.is_none()
    }

    #[must_use]
    pub fn with_name(mut self, pattern: impl Into<String>) -> Self {
        self.name_contains = Some(pattern.into());
        self
    }

    #[must_use]
    pub const fn with_reading(mut self, reading: bool) -> Self {
        self.reading = Some(reading);
        self
    }

    #[must_use]
    pub const fn with_finished(mut self, finished: bool) -> Self {
        self.finished = Some(finished);
        self
    }

    /// Compile into a predicate over books.
    #[must_use]
    pub fn matcher(&self) -> BookMatcher {
        BookMatcher {
            name: self.name_contains.as_deref().map(name_pattern),
            reading: self.reading,
            finished: self.finished,
        }
    }
}

/// Compiled form of [`ListFilters`].
#[derive(Debug, Clone)]
pub struct BookMatcher {
    name: Option<NamePattern>,
    reading: Option<bool>,
    finished: Option<bool>,
}

#[derive(Debug, Clone)]
enum NamePattern {
    Regex(Regex),
    /// The fragment could not be compiled even as a literal.
    Never,
}

impl BookMatcher {
    #[must_use]
    pub fn matches(&self, book: &Book) -> bool {
        match self.name {
            Some(NamePattern::Regex(ref pattern)) if !pattern.is_match(&book.name) => {
                return false;
            }
            Some(NamePattern::Never) => return false,
            _ => {}
        }

        if let Some(reading) = self.reading {
            if book.reading != reading {
                return false;
            }
        }

        if let Some(finished) = self.finished {
            if book.finished != finished {
                return false;
            }
        }

        true
    }
}

/// Build a case-insensitive regex from a user fragment.
///
/// Fragments that are not valid regex syntax are matched literally.
fn name_pattern(fragment: &str) -> NamePattern {
    let build = |source: &str| RegexBuilder::new(source).case_insensitive(true).build();
    build(fragment)
        .or_else(|_| build(&regex::escape(fragment)))
        .map_or_else(
            |e| {
                tracing::warn!(fragment, error = %e, "Name filter rejected");
                NamePattern::Never
            },
            NamePattern::Regex,
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BookInput;
    use chrono::Utc;

    fn book(name: &str, reading: bool, page_count: u32, read_page: u32) -> Book {
        let mut input = BookInput::new(name, page_count, read_page);
        input.reading = reading;
        Book::from_input(format!("id-{name}"), input, Utc::now())
    }

    #[test]
    fn test_empty_filters_match_everything() {
        let filters = ListFilters::default();
        assert!(filters.is_empty());
        assert!(filters.matcher().matches(&book("Anything", false, 1, 0)));
    }

    #[test]
    fn test_name_is_case_insensitive() {
        let matcher = ListFilters::default().with_name("dicoding").matcher();
        assert!(matcher.matches(&book("Belajar Dicoding", false, 1, 0)));
        assert!(matcher.matches(&book("DICODING", false, 1, 0)));
        assert!(!matcher.matches(&book("Rust", false, 1, 0)));
    }

    #[test]
    fn test_name_accepts_regex_fragment() {
        let matcher = ListFilters::default().with_name("^the").matcher();
        assert!(matcher.matches(&book("The Hobbit", false, 1, 0)));
        assert!(!matcher.matches(&book("Into the Wild", false, 1, 0)));
    }

    #[test]
    fn test_invalid_regex_falls_back_to_literal() {
        let matcher = ListFilters::default().with_name("c++ (").matcher();
        assert!(matcher.matches(&book("Learning C++ (3rd ed)", false, 1, 0)));
        assert!(!matcher.matches(&book("Learning C", false, 1, 0)));
    }

    #[test]
    fn test_criteria_are_and_combined() {
        let matcher = ListFilters::default()
            .with_reading(true)
            .with_finished(true)
            .matcher();
        assert!(matcher.matches(&book("A", true, 5, 5)));
        assert!(!matcher.matches(&book("B", true, 5, 1)));
        assert!(!matcher.matches(&book("C", false, 5, 5)));
    }
}
