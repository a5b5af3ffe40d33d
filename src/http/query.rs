//! Query-string parsing for `GET /books`.

use bookshelf_lib::ListFilters;

/// Raw `name`, `reading` and `finished` query parameters.
///
/// Empty values count as absent. `reading`/`finished` are true only for the
/// literal `"1"`; any other non-empty value means false.
#[derive(Debug, Clone, Default)]
pub struct ListQuery {
    pub name: Option<String>,
    pub reading: Option<String>,
    pub finished: Option<String>,
}

impl ListQuery {
    /// Collect from decoded key/value pairs.
    ///
    /// A repeated key keeps its first value; unknown keys are ignored.
    #[must_use]
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "name" => &mut query.name,
                "reading" => &mut query.reading,
                "finished" => &mut query.finished,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        query
    }
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn flag(value: Option<String>) -> Option<bool> {
    present(value).map(|v| v == "1")
}

impl From<ListQuery> for ListFilters {
    fn from(query: ListQuery) -> Self {
        Self {
            name_contains: present(query.name),
            reading: flag(query.reading),
            finished: flag(query.finished),
        }
    }
}
