//! Client-style list filtering: free-text search AND category selection

use crate::types::{KnowledgeItem, PhoneNumber, VoiceAgent};

/// Category token that matches every record
pub const WILDCARD: &str = "all";

/// A record that can be narrowed by a search box and a category selector
pub trait Searchable {
    /// Label of the field the category selector compares against
    fn category_label(&self) -> &str;

    /// Fields the search box looks into
    fn search_fields(&self) -> Vec<&str>;
}

impl Searchable for PhoneNumber {
    fn category_label(&self) -> &str {
        self.number_type.label()
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.number.as_str(), self.location.as_str()]
    }
}

impl Searchable for VoiceAgent {
    fn category_label(&self) -> &str {
        self.status.label()
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.description.as_str()]
    }
}

impl Searchable for KnowledgeItem {
    fn category_label(&self) -> &str {
        self.item_type.label()
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.title.as_str(),
            self.description.as_str(),
            self.category.label(),
        ]
    }
}

/// Search text plus category token, as typed into a list page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    search: String,
    needle: String,
    category: String,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self::all()
    }
}

impl ListQuery {
    /// Build a query; the search text is trimmed and an empty token means "all"
    pub fn new(search: impl AsRef<str>, category: impl AsRef<str>) -> Self {
        let search = search.as_ref().trim().to_string();
        let needle = search.to_lowercase();
        let category = match category.as_ref().trim() {
            "" => WILDCARD.to_string(),
            token => token.to_lowercase(),
        };

        Self {
            search,
            needle,
            category,
        }
    }

    /// The query that matches everything
    #[must_use]
    pub fn all() -> Self {
        Self {
            search: String::new(),
            needle: String::new(),
            category: WILDCARD.to_string(),
        }
    }

    /// Trimmed search text as entered
    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Lowercased category token
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Whether the category selector is on the wildcard
    #[must_use]
    pub fn is_wildcard(&self) -> bool {
        self.category == WILDCARD
    }

    /// Whether the user has narrowed the list in any way
    ///
    /// Drives the empty-state wording: "nothing matches" versus "nothing yet".
    #[must_use]
    pub fn is_narrowed(&self) -> bool {
        !self.search.is_empty() || !self.is_wildcard()
    }

    /// Evaluate the predicate for one record
    pub fn matches<R: Searchable + ?Sized>(&self, record: &R) -> bool {
        let category_ok =
            self.is_wildcard() || record.category_label().to_lowercase() == self.category;

        category_ok
            && (self.needle.is_empty()
                || record
                    .search_fields()
                    .iter()
                    .any(|field| field.to_lowercase().contains(&self.needle)))
    }

    /// Records that survive the predicate, in their original order
    pub fn apply<'a, R: Searchable>(&self, records: &'a [R]) -> Vec<&'a R> {
        records.iter().filter(|record| self.matches(*record)).collect()
    }
}

/// One-shot form of [`ListQuery::matches`]
pub fn matches<R: Searchable + ?Sized>(record: &R, search: &str, category: &str) -> bool {
    ListQuery::new(search, category).matches(record)
}
