//! Request handlers and the query parameters they share

pub mod api;
pub mod assets;
pub mod auth;
pub mod pages;

use crate::components::Notice;
use crate::components::dialog::OPEN_DIALOG;
use crate::error::WebError;
use serde::Deserialize;
use talkeriq_core::ListQuery;
use validator::Validate;

/// Query string accepted by the list pages and their JSON twins
#[derive(Debug, Default, Deserialize, Validate)]
pub struct ListParams {
    /// Free-text search
    #[serde(default)]
    #[validate(length(max = 200))]
    pub search: String,
    /// Category filter on phone numbers and knowledge items
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Status filter on voice agents
    pub status: Option<String>,
    /// `new` opens the create dialog
    pub dialog: Option<String>,
    /// One-shot toast to show
    pub notice: Option<String>,
}

impl ListParams {
    /// Reject parameters that fail validation
    ///
    /// # Errors
    ///
    /// Returns [`WebError::InvalidQuery`] when the search text is too long.
    pub fn validated(self) -> Result<Self, WebError> {
        self.validate()?;
        Ok(self)
    }

    /// Search plus the `type` filter
    #[must_use]
    pub fn query_by_type(&self) -> ListQuery {
        ListQuery::new(&self.search, self.kind.as_deref().unwrap_or_default())
    }

    /// Search plus the `status` filter
    #[must_use]
    pub fn query_by_status(&self) -> ListQuery {
        ListQuery::new(&self.search, self.status.as_deref().unwrap_or_default())
    }

    /// Whether the create dialog should be shown
    #[must_use]
    pub fn dialog_open(&self) -> bool {
        self.dialog.as_deref() == Some(OPEN_DIALOG)
    }

    /// Toast requested by the previous redirect
    #[must_use]
    pub fn notice(&self) -> Option<Notice> {
        self.notice.as_deref().and_then(Notice::from_query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn params(search: &str) -> ListParams {
        ListParams {
            search: search.to_string(),
            ..ListParams::default()
        }
    }

    #[test]
    fn test_defaults_match_everything() {
        let query = ListParams::default().query_by_type();

        assert!(query.is_wildcard());
        assert!(!query.is_narrowed());
    }

    #[test]
    fn test_long_search_is_rejected() {
        assert!(params(&"x".repeat(201)).validated().is_err());
        assert!(params(&"x".repeat(200)).validated().is_ok());
    }

    #[test]
    fn test_filters_pick_their_own_parameter() {
        let params = ListParams {
            kind: Some("faq".to_string()),
            status: Some("training".to_string()),
            ..ListParams::default()
        };

        assert_eq!(params.query_by_type().category(), "faq");
        assert_eq!(params.query_by_status().category(), "training");
    }

    #[test]
    fn test_dialog_and_notice_flags() {
        let params = ListParams {
            dialog: Some("new".to_string()),
            notice: Some("signed-in".to_string()),
            ..ListParams::default()
        };

        assert!(params.dialog_open());
        assert_eq!(params.notice(), Some(Notice::SignedIn));
        assert!(!ListParams::default().dialog_open());
    }
}
