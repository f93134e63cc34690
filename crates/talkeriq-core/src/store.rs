//! Data access behind the list pages
//!
//! Pages never read fixtures directly; they go through a [`RecordSource`] so a
//! real backend can be dropped in without touching the views.

use crate::Result;
use crate::filter::{ListQuery, Searchable};
use crate::fixtures;
use crate::types::{DashboardSnapshot, KnowledgeItem, PhoneNumber, VoiceAgent};
use async_trait::async_trait;
use serde::Serialize;

/// Source of the records shown on the dashboard pages
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Every phone number on the account, in display order
    async fn phone_numbers(&self) -> Result<Vec<PhoneNumber>>;

    /// Every voice agent on the account, in display order
    async fn voice_agents(&self) -> Result<Vec<VoiceAgent>>;

    /// The whole knowledge base, in display order
    async fn knowledge_items(&self) -> Result<Vec<KnowledgeItem>>;

    /// Headline figures and recent activity
    async fn dashboard(&self) -> Result<DashboardSnapshot>;

    /// Name of the backing store, for logs and health output
    fn name(&self) -> &str;
}

/// Record source serving the built-in demo data
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureSource;

impl FixtureSource {
    /// Create a new fixture source
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl RecordSource for FixtureSource {
    async fn phone_numbers(&self) -> Result<Vec<PhoneNumber>> {
        Ok(fixtures::phone_numbers().to_vec())
    }

    async fn voice_agents(&self) -> Result<Vec<VoiceAgent>> {
        Ok(fixtures::voice_agents().to_vec())
    }

    async fn knowledge_items(&self) -> Result<Vec<KnowledgeItem>> {
        Ok(fixtures::knowledge_items().to_vec())
    }

    async fn dashboard(&self) -> Result<DashboardSnapshot> {
        Ok(fixtures::dashboard().clone())
    }

    fn name(&self) -> &str {
        "fixtures"
    }
}

/// A filtered view over a full record list
#[derive(Debug, Clone, Serialize)]
pub struct Listing<R> {
    /// Records that survived the query, in store order
    pub records: Vec<R>,
    /// Size of the unfiltered list
    pub total: usize,
    /// Number of surviving records
    pub matched: usize,
}

/// Narrow `records` with `query`, keeping the store order
#[must_use]
pub fn list_records<R: Searchable + Clone>(records: &[R], query: &ListQuery) -> Listing<R> {
    let matched: Vec<R> = query.apply(records).into_iter().cloned().collect();

    Listing {
        total: records.len(),
        matched: matched.len(),
        records: matched,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_fixture_source_serves_fixtures() {
        let source = FixtureSource::new();

        assert_eq!(source.phone_numbers().await.unwrap().len(), 4);
        assert_eq!(source.voice_agents().await.unwrap().len(), 4);
        assert_eq!(source.knowledge_items().await.unwrap().len(), 5);
        assert_eq!(source.dashboard().await.unwrap().recent_calls.len(), 4);
        assert_eq!(source.name(), "fixtures");
    }

    #[tokio::test]
    async fn test_list_records_reports_totals() {
        let source = FixtureSource::new();
        let agents = source.voice_agents().await.unwrap();

        let listing = list_records(&agents, &ListQuery::new("", "active"));

        assert_eq!(listing.total, 4);
        assert_eq!(listing.matched, 2);
        assert_eq!(listing.records.len(), 2);
    }

    #[tokio::test]
    async fn test_listing_does_not_mutate_source() {
        let source = FixtureSource::new();
        let before = source.phone_numbers().await.unwrap();

        let _ = list_records(&before, &ListQuery::new("zzz", "all"));

        assert_eq!(source.phone_numbers().await.unwrap(), before);
    }

    #[test]
    fn test_source_is_object_safe() {
        let source: Box<dyn RecordSource> = Box::new(FixtureSource::new());
        assert_eq!(source.name(), "fixtures");
    }
}
