//! Figures derived from a full, unfiltered record list

use crate::types::{
    AgentStatus, KnowledgeCategory, KnowledgeItem, KnowledgeStatus, NumberStatus, PhoneNumber,
    VoiceAgent,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::iter::Sum;

/// Count the records satisfying `predicate`
pub fn count_where<R>(records: &[R], predicate: impl Fn(&R) -> bool) -> usize {
    records.iter().filter(|record| predicate(*record)).count()
}

/// Sum `value` over the records satisfying `predicate`
pub fn sum_where<R, T>(
    records: &[R],
    predicate: impl Fn(&R) -> bool,
    value: impl Fn(&R) -> T,
) -> T
where
    T: Sum<T>,
{
    records
        .iter()
        .filter(|record| predicate(*record))
        .map(value)
        .sum()
}

/// Stat cards on the phone numbers page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhoneNumberStats {
    /// Numbers in service
    pub active_numbers: usize,
    /// Monthly rental of the numbers in service
    pub monthly_cost: Decimal,
    /// Countries covered by the account's plan
    pub countries_covered: u32,
}

impl PhoneNumberStats {
    /// Countries covered by the demo account's calling plan
    pub const COUNTRIES_COVERED: u32 = 4;

    /// Derive the figures from every phone number on the account
    #[must_use]
    pub fn from_records(numbers: &[PhoneNumber]) -> Self {
        let is_active = |n: &PhoneNumber| n.status == NumberStatus::Active;

        Self {
            active_numbers: count_where(numbers, is_active),
            monthly_cost: sum_where(numbers, is_active, |n| n.monthly_price),
            countries_covered: Self::COUNTRIES_COVERED,
        }
    }
}

/// Stat cards on the voice agents page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentStats {
    /// Agents ready to take calls
    pub active_agents: usize,
    /// Calls handled today across all agents
    pub calls_today: u64,
    /// Average time to answer
    pub avg_response_time: String,
    /// Share of calls reaching a successful outcome
    pub success_rate: String,
}

impl AgentStats {
    /// Derive the figures from every agent on the account
    #[must_use]
    pub fn from_records(agents: &[VoiceAgent]) -> Self {
        Self {
            active_agents: count_where(agents, |a| a.status == AgentStatus::Active),
            calls_today: sum_where(agents, |_| true, |a| u64::from(a.calls_today)),
            // Call quality figures come from telephony analytics, not the agent list
            avg_response_time: "1.2s".to_string(),
            success_rate: "94.5%".to_string(),
        }
    }
}

/// Stat cards on the knowledge base page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KnowledgeStats {
    /// Every entry, whatever its status
    pub total_items: usize,
    /// Entries available to agents
    pub active_items: usize,
    /// Topics entries can be filed under
    pub categories: usize,
    /// Times entries were consulted
    pub total_usage: u64,
}

impl KnowledgeStats {
    /// Derive the figures from the whole knowledge base
    #[must_use]
    pub fn from_records(items: &[KnowledgeItem]) -> Self {
        Self {
            total_items: items.len(),
            active_items: count_where(items, |i| i.status == KnowledgeStatus::Active),
            categories: KnowledgeCategory::ALL.len(),
            total_usage: sum_where(items, |_| true, |i| u64::from(i.usage_count)),
        }
    }
}
