//! Hard-coded records standing in for a backend
//!
//! Each list is built once on first access and never mutated afterwards.

use crate::types::{
    AgentStatus, AgentType, CallOutcome, DashboardSnapshot, HeadlineStat, KnowledgeCategory,
    KnowledgeItem, KnowledgeStatus, KnowledgeType, NumberStatus, NumberType, PhoneNumber,
    RecentAgent, RecentCall, VoiceAgent,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::sync::LazyLock;

static PHONE_NUMBERS: LazyLock<Vec<PhoneNumber>> = LazyLock::new(|| {
    vec![
        phone_number(
            "1",
            "+1 (555) 123-4567",
            NumberType::Local,
            NumberStatus::Active,
            "New York, NY",
            date(2024, 1, 15),
            299,
            Some("Sales Assistant"),
        ),
        phone_number(
            "2",
            "+1 (800) 555-0123",
            NumberType::TollFree,
            NumberStatus::Active,
            "United States",
            date(2024, 2, 1),
            1599,
            Some("Customer Support"),
        ),
        phone_number(
            "3",
            "+1 (555) 987-6543",
            NumberType::Local,
            NumberStatus::Inactive,
            "Los Angeles, CA",
            date(2024, 1, 20),
            299,
            None,
        ),
        phone_number(
            "4",
            "+44 20 7946 0958",
            NumberType::International,
            NumberStatus::Pending,
            "London, UK",
            date(2024, 3, 10),
            899,
            None,
        ),
    ]
});

static VOICE_AGENTS: LazyLock<Vec<VoiceAgent>> = LazyLock::new(|| {
    vec![
        VoiceAgent {
            id: "1".to_string(),
            name: "Sales Assistant".to_string(),
            description: "Handles inbound sales calls and lead qualification".to_string(),
            status: AgentStatus::Active,
            agent_type: AgentType::Sales,
            calls_today: 23,
            total_calls: 1247,
            avg_duration_secs: 4 * 60 + 32,
            last_active_mins: 2,
        },
        VoiceAgent {
            id: "2".to_string(),
            name: "Customer Support".to_string(),
            description: "Provides customer support and technical assistance".to_string(),
            status: AgentStatus::Active,
            agent_type: AgentType::Support,
            calls_today: 18,
            total_calls: 892,
            avg_duration_secs: 6 * 60 + 15,
            last_active_mins: 5,
        },
        VoiceAgent {
            id: "3".to_string(),
            name: "Lead Qualifier".to_string(),
            description: "Qualifies incoming leads and schedules appointments".to_string(),
            status: AgentStatus::Inactive,
            agent_type: AgentType::Sales,
            calls_today: 0,
            total_calls: 456,
            avg_duration_secs: 3 * 60 + 45,
            last_active_mins: 120,
        },
        VoiceAgent {
            id: "4".to_string(),
            name: "Appointment Setter".to_string(),
            description: "Schedules appointments and manages calendar bookings".to_string(),
            status: AgentStatus::Training,
            agent_type: AgentType::General,
            calls_today: 5,
            total_calls: 123,
            avg_duration_secs: 2 * 60 + 18,
            last_active_mins: 10,
        },
    ]
});

static KNOWLEDGE_ITEMS: LazyLock<Vec<KnowledgeItem>> = LazyLock::new(|| {
    vec![
        KnowledgeItem {
            id: "1".to_string(),
            title: "Product Pricing Guide".to_string(),
            item_type: KnowledgeType::Document,
            category: KnowledgeCategory::Sales,
            description: "Complete guide to our product pricing and plans".to_string(),
            status: KnowledgeStatus::Active,
            last_updated: date(2024, 3, 15),
            usage_count: 156,
            file_size: Some("2.3 MB".to_string()),
        },
        KnowledgeItem {
            id: "2".to_string(),
            title: "Common Customer Questions".to_string(),
            item_type: KnowledgeType::Faq,
            category: KnowledgeCategory::Support,
            description: "Frequently asked questions and their answers".to_string(),
            status: KnowledgeStatus::Active,
            last_updated: date(2024, 3, 14),
            usage_count: 203,
            file_size: None,
        },
        KnowledgeItem {
            id: "3".to_string(),
            title: "Call Opening Scripts".to_string(),
            item_type: KnowledgeType::Script,
            category: KnowledgeCategory::Sales,
            description: "Standard scripts for opening sales calls".to_string(),
            status: KnowledgeStatus::Draft,
            last_updated: date(2024, 3, 10),
            usage_count: 45,
            file_size: None,
        },
        KnowledgeItem {
            id: "4".to_string(),
            title: "Customer API Integration".to_string(),
            item_type: KnowledgeType::Api,
            category: KnowledgeCategory::Technical,
            description: "API endpoints for customer data integration".to_string(),
            status: KnowledgeStatus::Active,
            last_updated: date(2024, 3, 12),
            usage_count: 78,
            file_size: None,
        },
        KnowledgeItem {
            id: "5".to_string(),
            title: "Refund Policy Document".to_string(),
            item_type: KnowledgeType::Document,
            category: KnowledgeCategory::Support,
            description: "Complete refund and return policy documentation".to_string(),
            status: KnowledgeStatus::Archived,
            last_updated: date(2024, 2, 28),
            usage_count: 34,
            file_size: Some("1.1 MB".to_string()),
        },
    ]
});

static DASHBOARD: LazyLock<DashboardSnapshot> = LazyLock::new(|| DashboardSnapshot {
    headline: vec![
        headline("Total Agents", "12", "+2 from last month"),
        headline("Active Calls", "3", "+1 from last hour"),
        headline("Total Calls Today", "127", "+15% from yesterday"),
        headline("Avg Call Duration", "3:24", "+12s from yesterday"),
    ],
    recent_agents: vec![
        recent_agent("Sales Assistant", AgentStatus::Active, 23),
        recent_agent("Customer Support", AgentStatus::Active, 18),
        recent_agent("Lead Qualifier", AgentStatus::Inactive, 12),
        recent_agent("Appointment Setter", AgentStatus::Active, 31),
    ],
    recent_calls: vec![
        recent_call("+1 (555) 123-4567", "Sales Assistant", 4 * 60 + 32, CallOutcome::Completed),
        recent_call("+1 (555) 987-6543", "Customer Support", 2 * 60 + 18, CallOutcome::Completed),
        recent_call("+1 (555) 456-7890", "Lead Qualifier", 60 + 45, CallOutcome::Missed),
        recent_call("+1 (555) 321-0987", "Sales Assistant", 6 * 60 + 12, CallOutcome::Completed),
    ],
});

/// Phone numbers owned by the demo account
#[must_use]
pub fn phone_numbers() -> &'static [PhoneNumber] {
    &PHONE_NUMBERS
}

/// Voice agents configured on the demo account
#[must_use]
pub fn voice_agents() -> &'static [VoiceAgent] {
    &VOICE_AGENTS
}

/// Knowledge base of the demo account
#[must_use]
pub fn knowledge_items() -> &'static [KnowledgeItem] {
    &KNOWLEDGE_ITEMS
}

/// Dashboard figures of the demo account
#[must_use]
pub fn dashboard() -> &'static DashboardSnapshot {
    &DASHBOARD
}

// An invalid literal maps to `NaiveDate::MIN`, which `test_fixture_dates_are_valid` rejects.
fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}

#[allow(clippy::too_many_arguments)]
fn phone_number(
    id: &str,
    number: &str,
    number_type: NumberType,
    status: NumberStatus,
    location: &str,
    purchase_date: NaiveDate,
    monthly_cents: i64,
    connected_agent: Option<&str>,
) -> PhoneNumber {
    PhoneNumber {
        id: id.to_string(),
        number: number.to_string(),
        number_type,
        status,
        location: location.to_string(),
        purchase_date,
        monthly_price: Decimal::new(monthly_cents, 2),
        connected_agent: connected_agent.map(str::to_string),
    }
}

fn headline(label: &str, value: &str, trend: &str) -> HeadlineStat {
    HeadlineStat {
        label: label.to_string(),
        value: value.to_string(),
        trend: trend.to_string(),
    }
}

fn recent_agent(name: &str, status: AgentStatus, calls_today: u32) -> RecentAgent {
    RecentAgent {
        name: name.to_string(),
        status,
        calls_today,
    }
}

fn recent_call(number: &str, agent: &str, duration_secs: u32, outcome: CallOutcome) -> RecentCall {
    RecentCall {
        number: number.to_string(),
        agent: agent.to_string(),
        duration_secs,
        outcome,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    fn assert_unique<'a>(ids: impl Iterator<Item = &'a str>) {
        let ids: Vec<&str> = ids.collect();
        let unique: HashSet<&str> = ids.iter().copied().collect();
        assert_eq!(unique.len(), ids.len(), "duplicate ids in {ids:?}");
    }

    #[test]
    fn test_ids_are_unique_per_list() {
        assert_unique(phone_numbers().iter().map(|r| r.id.as_str()));
        assert_unique(voice_agents().iter().map(|r| r.id.as_str()));
        assert_unique(knowledge_items().iter().map(|r| r.id.as_str()));
    }

    #[test]
    fn test_fixture_dates_are_valid() {
        assert_eq!(date(2024, 2, 30), NaiveDate::MIN);
        assert!(phone_numbers().iter().all(|r| r.purchase_date != NaiveDate::MIN));
        assert!(knowledge_items().iter().all(|r| r.last_updated != NaiveDate::MIN));
    }

    #[test]
    fn test_fixture_sizes() {
        assert_eq!(phone_numbers().len(), 4);
        assert_eq!(voice_agents().len(), 4);
        assert_eq!(knowledge_items().len(), 5);
        assert_eq!(dashboard().headline.len(), 4);
        assert_eq!(dashboard().recent_agents.len(), 4);
        assert_eq!(dashboard().recent_calls.len(), 4);
    }

    #[test]
    fn test_fixtures_are_shared() {
        assert!(std::ptr::eq(phone_numbers(), phone_numbers()));
    }
}
