//! Core record types for the TalkerIQ dashboard

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Opaque record identifier, unique within its list
pub type RecordId = String;

/// Kind of phone number
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum NumberType {
    /// Local number
    Local,
    /// Toll-free number
    #[serde(rename = "Toll-Free")]
    TollFree,
    /// International number
    International,
}

impl NumberType {
    /// Every number type, in menu order
    pub const ALL: [Self; 3] = [Self::Local, Self::TollFree, Self::International];

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Local => "Local",
            Self::TollFree => "Toll-Free",
            Self::International => "International",
        }
    }
}

/// Provisioning state of a phone number
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum NumberStatus {
    /// In service
    Active,
    /// Out of service
    Inactive,
    /// Awaiting provisioning
    Pending,
}

impl NumberStatus {
    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
            Self::Pending => "Pending",
        }
    }
}

/// A phone number owned by the account
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PhoneNumber {
    /// Unique identifier
    pub id: RecordId,
    /// Number in display format
    pub number: String,
    /// Number type
    #[serde(rename = "type")]
    pub number_type: NumberType,
    /// Provisioning status
    pub status: NumberStatus,
    /// City or country the number belongs to
    pub location: String,
    /// Date of purchase
    pub purchase_date: NaiveDate,
    /// Monthly rental in USD
    pub monthly_price: Decimal,
    /// Display name of the agent answering this number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connected_agent: Option<String>,
}

/// Operating state of a voice agent
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum AgentStatus {
    /// Taking calls
    Active,
    /// Paused
    Inactive,
    /// Still being trained
    Training,
}

impl AgentStatus {
    /// Every agent status, in menu order
    pub const ALL: [Self; 3] = [Self::Active, Self::Inactive, Self::Training];

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
            Self::Training => "Training",
        }
    }
}

/// Role a voice agent is built for
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum AgentType {
    /// Sales calls
    Sales,
    /// Customer support
    Support,
    /// General purpose
    General,
}

impl AgentType {
    /// Every agent type, in menu order
    pub const ALL: [Self; 3] = [Self::Sales, Self::Support, Self::General];

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Sales => "Sales",
            Self::Support => "Support",
            Self::General => "General",
        }
    }
}

/// An AI voice agent
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VoiceAgent {
    /// Unique identifier
    pub id: RecordId,
    /// Agent name
    pub name: String,
    /// What the agent does
    pub description: String,
    /// Operating status
    pub status: AgentStatus,
    /// Agent role
    #[serde(rename = "type")]
    pub agent_type: AgentType,
    /// Calls handled since midnight
    pub calls_today: u32,
    /// Calls handled overall
    pub total_calls: u32,
    /// Average call length in seconds
    pub avg_duration_secs: u32,
    /// Minutes since the agent last handled a call
    pub last_active_mins: u32,
}

/// Format of a knowledge base entry
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum KnowledgeType {
    /// Uploaded document
    Document,
    /// Question and answer pairs
    #[serde(rename = "FAQ")]
    Faq,
    /// Call script
    Script,
    /// API reference
    #[serde(rename = "API")]
    Api,
}

impl KnowledgeType {
    /// Every knowledge type, in menu order
    pub const ALL: [Self; 4] = [Self::Document, Self::Faq, Self::Script, Self::Api];

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Document => "Document",
            Self::Faq => "FAQ",
            Self::Script => "Script",
            Self::Api => "API",
        }
    }
}

/// Topic a knowledge base entry is filed under
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum KnowledgeCategory {
    /// Sales material
    Sales,
    /// Support material
    Support,
    /// Technical material
    Technical,
    /// Everything else
    General,
}

impl KnowledgeCategory {
    /// Every category, in menu order
    pub const ALL: [Self; 4] = [Self::Sales, Self::Support, Self::Technical, Self::General];

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Sales => "Sales",
            Self::Support => "Support",
            Self::Technical => "Technical",
            Self::General => "General",
        }
    }
}

/// Publication state of a knowledge base entry
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum KnowledgeStatus {
    /// Available to agents
    Active,
    /// Work in progress
    Draft,
    /// Retired
    Archived,
}

impl KnowledgeStatus {
    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Draft => "Draft",
            Self::Archived => "Archived",
        }
    }
}

/// A knowledge base entry agents draw on during calls
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct KnowledgeItem {
    /// Unique identifier
    pub id: RecordId,
    /// Entry title
    pub title: String,
    /// Entry format
    #[serde(rename = "type")]
    pub item_type: KnowledgeType,
    /// Topic
    pub category: KnowledgeCategory,
    /// Short summary
    pub description: String,
    /// Publication status
    pub status: KnowledgeStatus,
    /// Date of the last edit
    pub last_updated: NaiveDate,
    /// Times agents consulted this entry
    pub usage_count: u32,
    /// Human readable size for uploaded files
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_size: Option<String>,
}

/// How a recent call ended
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CallOutcome {
    /// Call was answered and finished
    Completed,
    /// Call was not answered
    Missed,
}

impl CallOutcome {
    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Completed => "Completed",
            Self::Missed => "Missed",
        }
    }
}

/// One headline figure on the dashboard
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HeadlineStat {
    /// Card title
    pub label: String,
    /// Rendered value
    pub value: String,
    /// Trend note under the value
    pub trend: String,
}

/// Agent row in the dashboard's recent agents card
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RecentAgent {
    /// Agent name
    pub name: String,
    /// Operating status
    pub status: AgentStatus,
    /// Calls handled since midnight
    pub calls_today: u32,
}

/// Call row in the dashboard's recent calls card
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RecentCall {
    /// Caller number in display format
    pub number: String,
    /// Agent that took the call
    pub agent: String,
    /// Call length in seconds
    pub duration_secs: u32,
    /// Outcome
    pub outcome: CallOutcome,
}

/// Everything the dashboard page shows
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    /// Headline cards
    pub headline: Vec<HeadlineStat>,
    /// Recently active agents
    pub recent_agents: Vec<RecentAgent>,
    /// Most recent calls
    pub recent_calls: Vec<RecentCall>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_enum_labels_match_serde_names() {
        for number_type in NumberType::ALL {
            let json = serde_json::to_string(&number_type).unwrap();
            assert_eq!(json, format!("\"{}\"", number_type.label()));
        }
        for item_type in KnowledgeType::ALL {
            let json = serde_json::to_string(&item_type).unwrap();
            assert_eq!(json, format!("\"{}\"", item_type.label()));
        }
        for status in AgentStatus::ALL {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.label()));
        }
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        let result = serde_json::from_str::<NumberStatus>("\"Suspended\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_phone_number_json_shape() {
        let number = PhoneNumber {
            id: "9".to_string(),
            number: "+1 (555) 000-0000".to_string(),
            number_type: NumberType::TollFree,
            status: NumberStatus::Pending,
            location: "Austin, TX".to_string(),
            purchase_date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            monthly_price: Decimal::new(499, 2),
            connected_agent: None,
        };

        let value = serde_json::to_value(&number).unwrap();

        assert_eq!(value["type"], "Toll-Free");
        assert_eq!(value["purchaseDate"], "2024-05-01");
        assert_eq!(value["monthlyPrice"], "4.99");
        assert!(value.get("connectedAgent").is_none());
    }
}
