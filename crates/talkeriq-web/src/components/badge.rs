//! Pill-shaped labels for statuses and categories

use leptos::prelude::*;
use talkeriq_core::types::{AgentStatus, KnowledgeStatus, NumberStatus};

/// Colour scheme of a badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Green, for records in service
    Success,
    /// Grey, for records switched off
    Muted,
    /// Amber, for records in flux
    Warning,
    /// Bordered, for the record's kind
    Outline,
    /// Filled grey, for secondary tags
    Secondary,
}

impl Tone {
    /// CSS classes for this tone
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Success => "badge badge-success",
            Self::Muted => "badge badge-muted",
            Self::Warning => "badge badge-warning",
            Self::Outline => "badge badge-outline",
            Self::Secondary => "badge badge-secondary",
        }
    }
}

/// Statuses that pick their own badge colour
pub trait StatusTone {
    /// Colour for this status
    fn tone(&self) -> Tone;
}

impl StatusTone for NumberStatus {
    fn tone(&self) -> Tone {
        match self {
            Self::Active => Tone::Success,
            Self::Inactive => Tone::Muted,
            Self::Pending => Tone::Warning,
        }
    }
}

impl StatusTone for AgentStatus {
    fn tone(&self) -> Tone {
        match self {
            Self::Active => Tone::Success,
            Self::Inactive => Tone::Muted,
            Self::Training => Tone::Warning,
        }
    }
}

impl StatusTone for KnowledgeStatus {
    fn tone(&self) -> Tone {
        match self {
            Self::Active => Tone::Success,
            Self::Draft => Tone::Warning,
            Self::Archived => Tone::Muted,
        }
    }
}

/// A single badge
#[component]
pub fn Badge(label: &'static str, tone: Tone) -> impl IntoView {
    let class_name = tone.class();

    view! { <span class=class_name>{label}</span> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_status_tones() {
        assert_eq!(NumberStatus::Pending.tone(), Tone::Warning);
        assert_eq!(AgentStatus::Training.tone(), Tone::Warning);
        assert_eq!(KnowledgeStatus::Archived.tone(), Tone::Muted);
        assert_eq!(AgentStatus::Active.tone(), Tone::Success);
    }

    #[test]
    fn test_badge_renders_label_and_class() {
        let html = view! { <Badge label="Active" tone=Tone::Success/> }.to_html();

        assert!(html.contains("badge-success"));
        assert!(html.contains("Active"));
    }
}
