//! Placeholder shown when a list has nothing to display

use leptos::prelude::*;

/// Message shown when the user's search or filter excluded everything
pub const NARROWED_MESSAGE: &str = "Try adjusting your search or filter criteria.";

/// Pick the empty-state line: "nothing matches" versus "nothing yet"
#[must_use]
pub const fn empty_message(narrowed: bool, get_started: &'static str) -> &'static str {
    if narrowed { NARROWED_MESSAGE } else { get_started }
}

/// Centered icon, title and hint
#[component]
pub fn EmptyState(title: &'static str, message: &'static str, icon: &'static str) -> impl IntoView {
    view! {
        <div class="empty-state">
            <div class="empty-state-icon">{icon}</div>
            <h3 class="empty-state-title">{title}</h3>
            <p class="empty-state-message">{message}</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_message_branches() {
        let start = "Get started by adding your first knowledge item.";

        assert_eq!(empty_message(true, start), NARROWED_MESSAGE);
        assert_eq!(empty_message(false, start), start);
    }
}
