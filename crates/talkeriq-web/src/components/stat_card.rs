//! Summary figure card shown above the lists

use leptos::prelude::*;

/// One headline figure with a short note underneath
#[component]
pub fn StatCard(
    /// Card title
    #[prop(into)]
    title: String,
    /// The figure itself
    #[prop(into)]
    value: String,
    /// Context line under the figure
    #[prop(into)]
    note: String,
    /// Glyph in the card corner
    icon: &'static str,
) -> impl IntoView {
    view! {
        <div class="card stat-card">
            <div class="stat-card-header">
                <h3 class="stat-card-title">{title}</h3>
                <span class="stat-card-icon">{icon}</span>
            </div>
            <div class="stat-card-value">{value}</div>
            <p class="stat-card-note">{note}</p>
        </div>
    }
}
