//! Sections that are linked from the sidebar but not built yet

use leptos::prelude::*;
use talkeriq_core::navigation::Placeholder;

/// Title plus a "coming soon" line
#[component]
pub fn PlaceholderPage(placeholder: Placeholder) -> impl IntoView {
    view! {
        <div class="page">
            <div class="page-header">
                <h1 class="page-title">{placeholder.title()}</h1>
            </div>
            <div class="card">
                <p class="placeholder-message">{placeholder.message()}</p>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_placeholder_renders_its_message() {
        for placeholder in Placeholder::ALL {
            let html = view! { <PlaceholderPage placeholder=placeholder/> }.to_html();

            assert!(html.contains(placeholder.title()));
            assert!(html.contains(placeholder.message()));
        }
    }
}
