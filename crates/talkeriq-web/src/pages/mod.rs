//! Page components for the web interface

pub mod dashboard;
pub mod knowledge_base;
pub mod login;
pub mod not_found;
pub mod phone_numbers;
pub mod placeholder;
pub mod voice_agents;

use crate::components::{Layout, render_document};
use axum::response::Html;
use leptos::prelude::*;

/// Render `content` inside the sidebar layout as a full HTML document
pub fn render_page(
    title: &str,
    current_path: &str,
    content: impl IntoView + Send + 'static,
) -> Html<String> {
    let current_path = current_path.to_string();
    let body = view! { <Layout current_path=current_path>{content}</Layout> };

    Html(render_document(title, body))
}
