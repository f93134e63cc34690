//! Page chrome: HTML document and the sidebar layout

use super::sidebar::Sidebar;
use leptos::prelude::*;

/// Sidebar on the left, page content on the right
#[component]
pub fn Layout(
    /// Path of the page being rendered, for sidebar highlighting
    current_path: String,
    /// Page content
    children: Children,
) -> impl IntoView {
    view! {
        <div class="app-shell">
            <Sidebar current_path=current_path/>
            <main class="main">{children()}</main>
        </div>
    }
}

/// Render a complete HTML document around `body`
pub fn render_document(title: &str, body: impl IntoView + 'static) -> String {
    let full_title = format!("{title} | TalkerIQ");

    let document = view! {
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <title>{full_title}</title>
                <link rel="stylesheet" href="/assets/app.css"/>
            </head>
            <body>{body}</body>
        </html>
    };

    format!("<!DOCTYPE html>{}", document.to_html())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_wraps_body() {
        let html = render_document("Dashboard", view! { <p>"hello"</p> });

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("Dashboard | TalkerIQ"));
        assert!(html.contains("/assets/app.css"));
        assert!(html.contains("hello"));
    }

    #[test]
    fn test_layout_includes_sidebar() {
        let current_path = "/billing".to_string();
        let html = view! {
            <Layout current_path=current_path>
                <h1>"Billing"</h1>
            </Layout>
        }
        .to_html();

        assert!(html.contains("sidebar"));
        assert!(html.contains("<main"));
        assert!(html.contains("Billing"));
    }
}
