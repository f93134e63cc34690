//! 404 Not Found page

use leptos::prelude::*;
use talkeriq_core::navigation::HOME_PATH;

/// 404 Not Found page component
#[component]
pub fn NotFound(path: String) -> impl IntoView {
    let detail = format!("No page lives at {path}.");

    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <h2>"Page Not Found"</h2>
            <p>"The page you are looking for does not exist."</p>
            <p class="not-found-path">{detail}</p>
            <a href=HOME_PATH class="btn btn-primary">"Return to Dashboard"</a>
        </div>
    }
}
