//! Sign-in page, rendered without the sidebar

use crate::components::{Notice, Toast};
use leptos::prelude::*;
use talkeriq_core::navigation::LOGIN_PATH;

/// Link that flips password visibility
#[must_use]
pub fn visibility_href(show_password: bool) -> String {
    if show_password {
        LOGIN_PATH.to_string()
    } else {
        format!("{LOGIN_PATH}?show_password=true")
    }
}

/// Email and password form
#[component]
pub fn LoginPage(
    /// Email to prefill after a failed attempt
    email: String,
    /// Render the password in clear text
    show_password: bool,
    notice: Option<Notice>,
) -> impl IntoView {
    let password_type = if show_password { "text" } else { "password" };
    let toggle_label = if show_password {
        "Hide password"
    } else {
        "Show password"
    };
    let toggle_href = visibility_href(show_password);
    let toast = notice.map(|notice| view! { <Toast notice=notice/> });

    view! {
        <div class="login-shell">
            <div class="login-panel">
                <div class="login-brand">
                    <span class="login-brand-mark">"\u{25C9}"</span>
                    <span class="login-brand-text">"TalkerIQ"</span>
                </div>
                <h1 class="login-title">"Welcome to TalkerIQ"</h1>
                <p class="login-subtitle">
                    "Sign in to your account to manage your AI voice agents"
                </p>

                <div class="card login-card">
                    <h2 class="card-title">"Sign In"</h2>
                    <form method="post" action=LOGIN_PATH class="login-form">
                        <div class="field">
                            <label for="email">"Email address"</label>
                            <input
                                type="email"
                                id="email"
                                name="email"
                                placeholder="Enter your email"
                                value=email
                            />
                        </div>
                        <div class="field">
                            <label for="password">"Password"</label>
                            <div class="password-field">
                                <input
                                    type=password_type
                                    id="password"
                                    name="password"
                                    placeholder="Enter your password"
                                />
                                <a href=toggle_href class="password-toggle" aria-label=toggle_label>
                                    "\u{1F441}"
                                </a>
                            </div>
                        </div>
                        <div class="login-links">
                            <a href="/forgot-password">"Forgot your password?"</a>
                        </div>
                        <button type="submit" class="btn btn-primary btn-block">"Sign in"</button>
                    </form>
                    <p class="login-signup">
                        "Don't have an account? " <a href="/signup">"Sign up"</a>
                    </p>
                </div>

                <p class="login-footer">"\u{00A9} 2024 TalkerIQ. All rights reserved."</p>
            </div>
            {toast}
        </div>
    }
}
