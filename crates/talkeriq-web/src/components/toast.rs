//! One-shot notifications

use leptos::prelude::*;

/// Notification carried across a redirect in the `notice` query parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// Login went through
    SignedIn,
    /// Login was rejected
    LoginFailed,
}

impl Notice {
    /// Query value for [`Notice::SignedIn`]
    pub const SIGNED_IN: &'static str = "signed-in";

    /// Parse a `notice` query value; unknown values show nothing
    #[must_use]
    pub fn from_query(value: &str) -> Option<Self> {
        match value {
            Self::SIGNED_IN => Some(Self::SignedIn),
            "login-failed" => Some(Self::LoginFailed),
            _ => None,
        }
    }

    /// Bold first line
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::SignedIn => "Login successful",
            Self::LoginFailed => "Login failed",
        }
    }

    /// Second line
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::SignedIn => "Welcome back to TalkerIQ!",
            Self::LoginFailed => "Please enter valid credentials.",
        }
    }

    /// Whether the toast reports a failure
    #[must_use]
    pub const fn is_destructive(self) -> bool {
        matches!(self, Self::LoginFailed)
    }
}

/// Toast pinned to the corner of the viewport
#[component]
pub fn Toast(notice: Notice) -> impl IntoView {
    let class_name = if notice.is_destructive() {
        "toast toast-destructive"
    } else {
        "toast"
    };

    view! {
        <div class=class_name role="status">
            <p class="toast-title">{notice.title()}</p>
            <p class="toast-description">{notice.description()}</p>
        </div>
    }
}
