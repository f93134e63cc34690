//! Fixed left-hand navigation

use leptos::prelude::*;
use talkeriq_core::navigation::{HOME_PATH, NavLink, help_link, nav_links};

/// Minutes left on the demo account's free trial
pub const TRIAL_REMAINING: &str = "54:27 minutes";

/// Share of the free trial already used, in percent
pub const TRIAL_USED_PERCENT: u8 = 40;

/// Email of the signed-in demo user
pub const DEMO_USER: &str = "user@example.com";

/// Whole sidebar for the page at `current_path`
#[component]
pub fn Sidebar(current_path: String) -> impl IntoView {
    let entries = nav_links(&current_path)
        .into_iter()
        .map(|link| view! { <SidebarLink link=link/> })
        .collect::<Vec<_>>();
    let help = help_link(&current_path);
    let progress_style = format!("width: {TRIAL_USED_PERCENT}%");

    view! {
        <aside class="sidebar">
            <a href=HOME_PATH class="sidebar-logo">
                <span class="sidebar-logo-mark">"\u{25C9}"</span>
                <span class="sidebar-logo-text">"TalkerIQ"</span>
            </a>

            <nav class="sidebar-nav">{entries}</nav>

            <div class="sidebar-footer">
                <SidebarLink link=help/>

                <div class="trial-box">
                    <p class="trial-title">"Free Trial"</p>
                    <div class="trial-remaining">
                        <span>"Remaining:"</span>
                        <span class="trial-minutes">{TRIAL_REMAINING}</span>
                    </div>
                    <div class="progress">
                        <div class="progress-bar" style=progress_style></div>
                    </div>
                    <a href="/billing" class="btn btn-primary btn-block">"Add Payment"</a>
                </div>

                <div class="sidebar-user">
                    <span class="avatar">"U"</span>
                    <span class="sidebar-user-email">{DEMO_USER}</span>
                    <form method="post" action="/logout" class="logout-form">
                        <button type="submit" class="btn btn-ghost" aria-label="Log out">
                            "\u{21AA}"
                        </button>
                    </form>
                </div>
            </div>
        </aside>
    }
}

/// One navigation link, highlighted when it is the current page
#[component]
fn SidebarLink(link: NavLink) -> impl IntoView {
    let class_name = if link.active {
        "sidebar-link active"
    } else {
        "sidebar-link"
    };
    let aria_current = link.active.then_some("page");

    view! {
        <a href=link.entry.path class=class_name aria-current=aria_current>
            <span class="sidebar-icon">{link.entry.icon.glyph()}</span>
            <span>{link.entry.label}</span>
        </a>
    }
}
