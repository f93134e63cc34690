//! Dashboard overview page

use crate::components::dialog::open_href;
use crate::components::{Badge, Notice, StatCard, StatusTone, Toast, Tone};
use crate::pages::voice_agents;
use leptos::prelude::*;
use talkeriq_core::types::{CallOutcome, DashboardSnapshot, RecentAgent, RecentCall};
use talkeriq_core::utils::format_clock;

/// Route of this page
pub const PATH: &str = "/dashboard";

const HEADLINE_ICONS: [&str; 4] = ["\u{1F916}", "\u{1F4DE}", "\u{1F4C8}", "\u{23F1}"];

/// Badge tone for a finished call
#[must_use]
pub const fn outcome_tone(outcome: CallOutcome) -> Tone {
    match outcome {
        CallOutcome::Completed => Tone::Success,
        CallOutcome::Missed => Tone::Warning,
    }
}

/// Headline figures, recent agents and recent calls
#[component]
pub fn DashboardPage(snapshot: DashboardSnapshot, notice: Option<Notice>) -> impl IntoView {
    let DashboardSnapshot {
        headline,
        recent_agents,
        recent_calls,
    } = snapshot;

    let cards = headline
        .into_iter()
        .zip(HEADLINE_ICONS.into_iter().cycle())
        .map(|(stat, icon)| {
            view! { <StatCard title=stat.label value=stat.value note=stat.trend icon=icon/> }
        })
        .collect::<Vec<_>>();
    let agents = recent_agents
        .into_iter()
        .map(|agent| view! { <RecentAgentRow agent=agent/> })
        .collect::<Vec<_>>();
    let calls = recent_calls
        .into_iter()
        .map(|call| view! { <RecentCallRow call=call/> })
        .collect::<Vec<_>>();
    let toast = notice.map(|notice| view! { <Toast notice=notice/> });
    let create_href = open_href(voice_agents::PATH);

    view! {
        <div class="page">
            <div class="page-header">
                <div>
                    <h1 class="page-title">"Dashboard"</h1>
                    <p class="page-subtitle">
                        "Welcome back! Here's what's happening with your AI agents."
                    </p>
                </div>
                <a href=create_href class="btn btn-primary">"+ Create Agent"</a>
            </div>

            <div class="stat-grid stat-grid-4">{cards}</div>

            <div class="panel-grid">
                <div class="card">
                    <h2 class="card-title">"Recent Agents"</h2>
                    <div class="record-list">{agents}</div>
                </div>
                <div class="card">
                    <h2 class="card-title">"Recent Calls"</h2>
                    <div class="record-list">{calls}</div>
                </div>
            </div>

            {toast}
        </div>
    }
}

#[component]
fn RecentAgentRow(agent: RecentAgent) -> impl IntoView {
    let calls = format!("{} calls today", agent.calls_today);

    view! {
        <div class="record-row">
            <div class="record-icon">"\u{1F916}"</div>
            <div class="record-body">
                <p class="record-title">{agent.name}</p>
                <p class="record-description">{calls}</p>
            </div>
            <Badge label=agent.status.label() tone=agent.status.tone()/>
        </div>
    }
}

#[component]
fn RecentCallRow(call: RecentCall) -> impl IntoView {
    let detail = format!("{} \u{2022} {}", call.agent, format_clock(call.duration_secs));

    view! {
        <div class="record-row">
            <div class="record-icon">"\u{260E}"</div>
            <div class="record-body">
                <p class="record-title">{call.number}</p>
                <p class="record-description">{detail}</p>
            </div>
            <Badge label=call.outcome.label() tone=outcome_tone(call.outcome)/>
        </div>
    }
}
