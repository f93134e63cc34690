//! Voice agents page

use crate::components::dialog::open_href;
use crate::components::empty_state::empty_message;
use crate::components::{
    Badge, Dialog, EmptyState, FilterBar, SelectField, SelectOption, StatCard, StatusTone,
    TextAreaField, TextField, Tone,
};
use leptos::prelude::*;
use talkeriq_core::filter::ListQuery;
use talkeriq_core::metrics::AgentStats;
use talkeriq_core::store::Listing;
use talkeriq_core::types::{AgentStatus, VoiceAgent};
use talkeriq_core::utils::{format_clock, format_count, format_minutes_ago};

/// Route of this page
pub const PATH: &str = "/voice-agents";

const STATUS_OPTIONS: [SelectOption; 3] = [
    SelectOption::new("active", "Active"),
    SelectOption::new("inactive", "Inactive"),
    SelectOption::new("training", "Training"),
];

/// Label of the run toggle for an agent in `status`
#[must_use]
pub const fn toggle_label(status: AgentStatus) -> &'static str {
    match status {
        AgentStatus::Active => "Pause",
        AgentStatus::Inactive | AgentStatus::Training => "Start",
    }
}

/// Agent cards with summary figures
#[component]
pub fn VoiceAgentsPage(
    listing: Listing<VoiceAgent>,
    stats: AgentStats,
    query: ListQuery,
    dialog_open: bool,
) -> impl IntoView {
    let empty = listing.records.is_empty().then(|| {
        view! {
            <EmptyState
                title="No agents found"
                message=empty_message(
                    query.is_narrowed(),
                    "Get started by creating your first voice agent.",
                )
                icon="\u{1F916}"
            />
        }
    });
    let cards = listing
        .records
        .into_iter()
        .map(|agent| view! { <AgentCard agent=agent/> })
        .collect::<Vec<_>>();
    let dialog = dialog_open.then(|| view! { <CreateAgentDialog/> });
    let create_href = open_href(PATH);

    view! {
        <div class="page">
            <div class="page-header">
                <div>
                    <h1 class="page-title">"Voice Agents"</h1>
                    <p class="page-subtitle">"Create and manage your AI voice agents"</p>
                </div>
                <a href=create_href class="btn btn-dark">"+ Create Agent"</a>
            </div>

            <div class="stat-grid stat-grid-4">
                <StatCard
                    title="Active Agents"
                    value=stats.active_agents.to_string()
                    note="Ready to take calls"
                    icon="\u{1F916}"
                />
                <StatCard
                    title="Calls Today"
                    value=stats.calls_today.to_string()
                    note="+12% from yesterday"
                    icon="\u{1F4DE}"
                />
                <StatCard
                    title="Avg Response Time"
                    value=stats.avg_response_time
                    note="-0.3s improvement"
                    icon="\u{23F1}"
                />
                <StatCard
                    title="Success Rate"
                    value=stats.success_rate
                    note="+2.1% this week"
                    icon="\u{1F4CA}"
                />
            </div>

            <FilterBar
                action=PATH
                placeholder="Search agents..."
                search=query.search().to_string()
                param="status"
                selected=query.category().to_string()
                all_label="All Status"
                options=STATUS_OPTIONS.to_vec()
            />

            <div class="card-grid">{cards}</div>
            {empty}
            {dialog}
        </div>
    }
}

/// One agent with its activity figures
#[component]
fn AgentCard(agent: VoiceAgent) -> impl IntoView {
    let VoiceAgent {
        name,
        description,
        status,
        agent_type,
        calls_today,
        total_calls,
        avg_duration_secs,
        last_active_mins,
        ..
    } = agent;
    let toggle = toggle_label(status);

    view! {
        <div class="card agent-card">
            <div class="agent-card-header">
                <div class="agent-avatar">"\u{1F916}"</div>
                <div class="agent-heading">
                    <h3 class="record-title">{name}</h3>
                    <p class="record-description">{description}</p>
                </div>
                <details class="row-menu">
                    <summary class="btn btn-outline btn-sm">"\u{22EE}"</summary>
                    <ul class="menu">
                        <li>"Configure"</li>
                        <li>"Start Agent"</li>
                        <li>"Pause Agent"</li>
                    </ul>
                </details>
            </div>
            <div class="record-heading">
                <Badge label=status.label() tone=status.tone()/>
                <Badge label=agent_type.label() tone=Tone::Outline/>
            </div>
            <dl class="agent-figures">
                <div>
                    <dt>"Calls Today"</dt>
                    <dd>{calls_today.to_string()}</dd>
                </div>
                <div>
                    <dt>"Total Calls"</dt>
                    <dd>{format_count(u64::from(total_calls))}</dd>
                </div>
                <div>
                    <dt>"Avg Duration"</dt>
                    <dd>{format_clock(avg_duration_secs)}</dd>
                </div>
                <div>
                    <dt>"Last Active"</dt>
                    <dd>{format_minutes_ago(last_active_mins)}</dd>
                </div>
            </dl>
            <div class="agent-actions">
                <button type="button" class="btn btn-outline btn-sm agent-toggle">{toggle}</button>
                <button type="button" class="btn btn-outline btn-sm">"Configure"</button>
            </div>
        </div>
    }
}

/// Creation dialog
#[component]
fn CreateAgentDialog() -> impl IntoView {
    view! {
        <Dialog title="Create New Voice Agent" action=PATH submit_label="Create Agent">
            <TextField name="name" label="Agent Name" placeholder="Enter agent name"/>
            <SelectField
                name="agent_type"
                label="Agent Type"
                placeholder="Select agent type"
                options=vec![
                    SelectOption::new("sales", "Sales Agent"),
                    SelectOption::new("support", "Support Agent"),
                    SelectOption::new("general", "General Purpose"),
                ]
            />
            <TextAreaField
                name="description"
                label="Description"
                placeholder="Describe what this agent will do..."
            />
        </Dialog>
    }
}
