//! HTML page handlers

use super::ListParams;
use crate::{
    components::render_document,
    error::WebError,
    pages::{
        dashboard::{self, DashboardPage},
        knowledge_base::{self, KnowledgeBasePage},
        not_found::NotFound,
        phone_numbers::{self, PhoneNumbersPage},
        placeholder::PlaceholderPage,
        render_page,
        voice_agents::{self, VoiceAgentsPage},
    },
    state::AppState,
};
use axum::{
    extract::{Form, Query, State},
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Redirect, Response},
};
use leptos::prelude::*;
use serde::Deserialize;
use std::sync::Arc;
use talkeriq_core::{
    AgentStats, KnowledgeStats, PhoneNumberStats,
    navigation::{Page, Resolution, resolve},
    store::list_records,
};
use tracing::{debug, info, warn};

/// Dashboard overview
pub async fn dashboard(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListParams>,
) -> Result<Html<String>, WebError> {
    let snapshot = state.source.dashboard().await?;
    let notice = params.notice();

    Ok(render_page(
        "Dashboard",
        dashboard::PATH,
        view! { <DashboardPage snapshot=snapshot notice=notice/> },
    ))
}

/// Phone number list
pub async fn phone_numbers(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListParams>,
) -> Result<Html<String>, WebError> {
    let params = params.validated()?;
    let query = params.query_by_type();
    let dialog_open = params.dialog_open();

    let records = state.source.phone_numbers().await?;
    let stats = PhoneNumberStats::from_records(&records);
    let listing = list_records(&records, &query);
    debug!(total = listing.total, matched = listing.matched, "Listed phone numbers");

    Ok(render_page(
        "Phone Numbers",
        phone_numbers::PATH,
        view! {
            <PhoneNumbersPage listing=listing stats=stats query=query dialog_open=dialog_open/>
        },
    ))
}

/// Voice agent grid
pub async fn voice_agents(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListParams>,
) -> Result<Html<String>, WebError> {
    let params = params.validated()?;
    let query = params.query_by_status();
    let dialog_open = params.dialog_open();

    let records = state.source.voice_agents().await?;
    let stats = AgentStats::from_records(&records);
    let listing = list_records(&records, &query);
    debug!(total = listing.total, matched = listing.matched, "Listed voice agents");

    Ok(render_page(
        "Voice Agents",
        voice_agents::PATH,
        view! {
            <VoiceAgentsPage listing=listing stats=stats query=query dialog_open=dialog_open/>
        },
    ))
}

/// Knowledge base list
pub async fn knowledge_base(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListParams>,
) -> Result<Html<String>, WebError> {
    let params = params.validated()?;
    let query = params.query_by_type();
    let dialog_open = params.dialog_open();

    let records = state.source.knowledge_items().await?;
    let stats = KnowledgeStats::from_records(&records);
    let listing = list_records(&records, &query);
    debug!(total = listing.total, matched = listing.matched, "Listed knowledge items");

    Ok(render_page(
        "Knowledge Base",
        knowledge_base::PATH,
        view! {
            <KnowledgeBasePage listing=listing stats=stats query=query dialog_open=dialog_open/>
        },
    ))
}

/// Fields of the "Add New Phone Number" dialog
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PhoneNumberForm {
    /// Requested number type
    pub number_type: String,
    /// Requested location
    pub location: String,
}

/// Fields of the "Create New Voice Agent" dialog
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct VoiceAgentForm {
    /// Agent name
    pub name: String,
    /// Agent role
    pub agent_type: String,
    /// What the agent should do
    pub description: String,
}

/// Fields of the "Add Knowledge Item" dialog
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct KnowledgeForm {
    /// Entry title
    pub title: String,
    /// Entry format
    pub item_type: String,
    /// Topic
    pub category: String,
    /// Short summary
    pub description: String,
}

/// Accept the purchase dialog; nothing is stored
pub async fn submit_phone_number(Form(form): Form<PhoneNumberForm>) -> Redirect {
    info!(
        number_type = %form.number_type,
        location = %form.location,
        "Phone number purchase submitted"
    );
    Redirect::to(phone_numbers::PATH)
}

/// Accept the agent dialog; nothing is stored
pub async fn submit_voice_agent(Form(form): Form<VoiceAgentForm>) -> Redirect {
    info!(
        name = %form.name,
        agent_type = %form.agent_type,
        description_len = form.description.len(),
        "Voice agent creation submitted"
    );
    Redirect::to(voice_agents::PATH)
}

/// Accept the knowledge dialog; nothing is stored
pub async fn submit_knowledge(Form(form): Form<KnowledgeForm>) -> Redirect {
    info!(
        title = %form.title,
        item_type = %form.item_type,
        category = %form.category,
        description_len = form.description.len(),
        "Knowledge item submitted"
    );
    Redirect::to(knowledge_base::PATH)
}

/// Everything the router does not match explicitly
///
/// `/` redirects home, placeholder sections render their coming-soon page and
/// any other path gets the 404 page.
pub async fn fallback(uri: Uri) -> Response {
    let path = uri.path();
    match resolve(path) {
        Resolution::Redirect(target) => Redirect::temporary(target).into_response(),
        Resolution::Render(Page::Placeholder(placeholder)) => render_page(
            placeholder.title(),
            placeholder.path(),
            view! { <PlaceholderPage placeholder=placeholder/> },
        )
        .into_response(),
        Resolution::Render(Page::NotFound) => {
            debug!(path = %path, "No page at path");
            not_found(path)
        }
        Resolution::Render(
            page @ (Page::Dashboard
            | Page::PhoneNumbers
            | Page::VoiceAgents
            | Page::KnowledgeBase
            | Page::Login),
        ) => {
            warn!(path = %path, ?page, "Page resolves but has no route");
            not_found(path)
        }
    }
}

fn not_found(path: &str) -> Response {
    let path = path.to_string();
    let body = render_document("Page Not Found", view! { <NotFound path=path/> });

    (StatusCode::NOT_FOUND, Html(body)).into_response()
}
