//! JSON endpoints mirroring the list pages

use super::ListParams;
use crate::{error::WebError, state::AppState};
use axum::{
    extract::{Query, State},
    response::Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use talkeriq_core::{
    AgentStats, KnowledgeItem, KnowledgeStats, PhoneNumber, PhoneNumberStats, VoiceAgent,
    navigation::{NavLink, help_link, nav_links},
    store::{Listing, list_records},
    types::DashboardSnapshot,
};

/// Filtered records plus figures over the full list
#[derive(Debug, Serialize)]
pub struct ListResponse<R, S> {
    /// Records, counts
    #[serde(flatten)]
    pub listing: Listing<R>,
    /// Figures over every record, ignoring the filter
    pub stats: S,
}

/// Phone numbers as JSON
pub async fn api_phone_numbers(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListParams>,
) -> Result<Json<ListResponse<PhoneNumber, PhoneNumberStats>>, WebError> {
    let params = params.validated()?;
    let records = state.source.phone_numbers().await?;

    Ok(Json(ListResponse {
        listing: list_records(&records, &params.query_by_type()),
        stats: PhoneNumberStats::from_records(&records),
    }))
}

/// Voice agents as JSON
pub async fn api_voice_agents(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListParams>,
) -> Result<Json<ListResponse<VoiceAgent, AgentStats>>, WebError> {
    let params = params.validated()?;
    let records = state.source.voice_agents().await?;

    Ok(Json(ListResponse {
        listing: list_records(&records, &params.query_by_status()),
        stats: AgentStats::from_records(&records),
    }))
}

/// Knowledge items as JSON
pub async fn api_knowledge_base(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListParams>,
) -> Result<Json<ListResponse<KnowledgeItem, KnowledgeStats>>, WebError> {
    let params = params.validated()?;
    let records = state.source.knowledge_items().await?;

    Ok(Json(ListResponse {
        listing: list_records(&records, &params.query_by_type()),
        stats: KnowledgeStats::from_records(&records),
    }))
}

/// Dashboard snapshot as JSON
pub async fn api_dashboard(
    State(state): State<Arc<AppState>>,
) -> Result<Json<DashboardSnapshot>, WebError> {
    Ok(Json(state.source.dashboard().await?))
}

/// Query string of the navigation endpoint
#[derive(Debug, Default, Deserialize)]
pub struct NavigationParams {
    /// Path whose entry should be marked active
    #[serde(default)]
    pub path: String,
}

/// Sidebar entries with their active flags
#[derive(Debug, Serialize)]
pub struct NavigationResponse {
    /// Main entries, in order
    pub entries: Vec<NavLink>,
    /// Footer entry
    pub help: NavLink,
}

/// Sidebar entries for `path`
pub async fn api_navigation(Query(params): Query<NavigationParams>) -> Json<NavigationResponse> {
    Json(NavigationResponse {
        entries: nav_links(&params.path),
        help: help_link(&params.path),
    })
}

/// Health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Service status
    pub status: &'static str,
    /// Service version
    pub version: &'static str,
    /// Name of the record source
    pub source: String,
    /// Timestamp of the check
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Liveness check
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        source: state.source.name().to_string(),
        timestamp: chrono::Utc::now(),
    })
}
