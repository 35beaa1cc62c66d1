//! Axum server and routes.

use crate::store::{MemoryStore, StoreError};
use axum::{
    extract::{Path, Query, Request, State},
    http::{header, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{delete, get, patch, post},
    Json, Router,
};
use cogmem_types::{
    ExtractRequest, ImportMemoriesRequest, IngestDocumentRequest, InviteMemberRequest,
    LinkMemoriesRequest, ListMemoriesQuery, ProjectContextQuery, RecallRequest, SaveMemoryRequest,
    SessionSummaryRequest, TeamMembersQuery, UpdateMemoryRequest,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;

pub struct AppState {
    /// Bearer key every `/cogmemai` route requires.
    pub api_key: String,
    pub store: RwLock<MemoryStore>,
}

impl AppState {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            store: RwLock::new(MemoryStore::new()),
        }
    }
}

impl IntoResponse for StoreError {
    fn into_response(self) -> Response {
        let status = match self {
            StoreError::NotFound(_) => StatusCode::NOT_FOUND,
            StoreError::Invalid(_) => StatusCode::BAD_REQUEST,
            StoreError::Conflict(_) => StatusCode::CONFLICT,
        };
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

type ApiResult = Result<Json<Value>, StoreError>;

pub fn router(state: Arc<AppState>) -> Router {
    let api = Router::new()
        .route("/store", post(handle_store))
        .route("/recall", post(handle_recall))
        .route("/extract", post(handle_extract))
        .route("/context", get(handle_context))
        .route("/memories", get(handle_list))
        .route("/memory/:id", patch(handle_update).delete(handle_delete))
        .route("/memory/:id/versions", get(handle_versions))
        .route("/memory/:id/link", post(handle_link))
        .route("/memory/:id/links", get(handle_links))
        .route("/memory/:id/promote", post(handle_promote))
        .route("/usage", get(handle_usage))
        .route("/ingest", post(handle_ingest))
        .route("/session-summary", post(handle_session_summary))
        .route("/export", get(handle_export))
        .route("/import", post(handle_import))
        .route("/team/members", get(handle_team_members))
        .route("/team/invite", post(handle_invite))
        .route("/team/remove/:id", delete(handle_remove_member))
        .route("/promotion-candidates", get(handle_promotion_candidates))
        .route_layer(middleware::from_fn_with_state(
            Arc::clone(&state),
            require_api_key,
        ));

    Router::new()
        .nest("/cogmemai", api)
        .route("/health", get(handle_health))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn require_api_key(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Response {
    let presented = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "));
    if presented != Some(state.api_key.as_str()) {
        tracing::warn!(path = %request.uri().path(), "rejected request with invalid API key");
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": "invalid key" })),
        )
            .into_response();
    }
    next.run(request).await
}

async fn handle_store(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SaveMemoryRequest>,
) -> ApiResult {
    let res = state.store.write().await.save(req)?;
    tracing::info!(memory_id = %res["memory_id"], "memory stored");
    Ok(Json(res))
}

async fn handle_recall(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RecallRequest>,
) -> ApiResult {
    let res = state.store.read().await.recall(&req)?;
    tracing::info!(query = %req.query, hits = %res["count"], "recall");
    Ok(Json(res))
}

async fn handle_extract(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ExtractRequest>,
) -> Json<Value> {
    tracing::info!(message_len = req.user_message.len(), "extraction requested");
    Json(state.store.read().await.extract())
}

async fn handle_context(
    State(state): State<Arc<AppState>>,
    Query(q): Query<ProjectContextQuery>,
) -> Json<Value> {
    Json(state.store.read().await.context(&q))
}

async fn handle_list(
    State(state): State<Arc<AppState>>,
    Query(q): Query<ListMemoriesQuery>,
) -> Json<Value> {
    Json(state.store.read().await.list(&q))
}

async fn handle_update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
    Json(req): Json<UpdateMemoryRequest>,
) -> ApiResult {
    let res = state.store.write().await.update(id, req)?;
    tracing::info!(memory_id = id, version = %res["version"], "memory updated");
    Ok(Json(res))
}

async fn handle_delete(State(state): State<Arc<AppState>>, Path(id): Path<u64>) -> ApiResult {
    let res = state.store.write().await.delete(id)?;
    tracing::info!(memory_id = id, "memory deleted");
    Ok(Json(res))
}

async fn handle_usage(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(state.store.read().await.usage())
}

async fn handle_ingest(
    State(state): State<Arc<AppState>>,
    Json(req): Json<IngestDocumentRequest>,
) -> ApiResult {
    let res = state.store.write().await.ingest(req)?;
    tracing::info!(memory_ids = %res["memory_ids"], "document ingested");
    Ok(Json(res))
}

async fn handle_session_summary(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SessionSummaryRequest>,
) -> ApiResult {
    let res = state.store.write().await.session_summary(req)?;
    Ok(Json(res))
}

async fn handle_export(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(state.store.read().await.export())
}

async fn handle_import(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ImportMemoriesRequest>,
) -> Json<Value> {
    let res = state.store.write().await.import(req.memories);
    tracing::info!(
        imported = %res["imported"],
        skipped = %res["skipped"],
        errors = %res["errors"],
        "import finished"
    );
    Json(res)
}

async fn handle_versions(State(state): State<Arc<AppState>>, Path(id): Path<u64>) -> ApiResult {
    Ok(Json(state.store.read().await.versions(id)?))
}

async fn handle_team_members(
    State(state): State<Arc<AppState>>,
    Query(q): Query<TeamMembersQuery>,
) -> Json<Value> {
    Json(
        state
            .store
            .read()
            .await
            .team_members(q.project_id.as_deref()),
    )
}

async fn handle_invite(
    State(state): State<Arc<AppState>>,
    Json(req): Json<InviteMemberRequest>,
) -> ApiResult {
    let res = state.store.write().await.invite(req)?;
    tracing::info!(member_id = %res["member_id"], "team member invited");
    Ok(Json(res))
}

async fn handle_remove_member(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> ApiResult {
    Ok(Json(state.store.write().await.remove_member(id)?))
}

async fn handle_link(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
    Json(req): Json<LinkMemoriesRequest>,
) -> ApiResult {
    let related = req.related_memory_id;
    let res = state.store.write().await.link(id, req)?;
    tracing::info!(memory_id = id, related_memory_id = related, "memories linked");
    Ok(Json(res))
}

async fn handle_links(State(state): State<Arc<AppState>>, Path(id): Path<u64>) -> ApiResult {
    Ok(Json(state.store.read().await.links(id)?))
}

async fn handle_promotion_candidates(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(state.store.read().await.promotion_candidates())
}

async fn handle_promote(State(state): State<Arc<AppState>>, Path(id): Path<u64>) -> ApiResult {
    let res = state.store.write().await.promote(id)?;
    tracing::info!(memory_id = id, promoted = %res["promoted"], "promotion");
    Ok(Json(res))
}

async fn handle_health() -> &'static str {
    "ok"
}
