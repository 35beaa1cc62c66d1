//! `CogmemClient`: typed methods over the CogmemAi REST API.

use crate::config::ClientConfig;
use crate::endpoints;
use crate::http::HttpTransport;
use cogmem_types::{
    ApiRequest, ApiResponse, CogmemError, ExtractRequest, IngestDocumentRequest,
    InviteMemberRequest, LinkMemoriesRequest, ListMemoriesQuery, ProjectContextQuery,
    RecallRequest, Result, SaveMemoryRequest, SessionSummaryRequest, TeamMembersQuery,
    Transport, TransportError, UpdateMemoryRequest,
};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Client for the CogmemAi memory API.
///
/// Immutable once built and cheap to clone: clones share the underlying transport and its
/// connection pool, so one client can serve many concurrent callers. Each method makes exactly
/// one request and never retries.
///
/// ```no_run
/// # async fn demo() -> cogmem_client::Result<()> {
/// use cogmem_client::{CogmemClient, RecallRequest, SaveMemoryRequest};
///
/// let client = CogmemClient::new("cm_your_api_key_here")?;
/// client
///     .save_memory(
///         &SaveMemoryRequest::new("This project uses React with TypeScript")
///             .memory_type("architecture")
///             .category("frontend")
///             .importance(8),
///     )
///     .await?;
/// let hits = client
///     .recall_memories(&RecallRequest::new("what framework does this project use?"))
///     .await?;
/// println!("{}", hits["memories"]);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct CogmemClient {
    api_root: Arc<str>,
    api_key: Arc<str>,
    timeout: Duration,
    transport: Arc<dyn Transport>,
}

impl CogmemClient {
    /// Client for the hosted service with the default timeout.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(ClientConfig::new(api_key))
    }

    pub fn with_config(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        let transport = HttpTransport::new()?;
        Self::with_transport(config, Arc::new(transport))
    }

    /// Client over a caller-supplied transport.
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            api_root: Arc::from(config.api_root()),
            api_key: Arc::from(config.api_key.trim()),
            timeout: config.timeout,
            transport,
        })
    }

    /// See [`ClientConfig::from_env`].
    pub fn from_env() -> Result<Self> {
        Self::with_config(ClientConfig::from_env()?)
    }

    /// URL prefix every endpoint path is appended to.
    pub fn api_root(&self) -> &str {
        &self.api_root
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// A clone sharing this client's transport but with a different per-call deadline.
    pub fn with_timeout(&self, timeout: Duration) -> Self {
        Self {
            timeout,
            ..self.clone()
        }
    }

    async fn execute(&self, mut request: ApiRequest) -> Result<Value> {
        request
            .headers
            .push(("Authorization".to_string(), format!("Bearer {}", self.api_key)));
        request
            .headers
            .push(("Accept".to_string(), "application/json".to_string()));
        if request.body.is_some() {
            request
                .headers
                .push(("Content-Type".to_string(), "application/json".to_string()));
        }
        let url = format!("{}/{}", self.api_root, request.path);
        tracing::debug!(method = %request.method, path = %request.path, "sending request");

        let response = tokio::time::timeout(self.timeout, self.transport.send(&url, &request))
            .await
            .map_err(|_| TransportError::Timeout)??;

        tracing::debug!(
            method = %request.method,
            path = %request.path,
            status = response.status,
            "response received"
        );
        parse_response(response)
    }

    /// Save a memory. Returns `memory_id`, `stored`, and possibly `deduplicated`,
    /// `conflict_detected` or `warning`.
    pub async fn save_memory(&self, req: &SaveMemoryRequest) -> Result<Value> {
        self.execute(endpoints::save_memory(req)?).await
    }

    /// Semantic search; returns `memories` ranked by relevance.
    pub async fn recall_memories(&self, req: &RecallRequest) -> Result<Value> {
        self.execute(endpoints::recall_memories(req)?).await
    }

    /// Have the service derive memories from one conversation exchange.
    pub async fn extract_memories(&self, req: &ExtractRequest) -> Result<Value> {
        self.execute(endpoints::extract_memories(req)?).await
    }

    pub async fn get_project_context(&self, query: &ProjectContextQuery) -> Result<Value> {
        self.execute(endpoints::get_project_context(query)?).await
    }

    pub async fn list_memories(&self, query: &ListMemoriesQuery) -> Result<Value> {
        self.execute(endpoints::list_memories(query)?).await
    }

    pub async fn update_memory(&self, memory_id: u64, req: &UpdateMemoryRequest) -> Result<Value> {
        self.execute(endpoints::update_memory(memory_id, req)?).await
    }

    /// Delete permanently. A missing id is reported as a 404 [`CogmemError::Api`].
    pub async fn delete_memory(&self, memory_id: u64) -> Result<Value> {
        self.execute(endpoints::delete_memory(memory_id)?).await
    }

    /// Tier, counts and quota limits for the key's account.
    pub async fn get_usage(&self) -> Result<Value> {
        self.execute(endpoints::get_usage()?).await
    }

    pub async fn ingest_document(&self, req: &IngestDocumentRequest) -> Result<Value> {
        self.execute(endpoints::ingest_document(req)?).await
    }

    pub async fn save_session_summary(&self, req: &SessionSummaryRequest) -> Result<Value> {
        self.execute(endpoints::save_session_summary(req)?).await
    }

    /// Full dump: `version`, `exported_at`, `memory_count`, `memories`.
    pub async fn export_memories(&self) -> Result<Value> {
        self.execute(endpoints::export_memories()?).await
    }

    /// Bulk import; each item needs `content`, other fields are optional.
    /// Accepts the `memories` array of [`export_memories`](Self::export_memories) as-is.
    pub async fn import_memories(&self, memories: &[Value]) -> Result<Value> {
        self.execute(endpoints::import_memories(memories)?).await
    }

    pub async fn get_memory_versions(&self, memory_id: u64) -> Result<Value> {
        self.execute(endpoints::get_memory_versions(memory_id)?).await
    }

    pub async fn get_team_members(&self, query: &TeamMembersQuery) -> Result<Value> {
        self.execute(endpoints::get_team_members(query)?).await
    }

    pub async fn invite_team_member(&self, req: &InviteMemberRequest) -> Result<Value> {
        self.execute(endpoints::invite_team_member(req)?).await
    }

    pub async fn remove_team_member(&self, member_id: u64) -> Result<Value> {
        self.execute(endpoints::remove_team_member(member_id)?).await
    }

    pub async fn link_memories(&self, memory_id: u64, req: &LinkMemoriesRequest) -> Result<Value> {
        self.execute(endpoints::link_memories(memory_id, req)?).await
    }

    pub async fn get_memory_links(&self, memory_id: u64) -> Result<Value> {
        self.execute(endpoints::get_memory_links(memory_id)?).await
    }

    /// Cross-project patterns the service considers worth promoting.
    pub async fn get_promotion_candidates(&self) -> Result<Value> {
        self.execute(endpoints::get_promotion_candidates()?).await
    }

    pub async fn promote_to_global(&self, memory_id: u64) -> Result<Value> {
        self.execute(endpoints::promote_to_global(memory_id)?).await
    }
}

impl fmt::Debug for CogmemClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CogmemClient")
            .field("api_root", &self.api_root)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// 2xx: body as JSON (empty body is `Null`). Otherwise an API error whose message is the body's
/// `error` or `message` string, else the status line.
pub(crate) fn parse_response(response: ApiResponse) -> Result<Value> {
    let text = response.body.trim();
    let parsed: Option<Value> = if text.is_empty() {
        None
    } else {
        serde_json::from_str(text).ok()
    };

    if response.is_success() {
        return match parsed {
            Some(value) => Ok(value),
            None if text.is_empty() => Ok(Value::Null),
            None => Err(CogmemError::Api {
                status_code: response.status,
                message: format!("invalid JSON response: {}", text),
            }),
        };
    }

    let from_body = parsed.as_ref().and_then(|v| {
        ["error", "message"]
            .iter()
            .filter_map(|k| v.get(k).and_then(Value::as_str))
            .map(str::trim)
            .find(|m| !m.is_empty())
            .map(str::to_string)
    });
    let message = from_body.unwrap_or_else(|| status_line(response.status));
    Err(CogmemError::Api {
        status_code: response.status,
        message,
    })
}

fn status_line(status: u16) -> String {
    let reason = reqwest::StatusCode::from_u16(status)
        .ok()
        .and_then(|s| s.canonical_reason());
    match reason {
        Some(reason) => format!("{} {}", status, reason),
        None => format!("HTTP {}", status),
    }
}
