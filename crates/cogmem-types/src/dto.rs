//! Request DTOs and enums for the CogmemAi REST API.

use serde::{Deserialize, Serialize};

pub const DEFAULT_MEMORY_TYPE: &str = "context";
pub const DEFAULT_CATEGORY: &str = "general";
pub const DEFAULT_IMPORTANCE: u8 = 5;
pub const DEFAULT_RECALL_LIMIT: u32 = 10;
pub const DEFAULT_LIST_LIMIT: u32 = 50;

/// Inclusive importance bounds accepted by the service.
pub const IMPORTANCE_RANGE: std::ops::RangeInclusive<u8> = 1..=10;

/// Visibility of a stored memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemoryScope {
    #[default]
    Project,
    Global,
}

impl MemoryScope {
    pub fn as_str(self) -> &'static str {
        match self {
            MemoryScope::Project => "project",
            MemoryScope::Global => "global",
        }
    }
}

impl std::fmt::Display for MemoryScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scope filter for search and listing; `All` matches both scopes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScopeFilter {
    Project,
    Global,
    #[default]
    All,
}

impl ScopeFilter {
    pub fn as_str(self) -> &'static str {
        match self {
            ScopeFilter::Project => "project",
            ScopeFilter::Global => "global",
            ScopeFilter::All => "all",
        }
    }

    pub fn matches(self, scope: MemoryScope) -> bool {
        match self {
            ScopeFilter::All => true,
            ScopeFilter::Project => scope == MemoryScope::Project,
            ScopeFilter::Global => scope == MemoryScope::Global,
        }
    }
}

impl From<MemoryScope> for ScopeFilter {
    fn from(scope: MemoryScope) -> Self {
        match scope {
            MemoryScope::Project => ScopeFilter::Project,
            MemoryScope::Global => ScopeFilter::Global,
        }
    }
}

impl std::fmt::Display for ScopeFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of relationship between two linked memories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationshipType {
    LedTo,
    Contradicts,
    Extends,
    #[default]
    Related,
}

impl RelationshipType {
    pub fn as_str(self) -> &'static str {
        match self {
            RelationshipType::LedTo => "led_to",
            RelationshipType::Contradicts => "contradicts",
            RelationshipType::Extends => "extends",
            RelationshipType::Related => "related",
        }
    }
}

/// Role granted to an invited team member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TeamRole {
    #[default]
    Member,
    Viewer,
}

fn default_memory_type() -> String {
    DEFAULT_MEMORY_TYPE.to_string()
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

fn default_importance() -> u8 {
    DEFAULT_IMPORTANCE
}

fn default_recall_limit() -> u32 {
    DEFAULT_RECALL_LIMIT
}

fn default_list_limit() -> u32 {
    DEFAULT_LIST_LIMIT
}

fn default_true() -> bool {
    true
}

/// Save-memory request (`POST store`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveMemoryRequest {
    pub content: String,
    #[serde(default = "default_memory_type")]
    pub memory_type: String,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(default = "default_importance")]
    pub importance: u8,
    #[serde(default)]
    pub scope: MemoryScope,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
}

impl SaveMemoryRequest {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            memory_type: default_memory_type(),
            category: default_category(),
            subject: None,
            importance: DEFAULT_IMPORTANCE,
            scope: MemoryScope::default(),
            project_id: None,
        }
    }

    pub fn memory_type(mut self, memory_type: impl Into<String>) -> Self {
        self.memory_type = memory_type.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    pub fn importance(mut self, importance: u8) -> Self {
        self.importance = importance;
        self
    }

    pub fn scope(mut self, scope: MemoryScope) -> Self {
        self.scope = scope;
        self
    }

    pub fn project_id(mut self, project_id: impl Into<String>) -> Self {
        self.project_id = Some(project_id.into());
        self
    }
}

/// Semantic search request (`POST recall`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecallRequest {
    pub query: String,
    #[serde(default = "default_recall_limit")]
    pub limit: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memory_type: Option<String>,
    #[serde(default)]
    pub scope: ScopeFilter,
}

impl RecallRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            limit: DEFAULT_RECALL_LIMIT,
            memory_type: None,
            scope: ScopeFilter::default(),
        }
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    pub fn memory_type(mut self, memory_type: impl Into<String>) -> Self {
        self.memory_type = Some(memory_type.into());
        self
    }

    pub fn scope(mut self, scope: ScopeFilter) -> Self {
        self.scope = scope;
        self
    }
}

/// Conversation exchange to extract memories from (`POST extract`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractRequest {
    pub user_message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assistant_response: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_context: Option<String>,
}

impl ExtractRequest {
    pub fn new(user_message: impl Into<String>) -> Self {
        Self {
            user_message: user_message.into(),
            assistant_response: None,
            previous_context: None,
        }
    }

    pub fn assistant_response(mut self, response: impl Into<String>) -> Self {
        self.assistant_response = Some(response.into());
        self
    }

    pub fn previous_context(mut self, context: impl Into<String>) -> Self {
        self.previous_context = Some(context.into());
        self
    }
}

/// Query for project context (`GET context`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectContextQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(default = "default_true")]
    pub include_global: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

impl Default for ProjectContextQuery {
    fn default() -> Self {
        Self {
            project_id: None,
            include_global: true,
            context: None,
        }
    }
}

impl ProjectContextQuery {
    pub fn for_project(project_id: impl Into<String>) -> Self {
        Self {
            project_id: Some(project_id.into()),
            ..Self::default()
        }
    }

    pub fn include_global(mut self, include: bool) -> Self {
        self.include_global = include;
        self
    }

    pub fn context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }
}

/// Filters and pagination for listing memories (`GET memories`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListMemoriesQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memory_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default)]
    pub scope: ScopeFilter,
    #[serde(default = "default_list_limit")]
    pub limit: u32,
    #[serde(default)]
    pub offset: u32,
}

impl Default for ListMemoriesQuery {
    fn default() -> Self {
        Self {
            memory_type: None,
            category: None,
            scope: ScopeFilter::default(),
            limit: DEFAULT_LIST_LIMIT,
            offset: 0,
        }
    }
}

impl ListMemoriesQuery {
    pub fn memory_type(mut self, memory_type: impl Into<String>) -> Self {
        self.memory_type = Some(memory_type.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn scope(mut self, scope: ScopeFilter) -> Self {
        self.scope = scope;
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = offset;
        self
    }
}

/// Partial update of a memory (`PATCH memory/{id}`). Unset fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateMemoryRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub importance: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<MemoryScope>,
}

impl UpdateMemoryRequest {
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn importance(mut self, importance: u8) -> Self {
        self.importance = Some(importance);
        self
    }

    pub fn scope(mut self, scope: MemoryScope) -> Self {
        self.scope = Some(scope);
        self
    }

    /// True when the update would change nothing.
    pub fn is_empty(&self) -> bool {
        self.content.is_none() && self.importance.is_none() && self.scope.is_none()
    }
}

/// Document to split into memories (`POST ingest`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngestDocumentRequest {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
}

impl IngestDocumentRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            document_type: None,
            project_id: None,
        }
    }

    pub fn document_type(mut self, document_type: impl Into<String>) -> Self {
        self.document_type = Some(document_type.into());
        self
    }

    pub fn project_id(mut self, project_id: impl Into<String>) -> Self {
        self.project_id = Some(project_id.into());
        self
    }
}

/// End-of-session summary (`POST session-summary`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSummaryRequest {
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
}

impl SessionSummaryRequest {
    pub fn new(summary: impl Into<String>) -> Self {
        Self {
            summary: summary.into(),
            project_id: None,
        }
    }

    pub fn project_id(mut self, project_id: impl Into<String>) -> Self {
        self.project_id = Some(project_id.into());
        self
    }
}

/// Bulk import body (`POST import`). Items are passed through as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportMemoriesRequest {
    pub memories: Vec<serde_json::Value>,
}

/// Query for listing team members (`GET team/members`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamMembersQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
}

impl TeamMembersQuery {
    pub fn for_project(project_id: impl Into<String>) -> Self {
        Self {
            project_id: Some(project_id.into()),
        }
    }
}

/// Team invitation (`POST team/invite`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InviteMemberRequest {
    pub email: String,
    pub project_id: String,
    #[serde(default)]
    pub role: TeamRole,
}

impl InviteMemberRequest {
    pub fn new(email: impl Into<String>, project_id: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            project_id: project_id.into(),
            role: TeamRole::default(),
        }
    }

    pub fn role(mut self, role: TeamRole) -> Self {
        self.role = role;
        self
    }
}

/// Link body (`POST memory/{id}/link`). The source memory id is part of the path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkMemoriesRequest {
    pub related_memory_id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationship_type: Option<RelationshipType>,
}

impl LinkMemoriesRequest {
    pub fn new(related_memory_id: u64) -> Self {
        Self {
            related_memory_id,
            relationship_type: None,
        }
    }

    pub fn relationship_type(mut self, relationship_type: RelationshipType) -> Self {
        self.relationship_type = Some(relationship_type);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn save_request_skips_unset_optionals() {
        let req = SaveMemoryRequest::new("Uses Postgres 16").importance(8);
        let v = serde_json::to_value(&req).unwrap();
        assert_eq!(
            v,
            json!({
                "content": "Uses Postgres 16",
                "memory_type": "context",
                "category": "general",
                "importance": 8,
                "scope": "project"
            })
        );
    }

    #[test]
    fn save_request_fills_defaults_when_deserializing() {
        let req: SaveMemoryRequest = serde_json::from_value(json!({ "content": "x" })).unwrap();
        assert_eq!(req, SaveMemoryRequest::new("x"));
    }

    #[test]
    fn relationship_type_uses_snake_case() {
        let v = serde_json::to_value(RelationshipType::LedTo).unwrap();
        assert_eq!(v, json!("led_to"));
        assert_eq!(RelationshipType::LedTo.as_str(), "led_to");
    }

    #[test]
    fn scope_filter_matches() {
        assert!(ScopeFilter::All.matches(MemoryScope::Global));
        assert!(ScopeFilter::Project.matches(MemoryScope::Project));
        assert!(!ScopeFilter::Global.matches(MemoryScope::Project));
        assert_eq!(ScopeFilter::from(MemoryScope::Global), ScopeFilter::Global);
    }

    #[test]
    fn empty_update_is_detected() {
        assert!(UpdateMemoryRequest::default().is_empty());
        assert!(!UpdateMemoryRequest::default().importance(3).is_empty());
    }
}
