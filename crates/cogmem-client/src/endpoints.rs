//! One request builder per API operation.
//!
//! Builders validate their parameters and produce an [`ApiRequest`] relative to the API root.
//! They never touch the network; auth headers and the timeout are applied by the client.

use cogmem_types::{
    ApiRequest, CogmemError, ExtractRequest, ImportMemoriesRequest, IngestDocumentRequest,
    InviteMemberRequest, LinkMemoriesRequest, ListMemoriesQuery, ProjectContextQuery,
    RecallRequest, Result, SaveMemoryRequest, SessionSummaryRequest, TeamMembersQuery,
    UpdateMemoryRequest, IMPORTANCE_RANGE,
};
use serde::Serialize;
use serde_json::Value;

fn require(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CogmemError::validation(field, "is required"));
    }
    Ok(())
}

fn check_importance(importance: u8) -> Result<()> {
    if !IMPORTANCE_RANGE.contains(&importance) {
        return Err(CogmemError::validation(
            "importance",
            format!(
                "must be between {} and {}, got {}",
                IMPORTANCE_RANGE.start(),
                IMPORTANCE_RANGE.end(),
                importance
            ),
        ));
    }
    Ok(())
}

fn check_limit(limit: u32) -> Result<()> {
    if limit == 0 {
        return Err(CogmemError::validation("limit", "must be at least 1"));
    }
    Ok(())
}

fn to_body<T: Serialize>(value: &T) -> Result<Value> {
    serde_json::to_value(value).map_err(|e| CogmemError::validation("body", e.to_string()))
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

pub fn save_memory(req: &SaveMemoryRequest) -> Result<ApiRequest> {
    require("content", &req.content)?;
    check_importance(req.importance)?;
    Ok(ApiRequest::post("store", to_body(req)?))
}

pub fn recall_memories(req: &RecallRequest) -> Result<ApiRequest> {
    require("query", &req.query)?;
    check_limit(req.limit)?;
    Ok(ApiRequest::post("recall", to_body(req)?))
}

pub fn extract_memories(req: &ExtractRequest) -> Result<ApiRequest> {
    require("user_message", &req.user_message)?;
    Ok(ApiRequest::post("extract", to_body(req)?))
}

pub fn get_project_context(query: &ProjectContextQuery) -> Result<ApiRequest> {
    let mut req = ApiRequest::get("context").with_query(
        "include_global",
        if query.include_global { "true" } else { "false" },
    );
    if let Some(project_id) = non_blank(&query.project_id) {
        req = req.with_query("project_id", project_id);
    }
    if let Some(context) = non_blank(&query.context) {
        req = req.with_query("context", context);
    }
    Ok(req)
}

pub fn list_memories(query: &ListMemoriesQuery) -> Result<ApiRequest> {
    check_limit(query.limit)?;
    let mut req = ApiRequest::get("memories")
        .with_query("limit", query.limit.to_string())
        .with_query("offset", query.offset.to_string())
        .with_query("scope", query.scope.as_str());
    if let Some(memory_type) = non_blank(&query.memory_type) {
        req = req.with_query("memory_type", memory_type);
    }
    if let Some(category) = non_blank(&query.category) {
        req = req.with_query("category", category);
    }
    Ok(req)
}

pub fn update_memory(memory_id: u64, req: &UpdateMemoryRequest) -> Result<ApiRequest> {
    if req.is_empty() {
        return Err(CogmemError::validation(
            "update",
            "at least one of content, importance or scope must be set",
        ));
    }
    if let Some(ref content) = req.content {
        require("content", content)?;
    }
    if let Some(importance) = req.importance {
        check_importance(importance)?;
    }
    Ok(ApiRequest::patch(format!("memory/{}", memory_id), to_body(req)?))
}

pub fn delete_memory(memory_id: u64) -> Result<ApiRequest> {
    Ok(ApiRequest::delete(format!("memory/{}", memory_id)))
}

pub fn get_usage() -> Result<ApiRequest> {
    Ok(ApiRequest::get("usage"))
}

pub fn ingest_document(req: &IngestDocumentRequest) -> Result<ApiRequest> {
    require("text", &req.text)?;
    Ok(ApiRequest::post("ingest", to_body(req)?))
}

pub fn save_session_summary(req: &SessionSummaryRequest) -> Result<ApiRequest> {
    require("summary", &req.summary)?;
    Ok(ApiRequest::post("session-summary", to_body(req)?))
}

pub fn export_memories() -> Result<ApiRequest> {
    Ok(ApiRequest::get("export"))
}

pub fn import_memories(memories: &[Value]) -> Result<ApiRequest> {
    if memories.is_empty() {
        return Err(CogmemError::validation("memories", "must not be empty"));
    }
    if let Some(pos) = memories.iter().position(|m| !m.is_object()) {
        return Err(CogmemError::validation(
            "memories",
            format!("item {} is not a JSON object", pos),
        ));
    }
    let body = ImportMemoriesRequest {
        memories: memories.to_vec(),
    };
    Ok(ApiRequest::post("import", to_body(&body)?))
}

pub fn get_memory_versions(memory_id: u64) -> Result<ApiRequest> {
    Ok(ApiRequest::get(format!("memory/{}/versions", memory_id)))
}

pub fn get_team_members(query: &TeamMembersQuery) -> Result<ApiRequest> {
    let mut req = ApiRequest::get("team/members");
    if let Some(project_id) = query
        .project_id
        .as_deref()
        .map(str::trim)
        .filter(|p| !p.is_empty())
    {
        req = req.with_query("project_id", project_id);
    }
    Ok(req)
}

pub fn invite_team_member(req: &InviteMemberRequest) -> Result<ApiRequest> {
    require("email", &req.email)?;
    if !req.email.contains('@') {
        return Err(CogmemError::validation(
            "email",
            format!("{:?} is not an email address", req.email),
        ));
    }
    require("project_id", &req.project_id)?;
    Ok(ApiRequest::post("team/invite", to_body(req)?))
}

pub fn remove_team_member(member_id: u64) -> Result<ApiRequest> {
    Ok(ApiRequest::delete(format!("team/remove/{}", member_id)))
}

pub fn link_memories(memory_id: u64, req: &LinkMemoriesRequest) -> Result<ApiRequest> {
    if req.related_memory_id == memory_id {
        return Err(CogmemError::validation(
            "related_memory_id",
            "a memory cannot be linked to itself",
        ));
    }
    Ok(ApiRequest::post(format!("memory/{}/link", memory_id), to_body(req)?))
}

pub fn get_memory_links(memory_id: u64) -> Result<ApiRequest> {
    Ok(ApiRequest::get(format!("memory/{}/links", memory_id)))
}

pub fn get_promotion_candidates() -> Result<ApiRequest> {
    Ok(ApiRequest::get("promotion-candidates"))
}

pub fn promote_to_global(memory_id: u64) -> Result<ApiRequest> {
    Ok(ApiRequest::post(
        format!("memory/{}/promote", memory_id),
        Value::Object(Default::default()),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cogmem_types::{HttpMethod, MemoryScope, RelationshipType, ScopeFilter, TeamRole};
    use serde_json::json;

    fn field_of(err: CogmemError) -> &'static str {
        match err {
            CogmemError::Validation { field, .. } => field,
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn save_memory_posts_full_body() {
        let req = save_memory(
            &SaveMemoryRequest::new("This project uses React with TypeScript")
                .memory_type("architecture")
                .category("frontend")
                .importance(8)
                .project_id("web"),
        )
        .unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "store");
        assert_eq!(
            req.body.unwrap(),
            json!({
                "content": "This project uses React with TypeScript",
                "memory_type": "architecture",
                "category": "frontend",
                "importance": 8,
                "scope": "project",
                "project_id": "web"
            })
        );
    }

    #[test]
    fn required_strings_reject_blank_values() {
        assert_eq!(
            field_of(save_memory(&SaveMemoryRequest::new("  ")).unwrap_err()),
            "content"
        );
        assert_eq!(
            field_of(recall_memories(&RecallRequest::new("")).unwrap_err()),
            "query"
        );
        assert_eq!(
            field_of(extract_memories(&ExtractRequest::new("")).unwrap_err()),
            "user_message"
        );
        assert_eq!(
            field_of(ingest_document(&IngestDocumentRequest::new("\n")).unwrap_err()),
            "text"
        );
        assert_eq!(
            field_of(save_session_summary(&SessionSummaryRequest::new("")).unwrap_err()),
            "summary"
        );
        assert_eq!(
            field_of(invite_team_member(&InviteMemberRequest::new("", "p")).unwrap_err()),
            "email"
        );
        assert_eq!(
            field_of(invite_team_member(&InviteMemberRequest::new("a@b.c", " ")).unwrap_err()),
            "project_id"
        );
    }

    #[test]
    fn importance_outside_range_is_rejected() {
        for importance in [0, 11] {
            let err = save_memory(&SaveMemoryRequest::new("fact").importance(importance));
            assert_eq!(field_of(err.unwrap_err()), "importance");
        }
        let err = update_memory(1, &UpdateMemoryRequest::default().importance(42));
        assert_eq!(field_of(err.unwrap_err()), "importance");
    }

    #[test]
    fn recall_posts_query_with_defaults() {
        let req = recall_memories(&RecallRequest::new("what framework?")).unwrap();
        assert_eq!(req.path, "recall");
        assert_eq!(
            req.body.unwrap(),
            json!({ "query": "what framework?", "limit": 10, "scope": "all" })
        );
        let req = recall_memories(&RecallRequest::new("db").memory_type("decision")).unwrap();
        assert_eq!(req.body.unwrap()["memory_type"], "decision");
    }

    #[test]
    fn project_context_uses_query_string() {
        let req = get_project_context(
            &ProjectContextQuery::for_project("my-project")
                .include_global(false)
                .context("auth"),
        )
        .unwrap();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "context");
        assert!(req.body.is_none());
        assert_eq!(req.query_value("include_global"), Some("false"));
        assert_eq!(req.query_value("project_id"), Some("my-project"));
        assert_eq!(req.query_value("context"), Some("auth"));

        let req = get_project_context(&ProjectContextQuery::default()).unwrap();
        assert_eq!(
            req.query,
            vec![("include_global".to_string(), "true".to_string())]
        );
    }

    #[test]
    fn list_memories_carries_filters() {
        let req = list_memories(
            &ListMemoriesQuery::default()
                .memory_type("decision")
                .category("backend")
                .scope(ScopeFilter::Global)
                .limit(5)
                .offset(10),
        )
        .unwrap();
        assert_eq!(req.path, "memories");
        assert_eq!(req.query_value("limit"), Some("5"));
        assert_eq!(req.query_value("offset"), Some("10"));
        assert_eq!(req.query_value("scope"), Some("global"));
        assert_eq!(req.query_value("memory_type"), Some("decision"));
        assert_eq!(req.query_value("category"), Some("backend"));

        assert_eq!(
            field_of(list_memories(&ListMemoriesQuery::default().limit(0)).unwrap_err()),
            "limit"
        );
    }

    #[test]
    fn update_requires_a_change() {
        assert_eq!(
            field_of(update_memory(3, &UpdateMemoryRequest::default()).unwrap_err()),
            "update"
        );
        let req = update_memory(
            3,
            &UpdateMemoryRequest::default().scope(MemoryScope::Global),
        )
        .unwrap();
        assert_eq!(req.method, HttpMethod::Patch);
        assert_eq!(req.path, "memory/3");
        assert_eq!(req.body.unwrap(), json!({ "scope": "global" }));
    }

    #[test]
    fn id_paths() {
        assert_eq!(delete_memory(7).unwrap().path, "memory/7");
        assert_eq!(delete_memory(7).unwrap().method, HttpMethod::Delete);
        assert_eq!(get_memory_versions(7).unwrap().path, "memory/7/versions");
        assert_eq!(get_memory_links(7).unwrap().path, "memory/7/links");
        assert_eq!(remove_team_member(9).unwrap().path, "team/remove/9");
        let promote = promote_to_global(7).unwrap();
        assert_eq!(promote.path, "memory/7/promote");
        assert_eq!(promote.body, Some(json!({})));
    }

    #[test]
    fn import_rejects_empty_and_non_objects() {
        assert_eq!(field_of(import_memories(&[]).unwrap_err()), "memories");
        assert_eq!(
            field_of(import_memories(&[json!({"content": "a"}), json!("b")]).unwrap_err()),
            "memories"
        );
        let req = import_memories(&[json!({"content": "a", "importance": 3})]).unwrap();
        assert_eq!(
            req.body.unwrap(),
            json!({ "memories": [{ "content": "a", "importance": 3 }] })
        );
    }

    #[test]
    fn team_requests() {
        let req = get_team_members(&TeamMembersQuery::for_project("proj")).unwrap();
        assert_eq!(req.path, "team/members");
        assert_eq!(req.query_value("project_id"), Some("proj"));
        assert!(get_team_members(&TeamMembersQuery::default())
            .unwrap()
            .query
            .is_empty());
        assert!(get_team_members(&TeamMembersQuery::for_project("  "))
            .unwrap()
            .query
            .is_empty());

        let req = invite_team_member(
            &InviteMemberRequest::new("dev@example.com", "proj").role(TeamRole::Viewer),
        )
        .unwrap();
        assert_eq!(
            req.body.unwrap(),
            json!({ "email": "dev@example.com", "project_id": "proj", "role": "viewer" })
        );
        assert_eq!(
            field_of(invite_team_member(&InviteMemberRequest::new("nobody", "p")).unwrap_err()),
            "email"
        );
    }

    #[test]
    fn link_rejects_self_link() {
        assert_eq!(
            field_of(link_memories(4, &LinkMemoriesRequest::new(4)).unwrap_err()),
            "related_memory_id"
        );
        let req = link_memories(
            4,
            &LinkMemoriesRequest::new(5).relationship_type(RelationshipType::Contradicts),
        )
        .unwrap();
        assert_eq!(req.path, "memory/4/link");
        assert_eq!(
            req.body.unwrap(),
            json!({ "related_memory_id": 5, "relationship_type": "contradicts" })
        );
    }
}
