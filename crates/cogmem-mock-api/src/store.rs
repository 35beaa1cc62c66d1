//! In-memory store behind the mock API: memories, versions, links, team members.
//!
//! Search, context, extraction and promotion are fixed or plainly filtered answers; only the
//! record-keeping routes behave like the hosted service.

use chrono::Utc;
use cogmem_types::{
    IngestDocumentRequest, InviteMemberRequest, LinkMemoriesRequest, ListMemoriesQuery,
    MemoryScope, ProjectContextQuery, RecallRequest, RelationshipType, SaveMemoryRequest,
    SessionSummaryRequest, TeamRole, UpdateMemoryRequest, IMPORTANCE_RANGE,
};
use serde::Serialize;
use serde_json::{json, Value};
use std::collections::{BTreeMap, HashMap};

const EXPORT_FORMAT_VERSION: &str = "1.0";
const CHANGED_BY: &str = "api";

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Invalid(String),
    #[error("{0}")]
    Conflict(String),
}

fn memory_not_found() -> StoreError {
    StoreError::NotFound("Memory not found".to_string())
}

#[derive(Debug, Clone, Serialize)]
pub struct StoredMemory {
    pub id: u64,
    pub content: String,
    pub memory_type: String,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    pub importance: u8,
    pub scope: MemoryScope,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Snapshot of a memory taken before a change.
#[derive(Debug, Clone, Serialize)]
pub struct MemoryVersion {
    pub version: u32,
    pub content: String,
    pub importance: u8,
    pub scope: MemoryScope,
    pub changed_by: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct MemoryLink {
    pub id: u64,
    pub memory_id: u64,
    pub related_memory_id: u64,
    pub relationship_type: RelationshipType,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TeamMember {
    pub id: u64,
    pub email: String,
    pub project_id: String,
    pub role: TeamRole,
    pub status: String,
    pub invited_at: String,
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    memories: BTreeMap<u64, StoredMemory>,
    versions: HashMap<u64, Vec<MemoryVersion>>,
    links: Vec<MemoryLink>,
    members: BTreeMap<u64, TeamMember>,
    last_memory_id: u64,
    last_link_id: u64,
    last_member_id: u64,
}

fn now() -> String {
    Utc::now().to_rfc3339()
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn check_importance(importance: u8) -> Result<(), StoreError> {
    if IMPORTANCE_RANGE.contains(&importance) {
        Ok(())
    } else {
        Err(StoreError::Invalid(format!(
            "importance must be between 1 and 10, got {}",
            importance
        )))
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn memory_count(&self) -> usize {
        self.memories.len()
    }

    pub fn get(&self, id: u64) -> Option<&StoredMemory> {
        self.memories.get(&id)
    }

    fn find_duplicate(&self, content: &str, project_id: Option<&str>) -> Option<u64> {
        self.memories
            .values()
            .find(|m| m.project_id.as_deref() == project_id && m.content == content)
            .map(|m| m.id)
    }

    /// Insert a memory, or return the id of one with the same content in the same project.
    /// The flag is true when an existing memory was reused.
    fn insert(&mut self, req: SaveMemoryRequest) -> Result<(u64, bool), StoreError> {
        let content = req.content.trim().to_string();
        if content.is_empty() {
            return Err(StoreError::Invalid("content is required".to_string()));
        }
        check_importance(req.importance)?;
        let project_id = non_blank(req.project_id);
        if let Some(existing) = self.find_duplicate(&content, project_id.as_deref()) {
            return Ok((existing, true));
        }
        self.last_memory_id += 1;
        let id = self.last_memory_id;
        let ts = now();
        self.memories.insert(
            id,
            StoredMemory {
                id,
                content,
                memory_type: req.memory_type,
                category: req.category,
                subject: non_blank(req.subject),
                importance: req.importance,
                scope: req.scope,
                project_id,
                created_at: ts.clone(),
                updated_at: ts,
            },
        );
        Ok((id, false))
    }

    fn stored_reply(id: u64, reused: bool) -> Value {
        let mut res = json!({ "memory_id": id, "stored": !reused });
        if reused {
            res["deduplicated"] = json!(true);
        }
        res
    }

    fn snapshot(&mut self, id: u64) {
        if let Some(m) = self.memories.get(&id) {
            let history = self.versions.entry(id).or_default();
            history.push(MemoryVersion {
                version: history.len() as u32 + 1,
                content: m.content.clone(),
                importance: m.importance,
                scope: m.scope,
                changed_by: CHANGED_BY.to_string(),
                timestamp: now(),
            });
        }
    }

    fn current_version(&self, id: u64) -> usize {
        self.versions.get(&id).map_or(0, Vec::len) + 1
    }

    pub fn save(&mut self, req: SaveMemoryRequest) -> Result<Value, StoreError> {
        let (id, reused) = self.insert(req)?;
        Ok(Self::stored_reply(id, reused))
    }

    /// Memories whose content contains the query, case-insensitively, oldest first.
    pub fn recall(&self, req: &RecallRequest) -> Result<Value, StoreError> {
        let needle = req.query.trim().to_lowercase();
        if needle.is_empty() {
            return Err(StoreError::Invalid("query is required".to_string()));
        }
        let memories: Vec<&StoredMemory> = self
            .memories
            .values()
            .filter(|m| req.scope.matches(m.scope))
            .filter(|m| req.memory_type.as_deref().map_or(true, |t| m.memory_type == t))
            .filter(|m| m.content.to_lowercase().contains(&needle))
            .take(req.limit as usize)
            .collect();
        Ok(json!({ "count": memories.len(), "memories": memories }))
    }

    /// The project's memories, plus global ones when asked; `context` is ignored.
    pub fn context(&self, q: &ProjectContextQuery) -> Value {
        let project_id = non_blank(q.project_id.clone());
        let memories: Vec<&StoredMemory> = self
            .memories
            .values()
            .filter(|m| match m.scope {
                MemoryScope::Project => m.project_id == project_id,
                MemoryScope::Global => q.include_global,
            })
            .collect();
        json!({
            "project_id": project_id,
            "include_global": q.include_global,
            "total": memories.len(),
            "memories": memories,
        })
    }

    pub fn list(&self, q: &ListMemoriesQuery) -> Value {
        let matching: Vec<&StoredMemory> = self
            .memories
            .values()
            .filter(|m| q.scope.matches(m.scope))
            .filter(|m| q.memory_type.as_deref().map_or(true, |t| m.memory_type == t))
            .filter(|m| q.category.as_deref().map_or(true, |c| m.category == c))
            .collect();
        let total = matching.len();
        let page: Vec<&StoredMemory> = matching
            .into_iter()
            .skip(q.offset as usize)
            .take(q.limit as usize)
            .collect();
        let has_more = (q.offset as usize).saturating_add(page.len()) < total;
        json!({
            "memories": page,
            "total": total,
            "limit": q.limit,
            "offset": q.offset,
            "has_more": has_more,
        })
    }

    pub fn update(&mut self, id: u64, req: UpdateMemoryRequest) -> Result<Value, StoreError> {
        if !self.memories.contains_key(&id) {
            return Err(memory_not_found());
        }
        if req.is_empty() {
            return Err(StoreError::Invalid("nothing to update".to_string()));
        }
        let content = non_blank(req.content.clone());
        if req.content.is_some() && content.is_none() {
            return Err(StoreError::Invalid("content must not be empty".to_string()));
        }
        if let Some(importance) = req.importance {
            check_importance(importance)?;
        }
        self.snapshot(id);
        let version = self.current_version(id);
        let m = self.memories.get_mut(&id).ok_or_else(memory_not_found)?;
        if let Some(content) = content {
            m.content = content;
        }
        if let Some(importance) = req.importance {
            m.importance = importance;
        }
        if let Some(scope) = req.scope {
            m.scope = scope;
        }
        m.updated_at = now();
        Ok(json!({ "updated": true, "memory_id": id, "version": version }))
    }

    /// Remove a memory with its history and every link touching it.
    pub fn delete(&mut self, id: u64) -> Result<Value, StoreError> {
        self.memories.remove(&id).ok_or_else(memory_not_found)?;
        self.versions.remove(&id);
        self.links.retain(|l| l.memory_id != id && l.related_memory_id != id);
        Ok(json!({ "deleted": true, "memory_id": id }))
    }

    pub fn usage(&self) -> Value {
        json!({
            "tier": "free",
            "memory_count": self.memories.len(),
            "link_count": self.links.len(),
            "team_member_count": self.members.len(),
        })
    }

    /// Extraction is server-side AI; the mock never finds anything.
    pub fn extract(&self) -> Value {
        json!({ "extracted": 0, "memories": [] })
    }

    /// The whole document is kept as a single memory.
    pub fn ingest(&mut self, req: IngestDocumentRequest) -> Result<Value, StoreError> {
        let category =
            non_blank(req.document_type).unwrap_or_else(|| "documentation".to_string());
        let mut save = SaveMemoryRequest::new(req.text)
            .memory_type("document")
            .category(category);
        save.project_id = req.project_id;
        let (id, reused) = self.insert(save)?;
        Ok(json!({
            "chunks_processed": 1,
            "extracted": if reused { 0 } else { 1 },
            "memory_ids": [id],
        }))
    }

    pub fn session_summary(&mut self, req: SessionSummaryRequest) -> Result<Value, StoreError> {
        let mut save = SaveMemoryRequest::new(req.summary)
            .memory_type("session_summary")
            .category("session")
            .importance(6);
        save.project_id = req.project_id;
        let (id, reused) = self.insert(save)?;
        Ok(Self::stored_reply(id, reused))
    }

    pub fn export(&self) -> Value {
        let memories: Vec<&StoredMemory> = self.memories.values().collect();
        json!({
            "version": EXPORT_FORMAT_VERSION,
            "exported_at": now(),
            "memory_count": memories.len(),
            "memories": memories,
        })
    }

    /// Import exported (or hand-written) memories. Ids in the input are ignored; items without
    /// content count as errors and duplicates are skipped.
    pub fn import(&mut self, items: Vec<Value>) -> Value {
        let (mut imported, mut skipped, mut errors) = (0usize, 0usize, 0usize);
        for item in items {
            match import_item(&item).map(|req| self.insert(req)) {
                Some(Ok((_, false))) => imported += 1,
                Some(Ok((_, true))) => skipped += 1,
                Some(Err(_)) | None => errors += 1,
            }
        }
        json!({ "imported": imported, "skipped": skipped, "errors": errors })
    }

    pub fn versions(&self, id: u64) -> Result<Value, StoreError> {
        if !self.memories.contains_key(&id) {
            return Err(memory_not_found());
        }
        let versions = self.versions.get(&id).cloned().unwrap_or_default();
        Ok(json!({
            "memory_id": id,
            "current_version": self.current_version(id),
            "versions": versions,
        }))
    }

    pub fn team_members(&self, project_id: Option<&str>) -> Value {
        let members: Vec<&TeamMember> = self
            .members
            .values()
            .filter(|m| project_id.map_or(true, |p| m.project_id == p))
            .collect();
        json!({ "members": members })
    }

    pub fn invite(&mut self, req: InviteMemberRequest) -> Result<Value, StoreError> {
        let email = req.email.trim().to_lowercase();
        if !email.contains('@') {
            return Err(StoreError::Invalid(format!(
                "invalid email address: {:?}",
                req.email
            )));
        }
        let project_id = req.project_id.trim().to_string();
        if project_id.is_empty() {
            return Err(StoreError::Invalid("project_id is required".to_string()));
        }
        if self
            .members
            .values()
            .any(|m| m.email == email && m.project_id == project_id)
        {
            return Err(StoreError::Conflict(format!(
                "{} is already a member of {}",
                email, project_id
            )));
        }
        self.last_member_id += 1;
        let id = self.last_member_id;
        self.members.insert(
            id,
            TeamMember {
                id,
                email,
                project_id,
                role: req.role,
                status: "invited".to_string(),
                invited_at: now(),
            },
        );
        Ok(json!({ "invited": true, "member_id": id, "status": "invited", "role": req.role }))
    }

    pub fn remove_member(&mut self, id: u64) -> Result<Value, StoreError> {
        self.members
            .remove(&id)
            .ok_or_else(|| StoreError::NotFound("Team member not found".to_string()))?;
        Ok(json!({ "removed": true, "member_id": id }))
    }

    pub fn link(&mut self, id: u64, req: LinkMemoriesRequest) -> Result<Value, StoreError> {
        if id == req.related_memory_id {
            return Err(StoreError::Invalid(
                "a memory cannot be linked to itself".to_string(),
            ));
        }
        for needed in [id, req.related_memory_id] {
            if !self.memories.contains_key(&needed) {
                return Err(StoreError::NotFound(format!("Memory {} not found", needed)));
            }
        }
        let relationship_type = req.relationship_type.unwrap_or_default();
        self.last_link_id += 1;
        let link_id = self.last_link_id;
        self.links.push(MemoryLink {
            id: link_id,
            memory_id: id,
            related_memory_id: req.related_memory_id,
            relationship_type,
            created_at: now(),
        });
        Ok(json!({
            "linked": true,
            "link_id": link_id,
            "relationship_type": relationship_type,
        }))
    }

    /// Links in both directions, each with the other memory's content.
    pub fn links(&self, id: u64) -> Result<Value, StoreError> {
        if !self.memories.contains_key(&id) {
            return Err(memory_not_found());
        }
        let links: Vec<Value> = self
            .links
            .iter()
            .filter(|l| l.memory_id == id || l.related_memory_id == id)
            .map(|l| {
                let (other, direction) = if l.memory_id == id {
                    (l.related_memory_id, "outgoing")
                } else {
                    (l.memory_id, "incoming")
                };
                json!({
                    "link_id": l.id,
                    "memory_id": other,
                    "relationship_type": l.relationship_type,
                    "direction": direction,
                    "content": self.memories.get(&other).map(|m| m.content.as_str()),
                })
            })
            .collect();
        Ok(json!({ "memory_id": id, "links": links }))
    }

    /// Candidate discovery is server-side; the mock never proposes any.
    pub fn promotion_candidates(&self) -> Value {
        json!({ "candidates": [] })
    }

    pub fn promote(&mut self, id: u64) -> Result<Value, StoreError> {
        let scope = self
            .memories
            .get(&id)
            .map(|m| m.scope)
            .ok_or_else(memory_not_found)?;
        if scope == MemoryScope::Global {
            return Ok(json!({ "promoted": false, "memory_id": id, "already_global": true }));
        }
        self.snapshot(id);
        if let Some(m) = self.memories.get_mut(&id) {
            m.scope = MemoryScope::Global;
            m.updated_at = now();
        }
        Ok(json!({ "promoted": true, "memory_id": id, "scope": MemoryScope::Global }))
    }
}

fn import_item(item: &Value) -> Option<SaveMemoryRequest> {
    let obj = item.as_object()?;
    let content = obj.get("content").and_then(Value::as_str)?;
    let text = |key: &str| obj.get(key).and_then(Value::as_str).map(str::to_string);
    let mut req = SaveMemoryRequest::new(content);
    if let Some(memory_type) = text("memory_type") {
        req.memory_type = memory_type;
    }
    if let Some(category) = text("category") {
        req.category = category;
    }
    req.subject = text("subject");
    req.project_id = text("project_id");
    if let Some(importance) = obj
        .get("importance")
        .and_then(Value::as_u64)
        .and_then(|i| u8::try_from(i).ok())
    {
        req.importance = importance;
    }
    if let Some(scope) = obj
        .get("scope")
        .and_then(|s| serde_json::from_value::<MemoryScope>(s.clone()).ok())
    {
        req.scope = scope;
    }
    Some(req)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn save(store: &mut MemoryStore, req: SaveMemoryRequest) -> u64 {
        store.save(req).unwrap()["memory_id"].as_u64().unwrap()
    }

    #[test]
    fn same_content_in_same_project_is_deduplicated() {
        let mut store = MemoryStore::new();
        let a = save(&mut store, SaveMemoryRequest::new("Uses Postgres").project_id("p1"));
        let res = store
            .save(SaveMemoryRequest::new("  Uses Postgres ").project_id("p1"))
            .unwrap();
        assert_eq!(res["memory_id"], a);
        assert_eq!(res["deduplicated"], true);
        assert_eq!(res["stored"], false);

        let b = save(&mut store, SaveMemoryRequest::new("Uses Postgres").project_id("p2"));
        assert_ne!(a, b);
        assert_eq!(store.memory_count(), 2);
    }

    #[test]
    fn repeated_session_summary_is_not_stored_twice() {
        let mut store = MemoryStore::new();
        let first = store
            .session_summary(SessionSummaryRequest::new("Fixed login bug").project_id("p1"))
            .unwrap();
        assert_eq!(first["stored"], true);

        let second = store
            .session_summary(SessionSummaryRequest::new("Fixed login bug").project_id("p1"))
            .unwrap();
        assert_eq!(second["stored"], false);
        assert_eq!(second["deduplicated"], true);
        assert_eq!(second["memory_id"], first["memory_id"]);
        assert_eq!(store.memory_count(), 1);
    }

    #[test]
    fn recall_filters_by_substring_scope_and_limit() {
        let mut store = MemoryStore::new();
        let first = save(&mut store, SaveMemoryRequest::new("Frontend is React"));
        save(
            &mut store,
            SaveMemoryRequest::new("React app built with Vite").scope(MemoryScope::Global),
        );
        save(&mut store, SaveMemoryRequest::new("Database is Postgres"));

        let res = store.recall(&RecallRequest::new("react")).unwrap();
        assert_eq!(res["count"], 2);
        assert_eq!(res["memories"][0]["id"], first);

        let res = store
            .recall(&RecallRequest::new("REACT").scope(cogmem_types::ScopeFilter::Global))
            .unwrap();
        assert_eq!(res["count"], 1);

        let res = store.recall(&RecallRequest::new("react").limit(1)).unwrap();
        assert_eq!(res["count"], 1);
        assert!(matches!(
            store.recall(&RecallRequest::new("  ")),
            Err(StoreError::Invalid(_))
        ));
    }

    #[test]
    fn context_includes_global_only_when_asked() {
        let mut store = MemoryStore::new();
        let local = save(&mut store, SaveMemoryRequest::new("Local fact").project_id("p1"));
        let global = save(
            &mut store,
            SaveMemoryRequest::new("Prefer tabs").scope(MemoryScope::Global),
        );
        save(&mut store, SaveMemoryRequest::new("Other project").project_id("p2"));

        let res = store.context(&ProjectContextQuery::for_project("p1"));
        assert_eq!(res["memories"][0]["id"], local);
        assert_eq!(res["memories"][1]["id"], global);
        assert_eq!(res["total"], 2);

        let res = store.context(&ProjectContextQuery::for_project("p1").include_global(false));
        assert_eq!(res["total"], 1);
    }

    #[test]
    fn update_keeps_version_history() {
        let mut store = MemoryStore::new();
        let id = save(&mut store, SaveMemoryRequest::new("v1 text").importance(4));
        let res = store
            .update(id, UpdateMemoryRequest::default().content("v2 text"))
            .unwrap();
        assert_eq!(res["version"], 2);
        store
            .update(id, UpdateMemoryRequest::default().importance(8))
            .unwrap();

        let res = store.versions(id).unwrap();
        assert_eq!(res["current_version"], 3);
        let versions = res["versions"].as_array().unwrap();
        assert_eq!(versions.len(), 2);
        assert_eq!(versions[0]["content"], "v1 text");
        assert_eq!(versions[1]["content"], "v2 text");
        assert_eq!(versions[1]["importance"], 4);
        assert_eq!(store.get(id).unwrap().importance, 8);

        assert!(matches!(
            store.update(id, UpdateMemoryRequest::default().content(" ")),
            Err(StoreError::Invalid(_))
        ));
        assert!(matches!(
            store.update(99, UpdateMemoryRequest::default().importance(3)),
            Err(StoreError::NotFound(_))
        ));
    }

    #[test]
    fn delete_is_not_found_the_second_time_and_drops_links() {
        let mut store = MemoryStore::new();
        let a = save(&mut store, SaveMemoryRequest::new("Chose Axum"));
        let b = save(&mut store, SaveMemoryRequest::new("Dropped Actix"));
        store.link(a, LinkMemoriesRequest::new(b)).unwrap();

        store.delete(b).unwrap();
        assert!(matches!(store.delete(b), Err(StoreError::NotFound(_))));
        assert_eq!(store.links(a).unwrap()["links"], json!([]));
    }

    #[test]
    fn links_are_visible_from_both_ends() {
        let mut store = MemoryStore::new();
        let a = save(&mut store, SaveMemoryRequest::new("Outage on Monday"));
        let b = save(&mut store, SaveMemoryRequest::new("Added health checks"));
        store
            .link(
                a,
                LinkMemoriesRequest::new(b).relationship_type(RelationshipType::LedTo),
            )
            .unwrap();

        let from_a = store.links(a).unwrap();
        assert_eq!(from_a["links"][0]["direction"], "outgoing");
        assert_eq!(from_a["links"][0]["relationship_type"], "led_to");
        let from_b = store.links(b).unwrap();
        assert_eq!(from_b["links"][0]["direction"], "incoming");
        assert_eq!(from_b["links"][0]["content"], "Outage on Monday");

        assert!(matches!(
            store.link(a, LinkMemoriesRequest::new(99)),
            Err(StoreError::NotFound(_))
        ));
        assert!(matches!(
            store.link(a, LinkMemoriesRequest::new(a)),
            Err(StoreError::Invalid(_))
        ));
    }

    #[test]
    fn promote_moves_memory_to_global_once() {
        let mut store = MemoryStore::new();
        let id = save(&mut store, SaveMemoryRequest::new("Always run clippy").project_id("p1"));
        assert_eq!(store.promotion_candidates(), json!({ "candidates": [] }));

        assert_eq!(store.promote(id).unwrap()["promoted"], true);
        assert_eq!(store.get(id).unwrap().scope, MemoryScope::Global);
        assert_eq!(store.promote(id).unwrap()["already_global"], true);
        assert_eq!(store.versions(id).unwrap()["current_version"], 2);
        assert!(matches!(store.promote(99), Err(StoreError::NotFound(_))));
    }

    #[test]
    fn import_skips_duplicates_and_counts_errors() {
        let mut store = MemoryStore::new();
        save(&mut store, SaveMemoryRequest::new("Existing"));
        let res = store.import(vec![
            json!({ "content": "Existing" }),
            json!({ "content": "New one", "importance": 7, "memory_type": "decision" }),
            json!({ "content": "Too important", "importance": 11 }),
            json!({ "importance": 3 }),
            json!("not an object"),
        ]);
        assert_eq!(res, json!({ "imported": 1, "skipped": 1, "errors": 3 }));
        let listed = store.list(&ListMemoriesQuery::default().memory_type("decision"));
        assert_eq!(listed["memories"][0]["importance"], 7);
    }

    #[test]
    fn ingest_keeps_document_whole() {
        let mut store = MemoryStore::new();
        let res = store
            .ingest(
                IngestDocumentRequest::new("# Setup\n\nRun make.")
                    .document_type("README")
                    .project_id("p1"),
            )
            .unwrap();
        assert_eq!(res["chunks_processed"], 1);
        let id = res["memory_ids"][0].as_u64().unwrap();
        assert_eq!(store.get(id).unwrap().category, "README");
        assert_eq!(store.extract()["extracted"], 0);
    }

    #[test]
    fn team_invites_are_unique_per_project() {
        let mut store = MemoryStore::new();
        let res = store
            .invite(InviteMemberRequest::new("Dev@Example.com", "p1"))
            .unwrap();
        let id = res["member_id"].as_u64().unwrap();
        assert!(matches!(
            store.invite(InviteMemberRequest::new("dev@example.com", "p1")),
            Err(StoreError::Conflict(_))
        ));
        store
            .invite(InviteMemberRequest::new("dev@example.com", "p2").role(TeamRole::Viewer))
            .unwrap();
        assert_eq!(store.team_members(Some("p2"))["members"][0]["role"], "viewer");
        store.remove_member(id).unwrap();
        assert!(matches!(store.remove_member(id), Err(StoreError::NotFound(_))));
    }
}
