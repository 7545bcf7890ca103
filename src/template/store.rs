//! Template storage with CRUD operations

use chrono::Utc;
use dashmap::DashMap;
use uuid::Uuid;

use super::types::{Template, TemplateError, TemplateResult};

/// Keyed template storage contract consumed by the rendering pipeline.
///
/// Lookup by `code` is exact-match and case-sensitive. `list_all` returns
/// templates newest first. Uniqueness of `code` is enforced by the backend.
pub trait TemplateStore: Send + Sync {
    fn list_all(&self) -> Vec<Template>;

    fn get_by_code(&self, code: &str) -> TemplateResult<Template>;

    fn create(&self, code: &str, body: &str, description: Option<String>)
        -> TemplateResult<Template>;

    fn update(
        &self,
        id: Uuid,
        body: Option<String>,
        description: Option<String>,
    ) -> TemplateResult<Template>;

    fn delete(&self, id: Uuid) -> TemplateResult<()>;

    fn count(&self) -> usize;
}

/// In-memory template storage keyed by code
pub struct MemoryTemplateStore {
    templates: DashMap<String, Template>,
}

impl Default for MemoryTemplateStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryTemplateStore {
    pub fn new() -> Self {
        Self {
            templates: DashMap::new(),
        }
    }

    fn code_for_id(&self, id: Uuid) -> TemplateResult<String> {
        self.templates
            .iter()
            .find(|entry| entry.value().id == id)
            .map(|entry| entry.key().clone())
            .ok_or_else(|| TemplateError::NotFound(id.to_string()))
    }
}

impl TemplateStore for MemoryTemplateStore {
    fn list_all(&self) -> Vec<Template> {
        let mut templates: Vec<Template> = self
            .templates
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        templates.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        templates
    }

    fn get_by_code(&self, code: &str) -> TemplateResult<Template> {
        self.templates
            .get(code)
            .map(|t| t.clone())
            .ok_or_else(|| TemplateError::NotFound(code.to_string()))
    }

    fn create(
        &self,
        code: &str,
        body: &str,
        description: Option<String>,
    ) -> TemplateResult<Template> {
        if self.templates.contains_key(code) {
            return Err(TemplateError::AlreadyExists(code.to_string()));
        }

        let template = Template {
            id: Uuid::new_v4(),
            code: code.to_string(),
            body: body.to_string(),
            description,
            created_at: Utc::now(),
        };
        self.templates.insert(code.to_string(), template.clone());

        Ok(template)
    }

    fn update(
        &self,
        id: Uuid,
        body: Option<String>,
        description: Option<String>,
    ) -> TemplateResult<Template> {
        let code = self.code_for_id(id)?;
        let mut entry = self
            .templates
            .get_mut(&code)
            .ok_or_else(|| TemplateError::NotFound(id.to_string()))?;

        if let Some(body) = body {
            entry.body = body;
        }
        if let Some(description) = description {
            entry.description = Some(description);
        }

        Ok(entry.clone())
    }

    fn delete(&self, id: Uuid) -> TemplateResult<()> {
        let code = self.code_for_id(id)?;
        self.templates
            .remove(&code)
            .map(|_| ())
            .ok_or_else(|| TemplateError::NotFound(id.to_string()))
    }

    fn count(&self) -> usize {
        self.templates.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_and_get_by_code() {
        let store = MemoryTemplateStore::new();

        let created = store
            .create("BIENVENIDA", "Hola {{nombre}}", Some("welcome".to_string()))
            .unwrap();
        assert_eq!(created.code, "BIENVENIDA");

        let retrieved = store.get_by_code("BIENVENIDA").unwrap();
        assert_eq!(retrieved.id, created.id);
        assert_eq!(retrieved.body, "Hola {{nombre}}");
    }

    #[test]
    fn duplicate_code_is_a_conflict() {
        let store = MemoryTemplateStore::new();

        store.create("DUP", "first", None).unwrap();
        assert!(matches!(
            store.create("DUP", "second", None),
            Err(TemplateError::AlreadyExists(_))
        ));
        // The first body survives
        assert_eq!(store.get_by_code("DUP").unwrap().body, "first");
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let store = MemoryTemplateStore::new();

        store.create("BIENVENIDA", "Hola", None).unwrap();
        assert!(matches!(
            store.get_by_code("bienvenida"),
            Err(TemplateError::NotFound(_))
        ));
    }

    #[test]
    fn update_by_id_keeps_code_and_created_at() {
        let store = MemoryTemplateStore::new();

        let created = store.create("UPD", "original", None).unwrap();
        let updated = store
            .update(created.id, Some("changed".to_string()), None)
            .unwrap();

        assert_eq!(updated.code, "UPD");
        assert_eq!(updated.body, "changed");
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.description.is_none());
    }

    #[test]
    fn update_unknown_id_is_not_found() {
        let store = MemoryTemplateStore::new();
        assert!(matches!(
            store.update(Uuid::new_v4(), Some("body".to_string()), None),
            Err(TemplateError::NotFound(_))
        ));
    }

    #[test]
    fn delete_by_id() {
        let store = MemoryTemplateStore::new();

        let created = store.create("DEL", "body", None).unwrap();
        store.delete(created.id).unwrap();

        assert_eq!(store.count(), 0);
        assert!(matches!(
            store.delete(created.id),
            Err(TemplateError::NotFound(_))
        ));
    }

    #[test]
    fn list_all_is_newest_first() {
        let store = MemoryTemplateStore::new();

        for code in ["A", "B", "C"] {
            store.create(code, "body", None).unwrap();
        }

        let listed = store.list_all();
        assert_eq!(listed.len(), 3);
        assert!(listed
            .windows(2)
            .all(|pair| pair[0].created_at >= pair[1].created_at));
    }
}
