//! In-process [`ResourceApi`] that keeps created objects in a map.

use super::{DynamicObject, GroupVersionResource, ResourceApi};
use crate::error::SubmitError;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

type ObjectKey = (String, String, String);

/// Behaves like the real server for create: names are unique per
/// resource/namespace and a second create with the same name conflicts.
#[derive(Debug, Default)]
pub struct InMemoryApi {
    objects: Mutex<BTreeMap<ObjectKey, DynamicObject>>,
    create_calls: AtomicUsize,
}

impl InMemoryApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of create calls received, successful or not.
    pub fn create_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }

    pub fn get(
        &self,
        gvr: &GroupVersionResource,
        namespace: Option<&str>,
        name: &str,
    ) -> Option<DynamicObject> {
        let objects = self.objects.lock().ok()?;
        objects
            .get(&(gvr.to_string(), namespace.unwrap_or_default().to_string(), name.to_string()))
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.objects.lock().map(|o| o.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ResourceApi for InMemoryApi {
    async fn create(
        &self,
        gvr: &GroupVersionResource,
        namespace: Option<&str>,
        mut object: DynamicObject,
    ) -> Result<DynamicObject, SubmitError> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);

        let name = match object.name() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => {
                return Err(SubmitError::Invalid {
                    resource: gvr.to_string(),
                    name: String::new(),
                    message: "metadata.name: Required value".into(),
                })
            }
        };

        let mut objects = self.objects.lock().map_err(|_| SubmitError::Server {
            status: 500,
            message: "store lock poisoned".into(),
        })?;

        let key = (
            gvr.to_string(),
            namespace.unwrap_or_default().to_string(),
            name.clone(),
        );
        if objects.contains_key(&key) {
            return Err(SubmitError::Conflict {
                resource: gvr.to_string(),
                name: name.clone(),
                message: format!("{} \"{}\" already exists", gvr, name),
            });
        }

        let resource_version = (objects.len() + 1).to_string();
        if let Some(Value::Object(metadata)) = object.as_map_mut().get_mut("metadata") {
            metadata.insert("resourceVersion".into(), Value::String(resource_version));
            if let Some(ns) = namespace.filter(|ns| !ns.is_empty()) {
                metadata.insert("namespace".into(), Value::String(ns.to_string()));
            }
        }

        objects.insert(key, object.clone());
        Ok(object)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(name: &str) -> DynamicObject {
        match json!({
            "apiVersion": "tilt.dev/v1alpha1",
            "kind": "FileWatch",
            "metadata": {"name": name},
            "spec": {"watchedPaths": ["/src"], "ignores": []}
        }) {
            Value::Object(map) => DynamicObject::new(map),
            _ => unreachable!(),
        }
    }

    #[tokio::test]
    async fn test_create_stores_object() {
        let api = InMemoryApi::new();
        let gvr = GroupVersionResource::file_watches();

        let created = api.create(&gvr, None, object("a")).await.unwrap();
        assert_eq!(created.name(), Some("a"));
        assert_eq!(created.as_map()["metadata"]["resourceVersion"], json!("1"));
        assert_eq!(api.get(&gvr, None, "a"), Some(created));
        assert_eq!(api.len(), 1);
    }

    #[tokio::test]
    async fn test_second_create_conflicts() {
        let api = InMemoryApi::new();
        let gvr = GroupVersionResource::file_watches();

        api.create(&gvr, None, object("a")).await.unwrap();
        let err = api.create(&gvr, None, object("a")).await.unwrap_err();

        assert!(err.is_conflict());
        assert_eq!(api.create_calls(), 2);
        assert_eq!(api.len(), 1);
    }

    #[tokio::test]
    async fn test_same_name_in_other_namespace_is_allowed() {
        let api = InMemoryApi::new();
        let gvr = GroupVersionResource::file_watches();

        api.create(&gvr, None, object("a")).await.unwrap();
        let created = api.create(&gvr, Some("dev"), object("a")).await.unwrap();

        assert_eq!(created.as_map()["metadata"]["namespace"], json!("dev"));
        assert_eq!(api.len(), 2);
    }

    #[tokio::test]
    async fn test_missing_name_is_invalid() {
        let api = InMemoryApi::new();
        let gvr = GroupVersionResource::file_watches();

        let err = api.create(&gvr, None, DynamicObject::default()).await.unwrap_err();
        assert!(matches!(err, SubmitError::Invalid { .. }));
        assert!(api.is_empty());
    }
}
