//! Schema-less access to the control plane's resource API.
//!
//! Objects travel as [`DynamicObject`] (a JSON map) and are addressed by
//! [`GroupVersionResource`]. [`ResourceApi`] is the seam between the create
//! pipeline and the transport: [`ApiClient`] talks HTTP, and tests swap in an
//! in-process store.

pub mod client;
#[cfg(test)]
pub mod memory;
pub mod unstructured;

pub use client::ApiClient;
#[cfg(test)]
pub use memory::InMemoryApi;
pub use unstructured::{from_unstructured, to_unstructured};

use crate::error::{Result, SubmitError};
use crate::filewatch::FileWatch;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Addresses a resource collection on the server.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GroupVersionResource {
    pub group: String,
    pub version: String,
    pub resource: String,
}

impl GroupVersionResource {
    pub fn new(
        group: impl Into<String>,
        version: impl Into<String>,
        resource: impl Into<String>,
    ) -> Self {
        Self {
            group: group.into(),
            version: version.into(),
            resource: resource.into(),
        }
    }

    pub fn file_watches() -> Self {
        use crate::filewatch::{API_GROUP, API_VERSION, RESOURCE};
        Self::new(API_GROUP, API_VERSION, RESOURCE)
    }

    /// URL path of the collection, e.g. `/apis/tilt.dev/v1alpha1/filewatches`.
    pub fn collection_path(&self, namespace: Option<&str>) -> String {
        let prefix = if self.group.is_empty() {
            format!("/api/{}", self.version)
        } else {
            format!("/apis/{}/{}", self.group, self.version)
        };
        match namespace {
            Some(ns) if !ns.is_empty() => {
                format!("{}/namespaces/{}/{}", prefix, ns, self.resource)
            }
            _ => format!("{}/{}", prefix, self.resource),
        }
    }
}

impl fmt::Display for GroupVersionResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.group.is_empty() {
            write!(f, "{}", self.resource)
        } else {
            write!(f, "{}.{}", self.resource, self.group)
        }
    }
}

/// A schema-less object as stored by the server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DynamicObject(Map<String, Value>);

impl DynamicObject {
    pub fn new(map: Map<String, Value>) -> Self {
        Self(map)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn as_map_mut(&mut self) -> &mut Map<String, Value> {
        &mut self.0
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }

    pub fn api_version(&self) -> Option<&str> {
        self.0.get("apiVersion").and_then(Value::as_str)
    }

    pub fn kind(&self) -> Option<&str> {
        self.0.get("kind").and_then(Value::as_str)
    }

    pub fn name(&self) -> Option<&str> {
        self.0
            .get("metadata")
            .and_then(|m| m.get("name"))
            .and_then(Value::as_str)
    }

    /// `kind.group/name` in lower case, e.g. `filewatch.tilt.dev/src`.
    pub fn qualified_name(&self) -> Option<String> {
        let kind = self.kind()?.to_lowercase();
        let name = self.name()?;
        match self.api_version().and_then(|v| v.split_once('/')) {
            Some((group, _)) => Some(format!("{}.{}/{}", kind, group, name)),
            None => Some(format!("{}/{}", kind, name)),
        }
    }
}

/// A remote store that can create dynamically typed objects.
///
/// Creation is not idempotent: creating an object whose name is taken must
/// fail with [`SubmitError::Conflict`].
#[allow(async_fn_in_trait)]
pub trait ResourceApi {
    async fn create(
        &self,
        gvr: &GroupVersionResource,
        namespace: Option<&str>,
        object: DynamicObject,
    ) -> std::result::Result<DynamicObject, SubmitError>;
}

/// Convert a FileWatch to its wire form and create it. No retry on failure.
pub async fn submit<A: ResourceApi>(
    api: &A,
    file_watch: &FileWatch,
    namespace: Option<&str>,
) -> Result<DynamicObject> {
    let object = to_unstructured(file_watch)?;
    let gvr = GroupVersionResource::file_watches();

    tracing::debug!("Creating {} {}", gvr, file_watch.name());
    let created = api.create(&gvr, namespace, object).await?;
    tracing::info!("Created {} {}", gvr, file_watch.name());

    Ok(created)
}
