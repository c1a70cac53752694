//! Explicit mapping between the typed FileWatch and its wire form.
//!
//! Field names here are the server's schema. A typo is silent data loss on the
//! server side rather than a compile error, so every key is spelled out by
//! hand and pinned by the tests below.

use super::DynamicObject;
use crate::error::{FwctlError, Result};
use crate::filewatch::{FileWatch, FileWatchSpec, IgnoreDef, IgnoreSpecBuilder, KIND};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

pub fn to_unstructured(file_watch: &FileWatch) -> Result<DynamicObject> {
    let mut metadata = Map::new();
    metadata.insert("name".into(), Value::String(file_watch.name().to_string()));

    let watched_paths = file_watch
        .spec()
        .watched_paths()
        .iter()
        .map(|p| path_value(p))
        .collect::<Result<Vec<_>>>()?;

    let ignores = file_watch
        .spec()
        .ignores()
        .iter()
        .map(ignore_value)
        .collect::<Result<Vec<_>>>()?;

    let mut spec = Map::new();
    spec.insert("watchedPaths".into(), Value::Array(watched_paths));
    spec.insert("ignores".into(), Value::Array(ignores));

    let mut object = Map::new();
    object.insert("apiVersion".into(), Value::String(FileWatch::api_version()));
    object.insert("kind".into(), Value::String(KIND.to_string()));
    object.insert("metadata".into(), Value::Object(metadata));
    object.insert("spec".into(), Value::Object(spec));

    Ok(DynamicObject::new(object))
}

/// Read a stored object back into a FileWatch.
///
/// Fields the server adds (`metadata.resourceVersion`, `status`, ...) are
/// ignored. A missing `patterns` list reads as empty.
pub fn from_unstructured(object: &DynamicObject) -> Result<FileWatch> {
    match object.kind() {
        Some(KIND) => {}
        Some(other) => return Err(malformed(format!("expected kind {}, got {}", KIND, other))),
        None => return Err(malformed("missing kind")),
    }
    let name = object
        .name()
        .filter(|name| !name.is_empty())
        .ok_or_else(|| malformed("missing metadata.name"))?;

    let spec = object
        .as_map()
        .get("spec")
        .and_then(Value::as_object)
        .ok_or_else(|| malformed("missing spec"))?;

    let watched_paths = string_list(spec.get("watchedPaths"), "spec.watchedPaths")?
        .into_iter()
        .map(PathBuf::from)
        .collect();

    let ignores = match spec.get("ignores") {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items
            .iter()
            .map(ignore_from_value)
            .collect::<Result<Vec<_>>>()?,
        Some(_) => return Err(malformed("spec.ignores is not a list")),
    };

    Ok(FileWatch::new(name, FileWatchSpec::new(watched_paths, ignores)))
}

fn ignore_from_value(value: &Value) -> Result<IgnoreDef> {
    let base_path = value
        .get("basePath")
        .and_then(Value::as_str)
        .ok_or_else(|| malformed("spec.ignores[].basePath is missing"))?;
    let patterns = match value.get("patterns") {
        None | Some(Value::Null) => Vec::new(),
        some => string_list(some, "spec.ignores[].patterns")?,
    };
    Ok(IgnoreSpecBuilder::with_base_path(base_path)
        .patterns(patterns)
        .build())
}

fn string_list(value: Option<&Value>, field: &str) -> Result<Vec<String>> {
    let items = value
        .and_then(Value::as_array)
        .ok_or_else(|| malformed(format!("{} is not a list", field)))?;
    items
        .iter()
        .map(|item| {
            item.as_str()
                .map(str::to_string)
                .ok_or_else(|| malformed(format!("{} holds a non-string entry", field)))
        })
        .collect()
}

fn malformed(message: impl Into<String>) -> FwctlError {
    FwctlError::MalformedObject(message.into())
}

// `patterns` is always present, possibly empty.
fn ignore_value(ignore: &IgnoreDef) -> Result<Value> {
    let patterns = ignore
        .patterns()
        .iter()
        .map(|p| Value::String(p.clone()))
        .collect();

    let mut map = Map::new();
    map.insert("basePath".into(), path_value(ignore.base_path())?);
    map.insert("patterns".into(), Value::Array(patterns));
    Ok(Value::Object(map))
}

fn path_value(path: &Path) -> Result<Value> {
    path.to_str()
        .map(|s| Value::String(s.to_string()))
        .ok_or_else(|| {
            FwctlError::InvalidArgument(format!(
                "path is not valid UTF-8: {}",
                path.display()
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filewatch::{build_file_watch, WatchRequest, WorkingDir};
    use serde_json::json;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    fn file_watch(name: &str, paths: &[&str], ignores: &[&str], cwd: &str) -> FileWatch {
        let request = WatchRequest::new(name, strings(paths), strings(ignores));
        build_file_watch(&request, &WorkingDir::from_path(cwd).unwrap()).unwrap()
    }

    #[test]
    fn test_src_and_web_wire_form() {
        let fw = file_watch("src-and-web", &["src", "web"], &["web/node_modules"], "/home/u/proj");
        let object = to_unstructured(&fw).unwrap();

        assert_eq!(
            Value::Object(object.into_map()),
            json!({
                "apiVersion": "tilt.dev/v1alpha1",
                "kind": "FileWatch",
                "metadata": {"name": "src-and-web"},
                "spec": {
                    "watchedPaths": ["/home/u/proj/src", "/home/u/proj/web"],
                    "ignores": [
                        {"basePath": "/home/u/proj", "patterns": ["web/node_modules"]}
                    ]
                }
            })
        );
    }

    #[test]
    fn test_empty_patterns_are_present_not_missing() {
        let fw = file_watch("plain", &["src"], &[], "/home/u");
        let object = to_unstructured(&fw).unwrap();

        let ignores = object.as_map()["spec"]["ignores"].as_array().unwrap();
        assert_eq!(ignores.len(), 1);
        assert_eq!(ignores[0]["basePath"], json!("/home/u"));
        assert_eq!(ignores[0]["patterns"], json!([]));
    }

    #[test]
    fn test_duplicates_and_order_survive() {
        let fw = file_watch("dups", &["b", "/etc/config", "b"], &["z", "a", "z"], "/home/u");
        let object = to_unstructured(&fw).unwrap();
        let spec = &object.as_map()["spec"];

        assert_eq!(
            spec["watchedPaths"],
            json!(["/home/u/b", "/etc/config", "/home/u/b"])
        );
        assert_eq!(spec["ignores"][0]["patterns"], json!(["z", "a", "z"]));
    }

    #[test]
    fn test_top_level_keys_exact() {
        let fw = file_watch("keys", &["src"], &[], "/home/u");
        let object = to_unstructured(&fw).unwrap();

        let mut keys: Vec<&str> = object.as_map().keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, ["apiVersion", "kind", "metadata", "spec"]);

        let mut spec_keys: Vec<&str> = object.as_map()["spec"]
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        spec_keys.sort_unstable();
        assert_eq!(spec_keys, ["ignores", "watchedPaths"]);
    }

    #[test]
    fn test_accessors_read_mapped_fields() {
        let fw = file_watch("acc", &["src"], &[], "/home/u");
        let object = to_unstructured(&fw).unwrap();

        assert_eq!(object.api_version(), Some("tilt.dev/v1alpha1"));
        assert_eq!(object.kind(), Some("FileWatch"));
        assert_eq!(object.name(), Some("acc"));
    }

    #[test]
    fn test_read_back_matches_built() {
        let fw = file_watch(
            "src-and-web",
            &["src", "web", "/etc/config"],
            &["web/node_modules", "*.log"],
            "/home/u/proj",
        );
        let object = to_unstructured(&fw).unwrap();
        assert_eq!(from_unstructured(&object).unwrap(), fw);
    }

    #[test]
    fn test_read_back_ignores_server_fields() {
        let stored = match json!({
            "apiVersion": "tilt.dev/v1alpha1",
            "kind": "FileWatch",
            "metadata": {"name": "w", "resourceVersion": "7", "uid": "abc"},
            "spec": {
                "watchedPaths": ["/home/u/src"],
                "ignores": [{"basePath": "/home/u"}]
            },
            "status": {"lastEventTime": null}
        }) {
            Value::Object(map) => DynamicObject::new(map),
            _ => unreachable!(),
        };

        let fw = from_unstructured(&stored).unwrap();
        assert_eq!(fw.name(), "w");
        assert_eq!(fw.spec().watched_paths(), [PathBuf::from("/home/u/src")]);
        assert_eq!(fw.spec().ignores().len(), 1);
        assert_eq!(fw.spec().ignores()[0].base_path(), Path::new("/home/u"));
        assert!(fw.spec().ignores()[0].patterns().is_empty());
    }

    #[test]
    fn test_read_back_rejects_wrong_shape() {
        let cases = [
            json!({"kind": "ConfigMap", "metadata": {"name": "w"}, "spec": {}}),
            json!({"kind": "FileWatch", "spec": {"watchedPaths": []}}),
            json!({"kind": "FileWatch", "metadata": {"name": "w"}}),
            json!({"kind": "FileWatch", "metadata": {"name": "w"}, "spec": {"watchedPaths": [1]}}),
        ];
        for case in cases {
            let object = match case {
                Value::Object(map) => DynamicObject::new(map),
                _ => unreachable!(),
            };
            assert!(
                matches!(from_unstructured(&object), Err(FwctlError::MalformedObject(_))),
                "accepted {:?}",
                object
            );
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_path_rejected() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let bad = PathBuf::from(OsStr::from_bytes(b"/tmp/\xff"));
        let fw = FileWatch::new(
            "bad",
            FileWatchSpec::new(
                vec![bad],
                vec![IgnoreSpecBuilder::with_base_path("/tmp").build()],
            ),
        );
        assert!(matches!(
            to_unstructured(&fw),
            Err(FwctlError::InvalidArgument(_))
        ));
    }
}
