use crate::error::CoreError;
use crate::hash::SnapshotDigest;
use serde::Serialize;

/// Produce a canonical byte representation: compact JSON with sorted keys.
///
/// Keys are sorted so the output does not depend on field declaration order.
pub fn canonical_serialize(value: &impl Serialize) -> Result<Vec<u8>, CoreError> {
    let json_value = serde_json::to_value(value)?;
    Ok(serde_json::to_vec(&sort_value(json_value))?)
}

/// Digest of any serializable value over its canonical bytes.
pub fn content_digest(value: &impl Serialize) -> Result<SnapshotDigest, CoreError> {
    let bytes = canonical_serialize(value)?;
    Ok(SnapshotDigest::hash(&bytes))
}

/// Recursively sort all object keys in a JSON value.
fn sort_value(v: serde_json::Value) -> serde_json::Value {
    match v {
        serde_json::Value::Object(map) => {
            let sorted: serde_json::Map<String, serde_json::Value> = map
                .into_iter()
                .map(|(k, v)| (k, sort_value(v)))
                .collect::<std::collections::BTreeMap<_, _>>()
                .into_iter()
                .collect();
            serde_json::Value::Object(sorted)
        }
        serde_json::Value::Array(arr) => {
            serde_json::Value::Array(arr.into_iter().map(sort_value).collect())
        }
        other => other,
    }
}
