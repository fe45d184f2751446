//! Recursive merging of option maps.

use serde_json::{Map, Value};

/// Merges `source` into `target`, `source` winning on conflict.
///
/// Object values merge key by key, recursively. Any other value, arrays and
/// `null` included, replaces the target value outright. Existing keys keep
/// their position; new keys are appended in source order.
pub fn merge_objects(target: &mut Map<String, Value>, source: &Map<String, Value>) {
    for (key, value) in source {
        if let (Some(Value::Object(existing)), Value::Object(incoming)) =
            (target.get_mut(key), value)
        {
            merge_objects(existing, incoming);
            continue;
        }

        target.insert(key.clone(), value.clone());
    }
}

/// Folds `sources` left to right into a fresh map.
pub fn merged<'a, I>(sources: I) -> Map<String, Value>
where
    I: IntoIterator<Item = &'a Map<String, Value>>,
{
    sources.into_iter().fold(Map::new(), |mut target, source| {
        merge_objects(&mut target, source);
        target
    })
}
