//! Field options and the input of [`Localizer::localize`](crate::Localizer::localize).

use crate::merge::merge_objects;
use bon::Builder;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Key of the locale directive inside raw localize options.
pub const LOCALES_KEY: &str = "locales";

/// Options attached to one modeled field, e.g. `type`, `trim`, `required`.
///
/// Keeps insertion order, so expanded fields serialize in a stable order.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FieldOptions(Map<String, Value>);

impl FieldOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in defaults every localized field starts from:
    /// `{ type: "string", trim: true, required: false, searchable: true, taggable: true }`.
    pub fn defaults() -> Self {
        Self::new()
            .with("type", "string")
            .with("trim", true)
            .with("required", false)
            .with("searchable", true)
            .with("taggable", true)
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.shift_remove(key)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Merges `other` over `self`; see [`merge_objects`].
    pub fn merge(&mut self, other: &FieldOptions) {
        merge_objects(&mut self.0, &other.0);
    }

    /// Returns `self` with `other` merged over it.
    pub fn merged_with(mut self, other: &FieldOptions) -> Self {
        self.merge(other);
        self
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }

    /// The `type` marker, when it is a string.
    pub fn field_type(&self) -> Option<&str> {
        self.get("type").and_then(Value::as_str)
    }

    pub fn trim(&self) -> Option<bool> {
        self.flag("trim")
    }

    pub fn required(&self) -> Option<bool> {
        self.flag("required")
    }

    pub fn searchable(&self) -> Option<bool> {
        self.flag("searchable")
    }

    pub fn taggable(&self) -> Option<bool> {
        self.flag("taggable")
    }

    pub fn index(&self) -> Option<bool> {
        self.flag("index")
    }

    fn flag(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(Value::as_bool)
    }
}

impl From<Map<String, Value>> for FieldOptions {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl From<FieldOptions> for Value {
    fn from(options: FieldOptions) -> Self {
        Value::Object(options.0)
    }
}

/// Input of the field expander: shared field options plus an optional
/// list of raw locale entries.
///
/// Locale entries stay raw JSON until expansion so that malformed entries can
/// be dropped there instead of failing here.
///
/// # Examples
///
/// ```
/// use locale_schema::{FieldOptions, LocaleSpec, LocalizeOptions};
///
/// let options = LocalizeOptions::builder()
///     .options(FieldOptions::new().with("index", true))
///     .locales(vec![LocaleSpec::bare("en").into(), LocaleSpec::bare("sw").into()])
///     .build();
///
/// assert_eq!(options.locales.map(|locales| locales.len()), Some(2));
/// ```
#[derive(Builder, Clone, Debug, Default, Eq, PartialEq)]
pub struct LocalizeOptions {
    /// Field options shared by every locale.
    #[builder(default, into)]
    pub options: FieldOptions,
    /// Locale entries; `None` or empty means the configured locales.
    pub locales: Option<Vec<Value>>,
}

impl LocalizeOptions {
    /// Splits a raw options object into field options and the `locales`
    /// directive.
    ///
    /// A `locales` value that is not an array is ignored. A non-object input
    /// yields empty options.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(map) => Self::from_map(map),
            Value::Null => Self::default(),
            other => {
                tracing::debug!("Ignoring non-object localize options: {}", other);
                Self::default()
            },
        }
    }

    pub fn from_map(mut map: Map<String, Value>) -> Self {
        let locales = match map.shift_remove(LOCALES_KEY) {
            Some(Value::Array(entries)) => Some(entries),
            Some(other) => {
                tracing::debug!("Ignoring non-array locales directive: {}", other);
                None
            },
            None => None,
        };

        Self {
            options: FieldOptions::from(map),
            locales,
        }
    }
}

impl From<Value> for LocalizeOptions {
    fn from(value: Value) -> Self {
        Self::from_value(value)
    }
}

impl From<Map<String, Value>> for LocalizeOptions {
    fn from(map: Map<String, Value>) -> Self {
        Self::from_map(map)
    }
}

impl From<FieldOptions> for LocalizeOptions {
    fn from(options: FieldOptions) -> Self {
        Self {
            options,
            locales: None,
        }
    }
}
