//! Locale entries of the `locales` directive and their normalization.

use crate::merge::merge_objects;
use crate::options::FieldOptions;
use serde_json::{Map, Value};

const NAME_KEY: &str = "name";
const REQUIRED_KEY: &str = "required";

/// One locale entry: a bare code, or a named record of field-option
/// overrides.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum LocaleSpec {
    /// `"sw"`
    Bare(String),
    /// `{ "name": "sw", "required": true, ... }`
    Override {
        name: String,
        overrides: Map<String, Value>,
    },
}

/// A locale entry resolved to its field name and per-locale options.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NormalizedLocale {
    pub name: String,
    pub options: FieldOptions,
}

impl LocaleSpec {
    pub fn bare(code: impl Into<String>) -> Self {
        Self::Bare(code.into())
    }

    pub fn with_overrides(name: impl Into<String>, overrides: FieldOptions) -> Self {
        Self::Override {
            name: name.into(),
            overrides: overrides.into_map(),
        }
    }

    /// Parses a raw entry. Returns `None` for anything that is neither a
    /// non-empty string nor an object with a non-empty string `name`.
    pub fn parse(entry: &Value) -> Option<Self> {
        match entry {
            Value::String(code) if !code.is_empty() => Some(Self::Bare(code.clone())),
            Value::Object(record) => match record.get(NAME_KEY) {
                Some(Value::String(name)) if !name.is_empty() => {
                    let mut overrides = record.clone();
                    overrides.shift_remove(NAME_KEY);
                    Some(Self::Override {
                        name: name.clone(),
                        overrides,
                    })
                },
                _ => None,
            },
            _ => None,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Bare(code) => code,
            Self::Override { name, .. } => name,
        }
    }

    /// Resolves the per-locale options.
    ///
    /// `required` defaults to whether this is the default locale; an explicit
    /// `required` in the overrides wins.
    pub fn normalize(self, default_locale: &str) -> NormalizedLocale {
        let required = self.name() == default_locale;
        let mut options = Map::new();
        options.insert(REQUIRED_KEY.to_string(), Value::Bool(required));

        let name = match self {
            Self::Bare(code) => code,
            Self::Override { name, overrides } => {
                merge_objects(&mut options, &overrides);
                name
            },
        };

        NormalizedLocale {
            name,
            options: FieldOptions::from(options),
        }
    }
}

impl From<LocaleSpec> for Value {
    fn from(spec: LocaleSpec) -> Self {
        match spec {
            LocaleSpec::Bare(code) => Value::String(code),
            LocaleSpec::Override { name, overrides } => {
                let mut record = Map::new();
                record.insert(NAME_KEY.to_string(), Value::String(name));
                record.extend(overrides);
                Value::Object(record)
            },
        }
    }
}

/// Removes structurally equal entries, keeping the first occurrence.
///
/// Records are compared as whole values: two records sharing a `name` but
/// differing elsewhere are both kept.
pub fn unique(entries: Vec<Value>) -> Vec<Value> {
    let mut seen: Vec<Value> = Vec::with_capacity(entries.len());
    for entry in entries {
        if !seen.contains(&entry) {
            seen.push(entry);
        }
    }
    seen
}
