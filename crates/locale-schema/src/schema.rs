use crate::options::FieldOptions;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Builds a host schema structure from expanded per-locale fields.
///
/// Implement this for your modeling layer's sub-schema type and call
/// [`Localizer::localize_into`](crate::Localizer::localize_into).
pub trait SubSchema {
    fn from_fields(fields: IndexMap<String, FieldOptions>) -> Self;
}

/// Locale-keyed field declarations produced by the field expander.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SchemaFragment {
    fields: IndexMap<String, FieldOptions>,
}

impl SchemaFragment {
    pub fn get(&self, locale: &str) -> Option<&FieldOptions> {
        self.fields.get(locale)
    }

    pub fn contains(&self, locale: &str) -> bool {
        self.fields.contains_key(locale)
    }

    /// Field names, in expansion order.
    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &FieldOptions)> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn fields(&self) -> &IndexMap<String, FieldOptions> {
        &self.fields
    }

    pub fn into_fields(self) -> IndexMap<String, FieldOptions> {
        self.fields
    }
}

impl SubSchema for SchemaFragment {
    fn from_fields(fields: IndexMap<String, FieldOptions>) -> Self {
        Self { fields }
    }
}

impl SubSchema for IndexMap<String, FieldOptions> {
    fn from_fields(fields: IndexMap<String, FieldOptions>) -> Self {
        fields
    }
}

/// Embeds the fields as a plain JSON object, e.g. inside a larger JSON
/// schema document.
impl SubSchema for Value {
    fn from_fields(fields: IndexMap<String, FieldOptions>) -> Self {
        Value::Object(
            fields
                .into_iter()
                .map(|(locale, options)| (locale, Value::from(options)))
                .collect::<Map<String, Value>>(),
        )
    }
}

impl IntoIterator for SchemaFragment {
    type Item = (String, FieldOptions);
    type IntoIter = indexmap::map::IntoIter<String, FieldOptions>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

impl From<SchemaFragment> for Value {
    fn from(fragment: SchemaFragment) -> Self {
        Value::from_fields(fragment.fields)
    }
}
