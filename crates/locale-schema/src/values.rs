//! Flattening, back-filling and indexing of localized values.
//!
//! A localized value is an object keyed by locale code, e.g.
//! `{ "en": "Tomato", "sw": "Nyanya" }`.

use crate::Localizer;
use crate::abbreviate::abbreviate;
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{Map, Value};

/// Separator used by [`Localizer::unlocalize_default`].
pub const DEFAULT_SEPARATOR: &str = "_";

/// Whether `value` counts as present. Only `null` does not; `""`, `0` and
/// `false` do.
pub fn has_value(value: &Value) -> bool {
    !value.is_null()
}

/// Turns any serializable host value into a plain localized-value object.
///
/// Values that do not serialize to an object yield an empty object.
pub fn materialize<T: Serialize + ?Sized>(value: &T) -> Map<String, Value> {
    match serde_json::to_value(value) {
        Ok(Value::Object(map)) => map,
        Ok(_) => Map::new(),
        Err(error) => {
            tracing::debug!("Failed to materialize localized value: {}", error);
            Map::new()
        },
    }
}

impl Localizer {
    /// Flattens a localized value into `path{separator}{locale}` keys.
    ///
    /// The default locale's value is also emitted under the bare `path`.
    /// Host instances go through [`materialize`] first.
    ///
    /// ```
    /// use locale_schema::{LocaleConfig, Localizer};
    /// use serde_json::json;
    ///
    /// let localizer = Localizer::new(LocaleConfig::new("en", ["en", "sw"]));
    /// let data = json!({ "en": "One", "sw": "Moja" });
    ///
    /// let flat = localizer.unlocalize("group", data.as_object(), "_");
    /// assert_eq!(
    ///     serde_json::Value::Object(flat),
    ///     json!({ "group": "One", "group_en": "One", "group_sw": "Moja" })
    /// );
    /// ```
    pub fn unlocalize(
        &self,
        path: &str,
        data: Option<&Map<String, Value>>,
        separator: &str,
    ) -> Map<String, Value> {
        let mut unlocalized = Map::new();
        let Some(data) = data else {
            return unlocalized;
        };

        for (locale, value) in data {
            if locale == self.default_locale() {
                unlocalized.insert(path.to_string(), value.clone());
            }
            unlocalized.insert(format!("{path}{separator}{locale}"), value.clone());
        }

        unlocalized
    }

    /// [`Localizer::unlocalize`] with [`DEFAULT_SEPARATOR`].
    pub fn unlocalize_default(
        &self,
        path: &str,
        data: Option<&Map<String, Value>>,
    ) -> Map<String, Value> {
        self.unlocalize(path, data, DEFAULT_SEPARATOR)
    }

    /// `path.{locale}` for every configured locale, sorted and deduplicated.
    pub fn localized_keys_for(&self, path: &str) -> Vec<String> {
        let mut keys: Vec<String> = self
            .locales()
            .iter()
            .map(|locale| format!("{path}.{locale}"))
            .collect();
        keys.sort_unstable();
        keys.dedup();
        keys
    }

    /// One value per configured locale, missing ones back-filled.
    ///
    /// The fill value is the default locale's value if present, else the
    /// first value of `value` (even a `null` one), else `null`.
    ///
    /// Host instances are plain serializable values; pass them through
    /// [`materialize`] first.
    ///
    /// ```
    /// use locale_schema::values::materialize;
    /// use locale_schema::{LocaleConfig, Localizer};
    /// use serde_json::json;
    ///
    /// #[derive(serde::Serialize)]
    /// struct Name {
    ///     sw: &'static str,
    /// }
    ///
    /// let localizer = Localizer::new(LocaleConfig::new("en", ["en", "sw"]));
    /// let values = localizer.localized_values_for(Some(&materialize(&Name { sw: "Nyanya" })));
    ///
    /// assert_eq!(serde_json::Value::Object(values), json!({ "en": "Nyanya", "sw": "Nyanya" }));
    /// ```
    pub fn localized_values_for(&self, value: Option<&Map<String, Value>>) -> Map<String, Value> {
        let empty = Map::new();
        let value = value.unwrap_or(&empty);
        let fallback = self.fallback_value(value);

        self.locales()
            .iter()
            .map(|locale| (locale.clone(), resolve(value, locale, &fallback).clone()))
            .collect()
    }

    /// Abbreviations of the back-filled values; locales without an
    /// abbreviation are left out.
    ///
    /// Takes the same input as [`Localizer::localized_values_for`], so host
    /// instances go through [`materialize`] first.
    pub fn localized_abbreviations_for(
        &self,
        value: Option<&Map<String, Value>>,
    ) -> IndexMap<String, String> {
        let empty = Map::new();
        let value = value.unwrap_or(&empty);
        let fallback = self.fallback_value(value);

        self.locales()
            .iter()
            .filter_map(|locale| {
                abbreviate(resolve(value, locale, &fallback))
                    .map(|abbreviation| (locale.clone(), abbreviation))
            })
            .collect()
    }

    /// Ascending index definitions `path.{locale} -> 1`, in configuration
    /// order.
    pub fn localized_indexes_for(&self, path: &str) -> IndexMap<String, i32> {
        self.locales()
            .iter()
            .map(|locale| (format!("{path}.{locale}"), 1))
            .collect()
    }

    fn fallback_value(&self, value: &Map<String, Value>) -> Value {
        value
            .get(self.default_locale())
            .filter(|default| has_value(default))
            .or_else(|| value.values().next())
            .cloned()
            .unwrap_or(Value::Null)
    }
}

fn resolve<'a>(value: &'a Map<String, Value>, locale: &str, fallback: &'a Value) -> &'a Value {
    value
        .get(locale)
        .filter(|own| has_value(own))
        .unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Serialize)]
    struct Name {
        en: &'static str,
        sw: Option<&'static str>,
    }

    #[test]
    fn materialize_struct() {
        let name = Name {
            en: "Tomato",
            sw: None,
        };

        assert_eq!(
            Value::Object(materialize(&name)),
            json!({ "en": "Tomato", "sw": null })
        );
    }

    #[test]
    fn materialize_non_object_is_empty() {
        assert!(materialize("Tomato").is_empty());
        assert!(materialize(&[1, 2, 3]).is_empty());
    }

    #[test]
    fn has_value_only_rejects_null() {
        assert!(!has_value(&Value::Null));
        assert!(has_value(&json!("")));
        assert!(has_value(&json!(0)));
        assert!(has_value(&json!(false)));
    }
}
