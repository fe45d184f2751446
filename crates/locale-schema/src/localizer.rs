use crate::error::LocaleSchemaError;
use crate::locale::{LocaleSpec, unique};
use crate::options::{FieldOptions, LocalizeOptions};
use crate::schema::{SchemaFragment, SubSchema};
use indexmap::IndexMap;
use locale_schema_toml::LocaleConfig;
use serde_json::Value;
use std::path::Path;

/// Field expander and locale utilities bound to one locale configuration.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Localizer {
    config: LocaleConfig,
}

impl Localizer {
    pub fn new(config: LocaleConfig) -> Self {
        Self { config }
    }

    /// Builds a localizer from `DEFAULT_LOCALE` and `LOCALES`.
    pub fn from_env() -> Result<Self, LocaleSchemaError> {
        Ok(Self::new(LocaleConfig::from_env()?))
    }

    /// Builds a localizer from the `locales.toml` in `manifest_dir`.
    pub fn from_manifest_dir(manifest_dir: &Path) -> Result<Self, LocaleSchemaError> {
        Ok(Self::new(LocaleConfig::from_manifest_dir(manifest_dir)?))
    }

    pub fn config(&self) -> &LocaleConfig {
        &self.config
    }

    pub fn default_locale(&self) -> &str {
        self.config.default_locale()
    }

    pub fn locales(&self) -> &[String] {
        self.config.locales()
    }

    /// Expands one localized field into a field per locale.
    ///
    /// Each field is the built-in defaults, overlaid by the shared options,
    /// overlaid by the locale's own overrides. Locale entries that are
    /// neither a code nor a named record are skipped.
    ///
    /// # Examples
    ///
    /// ```
    /// use locale_schema::{LocaleConfig, Localizer};
    /// use serde_json::json;
    ///
    /// let localizer = Localizer::new(LocaleConfig::new("en", ["en", "sw"]));
    /// let fragment = localizer.localize(json!({ "index": true }));
    ///
    /// assert_eq!(fragment.locales().collect::<Vec<_>>(), ["en", "sw"]);
    /// assert_eq!(fragment.get("en").and_then(|en| en.required()), Some(true));
    /// assert_eq!(fragment.get("sw").and_then(|sw| sw.index()), Some(true));
    /// ```
    pub fn localize(&self, options: impl Into<LocalizeOptions>) -> SchemaFragment {
        self.localize_into(options)
    }

    /// Like [`Localizer::localize`], handing the fields to a custom
    /// [`SubSchema`] constructor.
    pub fn localize_into<S: SubSchema>(&self, options: impl Into<LocalizeOptions>) -> S {
        let LocalizeOptions { options, locales } = options.into();
        let shared = FieldOptions::defaults().merged_with(&options);

        let entries = match locales {
            Some(locales) if !locales.is_empty() => locales,
            _ => self
                .locales()
                .iter()
                .map(|code| Value::String(code.clone()))
                .collect(),
        };

        let mut fields = IndexMap::new();
        for entry in unique(entries) {
            let Some(spec) = LocaleSpec::parse(&entry) else {
                tracing::debug!("Skipping invalid locale entry: {}", entry);
                continue;
            };

            let locale = spec.normalize(self.default_locale());
            let field = shared.clone().merged_with(&locale.options);
            fields.insert(locale.name, field);
        }

        S::from_fields(fields)
    }
}
