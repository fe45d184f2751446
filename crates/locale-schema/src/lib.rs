#![doc = include_str!("../README.md")]

pub mod abbreviate;
mod error;
pub mod locale;
mod localizer;
pub mod merge;
mod options;
mod schema;
pub mod values;

pub use error::LocaleSchemaError;
pub use locale::{LocaleSpec, NormalizedLocale};
pub use localizer::Localizer;
pub use options::{FieldOptions, LOCALES_KEY, LocalizeOptions};
pub use schema::{SchemaFragment, SubSchema};
pub use values::DEFAULT_SEPARATOR;

pub use locale_schema_toml::{self, LocaleConfig, LocaleConfigError};

use indexmap::IndexMap;
use serde_json::{Map, Value};
use std::sync::OnceLock;

static LOCALIZER: OnceLock<Localizer> = OnceLock::new();

/// Installs the process-wide localizer used by the free functions.
///
/// Call this once at startup, before the first free-function call; otherwise
/// the localizer is read from the environment on first use.
pub fn init(config: LocaleConfig) -> Result<(), LocaleSchemaError> {
    config.validate()?;
    LOCALIZER
        .set(Localizer::new(config))
        .map_err(|_| LocaleSchemaError::AlreadyInitialized)
}

/// Returns the process-wide localizer.
///
/// Falls back to `DEFAULT_LOCALE` / `LOCALES`, then to the built-in `"en"`
/// configuration, when [`init`] was not called.
pub fn localizer() -> &'static Localizer {
    LOCALIZER.get_or_init(|| {
        Localizer::from_env().unwrap_or_else(|error| {
            tracing::warn!(
                "Invalid locale environment, using default configuration: {}",
                error
            );
            Localizer::default()
        })
    })
}

/// See [`Localizer::localize`].
pub fn localize(options: impl Into<LocalizeOptions>) -> SchemaFragment {
    localizer().localize(options)
}

/// See [`Localizer::unlocalize`].
pub fn unlocalize(
    path: &str,
    data: Option<&Map<String, Value>>,
    separator: &str,
) -> Map<String, Value> {
    localizer().unlocalize(path, data, separator)
}

/// See [`Localizer::unlocalize_default`].
pub fn unlocalize_default(path: &str, data: Option<&Map<String, Value>>) -> Map<String, Value> {
    localizer().unlocalize_default(path, data)
}

/// See [`Localizer::localized_keys_for`].
pub fn localized_keys_for(path: &str) -> Vec<String> {
    localizer().localized_keys_for(path)
}

/// See [`Localizer::localized_values_for`].
pub fn localized_values_for(value: Option<&Map<String, Value>>) -> Map<String, Value> {
    localizer().localized_values_for(value)
}

/// See [`Localizer::localized_abbreviations_for`].
pub fn localized_abbreviations_for(value: Option<&Map<String, Value>>) -> IndexMap<String, String> {
    localizer().localized_abbreviations_for(value)
}

/// See [`Localizer::localized_indexes_for`].
pub fn localized_indexes_for(path: &str) -> IndexMap<String, i32> {
    localizer().localized_indexes_for(path)
}
