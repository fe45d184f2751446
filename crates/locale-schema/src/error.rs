use locale_schema_toml::LocaleConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LocaleSchemaError {
    /// The locale configuration could not be read or is invalid.
    #[error("Locale configuration error: {0}")]
    Config(#[from] LocaleConfigError),
    /// The process-wide localizer was already installed.
    #[error("Process-wide localizer is already initialized")]
    AlreadyInitialized,
}
