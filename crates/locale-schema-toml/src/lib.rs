#![doc = include_str!("../README.md")]

use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;
use thiserror::Error;
use unic_langid::{LanguageIdentifier, LanguageIdentifierError};

/// Name of the configuration file looked up in a manifest directory.
pub const CONFIG_FILE_NAME: &str = "locales.toml";
/// Locale used when nothing else is configured.
pub const FALLBACK_LOCALE: &str = "en";
/// Environment variable holding the default locale.
pub const DEFAULT_LOCALE_VAR: &str = "DEFAULT_LOCALE";
/// Environment variable holding the comma separated locale list.
pub const LOCALES_VAR: &str = "LOCALES";

#[derive(Debug, Error)]
pub enum LocaleConfigError {
    /// Configuration file not found.
    #[error("locales.toml configuration file not found")]
    NotFound,
    /// Failed to read configuration file.
    #[error("Failed to read configuration file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse configuration file.
    #[error("Failed to parse configuration file: {0}")]
    ParseError(#[from] toml::de::Error),
    /// A configured locale is not a valid language identifier.
    #[error("Invalid locale '{name}'")]
    InvalidLocale {
        /// The invalid code.
        name: String,
        /// The parsing error produced by `unic-langid`.
        #[source]
        source: LanguageIdentifierError,
    },
    /// A configured locale uses an unsupported subtag combination.
    #[error("Locale '{name}' is not supported: {reason}")]
    UnsupportedLocale {
        /// The rejected code.
        name: String,
        /// Explanation of why it is not supported.
        reason: String,
    },
    /// The default locale is blank.
    #[error("Default locale must not be empty")]
    EmptyDefaultLocale,
}

/// Represents the `locales` field in `locales.toml`.
/// Supports both a single string and an array of strings.
///
/// # Examples
///
/// Single locale:
/// ```toml
/// locales = "sw"
/// ```
///
/// Multiple locales:
/// ```toml
/// locales = ["en", "sw"]
/// ```
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(untagged)]
pub(crate) enum LocaleList {
    /// A single locale code.
    Single(String),
    /// Multiple locale codes, in configuration order.
    Multiple(Vec<String>),
}

impl LocaleList {
    /// Returns the locales as a vector of strings.
    fn as_vec(&self) -> Vec<String> {
        match self {
            LocaleList::Single(s) => vec![s.clone()],
            LocaleList::Multiple(v) => v.clone(),
        }
    }

    /// Returns true if there are no locales.
    fn is_empty(&self) -> bool {
        match self {
            LocaleList::Single(s) => s.is_empty(),
            LocaleList::Multiple(v) => v.is_empty(),
        }
    }
}

/// On-disk shape of `locales.toml`.
#[derive(Debug, Deserialize)]
struct LocalesFile {
    #[serde(default = "fallback_locale")]
    default_locale: String,
    #[serde(default)]
    locales: Option<LocaleList>,
}

fn fallback_locale() -> String {
    FALLBACK_LOCALE.to_string()
}

/// Process-wide locale configuration: an ordered locale list plus the
/// default locale used as the fallback source of truth.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct LocaleConfig {
    default_locale: String,
    locales: Vec<String>,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            default_locale: fallback_locale(),
            locales: vec![fallback_locale()],
        }
    }
}

impl LocaleConfig {
    /// Builds a configuration directly, without validation.
    ///
    /// The list is kept as given, duplicates included.
    pub fn new<D, I, L>(default_locale: D, locales: I) -> Self
    where
        D: Into<String>,
        I: IntoIterator<Item = L>,
        L: Into<String>,
    {
        Self {
            default_locale: default_locale.into(),
            locales: locales.into_iter().map(Into::into).collect(),
        }
    }

    /// The default locale.
    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }

    /// The configured locales, in configuration order.
    pub fn locales(&self) -> &[String] {
        &self.locales
    }

    /// Whether `code` is one of the configured locales.
    pub fn contains(&self, code: &str) -> bool {
        self.locales.iter().any(|locale| locale == code)
    }

    /// Reads the configuration from a path.
    pub fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Self, LocaleConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(LocaleConfigError::NotFound);
        }

        let content = fs_err::read_to_string(path)?;
        let file: LocalesFile = toml::from_str(&content)?;

        let default_locale = file.default_locale.trim().to_string();
        let locales = match file.locales {
            Some(list) if !list.is_empty() => list.as_vec(),
            _ => vec![default_locale.clone()],
        };

        let config = Self::new(default_locale, locales);
        config.validate()?;

        Ok(config)
    }

    /// Reads the configuration from the manifest directory.
    pub fn read_from_manifest_dir() -> Result<Self, LocaleConfigError> {
        let manifest_dir =
            env::var("CARGO_MANIFEST_DIR").map_err(|_| LocaleConfigError::NotFound)?;

        Self::from_manifest_dir(Path::new(&manifest_dir))
    }

    /// Reads `locales.toml` from the given manifest directory.
    pub fn from_manifest_dir(manifest_dir: &Path) -> Result<Self, LocaleConfigError> {
        Self::read_from_path(manifest_dir.join(CONFIG_FILE_NAME))
    }

    /// Reads the configuration from `DEFAULT_LOCALE` and `LOCALES`.
    ///
    /// `LOCALES` is comma separated. Unset or blank variables fall back to
    /// `"en"` and `[DEFAULT_LOCALE]` respectively.
    pub fn from_env() -> Result<Self, LocaleConfigError> {
        let default_locale = read_var(DEFAULT_LOCALE_VAR).unwrap_or_else(fallback_locale);

        let locales = read_var(LOCALES_VAR)
            .map(|raw| split_locales(&raw))
            .filter(|locales| !locales.is_empty())
            .unwrap_or_else(|| vec![default_locale.clone()]);

        let config = Self::new(default_locale, locales);
        config.validate()?;

        Ok(config)
    }

    /// Checks that every configured code is a supported language identifier.
    pub fn validate(&self) -> Result<(), LocaleConfigError> {
        if self.default_locale.is_empty() {
            return Err(LocaleConfigError::EmptyDefaultLocale);
        }

        std::iter::once(&self.default_locale)
            .chain(&self.locales)
            .try_for_each(|code| parse_locale(code).map(|_| ()))
    }
}

fn read_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn split_locales(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parses a locale code, rejecting identifiers with variant subtags.
pub fn parse_locale(code: &str) -> Result<LanguageIdentifier, LocaleConfigError> {
    let lang = code
        .parse::<LanguageIdentifier>()
        .map_err(|source| LocaleConfigError::InvalidLocale {
            name: code.to_string(),
            source,
        })?;

    if lang.variants().next().is_some() {
        return Err(LocaleConfigError::UnsupportedLocale {
            name: code.to_string(),
            reason: "variants are not supported".to_string(),
        });
    }

    Ok(lang)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serial_test::serial;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_read_from_path_success() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("locales.toml");

        let config_content = r#"
default_locale = "en"
locales = ["en", "sw"]
"#;

        fs::write(&config_path, config_content).unwrap();

        let config = LocaleConfig::read_from_path(&config_path).unwrap();
        assert_eq!(config.default_locale(), "en");
        assert_eq!(config.locales(), ["en", "sw"]);
    }

    #[test]
    fn test_read_from_path_file_not_found() {
        let non_existent_path = Path::new("/non/existent/path/locales.toml");
        let result = LocaleConfig::read_from_path(non_existent_path);
        assert!(matches!(result, Err(LocaleConfigError::NotFound)));
    }

    #[test]
    fn test_read_from_path_invalid_toml() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("locales.toml");

        fs::write(&config_path, "default_locale = \n").unwrap();

        let result = LocaleConfig::read_from_path(&config_path);
        assert!(matches!(result, Err(LocaleConfigError::ParseError(_))));
    }

    #[test]
    fn test_read_from_path_wrong_locales_type() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("locales.toml");

        fs::write(&config_path, "locales = 5\n").unwrap();

        let result = LocaleConfig::read_from_path(&config_path);
        assert!(matches!(result, Err(LocaleConfigError::ParseError(_))));
    }

    #[test]
    fn test_locales_single_string() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("locales.toml");

        fs::write(&config_path, "default_locale = \"sw\"\nlocales = \"sw\"\n").unwrap();

        let config = LocaleConfig::read_from_path(&config_path).unwrap();
        assert_eq!(config.default_locale(), "sw");
        assert_eq!(config.locales(), ["sw"]);
    }

    #[test]
    fn test_missing_entries_fall_back_to_default_locale() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("locales.toml");

        fs::write(&config_path, "").unwrap();

        let config = LocaleConfig::read_from_path(&config_path).unwrap();
        assert_eq!(config, LocaleConfig::default());
    }

    #[test]
    fn test_empty_locales_array_uses_default_locale() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("locales.toml");

        fs::write(&config_path, "default_locale = \"fr\"\nlocales = []\n").unwrap();

        let config = LocaleConfig::read_from_path(&config_path).unwrap();
        assert_eq!(config.locales(), ["fr"]);
    }

    #[test]
    fn test_blank_single_locale_uses_default_locale() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("locales.toml");

        fs::write(&config_path, "default_locale = \"sw\"\nlocales = \"\"\n").unwrap();

        let config = LocaleConfig::read_from_path(&config_path).unwrap();
        assert_eq!(config.locales(), ["sw"]);
    }

    #[test]
    fn test_from_manifest_dir() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILE_NAME),
            "locales = [\"en\", \"sw\", \"fr\"]\n",
        )
        .unwrap();

        let config = LocaleConfig::from_manifest_dir(temp_dir.path()).unwrap();
        assert_eq!(config.default_locale(), "en");
        assert_eq!(config.locales(), ["en", "sw", "fr"]);
        assert!(config.contains("fr"));
        assert!(!config.contains("de"));
    }

    #[test]
    fn test_invalid_locale_in_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("locales.toml");

        fs::write(&config_path, "locales = [\"en\", \"invalid-lang!\"]\n").unwrap();

        let result = LocaleConfig::read_from_path(&config_path);
        assert!(matches!(
            result,
            Err(LocaleConfigError::InvalidLocale { name, .. }) if name == "invalid-lang!"
        ));
    }

    #[test]
    fn test_variant_locale_is_unsupported() {
        let result = parse_locale("de-DE-1996");
        assert!(matches!(
            result,
            Err(LocaleConfigError::UnsupportedLocale { name, .. }) if name == "de-DE-1996"
        ));
    }

    #[test]
    fn test_validate_rejects_empty_default() {
        let config = LocaleConfig::new("", ["en"]);
        assert!(matches!(
            config.validate(),
            Err(LocaleConfigError::EmptyDefaultLocale)
        ));
    }

    #[test]
    fn test_new_keeps_duplicates_and_order() {
        let config = LocaleConfig::new("en", ["sw", "en", "sw"]);
        assert_eq!(config.locales(), ["sw", "en", "sw"]);
    }

    #[rstest]
    #[case("en,sw", vec!["en", "sw"])]
    #[case(" en , sw ", vec!["en", "sw"])]
    #[case("en,,sw,", vec!["en", "sw"])]
    #[case("sw", vec!["sw"])]
    #[case(",", vec![])]
    fn test_split_locales(#[case] raw: &str, #[case] expected: Vec<&str>) {
        assert_eq!(split_locales(raw), expected);
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        temp_env::with_vars_unset([DEFAULT_LOCALE_VAR, LOCALES_VAR], || {
            let config = LocaleConfig::from_env().unwrap();
            assert_eq!(config.default_locale(), "en");
            assert_eq!(config.locales(), ["en"]);
        });
    }

    #[test]
    #[serial]
    fn test_from_env_reads_variables() {
        temp_env::with_vars(
            [(DEFAULT_LOCALE_VAR, Some("sw")), (LOCALES_VAR, Some("en, sw"))],
            || {
                let config = LocaleConfig::from_env().unwrap();
                assert_eq!(config.default_locale(), "sw");
                assert_eq!(config.locales(), ["en", "sw"]);
            },
        );
    }

    #[test]
    #[serial]
    fn test_from_env_locales_default_to_default_locale() {
        temp_env::with_vars(
            [(DEFAULT_LOCALE_VAR, Some("fr")), (LOCALES_VAR, None)],
            || {
                let config = LocaleConfig::from_env().unwrap();
                assert_eq!(config.locales(), ["fr"]);
            },
        );
    }

    #[test]
    #[serial]
    fn test_from_env_rejects_invalid_locale() {
        temp_env::with_vars(
            [(DEFAULT_LOCALE_VAR, Some("en")), (LOCALES_VAR, Some("en,not a locale"))],
            || {
                let result = LocaleConfig::from_env();
                assert!(matches!(
                    result,
                    Err(LocaleConfigError::InvalidLocale { name, .. }) if name == "not a locale"
                ));
            },
        );
    }
}
