use std::env;

use anyhow::{Context, Result};

use crate::compare::StopWordList;

/// Default cap on a single input text: 1 MiB.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 1024 * 1024;

/// When to emit ANSI colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorChoice {
    /// Let `colored` decide from the terminal and NO_COLOR/CLICOLOR (default)
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    fn parse(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "always" => Ok(Self::Always),
            "never" => Ok(Self::Never),
            other => anyhow::bail!(
                "WORDSHARE_COLOR must be auto, always or never (got '{other}')"
            ),
        }
    }

    /// Apply this choice to the process-wide `colored` override.
    pub fn apply(self) {
        match self {
            Self::Auto => colored::control::unset_override(),
            Self::Always => colored::control::set_override(true),
            Self::Never => colored::control::set_override(false),
        }
    }
}

/// Settings for the command-line front end, loaded from environment variables.
///
/// The .env file is loaded at startup via dotenvy, so every setting can live
/// there too. The comparison core itself takes no configuration beyond the
/// stop-word list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Largest accepted input per text, in bytes (None = unlimited)
    pub max_input_bytes: Option<usize>,
    /// Stop-word list used unless a command overrides it
    pub stop_words: StopWordList,
    pub color: ColorChoice,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_input_bytes: Some(DEFAULT_MAX_INPUT_BYTES),
            stop_words: StopWordList::Minimal,
            color: ColorChoice::Auto,
        }
    }
}

impl Config {
    /// Load configuration from the process environment.
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// Unset variables fall back to defaults; set but malformed variables are
    /// errors naming the variable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup("WORDSHARE_MAX_INPUT_BYTES") {
            let bytes: usize = raw.trim().parse().with_context(|| {
                format!("WORDSHARE_MAX_INPUT_BYTES must be a byte count (got '{raw}')")
            })?;
            // 0 disables the cap
            config.max_input_bytes = (bytes > 0).then_some(bytes);
        }

        if let Some(raw) = lookup("WORDSHARE_STOP_WORDS") {
            config.stop_words = raw.parse().context("Invalid WORDSHARE_STOP_WORDS")?;
        }

        if let Some(raw) = lookup("WORDSHARE_COLOR") {
            config.color = ColorChoice::parse(&raw)?;
        }

        Ok(config)
    }

    /// Reject an input that exceeds the configured size cap.
    /// Call this before handing text to the comparator.
    pub fn check_input_size(&self, label: &str, text: &str) -> Result<()> {
        if let Some(max) = self.max_input_bytes {
            if text.len() > max {
                anyhow::bail!(
                    "{label} is {} bytes, over the {max}-byte limit.\n\
                     Raise WORDSHARE_MAX_INPUT_BYTES (or set it to 0) to compare larger texts.",
                    text.len()
                );
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.max_input_bytes, Some(DEFAULT_MAX_INPUT_BYTES));
    }

    #[test]
    fn test_reads_all_variables() {
        let config = Config::from_lookup(lookup_from(&[
            ("WORDSHARE_MAX_INPUT_BYTES", "2048"),
            ("WORDSHARE_STOP_WORDS", "extended"),
            ("WORDSHARE_COLOR", "never"),
        ]))
        .unwrap();
        assert_eq!(config.max_input_bytes, Some(2048));
        assert_eq!(config.stop_words, StopWordList::Extended);
        assert_eq!(config.color, ColorChoice::Never);
    }

    #[test]
    fn test_zero_disables_cap() {
        let config = Config::from_lookup(lookup_from(&[("WORDSHARE_MAX_INPUT_BYTES", "0")])).unwrap();
        assert_eq!(config.max_input_bytes, None);
        assert!(config.check_input_size("text", &"x".repeat(10_000_000)).is_ok());
    }

    #[test]
    fn test_invalid_values_name_the_variable() {
        let err = Config::from_lookup(lookup_from(&[("WORDSHARE_MAX_INPUT_BYTES", "lots")]))
            .unwrap_err();
        assert!(err.to_string().contains("WORDSHARE_MAX_INPUT_BYTES"));

        let err = Config::from_lookup(lookup_from(&[("WORDSHARE_COLOR", "sometimes")])).unwrap_err();
        assert!(err.to_string().contains("WORDSHARE_COLOR"));

        assert!(Config::from_lookup(lookup_from(&[("WORDSHARE_STOP_WORDS", "all")])).is_err());
    }

    #[test]
    fn test_check_input_size() {
        let config = Config {
            max_input_bytes: Some(5),
            ..Config::default()
        };
        assert!(config.check_input_size("text 1", "hello").is_ok());
        let err = config.check_input_size("text 1", "hello!").unwrap_err();
        assert!(err.to_string().contains("text 1 is 6 bytes"));
    }
}
