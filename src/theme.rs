use std::{fmt, str::FromStr};

use thiserror::Error;

pub const THEME_STORAGE_KEY: &str = "fais_theme";

/// Palette picked by the visitor. `System` follows the OS preference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
    System,
}

/// Palette actually painted, after resolving `System`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppliedTheme {
    Dark,
    Light,
}

impl ThemeMode {
    pub fn next(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::System,
            Self::System => Self::Dark,
        }
    }

    pub fn applied(self, prefers_dark: bool) -> AppliedTheme {
        match self {
            Self::Dark => AppliedTheme::Dark,
            Self::Light => AppliedTheme::Light,
            Self::System if prefers_dark => AppliedTheme::Dark,
            Self::System => AppliedTheme::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
            Self::System => "system",
        }
    }
}

impl AppliedTheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown theme mode: {0}")]
pub struct UnknownThemeMode(pub String);

impl FromStr for ThemeMode {
    type Err = UnknownThemeMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            "system" => Ok(Self::System),
            other => Err(UnknownThemeMode(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle() {
        let mode = ThemeMode::default();
        assert_eq!(mode, ThemeMode::Dark);
        assert_eq!(mode.next(), ThemeMode::Light);
        assert_eq!(mode.next().next(), ThemeMode::System);
        assert_eq!(mode.next().next().next(), ThemeMode::Dark);
    }

    #[test]
    fn test_system_follows_preference() {
        assert_eq!(ThemeMode::System.applied(true), AppliedTheme::Dark);
        assert_eq!(ThemeMode::System.applied(false), AppliedTheme::Light);
        assert_eq!(ThemeMode::Light.applied(true), AppliedTheme::Light);
        assert_eq!(ThemeMode::Dark.applied(false), AppliedTheme::Dark);
    }

    #[test]
    fn test_parse_stored_value() {
        for mode in [ThemeMode::Dark, ThemeMode::Light, ThemeMode::System] {
            assert_eq!(mode.to_string().parse::<ThemeMode>(), Ok(mode));
        }
        assert!("Dark".parse::<ThemeMode>().is_err());
        assert!("".parse::<ThemeMode>().is_err());
    }

    #[test]
    fn test_unreadable_stored_value_is_rewritten_as_dark() {
        let resolve = |raw: &str| raw.parse::<ThemeMode>().unwrap_or_default().to_string();
        assert_eq!(resolve("sepia"), "dark");
        assert_eq!(resolve(""), "dark");
        assert_eq!(resolve("light"), "light");
        assert_eq!(resolve("system"), "system");
    }

    #[test]
    fn test_unknown_mode_error() {
        let err = "sepia".parse::<ThemeMode>().unwrap_err();
        assert_eq!(err, UnknownThemeMode("sepia".to_string()));
        assert_eq!(err.to_string(), "unknown theme mode: sepia");
        let boxed: Box<dyn std::error::Error> = Box::new(err);
        assert!(boxed.source().is_none());
    }
}
