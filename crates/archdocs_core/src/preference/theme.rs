//! Theme choice.

use std::fmt::{Display, Formatter};

/// Key holding the user's theme choice.
pub const THEME_STORAGE_KEY: &str = "ui-theme";

/// What the user picked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    Dark,
    Light,
    /// Follow the platform preference.
    #[default]
    System,
}

/// What is actually rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppliedTheme {
    Dark,
    Light,
}

impl Theme {
    /// Parses `dark`, `light` or `system`, ignoring case and surrounding whitespace.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            "system" => Some(Self::System),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
            Self::System => "system",
        }
    }

    pub fn applied(self, system_prefers_dark: bool) -> AppliedTheme {
        match self {
            Self::Dark => AppliedTheme::Dark,
            Self::Light => AppliedTheme::Light,
            Self::System if system_prefers_dark => AppliedTheme::Dark,
            Self::System => AppliedTheme::Light,
        }
    }
}

impl Display for Theme {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AppliedTheme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AppliedTheme, Theme};

    #[test]
    fn parse_accepts_known_values_only() {
        assert_eq!(Theme::parse(" Dark "), Some(Theme::Dark));
        assert_eq!(Theme::parse("system"), Some(Theme::System));
        assert_eq!(Theme::parse("sepia"), None);
        assert_eq!(Theme::parse(""), None);
    }

    #[test]
    fn system_follows_platform_preference() {
        assert_eq!(Theme::System.applied(true), AppliedTheme::Dark);
        assert_eq!(Theme::System.applied(false), AppliedTheme::Light);
        assert_eq!(Theme::Light.applied(true), AppliedTheme::Light);
    }
}
