//! Light/dark theme preference.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Visual mode of the dashboard.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    /// Default mode, no body marker class
    #[default]
    Light,
    /// Dark mode, body carries the `dark` class
    Dark,
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Theme {
    /// Class added to `<body>` while the dark theme is active.
    pub const DARK_CLASS: &'static str = "dark";

    /// Parse a stored or requested value. Only the exact string `"dark"`
    /// selects the dark theme; everything else falls back to light.
    pub fn parse(s: &str) -> Self {
        match s {
            "dark" => Self::Dark,
            _ => Self::Light,
        }
    }

    /// Value written to storage.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// The other theme.
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_only_dark_is_dark() {
        assert_eq!(Theme::parse("dark"), Theme::Dark);
        assert_eq!(Theme::parse("light"), Theme::Light);
        assert_eq!(Theme::parse("Dark"), Theme::Light);
        assert_eq!(Theme::parse("system"), Theme::Light);
        assert_eq!(Theme::parse(""), Theme::Light);
    }

    #[test]
    fn test_toggle_and_display() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().to_string(), "light");
        assert!(Theme::Dark.is_dark());
        assert!(!Theme::default().is_dark());
    }
}
