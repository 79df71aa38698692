//! Theme Preference and Palette
//!
//! Each user picks light or dark. The palette travels with the profile so
//! clients render the same colours for every user of a theme.

use serde::Serialize;

/// Stored theme preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    /// Anything other than `dark` (case-insensitive) is Light
    pub fn parse(s: &str) -> Self {
        if s.trim().eq_ignore_ascii_case("dark") {
            ThemePreference::Dark
        } else {
            ThemePreference::Light
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        }
    }

    pub fn palette(&self) -> &'static ThemePalette {
        match self {
            ThemePreference::Light => &LIGHT,
            ThemePreference::Dark => &DARK,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::Light,
        }
    }
}

impl std::fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `#RRGGBB` colours for one theme
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemePalette {
    pub primary: &'static str,
    pub accent: &'static str,
    pub background: &'static str,
    pub card_background: &'static str,
    pub text_primary: &'static str,
    pub text_secondary: &'static str,
}

static LIGHT: ThemePalette = ThemePalette {
    primary: "#3F51B5",
    accent: "#FF4081",
    background: "#FAFAFA",
    card_background: "#FFFFFF",
    text_primary: "#212121",
    text_secondary: "#757575",
};

static DARK: ThemePalette = ThemePalette {
    primary: "#64B5F6",
    accent: "#FF80AB",
    background: "#1E1E1E",
    card_background: "#323232",
    text_primary: "#FFFFFF",
    text_secondary: "#969696",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(ThemePreference::parse("dark"), ThemePreference::Dark);
        assert_eq!(ThemePreference::parse("DARK"), ThemePreference::Dark);
        assert_eq!(ThemePreference::parse("light"), ThemePreference::Light);
        assert_eq!(ThemePreference::parse("solarized"), ThemePreference::Light);
        assert_eq!(ThemePreference::parse(""), ThemePreference::Light);
    }

    #[test]
    fn test_round_trip_through_storage_text() {
        for theme in [ThemePreference::Light, ThemePreference::Dark] {
            assert_eq!(ThemePreference::parse(theme.as_str()), theme);
        }
    }

    #[test]
    fn test_palettes() {
        let light = ThemePreference::Light.palette();
        assert_eq!(light.primary, "#3F51B5");
        assert_eq!(light.text_secondary, "#757575");

        let dark = ThemePreference::Dark.palette();
        assert_eq!(dark.background, "#1E1E1E");
        assert_eq!(dark.card_background, "#323232");
    }

    #[test]
    fn test_toggled() {
        assert_eq!(ThemePreference::Light.toggled(), ThemePreference::Dark);
        assert_eq!(ThemePreference::Dark.toggled(), ThemePreference::Light);
    }

    #[test]
    fn test_palette_serializes_camel_case() {
        let json = serde_json::to_value(ThemePreference::Dark.palette()).unwrap();
        assert_eq!(json["cardBackground"], "#323232");
        assert_eq!(json["textPrimary"], "#FFFFFF");
    }
}
