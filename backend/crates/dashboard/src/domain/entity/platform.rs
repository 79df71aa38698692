//! Social Media Platform Entity

use kernel::error::app_error::{AppError, AppResult};
use kernel::id::PlatformId;

/// A network posts are published to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialPlatform {
    pub platform_id: PlatformId,
    /// Unique display name
    pub name: String,
    /// Icon file name, resolved by the client
    pub icon: Option<String>,
    /// Brand colour as `#RRGGBB`
    pub color: Option<String>,
}

impl SocialPlatform {
    pub fn new(name: &str, icon: Option<&str>, color: Option<&str>) -> AppResult<Self> {
        let name = name.trim();
        if name.is_empty() || name.chars().count() > 50 {
            return Err(AppError::bad_request(
                "Platform name must be between 1 and 50 characters",
            ));
        }

        if let Some(color) = color {
            if !is_hex_color(color) {
                return Err(AppError::bad_request(format!(
                    "Invalid platform colour '{}', expected #RRGGBB",
                    color
                )));
            }
        }

        Ok(Self {
            platform_id: PlatformId::new(),
            name: name.to_string(),
            icon: icon.map(str::to_string),
            color: color.map(|c| c.to_ascii_uppercase()),
        })
    }
}

fn is_hex_color(s: &str) -> bool {
    s.len() == 7
        && s.starts_with('#')
        && s[1..].chars().all(|c| c.is_ascii_hexdigit())
}

/// Platforms created on first start: (name, icon, colour)
pub const DEFAULT_PLATFORMS: [(&str, &str, &str); 4] = [
    ("Instagram", "instagram.png", "#E1306C"),
    ("Facebook", "facebook.png", "#1877F2"),
    ("LinkedIn", "linkedin.png", "#0A66C2"),
    ("X", "twitter.png", "#000000"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_platform() {
        let p = SocialPlatform::new(" Mastodon ", Some("mastodon.png"), Some("#6364ff")).unwrap();
        assert_eq!(p.name, "Mastodon");
        assert_eq!(p.color.as_deref(), Some("#6364FF"));
    }

    #[test]
    fn test_invalid_color() {
        assert!(SocialPlatform::new("A", None, Some("red")).is_err());
        assert!(SocialPlatform::new("A", None, Some("#12345")).is_err());
        assert!(SocialPlatform::new("A", None, Some("#GGGGGG")).is_err());
    }

    #[test]
    fn test_defaults_are_valid() {
        for (name, icon, color) in DEFAULT_PLATFORMS {
            assert!(SocialPlatform::new(name, Some(icon), Some(color)).is_ok());
        }
    }
}
