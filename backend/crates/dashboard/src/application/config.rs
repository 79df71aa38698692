//! Application Configuration
//!
//! Configuration for the Dashboard application layer.

use std::time::Duration;

use platform::cookie::CookieConfig;

/// Re-export SameSite from platform
pub use platform::cookie::SameSite;

/// Dashboard application configuration
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Session cookie name
    pub session_cookie_name: String,
    /// Session secret key for HMAC signing (32 bytes)
    pub session_secret: [u8; 32],
    /// Session TTL without "Remember Me" (12 hours)
    pub session_ttl_short: Duration,
    /// Session TTL with "Remember Me" (1 week)
    pub session_ttl_long: Duration,
    /// Whether to require Secure cookie
    pub cookie_secure: bool,
    /// SameSite policy
    pub cookie_same_site: SameSite,
    /// Maximum post length in characters
    pub max_post_length: usize,
    /// Maximum comment length in characters
    pub max_comment_length: usize,
    /// Days covered by the activity series, not counting today
    pub activity_window_days: u32,
    /// Longest a `/analytics/changes` request may wait
    pub analytics_wait_max: Duration,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            session_cookie_name: "dashboard_session".to_string(),
            session_secret: [0u8; 32],
            session_ttl_short: Duration::from_secs(12 * 3600), // 12 hours
            session_ttl_long: Duration::from_secs(7 * 24 * 3600), // 1 week
            cookie_secure: true,
            cookie_same_site: SameSite::Lax,
            max_post_length: 500,
            max_comment_length: 250,
            activity_window_days: 30,
            analytics_wait_max: Duration::from_secs(30),
        }
    }
}

impl DashboardConfig {
    /// Create config with a random session secret (for development)
    pub fn with_random_secret() -> Self {
        use rand::RngCore;
        let mut secret = [0u8; 32];
        rand::rng().fill_bytes(&mut secret);
        Self {
            session_secret: secret,
            ..Default::default()
        }
    }

    /// Create config for development (insecure cookie)
    pub fn development() -> Self {
        Self {
            cookie_secure: false,
            ..Self::with_random_secret()
        }
    }

    /// Session lifetime for the given "Remember Me" choice
    pub fn session_ttl(&self, remember_me: bool) -> Duration {
        if remember_me {
            self.session_ttl_long
        } else {
            self.session_ttl_short
        }
    }

    /// Session cookie whose Max-Age matches the session lifetime
    pub fn session_cookie(&self, remember_me: bool) -> CookieConfig {
        self.base_cookie()
            .with_max_age(self.session_ttl(remember_me).as_secs())
    }

    /// Cookie attributes without a lifetime, used to clear the cookie
    pub fn base_cookie(&self) -> CookieConfig {
        CookieConfig {
            name: self.session_cookie_name.clone(),
            secure: self.cookie_secure,
            http_only: true,
            same_site: self.cookie_same_site,
            path: "/".to_string(),
            max_age_secs: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DashboardConfig::default();
        assert_eq!(config.session_ttl(false), Duration::from_secs(43_200));
        assert_eq!(config.session_ttl(true), Duration::from_secs(604_800));
        assert_eq!(config.max_post_length, 500);
        assert_eq!(config.max_comment_length, 250);
        assert!(config.cookie_secure);
    }

    #[test]
    fn test_random_secret() {
        let a = DashboardConfig::with_random_secret();
        let b = DashboardConfig::with_random_secret();
        assert_ne!(a.session_secret, [0u8; 32]);
        assert_ne!(a.session_secret, b.session_secret);
        assert!(!DashboardConfig::development().cookie_secure);
    }

    #[test]
    fn test_session_cookie_max_age() {
        let config = DashboardConfig::development();
        let cookie = config.session_cookie(true).build_set_cookie("t");
        assert!(cookie.starts_with("dashboard_session=t"));
        assert!(cookie.contains("Max-Age=604800"));
        assert!(cookie.contains("HttpOnly"));
        assert!(!cookie.contains("Secure"));

        let cookie = config.session_cookie(false).build_set_cookie("t");
        assert!(cookie.contains("Max-Age=43200"));
    }
}
