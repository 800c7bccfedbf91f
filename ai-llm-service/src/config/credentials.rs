//! Gateway credentials, resolved once per process and passed explicitly.

/// Primary env var for the gateway API key.
pub const PRIMARY_API_KEY_VAR: &str = "GOOGLE_API_KEY";
/// Secondary env var, consulted only when the primary is absent.
pub const SECONDARY_API_KEY_VAR: &str = "GEMINI_API_KEY";

/// The two recognised credential slots. Blank values count as absent.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ApiCredentials {
    pub primary_api_key: Option<String>,
    pub secondary_api_key: Option<String>,
}

impl ApiCredentials {
    /// Reads both slots from the process environment.
    pub fn from_env() -> Self {
        Self {
            primary_api_key: std::env::var(PRIMARY_API_KEY_VAR).ok(),
            secondary_api_key: std::env::var(SECONDARY_API_KEY_VAR).ok(),
        }
    }

    /// No credentials at all; every request takes the mock path.
    pub fn none() -> Self {
        Self::default()
    }

    /// Builds credentials holding only a primary key.
    pub fn with_primary(key: impl Into<String>) -> Self {
        Self {
            primary_api_key: Some(key.into()),
            secondary_api_key: None,
        }
    }

    /// The key to use: primary first, then secondary.
    pub fn resolve(&self) -> Option<&str> {
        non_blank(self.primary_api_key.as_deref()).or(non_blank(self.secondary_api_key.as_deref()))
    }

    pub fn is_configured(&self) -> bool {
        self.resolve().is_some()
    }
}

// Keys must never reach the logs.
impl std::fmt::Debug for ApiCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiCredentials")
            .field("primary_api_key", &self.primary_api_key.as_ref().map(|_| "***"))
            .field("secondary_api_key", &self.secondary_api_key.as_ref().map(|_| "***"))
            .finish()
    }
}

fn non_blank(v: Option<&str>) -> Option<&str> {
    v.filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_wins_over_secondary() {
        let c = ApiCredentials {
            primary_api_key: Some("p".into()),
            secondary_api_key: Some("s".into()),
        };
        assert_eq!(c.resolve(), Some("p"));
    }

    #[test]
    fn blank_primary_falls_back_to_secondary() {
        let c = ApiCredentials {
            primary_api_key: Some("   ".into()),
            secondary_api_key: Some("s".into()),
        };
        assert_eq!(c.resolve(), Some("s"));
    }

    #[test]
    fn nothing_configured() {
        assert!(!ApiCredentials::none().is_configured());
        let blank = ApiCredentials {
            primary_api_key: Some(String::new()),
            secondary_api_key: Some(" ".into()),
        };
        assert_eq!(blank.resolve(), None);
    }

    #[test]
    fn debug_redacts_keys() {
        let c = ApiCredentials::with_primary("sk-secret");
        let dbg = format!("{c:?}");
        assert!(!dbg.contains("sk-secret"));
        assert!(dbg.contains("***"));
    }
}
