//! Consolidated constants for the payment gateway

// =============================================================================
// HTTP Headers
// =============================================================================

/// Authorization header
pub const AUTHORIZATION: &str = "Authorization";
/// Content type header
pub const CONTENT_TYPE: &str = "Content-Type";

/// Content type of every request body sent to a flat-form connector
pub const FORM_URL_ENCODED: &str = "application/x-www-form-urlencoded";

// =============================================================================
// Error Messages and Codes
// =============================================================================

/// No error message string const
pub const NO_ERROR_MESSAGE: &str = "No error message";
/// A string constant representing a redacted or masked value
pub const REDACTED: &str = "Redacted";

/// Constant variable for name
pub const NAME: &str = "PG";

// =============================================================================
// Environment and Configuration
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Env {
    Development,
    Release,
}

impl Env {
    pub const fn current_env() -> Self {
        if cfg!(debug_assertions) {
            Self::Development
        } else {
            Self::Release
        }
    }

    pub const fn config_path(self) -> &'static str {
        match self {
            Self::Development => "development.toml",
            Self::Release => "production.toml",
        }
    }
}

impl std::fmt::Display for Env {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Release => write!(f, "release"),
        }
    }
}

pub const BASE64_ENGINE: base64::engine::GeneralPurpose = base64::engine::general_purpose::STANDARD;
