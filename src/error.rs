//! Error handling for rdap-resolve

use thiserror::Error;

/// Main error type for rdap-resolve
#[derive(Error, Debug, Clone)]
pub enum RdapResolveError {
    #[error("Malformed address: '{ip}'")]
    MalformedAddress { ip: String },

    #[error("Bootstrap fetch error for {url}: {message}")]
    BootstrapFetch {
        url: String,
        message: String,
        status_code: Option<u16>,
    },

    #[error("RDAP upstream unavailable for '{ip}'")]
    RdapUpstream { ip: String },

    #[error("Network error: {message}")]
    Network {
        message: String,
        status_code: Option<u16>,
        url: Option<String>,
    },

    #[error("Parse error: {message}")]
    Parse {
        message: String,
        content: Option<String>,
    },
}

impl RdapResolveError {
    /// Create a malformed-address error carrying the offending input.
    pub fn malformed_address(ip: impl Into<String>) -> Self {
        Self::MalformedAddress { ip: ip.into() }
    }

    /// Create a bootstrap fetch error
    pub fn bootstrap_fetch(
        url: impl Into<String>,
        message: impl Into<String>,
        status_code: Option<u16>,
    ) -> Self {
        Self::BootstrapFetch {
            url: url.into(),
            message: message.into(),
            status_code,
        }
    }

    /// Create the distinguished "resolution failed" outcome, carrying the
    /// original client IP so callers can render a degraded response.
    pub fn rdap_upstream(ip: impl Into<String>) -> Self {
        Self::RdapUpstream { ip: ip.into() }
    }

    /// Create a network error
    pub fn network(
        message: impl Into<String>,
        status_code: Option<u16>,
        url: Option<String>,
    ) -> Self {
        Self::Network {
            message: message.into(),
            status_code,
            url,
        }
    }

    /// Create a parse error
    pub fn parse(message: impl Into<String>, content: Option<String>) -> Self {
        Self::Parse {
            message: message.into(),
            content,
        }
    }

    /// The client IP this error was raised for, when one is attached.
    pub fn client_ip(&self) -> Option<&str> {
        match self {
            Self::MalformedAddress { ip } | Self::RdapUpstream { ip } => Some(ip),
            _ => None,
        }
    }
}

/// Convert from common error types
impl From<reqwest::Error> for RdapResolveError {
    fn from(err: reqwest::Error) -> Self {
        let status_code = err.status().map(|s| s.as_u16());
        let url = err.url().map(|u| u.to_string());

        if err.is_timeout() {
            Self::network("Request timed out", status_code, url)
        } else if err.is_connect() {
            Self::network("Connection failed", status_code, url)
        } else {
            Self::network(err.to_string(), status_code, url)
        }
    }
}

impl From<serde_json::Error> for RdapResolveError {
    fn from(err: serde_json::Error) -> Self {
        Self::parse(err.to_string(), None)
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, RdapResolveError>;
