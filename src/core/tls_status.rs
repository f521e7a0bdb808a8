//! TLS status snapshot and request metadata models

use serde::{Deserialize, Serialize};

/// TLS protocol version as reported by the host security status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TlsProtocol {
    /// TLS 1.0
    Tls10,
    /// TLS 1.1
    Tls11,
    /// TLS 1.2
    Tls12,
    /// Anything the host reports outside the versions above
    Unknown,
}

impl TlsProtocol {
    /// Map the host's raw protocol-version value. The legacy SSL3 value (0)
    /// and versions this crate does not name map to `Unknown`.
    pub fn from_raw(raw: u16) -> Self {
        match raw {
            1 => TlsProtocol::Tls10,
            2 => TlsProtocol::Tls11,
            3 => TlsProtocol::Tls12,
            _ => TlsProtocol::Unknown,
        }
    }

    /// Display label used in the identity-box string
    pub fn label(self) -> &'static str {
        match self {
            TlsProtocol::Tls10 => "1.0",
            TlsProtocol::Tls11 => "1.1",
            TlsProtocol::Tls12 => "1.2",
            TlsProtocol::Unknown => "?",
        }
    }
}

/// Point-in-time TLS security status of one window's page, as computed by
/// the host security subsystem. Read per notification, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TlsStatus {
    /// Negotiated protocol version
    pub protocol: TlsProtocol,

    /// Negotiated cipher suite name (e.g. "TLS_DHE_RSA_WITH_AES_128_GCM_SHA256")
    pub cipher_suite: String,

    /// Symmetric key length in bits
    pub secret_key_length: u32,
}

impl TlsStatus {
    /// Create a new status snapshot
    pub fn new(protocol: TlsProtocol, cipher_suite: impl Into<String>, secret_key_length: u32) -> Self {
        Self {
            protocol,
            cipher_suite: cipher_suite.into(),
            secret_key_length,
        }
    }
}

/// HTTP version reported for the response behind a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpVersion {
    pub major: u16,
    pub minor: u16,
}

/// Request metadata delivered alongside a security-state notification
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestInfo {
    /// Response HTTP version, when the host could determine it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_version: Option<HttpVersion>,
}

impl RequestInfo {
    /// Create request metadata with no known response version
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder pattern: set the response HTTP version
    pub fn with_response_version(mut self, major: u16, minor: u16) -> Self {
        self.response_version = Some(HttpVersion { major, minor });
        self
    }

    /// True iff the response was served over HTTP/2
    pub fn is_http2(&self) -> bool {
        matches!(self.response_version, Some(v) if v.major == 2)
    }
}
