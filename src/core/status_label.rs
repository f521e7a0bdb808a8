//! Status label formatting
//!
//! Pure derivation of the identity-box string from the TLS status snapshot.
//! Classification is case-sensitive substring matching on the suite name.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{TlsProtocol, TlsStatus};

/// Cipher family derived from the negotiated suite name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CipherFamily {
    /// Suite name contains "_AES_"
    Aes,
    /// Suite name contains "_RC4_"
    Rc4,
    /// Suite name contains "_3DES_"
    TripleDes,
    /// Anything else
    Unknown,
}

impl CipherFamily {
    pub fn from_suite(suite: &str) -> Self {
        if suite.contains("_AES_") {
            CipherFamily::Aes
        } else if suite.contains("_RC4_") {
            CipherFamily::Rc4
        } else if suite.contains("_3DES_") {
            CipherFamily::TripleDes
        } else {
            CipherFamily::Unknown
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CipherFamily::Aes => "AES",
            CipherFamily::Rc4 => "RC4",
            CipherFamily::TripleDes => "DES",
            CipherFamily::Unknown => "?",
        }
    }
}

/// Cipher mode derived from the negotiated suite name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CipherMode {
    /// Suite name contains "_GCM_"
    Gcm,
    /// Suite name contains "_CBC_"
    Cbc,
    /// Stream cipher, no mode shown (RC4 suites)
    None,
    /// Block cipher with an unrecognized mode
    Unknown,
}

impl CipherMode {
    /// Mode depends on the family: RC4 suites carry no mode label at all,
    /// while an unrecognized mode on a block cipher shows as "/?".
    pub fn from_suite(suite: &str, family: CipherFamily) -> Self {
        if suite.contains("_GCM_") {
            CipherMode::Gcm
        } else if suite.contains("_CBC_") {
            CipherMode::Cbc
        } else if family == CipherFamily::Rc4 {
            CipherMode::None
        } else {
            CipherMode::Unknown
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CipherMode::Gcm => "/GCM",
            CipherMode::Cbc => "/CBC",
            CipherMode::None => "",
            CipherMode::Unknown => "/?",
        }
    }
}

/// True when the suite uses ephemeral key exchange. Substring match, so
/// "ECDHE_" suites qualify as well as plain "DHE_".
pub fn has_forward_secrecy(suite: &str) -> bool {
    suite.contains("DHE_")
}

/// Everything needed to render the identity-box label for one page load
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusSummary {
    pub protocol: TlsProtocol,
    pub cipher: CipherFamily,
    pub mode: CipherMode,
    pub secret_key_length: u32,
    pub forward_secrecy: bool,
    pub strict_transport: bool,
    pub http2: bool,
}

impl StatusSummary {
    /// Derive the summary from the host's TLS status plus the two facts the
    /// status object does not carry: HTTP/2 on the response and HSTS on the
    /// site.
    pub fn new(status: &TlsStatus, http2: bool, strict_transport: bool) -> Self {
        let cipher = CipherFamily::from_suite(&status.cipher_suite);
        Self {
            protocol: status.protocol,
            cipher,
            mode: CipherMode::from_suite(&status.cipher_suite, cipher),
            secret_key_length: status.secret_key_length,
            forward_secrecy: has_forward_secrecy(&status.cipher_suite),
            strict_transport,
            http2,
        }
    }
}

impl fmt::Display for StatusSummary {
    /// "{proto},{cipher}/{len}{mode},{fs},{sts}{h2}"
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{}/{}{},{},{}{}",
            self.protocol.label(),
            self.cipher.label(),
            self.secret_key_length,
            self.mode.label(),
            if self.forward_secrecy { "FS" } else { "!FS" },
            if self.strict_transport { "STS" } else { "!STS" },
            if self.http2 { ",H2" } else { "" },
        )
    }
}
