//! Security state word delivered with page-loader notifications

use bitflags::bitflags;

bitflags! {
    /// Connection security state bits reported by the host's page loader.
    ///
    /// The values follow the host platform's progress-listener constants.
    /// Unknown bits (e.g. secure-strength modifiers) are retained so that
    /// two notifications compare equal only when the full state word matches.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct SecurityState: u32 {
        /// The connection is encrypted but something about it is degraded.
        const BROKEN = 0x0000_0001;
        /// The connection is fully secure.
        const SECURE = 0x0000_0002;
        /// The connection is not encrypted at all.
        const INSECURE = 0x0000_0004;
    }
}

impl SecurityState {
    /// Build from the raw host state word, keeping bits this crate does not
    /// interpret.
    pub fn from_raw(bits: u32) -> Self {
        Self::from_bits_retain(bits)
    }

    /// True when the transport is encrypted, whether intact or degraded.
    pub fn transport_secured(self) -> bool {
        self.intersects(Self::SECURE | Self::BROKEN)
    }
}
