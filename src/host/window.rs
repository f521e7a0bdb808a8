//! Window handles and enumeration

use std::fmt;

use url::Url;

use crate::core::TlsStatus;

use super::document::DocumentUi;

/// Identifier for one open browser window, issued by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WindowId(pub u64);

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One open browser window as exposed by the host
pub trait HostWindow {
    fn id(&self) -> WindowId;

    /// URI of the currently displayed page, if any
    fn current_uri(&self) -> Option<Url>;

    /// TLS status of the current page. Expected to be present whenever the
    /// page-loader state reports the transport as secured.
    fn tls_status(&self) -> Option<TlsStatus>;

    /// The window's document surface
    fn document(&self) -> &dyn DocumentUi;
}

/// The host windowing system: enumeration of open windows and resolution of
/// ids back to live handles
pub trait BrowserHost {
    /// Windows currently open, in host order
    fn windows(&self) -> Vec<WindowId>;

    /// Resolve an id to a live window handle. `None` once the window is gone.
    fn window(&self, id: WindowId) -> Option<&dyn HostWindow>;
}
