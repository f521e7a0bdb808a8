//! Host platform boundary
//!
//! Everything the indicator needs from the embedding browser, expressed as
//! injected traits: window enumeration, per-window page/TLS accessors, the
//! document surface carrying the identity box, the site-security service,
//! and packaged-resource resolution. The host drives this crate; this crate
//! never reaches into the host beyond these interfaces.

pub mod document;
pub mod services;
pub mod window;

#[cfg(test)]
pub(crate) mod mock;

pub use document::DocumentUi;
pub use services::{BundledResources, ResourceResolver, SecurityHeaderKind, SiteSecurityService};
pub use window::{BrowserHost, HostWindow, WindowId};

use std::sync::Arc;

use thiserror::Error;

/// Errors surfaced by host document and resource operations during attach
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    #[error("document element '{0}' not found")]
    MissingElement(String),

    #[error("packaged resource '{0}' could not be resolved")]
    MissingResource(String),
}

/// Global host services injected at construction instead of looked up
/// ambiently
#[derive(Clone)]
pub struct HostServices {
    /// Sitewide security-policy queries (HSTS)
    pub site_security: Arc<dyn SiteSecurityService>,

    /// Packaged static resource resolution
    pub resources: Arc<dyn ResourceResolver>,
}

impl HostServices {
    pub fn new(
        site_security: Arc<dyn SiteSecurityService>,
        resources: Arc<dyn ResourceResolver>,
    ) -> Self {
        Self {
            site_security,
            resources,
        }
    }
}
