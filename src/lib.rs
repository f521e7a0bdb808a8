//! CipherBar - browser identity-box indicator for TLS connection security
//!
//! Renders a compact status label (protocol version, cipher family, key
//! length, cipher mode, forward secrecy, HSTS, HTTP/2) into the identity
//! area of every open browser window:
//! - window open/close events attach and detach one label + listener pair
//! - security-state changes recompute the label from the host's TLS status
//! - all host facilities are injected traits, never ambient lookups
//!
//! The host platform owns the windows, the documents, the TLS machinery,
//! and the event loop; this crate only reads already-computed security
//! results and mutates one label per window. Hosts either call the
//! [`tracker::WindowTracker`] methods directly from their callbacks or feed
//! [`events::HostEvent`]s through an [`events::EventPump`].

pub mod core;
pub mod events;
pub mod host;
pub mod listener;
pub mod logging;
pub mod settings;
pub mod tracker;
pub mod ui;

pub use crate::core::{
    CipherFamily, CipherMode, HttpVersion, RequestInfo, SecurityState, StatusSummary, TlsProtocol,
    TlsStatus,
};
pub use events::{EventPump, HostEvent};
pub use host::{
    BrowserHost, BundledResources, DocumentUi, HostError, HostServices, HostWindow,
    ResourceResolver, SecurityHeaderKind, SiteSecurityService, WindowId,
};
pub use listener::{IndicatorError, SecurityChangeListener};
pub use settings::Settings;
pub use tracker::WindowTracker;
