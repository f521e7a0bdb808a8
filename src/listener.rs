//! Per-window security-state listener
//!
//! Receives the host's security-change notifications for one window,
//! suppresses duplicates, and keeps the identity-box label current.

use std::sync::Arc;

use thiserror::Error;

use crate::core::{RequestInfo, SecurityState, StatusSummary};
use crate::host::{HostWindow, SecurityHeaderKind, SiteSecurityService};

/// Errors raised while updating the indicator for one notification
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IndicatorError {
    #[error("window reported no current location")]
    MissingLocation,

    #[error("no TLS status available for secured page {uri}")]
    MissingTlsStatus { uri: String },
}

/// Watches one window's security-state notifications and drives its label.
///
/// Created on window open and dropped on window close; the dedup fields are
/// only ever touched by that window's own serialized callbacks.
pub struct SecurityChangeListener {
    site_security: Arc<dyn SiteSecurityService>,
    label_id: String,
    done_one: bool,
    last_state: SecurityState,
    last_location: String,
}

impl SecurityChangeListener {
    pub fn new(site_security: Arc<dyn SiteSecurityService>, label_id: impl Into<String>) -> Self {
        Self {
            site_security,
            label_id: label_id.into(),
            done_one: false,
            last_state: SecurityState::empty(),
            last_location: String::new(),
        }
    }

    /// Handle one security-state notification for the owning window.
    ///
    /// Repeated notifications with the same state word and location are
    /// dropped without touching the UI. A state with neither secure nor
    /// broken bit collapses the label; anything else recomputes the label
    /// text from the window's TLS status.
    pub fn on_security_change(
        &mut self,
        window: &dyn HostWindow,
        request: &RequestInfo,
        state: SecurityState,
    ) -> Result<(), IndicatorError> {
        let uri = window.current_uri().ok_or(IndicatorError::MissingLocation)?;
        let location = uri.as_str().to_string();

        if self.done_one && state == self.last_state && location == self.last_location {
            return Ok(());
        }
        self.done_one = true;
        self.last_state = state;
        self.last_location = location;

        let document = window.document();
        if !state.transport_secured() {
            document.set_label_collapsed(&self.label_id, true);
            return Ok(());
        }

        let status = window
            .tls_status()
            .ok_or_else(|| IndicatorError::MissingTlsStatus {
                uri: self.last_location.clone(),
            })?;

        let strict_transport =
            self.site_security
                .is_secure_uri(SecurityHeaderKind::Hsts, &uri, 0);
        let summary = StatusSummary::new(&status, request.is_http2(), strict_transport);
        let text = summary.to_string();
        tracing::debug!("security state for {}: {}", uri, text);

        document.set_label_text(&self.label_id, &text, &status.cipher_suite);
        document.set_label_collapsed(&self.label_id, false);
        Ok(())
    }
}
