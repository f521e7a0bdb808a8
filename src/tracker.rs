//! Window tracker
//!
//! Owns one listener per live window and keeps the listener + label pair in
//! lockstep with the host's window lifecycle: attach on open, detach on
//! close, never an orphan of either.

use std::collections::HashMap;

use crate::core::{RequestInfo, SecurityState};
use crate::host::{BrowserHost, HostError, HostServices, HostWindow, WindowId};
use crate::listener::SecurityChangeListener;
use crate::settings::Settings;
use crate::ui;
use crate::ui::LabelSpec;

/// Tracks open windows and the indicator state attached to each
pub struct WindowTracker {
    services: HostServices,
    label_spec: LabelSpec,
    attachments: HashMap<WindowId, SecurityChangeListener>,
}

impl WindowTracker {
    pub fn new(services: HostServices, settings: &Settings) -> Self {
        Self {
            services,
            label_spec: settings.label.clone(),
            attachments: HashMap::new(),
        }
    }

    /// Attach the indicator to one window: stylesheet reference, collapsed
    /// label, and a listener registered under the window's id. Attaching a
    /// window that is already tracked is a warning-level no-op.
    pub fn attach(&mut self, window: &dyn HostWindow) -> Result<(), HostError> {
        let id = window.id();
        if self.attachments.contains_key(&id) {
            tracing::warn!("window {} is already attached", id);
            return Ok(());
        }

        let href = self
            .services
            .resources
            .resource_url(ui::STYLESHEET_RESOURCE)
            .ok_or_else(|| HostError::MissingResource(ui::STYLESHEET_RESOURCE.to_string()))?;

        let document = window.document();
        document.insert_stylesheet(ui::STYLESHEET_CLASS, &href);
        if let Err(e) = document.insert_label(&self.label_spec) {
            // keep the no-orphans invariant: nothing of ours stays behind
            document.remove_stylesheet(ui::STYLESHEET_CLASS);
            return Err(e);
        }

        let listener = SecurityChangeListener::new(
            self.services.site_security.clone(),
            self.label_spec.id.clone(),
        );
        self.attachments.insert(id, listener);
        tracing::debug!("attached indicator to window {}", id);
        Ok(())
    }

    /// Detach the indicator from one window, removing the listener, the
    /// label, and the stylesheet reference. Missing pieces degrade silently.
    pub fn detach(&mut self, window: &dyn HostWindow) {
        let id = window.id();
        if self.attachments.remove(&id).is_none() {
            tracing::debug!("window {} was not attached", id);
        }

        let document = window.document();
        if !document.remove_label(&self.label_spec.id) {
            tracing::debug!("window {} had no label to remove", id);
        }
        if !document.remove_stylesheet(ui::STYLESHEET_CLASS) {
            tracing::debug!("window {} had no stylesheet to remove", id);
        }
    }

    /// Drop the listener for a window whose handle the host no longer
    /// resolves; its document died with the window.
    pub fn forget(&mut self, id: WindowId) {
        if self.attachments.remove(&id).is_some() {
            tracing::debug!("forgot window {} without a live handle", id);
        }
    }

    /// Route a security-state notification to the owning window's listener.
    /// Unknown windows are dropped; listener errors are logged and absorbed
    /// so one bad notification cannot take the host callback down.
    pub fn on_security_change(
        &mut self,
        window: &dyn HostWindow,
        request: &RequestInfo,
        state: SecurityState,
    ) {
        let id = window.id();
        match self.attachments.get_mut(&id) {
            Some(listener) => {
                if let Err(e) = listener.on_security_change(window, request, state) {
                    tracing::warn!("indicator update failed for window {}: {}", id, e);
                }
            }
            None => tracing::debug!("security change for untracked window {}", id),
        }
    }

    /// Attach every window the host currently reports (add-on startup).
    /// Per-window failures are logged and skipped.
    pub fn install<H: BrowserHost>(&mut self, host: &H) {
        for id in host.windows() {
            let Some(window) = host.window(id) else {
                continue;
            };
            if let Err(e) = self.attach(window) {
                tracing::warn!("failed to attach indicator to window {}: {}", id, e);
            }
        }
    }

    /// Detach every tracked window (add-on unload)
    pub fn shutdown<H: BrowserHost>(&mut self, host: &H) {
        let ids: Vec<WindowId> = self.attachments.keys().copied().collect();
        for id in ids {
            match host.window(id) {
                Some(window) => self.detach(window),
                None => self.forget(id),
            }
        }
    }

    pub fn is_attached(&self, id: WindowId) -> bool {
        self.attachments.contains_key(&id)
    }

    pub fn attached_count(&self) -> usize {
        self.attachments.len()
    }
}
