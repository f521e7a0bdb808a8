//! Host event plumbing
//!
//! Hosts that deliver notifications over a channel rather than direct calls
//! wire a `Sender<HostEvent>` into their window and progress callbacks and
//! let `EventPump` drain the receiving end on the UI thread.

use crossbeam_channel::{Receiver, TryRecvError};

use crate::core::{RequestInfo, SecurityState};
use crate::host::{BrowserHost, WindowId};
use crate::tracker::WindowTracker;

/// Notifications delivered by the host windowing and page-loading systems
#[derive(Debug, Clone)]
pub enum HostEvent {
    WindowOpened(WindowId),
    WindowClosed(WindowId),
    SecurityChange {
        window: WindowId,
        request: RequestInfo,
        state: SecurityState,
    },
}

/// Drains host events from a channel and routes them to the tracker
pub struct EventPump {
    events: Receiver<HostEvent>,
    tracker: WindowTracker,
}

impl EventPump {
    pub fn new(tracker: WindowTracker, events: Receiver<HostEvent>) -> Self {
        Self { events, tracker }
    }

    pub fn tracker(&self) -> &WindowTracker {
        &self.tracker
    }

    pub fn tracker_mut(&mut self) -> &mut WindowTracker {
        &mut self.tracker
    }

    pub fn into_tracker(self) -> WindowTracker {
        self.tracker
    }

    /// Handle every event currently queued without blocking. Returns the
    /// number of events handled.
    pub fn pump<H: BrowserHost>(&mut self, host: &H) -> usize {
        let mut handled = 0;
        loop {
            match self.events.try_recv() {
                Ok(event) => {
                    self.dispatch(host, event);
                    handled += 1;
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        handled
    }

    /// Block on the channel until the host disconnects it (shutdown)
    pub fn run<H: BrowserHost>(&mut self, host: &H) {
        while let Ok(event) = self.events.recv() {
            self.dispatch(host, event);
        }
    }

    fn dispatch<H: BrowserHost>(&mut self, host: &H, event: HostEvent) {
        match event {
            HostEvent::WindowOpened(id) => match host.window(id) {
                Some(window) => {
                    if let Err(e) = self.tracker.attach(window) {
                        tracing::warn!("failed to attach indicator to window {}: {}", id, e);
                    }
                }
                None => tracing::debug!("open event for unknown window {}", id),
            },
            HostEvent::WindowClosed(id) => match host.window(id) {
                Some(window) => self.tracker.detach(window),
                None => self.tracker.forget(id),
            },
            HostEvent::SecurityChange {
                window,
                request,
                state,
            } => match host.window(window) {
                Some(win) => self.tracker.on_security_change(win, &request, state),
                None => tracing::debug!("security change for unknown window {}", window),
            },
        }
    }
}
