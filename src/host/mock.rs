//! In-memory host used by unit tests

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use url::Url;

use crate::core::TlsStatus;
use crate::ui::{IDENTITY_BOX_ID, IDENTITY_LABELS_ID, LabelSpec};

use super::{
    BrowserHost, BundledResources, DocumentUi, HostError, HostServices, HostWindow,
    SecurityHeaderKind, SiteSecurityService, WindowId,
};

/// Injected label element state
#[derive(Debug, Clone)]
pub struct MockLabel {
    pub class: String,
    pub inserted_before: String,
    pub value: String,
    pub tooltip: String,
    pub collapsed: bool,
}

/// Document with just enough structure for attach/detach and label writes
pub struct MockDocument {
    elements: RefCell<HashSet<String>>,
    stylesheets: RefCell<Vec<(String, Url)>>,
    labels: RefCell<HashMap<String, MockLabel>>,
    text_writes: RefCell<usize>,
}

impl MockDocument {
    pub fn empty() -> Self {
        Self {
            elements: RefCell::new(HashSet::new()),
            stylesheets: RefCell::new(Vec::new()),
            labels: RefCell::new(HashMap::new()),
            text_writes: RefCell::new(0),
        }
    }

    /// Document carrying the identity-box anchors the default label spec expects
    pub fn with_identity_box() -> Self {
        let doc = Self::empty();
        {
            let mut elements = doc.elements.borrow_mut();
            elements.insert(IDENTITY_BOX_ID.to_string());
            elements.insert(IDENTITY_LABELS_ID.to_string());
        }
        doc
    }

    pub fn label(&self, id: &str) -> Option<MockLabel> {
        self.labels.borrow().get(id).cloned()
    }

    pub fn stylesheet_count(&self) -> usize {
        self.stylesheets.borrow().len()
    }

    /// Number of set_label_text calls that actually hit an existing label
    pub fn text_writes(&self) -> usize {
        *self.text_writes.borrow()
    }
}

impl DocumentUi for MockDocument {
    fn insert_stylesheet(&self, class: &str, href: &Url) {
        self.stylesheets
            .borrow_mut()
            .push((class.to_string(), href.clone()));
    }

    fn remove_stylesheet(&self, class: &str) -> bool {
        let mut sheets = self.stylesheets.borrow_mut();
        let before = sheets.len();
        sheets.retain(|(c, _)| c != class);
        sheets.len() != before
    }

    fn insert_label(&self, spec: &LabelSpec) -> Result<(), HostError> {
        {
            let elements = self.elements.borrow();
            if !elements.contains(&spec.container) {
                return Err(HostError::MissingElement(spec.container.clone()));
            }
            if !elements.contains(&spec.insert_before) {
                return Err(HostError::MissingElement(spec.insert_before.clone()));
            }
        }
        self.labels.borrow_mut().insert(
            spec.id.clone(),
            MockLabel {
                class: spec.class.clone(),
                inserted_before: spec.insert_before.clone(),
                value: String::new(),
                tooltip: String::new(),
                collapsed: true,
            },
        );
        Ok(())
    }

    fn remove_label(&self, id: &str) -> bool {
        self.labels.borrow_mut().remove(id).is_some()
    }

    fn set_label_text(&self, id: &str, value: &str, tooltip: &str) {
        if let Some(label) = self.labels.borrow_mut().get_mut(id) {
            label.value = value.to_string();
            label.tooltip = tooltip.to_string();
            *self.text_writes.borrow_mut() += 1;
        }
    }

    fn set_label_collapsed(&self, id: &str, collapsed: bool) {
        if let Some(label) = self.labels.borrow_mut().get_mut(id) {
            label.collapsed = collapsed;
        }
    }
}

/// One simulated browser window
pub struct MockWindow {
    id: WindowId,
    pub uri: Option<Url>,
    pub tls: Option<TlsStatus>,
    pub document: MockDocument,
}

impl MockWindow {
    pub fn new(id: u64) -> Self {
        Self {
            id: WindowId(id),
            uri: None,
            tls: None,
            document: MockDocument::with_identity_box(),
        }
    }

    pub fn with_uri(mut self, uri: &str) -> Self {
        self.uri = Some(Url::parse(uri).unwrap());
        self
    }

    pub fn with_tls(mut self, tls: TlsStatus) -> Self {
        self.tls = Some(tls);
        self
    }

    pub fn with_document(mut self, document: MockDocument) -> Self {
        self.document = document;
        self
    }
}

impl HostWindow for MockWindow {
    fn id(&self) -> WindowId {
        self.id
    }

    fn current_uri(&self) -> Option<Url> {
        self.uri.clone()
    }

    fn tls_status(&self) -> Option<TlsStatus> {
        self.tls.clone()
    }

    fn document(&self) -> &dyn DocumentUi {
        &self.document
    }
}

/// Simulated windowing system
pub struct MockBrowser {
    windows: Vec<MockWindow>,
}

impl MockBrowser {
    pub fn new() -> Self {
        Self {
            windows: Vec::new(),
        }
    }

    pub fn push(&mut self, window: MockWindow) -> WindowId {
        let id = window.id;
        self.windows.push(window);
        id
    }

    pub fn get(&self, id: WindowId) -> Option<&MockWindow> {
        self.windows.iter().find(|w| w.id == id)
    }

    pub fn get_mut(&mut self, id: WindowId) -> Option<&mut MockWindow> {
        self.windows.iter_mut().find(|w| w.id == id)
    }

    /// Drop the window handle entirely, as a host does once a window is gone
    pub fn remove(&mut self, id: WindowId) -> Option<MockWindow> {
        let index = self.windows.iter().position(|w| w.id == id)?;
        Some(self.windows.remove(index))
    }
}

impl BrowserHost for MockBrowser {
    fn windows(&self) -> Vec<WindowId> {
        self.windows.iter().map(|w| w.id).collect()
    }

    fn window(&self, id: WindowId) -> Option<&dyn HostWindow> {
        self.windows
            .iter()
            .find(|w| w.id == id)
            .map(|w| w as &dyn HostWindow)
    }
}

/// Site-security service answering from a fixed set of HSTS-marked URIs
pub struct StaticSiteSecurity {
    secure: HashSet<String>,
}

impl StaticSiteSecurity {
    pub fn new() -> Self {
        Self {
            secure: HashSet::new(),
        }
    }

    /// Builder pattern: mark a URI as HSTS-secured
    pub fn mark(mut self, uri: &str) -> Self {
        self.secure.insert(uri.to_string());
        self
    }
}

impl SiteSecurityService for StaticSiteSecurity {
    fn is_secure_uri(&self, kind: SecurityHeaderKind, uri: &Url, _flags: u32) -> bool {
        kind == SecurityHeaderKind::Hsts && self.secure.contains(uri.as_str())
    }
}

/// Services bundle wired to the given site-security fixture
pub fn services(site_security: StaticSiteSecurity) -> HostServices {
    HostServices::new(
        Arc::new(site_security),
        Arc::new(BundledResources::new(
            Url::parse("resource://cipherbar/").unwrap(),
        )),
    )
}
