//! Per-window document surface

use url::Url;

use crate::ui::LabelSpec;

use super::HostError;

/// DOM-like surface of one window's document, reduced to the operations the
/// indicator performs.
///
/// Implementations are interior-mutable: the document is host-owned and its
/// handles are shared, so every operation takes `&self`. Mutations on a
/// label that does not exist are host-side no-ops; removals report whether
/// the element was present so teardown can degrade silently.
pub trait DocumentUi {
    /// Insert a stylesheet reference tagged with `class` at the top of the
    /// document
    fn insert_stylesheet(&self, class: &str, href: &Url);

    /// Remove the stylesheet reference tagged with `class`. Returns false
    /// when no such reference exists.
    fn remove_stylesheet(&self, class: &str) -> bool;

    /// Insert the collapsed label element described by `spec`, positioned
    /// before `spec.insert_before` inside `spec.container`. Fails when the
    /// anchor elements are missing from the document.
    fn insert_label(&self, spec: &LabelSpec) -> Result<(), HostError>;

    /// Remove the label with the given id. Returns false when absent.
    fn remove_label(&self, id: &str) -> bool;

    /// Set the label's visible text and hover tooltip
    fn set_label_text(&self, id: &str, value: &str, tooltip: &str);

    /// Collapse or reveal the label
    fn set_label_collapsed(&self, id: &str, collapsed: bool);
}
