//! Identity-box UI definitions
//!
//! Element identifiers for the injected label, plus the packaged stylesheet.

use serde::{Deserialize, Serialize};

/// Element id of the injected status label
pub const LABEL_ID: &str = "cipherbar-label";

/// Style class applied to the label
pub const LABEL_CLASS: &str = "plain";

/// Identity-box container the label is inserted into
pub const IDENTITY_BOX_ID: &str = "identity-box";

/// Sibling element the label is inserted before
pub const IDENTITY_LABELS_ID: &str = "identity-icon-labels";

/// Class tagging the injected stylesheet reference, so detach can find it again
pub const STYLESHEET_CLASS: &str = "cipherbar-node";

/// Packaged stylesheet resource name
pub const STYLESHEET_RESOURCE: &str = "cipherbar.css";

/// Packaged stylesheet contents, embedded so hosts can serve it without
/// shipping the file separately
pub const STYLESHEET_CSS: &str = include_str!("../resources/cipherbar.css");

/// Identifiers for the injected label element and its anchors in the
/// window's document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelSpec {
    /// Element id the label is created with
    pub id: String,

    /// Style class applied to the label
    pub class: String,

    /// Container element the label is inserted into
    pub container: String,

    /// Existing sibling the label is inserted before
    pub insert_before: String,
}

impl Default for LabelSpec {
    fn default() -> Self {
        Self {
            id: LABEL_ID.to_string(),
            class: LABEL_CLASS.to_string(),
            container: IDENTITY_BOX_ID.to_string(),
            insert_before: IDENTITY_LABELS_ID.to_string(),
        }
    }
}
