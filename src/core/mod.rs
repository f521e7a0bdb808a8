//! Core data models and the status formatter

mod security_state;
mod status_label;
mod tls_status;

pub use security_state::*;
pub use status_label::*;
pub use tls_status::*;
