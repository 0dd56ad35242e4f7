//! Configuration loading for matrix-notify.
//!
//! The notification dispatcher passes everything through environment
//! variables: the Matrix endpoint as `NOTIFY_PARAMETER_1..3` and the event
//! itself as `NOTIFY_*` macros.

mod env;
mod secret;
mod types;

pub use env::{load_context, load_matrix_config};
pub use secret::SecretString;
pub use types::*;
