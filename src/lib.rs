//! matrix-notify - Forward Checkmk notifications to a Matrix room.

pub mod classify;
pub mod cli;
pub mod config;
pub mod context;
pub mod engine;
pub mod error;
pub mod notify;
pub mod template;

// Re-export commonly used types
pub use classify::{MessageKind, UNRESOLVED_SERVICE_PLACEHOLDER, classify};
pub use cli::LogFormat;
pub use context::NotificationContext;
pub use engine::{Dispatcher, Outcome, prepare};
pub use error::{ConfigError, NotifyError};
pub use notify::{
    Delivery, FixedTxnId, MatrixMessage, MatrixNotifier, Notifier, RandomTxnId, TxnIdSource,
};
pub use template::{RenderedMessage, render};
