//! Message delivery to Matrix.
//!
//! This module implements the transport side of a run:
//! - Abstract `Notifier` trait at the delivery seam
//! - `MatrixNotifier` issuing one authenticated `PUT` per message
//! - Injectable transaction id source (`TxnIdSource`)
//!
//! # Architecture
//!
//! The notification module sits at the end of the pipeline:
//! ```text
//! classify.rs -> template.rs -> notify/ -> homeserver
//! ```

pub mod matrix;
pub mod payload;
pub mod traits;
pub mod txn;

pub use matrix::MatrixNotifier;
pub use payload::{Delivery, FORMAT_HTML, MSGTYPE_TEXT, MatrixMessage};
pub use traits::Notifier;
pub use txn::{FixedTxnId, RandomTxnId, TXN_ID_LEN, TxnIdSource};
