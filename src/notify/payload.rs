//! Matrix wire types for `m.room.message` events.

use crate::template::RenderedMessage;
use serde::{Deserialize, Serialize};

/// Message type of a plain text event.
pub const MSGTYPE_TEXT: &str = "m.text";

/// Format marker for HTML `formatted_body`.
pub const FORMAT_HTML: &str = "org.matrix.custom.html";

/// JSON body of the send-message request.
///
/// The same HTML string goes into `body` and `formatted_body`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatrixMessage {
    pub msgtype: String,
    pub body: String,
    pub format: String,
    pub formatted_body: String,
}

impl MatrixMessage {
    pub fn from_rendered(message: &RenderedMessage) -> Self {
        Self {
            msgtype: MSGTYPE_TEXT.to_string(),
            body: message.body.clone(),
            format: FORMAT_HTML.to_string(),
            formatted_body: message.body.clone(),
        }
    }
}

/// Successful send response. Only `event_id` is of interest.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct SendResponse {
    pub event_id: Option<String>,
}

/// Result of a successful delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivery {
    /// HTTP status code returned by the homeserver.
    pub status: u16,
    /// Transaction id used for the request.
    pub txn_id: String,
    /// Event id assigned by the homeserver, when it returned one.
    pub event_id: Option<String>,
}
