//! Message rendering for Matrix notifications.
//!
//! Turns a classified event into the HTML body sent as both `body` and
//! `formatted_body`:
//!
//! ```text
//! classify.rs → template.rs → notify/
//! ```
//!
//! # Escaping
//!
//! Interpolated values are inserted verbatim. Check output containing `<`
//! or `&` reaches the room as markup. Hardening this changes what clients
//! display, so it is left as-is for now.

use crate::classify::MessageKind;
use crate::context::NotificationContext;

/// Rendered message ready for notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedMessage {
    /// Which template produced the body.
    pub kind: MessageKind,
    /// HTML body.
    pub body: String,
}

/// Render the body for `kind`. Pure and deterministic.
pub fn render(kind: MessageKind, ctx: &NotificationContext) -> RenderedMessage {
    let body = match kind {
        MessageKind::Host => format!(
            "Host <b>{}</b> ({}) | TS: {} | STATE: <b>{}</b><br>{}<br>",
            ctx.host_name, ctx.host_address, ctx.timestamp, ctx.host_state, ctx.host_output
        ),
        MessageKind::Service => format!(
            "Service <b>{}</b> at <b>{}</b> ({}) | TS: {} | STATE: <b>{}</b><br>{}<br>",
            ctx.service_description,
            ctx.host_name,
            ctx.host_address,
            ctx.timestamp,
            ctx.service_state,
            ctx.service_output
        ),
    };

    RenderedMessage { kind, body }
}
