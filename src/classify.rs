//! Decides whether an event is worth a message, and which one.
//!
//! The host check runs first and tentatively picks [`MessageKind::Host`];
//! the service check always runs afterwards and, when it holds, replaces
//! that choice with [`MessageKind::Service`]. At most one message is sent
//! per invocation.

use crate::context::NotificationContext;

/// Placeholder the dispatcher leaves in `NOTIFY_SERVICEDESC` for host events.
pub const UNRESOLVED_SERVICE_PLACEHOLDER: &str = "$SERVICEDESC$";

/// Notification counter value meaning "first notification for this state".
const ZERO_COUNT: &str = "0";

/// Which message template applies to an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Host,
    Service,
}

impl MessageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageKind::Host => "host",
            MessageKind::Service => "service",
        }
    }
}

impl std::fmt::Display for MessageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// State differs from the previous one, or the counter is not the zero string.
fn state_changed(state: &str, previous: &str, count: &str) -> bool {
    state != previous || count != ZERO_COUNT
}

/// True when the event carries a real service name.
pub fn has_service(ctx: &NotificationContext) -> bool {
    !matches!(
        ctx.service_description.as_str(),
        "" | UNRESOLVED_SERVICE_PLACEHOLDER
    )
}

/// Classify an event, returning `None` when nothing should be sent.
pub fn classify(ctx: &NotificationContext) -> Option<MessageKind> {
    let mut kind = None;

    if state_changed(
        &ctx.host_state,
        &ctx.host_state_previous,
        &ctx.host_notification_count,
    ) {
        kind = Some(MessageKind::Host);
    }

    if state_changed(
        &ctx.service_state,
        &ctx.service_state_previous,
        &ctx.service_notification_count,
    ) && has_service(ctx)
    {
        kind = Some(MessageKind::Service);
    }

    kind
}
