//! Monitoring event context for a single invocation.

/// Everything the dispatcher told us about the event.
///
/// Built once by [`crate::config::load_context`] and never mutated.
/// Every field is plain text and an empty string is a meaningful value
/// (the dispatcher had nothing to substitute). Notification counters are
/// kept as text on purpose: classification only compares them to `"0"`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationContext {
    /// Short human-readable event time.
    pub timestamp: String,

    pub host_name: String,
    pub host_address: String,
    pub host_state: String,
    pub host_state_previous: String,
    pub host_notification_count: String,
    /// Free-text check output for the host.
    pub host_output: String,

    /// Service name, or the unresolved `$SERVICEDESC$` placeholder for host events.
    pub service_description: String,
    pub service_state: String,
    pub service_state_previous: String,
    pub service_notification_count: String,
    /// Free-text check output for the service.
    pub service_output: String,
}
