//! Notifier trait definition.

use async_trait::async_trait;

use super::Delivery;
use crate::error::NotifyError;
use crate::template::RenderedMessage;

/// Abstract notifier trait for delivering a rendered message.
///
/// Implementations must be `Send + Sync`. Delivery is a single attempt;
/// failures are reported, never retried.
///
/// # Example
///
/// ```ignore
/// use matrix_notify::notify::{Delivery, Notifier};
///
/// struct StdoutNotifier;
///
/// #[async_trait]
/// impl Notifier for StdoutNotifier {
///     fn notifier_type(&self) -> &str { "stdout" }
///     async fn send(&self, message: &RenderedMessage) -> Result<Delivery, NotifyError> {
///         println!("{}", message.body);
///         Ok(Delivery { status: 200, txn_id: String::new(), event_id: None })
///     }
/// }
/// ```
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Type of the notifier (e.g., "matrix").
    fn notifier_type(&self) -> &str;

    /// Send a message.
    ///
    /// # Returns
    ///
    /// * `Ok(Delivery)` - The endpoint accepted the message
    /// * `Err(NotifyError)` - Non-2xx status or transport failure
    async fn send(&self, message: &RenderedMessage) -> Result<Delivery, NotifyError>;
}

impl std::fmt::Debug for dyn Notifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Notifier")
            .field("type", &self.notifier_type())
            .finish()
    }
}
