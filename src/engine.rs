//! Dispatch pipeline for one monitoring event.
//!
//! Runs classification, rendering and delivery in sequence. A run ends in
//! exactly one of two states: nothing to send, or one message handed to the
//! notifier.

use std::sync::Arc;

use crate::classify::{MessageKind, classify};
use crate::context::NotificationContext;
use crate::error::NotifyError;
use crate::notify::{Delivery, Notifier};
use crate::template::{RenderedMessage, render};

/// Result of a dispatch run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The event was not notification-worthy. No request was made.
    NoMessage,
    /// One message was delivered.
    Delivered {
        kind: MessageKind,
        delivery: Delivery,
    },
}

/// Classify and render an event without sending anything.
pub fn prepare(ctx: &NotificationContext) -> Option<RenderedMessage> {
    classify(ctx).map(|kind| render(kind, ctx))
}

/// Runs events through the pipeline and delivers through one notifier.
pub struct Dispatcher {
    notifier: Arc<dyn Notifier>,
}

impl Dispatcher {
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self { notifier }
    }

    /// Process one event.
    ///
    /// Never touches the notifier when classification yields nothing.
    pub async fn dispatch(&self, ctx: &NotificationContext) -> Result<Outcome, NotifyError> {
        let Some(message) = prepare(ctx) else {
            tracing::info!(
                host_name = %ctx.host_name,
                service = %ctx.service_description,
                "No notification-worthy state change"
            );
            return Ok(Outcome::NoMessage);
        };

        tracing::info!(
            kind = %message.kind,
            host_name = %ctx.host_name,
            notifier_type = self.notifier.notifier_type(),
            "Dispatching notification"
        );

        let delivery = self.notifier.send(&message).await?;

        Ok(Outcome::Delivered {
            kind: message.kind,
            delivery,
        })
    }
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("notifier", &self.notifier)
            .finish()
    }
}
