//! Matrix notifier implementation.
//!
//! Implements the `Notifier` trait for sending messages to a Matrix room
//! through the client-server API (`PUT .../send/m.room.message/{txnId}`).

use crate::config::{MatrixConfig, SecretString};
use crate::error::NotifyError;
use crate::notify::payload::SendResponse;
use crate::notify::{Delivery, MatrixMessage, Notifier, RandomTxnId, TxnIdSource};
use crate::template::RenderedMessage;
use async_trait::async_trait;
use reqwest::Url;
use tracing::Instrument;

/// Matrix notifier implementation.
///
/// Sends one `m.text` event with an HTML `formatted_body` per call.
///
/// # Failure Policy
///
/// - **2xx**: Success, `event_id` from the response is surfaced if present
/// - **Any other status**: `NotifyError::HttpStatus` with the response body
/// - **Network errors / timeout**: `NotifyError::RequestFailed`
///
/// Nothing is retried. A retry by the dispatcher gets a new transaction id.
///
/// # Example
///
/// ```ignore
/// let notifier = MatrixNotifier::new(&config, client);
/// let delivery = notifier.send(&rendered).await?;
/// ```
pub struct MatrixNotifier {
    /// HTTP client for homeserver requests.
    client: reqwest::Client,
    /// Homeserver base URL.
    homeserver: Url,
    access_token: SecretString,
    room_id: String,
    txn_ids: Box<dyn TxnIdSource>,
}

impl MatrixNotifier {
    /// Create a notifier that generates random transaction ids.
    pub fn new(config: &MatrixConfig, client: reqwest::Client) -> Self {
        Self {
            client,
            homeserver: config.homeserver().clone(),
            access_token: config.access_token().clone(),
            room_id: config.room_id().to_string(),
            txn_ids: Box::new(RandomTxnId::new()),
        }
    }

    /// Replace the transaction id source.
    pub fn with_txn_source(mut self, source: impl TxnIdSource + 'static) -> Self {
        self.txn_ids = Box::new(source);
        self
    }

    /// Next transaction id from the configured source.
    pub fn next_txn_id(&self) -> String {
        self.txn_ids.next_txn_id()
    }

    /// Send endpoint for `txn_id`.
    ///
    /// Segments are appended to any base path of the homeserver URL and
    /// percent-encoded where required (`#` in room aliases, `/`).
    pub fn send_url(&self, txn_id: &str) -> Url {
        let mut url = self.homeserver.clone();
        // MatrixConfig::new rejects cannot-be-a-base URLs.
        match url.path_segments_mut() {
            Ok(mut segments) => {
                segments.pop_if_empty().extend([
                    "_matrix",
                    "client",
                    "v3",
                    "rooms",
                    self.room_id.as_str(),
                    "send",
                    "m.room.message",
                    txn_id,
                ]);
            }
            Err(()) => {
                tracing::error!(homeserver = %self.homeserver, "Homeserver URL cannot be a base");
            }
        }
        url
    }

    /// One PUT of `message` under `txn_id`.
    async fn put_message(
        &self,
        txn_id: &str,
        message: &RenderedMessage,
    ) -> Result<Delivery, NotifyError> {
        let url = self.send_url(txn_id);
        let payload = MatrixMessage::from_rendered(message);

        tracing::debug!(url = %url, "PUT message event");

        let response = self
            .client
            .put(url)
            .bearer_auth(self.access_token.expose())
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Failed to reach Matrix homeserver");
                NotifyError::RequestFailed(e.to_string())
            })?;

        let status = response.status();
        let text = match response.text().await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(status = %status, error = %e, "Failed to read response body");
                format!("<unreadable body: {e}>")
            }
        };

        if !status.is_success() {
            tracing::error!(status = %status, body = %text, "Matrix homeserver rejected message");
            return Err(NotifyError::HttpStatus {
                status: status.as_u16(),
                body: text,
            });
        }

        let event_id = serde_json::from_str::<SendResponse>(&text)
            .ok()
            .and_then(|r| r.event_id);

        tracing::info!(
            status = %status,
            event_id = event_id.as_deref().unwrap_or(""),
            "Message sent successfully"
        );

        Ok(Delivery {
            status: status.as_u16(),
            txn_id: txn_id.to_string(),
            event_id,
        })
    }
}

#[async_trait]
impl Notifier for MatrixNotifier {
    fn notifier_type(&self) -> &str {
        "matrix"
    }

    async fn send(&self, message: &RenderedMessage) -> Result<Delivery, NotifyError> {
        let txn_id = self.next_txn_id();
        let span = tracing::info_span!(
            "send_matrix",
            kind = %message.kind,
            room_id = %self.room_id,
            txn_id = %txn_id
        );

        self.put_message(&txn_id, message).instrument(span).await
    }
}

impl std::fmt::Debug for MatrixNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MatrixNotifier")
            .field("homeserver", &self.homeserver.as_str())
            .field("room_id", &self.room_id)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::FixedTxnId;

    fn make_notifier(homeserver: &str, room_id: &str) -> MatrixNotifier {
        let config = MatrixConfig::new(
            homeserver,
            SecretString::new("syt_secret".to_string()),
            room_id.to_string(),
        )
        .unwrap();
        MatrixNotifier::new(&config, reqwest::Client::new())
    }

    #[test]
    fn send_url_for_plain_homeserver() {
        let notifier = make_notifier("https://matrix.example.com", "!abc:example.com");
        assert_eq!(
            notifier.send_url("TXN1").as_str(),
            "https://matrix.example.com/_matrix/client/v3/rooms/!abc:example.com/send/m.room.message/TXN1"
        );
    }

    #[test]
    fn send_url_does_not_double_trailing_slash() {
        let notifier = make_notifier("https://matrix.example.com/", "!abc:example.com");
        assert_eq!(
            notifier.send_url("TXN1").path(),
            "/_matrix/client/v3/rooms/!abc:example.com/send/m.room.message/TXN1"
        );
    }

    #[test]
    fn send_url_keeps_base_path() {
        let notifier = make_notifier("https://example.com/matrix/", "!abc:example.com");
        assert_eq!(
            notifier.send_url("TXN1").path(),
            "/matrix/_matrix/client/v3/rooms/!abc:example.com/send/m.room.message/TXN1"
        );
    }

    #[test]
    fn send_url_encodes_room_alias() {
        let notifier = make_notifier("https://matrix.example.com", "#ops:example.com");
        assert_eq!(
            notifier.send_url("TXN1").path(),
            "/_matrix/client/v3/rooms/%23ops:example.com/send/m.room.message/TXN1"
        );
    }

    #[test]
    fn fixed_txn_source_is_used() {
        let notifier = make_notifier("https://matrix.example.com", "!abc:example.com")
            .with_txn_source(FixedTxnId("FIXEDTXN00000001".to_string()));
        assert_eq!(notifier.next_txn_id(), "FIXEDTXN00000001");
    }

    #[test]
    fn default_txn_source_is_random() {
        let notifier = make_notifier("https://matrix.example.com", "!abc:example.com");
        assert_ne!(notifier.next_txn_id(), notifier.next_txn_id());
    }

    #[test]
    fn matrix_notifier_debug_hides_token() {
        let notifier = make_notifier("https://matrix.example.com", "!abc:example.com");
        let debug = format!("{:?}", notifier);
        assert!(debug.contains("MatrixNotifier"));
        assert!(debug.contains("!abc:example.com"));
        assert!(!debug.contains("syt_secret"));
    }

    #[tokio::test]
    async fn notifier_trait_is_object_safe() {
        let notifier: Box<dyn Notifier> =
            Box::new(make_notifier("https://matrix.example.com", "!abc:example.com"));
        assert_eq!(notifier.notifier_type(), "matrix");
    }
}
