//! Transaction id generation for idempotent sends.
//!
//! The homeserver deduplicates requests by transaction id, so every send
//! needs a fresh value. The source is a trait so tests can pin the id and
//! assert the exact request path.

use rand::Rng;
use rand::distributions::Alphanumeric;

/// Length of generated transaction ids.
pub const TXN_ID_LEN: usize = 16;

/// Produces one transaction id per send.
pub trait TxnIdSource: Send + Sync {
    fn next_txn_id(&self) -> String;
}

/// Random ASCII alphanumeric ids of [`TXN_ID_LEN`] characters from the
/// thread-local RNG.
#[derive(Debug, Clone, Default)]
pub struct RandomTxnId;

impl RandomTxnId {
    pub fn new() -> Self {
        Self
    }
}

impl TxnIdSource for RandomTxnId {
    fn next_txn_id(&self) -> String {
        rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(TXN_ID_LEN)
            .map(char::from)
            .collect()
    }
}

/// Always returns the same id. For tests.
#[derive(Debug, Clone)]
pub struct FixedTxnId(pub String);

impl TxnIdSource for FixedTxnId {
    fn next_txn_id(&self) -> String {
        self.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn random_txn_id_is_alphanumeric_of_expected_length() {
        let id = RandomTxnId::new().next_txn_id();
        assert_eq!(id.len(), TXN_ID_LEN);
        assert!(id.chars().all(|c| c.is_ascii_alphanumeric()), "got {id}");
    }

    #[test]
    fn random_txn_id_is_fresh_per_call() {
        let source = RandomTxnId::new();
        let ids: HashSet<String> = (0..100).map(|_| source.next_txn_id()).collect();
        assert_eq!(ids.len(), 100);
    }

    #[test]
    fn fixed_txn_id_repeats() {
        let source = FixedTxnId("TXN0000000000001".to_string());
        assert_eq!(source.next_txn_id(), "TXN0000000000001");
        assert_eq!(source.next_txn_id(), "TXN0000000000001");
    }
}
