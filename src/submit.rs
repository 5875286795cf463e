//! Fire-and-forget transaction submission

use solana_client::client_error::ClientError;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::hash::Hash;
use solana_sdk::signature::Signature;
use solana_sdk::transaction::Transaction;

use crate::error::{Error, Result};

/// Thin wrapper over the RPC client, constructed once from validated
/// configuration at startup.
pub struct Submitter {
    client: RpcClient,
}

impl Submitter {
    pub fn new(rpc_url: String) -> Self {
        Self {
            client: RpcClient::new(rpc_url),
        }
    }

    /// Fetch the freshness token the transaction will be bound to.
    pub async fn latest_blockhash(&self) -> Result<Hash> {
        self.client
            .get_latest_blockhash()
            .await
            .map_err(Error::Submission)
    }

    /// Send the signed transaction and return its signature as soon as
    /// the node accepts it.
    ///
    /// Deliberately does not wait for confirmation or finality.
    /// Resubmission after a blockhash expiry is the caller's decision.
    pub async fn submit(&self, transaction: &Transaction) -> Result<Signature> {
        self.client
            .send_transaction(transaction)
            .await
            .map_err(classify)
    }
}

/// Split node-reported validation failures from transport failures.
///
/// An error carrying a `TransactionError` means the node saw and
/// rejected the transaction (expired blockhash, failed simulation);
/// anything else never reached validation.
fn classify(error: ClientError) -> Error {
    match error.get_transaction_error() {
        Some(tx_error) => Error::TransactionRejected(tx_error),
        None => Error::Submission(error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use solana_client::client_error::ClientErrorKind;
    use solana_sdk::transaction::TransactionError;

    #[test]
    fn test_expired_blockhash_classified_as_rejection() {
        let error = ClientError {
            request: None,
            kind: ClientErrorKind::TransactionError(TransactionError::BlockhashNotFound),
        };

        assert!(matches!(
            classify(error),
            Error::TransactionRejected(TransactionError::BlockhashNotFound)
        ));
    }

    #[test]
    fn test_transport_failure_classified_as_submission_error() {
        let error = ClientError {
            request: None,
            kind: ClientErrorKind::Io(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                "connection refused",
            )),
        };

        assert!(matches!(classify(error), Error::Submission(_)));
    }
}
