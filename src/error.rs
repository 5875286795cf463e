//! Error taxonomy for the pool creation pipeline

use solana_client::client_error::ClientError;
use solana_sdk::pubkey::ParsePubkeyError;
use solana_sdk::transaction::TransactionError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Pipeline errors, surfaced unmodified to the top-level caller.
///
/// There is no local recovery or retry anywhere in the pipeline; a
/// rejected transaction is the caller's cue to resubmit with a fresh
/// blockhash.
#[derive(Debug, Error)]
pub enum Error {
    /// PDA seed material rejected before derivation
    #[error("invalid PDA seed: {0}")]
    InvalidSeed(String),

    /// Missing or structurally invalid instruction configuration
    #[error("instruction encoding failed: {0}")]
    Encoding(String),

    /// A public-key string failed to parse
    #[error("invalid address: {0}")]
    AddressParse(#[from] ParsePubkeyError),

    /// Transport-level failure talking to the RPC node
    #[error("transaction submission failed: {0}")]
    Submission(#[source] ClientError),

    /// The node rejected the transaction during simulation or validation
    #[error("transaction rejected by cluster: {0}")]
    TransactionRejected(TransactionError),
}
