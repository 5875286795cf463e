//! Transaction assembly and signing

use solana_sdk::hash::Hash;
use solana_sdk::instruction::Instruction;
use solana_sdk::message::Message;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Keypair;
use solana_sdk::transaction::Transaction;

use crate::error::{Error, Result};

/// Compile instructions into a single message.
///
/// Instruction order is preserved exactly as given. Ordering matters:
/// pool creation is only valid on-chain once the whitelist exists, so
/// whitelist creation must come first in the slice.
pub fn assemble(payer: &Pubkey, recent_blockhash: Hash, instructions: &[Instruction]) -> Message {
    Message::new_with_blockhash(instructions, Some(payer), &recent_blockhash)
}

/// Sign the message with the supplied keypairs.
///
/// Signing is order-independent and deduplicated per unique signer.
/// Every supplied keypair must be a required signer of the message; a
/// required signer that is missing here is only detected when the
/// cluster rejects the under-signed transaction.
pub fn sign(message: Message, signers: &[&Keypair]) -> Result<Transaction> {
    let recent_blockhash = message.recent_blockhash;
    let mut transaction = Transaction::new_unsigned(message);
    transaction
        .try_partial_sign(signers, recent_blockhash)
        .map_err(|err| Error::Encoding(format!("signer not required by transaction: {err}")))?;
    Ok(transaction)
}
