//! Program-derived address computation

use solana_sdk::pubkey::Pubkey;

use crate::error::{Error, Result};
use crate::identifier::Identifier;

/// Maximum length of a single PDA seed, per runtime rules
pub const MAX_SEED_LEN: usize = 32;

const WHITELIST_SEED: &[u8] = b"whitelist";
const POOL_SEED: &[u8] = b"pool";

/// Derive the whitelist account address from namespace + uuid.
pub fn derive_whitelist_address(
    program_id: &Pubkey,
    namespace: &Pubkey,
    uuid: &Identifier,
) -> Result<(Pubkey, u8)> {
    find_address(
        program_id,
        &[WHITELIST_SEED, namespace.as_ref(), uuid.as_bytes()],
    )
}

/// Derive the pool account address from owner + pool id.
pub fn derive_pool_address(
    program_id: &Pubkey,
    owner: &Pubkey,
    pool_id: &Identifier,
) -> Result<(Pubkey, u8)> {
    find_address(program_id, &[POOL_SEED, owner.as_ref(), pool_id.as_bytes()])
}

/// Off-curve derivation. Pure: same inputs always yield the same
/// address and bump, no network access.
fn find_address(program_id: &Pubkey, seeds: &[&[u8]]) -> Result<(Pubkey, u8)> {
    if seeds.is_empty() {
        return Err(Error::InvalidSeed("empty seed set".to_string()));
    }
    for seed in seeds {
        if seed.len() > MAX_SEED_LEN {
            return Err(Error::InvalidSeed(format!(
                "seed length {} exceeds maximum {}",
                seed.len(),
                MAX_SEED_LEN
            )));
        }
    }

    Ok(Pubkey::find_program_address(seeds, program_id))
}
