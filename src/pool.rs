//! Create-pool instruction building

use solana_sdk::instruction::{AccountMeta, Instruction};
use solana_sdk::pubkey::Pubkey;
use solana_sdk::system_program;

use crate::error::Result;
use crate::identifier::Identifier;
use crate::pda::derive_pool_address;

/// Instruction discriminator for create_pool
const CREATE_POOL_DISCRIMINATOR: [u8; 8] = [233, 146, 209, 142, 207, 104, 64, 188];

/// Which side(s) of the market the pool takes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum PoolType {
    /// Bid side only
    Token = 0,
    /// List side only
    Nft = 1,
    /// Double sided; relists bought NFTs and rebids after sales
    Trade = 2,
}

/// Price curve the pool follows after each taken bid/sale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum CurveType {
    /// delta is a constant lamport step
    Linear = 0,
    /// delta is a step in basis points of the current price
    Exponential = 1,
}

/// Typed pool configuration.
///
/// mm_fee_bps and mm_compound_fees only take effect on-chain for Trade
/// pools but are passed through unmodified whenever set.
#[derive(Debug, Clone)]
pub struct PoolConfig {
    pub pool_type: PoolType,
    pub curve_type: CurveType,
    /// Starting price in lamports
    pub starting_price: u64,
    pub delta: u64,
    pub mm_compound_fees: bool,
    pub mm_fee_bps: Option<u16>,
}

impl PoolConfig {
    fn encode_into(&self, data: &mut Vec<u8>) {
        data.push(self.pool_type as u8);
        data.push(self.curve_type as u8);
        data.extend_from_slice(&self.starting_price.to_le_bytes());
        data.extend_from_slice(&self.delta.to_le_bytes());
        data.push(self.mm_compound_fees as u8);
        // an absent fee is a bare tag, never a zero value
        match self.mm_fee_bps {
            Some(bps) => {
                data.push(1);
                data.extend_from_slice(&bps.to_le_bytes());
            }
            None => data.push(0),
        }
    }
}

/// Arguments for pool creation.
///
/// Absent optional fields are omitted from the encoding entirely:
/// maker_broker from the account list, max_taker_sell_count from the
/// trailing instruction data.
#[derive(Debug, Clone)]
pub struct CreatePoolParams {
    pub owner: Pubkey,
    pub whitelist: Pubkey,
    pub config: PoolConfig,
    pub pool_id: Option<Identifier>,
    pub maker_broker: Option<Pubkey>,
    pub max_taker_sell_count: Option<u32>,
}

/// Built instruction plus the derived address and identifier, returned
/// so callers can reuse them for signing or further derivations.
#[derive(Debug)]
pub struct CreatePool {
    pub instruction: Instruction,
    pub pool: Pubkey,
    pub pool_id: Identifier,
}

/// Build the create-pool instruction, generating a fresh random pool id
/// when none is supplied.
pub fn build_create_pool_instruction(
    program_id: &Pubkey,
    params: &CreatePoolParams,
) -> Result<CreatePool> {
    let pool_id = params.pool_id.unwrap_or_else(Identifier::random);
    let (pool, _bump) = derive_pool_address(program_id, &params.owner, &pool_id)?;

    let mut data = Vec::with_capacity(8 + 32 + 25 + 4);
    data.extend_from_slice(&CREATE_POOL_DISCRIMINATOR);
    data.extend_from_slice(pool_id.as_bytes());
    params.config.encode_into(&mut data);
    if let Some(count) = params.max_taker_sell_count {
        data.extend_from_slice(&count.to_le_bytes());
    }

    let mut accounts = vec![
        AccountMeta::new(params.owner, true),
        AccountMeta::new(pool, false),
        AccountMeta::new_readonly(params.whitelist, false),
    ];
    if let Some(maker_broker) = params.maker_broker {
        accounts.push(AccountMeta::new_readonly(maker_broker, false));
    }
    accounts.push(AccountMeta::new_readonly(system_program::id(), false));

    Ok(CreatePool {
        instruction: Instruction {
            program_id: *program_id,
            accounts,
            data,
        },
        pool,
        pool_id,
    })
}
