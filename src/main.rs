//! Whitelist + pool bootstrap client
//!
//! Builds a two-instruction transaction that creates a whitelist and an
//! AMM pool gated by it, signs it, and submits it as one atomic unit.

mod config;
mod error;
mod identifier;
mod pda;
mod pool;
mod submit;
mod tx;
mod whitelist;

use anyhow::{Context, Result};
use config::Config;
use identifier::Identifier;
use pool::{build_create_pool_instruction, CreatePoolParams, CurveType, PoolConfig, PoolType};
use solana_sdk::signature::{Keypair, Signer};
use submit::Submitter;
use whitelist::{build_create_whitelist_instruction, Condition, Mode, WhitelistConfig};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::load()?;
    log::info!("Using RPC endpoint: {}", config.rpc_url);

    let whitelist_program = config.whitelist_program()?;
    let amm_program = config.amm_program()?;

    let signer = load_keypair(&config.keypair_path)?;
    log::info!("Signer wallet: {}", signer.pubkey());

    let submitter = Submitter::new(config.rpc_url.clone());

    // Fresh namespace authority for the new whitelist; it co-signs the
    // transaction alongside the wallet.
    let namespace = Keypair::new();
    let uuid = Identifier::random();

    let conditions = vec![Condition {
        mode: Mode::Fvc,
        value: signer.pubkey(),
    }];

    let create_whitelist_ix = build_create_whitelist_instruction(
        &whitelist_program,
        &WhitelistConfig {
            payer: signer.pubkey(),
            update_authority: signer.pubkey(),
            namespace: namespace.pubkey(),
            uuid,
            freeze_authority: signer.pubkey(),
            conditions,
        },
    )?;

    let (whitelist, _) = pda::derive_whitelist_address(&whitelist_program, &namespace.pubkey(), &uuid)?;
    log::info!("Whitelist address: {}", whitelist);

    let pool_config = PoolConfig {
        // Token == bid side only, Nft == list side only, Trade == double sided
        pool_type: PoolType::Token,
        // Linear: delta is a constant lamport step per taken bid/sale.
        // Exponential: delta is a step in bps of the current price.
        curve_type: CurveType::Linear,
        // 1 SOL == 1_000_000_000 lamports
        starting_price: 1_000_000_000,
        delta: 500_000_000,
        // Trade pools only: whether maker profits compound into the vault
        mm_compound_fees: false,
        // Trade pools only: buy/sell spread in bps
        mm_fee_bps: None,
    };

    let create_pool = build_create_pool_instruction(
        &amm_program,
        &CreatePoolParams {
            owner: signer.pubkey(),
            whitelist,
            config: pool_config,
            pool_id: Some(uuid),
            maker_broker: None,
            max_taker_sell_count: None,
        },
    )?;
    log::info!("Pool address: {}", create_pool.pool);

    let blockhash = submitter.latest_blockhash().await?;

    // Whitelist creation must precede pool creation in the same
    // transaction; the pool instruction requires the whitelist account.
    let message = tx::assemble(
        &signer.pubkey(),
        blockhash,
        &[create_whitelist_ix, create_pool.instruction],
    );
    let transaction = tx::sign(message, &[&signer, &namespace])?;

    let signature = submitter.submit(&transaction).await?;
    log::info!("Transaction submitted: {}", signature);
    println!("{}", signature);

    Ok(())
}

/// Load the signer keypair from file.
///
/// Accepts the JSON byte-array format, a base58-encoded secret key, or
/// raw 64 bytes.
fn load_keypair(path: &str) -> Result<Keypair> {
    let expanded_path = shellexpand::tilde(path);
    let bytes = std::fs::read(expanded_path.as_ref())
        .context(format!("Failed to read keypair from {}", path))?;

    let keypair = if bytes.first() == Some(&b'[') {
        // JSON format
        let json_data: Vec<u8> =
            serde_json::from_slice(&bytes).context("Failed to parse keypair JSON")?;
        Keypair::try_from(&json_data[..]).context("Failed to create keypair from bytes")?
    } else if bytes.len() == 64 {
        // Binary format
        Keypair::try_from(&bytes[..]).context("Failed to create keypair from bytes")?
    } else {
        // Base58-encoded string
        let decoded = bs58::decode(String::from_utf8_lossy(&bytes).trim())
            .into_vec()
            .context("Failed to decode base58 keypair")?;
        Keypair::try_from(&decoded[..]).context("Failed to create keypair from bytes")?
    };

    Ok(keypair)
}
