//! Create-whitelist instruction building

use solana_sdk::instruction::{AccountMeta, Instruction};
use solana_sdk::pubkey::Pubkey;
use solana_sdk::system_program;

use crate::error::{Error, Result};
use crate::identifier::Identifier;
use crate::pda::derive_whitelist_address;

/// Instruction discriminator for create_whitelist_v2
const CREATE_WHITELIST_V2_DISCRIMINATOR: [u8; 8] = [31, 207, 213, 77, 105, 13, 127, 98];

/// Membership condition mode, as understood by the whitelist program
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Mode {
    MerkleTree = 0,
    Voc = 1,
    Fvc = 2,
}

/// One membership condition: mode + subject address.
///
/// Condition semantics live in the whitelist program; here only the
/// byte-exact encoding and ordering matter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Condition {
    pub mode: Mode,
    pub value: Pubkey,
}

/// Typed arguments for whitelist creation
#[derive(Debug, Clone)]
pub struct WhitelistConfig {
    pub payer: Pubkey,
    pub update_authority: Pubkey,
    pub namespace: Pubkey,
    pub uuid: Identifier,
    pub freeze_authority: Pubkey,
    pub conditions: Vec<Condition>,
}

/// Build the create-whitelist instruction.
///
/// payer, update_authority and namespace are flagged as signers; their
/// authority is asserted when the transaction is signed, not here.
/// freeze_authority is a plain account reference.
pub fn build_create_whitelist_instruction(
    program_id: &Pubkey,
    config: &WhitelistConfig,
) -> Result<Instruction> {
    if config.conditions.is_empty() {
        return Err(Error::Encoding(
            "whitelist requires at least one condition".to_string(),
        ));
    }

    let (whitelist, _bump) =
        derive_whitelist_address(program_id, &config.namespace, &config.uuid)?;

    // discriminator + uuid + length-prefixed condition list
    let mut data = Vec::with_capacity(8 + 32 + 4 + config.conditions.len() * 33);
    data.extend_from_slice(&CREATE_WHITELIST_V2_DISCRIMINATOR);
    data.extend_from_slice(config.uuid.as_bytes());
    data.extend_from_slice(&(config.conditions.len() as u32).to_le_bytes());
    for condition in &config.conditions {
        data.push(condition.mode as u8);
        data.extend_from_slice(condition.value.as_ref());
    }

    let accounts = vec![
        AccountMeta::new(config.payer, true),
        AccountMeta::new_readonly(config.update_authority, true),
        AccountMeta::new_readonly(config.namespace, true),
        AccountMeta::new(whitelist, false),
        AccountMeta::new_readonly(config.freeze_authority, false),
        AccountMeta::new_readonly(system_program::id(), false),
    ];

    Ok(Instruction {
        program_id: *program_id,
        accounts,
        data,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_config() -> WhitelistConfig {
        let authority = Pubkey::new_unique();
        WhitelistConfig {
            payer: authority,
            update_authority: authority,
            namespace: Pubkey::new_unique(),
            uuid: Identifier::from_name("test-whitelist"),
            freeze_authority: authority,
            conditions: vec![Condition {
                mode: Mode::Fvc,
                value: authority,
            }],
        }
    }

    #[test]
    fn test_data_layout() {
        let program_id = Pubkey::new_unique();
        let config = make_config();

        let ix = build_create_whitelist_instruction(&program_id, &config).unwrap();

        assert_eq!(ix.program_id, program_id);
        assert_eq!(&ix.data[..8], &CREATE_WHITELIST_V2_DISCRIMINATOR);
        assert_eq!(&ix.data[8..40], config.uuid.as_bytes());
        // one condition, u32 LE length prefix
        assert_eq!(&ix.data[40..44], &1u32.to_le_bytes());
        assert_eq!(ix.data[44], Mode::Fvc as u8);
        assert_eq!(&ix.data[45..77], config.conditions[0].value.as_ref());
        assert_eq!(ix.data.len(), 77);
    }

    #[test]
    fn test_condition_order_preserved() {
        let program_id = Pubkey::new_unique();
        let mut config = make_config();
        let first = Pubkey::new_unique();
        let second = Pubkey::new_unique();
        config.conditions = vec![
            Condition { mode: Mode::Voc, value: first },
            Condition { mode: Mode::Fvc, value: second },
        ];

        let ix = build_create_whitelist_instruction(&program_id, &config).unwrap();

        assert_eq!(&ix.data[40..44], &2u32.to_le_bytes());
        assert_eq!(ix.data[44], Mode::Voc as u8);
        assert_eq!(&ix.data[45..77], first.as_ref());
        assert_eq!(ix.data[77], Mode::Fvc as u8);
        assert_eq!(&ix.data[78..110], second.as_ref());
    }

    #[test]
    fn test_signer_flags() {
        let program_id = Pubkey::new_unique();
        let config = make_config();

        let ix = build_create_whitelist_instruction(&program_id, &config).unwrap();

        // payer, update_authority, namespace sign; the rest do not
        assert!(ix.accounts[0].is_signer);
        assert!(ix.accounts[0].is_writable);
        assert!(ix.accounts[1].is_signer);
        assert!(ix.accounts[2].is_signer);
        assert!(!ix.accounts[3].is_signer);
        assert!(ix.accounts[3].is_writable);
        assert!(!ix.accounts[4].is_signer);
        assert_eq!(ix.accounts[4].pubkey, config.freeze_authority);
        assert_eq!(ix.accounts[5].pubkey, system_program::id());
    }

    #[test]
    fn test_whitelist_account_matches_derivation() {
        let program_id = Pubkey::new_unique();
        let config = make_config();

        let ix = build_create_whitelist_instruction(&program_id, &config).unwrap();
        let (expected, _) =
            derive_whitelist_address(&program_id, &config.namespace, &config.uuid).unwrap();

        assert_eq!(ix.accounts[3].pubkey, expected);
    }

    #[test]
    fn test_empty_conditions_rejected() {
        let program_id = Pubkey::new_unique();
        let mut config = make_config();
        config.conditions.clear();

        let result = build_create_whitelist_instruction(&program_id, &config);
        assert!(matches!(result, Err(Error::Encoding(_))));
    }
}
