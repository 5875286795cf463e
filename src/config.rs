//! Client configuration

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use solana_sdk::pubkey::Pubkey;
use std::str::FromStr;

use crate::error::Error;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// RPC URL for the Solana cluster
    pub rpc_url: String,

    /// Signer wallet keypair path
    pub keypair_path: String,

    /// Whitelist program id (base58)
    pub whitelist_program: String,

    /// AMM program id (base58)
    pub amm_program: String,
}

impl Config {
    /// Load configuration from a TOML file.
    ///
    /// The file path comes from `POOL_CREATOR_CONFIG` (default
    /// `pool-creator.toml`). An `RPC_URL` environment variable always
    /// overrides the file value; with `RPC_URL` set, a missing file
    /// falls back to the devnet defaults so the client can run from
    /// the environment alone.
    pub fn load() -> Result<Self> {
        let config_path = std::env::var("POOL_CREATOR_CONFIG")
            .unwrap_or_else(|_| "pool-creator.toml".to_string());

        let mut config = match std::fs::read_to_string(&config_path) {
            Ok(config_str) => toml::from_str::<Config>(&config_str)
                .context("Failed to parse config TOML")?,
            Err(err) => {
                if std::env::var("RPC_URL").is_err() {
                    return Err(err)
                        .context(format!("Failed to read config file: {}", config_path));
                }
                log::warn!(
                    "Config file {} not readable, using devnet defaults",
                    config_path
                );
                Self::default_devnet()
            }
        };

        if let Ok(rpc_url) = std::env::var("RPC_URL") {
            config.rpc_url = rpc_url;
        }

        if config.rpc_url.is_empty() {
            anyhow::bail!("rpc_url is required");
        }

        Ok(config)
    }

    /// Create default configuration
    pub fn default_devnet() -> Self {
        Self {
            rpc_url: "https://api.devnet.solana.com".to_string(),
            keypair_path: "signer.json".to_string(),
            whitelist_program: "TL1ST2iRBzuGTqLn1KXnGdSnEow62BzPnGiqyRXhWtW".to_string(),
            amm_program: "TAMM6ub33ij1mbetoMyVBLeKY5iP41i4UPUJQGkhfsg".to_string(),
        }
    }

    /// Write default config to file
    pub fn write_default(path: &str) -> Result<()> {
        let config = Self::default_devnet();
        let toml_str = toml::to_string_pretty(&config).context("Failed to serialize config")?;

        std::fs::write(path, toml_str).context(format!("Failed to write config to {}", path))?;

        log::info!("Created default config at {}", path);
        Ok(())
    }

    /// Parse and validate the configured whitelist program id.
    pub fn whitelist_program(&self) -> std::result::Result<Pubkey, Error> {
        parse_program_id(&self.whitelist_program)
    }

    /// Parse and validate the configured AMM program id.
    pub fn amm_program(&self) -> std::result::Result<Pubkey, Error> {
        parse_program_id(&self.amm_program)
    }
}

fn parse_program_id(address: &str) -> std::result::Result<Pubkey, Error> {
    Pubkey::from_str(address).map_err(Error::AddressParse)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_creation() {
        let config = Config::default_devnet();
        assert_eq!(config.rpc_url, "https://api.devnet.solana.com");
        assert_eq!(config.keypair_path, "signer.json");
    }

    #[test]
    fn test_default_program_ids_parse() {
        let config = Config::default_devnet();
        assert!(config.whitelist_program().is_ok());
        assert!(config.amm_program().is_ok());
        assert_ne!(
            config.whitelist_program().unwrap(),
            config.amm_program().unwrap()
        );
    }

    #[test]
    fn test_bad_program_id_maps_to_address_parse() {
        let mut config = Config::default_devnet();
        config.amm_program = "not-a-base58-key!".to_string();

        assert!(matches!(
            config.amm_program(),
            Err(Error::AddressParse(_))
        ));
    }

    #[test]
    fn test_config_toml_round_trip() {
        let config = Config::default_devnet();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(parsed.rpc_url, config.rpc_url);
        assert_eq!(parsed.whitelist_program, config.whitelist_program);
    }
}
