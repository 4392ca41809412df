use std::{fs, path::Path};

use anyhow::{Context as _, bail};
use ethwire_transaction::Transaction;

/// Validation applied to decoded transactions.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Rejects transactions bound to a different chain. Legacy transactions
    /// without a chain id are accepted.
    pub expected_chain_id: Option<u64>,
    /// Rejects unsigned transactions when decoding.
    pub require_signature: bool,
}

impl Config {
    pub fn load(file_path: &Path) -> anyhow::Result<Self> {
        let file_contents = fs::read_to_string(file_path)
            .with_context(|| format!("Failed to read config file {}", file_path.display()))?;

        let config: Config = toml::from_str(&file_contents)
            .with_context(|| format!("Invalid config file {}", file_path.display()))?;
        log::debug!("ethwire config: {config:?}");

        Ok(config)
    }

    /// Checks that the transaction belongs to the expected chain.
    pub fn check_chain_id(&self, transaction: &Transaction) -> anyhow::Result<()> {
        if let Some(expected) = self.expected_chain_id {
            let actual = transaction.chain_id();
            if actual.is_some_and(|actual| actual != expected) {
                bail!(
                    "Transaction is bound to chain {}, expected chain {expected}",
                    actual.unwrap_or_default()
                );
            }
        }

        Ok(())
    }

    /// Checks that the transaction carries a signature, if required.
    pub fn check_signature(&self, transaction: &Transaction) -> anyhow::Result<()> {
        if self.require_signature && !transaction.is_signed() {
            bail!("Transaction is not signed");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use ethwire_transaction::{Legacy, TxKind, U256};

    use super::*;

    fn write_config(contents: &str) -> anyhow::Result<tempfile::NamedTempFile> {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(contents.as_bytes())?;
        Ok(file)
    }

    fn legacy(chain_id: Option<u64>) -> Transaction {
        Transaction::Legacy(Legacy {
            nonce: 0,
            gas_price: 1,
            gas_limit: 21_000,
            kind: TxKind::Create,
            value: U256::ZERO,
            input: ethwire_transaction::Bytes::new(),
            chain_id,
            signature: None,
        })
    }

    #[test]
    fn load_config() -> anyhow::Result<()> {
        let file = write_config("expected_chain_id = 1\nrequire_signature = true\n")?;

        let config = Config::load(file.path())?;
        assert_eq!(
            config,
            Config {
                expected_chain_id: Some(1),
                require_signature: true,
            }
        );
        Ok(())
    }

    #[test]
    fn missing_fields_use_defaults() -> anyhow::Result<()> {
        let file = write_config("")?;

        assert_eq!(Config::load(file.path())?, Config::default());
        Ok(())
    }

    #[test]
    fn unknown_fields_are_rejected() -> anyhow::Result<()> {
        let file = write_config("chain = 1\n")?;

        assert!(Config::load(file.path()).is_err());
        Ok(())
    }

    #[test]
    fn chain_id_check() {
        let config = Config {
            expected_chain_id: Some(1),
            ..Config::default()
        };

        assert!(config.check_chain_id(&legacy(Some(1))).is_ok());
        assert!(config.check_chain_id(&legacy(None)).is_ok());
        assert!(config.check_chain_id(&legacy(Some(5))).is_err());
        assert!(Config::default().check_chain_id(&legacy(Some(5))).is_ok());
    }

    #[test]
    fn signature_check() {
        let config = Config {
            require_signature: true,
            ..Config::default()
        };

        assert!(config.check_signature(&legacy(None)).is_err());
        assert!(Config::default().check_signature(&legacy(None)).is_ok());
    }
}
