use anyhow::Context as _;
use clap::Subcommand;
use ethwire_transaction::{Transaction, TransactionType};

use crate::config::Config;

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Prints the type of a serialized transaction
    Type {
        /// Hex-encoded transaction, with or without `0x` prefix
        transaction: String,
    },
    /// Decodes a serialized transaction and prints it as JSON
    Decode {
        /// Hex-encoded transaction, with or without `0x` prefix
        transaction: String,
    },
    /// Prints the hash of a serialized transaction
    Hash {
        /// Hex-encoded transaction, with or without `0x` prefix
        transaction: String,
    },
    /// Prints the hash that the sender of a serialized transaction signs
    SigningHash {
        /// Hex-encoded transaction, with or without `0x` prefix
        transaction: String,
    },
    /// Recovers the sender of a serialized transaction
    Sender {
        /// Hex-encoded transaction, with or without `0x` prefix
        transaction: String,
    },
    /// Checks whether the signature of a serialized transaction is valid
    Verify {
        /// Hex-encoded transaction, with or without `0x` prefix
        transaction: String,
    },
}

impl Command {
    /// Runs the command, returning the text to print.
    pub fn run(self, config: &Config) -> anyhow::Result<String> {
        match self {
            Command::Type { transaction } => {
                let bytes = parse_hex(&transaction)?;
                let transaction_type = TransactionType::detect(&bytes)?;
                Ok(transaction_type.to_string())
            }
            Command::Decode { transaction } => {
                let transaction = deserialize(&transaction, config)?;
                config.check_signature(&transaction)?;

                let json = serde_json::to_string_pretty(&transaction)?;
                Ok(json)
            }
            Command::Hash { transaction } => {
                let transaction = deserialize(&transaction, config)?;
                Ok(transaction.hash().to_string())
            }
            Command::SigningHash { transaction } => {
                let transaction = deserialize(&transaction, config)?;
                Ok(transaction.signing_hash().to_string())
            }
            Command::Sender { transaction } => {
                let transaction = deserialize(&transaction, config)?;
                let sender = transaction.sender()?;
                Ok(sender.to_checksum(None))
            }
            Command::Verify { transaction } => {
                let transaction = deserialize(&transaction, config)?;
                Ok(transaction.verify_signature().to_string())
            }
        }
    }
}

fn parse_hex(input: &str) -> anyhow::Result<Vec<u8>> {
    hex::decode(input.trim()).context("Transaction is not valid hex")
}

fn deserialize(input: &str, config: &Config) -> anyhow::Result<Transaction> {
    let bytes = parse_hex(input)?;
    let transaction = Transaction::deserialize(&bytes)?;
    log::debug!(
        "Decoded {} transaction with hash {}",
        transaction.transaction_type(),
        transaction.hash()
    );

    config.check_chain_id(&transaction)?;
    Ok(transaction)
}
