use ethwire_rlp::DecodeError;
use ethwire_signer::SignatureError;

use crate::TransactionType;

/// An error that occurred while deserializing a transaction.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DeserializeError {
    /// The input is empty.
    #[error("cannot deserialize a transaction from empty input")]
    EmptyInput,
    /// The first byte is neither an RLP list prefix nor a known type byte.
    #[error("unknown transaction type: {0:#04x}")]
    UnknownTransactionType(u8),
    /// The transaction's field list has the wrong length.
    #[error("{transaction_type} transaction has {actual} fields, expected {expected}")]
    WrongFieldCount {
        /// Type of the transaction
        transaction_type: TransactionType,
        /// Number of fields of the transaction type
        expected: usize,
        /// Number of decoded fields
        actual: usize,
    },
    /// The RLP encoding or one of its fields is malformed.
    #[error(transparent)]
    Rlp(#[from] DecodeError),
}

/// An error that occurred while recovering the sender of a transaction.
#[derive(Debug, thiserror::Error)]
pub enum RecoveryError {
    /// The signature fields are absent or zero.
    #[error("transaction is not signed")]
    UnsignedTransaction,
    /// The V-value does not encode a valid recovery id.
    #[error("invalid recovery id in V-value {0}")]
    InvalidRecoveryId(u64),
    /// The signature does not correspond to a valid public key.
    #[error("invalid signature")]
    InvalidSignature(#[source] SignatureError),
}

impl From<SignatureError> for RecoveryError {
    fn from(value: SignatureError) -> Self {
        match value {
            SignatureError::InvalidRecoveryId(recovery_id) => Self::InvalidRecoveryId(recovery_id),
            error => Self::InvalidSignature(error),
        }
    }
}
