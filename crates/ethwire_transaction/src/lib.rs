#![allow(missing_docs)]

//! Ethereum transaction types and their wire codec.
//!
//! Every transaction type is a plain struct whose fields are listed in
//! encoding order. [`Transaction`] dispatches the codec, hashing, and
//! signature operations to the type's own implementation.

mod envelope;
mod error;
mod signature;
#[cfg(test)]
mod test_utils;
mod transaction_type;
/// Utility functions
pub mod utils;
/// Types of transactions
pub mod variant;

pub use ethwire_eip2930::{AccessList, AccessListItem};
pub use ethwire_eip7702::{Authorization, SignedAuthorization};
pub use ethwire_primitives::{Address, B256, Bytes, TxKind, U256};

pub use self::{
    envelope::Transaction,
    error::{DeserializeError, RecoveryError},
    transaction_type::TransactionType,
    variant::{Eip1559, Eip2930, Eip4844, Eip7702, Legacy},
};
