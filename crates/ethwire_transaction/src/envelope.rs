use ethwire_eip2930::AccessListItem;
use ethwire_eip7702::SignedAuthorization;
use ethwire_primitives::{Address, B256, Bytes, TxKind, U256};
use ethwire_rlp::{DecodeError, RlpValue, decode_exact};
use ethwire_signer::{SecretKey, SignatureError};

use crate::{
    DeserializeError, RecoveryError, TransactionType,
    variant::{Eip1559, Eip2930, Eip4844, Eip7702, Legacy},
};

/// A transaction of any supported type.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "camelCase"))]
pub enum Transaction {
    /// Legacy transaction
    Legacy(Legacy),
    /// EIP-2930 transaction
    Eip2930(Eip2930),
    /// EIP-1559 transaction
    Eip1559(Eip1559),
    /// EIP-4844 transaction
    Eip4844(Eip4844),
    /// EIP-7702 transaction
    Eip7702(Eip7702),
}

impl Transaction {
    /// Deserializes a transaction from its wire representation.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn deserialize(bytes: &[u8]) -> Result<Self, DeserializeError> {
        let transaction_type = TransactionType::detect(bytes)?;
        log::trace!(
            "Deserializing {transaction_type} transaction of {} bytes",
            bytes.len()
        );

        match transaction_type {
            TransactionType::Legacy => Legacy::from_rlp(decode_exact(bytes)?).map(Self::Legacy),
            TransactionType::Eip2930 => {
                Eip2930::from_rlp(decode_typed_payload(bytes)?).map(Self::Eip2930)
            }
            TransactionType::Eip1559 => {
                Eip1559::from_rlp(decode_typed_payload(bytes)?).map(Self::Eip1559)
            }
            TransactionType::Eip4844 => {
                Eip4844::from_rlp(decode_typed_payload(bytes)?).map(Self::Eip4844)
            }
            TransactionType::Eip7702 => {
                Eip7702::from_rlp(decode_typed_payload(bytes)?).map(Self::Eip7702)
            }
        }
    }

    /// Serializes the transaction into its wire representation.
    pub fn serialize(&self) -> Vec<u8> {
        match self {
            Self::Legacy(tx) => tx.serialize(),
            Self::Eip2930(tx) => tx.serialize(),
            Self::Eip1559(tx) => tx.serialize(),
            Self::Eip4844(tx) => tx.serialize(),
            Self::Eip7702(tx) => tx.serialize(),
        }
    }

    /// Computes the hash that is signed by the sender.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn signing_hash(&self) -> B256 {
        match self {
            Self::Legacy(tx) => tx.signing_hash(),
            Self::Eip2930(tx) => tx.signing_hash(),
            Self::Eip1559(tx) => tx.signing_hash(),
            Self::Eip4844(tx) => tx.signing_hash(),
            Self::Eip7702(tx) => tx.signing_hash(),
        }
    }

    /// Computes the hash of the serialized transaction, which identifies it.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn hash(&self) -> B256 {
        match self {
            Self::Legacy(tx) => tx.hash(),
            Self::Eip2930(tx) => tx.hash(),
            Self::Eip1559(tx) => tx.hash(),
            Self::Eip4844(tx) => tx.hash(),
            Self::Eip7702(tx) => tx.hash(),
        }
    }

    /// Returns whether the transaction carries a usable signature.
    pub fn is_signed(&self) -> bool {
        match self {
            Self::Legacy(tx) => tx.is_signed(),
            Self::Eip2930(tx) => tx.is_signed(),
            Self::Eip1559(tx) => tx.is_signed(),
            Self::Eip4844(tx) => tx.is_signed(),
            Self::Eip7702(tx) => tx.is_signed(),
        }
    }

    /// Recovers the address of the account that signed the transaction.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn sender(&self) -> Result<Address, RecoveryError> {
        match self {
            Self::Legacy(tx) => tx.sender(),
            Self::Eip2930(tx) => tx.sender(),
            Self::Eip1559(tx) => tx.sender(),
            Self::Eip4844(tx) => tx.sender(),
            Self::Eip7702(tx) => tx.sender(),
        }
    }

    /// Returns whether the signature is valid for the signing hash.
    ///
    /// Never fails: an absent or malformed signature is reported as invalid.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn verify_signature(&self) -> bool {
        match self {
            Self::Legacy(tx) => tx.verify_signature(),
            Self::Eip2930(tx) => tx.verify_signature(),
            Self::Eip1559(tx) => tx.verify_signature(),
            Self::Eip4844(tx) => tx.verify_signature(),
            Self::Eip7702(tx) => tx.verify_signature(),
        }
    }

    /// Signs the transaction, replacing any existing signature.
    pub fn sign(self, secret_key: &SecretKey) -> Result<Self, SignatureError> {
        match self {
            Self::Legacy(tx) => tx.sign(secret_key).map(Self::Legacy),
            Self::Eip2930(tx) => tx.sign(secret_key).map(Self::Eip2930),
            Self::Eip1559(tx) => tx.sign(secret_key).map(Self::Eip1559),
            Self::Eip4844(tx) => tx.sign(secret_key).map(Self::Eip4844),
            Self::Eip7702(tx) => tx.sign(secret_key).map(Self::Eip7702),
        }
    }

    /// Returns the type of the transaction.
    pub fn transaction_type(&self) -> TransactionType {
        match self {
            Self::Legacy(_) => TransactionType::Legacy,
            Self::Eip2930(_) => TransactionType::Eip2930,
            Self::Eip1559(_) => TransactionType::Eip1559,
            Self::Eip4844(_) => TransactionType::Eip4844,
            Self::Eip7702(_) => TransactionType::Eip7702,
        }
    }

    /// Returns the chain id, if the transaction is bound to a chain.
    pub fn chain_id(&self) -> Option<u64> {
        match self {
            Self::Legacy(tx) => tx.eip155_chain_id(),
            Self::Eip2930(tx) => Some(tx.chain_id),
            Self::Eip1559(tx) => Some(tx.chain_id),
            Self::Eip4844(tx) => Some(tx.chain_id),
            Self::Eip7702(tx) => Some(tx.chain_id),
        }
    }

    pub fn nonce(&self) -> u64 {
        match self {
            Self::Legacy(tx) => tx.nonce,
            Self::Eip2930(tx) => tx.nonce,
            Self::Eip1559(tx) => tx.nonce,
            Self::Eip4844(tx) => tx.nonce,
            Self::Eip7702(tx) => tx.nonce,
        }
    }

    pub fn gas_limit(&self) -> u64 {
        match self {
            Self::Legacy(tx) => tx.gas_limit,
            Self::Eip2930(tx) => tx.gas_limit,
            Self::Eip1559(tx) => tx.gas_limit,
            Self::Eip4844(tx) => tx.gas_limit,
            Self::Eip7702(tx) => tx.gas_limit,
        }
    }

    pub fn kind(&self) -> TxKind {
        match self {
            Self::Legacy(tx) => tx.kind,
            Self::Eip2930(tx) => tx.kind,
            Self::Eip1559(tx) => tx.kind,
            Self::Eip4844(tx) => tx.kind,
            Self::Eip7702(tx) => tx.kind,
        }
    }

    /// Returns the recipient, or `None` for a contract creation.
    pub fn to(&self) -> Option<Address> {
        self.kind().to().copied()
    }

    pub fn is_contract_creation(&self) -> bool {
        self.kind().is_create()
    }

    pub fn value(&self) -> &U256 {
        match self {
            Self::Legacy(tx) => &tx.value,
            Self::Eip2930(tx) => &tx.value,
            Self::Eip1559(tx) => &tx.value,
            Self::Eip4844(tx) => &tx.value,
            Self::Eip7702(tx) => &tx.value,
        }
    }

    pub fn data(&self) -> &Bytes {
        match self {
            Self::Legacy(tx) => &tx.input,
            Self::Eip2930(tx) => &tx.input,
            Self::Eip1559(tx) => &tx.input,
            Self::Eip4844(tx) => &tx.input,
            Self::Eip7702(tx) => &tx.input,
        }
    }

    /// Returns the access list, if the transaction type supports one.
    pub fn access_list(&self) -> Option<&[AccessListItem]> {
        match self {
            Self::Legacy(_) => None,
            Self::Eip2930(tx) => Some(&tx.access_list),
            Self::Eip1559(tx) => Some(&tx.access_list),
            Self::Eip4844(tx) => Some(&tx.access_list),
            Self::Eip7702(tx) => Some(&tx.access_list),
        }
    }

    /// Returns the versioned hashes of the blobs, which are only present in
    /// EIP-4844 transactions.
    pub fn blob_hashes(&self) -> &[B256] {
        match self {
            Self::Eip4844(tx) => &tx.blob_hashes,
            Self::Legacy(_) | Self::Eip2930(_) | Self::Eip1559(_) | Self::Eip7702(_) => &[],
        }
    }

    /// Returns the authorization list, which is only present in EIP-7702
    /// transactions.
    pub fn authorization_list(&self) -> Option<&[SignedAuthorization]> {
        match self {
            Self::Eip7702(tx) => Some(&tx.authorization_list),
            Self::Legacy(_) | Self::Eip2930(_) | Self::Eip1559(_) | Self::Eip4844(_) => None,
        }
    }
}

/// Decodes the RLP list that follows the type byte. Reported offsets are
/// relative to the start of `bytes`.
fn decode_typed_payload(bytes: &[u8]) -> Result<RlpValue, DecodeError> {
    let payload = bytes.get(1..).unwrap_or_default();
    decode_exact(payload).map_err(|error| error.offset_by(1))
}

macro_rules! impl_from_variant {
    ($($variant:ident),+ $(,)?) => {
        $(
            impl From<$variant> for Transaction {
                fn from(value: $variant) -> Self {
                    Self::$variant(value)
                }
            }
        )+
    };
}

impl_from_variant!(Legacy, Eip2930, Eip1559, Eip4844, Eip7702);
