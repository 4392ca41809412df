use ethwire_primitives::{Address, B256, Bytes, TxKind, U256, keccak256};
use ethwire_rlp::{RlpField, RlpValue, encode_list};
use ethwire_signer::{SecretKey, SignatureError, SignatureWithRecoveryId};

use crate::{
    DeserializeError, RecoveryError, TransactionType,
    signature::{RecoveryParts, has_nonzero_scalars, recover_sender, verify_signature},
    utils::transaction_fields,
};

/// A legacy transaction, optionally replay-protected by EIP-155.
///
/// A chain id of zero is equivalent to no chain id.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Legacy {
    // The order of these fields determines encoding order.
    #[cfg_attr(feature = "serde", serde(with = "alloy_serde::quantity"))]
    pub nonce: u64,
    #[cfg_attr(feature = "serde", serde(with = "alloy_serde::quantity"))]
    pub gas_price: u128,
    #[cfg_attr(feature = "serde", serde(with = "alloy_serde::quantity"))]
    pub gas_limit: u64,
    #[cfg_attr(feature = "serde", serde(rename = "to"))]
    pub kind: TxKind,
    pub value: U256,
    pub input: Bytes,
    /// EIP-155 chain id. Unsigned transactions carry it as their V-value,
    /// signed transactions encode it in the V-value of their signature.
    #[cfg_attr(feature = "serde", serde(with = "alloy_serde::quantity::opt"))]
    pub chain_id: Option<u64>,
    pub signature: Option<SignatureWithRecoveryId>,
}

impl Legacy {
    /// The type identifier for a legacy transaction.
    pub const TYPE: u8 = 0;

    /// Number of RLP fields, including the signature.
    pub const FIELD_COUNT: usize = 9;

    /// Returns the chain id that the transaction is replay-protected for.
    pub fn eip155_chain_id(&self) -> Option<u64> {
        self.chain_id.filter(|chain_id| *chain_id != 0)
    }

    fn unsigned_fields(&self) -> [RlpValue; 6] {
        [
            self.nonce.to_rlp(),
            self.gas_price.to_rlp(),
            self.gas_limit.to_rlp(),
            self.kind.to_rlp(),
            self.value.to_rlp(),
            self.input.to_rlp(),
        ]
    }

    fn signature_fields(&self) -> [RlpValue; 3] {
        match &self.signature {
            Some(signature) => [
                signature.v.to_rlp(),
                signature.r.to_rlp(),
                signature.s.to_rlp(),
            ],
            None => [
                self.eip155_chain_id().unwrap_or_default().to_rlp(),
                RlpValue::empty(),
                RlpValue::empty(),
            ],
        }
    }

    /// Serializes the transaction into `rlp([nonce, gasPrice, gasLimit, to,
    /// value, data, v, r, s])`.
    pub fn serialize(&self) -> Vec<u8> {
        let fields: Vec<RlpValue> = self
            .unsigned_fields()
            .into_iter()
            .chain(self.signature_fields())
            .collect();

        encode_list(&fields)
    }

    /// Decodes the transaction from its RLP field list.
    pub fn from_rlp(value: RlpValue) -> Result<Self, DeserializeError> {
        let [nonce, gas_price, gas_limit, to, value, input, v, r, s] =
            transaction_fields::<{ Legacy::FIELD_COUNT }>(value, TransactionType::Legacy)?;

        let v = u64::from_rlp(&v, "v")?;
        let r = U256::from_rlp(&r, "r")?;
        let s = U256::from_rlp(&s, "s")?;

        let (chain_id, signature) = if r.is_zero() && s.is_zero() {
            ((v != 0).then_some(v), None)
        } else {
            let chain_id = v
                .checked_sub(35)
                .map(|offset| offset / 2)
                .filter(|chain_id| *chain_id != 0);
            (chain_id, Some(SignatureWithRecoveryId { r, s, v }))
        };

        Ok(Self {
            nonce: u64::from_rlp(&nonce, "nonce")?,
            gas_price: u128::from_rlp(&gas_price, "gasPrice")?,
            gas_limit: u64::from_rlp(&gas_limit, "gasLimit")?,
            kind: TxKind::from_rlp(&to, "to")?,
            value: U256::from_rlp(&value, "value")?,
            input: Bytes::from_rlp(&input, "data")?,
            chain_id,
            signature,
        })
    }

    /// Computes the hash that is signed by the sender.
    ///
    /// With a chain id, the pre-image is extended by `[chainId, 0, 0]` as
    /// specified by EIP-155.
    pub fn signing_hash(&self) -> B256 {
        let unsigned = self.unsigned_fields();
        let encoded = match self.eip155_chain_id() {
            Some(chain_id) => {
                let fields: Vec<RlpValue> = unsigned
                    .into_iter()
                    .chain([chain_id.to_rlp(), RlpValue::empty(), RlpValue::empty()])
                    .collect();

                encode_list(&fields)
            }
            None => encode_list(&unsigned),
        };

        keccak256(encoded)
    }

    /// Computes the hash of the serialized transaction.
    pub fn hash(&self) -> B256 {
        keccak256(self.serialize())
    }

    /// Returns whether the transaction carries a signature with non-zero
    /// scalars and a V-value that matches its chain id.
    pub fn is_signed(&self) -> bool {
        self.recovery_parts().is_ok()
    }

    fn recovery_parts(&self) -> Result<RecoveryParts, RecoveryError> {
        let signature = self
            .signature
            .filter(|signature| has_nonzero_scalars(signature.r, signature.s))
            .ok_or(RecoveryError::UnsignedTransaction)?;

        let offset = match self.eip155_chain_id() {
            Some(chain_id) => chain_id.checked_mul(2).and_then(|v| v.checked_add(35)),
            None => Some(27),
        };

        let recovery_id = offset
            .and_then(|offset| signature.v.checked_sub(offset))
            .and_then(|recovery_id| u8::try_from(recovery_id).ok())
            .filter(|recovery_id| *recovery_id <= 1)
            .ok_or(RecoveryError::InvalidRecoveryId(signature.v))?;

        Ok(RecoveryParts {
            r: signature.r,
            s: signature.s,
            recovery_id,
        })
    }

    /// Recovers the address of the account that signed the transaction.
    pub fn sender(&self) -> Result<Address, RecoveryError> {
        recover_sender(&self.signing_hash(), self.recovery_parts()?)
    }

    /// Returns whether the signature is valid for the signing hash.
    pub fn verify_signature(&self) -> bool {
        verify_signature(&self.signing_hash(), self.recovery_parts())
    }

    /// Signs the transaction, encoding its chain id (if any) in the V-value.
    pub fn sign(self, secret_key: &SecretKey) -> Result<Self, SignatureError> {
        let signing_hash = self.signing_hash();
        let signature = match self.eip155_chain_id() {
            Some(chain_id) => {
                SignatureWithRecoveryId::with_chain_id(&signing_hash, secret_key, chain_id)?
            }
            None => SignatureWithRecoveryId::new(&signing_hash, secret_key)?,
        };

        Ok(Self {
            signature: Some(signature),
            ..self
        })
    }
}

impl PartialEq for Legacy {
    fn eq(&self, other: &Self) -> bool {
        let Self {
            nonce,
            gas_price,
            gas_limit,
            kind,
            value,
            input,
            chain_id: _,
            signature,
        } = self;

        *nonce == other.nonce
            && *gas_price == other.gas_price
            && *gas_limit == other.gas_limit
            && *kind == other.kind
            && *value == other.value
            && *input == other.input
            && self.eip155_chain_id() == other.eip155_chain_id()
            && *signature == other.signature
    }
}

impl Eq for Legacy {}
