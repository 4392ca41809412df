use ethwire_eip2930::AccessList;
use ethwire_primitives::{Bytes, TxKind, U256};
use ethwire_rlp::{RlpField, RlpValue};
use ethwire_signer::SignatureWithYParity;

use crate::{
    DeserializeError, TransactionType,
    signature::decode_y_parity_fields,
    utils::transaction_fields,
};

/// An EIP-1559 transaction with dynamic fees.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Eip1559 {
    // The order of these fields determines encoding order.
    #[cfg_attr(feature = "serde", serde(with = "alloy_serde::quantity"))]
    pub chain_id: u64,
    #[cfg_attr(feature = "serde", serde(with = "alloy_serde::quantity"))]
    pub nonce: u64,
    #[cfg_attr(feature = "serde", serde(with = "alloy_serde::quantity"))]
    pub max_priority_fee_per_gas: u128,
    #[cfg_attr(feature = "serde", serde(with = "alloy_serde::quantity"))]
    pub max_fee_per_gas: u128,
    #[cfg_attr(feature = "serde", serde(with = "alloy_serde::quantity"))]
    pub gas_limit: u64,
    #[cfg_attr(feature = "serde", serde(rename = "to"))]
    pub kind: TxKind,
    pub value: U256,
    pub input: Bytes,
    pub access_list: AccessList,
    pub signature: Option<SignatureWithYParity>,
}

impl Eip1559 {
    /// The type identifier for an EIP-1559 transaction.
    pub const TYPE: u8 = 2;

    /// Number of RLP fields, including the signature.
    pub const FIELD_COUNT: usize = 12;

    fn unsigned_fields(&self) -> [RlpValue; 9] {
        [
            self.chain_id.to_rlp(),
            self.nonce.to_rlp(),
            self.max_priority_fee_per_gas.to_rlp(),
            self.max_fee_per_gas.to_rlp(),
            self.gas_limit.to_rlp(),
            self.kind.to_rlp(),
            self.value.to_rlp(),
            self.input.to_rlp(),
            self.access_list.to_rlp(),
        ]
    }

    /// Decodes the transaction from its RLP field list, without the type
    /// byte.
    pub fn from_rlp(value: RlpValue) -> Result<Self, DeserializeError> {
        let [
            chain_id,
            nonce,
            max_priority_fee_per_gas,
            max_fee_per_gas,
            gas_limit,
            to,
            value,
            input,
            access_list,
            y_parity,
            r,
            s,
        ] = transaction_fields::<{ Eip1559::FIELD_COUNT }>(value, TransactionType::Eip1559)?;

        Ok(Self {
            chain_id: u64::from_rlp(&chain_id, "chainId")?,
            nonce: u64::from_rlp(&nonce, "nonce")?,
            max_priority_fee_per_gas: u128::from_rlp(
                &max_priority_fee_per_gas,
                "maxPriorityFeePerGas",
            )?,
            max_fee_per_gas: u128::from_rlp(&max_fee_per_gas, "maxFeePerGas")?,
            gas_limit: u64::from_rlp(&gas_limit, "gasLimit")?,
            kind: TxKind::from_rlp(&to, "to")?,
            value: U256::from_rlp(&value, "value")?,
            input: Bytes::from_rlp(&input, "data")?,
            access_list: AccessList::from_rlp(&access_list, "accessList")?,
            signature: decode_y_parity_fields(&y_parity, &r, &s)?,
        })
    }
}

impl_typed_transaction!(Eip1559);
