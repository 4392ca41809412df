use ethwire_eip2930::AccessList;
use ethwire_primitives::{Bytes, TxKind, U256};
use ethwire_rlp::{RlpField, RlpValue};
use ethwire_signer::SignatureWithYParity;

use crate::{
    DeserializeError, TransactionType,
    signature::decode_y_parity_fields,
    utils::transaction_fields,
};

/// An EIP-2930 transaction with an access list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Eip2930 {
    // The order of these fields determines encoding order.
    #[cfg_attr(feature = "serde", serde(with = "alloy_serde::quantity"))]
    pub chain_id: u64,
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
    pub access_list: AccessList,
    pub signature: Option<SignatureWithYParity>,
}

impl Eip2930 {
    /// The type identifier for an EIP-2930 transaction.
    pub const TYPE: u8 = 1;

    /// Number of RLP fields, including the signature.
    pub const FIELD_COUNT: usize = 11;

    fn unsigned_fields(&self) -> [RlpValue; 8] {
        [
            self.chain_id.to_rlp(),
            self.nonce.to_rlp(),
            self.gas_price.to_rlp(),
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
            gas_price,
            gas_limit,
            to,
            value,
            input,
            access_list,
            y_parity,
            r,
            s,
        ] = transaction_fields::<{ Eip2930::FIELD_COUNT }>(value, TransactionType::Eip2930)?;

        Ok(Self {
            chain_id: u64::from_rlp(&chain_id, "chainId")?,
            nonce: u64::from_rlp(&nonce, "nonce")?,
            gas_price: u128::from_rlp(&gas_price, "gasPrice")?,
            gas_limit: u64::from_rlp(&gas_limit, "gasLimit")?,
            kind: TxKind::from_rlp(&to, "to")?,
            value: U256::from_rlp(&value, "value")?,
            input: Bytes::from_rlp(&input, "data")?,
            access_list: AccessList::from_rlp(&access_list, "accessList")?,
            signature: decode_y_parity_fields(&y_parity, &r, &s)?,
        })
    }
}

impl_typed_transaction!(Eip2930);

#[cfg(test)]
mod tests {
    use ethwire_eip2930::AccessListItem;
    use ethwire_primitives::{Address, B256, address, b256};
    use ethwire_test_utils::secret_key::{dev_address, dev_secret_key, secret_key_from_str};

    use super::*;
    use crate::Transaction;

    fn decode(bytes: &[u8]) -> Eip2930 {
        match Transaction::deserialize(bytes) {
            Ok(Transaction::Eip2930(transaction)) => transaction,
            result => panic!("expected an EIP-2930 transaction, got {result:?}"),
        }
    }

    fn dummy_transaction() -> anyhow::Result<Eip2930> {
        Ok(Eip2930 {
            chain_id: 1,
            nonce: 1,
            gas_price: 2,
            gas_limit: 3,
            kind: TxKind::Call(address!("0xc014ba5ec014ba5ec014ba5ec014ba5ec014ba5e")),
            value: U256::from(4),
            input: Bytes::from(hex::decode("1234")?),
            access_list: AccessList(vec![AccessListItem {
                address: Address::ZERO,
                storage_keys: vec![B256::ZERO, B256::from(U256::from(1))],
            }]),
            signature: None,
        })
    }

    #[test]
    fn hardhat_vector() -> anyhow::Result<()> {
        let secret_key =
            secret_key_from_str("e331b6d69882b4cb4ea581d88e0b604039a3de5967688d3dcffdd2270c0fd109")?;
        let signed = dummy_transaction()?.sign(&secret_key)?;

        // Generated by Hardhat
        let expected = hex::decode(
            "01f8bd0101020394c014ba5ec014ba5ec014ba5ec014ba5ec014ba5e04821234f85bf859940000000000000000000000000000000000000000f842a00000000000000000000000000000000000000000000000000000000000000000a0000000000000000000000000000000000000000000000000000000000000000101a0a9f9f0c845cc2d257838df2679a59af6f19055012ce1de11ba25b4ca9df503cfa02c70c54cf6c49b4a641b269c93308fa07de541aa3bcd3fce0fc722aaabe3a8d8",
        )?;

        assert_eq!(signed.serialize(), expected);
        assert_eq!(
            signed.hash(),
            b256!("0x1d4f5ef5c7b4b0bd61d4dd622615ec280ae5b9a57136ce6b7686025999220611")
        );
        assert_eq!(
            signed.sender()?,
            address!("0xbe862ad9abfe6f22bcb087716c7d89a26051f74c")
        );
        assert_eq!(decode(&expected), signed);
        Ok(())
    }

    #[test]
    fn contract_creation() -> anyhow::Result<()> {
        let transaction = Eip2930 {
            chain_id: 1,
            nonce: 2,
            gas_price: 1_000_000_000,
            gas_limit: 50_000,
            kind: TxKind::Create,
            value: U256::ZERO,
            input: Bytes::from(hex::decode("6080604052")?),
            access_list: AccessList(vec![AccessListItem {
                address: dev_address(1),
                storage_keys: vec![B256::from(U256::from(1))],
            }]),
            signature: None,
        };
        assert_eq!(
            transaction.signing_hash(),
            b256!("0x899c45fd9932d06abf08e856d17faf82100a5b85a1653189b0c8918095564263")
        );

        let signed = transaction.sign(&dev_secret_key(0))?;
        let expected = hex::decode(
            "01f88f0102843b9aca0082c3508080856080604052f838f79470997970c51812dc3a010c7d01b50e0d17dc79c8e1a0000000000000000000000000000000000000000000000000000000000000000101a0a50ab782ed9764905f65ff81e60f32a337a3f6ed86e4cfd72a42a80a91bac0d5a02cc70aee908cb675f267f0fe57998dc1016e0c9f5a71bdf5797ff53954da19a8",
        )?;

        assert_eq!(signed.serialize(), expected);
        assert_eq!(
            signed.hash(),
            b256!("0x2b56306bd9a63d5de118caddee8627667558bc03965efa3bf16bc7a5b72d61ac")
        );

        let decoded = decode(&expected);
        assert_eq!(decoded.kind, TxKind::Create);
        assert_eq!(decoded.sender()?, dev_address(0));
        assert!(decoded.verify_signature());
        Ok(())
    }

    #[test]
    fn unsigned_round_trip() -> anyhow::Result<()> {
        let transaction = dummy_transaction()?;
        assert!(!transaction.is_signed());
        assert_eq!(decode(&transaction.serialize()), transaction);
        Ok(())
    }
}
