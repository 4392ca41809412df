/// A blob transaction with an access list, signed by the first development
/// account.
pub mod eip4844 {
    use ethwire_eip2930::{AccessList, AccessListItem};
    use ethwire_primitives::{B256, TxKind, U256, b256, bytes};
    use ethwire_signer::SecretKey;
    use ethwire_test_utils::secret_key::{dev_address, dev_secret_key};
    use hex::FromHexError;

    use crate::Eip4844;

    /// Signing hash for the test vector.
    pub const SIGNING_HASH: B256 =
        b256!("0xd73fb9fd3ec1f435b2a4114b4d343841839fec9f1904654eb1af6fa89d1c6405");

    /// Transaction hash for the test vector.
    pub const TRANSACTION_HASH: B256 =
        b256!("0x564bc01281edab693fb95ceb7c426f1938125ed917e3bdd090ef1c0b0434103c");

    /// Raw serialized signed transaction for the test vector.
    pub fn raw() -> Result<Vec<u8>, FromHexError> {
        hex::decode(
            "03f8ec0105843b9aca0084b2d05e008252089470997970c51812dc3a010c7d01b50e0d17dc79c882303982cafef838f79470997970c51812dc3a010c7d01b50e0d17dc79c8e1a0000000000000000000000000000000000000000000000000000000000000000107f842a00111111111111111111111111111111111111111111111111111111111111111a0012222222222222222222222222222222222222222222222222222222222222201a0818d370f9aaacb2aa4bb236f034cbcb65af5542501f6d8c75e28319949ab5207a057c9219af20ba38667e735e96f5d96633de9d44b49ff1dea460aaae7b948204a",
        )
    }

    /// Unsigned transaction of the test vector.
    pub fn unsigned() -> Eip4844 {
        Eip4844 {
            chain_id: 1,
            nonce: 5,
            max_priority_fee_per_gas: 1_000_000_000,
            max_fee_per_gas: 3_000_000_000,
            gas_limit: 21_000,
            kind: TxKind::Call(dev_address(1)),
            value: U256::from(12_345),
            input: bytes!("cafe"),
            access_list: AccessList(vec![AccessListItem {
                address: dev_address(1),
                storage_keys: vec![B256::from(U256::from(1))],
            }]),
            max_fee_per_blob_gas: 7,
            blob_hashes: vec![
                b256!("0x0111111111111111111111111111111111111111111111111111111111111111"),
                b256!("0x0122222222222222222222222222222222222222222222222222222222222222"),
            ],
            signature: None,
        }
    }

    /// Signed transaction of the test vector.
    pub fn signed() -> anyhow::Result<Eip4844> {
        let signed = unsigned().sign(&secret_key())?;
        Ok(signed)
    }

    /// Secret key used for the test vector.
    pub fn secret_key() -> SecretKey {
        dev_secret_key(0)
    }
}

/// A delegation transaction with a single authorization, generated by
/// Hardhat.
pub mod eip7702 {
    use std::str::FromStr as _;

    use ethwire_eip2930::AccessList;
    use ethwire_eip7702::{Authorization, SignedAuthorization};
    use ethwire_primitives::{B256, Bytes, TxKind, U256, address, b256};
    use ethwire_signer::SecretKey;
    use ethwire_test_utils::secret_key::dev_secret_key;
    use hex::FromHexError;

    use crate::Eip7702;

    const CHAIN_ID: u64 = 0x7a69;

    /// Signing hash for the test vector.
    pub const SIGNING_HASH: B256 =
        b256!("0x056880940567cb424c9959fc670bca016107f9b305158837ef1b0c721e1cbb65");

    /// Transaction hash for the test vector.
    pub const TRANSACTION_HASH: B256 =
        b256!("0x235bb5a9856798eee27ec065a3aef0dc294a02713fce10c79321e436c98e1aab");

    /// Signed authorization for the test vector.
    pub fn signed_authorization() -> SignedAuthorization {
        SignedAuthorization::new_unchecked(
            Authorization {
                chain_id: U256::from(CHAIN_ID),
                address: address!("0x1234567890123456789012345678901234567890"),
                nonce: 1,
            },
            1,
            U256::from_str("0xeb775e0a2b7a15ea4938921e1ab255c84270e25c2c384b2adc32c73cd70273d6")
                .expect("R value is valid"),
            U256::from_str("0x46b9bec1961318a644db6cd9c7fc4e8d7c6f40d9165fc8958f3aff2216ed6f7c")
                .expect("S value is valid"),
        )
    }

    /// Raw serialized signed transaction for the test vector.
    pub fn raw() -> Result<Vec<u8>, FromHexError> {
        hex::decode(
            "04f8cc827a6980843b9aca00848321560082f61894f39fd6e51aad88f6f4ce6ab8827279cfffb922668080c0f85ef85c827a699412345678901234567890123456789012345678900101a0eb775e0a2b7a15ea4938921e1ab255c84270e25c2c384b2adc32c73cd70273d6a046b9bec1961318a644db6cd9c7fc4e8d7c6f40d9165fc8958f3aff2216ed6f7c01a0be47a039954e4dfb7f08927ef7f072e0ec7510290e3c4c1405f3bf0329d0be51a06f291c455321a863d4c8ebbd73d58e809328918bcb5555958247ca6ec27feec8",
        )
    }

    /// Unsigned transaction of the test vector.
    pub fn unsigned() -> Eip7702 {
        Eip7702 {
            chain_id: CHAIN_ID,
            nonce: 0,
            max_priority_fee_per_gas: 1_000_000_000,
            max_fee_per_gas: 2_200_000_000,
            gas_limit: 63_000,
            kind: TxKind::Call(address!("0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266")),
            value: U256::ZERO,
            input: Bytes::new(),
            access_list: AccessList::default(),
            authorization_list: vec![signed_authorization()],
            signature: None,
        }
    }

    /// Signed transaction of the test vector.
    pub fn signed() -> anyhow::Result<Eip7702> {
        let signed = unsigned().sign(&secret_key())?;
        Ok(signed)
    }

    /// Secret key used for the test vector.
    pub fn secret_key() -> SecretKey {
        dev_secret_key(0)
    }
}
