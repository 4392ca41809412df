//! Authorization tuples, as introduced by EIP-7702.
//!
//! An authorization delegates the code of the signing account to `address`.
//! Its signature covers `keccak256(MAGIC ++ rlp([chain_id, address, nonce]))`,
//! which is independent of the transaction that carries it.

use std::ops::Deref;

use ethwire_primitives::{Address, B256, U256, keccak256};
use ethwire_rlp::{DecodeError, RlpField, RlpValue, encode_list, field::expect_tuple};
use ethwire_signer::{SecretKey, SignatureError, recover_address, sign_prehash};

/// Prefix byte of an authorization's signing pre-image.
pub const MAGIC: u8 = 0x05;

/// Number of RLP items in a signed authorization tuple.
pub const SIGNED_AUTHORIZATION_ARITY: usize = 6;

/// An unsigned delegation of an account's code to `address`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Authorization {
    // The order of these fields determines encoding order.
    /// Chain the authorization is valid on, or zero for any chain
    pub chain_id: U256,
    /// Delegation target
    pub address: Address,
    /// Nonce of the signing account
    #[cfg_attr(feature = "serde", serde(with = "alloy_serde::quantity"))]
    pub nonce: u64,
}

impl Authorization {
    /// Computes the hash that is signed by the authority.
    pub fn signature_hash(&self) -> B256 {
        let fields = [
            self.chain_id.to_rlp(),
            self.address.to_rlp(),
            self.nonce.to_rlp(),
        ];

        let mut preimage = vec![MAGIC];
        preimage.extend(encode_list(&fields));
        keccak256(preimage)
    }

    /// Signs the authorization with the provided secret key.
    pub fn sign(self, secret_key: &SecretKey) -> Result<SignedAuthorization, SignatureError> {
        let (r, s, y_parity) = sign_prehash(&self.signature_hash(), secret_key)?;
        Ok(SignedAuthorization::new_unchecked(self, y_parity, r, s))
    }

    /// Returns whether the authorization is restricted to a single chain.
    pub fn is_chain_specific(&self) -> bool {
        !self.chain_id.is_zero()
    }

    /// Returns whether the authorization may be used on the chain with the
    /// provided id.
    pub fn is_valid_for_chain(&self, chain_id: u64) -> bool {
        !self.is_chain_specific() || self.chain_id == U256::from(chain_id)
    }
}

/// An authorization with the signature of its authority.
///
/// The signature is not validated on construction. Use
/// [`SignedAuthorization::recover_authority`] to check it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SignedAuthorization {
    #[cfg_attr(feature = "serde", serde(flatten))]
    inner: Authorization,
    #[cfg_attr(feature = "serde", serde(with = "alloy_serde::quantity"))]
    y_parity: u8,
    r: U256,
    s: U256,
}

impl SignedAuthorization {
    /// Constructs a new instance without validating the signature.
    pub const fn new_unchecked(inner: Authorization, y_parity: u8, r: U256, s: U256) -> Self {
        Self {
            inner,
            y_parity,
            r,
            s,
        }
    }

    /// Returns the signed authorization.
    pub const fn inner(&self) -> &Authorization {
        &self.inner
    }

    /// Returns the Y-parity of the signature.
    pub const fn y_parity(&self) -> u8 {
        self.y_parity
    }

    /// Returns the R-value of the signature.
    pub const fn r(&self) -> U256 {
        self.r
    }

    /// Returns the S-value of the signature.
    pub const fn s(&self) -> U256 {
        self.s
    }

    /// Discards the signature.
    pub fn strip_signature(self) -> Authorization {
        self.inner
    }

    /// Recovers the address of the account that signed the authorization.
    pub fn recover_authority(&self) -> Result<Address, SignatureError> {
        recover_address(
            &self.inner.signature_hash(),
            self.r,
            self.s,
            self.y_parity,
        )
    }
}

impl Deref for SignedAuthorization {
    type Target = Authorization;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl RlpField for SignedAuthorization {
    fn to_rlp(&self) -> RlpValue {
        RlpValue::List(vec![
            self.inner.chain_id.to_rlp(),
            self.inner.address.to_rlp(),
            self.inner.nonce.to_rlp(),
            self.y_parity.to_rlp(),
            self.r.to_rlp(),
            self.s.to_rlp(),
        ])
    }

    fn from_rlp(value: &RlpValue, field: &'static str) -> Result<Self, DecodeError> {
        let [chain_id, address, nonce, y_parity, r, s] =
            expect_tuple::<SIGNED_AUTHORIZATION_ARITY>(value, field)?;

        let inner = Authorization {
            chain_id: U256::from_rlp(chain_id, "chainId")?,
            address: Address::from_rlp(address, "address")?,
            nonce: u64::from_rlp(nonce, "nonce")?,
        };

        Ok(Self::new_unchecked(
            inner,
            u8::from_rlp(y_parity, "yParity")?,
            U256::from_rlp(r, "r")?,
            U256::from_rlp(s, "s")?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use ethwire_primitives::{address, b256};
    use ethwire_rlp::{decode_exact, encode};
    use ethwire_test_utils::secret_key::{dev_address, dev_secret_key};

    use super::*;

    const CHAIN_ID: u64 = 0x7a69;

    fn authorization() -> Authorization {
        Authorization {
            chain_id: U256::from(CHAIN_ID),
            address: address!("0x1234567890123456789012345678901234567890"),
            nonce: 1,
        }
    }

    fn signed_authorization() -> SignedAuthorization {
        SignedAuthorization::new_unchecked(
            authorization(),
            1,
            U256::from_be_bytes(
                b256!("0xeb775e0a2b7a15ea4938921e1ab255c84270e25c2c384b2adc32c73cd70273d6").0,
            ),
            U256::from_be_bytes(
                b256!("0x46b9bec1961318a644db6cd9c7fc4e8d7c6f40d9165fc8958f3aff2216ed6f7c").0,
            ),
        )
    }

    #[test]
    fn signature_hash() {
        assert_eq!(
            authorization().signature_hash(),
            b256!("0x45e605ee9a1ce07604aa85fc6740911c05e00bb44eba17ea9d2799f32e1b6447")
        );
    }

    #[test]
    fn sign_is_deterministic() -> anyhow::Result<()> {
        let signed = authorization().sign(&dev_secret_key(0))?;
        assert_eq!(signed, signed_authorization());
        Ok(())
    }

    #[test]
    fn recover_authority() -> anyhow::Result<()> {
        assert_eq!(signed_authorization().recover_authority()?, dev_address(0));

        let signed = Authorization {
            chain_id: U256::ZERO,
            nonce: 7,
            ..authorization()
        }
        .sign(&dev_secret_key(2))?;
        assert_eq!(signed.recover_authority()?, dev_address(2));
        Ok(())
    }

    #[test]
    fn invalid_y_parity() {
        let authorization = signed_authorization();
        let invalid = SignedAuthorization::new_unchecked(
            authorization.inner().clone(),
            2,
            authorization.r(),
            authorization.s(),
        );

        assert!(matches!(
            invalid.recover_authority(),
            Err(SignatureError::InvalidRecoveryId(2))
        ));
    }

    #[test]
    fn encoding() -> anyhow::Result<()> {
        let encoded = encode(&signed_authorization().to_rlp());
        assert_eq!(
            encoded,
            hex::decode(concat!(
                "f85c827a699412345678901234567890123456789012345678900101",
                "a0eb775e0a2b7a15ea4938921e1ab255c84270e25c2c384b2adc32c73cd70273d6",
                "a046b9bec1961318a644db6cd9c7fc4e8d7c6f40d9165fc8958f3aff2216ed6f7c",
            ))?
        );

        let decoded = SignedAuthorization::from_rlp(&decode_exact(&encoded)?, "authorizationList")?;
        assert_eq!(decoded, signed_authorization());
        Ok(())
    }

    #[test]
    fn tuple_arity() {
        // An unsigned tuple is not accepted in place of a signed one.
        let value = RlpValue::List(vec![
            U256::from(CHAIN_ID).to_rlp(),
            Address::ZERO.to_rlp(),
            0u64.to_rlp(),
        ]);

        assert_eq!(
            SignedAuthorization::from_rlp(&value, "authorizationList"),
            Err(DecodeError::ArityMismatch {
                field: "authorizationList",
                expected: SIGNED_AUTHORIZATION_ARITY,
                actual: 3,
            })
        );
    }

    #[test]
    fn chain_validity() {
        let any_chain = Authorization {
            chain_id: U256::ZERO,
            ..authorization()
        };
        assert!(!any_chain.is_chain_specific());
        assert!(any_chain.is_valid_for_chain(1));

        assert!(authorization().is_chain_specific());
        assert!(authorization().is_valid_for_chain(CHAIN_ID));
        assert!(!authorization().is_valid_for_chain(1));
    }

    #[test]
    fn deref_to_authorization() {
        let signed = signed_authorization();

        assert_eq!(signed.nonce, 1);
        assert_eq!(signed.strip_signature(), authorization());
    }
}
