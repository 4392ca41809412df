use ethwire_primitives::{B256, U256};
use k256::SecretKey;

use super::{Signature, SignatureError, sign_prehash};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
/// An ECDSA signature with recovery ID.
///
/// The V-value is 27 or 28 for unprotected signatures and
/// `chain_id * 2 + 35` or `chain_id * 2 + 36` for EIP-155 signatures.
pub struct SignatureWithRecoveryId {
    /// R value
    pub r: U256,
    /// S Value
    pub s: U256,
    /// V value
    pub v: u64,
}

impl SignatureWithRecoveryId {
    /// Signs a message hash, producing a V-value of 27 or 28.
    pub fn new(message_hash: &B256, secret_key: &SecretKey) -> Result<Self, SignatureError> {
        let (r, s, recovery_id) = sign_prehash(message_hash, secret_key)?;
        let v = 27 + u64::from(recovery_id);

        Ok(Self { r, s, v })
    }

    /// Signs a message hash, encoding `chain_id` in the V-value as specified
    /// by EIP-155.
    pub fn with_chain_id(
        message_hash: &B256,
        secret_key: &SecretKey,
        chain_id: u64,
    ) -> Result<Self, SignatureError> {
        let (r, s, recovery_id) = sign_prehash(message_hash, secret_key)?;
        let v = chain_id
            .checked_mul(2)
            .and_then(|v| v.checked_add(35 + u64::from(recovery_id)))
            .ok_or(SignatureError::InvalidRecoveryId(chain_id))?;

        Ok(Self { r, s, v })
    }

    /// Returns whether the V value has odd Y parity.
    pub fn odd_y_parity(&self) -> bool {
        match self.v {
            27 | 28 => self.v == 28,
            v => v >= 35 && (v - 35) % 2 == 1,
        }
    }
}

impl Signature for SignatureWithRecoveryId {
    fn r(&self) -> U256 {
        self.r
    }

    fn s(&self) -> U256 {
        self.s
    }

    fn v(&self) -> u64 {
        self.v
    }

    fn y_parity(&self) -> Option<bool> {
        None
    }
}

#[cfg(test)]
mod tests {
    use ethwire_primitives::keccak256;
    use ethwire_test_utils::secret_key::secret_key_from_str;

    use super::*;
    use crate::recover_address;

    #[test]
    fn chain_id_is_encoded_in_v() -> anyhow::Result<()> {
        let secret_key = secret_key_from_str(
            "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80",
        )?;
        let message_hash = keccak256(b"replay protected");

        let unprotected = SignatureWithRecoveryId::new(&message_hash, &secret_key)?;
        let protected = SignatureWithRecoveryId::with_chain_id(&message_hash, &secret_key, 1)?;

        assert_eq!(unprotected.r, protected.r);
        assert_eq!(unprotected.s, protected.s);
        assert_eq!(protected.v, unprotected.v - 27 + 37);
        assert_eq!(unprotected.odd_y_parity(), protected.odd_y_parity());

        let recovery_id = u8::from(unprotected.odd_y_parity());
        assert_eq!(
            recover_address(&message_hash, protected.r, protected.s, recovery_id)?,
            ethwire_test_utils::secret_key::secret_key_to_address(
                "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80"
            )?
        );
        Ok(())
    }

    #[test]
    fn chain_id_overflow() -> anyhow::Result<()> {
        let secret_key = secret_key_from_str(
            "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80",
        )?;

        assert!(matches!(
            SignatureWithRecoveryId::with_chain_id(&B256::ZERO, &secret_key, u64::MAX),
            Err(SignatureError::InvalidRecoveryId(u64::MAX))
        ));
        Ok(())
    }
}
