use alloy_primitives::Signature as PrimitiveSignature;
use ethwire_primitives::{Address, B256, U256};
use k256::SecretKey;

use super::{Signature, SignatureError, SignatureWithRecoveryId, recover_address};

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
/// An ECDSA signature with Y-parity.
pub struct SignatureWithYParity(PrimitiveSignature);

/// Arguments for constructing a new `SignatureWithYParity`.
pub struct Args {
    /// The `r` value of the signature.
    pub r: U256,
    /// The `s` value of the signature.
    pub s: U256,
    /// The Y-parity of the signature.
    pub y_parity: bool,
}

impl SignatureWithYParity {
    /// Constructs a new instance from the provided `r`, `s`, and `y_parity`
    /// values.
    pub fn new(args: Args) -> Self {
        let Args { r, s, y_parity } = args;

        Self(PrimitiveSignature::new(r, s, y_parity))
    }

    /// Constructs a new instance by signing a message hash.
    pub fn with_message_hash(
        message_hash: &B256,
        secret_key: &SecretKey,
    ) -> Result<Self, SignatureError> {
        SignatureWithRecoveryId::new(message_hash, secret_key).map(SignatureWithYParity::from)
    }

    /// Recovers the address of the account that signed `message_hash`.
    pub fn recover_address(&self, message_hash: &B256) -> Result<Address, SignatureError> {
        recover_address(
            message_hash,
            self.0.r(),
            self.0.s(),
            u8::from(self.0.v()),
        )
    }

    /// Returns whether the signature has odd Y-parity.
    pub fn odd_y_parity(&self) -> bool {
        self.0.v()
    }

    /// Returns the inner `PrimitiveSignature`.
    pub const fn into_inner(self) -> PrimitiveSignature {
        self.0
    }
}

impl From<SignatureWithRecoveryId> for SignatureWithYParity {
    fn from(value: SignatureWithRecoveryId) -> Self {
        Self(PrimitiveSignature::new(
            value.r,
            value.s,
            value.odd_y_parity(),
        ))
    }
}

impl From<SignatureWithYParity> for PrimitiveSignature {
    fn from(value: SignatureWithYParity) -> Self {
        value.0
    }
}

impl Signature for SignatureWithYParity {
    fn r(&self) -> U256 {
        self.0.r()
    }

    fn s(&self) -> U256 {
        self.0.s()
    }

    fn v(&self) -> u64 {
        u64::from(self.0.v())
    }

    fn y_parity(&self) -> Option<bool> {
        Some(self.0.v())
    }
}
