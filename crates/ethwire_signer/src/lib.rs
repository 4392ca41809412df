// Part of this code was adapted from ethers-rs and is distributed under their
// licenss:
// - https://github.com/gakonst/ethers-rs/blob/cba6f071aedafb766e82e4c2f469ed5e4638337d/LICENSE-APACHE
// - https://github.com/gakonst/ethers-rs/blob/cba6f071aedafb766e82e4c2f469ed5e4638337d/LICENSE-MIT
// For the original context see: https://github.com/gakonst/ethers-rs/blob/cba6f071aedafb766e82e4c2f469ed5e4638337d/ethers-core/src/types/signature.rs

//! Ethereum signature types and the secp256k1 operations behind them.

mod ecdsa;
mod recovery_id;
mod y_parity;

use ethwire_primitives::{Address, B256, U256};
pub use k256::{SecretKey, ecdsa::VerifyingKey};
use k256::{FieldBytes, PublicKey, elliptic_curve::sec1::ToEncodedPoint};
use sha3::{Digest, Keccak256};

pub use self::{
    ecdsa::{
        SECP256K1N_HALF, recover_address, recover_verifying_key, sign_prehash, verify_prehash,
    },
    recovery_id::SignatureWithRecoveryId,
    y_parity::{Args as SignatureWithYParityArgs, SignatureWithYParity},
};

/// An error involving a signature.
#[derive(Debug, thiserror::Error)]
pub enum SignatureError {
    /// Invalid secret key.
    #[error("Expected 32 byte secret key")]
    InvalidSecretKeyLength,
    /// When parsing a secret key from string to hex
    #[error("Invalid hex")]
    InvalidSecretKeyHex,
    /// The recovery id is neither 0 nor 1.
    #[error("Invalid recovery id: {0}")]
    InvalidRecoveryId(u64),
    /// The S-value lies in the upper half of the curve order, which EIP-2
    /// forbids.
    #[error("Signature S-value is too high")]
    HighS,
    /// ECDSA error
    #[error(transparent)]
    ECDSAError(#[from] k256::ecdsa::signature::Error),
    /// Elliptic curve error
    #[error(transparent)]
    EllipticCurveError(#[from] k256::elliptic_curve::Error),
}

/// Trait for an ECDSA signature.
pub trait Signature {
    /// Returns the signature's R-value.
    fn r(&self) -> U256;

    /// Returns the signature's S-value.
    fn s(&self) -> U256;

    /// Returns the signature's V-value.
    fn v(&self) -> u64;

    /// Signals whether the signature internally uses a boolean Y-parity instead
    /// of the V-value.
    ///
    /// This applies to EIP-2930 and later transaction signatures.
    fn y_parity(&self) -> Option<bool>;
}

/// Converts a [`PublicKey`] to an [`Address`].
pub fn public_key_to_address(public_key: PublicKey) -> Address {
    let public_key = public_key.to_encoded_point(/* compress = */ false);
    // First byte is header value
    let pk_bytes = public_key
        .as_bytes()
        .split_first()
        .map_or(&[][..], |(_header, pk_bytes)| pk_bytes);
    let hash: [u8; 32] = Keccak256::digest(pk_bytes).into();
    // Only take the lower 160 bits of the hash
    Address::from_word(B256::from(hash))
}

/// It's dangerous to represent secret keys as native string types, because the
/// native string types have debug, display and serialization implementations
/// that can result in the secrets accidentally leaking to logs. It's marked as
/// deprecated, because it should be only created in exactly one place in the
/// production code.
#[deprecated]
pub struct DangerousSecretKeyStr<'a>(pub &'a str);

// It's marked as deprecated to be thoughtful abouts its usage.
#[allow(deprecated)]
/// Converts a hex string to a secret key.
pub fn secret_key_from_str(
    secret_key: DangerousSecretKeyStr<'_>,
) -> Result<SecretKey, SignatureError> {
    #[allow(deprecated)]
    let str_key = secret_key.0;
    let secret_key = if let Some(stripped) = str_key.strip_prefix("0x") {
        hex::decode(stripped)
    } else {
        hex::decode(str_key)
    }
    // Hex error can leak character, so use opaque one.
    .map_err(|_err| SignatureError::InvalidSecretKeyHex)?;
    let secret_key = FieldBytes::from_exact_iter(secret_key.into_iter())
        .ok_or_else(|| SignatureError::InvalidSecretKeyLength)?;
    SecretKey::from_bytes(&secret_key).map_err(SignatureError::EllipticCurveError)
}

#[cfg(test)]
mod tests {
    use ethwire_primitives::address;
    use ethwire_test_utils::secret_key::{
        secret_key_from_str, secret_key_to_address, secret_key_to_str,
    };

    use super::*;

    #[test]
    fn test_secret_key_to_address() {
        // Account #0 of the default development mnemonic
        let actual_address = secret_key_to_address(
            "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80",
        )
        .expect("should derive address");

        assert_eq!(
            actual_address,
            address!("0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266")
        );
    }

    #[test]
    fn test_from_str_to_str_secret_key() {
        let secret_key_str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
        let secret_key = secret_key_from_str(secret_key_str).unwrap();
        let secret_key_str_result = secret_key_to_str(&secret_key);
        assert_eq!(secret_key_str, secret_key_str_result);
    }

    #[test]
    fn secret_key_errors() {
        #[allow(deprecated)]
        fn parse(secret_key: &str) -> Result<SecretKey, SignatureError> {
            super::secret_key_from_str(DangerousSecretKeyStr(secret_key))
        }

        assert!(matches!(
            parse("0xzz"),
            Err(SignatureError::InvalidSecretKeyHex)
        ));
        assert!(matches!(
            parse("0xac09"),
            Err(SignatureError::InvalidSecretKeyLength)
        ));
        assert!(matches!(
            parse(&format!("0x{}", "00".repeat(32))),
            Err(SignatureError::EllipticCurveError(_))
        ));
    }
}
