use ethwire_primitives::{Address, B256, U256};
use ethwire_rlp::{DecodeError, RlpField, RlpValue};
use ethwire_signer::{
    Signature as _, SignatureWithYParity, SignatureWithYParityArgs, recover_address,
    recover_verifying_key, verify_prehash,
};

use crate::RecoveryError;

/// The inputs of public key recovery.
#[derive(Clone, Copy, Debug)]
pub(crate) struct RecoveryParts {
    pub r: U256,
    pub s: U256,
    pub recovery_id: u8,
}

/// Returns whether both scalars of a signature are non-zero.
pub(crate) fn has_nonzero_scalars(r: U256, s: U256) -> bool {
    !r.is_zero() && !s.is_zero()
}

/// Encodes the `[yParity, r, s]` fields of a typed transaction. An unsigned
/// transaction encodes all three as zero.
pub(crate) fn y_parity_fields(signature: Option<&SignatureWithYParity>) -> [RlpValue; 3] {
    match signature {
        Some(signature) => [
            signature.odd_y_parity().to_rlp(),
            signature.r().to_rlp(),
            signature.s().to_rlp(),
        ],
        None => [RlpValue::empty(), RlpValue::empty(), RlpValue::empty()],
    }
}

/// Decodes the `[yParity, r, s]` fields of a typed transaction. Only all-zero
/// fields decode as an unsigned transaction, so that re-encoding reproduces
/// the input.
pub(crate) fn decode_y_parity_fields(
    y_parity: &RlpValue,
    r: &RlpValue,
    s: &RlpValue,
) -> Result<Option<SignatureWithYParity>, DecodeError> {
    let y_parity = bool::from_rlp(y_parity, "yParity")?;
    let r = U256::from_rlp(r, "r")?;
    let s = U256::from_rlp(s, "s")?;

    let signature = (y_parity || !r.is_zero() || !s.is_zero())
        .then(|| SignatureWithYParity::new(SignatureWithYParityArgs { r, s, y_parity }));

    Ok(signature)
}

pub(crate) fn y_parity_recovery_parts(
    signature: Option<&SignatureWithYParity>,
) -> Result<RecoveryParts, RecoveryError> {
    let signature = signature
        .filter(|signature| has_nonzero_scalars(signature.r(), signature.s()))
        .ok_or(RecoveryError::UnsignedTransaction)?;

    Ok(RecoveryParts {
        r: signature.r(),
        s: signature.s(),
        recovery_id: u8::from(signature.odd_y_parity()),
    })
}

pub(crate) fn recover_sender(
    signing_hash: &B256,
    parts: RecoveryParts,
) -> Result<Address, RecoveryError> {
    let sender = recover_address(signing_hash, parts.r, parts.s, parts.recovery_id)?;
    Ok(sender)
}

/// Recovers the public key and checks the signature against it. Any failure
/// is logged and reported as an invalid signature.
pub(crate) fn verify_signature(
    signing_hash: &B256,
    parts: Result<RecoveryParts, RecoveryError>,
) -> bool {
    let result = parts.and_then(|parts| {
        let verifying_key =
            recover_verifying_key(signing_hash, parts.r, parts.s, parts.recovery_id)?;

        Ok(verify_prehash(
            signing_hash,
            parts.r,
            parts.s,
            &verifying_key,
        ))
    });

    match result {
        Ok(is_valid) => is_valid,
        Err(error) => {
            log::debug!("Signature verification of {signing_hash} failed: {error}");
            false
        }
    }
}
