use ethwire_primitives::{Address, B256, U256, uint};
use k256::{
    SecretKey,
    ecdsa::{
        RecoveryId, Signature as EcdsaSignature, SigningKey, VerifyingKey,
        signature::hazmat::{PrehashSigner, PrehashVerifier},
    },
};

use crate::{SignatureError, public_key_to_address};

/// Half of the secp256k1 group order.
pub const SECP256K1N_HALF: U256 =
    uint!(0x7fffffffffffffffffffffffffffffff5d576e7357a4501ddfe92f46681b20a0_U256);

/// Signs a 32-byte message hash.
///
/// Signing is deterministic (RFC 6979) and the S-value is normalised to the
/// lower half of the curve order. Returns `(r, s, recovery_id)`.
pub fn sign_prehash(
    prehash: &B256,
    secret_key: &SecretKey,
) -> Result<(U256, U256, u8), SignatureError> {
    let signing_key: SigningKey = secret_key.into();
    let (signature, recovery_id) = PrehashSigner::<(EcdsaSignature, RecoveryId)>::sign_prehash(
        &signing_key,
        prehash.as_slice(),
    )?;

    let (r, s) = signature.split_bytes();
    Ok((
        U256::from_be_slice(r.as_slice()),
        U256::from_be_slice(s.as_slice()),
        recovery_id.to_byte(),
    ))
}

/// Recovers the public key that produced the signature `(r, s)` over
/// `prehash`.
pub fn recover_verifying_key(
    prehash: &B256,
    r: U256,
    s: U256,
    recovery_id: u8,
) -> Result<VerifyingKey, SignatureError> {
    if recovery_id > 1 {
        return Err(SignatureError::InvalidRecoveryId(recovery_id.into()));
    }

    if s > SECP256K1N_HALF {
        return Err(SignatureError::HighS);
    }

    let signature = to_ecdsa_signature(r, s)?;
    let recovery_id = RecoveryId::new(recovery_id == 1, false);

    let verifying_key =
        VerifyingKey::recover_from_prehash(prehash.as_slice(), &signature, recovery_id)?;

    Ok(verifying_key)
}

/// Recovers the address of the account that produced the signature `(r, s)`
/// over `prehash`.
pub fn recover_address(
    prehash: &B256,
    r: U256,
    s: U256,
    recovery_id: u8,
) -> Result<Address, SignatureError> {
    let verifying_key = recover_verifying_key(prehash, r, s, recovery_id)?;
    Ok(public_key_to_address(verifying_key.into()))
}

/// Checks whether `(r, s)` is a valid signature of `prehash` by
/// `verifying_key`.
pub fn verify_prehash(prehash: &B256, r: U256, s: U256, verifying_key: &VerifyingKey) -> bool {
    to_ecdsa_signature(r, s).is_ok_and(|signature| {
        verifying_key
            .verify_prehash(prehash.as_slice(), &signature)
            .is_ok()
    })
}

fn to_ecdsa_signature(r: U256, s: U256) -> Result<EcdsaSignature, SignatureError> {
    let bytes = [r.to_be_bytes::<32>(), s.to_be_bytes::<32>()].concat();
    let signature = EcdsaSignature::from_slice(&bytes)?;

    Ok(signature)
}
