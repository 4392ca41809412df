/// Implements serialization, hashing, recovery, and signing for a typed
/// transaction.
///
/// The type must provide `TYPE`, an `unsigned_fields` method that returns its
/// fields in encoding order, and an optional `signature` field.
macro_rules! impl_typed_transaction {
    ($ty:ident) => {
        impl $ty {
            /// Serializes the transaction into its type byte followed by the
            /// RLP list of its fields, including the signature.
            pub fn serialize(&self) -> Vec<u8> {
                let fields: Vec<::ethwire_rlp::RlpValue> = self
                    .unsigned_fields()
                    .into_iter()
                    .chain($crate::signature::y_parity_fields(self.signature.as_ref()))
                    .collect();

                $crate::utils::enveloped(Self::TYPE, &fields)
            }

            /// Computes the hash that is signed by the sender.
            pub fn signing_hash(&self) -> ::ethwire_primitives::B256 {
                let preimage = $crate::utils::enveloped(Self::TYPE, &self.unsigned_fields());
                ::ethwire_primitives::keccak256(preimage)
            }

            /// Computes the hash of the serialized transaction.
            pub fn hash(&self) -> ::ethwire_primitives::B256 {
                ::ethwire_primitives::keccak256(self.serialize())
            }

            /// Returns whether the transaction carries a signature with
            /// non-zero scalars.
            pub fn is_signed(&self) -> bool {
                $crate::signature::y_parity_recovery_parts(self.signature.as_ref()).is_ok()
            }

            /// Recovers the address of the account that signed the
            /// transaction.
            pub fn sender(&self) -> Result<::ethwire_primitives::Address, $crate::RecoveryError> {
                let parts = $crate::signature::y_parity_recovery_parts(self.signature.as_ref())?;
                $crate::signature::recover_sender(&self.signing_hash(), parts)
            }

            /// Returns whether the signature is valid for the signing hash.
            pub fn verify_signature(&self) -> bool {
                $crate::signature::verify_signature(
                    &self.signing_hash(),
                    $crate::signature::y_parity_recovery_parts(self.signature.as_ref()),
                )
            }

            /// Signs the transaction.
            pub fn sign(
                self,
                secret_key: &::ethwire_signer::SecretKey,
            ) -> Result<Self, ::ethwire_signer::SignatureError> {
                let signature = ::ethwire_signer::SignatureWithYParity::with_message_hash(
                    &self.signing_hash(),
                    secret_key,
                )?;

                Ok(Self {
                    signature: Some(signature),
                    ..self
                })
            }
        }
    };
}

mod eip1559;
mod eip2930;
mod eip4844;
mod eip7702;
mod legacy;

pub use self::{
    eip1559::Eip1559, eip2930::Eip2930, eip4844::Eip4844, eip7702::Eip7702, legacy::Legacy,
};
