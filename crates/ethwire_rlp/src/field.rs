//! Canonical codecs for typed fields.
//!
//! Integers are encoded as minimal big-endian byte strings, where zero is the
//! empty string. Addresses and hashes are encoded as their raw bytes. A
//! contract creation target is the empty string, which is distinct from the
//! 20-byte zero address.

use ethwire_primitives::{Address, B256, Bytes, TxKind, U256};

use crate::{DecodeError, RlpValue};

/// A value with a canonical representation as an RLP item.
pub trait RlpField: Sized {
    /// Converts the value into an RLP item.
    fn to_rlp(&self) -> RlpValue;

    /// Parses a value from an RLP item. The `field` name is reported in
    /// errors.
    fn from_rlp(value: &RlpValue, field: &'static str) -> Result<Self, DecodeError>;
}

/// Returns the payload of a byte string item.
pub fn expect_bytes<'value>(
    value: &'value RlpValue,
    field: &'static str,
) -> Result<&'value Bytes, DecodeError> {
    value
        .as_bytes()
        .ok_or(DecodeError::UnexpectedListField { field })
}

/// Returns the items of a list item.
pub fn expect_list<'value>(
    value: &'value RlpValue,
    field: &'static str,
) -> Result<&'value [RlpValue], DecodeError> {
    value
        .as_list()
        .ok_or(DecodeError::UnexpectedBytesField { field })
}

/// Returns the items of a list item with exactly `N` entries.
pub fn expect_tuple<'value, const N: usize>(
    value: &'value RlpValue,
    field: &'static str,
) -> Result<&'value [RlpValue; N], DecodeError> {
    let items = expect_list(value, field)?;

    <&[RlpValue; N]>::try_from(items).map_err(|_error| DecodeError::ArityMismatch {
        field,
        expected: N,
        actual: items.len(),
    })
}

/// Encodes the big-endian bytes of an unsigned integer in their minimal form.
pub fn encode_compact_uint(be_bytes: &[u8]) -> RlpValue {
    let start = be_bytes
        .iter()
        .position(|byte| *byte != 0)
        .unwrap_or(be_bytes.len());

    RlpValue::Bytes(Bytes::copy_from_slice(
        be_bytes.get(start..).unwrap_or_default(),
    ))
}

/// Returns the big-endian bytes of a canonical integer of at most `max_len`
/// bytes.
pub fn decode_compact_uint<'value>(
    value: &'value RlpValue,
    field: &'static str,
    max_len: usize,
) -> Result<&'value [u8], DecodeError> {
    let bytes = expect_bytes(value, field)?;
    if bytes.first() == Some(&0) {
        return Err(DecodeError::NonCanonicalInteger { field });
    }

    if bytes.len() > max_len {
        return Err(DecodeError::IntegerOverflow {
            field,
            bits: max_len * 8,
        });
    }

    Ok(bytes)
}

fn fixed_bytes<const N: usize>(
    value: &RlpValue,
    field: &'static str,
) -> Result<[u8; N], DecodeError> {
    let bytes = expect_bytes(value, field)?;

    <[u8; N]>::try_from(bytes.as_ref()).map_err(|_error| DecodeError::InvalidFieldLength {
        field,
        expected: N,
        actual: bytes.len(),
    })
}

impl RlpField for u8 {
    fn to_rlp(&self) -> RlpValue {
        encode_compact_uint(&[*self])
    }

    fn from_rlp(value: &RlpValue, field: &'static str) -> Result<Self, DecodeError> {
        let bytes = decode_compact_uint(value, field, 1)?;
        Ok(bytes.first().copied().unwrap_or_default())
    }
}

macro_rules! impl_rlp_field_for_uint {
    ($($ty:ty),+) => {
        $(
            impl RlpField for $ty {
                fn to_rlp(&self) -> RlpValue {
                    encode_compact_uint(&self.to_be_bytes())
                }

                fn from_rlp(value: &RlpValue, field: &'static str) -> Result<Self, DecodeError> {
                    let bytes = decode_compact_uint(value, field, core::mem::size_of::<$ty>())?;
                    Ok(bytes
                        .iter()
                        .fold(0, |value: $ty, byte| (value << 8) | <$ty>::from(*byte)))
                }
            }
        )+
    };
}

impl_rlp_field_for_uint!(u64, u128);

impl RlpField for U256 {
    fn to_rlp(&self) -> RlpValue {
        encode_compact_uint(&self.to_be_bytes::<32>())
    }

    fn from_rlp(value: &RlpValue, field: &'static str) -> Result<Self, DecodeError> {
        let bytes = decode_compact_uint(value, field, 32)?;
        U256::try_from_be_slice(bytes).ok_or(DecodeError::IntegerOverflow { field, bits: 256 })
    }
}

impl RlpField for bool {
    fn to_rlp(&self) -> RlpValue {
        u8::from(*self).to_rlp()
    }

    fn from_rlp(value: &RlpValue, field: &'static str) -> Result<Self, DecodeError> {
        match u8::from_rlp(value, field)? {
            0 => Ok(false),
            1 => Ok(true),
            value => Err(DecodeError::InvalidBoolean { field, value }),
        }
    }
}

impl RlpField for Address {
    fn to_rlp(&self) -> RlpValue {
        RlpValue::Bytes(Bytes::copy_from_slice(self.as_slice()))
    }

    fn from_rlp(value: &RlpValue, field: &'static str) -> Result<Self, DecodeError> {
        fixed_bytes::<20>(value, field).map(Address::from)
    }
}

impl RlpField for B256 {
    fn to_rlp(&self) -> RlpValue {
        RlpValue::Bytes(Bytes::copy_from_slice(self.as_slice()))
    }

    fn from_rlp(value: &RlpValue, field: &'static str) -> Result<Self, DecodeError> {
        fixed_bytes::<32>(value, field).map(B256::from)
    }
}

impl RlpField for TxKind {
    fn to_rlp(&self) -> RlpValue {
        match self {
            TxKind::Create => RlpValue::empty(),
            TxKind::Call(address) => address.to_rlp(),
        }
    }

    fn from_rlp(value: &RlpValue, field: &'static str) -> Result<Self, DecodeError> {
        if expect_bytes(value, field)?.is_empty() {
            Ok(TxKind::Create)
        } else {
            Address::from_rlp(value, field).map(TxKind::Call)
        }
    }
}

impl RlpField for Bytes {
    fn to_rlp(&self) -> RlpValue {
        RlpValue::Bytes(self.clone())
    }

    fn from_rlp(value: &RlpValue, field: &'static str) -> Result<Self, DecodeError> {
        expect_bytes(value, field).cloned()
    }
}

impl<T: RlpField> RlpField for Vec<T> {
    fn to_rlp(&self) -> RlpValue {
        RlpValue::List(self.iter().map(RlpField::to_rlp).collect())
    }

    fn from_rlp(value: &RlpValue, field: &'static str) -> Result<Self, DecodeError> {
        expect_list(value, field)?
            .iter()
            .map(|item| T::from_rlp(item, field))
            .collect()
    }
}
