use ethwire_rlp::{DecodeError, RlpValue, encode_list};

use crate::{DeserializeError, TransactionType};

/// RLP-encodes the provided fields as a list and prepends it with the
/// provided ID.
pub fn enveloped(id: u8, fields: &[RlpValue]) -> Vec<u8> {
    envelop_bytes(id, &encode_list(fields))
}

/// Prepends the provided (RLP-encoded) bytes with the provided ID.
pub fn envelop_bytes(id: u8, bytes: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(1 + bytes.len());
    out.push(id);
    out.extend_from_slice(bytes);

    out
}

/// Splits a decoded transaction into exactly `N` fields.
pub(crate) fn transaction_fields<const N: usize>(
    value: RlpValue,
    transaction_type: TransactionType,
) -> Result<[RlpValue; N], DeserializeError> {
    let RlpValue::List(fields) = value else {
        return Err(DecodeError::UnexpectedBytesField {
            field: "transaction",
        }
        .into());
    };

    <[RlpValue; N]>::try_from(fields).map_err(|fields| DeserializeError::WrongFieldCount {
        transaction_type,
        expected: N,
        actual: fields.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelop() {
        assert_eq!(envelop_bytes(0x02, &[0xc0]), [0x02, 0xc0]);
        assert_eq!(enveloped(0x01, &[RlpValue::empty()]), [0x01, 0xc1, 0x80]);
    }

    #[test]
    fn field_count_must_match() {
        let value = RlpValue::List(vec![RlpValue::empty(); 3]);

        assert!(transaction_fields::<3>(value.clone(), TransactionType::Eip1559).is_ok());
        assert_eq!(
            transaction_fields::<4>(value, TransactionType::Eip1559),
            Err(DeserializeError::WrongFieldCount {
                transaction_type: TransactionType::Eip1559,
                expected: 4,
                actual: 3,
            })
        );
    }

    #[test]
    fn transaction_must_be_a_list() {
        assert_eq!(
            transaction_fields::<3>(RlpValue::empty(), TransactionType::Legacy),
            Err(DeserializeError::Rlp(DecodeError::UnexpectedBytesField {
                field: "transaction"
            }))
        );
    }
}
