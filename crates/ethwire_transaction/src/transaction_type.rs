use std::fmt;

use alloy_rlp::EMPTY_LIST_CODE;

use crate::DeserializeError;

/// The type of a transaction, as encoded in the first byte of its wire
/// representation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum TransactionType {
    /// Legacy transaction
    Legacy = 0,
    /// EIP-2930 transaction
    Eip2930 = 1,
    /// EIP-1559 transaction
    Eip1559 = 2,
    /// EIP-4844 transaction
    Eip4844 = 3,
    /// EIP-7702 transaction
    Eip7702 = 4,
}

impl TransactionType {
    /// Detects the type of the transaction encoded in `bytes`.
    ///
    /// Legacy transactions have no type byte, so any first byte in the RLP
    /// list prefix range identifies them.
    pub fn detect(bytes: &[u8]) -> Result<Self, DeserializeError> {
        let first = *bytes.first().ok_or(DeserializeError::EmptyInput)?;
        if first >= EMPTY_LIST_CODE {
            return Ok(Self::Legacy);
        }

        match Self::try_from(first) {
            Ok(Self::Legacy) | Err(_) => Err(DeserializeError::UnknownTransactionType(first)),
            Ok(transaction_type) => Ok(transaction_type),
        }
    }

    /// Returns whether the wire representation starts with a type byte.
    pub const fn is_typed(&self) -> bool {
        !matches!(self, Self::Legacy)
    }

    /// Returns the type byte that prefixes the wire representation, if any.
    pub const fn type_byte(&self) -> Option<u8> {
        if self.is_typed() {
            Some(*self as u8)
        } else {
            None
        }
    }

    /// Returns whether the transaction carries an access list.
    pub const fn supports_access_list(&self) -> bool {
        self.is_typed()
    }

    /// Returns whether the transaction uses EIP-1559 dynamic fees.
    pub const fn is_eip1559(&self) -> bool {
        matches!(self, Self::Eip1559 | Self::Eip4844 | Self::Eip7702)
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Legacy => "legacy",
            Self::Eip2930 => "EIP-2930",
            Self::Eip1559 => "EIP-1559",
            Self::Eip4844 => "EIP-4844",
            Self::Eip7702 => "EIP-7702",
        };

        f.write_str(name)
    }
}

impl From<TransactionType> for u8 {
    fn from(value: TransactionType) -> Self {
        value as u8
    }
}

impl TryFrom<u8> for TransactionType {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Legacy),
            1 => Ok(Self::Eip2930),
            2 => Ok(Self::Eip1559),
            3 => Ok(Self::Eip4844),
            4 => Ok(Self::Eip7702),
            value => Err(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_legacy_by_list_prefix() {
        for first in 0xc0..=u8::MAX {
            assert_eq!(TransactionType::detect(&[first]), Ok(TransactionType::Legacy));
        }
    }

    #[test]
    fn detect_typed() {
        assert_eq!(TransactionType::detect(&[0x01, 0xc0]), Ok(TransactionType::Eip2930));
        assert_eq!(TransactionType::detect(&[0x02]), Ok(TransactionType::Eip1559));
        assert_eq!(TransactionType::detect(&[0x03]), Ok(TransactionType::Eip4844));
        assert_eq!(TransactionType::detect(&[0x04]), Ok(TransactionType::Eip7702));
    }

    #[test]
    fn detect_rejects_unknown_types() {
        assert_eq!(TransactionType::detect(&[]), Err(DeserializeError::EmptyInput));

        for first in [0x00, 0x05, 0x7f, 0xbf] {
            assert_eq!(
                TransactionType::detect(&[first]),
                Err(DeserializeError::UnknownTransactionType(first))
            );
        }
    }

    #[test]
    fn type_byte() {
        assert_eq!(TransactionType::Legacy.type_byte(), None);
        assert_eq!(TransactionType::Eip7702.type_byte(), Some(4));
        assert_eq!(u8::from(TransactionType::Eip4844), 3);
        assert_eq!(TransactionType::try_from(9), Err(9));
    }

    #[test]
    fn capabilities() {
        assert!(!TransactionType::Legacy.supports_access_list());
        assert!(TransactionType::Eip2930.supports_access_list());
        assert!(!TransactionType::Eip2930.is_eip1559());
        assert!(TransactionType::Eip4844.is_eip1559());
        assert!(TransactionType::Eip7702.is_eip1559());
    }

    #[test]
    fn display() {
        assert_eq!(TransactionType::Legacy.to_string(), "legacy");
        assert_eq!(TransactionType::Eip1559.to_string(), "EIP-1559");
    }
}
