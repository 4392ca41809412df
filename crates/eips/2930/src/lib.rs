//! Access lists, as introduced by EIP-2930.

use std::ops::Deref;

use ethwire_primitives::{Address, B256};
use ethwire_rlp::{DecodeError, RlpField, RlpValue, field::expect_tuple};

/// Number of RLP items in an access list entry.
pub const ITEM_ARITY: usize = 2;

/// An account and the storage slots a transaction plans to access.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct AccessListItem {
    // The order of these fields determines encoding order.
    /// Accessed account
    pub address: Address,
    /// Accessed storage slots of the account
    pub storage_keys: Vec<B256>,
}

impl RlpField for AccessListItem {
    fn to_rlp(&self) -> RlpValue {
        RlpValue::List(vec![self.address.to_rlp(), self.storage_keys.to_rlp()])
    }

    fn from_rlp(value: &RlpValue, field: &'static str) -> Result<Self, DecodeError> {
        let [address, storage_keys] = expect_tuple::<ITEM_ARITY>(value, field)?;

        Ok(Self {
            address: Address::from_rlp(address, "address")?,
            storage_keys: Vec::from_rlp(storage_keys, "storageKeys")?,
        })
    }
}

/// An ordered list of accessed accounts and storage slots.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct AccessList(pub Vec<AccessListItem>);

impl AccessList {
    /// Returns the total number of storage keys across all entries.
    pub fn storage_key_count(&self) -> usize {
        self.0.iter().map(|item| item.storage_keys.len()).sum()
    }

    /// Returns an iterator over the accessed addresses, in list order.
    pub fn addresses(&self) -> impl Iterator<Item = &Address> {
        self.0.iter().map(|item| &item.address)
    }

    /// Consumes the list, returning its entries.
    pub fn into_inner(self) -> Vec<AccessListItem> {
        self.0
    }
}

impl Deref for AccessList {
    type Target = [AccessListItem];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<AccessListItem>> for AccessList {
    fn from(value: Vec<AccessListItem>) -> Self {
        Self(value)
    }
}

impl FromIterator<AccessListItem> for AccessList {
    fn from_iter<T: IntoIterator<Item = AccessListItem>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl RlpField for AccessList {
    fn to_rlp(&self) -> RlpValue {
        self.0.to_rlp()
    }

    fn from_rlp(value: &RlpValue, field: &'static str) -> Result<Self, DecodeError> {
        Vec::from_rlp(value, field).map(Self)
    }
}
