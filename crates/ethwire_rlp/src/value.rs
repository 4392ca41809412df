use alloy_rlp::{BufMut, Encodable, Header};
use ethwire_primitives::Bytes;

/// A node of an RLP tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RlpValue {
    /// A byte string
    Bytes(Bytes),
    /// An ordered list of items
    List(Vec<RlpValue>),
}

impl RlpValue {
    /// Constructs the empty byte string, which also encodes zero and absent
    /// values.
    pub const fn empty() -> Self {
        Self::Bytes(Bytes::new())
    }

    /// Returns the byte string, if this is one.
    pub fn as_bytes(&self) -> Option<&Bytes> {
        match self {
            Self::Bytes(bytes) => Some(bytes),
            Self::List(_) => None,
        }
    }

    /// Returns the list items, if this is a list.
    pub fn as_list(&self) -> Option<&[RlpValue]> {
        match self {
            Self::Bytes(_) => None,
            Self::List(items) => Some(items),
        }
    }

    /// Returns whether this is a list.
    pub fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }
}

impl From<Bytes> for RlpValue {
    fn from(value: Bytes) -> Self {
        Self::Bytes(value)
    }
}

impl From<Vec<RlpValue>> for RlpValue {
    fn from(value: Vec<RlpValue>) -> Self {
        Self::List(value)
    }
}

impl Encodable for RlpValue {
    fn encode(&self, out: &mut dyn BufMut) {
        match self {
            Self::Bytes(bytes) => <[u8] as Encodable>::encode(bytes, out),
            Self::List(items) => encode_list_to(items, out),
        }
    }

    fn length(&self) -> usize {
        match self {
            Self::Bytes(bytes) => <[u8] as Encodable>::length(bytes),
            Self::List(items) => {
                let payload_length = list_payload_length(items);
                payload_length + alloy_rlp::length_of_length(payload_length)
            }
        }
    }
}

/// Encodes a value into its canonical RLP bytes.
pub fn encode(value: &RlpValue) -> Vec<u8> {
    let mut out = Vec::with_capacity(value.length());
    value.encode(&mut out);
    out
}

/// Encodes `items` as an RLP list without wrapping them in an [`RlpValue`].
pub fn encode_list(items: &[RlpValue]) -> Vec<u8> {
    let payload_length = list_payload_length(items);
    let mut out = Vec::with_capacity(payload_length + alloy_rlp::length_of_length(payload_length));
    encode_list_to(items, &mut out);
    out
}

fn encode_list_to(items: &[RlpValue], out: &mut dyn BufMut) {
    Header {
        list: true,
        payload_length: list_payload_length(items),
    }
    .encode(out);

    for item in items {
        item.encode(out);
    }
}

fn list_payload_length(items: &[RlpValue]) -> usize {
    items.iter().map(Encodable::length).sum()
}
