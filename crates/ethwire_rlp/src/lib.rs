//! Recursive Length Prefix (RLP) codec.
//!
//! Values are modelled as a tree of byte strings and lists ([`RlpValue`]).
//! Encoding follows the canonical rules of the Ethereum Yellow Paper, and the
//! decoder rejects every non-canonical or truncated input instead of
//! normalising it. Typed fields are mapped to and from the tree through the
//! [`RlpField`] trait.

mod decode;
mod error;
pub mod field;
mod value;

pub use self::{
    decode::{decode, decode_exact},
    error::DecodeError,
    field::RlpField,
    value::{RlpValue, encode, encode_list},
};
