//! Primitive types shared by the ethwire crates.

pub use alloy_primitives::{
    Address, B256, Bytes, TxKind, U256, address, b256, bytes, hex, keccak256, uint,
};

/// Keccak-256 hash of the empty byte sequence.
pub const KECCAK_EMPTY: B256 =
    b256!("0xc5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470");
