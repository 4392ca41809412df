/// An error that occurred while decoding RLP bytes or fields.
///
/// Structural errors carry the byte offset at which they were detected.
/// Field errors carry the name of the offending field.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// The input ended where another byte was required.
    #[error("unexpected end of input at byte {offset}")]
    InputTooShort {
        /// Offset of the missing byte
        offset: usize,
    },
    /// An item declares more bytes than are left in its enclosing buffer.
    #[error("item at byte {offset} declares {declared} bytes, but only {available} remain")]
    MalformedLength {
        /// Offset of the item's prefix
        offset: usize,
        /// Declared length
        declared: u64,
        /// Number of bytes left in the enclosing buffer
        available: usize,
    },
    /// A multi-byte length is not in its shortest form.
    #[error("item at byte {offset} has a non-canonical length")]
    LeadingZeroInLength {
        /// Offset of the item's prefix
        offset: usize,
    },
    /// A single byte below `0x80` was wrapped in a length prefix.
    #[error("single byte at {offset} must be encoded as itself")]
    NonCanonicalSingleByte {
        /// Offset of the item's prefix
        offset: usize,
    },
    /// Bytes remain after the top-level item.
    #[error("{remaining} trailing bytes after the item ending at byte {offset}")]
    TrailingGarbage {
        /// Offset of the first trailing byte
        offset: usize,
        /// Number of trailing bytes
        remaining: usize,
    },
    /// An integer field has a leading zero byte.
    #[error("`{field}` is not a canonical integer")]
    NonCanonicalInteger {
        /// Name of the field
        field: &'static str,
    },
    /// An integer field is too large for its type.
    #[error("`{field}` does not fit in {bits} bits")]
    IntegerOverflow {
        /// Name of the field
        field: &'static str,
        /// Bit width of the field's type
        bits: usize,
    },
    /// A boolean field is neither 0 nor 1.
    #[error("`{field}` must be 0 or 1, got {value}")]
    InvalidBoolean {
        /// Name of the field
        field: &'static str,
        /// Decoded value
        value: u8,
    },
    /// A fixed-size field has the wrong length.
    #[error("`{field}` must be {expected} bytes long, got {actual}")]
    InvalidFieldLength {
        /// Name of the field
        field: &'static str,
        /// Required length
        expected: usize,
        /// Actual length
        actual: usize,
    },
    /// A byte string was expected, but a list was found.
    #[error("`{field}` must be a byte string, found a list")]
    UnexpectedListField {
        /// Name of the field
        field: &'static str,
    },
    /// A list was expected, but a byte string was found.
    #[error("`{field}` must be a list, found a byte string")]
    UnexpectedBytesField {
        /// Name of the field
        field: &'static str,
    },
    /// A fixed-shape list entry has the wrong number of items.
    #[error("`{field}` entry has {actual} items, expected {expected}")]
    ArityMismatch {
        /// Name of the field
        field: &'static str,
        /// Required number of items
        expected: usize,
        /// Actual number of items
        actual: usize,
    },
}

impl DecodeError {
    /// Shifts the reported byte offset by `delta`.
    ///
    /// Used when the decoded buffer is a suffix of the caller's input, e.g.
    /// after stripping a type prefix.
    pub fn offset_by(self, delta: usize) -> Self {
        match self {
            Self::InputTooShort { offset } => Self::InputTooShort {
                offset: offset + delta,
            },
            Self::MalformedLength {
                offset,
                declared,
                available,
            } => Self::MalformedLength {
                offset: offset + delta,
                declared,
                available,
            },
            Self::LeadingZeroInLength { offset } => Self::LeadingZeroInLength {
                offset: offset + delta,
            },
            Self::NonCanonicalSingleByte { offset } => Self::NonCanonicalSingleByte {
                offset: offset + delta,
            },
            Self::TrailingGarbage { offset, remaining } => Self::TrailingGarbage {
                offset: offset + delta,
                remaining,
            },
            error => error,
        }
    }
}
