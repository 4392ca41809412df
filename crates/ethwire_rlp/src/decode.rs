use alloy_rlp::{EMPTY_LIST_CODE, EMPTY_STRING_CODE};
use ethwire_primitives::Bytes;

use crate::{DecodeError, RlpValue};

/// Largest payload length that fits in a single-byte prefix.
const MAX_SHORT_LENGTH: u64 = 55;

/// Decodes the first RLP item of `input`, returning it together with the
/// unread remainder.
pub fn decode(input: &[u8]) -> Result<(RlpValue, &[u8]), DecodeError> {
    let mut decoder = Decoder { input, offset: 0 };
    let value = decoder.decode_item()?;

    let remaining = input.get(decoder.offset..).unwrap_or_default();
    Ok((value, remaining))
}

/// Decodes `input` as exactly one RLP item.
pub fn decode_exact(input: &[u8]) -> Result<RlpValue, DecodeError> {
    let (value, remaining) = decode(input)?;
    if remaining.is_empty() {
        Ok(value)
    } else {
        Err(DecodeError::TrailingGarbage {
            offset: input.len() - remaining.len(),
            remaining: remaining.len(),
        })
    }
}

enum Header {
    Bytes(Bytes),
    List { end: usize },
}

/// A list whose items are still being decoded.
struct Frame {
    items: Vec<RlpValue>,
    end: usize,
}

struct Decoder<'input> {
    input: &'input [u8],
    offset: usize,
}

impl<'input> Decoder<'input> {
    /// Decodes one item using an explicit stack of open lists.
    fn decode_item(&mut self) -> Result<RlpValue, DecodeError> {
        let mut stack: Vec<Frame> = Vec::new();

        loop {
            let limit = stack.last().map_or(self.input.len(), |frame| frame.end);

            let mut value = match self.read_header(limit)? {
                Header::Bytes(bytes) => RlpValue::Bytes(bytes),
                Header::List { end } if end == self.offset => RlpValue::List(Vec::new()),
                Header::List { end } => {
                    // Each open list holds at least one more byte, so the
                    // stack never outgrows the input.
                    stack.push(Frame {
                        items: Vec::new(),
                        end,
                    });
                    continue;
                }
            };

            // Close every list that ends with this item.
            loop {
                let Some(mut frame) = stack.pop() else {
                    return Ok(value);
                };

                frame.items.push(value);
                if self.offset < frame.end {
                    stack.push(frame);
                    break;
                }

                value = RlpValue::List(frame.items);
            }
        }
    }

    fn read_header(&mut self, limit: usize) -> Result<Header, DecodeError> {
        let start = self.offset;
        let prefix = self.read_byte(limit)?;

        match prefix {
            0..EMPTY_STRING_CODE => Ok(Header::Bytes(Bytes::copy_from_slice(&[prefix]))),
            EMPTY_STRING_CODE..=0xb7 => {
                let length = u64::from(prefix - EMPTY_STRING_CODE);
                let payload = self.read_payload(start, length, limit)?;
                if matches!(payload, [byte] if *byte < EMPTY_STRING_CODE) {
                    return Err(DecodeError::NonCanonicalSingleByte { offset: start });
                }

                Ok(Header::Bytes(Bytes::copy_from_slice(payload)))
            }
            0xb8..EMPTY_LIST_CODE => {
                let length = self.read_long_length(start, prefix - 0xb7, limit)?;
                let payload = self.read_payload(start, length, limit)?;

                Ok(Header::Bytes(Bytes::copy_from_slice(payload)))
            }
            EMPTY_LIST_CODE..=0xf7 => {
                let length = u64::from(prefix - EMPTY_LIST_CODE);
                self.list_header(start, length, limit)
            }
            0xf8..=u8::MAX => {
                let length = self.read_long_length(start, prefix - 0xf7, limit)?;
                self.list_header(start, length, limit)
            }
        }
    }

    fn read_byte(&mut self, limit: usize) -> Result<u8, DecodeError> {
        let byte = self
            .input
            .get(self.offset)
            .copied()
            .filter(|_| self.offset < limit)
            .ok_or(DecodeError::InputTooShort {
                offset: self.offset,
            })?;

        self.offset += 1;
        Ok(byte)
    }

    /// Reads the big-endian length that follows a long-form prefix.
    fn read_long_length(
        &mut self,
        start: usize,
        length_of_length: u8,
        limit: usize,
    ) -> Result<u64, DecodeError> {
        let bytes = self.read_payload(start, u64::from(length_of_length), limit)?;
        if bytes.first() == Some(&0) {
            return Err(DecodeError::LeadingZeroInLength { offset: start });
        }

        // At most 8 bytes, so the length always fits.
        let length = bytes
            .iter()
            .fold(0u64, |length, byte| (length << 8) | u64::from(*byte));

        if length <= MAX_SHORT_LENGTH {
            return Err(DecodeError::LeadingZeroInLength { offset: start });
        }

        Ok(length)
    }

    fn read_payload(
        &mut self,
        start: usize,
        length: u64,
        limit: usize,
    ) -> Result<&'input [u8], DecodeError> {
        let length = self.check_length(start, length, limit)?;
        let payload = self
            .input
            .get(self.offset..self.offset + length)
            .ok_or(DecodeError::InputTooShort {
                offset: self.offset,
            })?;

        self.offset += length;
        Ok(payload)
    }

    fn list_header(&self, start: usize, length: u64, limit: usize) -> Result<Header, DecodeError> {
        let length = self.check_length(start, length, limit)?;
        Ok(Header::List {
            end: self.offset + length,
        })
    }

    /// Ensures that `length` bytes are available before `limit`.
    fn check_length(&self, start: usize, length: u64, limit: usize) -> Result<usize, DecodeError> {
        let available = limit.saturating_sub(self.offset);

        usize::try_from(length)
            .ok()
            .filter(|length| *length <= available)
            .ok_or(DecodeError::MalformedLength {
                offset: start,
                declared: length,
                available,
            })
    }
}
