//! Fixed-width little-endian primitives.
//!
//! Readers take the whole buffer plus a cursor and advance the cursor only on
//! success. Writers append to a `Vec<u8>`.

use solana_address::Address;

use crate::errors::CodecError;

pub const PUBKEY_LEN: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum IntWidth {
    U8 = 1,
    U16 = 2,
    U32 = 4,
    U64 = 8,
}

impl IntWidth {
    pub const fn len(self) -> usize {
        self as usize
    }

    pub const fn max_value(self) -> u64 {
        match self {
            IntWidth::U8 => u8::MAX as u64,
            IntWidth::U16 => u16::MAX as u64,
            IntWidth::U32 => u32::MAX as u64,
            IntWidth::U64 => u64::MAX,
        }
    }
}

/// Encodes `value` as an unsigned little-endian integer of `width` bytes.
pub fn encode_uint(value: u64, width: IntWidth) -> Result<Vec<u8>, CodecError> {
    let mut out = Vec::with_capacity(width.len());
    write_uint(&mut out, value, width)?;
    Ok(out)
}

/// Decodes an unsigned little-endian integer at `offset`, returning the value
/// and the offset just past it.
pub fn decode_uint(data: &[u8], offset: usize, width: IntWidth) -> Result<(u64, usize), CodecError> {
    let mut cursor = offset;
    let value = read_uint(data, &mut cursor, width)?;
    Ok((value, cursor))
}

pub fn write_uint(out: &mut Vec<u8>, value: u64, width: IntWidth) -> Result<(), CodecError> {
    if value > width.max_value() {
        return Err(CodecError::ValueOutOfRange { value, width });
    }
    out.extend_from_slice(&value.to_le_bytes()[..width.len()]);
    Ok(())
}

pub fn read_uint(data: &[u8], offset: &mut usize, width: IntWidth) -> Result<u64, CodecError> {
    let bytes = take(data, offset, width.len())?;
    let mut widened = [0u8; 8];
    widened[..bytes.len()].copy_from_slice(bytes);
    Ok(u64::from_le_bytes(widened))
}

pub fn read_u8(data: &[u8], offset: &mut usize) -> Result<u8, CodecError> {
    Ok(take(data, offset, 1)?[0])
}

pub fn read_bool(data: &[u8], offset: &mut usize) -> Result<bool, CodecError> {
    let start = *offset;
    match read_u8(data, offset)? {
        0 => Ok(false),
        1 => Ok(true),
        other => {
            *offset = start;
            Err(CodecError::InvalidBool(other))
        }
    }
}

pub fn read_u16(data: &[u8], offset: &mut usize) -> Result<u16, CodecError> {
    let bytes = take(data, offset, 2)?;
    Ok(u16::from_le_bytes([bytes[0], bytes[1]]))
}

pub fn read_u32(data: &[u8], offset: &mut usize) -> Result<u32, CodecError> {
    let bytes = take(data, offset, 4)?;
    Ok(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
}

pub fn read_u64(data: &[u8], offset: &mut usize) -> Result<u64, CodecError> {
    read_uint(data, offset, IntWidth::U64)
}

pub fn read_i64(data: &[u8], offset: &mut usize) -> Result<i64, CodecError> {
    read_u64(data, offset).map(|value| value as i64)
}

/// Reads exactly `N` bytes. A short buffer is a `LengthMismatch`; struct
/// decoders re-attribute it as truncation of the enclosing field.
pub fn read_fixed_bytes<const N: usize>(data: &[u8], offset: &mut usize) -> Result<[u8; N], CodecError> {
    let remaining = data.len().saturating_sub(*offset);
    if remaining < N {
        return Err(CodecError::LengthMismatch {
            expected: N,
            actual: remaining,
        });
    }
    let mut out = [0u8; N];
    out.copy_from_slice(&data[*offset..*offset + N]);
    *offset += N;
    Ok(out)
}

pub fn read_address(data: &[u8], offset: &mut usize) -> Result<Address, CodecError> {
    read_fixed_bytes::<PUBKEY_LEN>(data, offset).map(Address::new_from_array)
}

pub fn write_u8(out: &mut Vec<u8>, value: u8) {
    out.push(value);
}

pub fn write_u16(out: &mut Vec<u8>, value: u16) {
    out.extend_from_slice(&value.to_le_bytes());
}

pub fn write_u32(out: &mut Vec<u8>, value: u32) {
    out.extend_from_slice(&value.to_le_bytes());
}

pub fn write_u64(out: &mut Vec<u8>, value: u64) {
    out.extend_from_slice(&value.to_le_bytes());
}

pub fn write_i64(out: &mut Vec<u8>, value: i64) {
    out.extend_from_slice(&value.to_le_bytes());
}

/// Writes a caller-supplied slice into a field declared as exactly
/// `expected_len` bytes wide.
pub fn write_fixed_bytes(out: &mut Vec<u8>, bytes: &[u8], expected_len: usize) -> Result<(), CodecError> {
    if bytes.len() != expected_len {
        return Err(CodecError::LengthMismatch {
            expected: expected_len,
            actual: bytes.len(),
        });
    }
    out.extend_from_slice(bytes);
    Ok(())
}

/// Builds a fixed array from a slice of exactly `N` bytes.
pub fn fixed_from_slice<const N: usize>(bytes: &[u8]) -> Result<[u8; N], CodecError> {
    bytes.try_into().map_err(|_| CodecError::LengthMismatch {
        expected: N,
        actual: bytes.len(),
    })
}

fn take<'a>(data: &'a [u8], offset: &mut usize, len: usize) -> Result<&'a [u8], CodecError> {
    let remaining = data.len().saturating_sub(*offset);
    if remaining < len {
        return Err(CodecError::TruncatedInput {
            type_name: "",
            field: "",
            needed: len,
            remaining,
        });
    }
    let out = &data[*offset..*offset + len];
    *offset += len;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_each_width_little_endian() {
        assert_eq!(encode_uint(0xAB, IntWidth::U8).unwrap(), vec![0xAB]);
        assert_eq!(encode_uint(250, IntWidth::U16).unwrap(), vec![0xFA, 0x00]);
        assert_eq!(encode_uint(0x0102_0304, IntWidth::U32).unwrap(), vec![4, 3, 2, 1]);
        assert_eq!(
            encode_uint(u64::MAX - 1, IntWidth::U64).unwrap(),
            vec![0xFE, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF]
        );
    }

    #[test]
    fn rejects_values_wider_than_field() {
        assert_eq!(
            encode_uint(256, IntWidth::U8),
            Err(CodecError::ValueOutOfRange { value: 256, width: IntWidth::U8 })
        );
        assert_eq!(
            encode_uint(u64::from(u16::MAX) + 1, IntWidth::U16),
            Err(CodecError::ValueOutOfRange { value: 65_536, width: IntWidth::U16 })
        );
        assert!(encode_uint(u64::from(u32::MAX), IntWidth::U32).is_ok());
        assert!(encode_uint(u64::from(u32::MAX) + 1, IntWidth::U32).is_err());
    }

    #[test]
    fn decode_inverts_encode_at_boundaries() {
        for width in [IntWidth::U8, IntWidth::U16, IntWidth::U32, IntWidth::U64] {
            for value in [0, 1, width.max_value() / 2, width.max_value()] {
                let bytes = encode_uint(value, width).unwrap();
                assert_eq!(bytes.len(), width.len());
                assert_eq!(decode_uint(&bytes, 0, width).unwrap(), (value, width.len()));
            }
        }
    }

    #[test]
    fn decode_at_offset_advances_cursor() {
        let data = [9u8, 0x34, 0x12, 7];
        assert_eq!(decode_uint(&data, 1, IntWidth::U16).unwrap(), (0x1234, 3));
    }

    #[test]
    fn short_integer_read_is_truncation_and_leaves_cursor() {
        let data = [1u8, 2, 3];
        let mut offset = 0;
        let err = read_u32(&data, &mut offset).unwrap_err();
        assert_eq!(
            err,
            CodecError::TruncatedInput { type_name: "", field: "", needed: 4, remaining: 3 }
        );
        assert_eq!(offset, 0);
    }

    #[test]
    fn offset_past_end_does_not_panic() {
        let data = [1u8, 2];
        assert!(decode_uint(&data, 10, IntWidth::U8).is_err());
        let mut offset = 10;
        assert!(read_fixed_bytes::<4>(&data, &mut offset).is_err());
    }

    #[test]
    fn fixed_bytes_report_length_mismatch() {
        let data = [5u8; 31];
        let mut offset = 0;
        assert_eq!(
            read_fixed_bytes::<32>(&data, &mut offset),
            Err(CodecError::LengthMismatch { expected: 32, actual: 31 })
        );

        let mut out = Vec::new();
        assert_eq!(
            write_fixed_bytes(&mut out, &[1, 2, 3], 4),
            Err(CodecError::LengthMismatch { expected: 4, actual: 3 })
        );
        assert!(out.is_empty());
        assert_eq!(fixed_from_slice::<2>(&[1, 2, 3]), Err(CodecError::LengthMismatch { expected: 2, actual: 3 }));
    }

    #[test]
    fn bool_is_strict() {
        let mut offset = 0;
        assert!(read_bool(&[1], &mut offset).unwrap());
        let mut offset = 0;
        assert_eq!(read_bool(&[2], &mut offset), Err(CodecError::InvalidBool(2)));
        assert_eq!(offset, 0);
    }

    #[test]
    fn i64_round_trips_negative_timestamps() {
        let mut out = Vec::new();
        write_i64(&mut out, -1_700_000_000);
        let mut offset = 0;
        assert_eq!(read_i64(&out, &mut offset).unwrap(), -1_700_000_000);
        assert_eq!(offset, 8);
    }
}
