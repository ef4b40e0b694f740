//! # Bit-Field Codec
//!
//! Packs and unpacks unsigned fields of arbitrary width at arbitrary bit
//! offsets inside a byte stream.
//!
//! ## Bit Order
//!
//! ```text
//! stream bit n  ->  byte n / 8, bit n % 8 (LSB = bit 0)
//!
//!   byte 0              byte 1
//! [7 6 5 4 3 2 1 0]  [15 14 13 12 11 10 9 8]
//! ```
//!
//! A field's least-significant bit lands on its lowest stream bit, so a
//! field written at offset 3 with width 17 occupies stream bits 3..20.
//!
//! Every instruction layout in this crate goes through [`pack`] and
//! [`unpack`]; nothing else shifts operand bits by hand.

use thiserror::Error;

/// Largest field the codec handles in a single call
pub const MAX_FIELD_BITS: u32 = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RangeError {
    #[error("Invalid field width: {0} (valid range: 1-64)")]
    InvalidWidth(u32),

    #[error("Bit field [{bit_offset}, {bit_offset}+{width}) exceeds stream of {stream_bits} bits")]
    OutOfBounds {
        bit_offset: usize,
        width: u32,
        stream_bits: usize,
    },

    #[error("Value {value} does not fit in {width} bits")]
    ValueTooWide { value: u64, width: u32 },
}

/// Largest value representable in `width` bits
#[inline]
pub const fn max_value(width: u32) -> u64 {
    if width >= 64 {
        u64::MAX
    } else {
        (1u64 << width) - 1
    }
}

/// Check whether `value` fits in `width` bits
#[inline]
pub const fn fits(value: u64, width: u32) -> bool {
    value <= max_value(width)
}

/// Number of whole bytes needed to hold `bits` bits
#[inline]
pub const fn bytes_for_bits(bits: usize) -> usize {
    (bits + 7) / 8
}

fn check_span(stream_len: usize, bit_offset: usize, width: u32) -> Result<(), RangeError> {
    if width == 0 || width > MAX_FIELD_BITS {
        return Err(RangeError::InvalidWidth(width));
    }
    let stream_bits = stream_len * 8;
    let end = bit_offset.checked_add(width as usize);
    match end {
        Some(end) if end <= stream_bits => Ok(()),
        _ => Err(RangeError::OutOfBounds {
            bit_offset,
            width,
            stream_bits,
        }),
    }
}

/// Write `value` into `stream` at `bit_offset`, `width` bits wide.
///
/// Bits outside `[bit_offset, bit_offset + width)` are left untouched.
pub fn pack(stream: &mut [u8], bit_offset: usize, width: u32, value: u64) -> Result<(), RangeError> {
    check_span(stream.len(), bit_offset, width)?;
    if !fits(value, width) {
        return Err(RangeError::ValueTooWide { value, width });
    }

    let mut pos = bit_offset;
    let mut remaining = width;
    let mut rest = value;

    while remaining > 0 {
        let byte = pos / 8;
        let shift = (pos % 8) as u32;
        let take = remaining.min(8 - shift);
        let mask = (max_value(take) as u8) << shift;

        stream[byte] = (stream[byte] & !mask) | (((rest as u8) << shift) & mask);

        rest >>= take;
        pos += take as usize;
        remaining -= take;
    }

    Ok(())
}

/// Read a `width`-bit field from `stream` at `bit_offset`.
pub fn unpack(stream: &[u8], bit_offset: usize, width: u32) -> Result<u64, RangeError> {
    check_span(stream.len(), bit_offset, width)?;

    let mut pos = bit_offset;
    let mut read = 0u32;
    let mut value = 0u64;

    while read < width {
        let byte = pos / 8;
        let shift = (pos % 8) as u32;
        let take = (width - read).min(8 - shift);
        let bits = (stream[byte] >> shift) as u64 & max_value(take);

        value |= bits << read;
        pos += take as usize;
        read += take;
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_within_single_byte() {
        let mut buf = [0u8; 1];
        pack(&mut buf, 0, 3, 0b010).unwrap();
        assert_eq!(buf, [0b0000_0010]);

        pack(&mut buf, 3, 5, 0b10100).unwrap();
        assert_eq!(buf, [0xA2]);
    }

    #[test]
    fn test_pack_across_byte_boundary() {
        let mut buf = [0u8; 3];
        pack(&mut buf, 3, 17, 20).unwrap();
        assert_eq!(buf, [0xA0, 0x00, 0x00]);
        assert_eq!(unpack(&buf, 3, 17).unwrap(), 20);
    }

    #[test]
    fn test_pack_preserves_neighbouring_bits() {
        let mut buf = [0xFFu8; 4];
        pack(&mut buf, 5, 13, 0).unwrap();
        // bits 5..18 cleared, everything else untouched
        assert_eq!(buf, [0x1F, 0x00, 0xFC, 0xFF]);
    }

    #[test]
    fn test_pack_overwrites_previous_value() {
        let mut buf = [0u8; 4];
        pack(&mut buf, 7, 23, 0x7FFFFF).unwrap();
        pack(&mut buf, 7, 23, 0x12345).unwrap();
        assert_eq!(unpack(&buf, 7, 23).unwrap(), 0x12345);
    }

    #[test]
    fn test_full_width_field() {
        let mut buf = [0u8; 9];
        pack(&mut buf, 4, 64, u64::MAX).unwrap();
        assert_eq!(unpack(&buf, 4, 64).unwrap(), u64::MAX);
        assert_eq!(buf[0], 0xF0);
        assert_eq!(buf[8], 0x0F);
    }

    #[test]
    fn test_value_too_wide() {
        let mut buf = [0u8; 4];
        assert_eq!(
            pack(&mut buf, 0, 10, 1 << 10),
            Err(RangeError::ValueTooWide { value: 1024, width: 10 })
        );
        assert!(pack(&mut buf, 0, 10, (1 << 10) - 1).is_ok());
    }

    #[test]
    fn test_out_of_bounds() {
        let mut buf = [0u8; 2];
        assert!(matches!(
            pack(&mut buf, 10, 7, 0),
            Err(RangeError::OutOfBounds { stream_bits: 16, .. })
        ));
        assert!(pack(&mut buf, 10, 6, 0).is_ok());
        assert!(unpack(&buf, 9, 8).is_err());
    }

    #[test]
    fn test_invalid_width() {
        let buf = [0u8; 16];
        assert_eq!(unpack(&buf, 0, 0), Err(RangeError::InvalidWidth(0)));
        assert_eq!(unpack(&buf, 0, 65), Err(RangeError::InvalidWidth(65)));
    }

    #[test]
    fn test_offset_overflow_is_out_of_bounds() {
        let buf = [0u8; 1];
        assert!(matches!(
            unpack(&buf, usize::MAX, 8),
            Err(RangeError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn test_helpers() {
        assert_eq!(max_value(10), 1023);
        assert_eq!(max_value(64), u64::MAX);
        assert!(fits(0x7FFFFF, 23));
        assert!(!fits(0x800000, 23));
        assert_eq!(bytes_for_bits(49), 7);
        assert_eq!(bytes_for_bits(72), 9);
    }
}
