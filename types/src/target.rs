//! 256-bit difficulty ceilings and their compact header encoding.
//!
//! A limit is the numerically largest (easiest) target a block may claim.
//! Headers carry targets in the 32-bit compact form: one size byte followed
//! by a 23-bit mantissa, with bit 23 reserved as a sign flag.

use primitive_types::U256;
use serde::{Serialize, Serializer};
use std::fmt;

const SIGN_BIT: u32 = 0x0080_0000;
const MANTISSA_MASK: u32 = 0x007f_ffff;

/// Proof-of-work or proof-of-stake target ceiling.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PowLimit(U256);

impl PowLimit {
    pub fn new(value: U256) -> Self {
        Self(value)
    }

    /// The all-ones 256-bit value shifted right by `bits`, i.e. a ceiling
    /// that demands `bits` leading zero bits.
    pub fn leading_zero_bits(bits: usize) -> Self {
        Self(U256::MAX).shr(bits)
    }

    pub fn value(&self) -> U256 {
        self.0
    }

    pub fn shr(&self, bits: usize) -> Self {
        Self(self.0 >> bits)
    }

    /// Compact (size + mantissa) encoding as stored in `BlockHeader::bits`.
    pub fn to_compact(&self) -> u32 {
        let mut size = (self.0.bits() + 7) / 8;
        let mut compact = if size <= 3 {
            (self.0.low_u64() << (8 * (3 - size))) as u32
        } else {
            (self.0 >> (8 * (size - 3))).low_u32()
        };
        // Keep the mantissa positive by moving a set high bit into the exponent.
        if compact & SIGN_BIT != 0 {
            compact >>= 8;
            size += 1;
        }
        compact | ((size as u32) << 24)
    }

    /// Decode a compact target. Returns `None` for negative or overflowing
    /// encodings.
    pub fn from_compact(compact: u32) -> Option<Self> {
        let size = (compact >> 24) as usize;
        let word = compact & MANTISSA_MASK;

        if word != 0 && compact & SIGN_BIT != 0 {
            return None;
        }
        if word != 0 && (size > 34 || (word > 0xff && size > 33) || (word > 0xffff && size > 32)) {
            return None;
        }

        let value = if size <= 3 {
            U256::from(word >> (8 * (3 - size)))
        } else {
            U256::from(word) << (8 * (size - 3))
        };
        Some(Self(value))
    }

    /// Big-endian hex, always 64 digits.
    pub fn to_hex(&self) -> String {
        let mut bytes = [0u8; 32];
        self.0.to_big_endian(&mut bytes);
        hex::encode(bytes)
    }
}

impl fmt::Debug for PowLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PowLimit({:#010x})", self.to_compact())
    }
}

impl fmt::Display for PowLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for PowLimit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_of_network_limits() {
        assert_eq!(PowLimit::leading_zero_bits(16).to_compact(), 0x1f00_ffff);
        assert_eq!(PowLimit::leading_zero_bits(12).to_compact(), 0x1f0f_ffff);
        assert_eq!(PowLimit::leading_zero_bits(1).to_compact(), 0x207f_ffff);
        assert_eq!(PowLimit::leading_zero_bits(18).to_compact(), 0x1e3f_ffff);
        assert_eq!(PowLimit::leading_zero_bits(14).to_compact(), 0x1f03_ffff);
    }

    #[test]
    fn compact_of_small_values() {
        assert_eq!(PowLimit::new(U256::zero()).to_compact(), 0);
        assert_eq!(PowLimit::new(U256::from(0x12u32)).to_compact(), 0x0112_0000);
        // 0x80 would set the sign bit, so it moves into a wider exponent.
        assert_eq!(PowLimit::new(U256::from(0x80u32)).to_compact(), 0x0200_8000);
    }

    #[test]
    fn from_compact_inverts_normalized_encodings() {
        for compact in [0x1f00_ffffu32, 0x1f0f_ffff, 0x207f_ffff, 0x1d00_ffff, 0x0112_0000] {
            let limit = PowLimit::from_compact(compact).unwrap();
            assert_eq!(limit.to_compact(), compact);
        }
    }

    #[test]
    fn from_compact_rejects_negative_and_overflow() {
        assert!(PowLimit::from_compact(0x0180_0001).is_none());
        assert!(PowLimit::from_compact(0x2301_0000).is_none());
        assert!(PowLimit::from_compact(0xff12_3456).is_none());
    }

    #[test]
    fn shr_relaxes_nothing_past_width() {
        assert_eq!(PowLimit::leading_zero_bits(256).value(), U256::zero());
    }

    #[test]
    fn hex_is_big_endian() {
        let hex = PowLimit::leading_zero_bits(16).to_hex();
        assert_eq!(hex.len(), 64);
        assert!(hex.starts_with("0000ffff"));
        assert!(hex.ends_with("ffff"));
    }
}
