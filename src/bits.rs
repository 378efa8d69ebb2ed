//! Conversion between bit strings and boolean sequences
//!
//! Bit strings are written most significant bit first: index 0 is the MSB.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Number of bits handled by the arithmetic operations
pub const BYTE_WIDTH: usize = 8;

/// Returns whether the character at `index` of an 8-bit string is '1'
pub fn bit_at(bits: &str, index: usize) -> Result<bool> {
    let byte: Byte = bits.parse()?;
    if index >= BYTE_WIDTH {
        return Err(Error::invalid_input(
            bits,
            format!("bit index {index} out of range"),
        ));
    }
    Ok(byte.bit(index))
}

/// Concatenate booleans into a string of '0' and '1', in the given order
pub fn to_bit_string<I: IntoIterator<Item = bool>>(bits: I) -> String {
    bits.into_iter().map(|b| if b { '1' } else { '0' }).collect()
}

/// An 8-bit value, stored most significant bit first
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Default)]
pub struct Byte([bool; BYTE_WIDTH]);

impl Byte {
    /// Create from bits, most significant first
    pub fn from_bits(bits: [bool; BYTE_WIDTH]) -> Byte {
        Byte(bits)
    }

    /// Bits, most significant first
    pub fn bits(&self) -> [bool; BYTE_WIDTH] {
        self.0
    }

    /// Bit at the given string index (0 is the most significant bit)
    pub fn bit(&self, index: usize) -> bool {
        self.0[index]
    }

    /// Bits, least significant first
    pub fn lsb_first(&self) -> impl Iterator<Item = bool> + '_ {
        self.0.iter().rev().copied()
    }

    /// Build from bits given least significant first
    pub(crate) fn from_lsb_first<I: IntoIterator<Item = bool>>(bits: I) -> Byte {
        let mut ret = [false; BYTE_WIDTH];
        for (i, b) in bits.into_iter().take(BYTE_WIDTH).enumerate() {
            ret[BYTE_WIDTH - 1 - i] = b;
        }
        Byte(ret)
    }
}

impl FromStr for Byte {
    type Err = Error;

    fn from_str(s: &str) -> Result<Byte> {
        let nb_chars = s.chars().count();
        if nb_chars != BYTE_WIDTH {
            return Err(Error::invalid_input(
                s,
                format!("expected {BYTE_WIDTH} bits, got {nb_chars} characters"),
            ));
        }
        let mut ret = [false; BYTE_WIDTH];
        for (i, ch) in s.chars().enumerate() {
            ret[i] = match ch {
                '0' => false,
                '1' => true,
                _ => {
                    return Err(Error::invalid_input(
                        s,
                        format!("unexpected character {ch:?} at position {i}"),
                    ))
                }
            };
        }
        Ok(Byte(ret))
    }
}

impl From<u8> for Byte {
    fn from(v: u8) -> Byte {
        Byte::from_lsb_first((0..BYTE_WIDTH).map(|i| (v >> i) & 1 != 0))
    }
}

impl From<Byte> for u8 {
    fn from(b: Byte) -> u8 {
        b.lsb_first()
            .enumerate()
            .fold(0, |acc, (i, bit)| acc | ((bit as u8) << i))
    }
}

impl fmt::Display for Byte {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", to_bit_string(self.0))
    }
}

impl fmt::Debug for Byte {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::{bit_at, to_bit_string, Byte};
    use crate::Error;

    #[test]
    fn test_bit_at() {
        assert!(bit_at("10000000", 0).unwrap());
        assert!(!bit_at("10000000", 7).unwrap());
        assert!(bit_at("00000001", 7).unwrap());
        assert!(matches!(
            bit_at("00000001", 8),
            Err(Error::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_to_bit_string() {
        assert_eq!(to_bit_string([true, false, true]), "101");
        assert_eq!(to_bit_string(Vec::new()), "");
        assert_eq!(to_bit_string([false; 8]), "00000000");
    }

    #[test]
    fn test_parse() {
        let b: Byte = "11000110".parse().unwrap();
        assert_eq!(
            b.bits(),
            [true, true, false, false, false, true, true, false]
        );
        assert_eq!(b.to_string(), "11000110");
        assert_eq!(u8::from(b), 0xc6);
    }

    #[test]
    fn test_invalid() {
        for s in ["", "0101", "000000001", "0000000a", "1111 111", "２0000000"] {
            let res = s.parse::<Byte>();
            assert!(
                matches!(res, Err(Error::InvalidInput { .. })),
                "{s:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_u8() {
        for v in 0..=255u8 {
            let b = Byte::from(v);
            assert_eq!(u8::from(b), v);
            assert_eq!(b.to_string(), format!("{v:08b}"));
        }
    }

    #[test]
    fn test_lsb_first() {
        let b = Byte::from(0b0000_0110);
        let lsb: Vec<bool> = b.lsb_first().collect();
        assert_eq!(lsb, vec![false, true, true, false, false, false, false, false]);
        assert_eq!(Byte::from_lsb_first(lsb), b);
    }
}
