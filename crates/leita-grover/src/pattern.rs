//! Target bit patterns.

use std::fmt;
use std::str::FromStr;

use crate::error::{GroverError, GroverResult};

/// The bit-string the oracle is built to recognize.
///
/// Bit `i` of the pattern addresses qubit `i`; [`fmt::Display`] prints bit
/// 0 as the leftmost character, the same convention measurement outcome
/// tables use. A matching search therefore peaks on exactly
/// `pattern.to_string()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitPattern {
    bits: Vec<bool>,
}

impl BitPattern {
    /// Number of bits in the pattern.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Whether the pattern has no bits.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Bit `i` of the pattern.
    pub fn bit(&self, i: usize) -> bool {
        self.bits[i]
    }

    /// Iterate over the bits in qubit order.
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.bits.iter().copied()
    }

    /// Take the leading `n` bits of `bytes`, most significant bit of byte 0
    /// first.
    ///
    /// This is how a search target is derived from a key: the first `n`
    /// bits of the 16-byte key become the marked state of an `n`-qubit
    /// search.
    pub fn from_bytes(bytes: &[u8], n: usize) -> GroverResult<Self> {
        if n == 0 {
            return Err(GroverError::EmptyPattern);
        }
        let available = bytes.len() * 8;
        if n > available {
            return Err(GroverError::NotEnoughBits {
                requested: n,
                available,
            });
        }
        let bits = (0..n)
            .map(|i| (bytes[i / 8] >> (7 - i % 8)) & 1 == 1)
            .collect();
        Ok(Self { bits })
    }
}

impl FromStr for BitPattern {
    type Err = GroverError;

    fn from_str(s: &str) -> GroverResult<Self> {
        if s.is_empty() {
            return Err(GroverError::EmptyPattern);
        }
        let bits = s
            .chars()
            .enumerate()
            .map(|(position, ch)| match ch {
                '0' => Ok(false),
                '1' => Ok(true),
                _ => Err(GroverError::InvalidPatternChar { ch, position }),
            })
            .collect::<GroverResult<Vec<_>>>()?;
        Ok(Self { bits })
    }
}

impl fmt::Display for BitPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.bits {
            write!(f, "{}", if bit { '1' } else { '0' })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_roundtrip() {
        let pattern: BitPattern = "1011".parse().unwrap();
        assert_eq!(pattern.len(), 4);
        assert!(pattern.bit(0));
        assert!(!pattern.bit(1));
        assert_eq!(pattern.to_string(), "1011");
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert!(matches!(
            "".parse::<BitPattern>(),
            Err(GroverError::EmptyPattern)
        ));
    }

    #[test]
    fn test_parse_rejects_bad_char() {
        match "10x1".parse::<BitPattern>() {
            Err(GroverError::InvalidPatternChar { ch, position }) => {
                assert_eq!(ch, 'x');
                assert_eq!(position, 2);
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_from_bytes_msb_first() {
        // 0xA5 = 1010_0101
        let pattern = BitPattern::from_bytes(&[0xA5], 8).unwrap();
        assert_eq!(pattern.to_string(), "10100101");

        let leading = BitPattern::from_bytes(&[0xA5, 0xFF], 4).unwrap();
        assert_eq!(leading.to_string(), "1010");
    }

    #[test]
    fn test_from_bytes_bounds() {
        assert!(matches!(
            BitPattern::from_bytes(&[0xFF], 9),
            Err(GroverError::NotEnoughBits {
                requested: 9,
                available: 8
            })
        ));
        assert!(matches!(
            BitPattern::from_bytes(&[0xFF], 0),
            Err(GroverError::EmptyPattern)
        ));
    }
}
