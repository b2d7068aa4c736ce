//! Character unit types.

use std::fmt;
use std::hash::Hash;

mod sealed {
    pub trait Sealed {}
}

/// A fixed-width character unit a [`StringBase`](crate::StringBase) can hold.
///
/// Implemented for `u8`, `i8`, `u16` and `u32`. Every implementor is a
/// plain integer for which the all-zero bit pattern is the terminator, so
/// zero-filled buffers are always fully initialised. The trait is sealed.
pub trait CharUnit: sealed::Sealed + Copy + Eq + Ord + Hash + fmt::Debug + 'static {
    /// The terminator unit.
    const NUL: Self;

    /// Widen an ASCII byte into this unit type.
    fn from_ascii(byte: u8) -> Self;

    /// The ASCII byte this unit encodes, if it is in `0..0x80`.
    fn to_ascii(self) -> Option<u8>;

    /// Decode a run of units into a Rust string, replacing invalid
    /// sequences with U+FFFD.
    fn decode_lossy(units: &[Self]) -> String;

    /// Whether this unit is space, tab, newline, carriage return, vertical
    /// tab, or form feed.
    fn is_blank(self) -> bool {
        matches!(
            self.to_ascii(),
            Some(b' ' | b'\t' | b'\n' | b'\r' | 0x0B | 0x0C)
        )
    }

    /// ASCII uppercase mapping; other units pass through.
    fn to_ascii_upper(self) -> Self {
        match self.to_ascii() {
            Some(b) if b.is_ascii_lowercase() => Self::from_ascii(b.to_ascii_uppercase()),
            _ => self,
        }
    }

    /// ASCII lowercase mapping; other units pass through.
    fn to_ascii_lower(self) -> Self {
        match self.to_ascii() {
            Some(b) if b.is_ascii_uppercase() => Self::from_ascii(b.to_ascii_lowercase()),
            _ => self,
        }
    }
}

macro_rules! impl_char_unit {
    ($($ty:ty => $decode:expr),+ $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl CharUnit for $ty {
                const NUL: Self = 0;

                #[inline]
                fn from_ascii(byte: u8) -> Self {
                    byte as $ty
                }

                #[inline]
                fn to_ascii(self) -> Option<u8> {
                    u8::try_from(self).ok().filter(u8::is_ascii)
                }

                fn decode_lossy(units: &[Self]) -> String {
                    let decode: fn(&[Self]) -> String = $decode;
                    decode(units)
                }
            }
        )+
    };
}

impl_char_unit! {
    u8 => |units| String::from_utf8_lossy(units).into_owned(),
    i8 => |units| {
        let bytes: Vec<u8> = units.iter().map(|&u| u as u8).collect();
        String::from_utf8_lossy(&bytes).into_owned()
    },
    u16 => |units| char::decode_utf16(units.iter().copied())
        .map(|r| r.unwrap_or(char::REPLACEMENT_CHARACTER))
        .collect(),
    u32 => |units| units
        .iter()
        .map(|&u| char::from_u32(u).unwrap_or(char::REPLACEMENT_CHARACTER))
        .collect(),
}

/// The platform's wide character unit: UTF-16 on Windows, UTF-32 elsewhere.
#[cfg(windows)]
pub type WChar = u16;

/// The platform's wide character unit: UTF-16 on Windows, UTF-32 elsewhere.
#[cfg(not(windows))]
pub type WChar = u32;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_class() {
        for b in [b' ', b'\t', b'\n', b'\r', 0x0B, 0x0C] {
            assert!(b.is_blank());
            assert!(u32::from(b).is_blank());
            assert!((b as i8).is_blank());
        }
        assert!(!b'a'.is_blank());
        assert!(!0u16.is_blank());
        assert!(!0x2003u16.is_blank());
    }

    #[test]
    fn case_mapping_only_touches_ascii_letters() {
        assert_eq!(b'a'.to_ascii_upper(), b'A');
        assert_eq!(b'Z'.to_ascii_lower(), b'z');
        assert_eq!(b'1'.to_ascii_upper(), b'1');
        assert_eq!(0x00E9u16.to_ascii_upper(), 0x00E9);
        assert_eq!((-61i8).to_ascii_upper(), -61);
        assert_eq!(u32::from(b'q').to_ascii_upper(), u32::from(b'Q'));
    }

    #[test]
    fn to_ascii_rejects_high_units() {
        assert_eq!(0x80u8.to_ascii(), None);
        assert_eq!(0x141u16.to_ascii(), None);
        assert_eq!((-1i8).to_ascii(), None);
        assert_eq!(0x41u32.to_ascii(), Some(b'A'));
    }

    #[test]
    fn lossy_decoding() {
        assert_eq!(u8::decode_lossy(b"hi"), "hi");
        assert_eq!(u8::decode_lossy(&[0xFF]), "\u{FFFD}");
        let wide: Vec<u16> = "añ".encode_utf16().collect();
        assert_eq!(u16::decode_lossy(&wide), "añ");
        assert_eq!(u32::decode_lossy(&[0x1F600]), "\u{1F600}");
        assert_eq!(u32::decode_lossy(&[0xD800]), "\u{FFFD}");
    }
}
