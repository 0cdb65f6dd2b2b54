//! Defines the code-unit traits that let the trie work over any edge alphabet.
//!
//! A trie edge is labelled by one [`CodeUnit`]. Arguments to trie operations are
//! converted into unit slices through [`AsUnits`], and stored strings are rebuilt
//! from unit slices through [`Key`].
use std::borrow::Cow;
use std::fmt::{self, Debug, Write};
use std::hash::Hash;

/// Trait for types that can serve as edge labels in the trie.
///
/// - `Copy`: edges store labels by value
/// - `Eq + Ord`: comparing labels and ordering children in dumps
/// - `Hash`: child lookup
/// - `Debug`: debug printing of nodes
pub trait CodeUnit: Copy + Eq + Ord + Hash + Debug {
    /// Writes a human-readable label for this unit, used by the tree dump.
    fn write_label<W: Write>(&self, out: &mut W) -> fmt::Result;
}

impl CodeUnit for char {
    fn write_label<W: Write>(&self, out: &mut W) -> fmt::Result {
        if self.is_control() {
            write!(out, "{}", self.escape_debug())
        } else {
            out.write_char(*self)
        }
    }
}

macro_rules! integer_code_unit {
    ($($t:ty),*) => {
        $(
            impl CodeUnit for $t {
                fn write_label<W: Write>(&self, out: &mut W) -> fmt::Result {
                    match char::from_u32(u32::from(*self)) {
                        Some(c) if c == ' ' || c.is_ascii_graphic() => out.write_char(c),
                        _ => write!(out, "{:#06x}", self),
                    }
                }
            }
        )*
    };
}

integer_code_unit!(u8, u16, u32);

/// A trait for arguments that can be viewed as a sequence of code units `U`.
///
/// `Cow` allows for borrowing if the argument already is a unit slice,
/// or owning if a conversion is necessary (e.g. `str` to `char`s).
pub trait AsUnits<U: CodeUnit> {
    /// Converts the argument into its code units.
    fn as_units(&self) -> Cow<'_, [U]>;
}

impl AsUnits<char> for str {
    fn as_units(&self) -> Cow<'_, [char]> {
        Cow::Owned(self.chars().collect())
    }
}

impl AsUnits<u8> for str {
    fn as_units(&self) -> Cow<'_, [u8]> {
        Cow::Borrowed(self.as_bytes())
    }
}

impl AsUnits<u16> for str {
    fn as_units(&self) -> Cow<'_, [u16]> {
        Cow::Owned(self.encode_utf16().collect())
    }
}

impl<U: CodeUnit> AsUnits<U> for String
where
    str: AsUnits<U>,
{
    fn as_units(&self) -> Cow<'_, [U]> {
        self.as_str().as_units()
    }
}

impl<U: CodeUnit> AsUnits<U> for [U] {
    fn as_units(&self) -> Cow<'_, [U]> {
        Cow::Borrowed(self)
    }
}

impl<U: CodeUnit, const N: usize> AsUnits<U> for [U; N] {
    fn as_units(&self) -> Cow<'_, [U]> {
        Cow::Borrowed(&self[..])
    }
}

impl<U: CodeUnit> AsUnits<U> for Vec<U> {
    fn as_units(&self) -> Cow<'_, [U]> {
        Cow::Borrowed(self.as_slice())
    }
}

impl<U: CodeUnit, T: AsUnits<U> + ?Sized> AsUnits<U> for &T {
    fn as_units(&self) -> Cow<'_, [U]> {
        (**self).as_units()
    }
}

/// The owned string type a trie hands back from enumeration and fuzzy search.
pub trait Key: Sized {
    /// The code unit labelling trie edges for this key type.
    type Unit: CodeUnit;

    /// Rebuilds a key from the units on a root-to-terminal path.
    fn from_units(units: &[Self::Unit]) -> Self;
}

impl Key for String {
    type Unit = char;

    fn from_units(units: &[char]) -> Self {
        units.iter().collect()
    }
}

impl<U: CodeUnit> Key for Vec<U> {
    type Unit = U;

    fn from_units(units: &[U]) -> Self {
        units.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label<U: CodeUnit>(unit: U) -> String {
        let mut out = String::new();
        unit.write_label(&mut out).unwrap();
        out
    }

    #[test]
    fn test_str_as_chars() {
        let units: Cow<'_, [char]> = "héllo".as_units();
        assert_eq!(units.as_ref(), &['h', 'é', 'l', 'l', 'o']);
        assert!(matches!(units, Cow::Owned(_)));
    }

    #[test]
    fn test_str_as_bytes_is_borrowed() {
        let units: Cow<'_, [u8]> = "data".as_units();
        assert_eq!(units.as_ref(), b"data");
        assert!(matches!(units, Cow::Borrowed(_)));
    }

    #[test]
    fn test_str_as_utf16() {
        let units: Cow<'_, [u16]> = "a😀".as_units();
        assert_eq!(units.as_ref(), &[0x61, 0xD83D, 0xDE00]);
    }

    #[test]
    fn test_slices_and_arrays_are_borrowed() {
        let v = vec![1u8, 2, 3];
        assert!(matches!(v.as_units(), Cow::Borrowed(_)));
        assert!(matches!([4u8, 5].as_units(), Cow::Borrowed(_)));
        assert_eq!(v[..2].as_units().as_ref(), &[1, 2]);
    }

    #[test]
    fn test_reference_forwarding() {
        let s = "abc".to_string();
        let r = &s;
        let units = AsUnits::<char>::as_units(&r);
        assert_eq!(units.len(), 3);
    }

    #[test]
    fn test_key_round_trip() {
        let units: Cow<'_, [char]> = "trie".as_units();
        assert_eq!(String::from_units(&units), "trie");
        assert_eq!(Vec::<u16>::from_units(&[1, 2]), vec![1, 2]);
    }

    #[test]
    fn test_labels() {
        assert_eq!(label('x'), "x");
        assert_eq!(label('\n'), "\\n");
        assert_eq!(label(b'a'), "a");
        assert_eq!(label(0x00u8), "0x0000");
        assert_eq!(label(0x263Au16), "0x263a");
    }
}
