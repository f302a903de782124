//! Efuse mask tables
//!
//! A mask table decides which offsets of a chip's logical efuse map are
//! reserved ("masked") and which are exposed for reading and programming.
//! Each byte of the table covers 16 consecutive offsets, taken in pairs:
//!
//! | offsets in row | tested bit |
//! |----------------|------------|
//! | 0, 1           | `0x10`     |
//! | 2, 3           | `0x20`     |
//! | 4, 5           | `0x40`     |
//! | 6, 7           | `0x80`     |
//! | 8, 9           | `0x01`     |
//! | 10, 11         | `0x02`     |
//! | 12, 13         | `0x04`     |
//! | 14, 15         | `0x08`     |
//!
//! The polarity is inverted: a **clear** bit marks the offsets as masked, a
//! set bit leaves them unmasked.

use std::{borrow::Cow, fs, ops::Range, path::Path};

use log::debug;
use strum::{Display, EnumIter, EnumString, VariantNames};

use crate::{parse_hex_byte, Error};

pub(crate) mod rtl8723d;

/// Number of efuse offsets described by a single mask table byte.
pub const OFFSETS_PER_ROW: u32 = 16;

/// Value of an unprogrammed efuse byte.
const UNPROGRAMMED: u8 = 0xFF;

/// Built-in mask tables
#[cfg_attr(
    feature = "cli",
    derive(clap::ValueEnum, serde::Deserialize, serde::Serialize)
)]
#[derive(
    Debug, Default, Clone, Copy, Hash, PartialEq, Eq, Display, EnumIter, EnumString, VariantNames,
)]
#[non_exhaustive]
pub enum MaskVariant {
    /// RTL8723D, PCIe interface
    #[default]
    #[strum(serialize = "rtl8723d-pcie")]
    #[cfg_attr(
        feature = "cli",
        value(name = "rtl8723d-pcie"),
        serde(rename = "rtl8723d-pcie")
    )]
    Rtl8723dPcie,
}

impl MaskVariant {
    /// The compiled-in mask table of this variant.
    pub fn table(self) -> &'static EfuseMaskTable<'static> {
        match self {
            MaskVariant::Rtl8723dPcie => &rtl8723d::MP_MPCIE,
        }
    }
}

/// A read-only efuse mask table
///
/// Built-in tables borrow `'static` data; tables loaded from a mask file own
/// their bytes. Neither can be modified after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EfuseMaskTable<'a> {
    bytes: Cow<'a, [u8]>,
}

impl<'a> EfuseMaskTable<'a> {
    /// Wraps constant mask data.
    pub const fn new(bytes: &'a [u8]) -> Self {
        Self {
            bytes: Cow::Borrowed(bytes),
        }
    }

    /// Number of bytes in the table.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn to_vec(&self) -> Vec<u8> {
        self.bytes.to_vec()
    }

    /// The first offset which is not described by this table.
    ///
    /// Offsets are 16 bits wide, so tables longer than 4096 bytes are
    /// capped at `0x10000`.
    pub fn offset_limit(&self) -> u32 {
        let limit = self.len() as u64 * u64::from(OFFSETS_PER_ROW);
        limit.min(u64::from(u16::MAX) + 1) as u32
    }

    /// Copies the whole table into `buffer`.
    ///
    /// The buffer must hold at least [`len`](Self::len) bytes; when it is
    /// smaller nothing is written. Bytes past the table length are left
    /// untouched.
    pub fn copy_into(&self, buffer: &mut [u8]) -> Result<(), Error> {
        if buffer.len() < self.len() {
            return Err(Error::BufferTooSmall {
                required: self.len(),
                actual: buffer.len(),
            });
        }

        buffer[..self.len()].copy_from_slice(&self.bytes);

        Ok(())
    }

    /// Returns `true` when `offset` is masked.
    ///
    /// Note the inverted polarity: the tested bit being **zero** means the
    /// offset is masked, a set bit means it is not.
    pub fn is_masked(&self, offset: u16) -> Result<bool, Error> {
        let row = usize::from(offset) / OFFSETS_PER_ROW as usize;
        let column = u32::from(offset) % OFFSETS_PER_ROW / 2;

        let byte = self
            .bytes
            .get(row)
            .copied()
            .ok_or_else(|| Error::OutOfRange {
                offset: offset.into(),
                limit: self.offset_limit(),
            })?;

        // Upper double word in the high nibble, lower double word in the low
        // nibble.
        let bit = if column < 4 {
            0x10u8 << column
        } else {
            0x01u8 << (column - 4)
        };

        Ok(byte & bit == 0)
    }

    /// All masked offsets, in ascending order.
    pub fn masked_offsets(&self) -> impl Iterator<Item = u16> + '_ {
        (0..self.offset_limit())
            .filter_map(|offset| u16::try_from(offset).ok())
            .filter(move |&offset| matches!(self.is_masked(offset), Ok(true)))
    }

    /// Masked offsets folded into contiguous ranges.
    pub fn masked_ranges(&self) -> Vec<Range<u32>> {
        let mut ranges: Vec<Range<u32>> = Vec::new();

        for offset in self.masked_offsets().map(u32::from) {
            match ranges.last_mut() {
                Some(range) if range.end == offset => range.end += 1,
                _ => ranges.push(offset..offset + 1),
            }
        }

        ranges
    }

    /// Hides the masked offsets of a logical efuse map.
    ///
    /// Every masked byte is replaced by the unprogrammed value `0xFF`.
    /// A map extending past [`offset_limit`](Self::offset_limit) is rejected
    /// before anything is modified.
    pub fn mask_map(&self, map: &mut [u8]) -> Result<(), Error> {
        let limit = self.offset_limit();
        if map.len() as u64 > u64::from(limit) {
            return Err(Error::OutOfRange {
                offset: limit,
                limit,
            });
        }

        let mut hidden = 0;
        for (offset, byte) in map.iter_mut().enumerate() {
            // `offset < limit <= 0x10000`
            if self.is_masked(offset as u16)? {
                *byte = UNPROGRAMMED;
                hidden += 1;
            }
        }

        debug!("Masked {hidden} of {} efuse map bytes", map.len());

        Ok(())
    }
}

impl EfuseMaskTable<'static> {
    /// Takes ownership of mask data, e.g. read from a file.
    pub fn from_vec(bytes: Vec<u8>) -> Result<Self, Error> {
        if bytes.is_empty() {
            return Err(Error::EmptyMaskTable);
        }

        Ok(Self {
            bytes: Cow::Owned(bytes),
        })
    }

    /// Parses the text form of a mask table.
    ///
    /// The text holds hexadecimal bytes, with or without a `0x` prefix,
    /// separated by whitespace or commas. Anything following `#` or `//` on
    /// a line is ignored.
    pub fn parse(text: &str) -> Result<Self, Error> {
        let mut bytes = Vec::new();

        for (index, line) in text.lines().enumerate() {
            let tokens = strip_comment(line)
                .split(|c: char| c.is_whitespace() || c == ',')
                .filter(|token| !token.is_empty());

            for token in tokens {
                let byte = parse_hex_byte(token).ok_or_else(|| Error::InvalidMaskToken {
                    line: index + 1,
                    token: token.to_string(),
                })?;

                bytes.push(byte);
            }
        }

        Self::from_vec(bytes)
    }

    /// Reads and parses a mask file.
    pub fn load(path: &Path) -> Result<Self, Error> {
        let text = fs::read_to_string(path)
            .map_err(|e| Error::FileOpenError(path.display().to_string(), e))?;

        let table = Self::parse(&text)?;
        debug!(
            "Loaded {} byte mask table from '{}'",
            table.len(),
            path.display()
        );

        Ok(table)
    }
}

fn strip_comment(line: &str) -> &str {
    let end = [line.find('#'), line.find("//")]
        .into_iter()
        .flatten()
        .min()
        .unwrap_or(line.len());

    &line[..end]
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use pretty_assertions::assert_eq;

    use super::*;

    const MPCIE: [u8; 32] = [
        0xFF, 0xF3, 0x00, 0x0E, 0x70, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x07, 0xF3, 0xFF, 0xFF,
        0x7C, 0x30, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00,
    ];

    fn table() -> &'static EfuseMaskTable<'static> {
        MaskVariant::Rtl8723dPcie.table()
    }

    #[test]
    fn builtin_table_length() {
        assert_eq!(table().len(), 32);
        assert_eq!(table().offset_limit(), 512);
    }

    #[test]
    fn copy_into_exact_buffer() {
        let mut buffer = [0u8; 32];
        table().copy_into(&mut buffer).unwrap();

        assert_eq!(buffer, MPCIE);
    }

    #[test]
    fn copy_into_leaves_tail_untouched() {
        let mut buffer = [0xAAu8; 40];
        table().copy_into(&mut buffer).unwrap();

        assert_eq!(&buffer[..32], &MPCIE[..]);
        assert_eq!(&buffer[32..], &[0xAA; 8]);
    }

    #[test]
    fn copy_into_small_buffer() {
        let mut buffer = [0xAAu8; 31];
        let result = table().copy_into(&mut buffer);

        assert!(matches!(
            result,
            Err(Error::BufferTooSmall {
                required: 32,
                actual: 31
            })
        ));
        assert_eq!(buffer, [0xAA; 31]);
    }

    #[test]
    fn inverted_polarity() {
        // Row 0 is 0xFF: every bit set, nothing masked
        assert!(!table().is_masked(0).unwrap());
        assert!(!table().is_masked(8).unwrap());
        assert!(!table().is_masked(15).unwrap());

        // Row 1 is 0xF3: bits 0x04 and 0x08 are clear
        assert!(!table().is_masked(16).unwrap());
        assert!(!table().is_masked(27).unwrap());
        assert!(table().is_masked(28).unwrap());
        assert!(table().is_masked(31).unwrap());

        // Row 2 is 0x00: everything masked
        assert!(table().is_masked(32).unwrap());
        assert!(table().is_masked(47).unwrap());

        // Last row
        assert!(table().is_masked(511).unwrap());
    }

    #[test]
    fn one_offset_per_row() {
        // (offset, masked), one offset per table byte
        let expected = [
            (0x000, false),
            (0x01e, true),
            (0x022, true),
            (0x03a, false),
            (0x042, false),
            (0x05c, true),
            (0x060, true),
            (0x070, true),
            (0x08e, true),
            (0x092, true),
            (0x0a6, true),
            (0x0b8, false),
            (0x0c8, false),
            (0x0d6, false),
            (0x0ec, false),
            (0x0f6, true),
            (0x104, true),
            (0x112, true),
            (0x12a, true),
            (0x13e, true),
            (0x140, true),
            (0x15f, true),
            (0x163, true),
            (0x178, true),
            (0x180, true),
            (0x19c, true),
            (0x1a0, true),
            (0x1b1, true),
            (0x1c4, true),
            (0x1d8, true),
            (0x1e2, true),
            (0x1f9, true),
        ];

        for (offset, masked) in expected {
            assert_eq!(table().is_masked(offset).unwrap(), masked, "offset {offset:#x}");
        }
    }

    #[test]
    fn every_offset_follows_bit_layout() {
        for offset in 0..512u16 {
            let byte = MPCIE[usize::from(offset / 16)];
            let pair = (offset % 16) / 2;
            let bit_index = if pair < 4 { pair + 4 } else { pair - 4 };
            let masked = (byte >> bit_index) & 1 == 0;

            assert_eq!(table().is_masked(offset).unwrap(), masked, "offset {offset:#x}");
        }
    }

    #[test]
    fn out_of_range_offset() {
        assert!(matches!(
            table().is_masked(512),
            Err(Error::OutOfRange {
                offset: 512,
                limit: 512
            })
        ));
        assert!(matches!(
            table().is_masked(u16::MAX),
            Err(Error::OutOfRange { .. })
        ));
    }

    #[test]
    fn repeated_queries_agree() {
        let first = table().is_masked(0x76).unwrap();
        for _ in 0..8 {
            assert_eq!(table().is_masked(0x76).unwrap(), first);
        }
    }

    #[test]
    fn masked_ranges_of_builtin_table() {
        assert_eq!(
            table().masked_ranges(),
            vec![28..58, 70..184, 190..192, 204..208, 246..252, 260..512]
        );
    }

    #[test]
    fn mask_map_hides_masked_bytes() {
        let mut map = [0x5Au8; 512];
        table().mask_map(&mut map).unwrap();

        for (offset, byte) in map.iter().enumerate() {
            let expected = if table().is_masked(offset as u16).unwrap() {
                0xFF
            } else {
                0x5A
            };
            assert_eq!(*byte, expected, "offset {offset:#x}");
        }
    }

    #[test]
    fn mask_map_rejects_oversized_map() {
        let mut map = vec![0x5Au8; 513];
        let result = table().mask_map(&mut map);

        assert!(matches!(
            result,
            Err(Error::OutOfRange {
                offset: 512,
                limit: 512
            })
        ));
        assert!(map.iter().all(|&b| b == 0x5A));
    }

    #[test]
    fn parse_mask_text() {
        let text = "0xFF, 0xf3 # first row\n\
                    // nothing here\n\
                    00\t0E\n";
        let table = EfuseMaskTable::parse(text).unwrap();

        assert_eq!(table.as_bytes(), &[0xFF, 0xF3, 0x00, 0x0E]);
        assert_eq!(table.offset_limit(), 64);
    }

    #[test]
    fn parse_builtin_text_form() {
        let text = MPCIE
            .iter()
            .map(|b| format!("0x{b:02X},"))
            .collect::<Vec<_>>()
            .join("\n");

        assert_eq!(&EfuseMaskTable::parse(&text).unwrap(), table());
    }

    #[test]
    fn parse_reports_bad_token() {
        let result = EfuseMaskTable::parse("FF\n0xZZ 00\n");

        match result {
            Err(Error::InvalidMaskToken { line, token }) => {
                assert_eq!(line, 2);
                assert_eq!(token, "0xZZ");
            }
            other => panic!("unexpected result: {other:?}"),
        }

        for text in ["100", "+f3", "0x"] {
            assert!(
                matches!(
                    EfuseMaskTable::parse(text),
                    Err(Error::InvalidMaskToken { .. })
                ),
                "{text:?}"
            );
        }
    }

    #[test]
    fn empty_table_rejected() {
        assert!(matches!(
            EfuseMaskTable::parse("# only a comment\n"),
            Err(Error::EmptyMaskTable)
        ));
        assert!(matches!(
            EfuseMaskTable::from_vec(Vec::new()),
            Err(Error::EmptyMaskTable)
        ));
    }

    #[test]
    fn variant_names() {
        assert_eq!(
            MaskVariant::from_str("rtl8723d-pcie").unwrap(),
            MaskVariant::Rtl8723dPcie
        );
        assert_eq!(MaskVariant::Rtl8723dPcie.to_string(), "rtl8723d-pcie");
    }
}
