//! Offline register snapshots

use std::{fs, path::Path};

use log::debug;
use thiserror::Error;

use super::RegisterMap;
use crate::{parse_hex_byte, Error};

const REGISTER_COUNT: usize = 0x100;

/// Reading a register which the dump does not contain
#[derive(Debug, Error)]
#[error("Register {0:#04x} is not present in the dump")]
pub struct MissingRegister(pub u32);

/// A snapshot of the 8-bit register space of a PMIC
///
/// The text form holds one register per line, address first and value
/// second, both in hex. Text after `#` is ignored. Each register may only
/// appear once.
///
/// ```text
/// # AXP209 ADC
/// 0x56 0xab
/// 0x57 0x0c
/// ```
#[derive(Debug, Clone)]
pub struct RegisterDump {
    registers: [Option<u8>; REGISTER_COUNT],
}

impl Default for RegisterDump {
    fn default() -> Self {
        Self {
            registers: [None; REGISTER_COUNT],
        }
    }
}

impl RegisterDump {
    pub fn insert(&mut self, reg: u8, value: u8) {
        self.registers[usize::from(reg)] = Some(value);
    }

    pub fn parse(text: &str) -> Result<Self, Error> {
        let mut dump = Self::default();

        for (index, line) in text.lines().enumerate() {
            let line = line.split('#').next().unwrap_or_default();
            let mut fields = line.split_whitespace();

            let (reg, value) = match (fields.next(), fields.next(), fields.next()) {
                (None, ..) => continue,
                (Some(reg), Some(value), None) => (reg, value),
                _ => return Err(Error::InvalidRegisterDump { line: index + 1 }),
            };

            let line = index + 1;
            let (reg, value) = parse_hex_byte(reg)
                .zip(parse_hex_byte(value))
                .ok_or(Error::InvalidRegisterDump { line })?;

            if dump.registers[usize::from(reg)].is_some() {
                return Err(Error::InvalidRegisterDump { line });
            }
            dump.insert(reg, value);
        }

        Ok(dump)
    }

    pub fn load(path: &Path) -> Result<Self, Error> {
        let text = fs::read_to_string(path)
            .map_err(|e| Error::FileOpenError(path.display().to_string(), e))?;

        let dump = Self::parse(&text)?;
        debug!(
            "Loaded {} registers from '{}'",
            dump.registers.iter().flatten().count(),
            path.display()
        );

        Ok(dump)
    }
}

impl RegisterMap for RegisterDump {
    type Error = MissingRegister;

    fn read(&mut self, reg: u32) -> Result<u32, Self::Error> {
        usize::try_from(reg)
            .ok()
            .and_then(|index| self.registers.get(index).copied().flatten())
            .map(u32::from)
            .ok_or(MissingRegister(reg))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pmic::read_variable_width;

    #[test]
    fn parse_and_read() {
        let mut dump = RegisterDump::parse(
            "# AXP209 ADC\n\
             0x56 0xab\n\
             \n\
             57 0C   # low nibble\n",
        )
        .unwrap();

        assert_eq!(dump.read(0x56).unwrap(), 0xab);
        assert_eq!(read_variable_width(&mut dump, 0x56, 12).unwrap(), 0xabc);
    }

    #[test]
    fn missing_register() {
        let mut dump = RegisterDump::default();
        dump.insert(0x78, 0x01);

        assert!(matches!(dump.read(0x79), Err(MissingRegister(0x79))));
        assert!(matches!(dump.read(0x1ff), Err(MissingRegister(0x1ff))));
        assert!(matches!(
            read_variable_width(&mut dump, 0x78, 12),
            Err(Error::RegisterRead { reg: 0x79, .. })
        ));
    }

    #[test]
    fn malformed_lines() {
        for text in [
            "0x56\n",
            "0x56 0x01 0x02\n",
            "0x100 0x01\n",
            "0x56 zz\n",
            "+56 0x01\n",
        ] {
            assert!(
                matches!(
                    RegisterDump::parse(text),
                    Err(Error::InvalidRegisterDump { line: 1 })
                ),
                "{text:?}"
            );
        }

        assert!(matches!(
            RegisterDump::parse("0x56 0x01\nbad\n"),
            Err(Error::InvalidRegisterDump { line: 2 })
        ));
    }

    #[test]
    fn duplicate_register() {
        assert!(matches!(
            RegisterDump::parse("0x56 0x01\n0x57 0x02\n56 0x03\n"),
            Err(Error::InvalidRegisterDump { line: 3 })
        ));
    }
}
