//! X-Powers AXP20x power management ICs
//!
//! Register addresses, regulator IDs and interrupt numbers for the AXP20x
//! family, plus the helper for reading registers which are split over two
//! consecutive 8-bit addresses.
//!
//! Register access itself is provided by the host through the
//! [`RegisterMap`] trait.

use log::debug;
use strum::{Display, EnumCount, EnumIter, EnumString, IntoEnumIterator, VariantNames};

pub use self::{
    dump::{MissingRegister, RegisterDump},
    irqs::*,
    regulators::*,
};
use crate::Error;

macro_rules! impl_into_u8 {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl From<$ty> for u8 {
                fn from(value: $ty) -> u8 {
                    value as u8
                }
            }
        )+
    };
}

mod dump;
mod irqs;
pub mod regs;
mod regulators;

/// All AXP20x family variants
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[derive(
    Debug,
    Clone,
    Copy,
    Hash,
    PartialEq,
    Eq,
    Display,
    EnumCount,
    EnumIter,
    EnumString,
    VariantNames,
)]
#[non_exhaustive]
#[repr(u8)]
#[strum(serialize_all = "lowercase")]
pub enum Variant {
    Axp152 = 0,
    Axp202,
    Axp209,
    Axp221,
    Axp223,
    Axp288,
    Axp803,
    Axp806,
    Axp809,
    Axp813,
}

impl_into_u8!(Variant);

/// Device-tree compatibles, and the ACPI ID of the AXP288.
const MATCH_TABLE: &[(&str, Variant)] = &[
    ("x-powers,axp152", Variant::Axp152),
    ("x-powers,axp202", Variant::Axp202),
    ("x-powers,axp209", Variant::Axp209),
    ("x-powers,axp221", Variant::Axp221),
    ("x-powers,axp223", Variant::Axp223),
    ("INT33F4", Variant::Axp288),
    ("x-powers,axp803", Variant::Axp803),
    ("x-powers,axp806", Variant::Axp806),
    ("x-powers,axp809", Variant::Axp809),
    ("x-powers,axp813", Variant::Axp813),
];

/// Resolves a device-tree compatible or ACPI ID to a variant.
pub fn match_device(compatible: &str) -> Result<Variant, Error> {
    MATCH_TABLE
        .iter()
        .find(|(name, _)| *name == compatible)
        .map(|(_, variant)| *variant)
        .ok_or_else(|| Error::UnknownDevice(compatible.to_string()))
}

/// An interrupt raised by the PMIC
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Irq {
    pub number: u8,
    pub name: &'static str,
}

/// A voltage regulator output of the PMIC
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regulator {
    pub id: u8,
    pub name: &'static str,
}

fn numbered<E>() -> impl Iterator<Item = (u8, &'static str)>
where
    E: IntoEnumIterator + Into<u8> + Into<&'static str> + Copy,
{
    E::iter().map(|value| (Into::<u8>::into(value), Into::<&'static str>::into(value)))
}

impl Variant {
    /// Interrupts of the variant's interrupt controller.
    pub fn irqs(self) -> Vec<Irq> {
        let irqs: Vec<(u8, &'static str)> = match self {
            Variant::Axp152 => numbered::<Axp152Irq>().collect(),
            Variant::Axp202 | Variant::Axp209 => numbered::<Axp20xIrq>().collect(),
            Variant::Axp221 | Variant::Axp223 => numbered::<Axp22xIrq>().collect(),
            Variant::Axp288 => numbered::<Axp288Irq>().collect(),
            Variant::Axp803 | Variant::Axp813 => numbered::<Axp803Irq>().collect(),
            Variant::Axp806 => numbered::<Axp806Irq>().collect(),
            Variant::Axp809 => numbered::<Axp809Irq>().collect(),
        };

        irqs.into_iter()
            .map(|(number, name)| Irq { number, name })
            .collect()
    }

    /// Regulator outputs, empty for variants without regulator support.
    pub fn regulators(self) -> Vec<Regulator> {
        let regulators: Vec<(u8, &'static str)> = match self {
            Variant::Axp152 | Variant::Axp288 => Vec::new(),
            Variant::Axp202 | Variant::Axp209 => numbered::<Axp20xRegulator>().collect(),
            Variant::Axp221 | Variant::Axp223 => numbered::<Axp22xRegulator>().collect(),
            Variant::Axp803 => numbered::<Axp803Regulator>().collect(),
            Variant::Axp806 => numbered::<Axp806Regulator>().collect(),
            Variant::Axp809 => numbered::<Axp809Regulator>().collect(),
            Variant::Axp813 => numbered::<Axp813Regulator>().collect(),
        };

        regulators
            .into_iter()
            .map(|(id, name)| Regulator { id, name })
            .collect()
    }
}

/// Register access provided by the host
pub trait RegisterMap {
    /// Transport error of the underlying bus.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Reads the value of a single register.
    fn read(&mut self, reg: u32) -> Result<u32, Self::Error>;
}

fn read_register<M>(regmap: &mut M, reg: u32) -> Result<u32, Error>
where
    M: RegisterMap + ?Sized,
{
    regmap.read(reg).map_err(|e| Error::RegisterRead {
        reg,
        source: Box::new(e),
    })
}

/// Reads a 9-16 bit wide value spread over two registers.
///
/// `reg` holds the most significant 8 bits, `reg + 1` the remaining
/// `width - 8` bits.
pub fn read_variable_width<M>(regmap: &mut M, reg: u32, width: u32) -> Result<u32, Error>
where
    M: RegisterMap + ?Sized,
{
    if !(9..=16).contains(&width) {
        return Err(Error::InvalidWidth(width));
    }

    let low_reg = reg.checked_add(1).ok_or(Error::RegisterOverflow(reg))?;

    let high = read_register(regmap, reg)?;
    let low = read_register(regmap, low_reg)?;

    Ok((high << (width - 8)) | low)
}

/// A configured AXP20x device
#[derive(Debug)]
pub struct Axp20xDevice<M> {
    pub variant: Variant,
    pub irq: Option<u32>,
    pub irq_flags: u64,
    regmap: M,
}

impl<M: RegisterMap> Axp20xDevice<M> {
    /// Sets up a device from its compatible string.
    pub fn new(compatible: &str, regmap: M) -> Result<Self, Error> {
        let variant = match_device(compatible)?;
        debug!("'{compatible}' matched variant {variant}");

        Ok(Self {
            variant,
            irq: None,
            irq_flags: 0,
            regmap,
        })
    }

    pub fn with_irq(mut self, irq: u32, flags: u64) -> Self {
        self.irq = Some(irq);
        self.irq_flags = flags;
        self
    }

    pub fn regmap(&mut self) -> &mut M {
        &mut self.regmap
    }

    pub fn read_variable_width(&mut self, reg: u32, width: u32) -> Result<u32, Error> {
        read_variable_width(&mut self.regmap, reg, width)
    }

    pub fn irqs(&self) -> Vec<Irq> {
        self.variant.irqs()
    }

    pub fn regulators(&self) -> Vec<Regulator> {
        self.variant.regulators()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;

    use super::*;

    #[derive(Debug, thiserror::Error)]
    #[error("bus timeout")]
    struct Timeout;

    #[derive(Default)]
    struct FakeBus {
        registers: HashMap<u32, u32>,
        reads: Vec<u32>,
    }

    impl RegisterMap for FakeBus {
        type Error = Timeout;

        fn read(&mut self, reg: u32) -> Result<u32, Self::Error> {
            self.reads.push(reg);
            self.registers.get(&reg).copied().ok_or(Timeout)
        }
    }

    fn bus(registers: &[(u32, u32)]) -> FakeBus {
        FakeBus {
            registers: registers.iter().copied().collect(),
            reads: Vec::new(),
        }
    }

    #[test]
    fn variant_numbering() {
        assert_eq!(Variant::COUNT, 10);
        for (index, variant) in Variant::iter().enumerate() {
            assert_eq!(u8::from(variant) as usize, index);
        }
        assert_eq!(Variant::Axp813.to_string(), "axp813");
    }

    #[test]
    fn match_known_devices() {
        assert_eq!(match_device("x-powers,axp209").unwrap(), Variant::Axp209);
        assert_eq!(match_device("x-powers,axp813").unwrap(), Variant::Axp813);
        assert_eq!(match_device("INT33F4").unwrap(), Variant::Axp288);

        for (compatible, variant) in MATCH_TABLE {
            assert_eq!(match_device(compatible).unwrap(), *variant);
        }
        assert_eq!(MATCH_TABLE.len(), Variant::COUNT);
    }

    #[test]
    fn match_unknown_device() {
        assert!(matches!(
            match_device("x-powers,axp717"),
            Err(Error::UnknownDevice(name)) if name == "x-powers,axp717"
        ));
    }

    #[test]
    fn variable_width_12_bit() {
        let mut regmap = bus(&[
            (regs::axp20x::ACIN_V_ADC_H, 0xAB),
            (regs::axp20x::ACIN_V_ADC_L, 0x0C),
        ]);

        let value = read_variable_width(&mut regmap, regs::axp20x::ACIN_V_ADC_H, 12).unwrap();

        assert_eq!(value, 0xABC);
        assert_eq!(regmap.reads, vec![0x56, 0x57]);
    }

    #[test]
    fn variable_width_16_bit() {
        let mut regmap = bus(&[(0xa0, 0x12), (0xa1, 0x34)]);

        assert_eq!(read_variable_width(&mut regmap, 0xa0, 16).unwrap(), 0x1234);
    }

    #[test]
    fn variable_width_at_end_of_address_space() {
        struct AnyRegister(Vec<u32>);

        impl RegisterMap for AnyRegister {
            type Error = Timeout;

            fn read(&mut self, reg: u32) -> Result<u32, Self::Error> {
                self.0.push(reg);
                Ok(1)
            }
        }

        let mut regmap = AnyRegister(Vec::new());

        assert!(matches!(
            read_variable_width(&mut regmap, u32::MAX, 12),
            Err(Error::RegisterOverflow(u32::MAX))
        ));
        assert!(regmap.0.is_empty());
        assert_eq!(
            read_variable_width(&mut regmap, u32::MAX - 1, 12).unwrap(),
            0x11
        );
    }

    #[test]
    fn variable_width_rejects_bad_width() {
        let mut regmap = bus(&[(0x56, 0xFF), (0x57, 0xFF)]);

        for width in [0, 7, 8, 17, 32] {
            assert!(matches!(
                read_variable_width(&mut regmap, 0x56, width),
                Err(Error::InvalidWidth(w)) if w == width
            ));
        }
        assert!(regmap.reads.is_empty());
    }

    #[test]
    fn variable_width_propagates_bus_error() {
        let mut regmap = bus(&[(0x78, 0x01)]);

        match read_variable_width(&mut regmap, 0x78, 12) {
            Err(Error::RegisterRead { reg, source }) => {
                assert_eq!(reg, 0x79);
                assert_eq!(source.to_string(), "bus timeout");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn irq_sets_per_variant() {
        let irqs = Variant::Axp209.irqs();
        assert_eq!(irqs.len(), 37);
        assert_eq!(
            irqs[0],
            Irq {
                number: 1,
                name: "ACIN_OVER_V"
            }
        );
        assert_eq!(Variant::Axp202.irqs(), irqs);

        assert_eq!(Variant::Axp813.irqs(), Variant::Axp803.irqs());
        assert_eq!(Variant::Axp806.irqs()[0].number, 0);
        assert_eq!(Variant::Axp288.irqs()[0].number, 2);
    }

    #[test]
    fn regulator_sets_per_variant() {
        assert!(Variant::Axp152.regulators().is_empty());
        assert!(Variant::Axp288.regulators().is_empty());

        let regulators = Variant::Axp223.regulators();
        assert_eq!(regulators.len(), 20);
        assert_eq!(
            regulators[17],
            Regulator {
                id: 17,
                name: "RTC_LDO"
            }
        );

        assert_eq!(Variant::Axp813.regulators().len(), 24);
        assert_eq!(Variant::Axp803.regulators().len(), 22);
    }

    #[test]
    fn device_reads_through_regmap() {
        let regmap = bus(&[(0x5e, 0x8a), (0x5f, 0x05)]);
        let mut device = Axp20xDevice::new("x-powers,axp209", regmap)
            .unwrap()
            .with_irq(32, 0x8);

        assert_eq!(device.variant, Variant::Axp209);
        assert_eq!(device.irq, Some(32));
        assert_eq!(device.read_variable_width(0x5e, 12).unwrap(), 0x8a5);
        assert_eq!(device.regmap().reads, vec![0x5e, 0x5f]);
        assert_eq!(device.regulators().len(), 7);
    }

    #[test]
    fn device_unknown_compatible() {
        assert!(Axp20xDevice::new("x-powers,axp999", bus(&[])).is_err());
    }
}
