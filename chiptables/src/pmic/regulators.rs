//! Regulator IDs
//!
//! IDs are zero based and dense within each family; the number of regulators
//! is available through [`strum::EnumCount`].

use strum::{Display, EnumCount, EnumIter, IntoStaticStr};

/// AXP202 and AXP209
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumCount, EnumIter, IntoStaticStr)]
#[repr(u8)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Axp20xRegulator {
    Ldo1 = 0,
    Ldo2,
    Ldo3,
    Ldo4,
    Ldo5,
    Dcdc2,
    Dcdc3,
}

/// AXP221 and AXP223
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumCount, EnumIter, IntoStaticStr)]
#[repr(u8)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Axp22xRegulator {
    Dcdc1 = 0,
    Dcdc2,
    Dcdc3,
    Dcdc4,
    Dcdc5,
    Dc1sw,
    Dc5ldo,
    Aldo1,
    Aldo2,
    Aldo3,
    Eldo1,
    Eldo2,
    Eldo3,
    Dldo1,
    Dldo2,
    Dldo3,
    Dldo4,
    RtcLdo,
    LdoIo0,
    LdoIo1,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumCount, EnumIter, IntoStaticStr)]
#[repr(u8)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Axp806Regulator {
    Dcdca = 0,
    Dcdcb,
    Dcdcc,
    Dcdcd,
    Dcdce,
    Aldo1,
    Aldo2,
    Aldo3,
    Bldo1,
    Bldo2,
    Bldo3,
    Bldo4,
    Cldo1,
    Cldo2,
    Cldo3,
    Sw,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumCount, EnumIter, IntoStaticStr)]
#[repr(u8)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Axp809Regulator {
    Dcdc1 = 0,
    Dcdc2,
    Dcdc3,
    Dcdc4,
    Dcdc5,
    Dc1sw,
    Dc5ldo,
    Aldo1,
    Aldo2,
    Aldo3,
    Eldo1,
    Eldo2,
    Eldo3,
    Dldo1,
    Dldo2,
    RtcLdo,
    LdoIo0,
    LdoIo1,
    Sw,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumCount, EnumIter, IntoStaticStr)]
#[repr(u8)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Axp803Regulator {
    Dcdc1 = 0,
    Dcdc2,
    Dcdc3,
    Dcdc4,
    Dcdc5,
    Dcdc6,
    Dc1sw,
    Aldo1,
    Aldo2,
    Aldo3,
    Dldo1,
    Dldo2,
    Dldo3,
    Dldo4,
    Eldo1,
    Eldo2,
    Eldo3,
    Fldo1,
    Fldo2,
    RtcLdo,
    LdoIo0,
    LdoIo1,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumCount, EnumIter, IntoStaticStr)]
#[repr(u8)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Axp813Regulator {
    Dcdc1 = 0,
    Dcdc2,
    Dcdc3,
    Dcdc4,
    Dcdc5,
    Dcdc6,
    Dcdc7,
    Aldo1,
    Aldo2,
    Aldo3,
    Dldo1,
    Dldo2,
    Dldo3,
    Dldo4,
    Eldo1,
    Eldo2,
    Eldo3,
    Fldo1,
    Fldo2,
    Fldo3,
    RtcLdo,
    LdoIo0,
    LdoIo1,
    Sw,
}

impl_into_u8!(
    Axp20xRegulator,
    Axp22xRegulator,
    Axp806Regulator,
    Axp809Regulator,
    Axp803Regulator,
    Axp813Regulator,
);
