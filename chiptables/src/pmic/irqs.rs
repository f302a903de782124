//! Interrupt numbers
//!
//! Numbers are the hardware interrupt indices as seen by the interrupt
//! controller of each family. Some families leave gaps in the numbering.

use strum::{Display, EnumIter, IntoStaticStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, IntoStaticStr)]
#[repr(u8)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Axp152Irq {
    Ldo0inConnect = 1,
    Ldo0inRemoval,
    Aldo0inConnect,
    Aldo0inRemoval,
    Dcdc1VLow,
    Dcdc2VLow,
    Dcdc3VLow,
    Dcdc4VLow,
    PekShort,
    PekLong,
    Timer,
    PekRisEdge,
    PekFalEdge,
    Gpio3Input,
    Gpio2Input,
    Gpio1Input,
    Gpio0Input,
}

/// AXP202 and AXP209
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, IntoStaticStr)]
#[repr(u8)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Axp20xIrq {
    AcinOverV = 1,
    AcinPlugin,
    AcinRemoval,
    VbusOverV,
    VbusPlugin,
    VbusRemoval,
    VbusVLow,
    BattPlugin,
    BattRemoval,
    BattEntActMode,
    BattExitActMode,
    Charg,
    ChargDone,
    BattTempHigh,
    BattTempLow,
    DieTempHigh,
    ChargILow,
    Dcdc1VLong,
    Dcdc2VLong,
    Dcdc3VLong,
    PekShort = 22,
    PekLong,
    NOePwrOn,
    NOePwrOff,
    VbusValid,
    VbusNotValid,
    VbusSessValid,
    VbusSessEnd,
    LowPwrLvl1,
    LowPwrLvl2,
    Timer,
    PekRisEdge,
    PekFalEdge,
    Gpio3Input,
    Gpio2Input,
    Gpio1Input,
    Gpio0Input,
}

/// AXP221 and AXP223
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, IntoStaticStr)]
#[repr(u8)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Axp22xIrq {
    AcinOverV = 1,
    AcinPlugin,
    AcinRemoval,
    VbusOverV,
    VbusPlugin,
    VbusRemoval,
    VbusVLow,
    BattPlugin,
    BattRemoval,
    BattEntActMode,
    BattExitActMode,
    Charg,
    ChargDone,
    BattTempHigh,
    BattTempLow,
    DieTempHigh,
    PekShort,
    PekLong,
    LowPwrLvl1,
    LowPwrLvl2,
    Timer,
    PekRisEdge,
    PekFalEdge,
    Gpio1Input,
    Gpio0Input,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, IntoStaticStr)]
#[repr(u8)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Axp288Irq {
    VbusFall = 2,
    VbusRise,
    Ov,
    FallingAlt,
    RisingAlt,
    OvAlt,
    Done = 10,
    Charging,
    SafeQuit,
    SafeEnter,
    Absent,
    Append,
    Qwbtu,
    Wbtu,
    Qwbto,
    Wbto,
    Qcbtu,
    Cbtu,
    Qcbto,
    Cbto,
    Wl2,
    Wl1,
    Gpadc,
    Ot = 31,
    Gpio0,
    Gpio1,
    Poko,
    Pokl,
    Poks,
    Pokn,
    Pokp,
    Timer,
    MvChng,
    BcUsbChng,
}

/// AXP803, also used by the AXP813
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, IntoStaticStr)]
#[repr(u8)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Axp803Irq {
    AcinOverV = 1,
    AcinPlugin,
    AcinRemoval,
    VbusOverV,
    VbusPlugin,
    VbusRemoval,
    BattPlugin,
    BattRemoval,
    BattEntActMode,
    BattExitActMode,
    Charg,
    ChargDone,
    BattChgTempHigh,
    BattChgTempHighEnd,
    BattChgTempLow,
    BattChgTempLowEnd,
    BattActTempHigh,
    BattActTempHighEnd,
    BattActTempLow,
    BattActTempLowEnd,
    DieTempHigh,
    Gpadc,
    LowPwrLvl1,
    LowPwrLvl2,
    Timer,
    PekRisEdge,
    PekFalEdge,
    PekShort,
    PekLong,
    PekOverOff,
    Gpio1Input,
    Gpio0Input,
    BcUsbChng,
    MvChng,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, IntoStaticStr)]
#[repr(u8)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Axp806Irq {
    DieTempHighLv1 = 0,
    DieTempHighLv2,
    DcdcaVLow,
    DcdcbVLow,
    DcdccVLow,
    DcdcdVLow,
    DcdceVLow,
    PokLong,
    PokShort,
    Wakeup,
    PokFall,
    PokRise,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, IntoStaticStr)]
#[repr(u8)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Axp809Irq {
    AcinOverV = 1,
    AcinPlugin,
    AcinRemoval,
    VbusOverV,
    VbusPlugin,
    VbusRemoval,
    VbusVLow,
    BattPlugin,
    BattRemoval,
    BattEntActMode,
    BattExitActMode,
    Charg,
    ChargDone,
    BattChgTempHigh,
    BattChgTempHighEnd,
    BattChgTempLow,
    BattChgTempLowEnd,
    BattActTempHigh,
    BattActTempHighEnd,
    BattActTempLow,
    BattActTempLowEnd,
    DieTempHigh,
    LowPwrLvl1,
    LowPwrLvl2,
    Timer,
    PekRisEdge,
    PekFalEdge,
    PekShort,
    PekLong,
    PekOverOff,
    Gpio1Input,
    Gpio0Input,
}

impl_into_u8!(
    Axp152Irq, Axp20xIrq, Axp22xIrq, Axp288Irq, Axp803Irq, Axp806Irq, Axp809Irq,
);
