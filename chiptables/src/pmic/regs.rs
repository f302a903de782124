//! Register addresses
//!
//! Grouped per family. Registers which are not redefined by a later family
//! are shared with the AXP20X set.

/// AXP152
pub mod axp152 {
    // Power supply
    pub const PWR_OP_MODE: u32 = 0x01;
    pub const LDO3456_DC1234_CTRL: u32 = 0x12;
    pub const ALDO_OP_MODE: u32 = 0x13;
    pub const LDO0_CTRL: u32 = 0x15;
    pub const DCDC2_V_OUT: u32 = 0x23;
    pub const DCDC2_V_RAMP: u32 = 0x25;
    pub const DCDC1_V_OUT: u32 = 0x26;
    pub const DCDC3_V_OUT: u32 = 0x27;
    pub const ALDO12_V_OUT: u32 = 0x28;
    pub const DLDO1_V_OUT: u32 = 0x29;
    pub const DLDO2_V_OUT: u32 = 0x2a;
    pub const DCDC4_V_OUT: u32 = 0x2b;
    pub const V_OFF: u32 = 0x31;
    pub const OFF_CTRL: u32 = 0x32;
    pub const PEK_KEY: u32 = 0x36;
    pub const DCDC_FREQ: u32 = 0x37;
    pub const DCDC_MODE: u32 = 0x80;

    // Interrupt
    pub const IRQ1_EN: u32 = 0x40;
    pub const IRQ2_EN: u32 = 0x41;
    pub const IRQ3_EN: u32 = 0x42;
    pub const IRQ1_STATE: u32 = 0x48;
    pub const IRQ2_STATE: u32 = 0x49;
    pub const IRQ3_STATE: u32 = 0x4a;

    // GPIO
    pub const GPIO0_CTRL: u32 = 0x90;
    pub const GPIO1_CTRL: u32 = 0x91;
    pub const GPIO2_CTRL: u32 = 0x92;
    pub const GPIO3_CTRL: u32 = 0x93;
    pub const LDOGPIO2_V_OUT: u32 = 0x96;
    pub const GPIO_INPUT: u32 = 0x97;
    pub const PWM0_FREQ_X: u32 = 0x98;
    pub const PWM0_FREQ_Y: u32 = 0x99;
    pub const PWM0_DUTY_CYCLE: u32 = 0x9a;
    pub const PWM1_FREQ_X: u32 = 0x9b;
    pub const PWM1_FREQ_Y: u32 = 0x9c;
    pub const PWM1_DUTY_CYCLE: u32 = 0x9d;
}

/// AXP202 and AXP209, shared by most of the family
pub mod axp20x {
    /// Data cache register `m`.
    pub const fn datacache(m: u32) -> u32 {
        0x04 + m
    }

    // Power supply
    pub const PWR_INPUT_STATUS: u32 = 0x00;
    pub const PWR_OP_MODE: u32 = 0x01;
    pub const USB_OTG_STATUS: u32 = 0x02;
    pub const PWR_OUT_CTRL: u32 = 0x12;
    pub const DCDC2_V_OUT: u32 = 0x23;
    pub const DCDC2_LDO3_V_RAMP: u32 = 0x25;
    pub const DCDC3_V_OUT: u32 = 0x27;
    pub const LDO24_V_OUT: u32 = 0x28;
    pub const LDO3_V_OUT: u32 = 0x29;
    pub const VBUS_IPSOUT_MGMT: u32 = 0x30;
    pub const V_OFF: u32 = 0x31;
    pub const OFF_CTRL: u32 = 0x32;
    pub const CHRG_CTRL1: u32 = 0x33;
    pub const CHRG_CTRL2: u32 = 0x34;
    pub const CHRG_BAK_CTRL: u32 = 0x35;
    pub const PEK_KEY: u32 = 0x36;
    pub const DCDC_FREQ: u32 = 0x37;
    pub const V_LTF_CHRG: u32 = 0x38;
    pub const V_HTF_CHRG: u32 = 0x39;
    pub const APS_WARN_L1: u32 = 0x3a;
    pub const APS_WARN_L2: u32 = 0x3b;
    pub const V_LTF_DISCHRG: u32 = 0x3c;
    pub const V_HTF_DISCHRG: u32 = 0x3d;

    // Interrupt
    pub const IRQ1_EN: u32 = 0x40;
    pub const IRQ2_EN: u32 = 0x41;
    pub const IRQ3_EN: u32 = 0x42;
    pub const IRQ4_EN: u32 = 0x43;
    pub const IRQ5_EN: u32 = 0x44;
    pub const IRQ6_EN: u32 = 0x45;
    pub const IRQ1_STATE: u32 = 0x48;
    pub const IRQ2_STATE: u32 = 0x49;
    pub const IRQ3_STATE: u32 = 0x4a;
    pub const IRQ4_STATE: u32 = 0x4b;
    pub const IRQ5_STATE: u32 = 0x4c;
    pub const IRQ6_STATE: u32 = 0x4d;

    // ADC
    pub const ACIN_V_ADC_H: u32 = 0x56;
    pub const ACIN_V_ADC_L: u32 = 0x57;
    pub const ACIN_I_ADC_H: u32 = 0x58;
    pub const ACIN_I_ADC_L: u32 = 0x59;
    pub const VBUS_V_ADC_H: u32 = 0x5a;
    pub const VBUS_V_ADC_L: u32 = 0x5b;
    pub const VBUS_I_ADC_H: u32 = 0x5c;
    pub const VBUS_I_ADC_L: u32 = 0x5d;
    pub const TEMP_ADC_H: u32 = 0x5e;
    pub const TEMP_ADC_L: u32 = 0x5f;
    pub const TS_IN_H: u32 = 0x62;
    pub const TS_IN_L: u32 = 0x63;
    pub const GPIO0_V_ADC_H: u32 = 0x64;
    pub const GPIO0_V_ADC_L: u32 = 0x65;
    pub const GPIO1_V_ADC_H: u32 = 0x66;
    pub const GPIO1_V_ADC_L: u32 = 0x67;
    pub const PWR_BATT_H: u32 = 0x70;
    pub const PWR_BATT_M: u32 = 0x71;
    pub const PWR_BATT_L: u32 = 0x72;
    pub const BATT_V_H: u32 = 0x78;
    pub const BATT_V_L: u32 = 0x79;
    pub const BATT_CHRG_I_H: u32 = 0x7a;
    pub const BATT_CHRG_I_L: u32 = 0x7b;
    pub const BATT_DISCHRG_I_H: u32 = 0x7c;
    pub const BATT_DISCHRG_I_L: u32 = 0x7d;
    pub const IPSOUT_V_HIGH_H: u32 = 0x7e;
    pub const IPSOUT_V_HIGH_L: u32 = 0x7f;

    // Power supply
    pub const DCDC_MODE: u32 = 0x80;
    pub const ADC_EN1: u32 = 0x82;
    pub const ADC_EN2: u32 = 0x83;
    pub const ADC_RATE: u32 = 0x84;
    pub const GPIO10_IN_RANGE: u32 = 0x85;
    pub const GPIO1_ADC_IRQ_RIS: u32 = 0x86;
    pub const GPIO1_ADC_IRQ_FAL: u32 = 0x87;
    pub const TIMER_CTRL: u32 = 0x8a;
    pub const VBUS_MON: u32 = 0x8b;
    pub const OVER_TMP: u32 = 0x8f;

    // GPIO
    pub const GPIO0_CTRL: u32 = 0x90;
    pub const LDO5_V_OUT: u32 = 0x91;
    pub const GPIO1_CTRL: u32 = 0x92;
    pub const GPIO2_CTRL: u32 = 0x93;
    pub const GPIO20_SS: u32 = 0x94;
    pub const GPIO3_CTRL: u32 = 0x95;

    // Battery
    pub const CHRG_CC_31_24: u32 = 0xb0;
    pub const CHRG_CC_23_16: u32 = 0xb1;
    pub const CHRG_CC_15_8: u32 = 0xb2;
    pub const CHRG_CC_7_0: u32 = 0xb3;
    pub const DISCHRG_CC_31_24: u32 = 0xb4;
    pub const DISCHRG_CC_23_16: u32 = 0xb5;
    pub const DISCHRG_CC_15_8: u32 = 0xb6;
    pub const DISCHRG_CC_7_0: u32 = 0xb7;
    pub const CC_CTRL: u32 = 0xb8;
    pub const FG_RES: u32 = 0xb9;

    // OCV
    pub const RDC_H: u32 = 0xba;
    pub const RDC_L: u32 = 0xbb;

    /// Open circuit voltage table entry `m`, for `m` in `0..=OCV_MAX`.
    pub const fn ocv(m: u32) -> u32 {
        0xc0 + m
    }

    pub const OCV_MAX: u32 = 0xf;
}

/// AXP221 and AXP223
pub mod axp22x {
    // Power supply
    pub const PWR_OUT_CTRL1: u32 = 0x10;
    pub const PWR_OUT_CTRL2: u32 = 0x12;
    pub const PWR_OUT_CTRL3: u32 = 0x13;
    pub const DLDO1_V_OUT: u32 = 0x15;
    pub const DLDO2_V_OUT: u32 = 0x16;
    pub const DLDO3_V_OUT: u32 = 0x17;
    pub const DLDO4_V_OUT: u32 = 0x18;
    pub const ELDO1_V_OUT: u32 = 0x19;
    pub const ELDO2_V_OUT: u32 = 0x1a;
    pub const ELDO3_V_OUT: u32 = 0x1b;
    pub const DC5LDO_V_OUT: u32 = 0x1c;
    pub const DCDC1_V_OUT: u32 = 0x21;
    pub const DCDC2_V_OUT: u32 = 0x22;
    pub const DCDC3_V_OUT: u32 = 0x23;
    pub const DCDC4_V_OUT: u32 = 0x24;
    pub const DCDC5_V_OUT: u32 = 0x25;
    pub const DCDC23_V_RAMP_CTRL: u32 = 0x27;
    pub const ALDO1_V_OUT: u32 = 0x28;
    pub const ALDO2_V_OUT: u32 = 0x29;
    pub const ALDO3_V_OUT: u32 = 0x2a;
    pub const CHRG_CTRL3: u32 = 0x35;
    pub const PWREN_CTRL1: u32 = 0x8c;
    pub const PWREN_CTRL2: u32 = 0x8d;

    // GPIO
    pub const LDO_IO0_V_OUT: u32 = 0x91;
    pub const LDO_IO1_V_OUT: u32 = 0x93;
    pub const GPIO_STATE: u32 = 0x94;
    pub const GPIO_PULL_DOWN: u32 = 0x95;

    // Temperature and battery
    pub const PMIC_TEMP_H: u32 = 0x56;
    pub const PMIC_TEMP_L: u32 = 0x57;
    pub const TS_ADC_H: u32 = 0x58;
    pub const TS_ADC_L: u32 = 0x59;
    pub const BATLOW_THRES1: u32 = 0xe6;
}

/// AXP288, some of which are shared with the AXP803
pub mod axp288 {
    // Charger and ADC
    pub const POWER_REASON: u32 = 0x02;
    pub const BC_GLOBAL: u32 = 0x2c;
    pub const BC_VBUS_CNTL: u32 = 0x2d;
    pub const BC_USB_STAT: u32 = 0x2e;
    pub const BC_DET_STAT: u32 = 0x2f;
    pub const PMIC_ADC_H: u32 = 0x56;
    pub const PMIC_ADC_L: u32 = 0x57;
    pub const TS_ADC_H: u32 = 0x58;
    pub const TS_ADC_L: u32 = 0x59;
    pub const GP_ADC_H: u32 = 0x5a;
    pub const GP_ADC_L: u32 = 0x5b;
    pub const ADC_TS_PIN_CTRL: u32 = 0x84;
    pub const RT_BATT_V_H: u32 = 0xa0;
    pub const RT_BATT_V_L: u32 = 0xa1;

    // Fuel Gauge
    pub const FG_RDC1_REG: u32 = 0xba;
    pub const FG_RDC0_REG: u32 = 0xbb;
    pub const FG_OCVH_REG: u32 = 0xbc;
    pub const FG_OCVL_REG: u32 = 0xbd;
    pub const FG_OCV_CURVE_REG: u32 = 0xc0;
    pub const FG_DES_CAP1_REG: u32 = 0xe0;
    pub const FG_DES_CAP0_REG: u32 = 0xe1;
    pub const FG_CC_MTR1_REG: u32 = 0xe2;
    pub const FG_CC_MTR0_REG: u32 = 0xe3;
    pub const FG_OCV_CAP_REG: u32 = 0xe4;
    pub const FG_CC_CAP_REG: u32 = 0xe5;
    pub const FG_LOW_CAP_REG: u32 = 0xe6;
    pub const FG_TUNE0: u32 = 0xe8;
    pub const FG_TUNE1: u32 = 0xe9;
    pub const FG_TUNE2: u32 = 0xea;
    pub const FG_TUNE3: u32 = 0xeb;
    pub const FG_TUNE4: u32 = 0xec;
    pub const FG_TUNE5: u32 = 0xed;
}

/// AXP803
pub mod axp803 {
    // Power supply
    pub const POLYPHASE_CTRL: u32 = 0x14;
    pub const FLDO1_V_OUT: u32 = 0x1c;
    pub const FLDO2_V_OUT: u32 = 0x1d;
    pub const DCDC1_V_OUT: u32 = 0x20;
    pub const DCDC2_V_OUT: u32 = 0x21;
    pub const DCDC3_V_OUT: u32 = 0x22;
    pub const DCDC4_V_OUT: u32 = 0x23;
    pub const DCDC5_V_OUT: u32 = 0x24;
    pub const DCDC6_V_OUT: u32 = 0x25;
    pub const DCDC_FREQ_CTRL: u32 = 0x3b;
}

/// AXP806
pub mod axp806 {
    // Power supply
    pub const STARTUP_SRC: u32 = 0x00;
    pub const CHIP_ID: u32 = 0x03;
    pub const PWR_OUT_CTRL1: u32 = 0x10;
    pub const PWR_OUT_CTRL2: u32 = 0x11;
    pub const DCDCA_V_CTRL: u32 = 0x12;
    pub const DCDCB_V_CTRL: u32 = 0x13;
    pub const DCDCC_V_CTRL: u32 = 0x14;
    pub const DCDCD_V_CTRL: u32 = 0x15;
    pub const DCDCE_V_CTRL: u32 = 0x16;
    pub const ALDO1_V_CTRL: u32 = 0x17;
    pub const ALDO2_V_CTRL: u32 = 0x18;
    pub const ALDO3_V_CTRL: u32 = 0x19;
    pub const DCDC_MODE_CTRL1: u32 = 0x1a;
    pub const DCDC_MODE_CTRL2: u32 = 0x1b;
    pub const DCDC_FREQ_CTRL: u32 = 0x1c;
    pub const BLDO1_V_CTRL: u32 = 0x20;
    pub const BLDO2_V_CTRL: u32 = 0x21;
    pub const BLDO3_V_CTRL: u32 = 0x22;
    pub const BLDO4_V_CTRL: u32 = 0x23;
    pub const CLDO1_V_CTRL: u32 = 0x24;
    pub const CLDO2_V_CTRL: u32 = 0x25;
    pub const CLDO3_V_CTRL: u32 = 0x26;
    pub const VREF_TEMP_WARN_L: u32 = 0xf3;
    pub const BUS_ADDR_EXT: u32 = 0xfe;
    pub const REG_ADDR_EXT: u32 = 0xff;
}

/// AXP813
///
/// DCDC control registers other than DCDC7 are the same as on the AXP803.
pub mod axp813 {
    pub const DCDC7_V_OUT: u32 = 0x26;
    pub const CHRG_CTRL3: u32 = 0x35;
    pub const ACIN_PATH_CTRL: u32 = 0x3a;
    pub const ADC_RATE: u32 = 0x85;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parameterised_registers() {
        assert_eq!(axp20x::datacache(0), 0x04);
        assert_eq!(axp20x::datacache(5), 0x09);
        assert_eq!(axp20x::ocv(0), 0xc0);
        assert_eq!(axp20x::ocv(axp20x::OCV_MAX), 0xcf);
    }

    #[test]
    fn adc_pairs_are_adjacent() {
        assert_eq!(axp20x::BATT_V_L, axp20x::BATT_V_H + 1);
        assert_eq!(axp22x::PMIC_TEMP_L, axp22x::PMIC_TEMP_H + 1);
        assert_eq!(axp288::RT_BATT_V_L, axp288::RT_BATT_V_H + 1);
    }
}
