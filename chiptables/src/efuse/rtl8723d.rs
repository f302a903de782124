//! Efuse mask tables for the rtl8723d
//!
//! This file was automatically generated, please do not edit it manually!
//!
//! Generated: 2026-10-16 09:12
//! Source:    rtl8723d

#![allow(unused)]

use super::EfuseMaskTable;

/// Mask table from MPCIE.TXT
pub(crate) static MP_MPCIE: EfuseMaskTable<'static> = EfuseMaskTable::new(&[
    0xFF, 0xF3, 0x00, 0x0E, 0x70, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x07, 0xF3, 0xFF, 0xFF, 0x7C,
    0x30, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
]);
