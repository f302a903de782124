//! Library and application errors

use std::io;

use miette::Diagnostic;
use strum::VariantNames;
use thiserror::Error;

use crate::{efuse::MaskVariant, pmic::Variant};

/// All possible errors returned by chiptables
#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("Efuse offset {offset:#x} is outside of the mask table (limit {limit:#x})")]
    #[diagnostic(
        code(chiptables::efuse::out_of_range),
        help("Each mask table byte covers 16 efuse offsets")
    )]
    OutOfRange { offset: u32, limit: u32 },

    #[error("Destination buffer too small, need {required} bytes but only {actual} are available")]
    #[diagnostic(code(chiptables::efuse::buffer_too_small))]
    BufferTooSmall { required: usize, actual: usize },

    #[error("Mask table contains no bytes")]
    #[diagnostic(
        code(chiptables::efuse::empty_mask_table),
        help("Built-in tables are: {}", MaskVariant::VARIANTS.join(", "))
    )]
    EmptyMaskTable,

    #[error("Invalid byte '{token}' on line {line} of mask file")]
    #[diagnostic(
        code(chiptables::efuse::invalid_mask_token),
        help("Mask files contain hexadecimal bytes, e.g. `0xFF` or `f3`")
    )]
    InvalidMaskToken { line: usize, token: String },

    #[error("Failed to open file: {0}")]
    #[diagnostic(code(chiptables::file_open))]
    FileOpenError(String, #[source] io::Error),

    #[error("Register width {0} is not supported")]
    #[diagnostic(
        code(chiptables::pmic::invalid_width),
        help("Variable width registers are between 9 and 16 bits wide")
    )]
    InvalidWidth(u32),

    #[error("Register {0:#x} has no following register")]
    #[diagnostic(
        code(chiptables::pmic::register_overflow),
        help("The low bits of a variable width value are read from the next register address")
    )]
    RegisterOverflow(u32),

    #[error("Failed to read register {reg:#04x}")]
    #[diagnostic(code(chiptables::pmic::register_read))]
    RegisterRead {
        reg: u32,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Malformed register dump on line {line}")]
    #[diagnostic(
        code(chiptables::pmic::invalid_register_dump),
        help("Each line holds a register address and its value in hex, e.g. `0x56 0x1f`, and every register appears once")
    )]
    InvalidRegisterDump { line: usize },

    #[error("No AXP20x variant matches '{0}'")]
    #[diagnostic(
        code(chiptables::pmic::unknown_device),
        help("Supported variants are: {}", Variant::VARIANTS.join(", "))
    )]
    UnknownDevice(String),
}
