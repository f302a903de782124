//! Command implementations of the `chiptables` binary
//!
//! No stability guaranties apply

use std::{fs, num::ParseIntError, path::PathBuf};

use clap::Args;
use log::{info, warn};
use miette::{IntoDiagnostic, Result, WrapErr};

use self::config::Config;
use crate::{
    efuse::{EfuseMaskTable, MaskVariant},
    pmic::{Axp20xDevice, RegisterDump, Variant},
};

pub mod config;

/// Mask table selection, overriding the configuration file
#[derive(Debug, Args)]
pub struct MaskArgs {
    /// Built-in mask table to use
    #[arg(long, value_enum)]
    pub variant: Option<MaskVariant>,
    /// Load the mask table from a file instead of using a built-in one
    #[arg(long, value_name = "FILE", conflicts_with = "variant")]
    pub mask_file: Option<PathBuf>,
}

/// Query individual efuse offsets
#[derive(Debug, Args)]
pub struct IsMaskedArgs {
    /// Efuse offsets, decimal or prefixed with `0x`, `0o` or `0b`
    #[arg(required = true, value_parser = parse_u16)]
    pub offsets: Vec<u16>,

    #[command(flatten)]
    pub mask_args: MaskArgs,
}

/// Apply the mask table to an efuse map dump
#[derive(Debug, Args)]
pub struct FilterMapArgs {
    /// Binary efuse map
    pub input: PathBuf,
    /// Write the result here instead of modifying the input
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub mask_args: MaskArgs,
}

/// List regulators and interrupts of a PMIC variant
#[derive(Debug, Args)]
pub struct PmicInfoArgs {
    /// PMIC variant
    #[arg(value_enum)]
    pub variant: Variant,
}

/// Decode a value split over two registers of a register dump
#[derive(Debug, Args)]
pub struct PmicReadArgs {
    /// Register dump, one `<reg> <value>` pair per line
    pub dump: PathBuf,
    /// Device-tree compatible or ACPI ID of the PMIC
    #[arg(long, default_value = "x-powers,axp209")]
    pub compatible: String,
    /// Register holding the most significant bits
    #[arg(long, value_parser = parse_u32)]
    pub reg: u32,
    /// Width of the value in bits
    #[arg(long, default_value_t = 12)]
    pub width: u32,
}

fn parse_u16(input: &str) -> Result<u16, ParseIntError> {
    parse_int::parse(input)
}

fn parse_u32(input: &str) -> Result<u32, ParseIntError> {
    parse_int::parse(input)
}

/// Select the mask table from the command line, falling back to the
/// configuration.
pub fn resolve_mask_table(args: &MaskArgs, config: &Config) -> Result<EfuseMaskTable<'static>> {
    let table = match (&args.mask_file, args.variant) {
        (Some(path), _) => EfuseMaskTable::load(path)?,
        (None, Some(variant)) => variant.table().clone(),
        (None, None) => config.mask_table()?,
    };

    Ok(table)
}

pub fn mask_info(args: MaskArgs, config: &Config) -> Result<()> {
    let table = resolve_mask_table(&args, config)?;

    println!("Length:  {} bytes", table.len());
    println!("Offsets: 0x000..{:#05x}", table.offset_limit());
    println!();

    for (row, chunk) in table.as_bytes().chunks(16).enumerate() {
        let bytes = chunk
            .iter()
            .map(|b| format!("{b:02x}"))
            .collect::<Vec<_>>()
            .join(" ");

        println!("{:#06x}: {bytes}", row * 16);
    }

    Ok(())
}

pub fn is_masked(args: IsMaskedArgs, config: &Config) -> Result<()> {
    let table = resolve_mask_table(&args.mask_args, config)?;

    for offset in args.offsets {
        let state = if table.is_masked(offset)? {
            "masked"
        } else {
            "unmasked"
        };

        println!("{offset:#05x}: {state}");
    }

    Ok(())
}

pub fn list_masked(args: MaskArgs, config: &Config) -> Result<()> {
    let table = resolve_mask_table(&args, config)?;

    for range in table.masked_ranges() {
        println!(
            "{:#05x}..{:#05x} ({} bytes)",
            range.start,
            range.end,
            range.len()
        );
    }

    Ok(())
}

pub fn filter_map(args: FilterMapArgs, config: &Config) -> Result<()> {
    let table = resolve_mask_table(&args.mask_args, config)?;

    let mut map = fs::read(&args.input)
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to read efuse map {}", args.input.display()))?;

    if config.efuse.disable_mask {
        warn!("Efuse masking is disabled by configuration, map is left unchanged");
    } else {
        table.mask_map(&mut map)?;
    }

    let output = args.output.as_ref().unwrap_or(&args.input);
    fs::write(output, &map)
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to write efuse map {}", output.display()))?;

    info!("Wrote {} byte efuse map to {}", map.len(), output.display());

    Ok(())
}

pub fn pmic_info(args: PmicInfoArgs) -> Result<()> {
    let variant = args.variant;

    println!("Variant: {variant} ({})", u8::from(variant));

    let regulators = variant.regulators();
    if regulators.is_empty() {
        println!("Regulators: none");
    } else {
        println!("Regulators:");
        for regulator in regulators {
            println!("  {:>2}  {}", regulator.id, regulator.name);
        }
    }

    println!("IRQs:");
    for irq in variant.irqs() {
        println!("  {:>2}  {}", irq.number, irq.name);
    }

    Ok(())
}

pub fn pmic_read(args: PmicReadArgs) -> Result<()> {
    let dump = RegisterDump::load(&args.dump)?;
    let mut device = Axp20xDevice::new(&args.compatible, dump)?;

    let value = device
        .read_variable_width(args.reg, args.width)
        .wrap_err_with(|| format!("Failed to decode {} bit value", args.width))?;

    info!("Decoded register {:#04x} of {}", args.reg, device.variant);
    println!("{value:#x} ({value})");

    Ok(())
}
