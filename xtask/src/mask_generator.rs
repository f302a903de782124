use std::{
    collections::BTreeMap,
    fmt::Write as _,
    fs,
    path::{Path, PathBuf},
};

use chiptables::efuse::EfuseMaskTable;
use clap::Args;
use log::{info, warn};

use crate::Result;

#[derive(Debug, Args)]
pub(crate) struct GenerateMaskTablesArgs {
    /// Directory holding one sub-directory of `*.TXT` mask dumps per chip,
    /// e.g. `rtl8723d/MPCIE.TXT`
    mask_path: PathBuf,
}

const HEADER: &str = r#"
//! Efuse mask tables for the $CHIP
//!
//! This file was automatically generated, please do not edit it manually!
//!
//! Generated: $DATE
//! Source:    $SOURCE

#![allow(unused)]

use super::EfuseMaskTable;
"#;

/// Chip name to (table name to mask bytes)
type MaskTables = BTreeMap<String, BTreeMap<String, Vec<u8>>>;

pub(crate) fn generate_mask_tables(workspace: &Path, args: GenerateMaskTablesArgs) -> Result<()> {
    let mask_path = args.mask_path.canonicalize()?;
    let efuse_path = workspace
        .join("chiptables")
        .join("src")
        .join("efuse")
        .canonicalize()?;

    let mask_tables = parse_mask_tables(&mask_path)?;
    if mask_tables.is_empty() {
        warn!("No mask dumps found in {}", mask_path.display());
    }

    let date = chrono::Utc::now().format("%Y-%m-%d %H:%M").to_string();
    for (chip, tables) in mask_tables {
        let out_path = efuse_path.join(format!("{chip}.rs"));
        fs::write(&out_path, render_chip(&chip, &date, &tables)?)?;

        info!("Wrote {} tables to {}", tables.len(), out_path.display());
    }

    info!("Remember to expose new tables through `MaskVariant`");

    Ok(())
}

fn parse_mask_tables(mask_path: &Path) -> Result<MaskTables> {
    let mut mask_tables = MaskTables::new();

    for chip_dir in fs::read_dir(mask_path)? {
        let chip_dir = chip_dir?.path();
        if !chip_dir.is_dir() {
            continue;
        }

        let chip = identifier(&chip_dir).to_lowercase();

        for entry in fs::read_dir(&chip_dir)? {
            let path = entry?.path();
            if path
                .extension()
                .is_none_or(|ext| !ext.eq_ignore_ascii_case("txt"))
            {
                continue;
            }

            let table = EfuseMaskTable::load(&path)?;
            mask_tables
                .entry(chip.clone())
                .or_default()
                .insert(identifier(&path).to_uppercase(), table.to_vec());
        }
    }

    Ok(mask_tables)
}

fn identifier(path: &Path) -> String {
    path.file_stem()
        .unwrap_or_default()
        .to_string_lossy()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

fn render_chip(chip: &str, date: &str, tables: &BTreeMap<String, Vec<u8>>) -> Result<String> {
    let mut out = HEADER
        .replace("$CHIP", chip)
        .replace("$DATE", date)
        .replace("$SOURCE", chip)
        .trim_start()
        .to_string();

    for (name, bytes) in tables {
        writeln!(out)?;
        writeln!(out, "/// Mask table from {name}.TXT")?;
        writeln!(
            out,
            "pub(crate) static MP_{name}: EfuseMaskTable<'static> = EfuseMaskTable::new(&["
        )?;

        for row in bytes.chunks(8) {
            let row = row
                .iter()
                .map(|b| format!("0x{b:02X},"))
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(out, "    {row}")?;
        }

        writeln!(out, "]);")?;
    }

    Ok(out)
}
