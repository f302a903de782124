use std::path::PathBuf;

use chiptables::{
    cli::{
        config::Config, filter_map, is_masked, list_masked, mask_info, pmic_info, pmic_read,
        FilterMapArgs, IsMaskedArgs, MaskArgs, PmicInfoArgs, PmicReadArgs,
    },
    logging::initialize_logger,
};
use clap::{Parser, Subcommand};
use log::{debug, LevelFilter};
use miette::Result;

#[derive(Debug, Parser)]
#[command(about, propagate_version = true, version)]
struct Cli {
    #[command(subcommand)]
    subcommand: Commands,

    /// Configuration file to use instead of `chiptables.toml`
    #[arg(long, global = true, env = "CHIPTABLES_CONFIG")]
    config: Option<PathBuf>,

    /// Print debug output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print the length and contents of an efuse mask table
    MaskInfo(MaskArgs),
    IsMasked(IsMaskedArgs),
    /// List all masked efuse offset ranges
    ListMasked(MaskArgs),
    FilterMap(FilterMapArgs),
    PmicInfo(PmicInfoArgs),
    PmicRead(PmicReadArgs),
}

fn main() -> Result<()> {
    miette::set_panic_hook();

    // Attempt to parse any provided command-line arguments, or print the help
    // message and terminate if the invocation is not correct.
    let cli = Cli::parse();

    initialize_logger(if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    });
    debug!("{:#?}", cli.subcommand);

    // Load any user configuration, if present.
    let config = Config::load(cli.config.as_deref())?;

    match cli.subcommand {
        Commands::MaskInfo(args) => mask_info(args, &config),
        Commands::IsMasked(args) => is_masked(args, &config),
        Commands::ListMasked(args) => list_masked(args, &config),
        Commands::FilterMap(args) => filter_map(args, &config),
        Commands::PmicInfo(args) => pmic_info(args),
        Commands::PmicRead(args) => pmic_read(args),
    }
}
