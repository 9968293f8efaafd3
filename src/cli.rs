use clap::{Parser, ValueEnum};

use crate::application::dto::FlagSet;

/// Flag names accepted without their leading `--`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BareFlag {
    Long,
    Verbose,
    Json,
}

/// Report how rotten the dependencies of an npm project are
#[derive(Parser, Debug)]
#[command(name = "rodeps")]
#[command(disable_help_flag = true, disable_version_flag = true)]
#[command(
    about = "Report how many npm dependencies are outdated, per dependency category",
    long_about = None
)]
#[command(args_override_self = true)]
pub struct Args {
    /// List every outdated package, grouped by category
    #[arg(long)]
    pub long: bool,

    /// Show progress and debug diagnostics on stderr
    #[arg(long)]
    pub verbose: bool,

    /// Print the report as JSON instead of tables
    #[arg(long)]
    pub json: bool,

    /// Same flags written without dashes, e.g. `rodeps json`
    #[arg(value_enum, hide = true)]
    pub bare: Vec<BareFlag>,
}

impl Args {
    pub fn try_parse_args() -> Result<Self, clap::Error> {
        Self::try_parse()
    }

    /// Folds dashed and bare flags into a single immutable set
    pub fn flag_set(&self) -> FlagSet {
        FlagSet::new(
            self.long || self.bare.contains(&BareFlag::Long),
            self.verbose || self.bare.contains(&BareFlag::Verbose),
            self.json || self.bare.contains(&BareFlag::Json),
        )
    }
}
