//! Command-line interface for siteconf.
//!
//! This module provides the CLI structure for the `siteconf` binary.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::logging::Verbosity;

pub use commands::{ExportCommand, ExportFormatArg, ShowCommand, ValidateCommand};

/// siteconf - Inspect, validate and export a blog's site configuration
#[derive(Debug, Parser)]
#[command(name = "siteconf")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the site file (defaults to ./site.toml)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the loaded configuration
    Show(ShowCommand),

    /// Check the configuration and report every problem
    Validate(ValidateCommand),

    /// Write the configuration for the site generator
    Export(ExportCommand),

    /// List contact links as a theme would render them
    Contacts,

    /// Print a digest that changes whenever the configuration does
    Fingerprint,

    /// Show the site file and user defaults paths
    Path,
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else {
            match self.verbose {
                0 => Verbosity::Normal,
                1 => Verbosity::Verbose,
                _ => Verbosity::Trace,
            }
        }
    }
}
