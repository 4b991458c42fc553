//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::export::ExportFormat;

/// Show command arguments.
#[derive(Debug, Args)]
pub struct ShowCommand {
    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Validate command arguments.
#[derive(Debug, Args)]
pub struct ValidateCommand {
    /// Site file to validate (defaults to --config or ./site.toml)
    pub file: Option<PathBuf>,
}

/// Export command arguments.
#[derive(Debug, Args)]
pub struct ExportCommand {
    /// Output format (inferred from --output when omitted)
    #[arg(short, long, value_enum)]
    pub format: Option<ExportFormatArg>,

    /// Write to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl ExportCommand {
    /// The format to export in: explicit flag, then output extension, then JSON.
    #[must_use]
    pub fn resolved_format(&self) -> ExportFormat {
        self.format
            .map(ExportFormat::from)
            .or_else(|| self.output.as_deref().and_then(ExportFormat::from_path))
            .unwrap_or_default()
    }
}

/// Export format argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormatArg {
    /// Pretty JSON
    Json,
    /// TOML document
    Toml,
    /// CommonJS module for the site generator
    Js,
}

impl From<ExportFormatArg> for ExportFormat {
    fn from(arg: ExportFormatArg) -> Self {
        match arg {
            ExportFormatArg::Json => Self::Json,
            ExportFormatArg::Toml => Self::Toml,
            ExportFormatArg::Js => Self::Js,
        }
    }
}
