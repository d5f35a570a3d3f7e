use std::path::PathBuf;

use clap::{Subcommand, ValueEnum};

/// Actions the binary can perform once configuration is resolved.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
	/// Print the effective configuration and where each value came from.
	Config,
	/// List static files provided by the configured modules.
	Static {
		/// Subdirectory inside each module's static tree, e.g. `js` or `src/css`.
		/// Lists each module's static root when omitted.
		#[arg(value_name = "SUBDIR")]
		sub_dir: Option<PathBuf>,
		/// Print filesystem paths instead of servable paths.
		#[arg(short = 'D', long = "disk-path")]
		disk_path: bool,
	},
}

/// Output formats supported by the CLI utility.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
	Plain,
	Json,
}
