use std::fmt;

use serde::Serialize;

/// Origin of a configuration value, ordered by increasing precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SourceTier {
	Default,
	ConfigFile,
	Environment,
	CommandLine,
}

impl SourceTier {
	/// Tiers from highest to lowest precedence, the order used during lookup.
	pub const BY_PRECEDENCE: [SourceTier; 4] = [
		SourceTier::CommandLine,
		SourceTier::Environment,
		SourceTier::ConfigFile,
		SourceTier::Default,
	];

	pub fn as_str(self) -> &'static str {
		match self {
			Self::Default => "default",
			Self::ConfigFile => "config file",
			Self::Environment => "environment",
			Self::CommandLine => "command line",
		}
	}
}

impl fmt::Display for SourceTier {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}
