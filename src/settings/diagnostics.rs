use std::path::PathBuf;

use thiserror::Error;

/// A non-fatal problem met while assembling configuration.
///
/// Diagnostics never stop a load; the affected tier is left empty and lower
/// tiers keep answering.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Diagnostic {
	#[error("no `{name}` configuration file found (searched: {})", display_paths(.searched))]
	ConfigFileNotFound { name: String, searched: Vec<PathBuf> },
	#[error("failed to load configuration file {}: {reason}", .path.display())]
	ConfigFileInvalid { path: PathBuf, reason: String },
	#[error("unable to retrieve current user home directory: {reason}")]
	HomeDirUnavailable { reason: String },
}

fn display_paths(paths: &[PathBuf]) -> String {
	if paths.is_empty() {
		return "nothing".to_string();
	}
	paths
		.iter()
		.map(|path| path.display().to_string())
		.collect::<Vec<_>>()
		.join(", ")
}

/// A value together with the diagnostics reported while producing it.
#[derive(Debug, Clone)]
pub struct Loaded<T> {
	pub value: T,
	pub diagnostics: Vec<Diagnostic>,
}

impl<T> Loaded<T> {
	pub fn new(value: T, diagnostics: Vec<Diagnostic>) -> Self {
		Self { value, diagnostics }
	}

	pub fn into_parts(self) -> (T, Vec<Diagnostic>) {
		(self.value, self.diagnostics)
	}

	pub fn is_clean(&self) -> bool {
		self.diagnostics.is_empty()
	}
}
