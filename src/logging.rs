//! Process-wide `tracing` subscriber configured from the resolved settings.
//!
//! `LogLevel` picks the default verbosity and `CYRUS_LOG` may replace it with
//! any filter directive. Output goes to `LogFile` when set, to stdout when
//! `LogStdout` is enabled, and to stderr otherwise.

use std::fs::OpenOptions;
use std::io;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing::Level;
use tracing_subscriber::EnvFilter;

use crate::settings::{Settings, keys};

/// Environment variable holding a filter directive that overrides `LogLevel`.
pub const FILTER_ENV: &str = "CYRUS_LOG";

/// Map a `LogLevel` setting to a tracing level.
///
/// `panic` is accepted for compatibility and maps to `error`; anything
/// unrecognised falls back to `info`.
pub fn parse_level(value: &str) -> Level {
	match value.trim().to_ascii_lowercase().as_str() {
		"trace" => Level::TRACE,
		"debug" => Level::DEBUG,
		"warn" | "warning" => Level::WARN,
		"error" | "panic" | "fatal" => Level::ERROR,
		_ => Level::INFO,
	}
}

/// Effective level after `Debug` mode is taken into account.
pub fn effective_level(settings: &Settings) -> Level {
	let level = parse_level(&settings.get_string(keys::LOG_LEVEL));
	if settings.get_bool(keys::DEBUG) && level < Level::DEBUG {
		Level::DEBUG
	} else {
		level
	}
}

/// Install the global subscriber. Calling it twice leaves the first one in place.
pub fn initialize(settings: &Settings) -> Result<()> {
	let level = effective_level(settings);
	let filter = EnvFilter::try_from_env(FILTER_ENV)
		.unwrap_or_else(|_| EnvFilter::new(level.as_str().to_ascii_lowercase()));
	let builder = tracing_subscriber::fmt().with_env_filter(filter);

	let log_file = settings.get_string(keys::LOG_FILE);
	let installed = if !log_file.is_empty() {
		let file = OpenOptions::new()
			.create(true)
			.append(true)
			.open(&log_file)
			.with_context(|| format!("failed to open log file {log_file}"))?;
		builder
			.with_ansi(false)
			.with_writer(Mutex::new(file))
			.try_init()
	} else if settings.get_bool(keys::LOG_STDOUT) {
		builder.with_writer(io::stdout).try_init()
	} else {
		builder.with_writer(io::stderr).try_init()
	};

	if installed.is_err() {
		tracing::debug!("tracing subscriber already installed");
	}
	Ok(())
}
