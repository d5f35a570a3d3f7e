use std::path::PathBuf;

use anyhow::Result;
use tracing::debug;

use super::builder::SettingsBuilder;
use super::diagnostics::{Diagnostic, Loaded};
use super::env::{EnvSource, ProcessEnv};
use super::keys;
use super::resolved::Settings;
use super::sources::default_search;
use crate::app_dirs;
use crate::cli::CliArgs;

/// Load configuration by combining defaults, the configuration file,
/// environment variables and CLI arguments.
pub fn load(cli: &CliArgs) -> Loaded<Settings> {
	load_with(cli, ProcessEnv, app_dirs::home_data_dir())
}

/// [`load`] with the environment and home directory supplied by the caller.
pub fn load_with(
	cli: &CliArgs,
	env: impl EnvSource + 'static,
	home_data_dir: Result<PathBuf>,
) -> Loaded<Settings> {
	let mut builder = SettingsBuilder::with_env(env);
	for (key, value) in keys::defaults() {
		builder = builder.register_default(key, value);
	}

	let home = match home_data_dir {
		Ok(dir) => {
			builder = builder.register_default(keys::DATA_DIR, dir.to_string_lossy().into_owned());
			Some(dir)
		}
		Err(err) => {
			builder = builder.report(Diagnostic::HomeDirUnavailable {
				reason: format!("{err:#}"),
			});
			None
		}
	};

	for key in keys::ALL {
		builder = builder.bind_environment(key, keys::ENV_PREFIX);
	}
	for (key, value) in cli.command_line_values() {
		builder = builder.bind_command_line(key, Some(value));
	}

	let explicit = builder
		.peek(keys::CONFIG_FILE_NAME)
		.map(|value| value.to_string_value())
		.filter(|path| !path.is_empty())
		.map(PathBuf::from);
	let search = default_search(home.as_deref(), explicit);
	debug!(candidates = ?search.candidates(), "searching for configuration file");

	builder.load_config_file(&search).build()
}
