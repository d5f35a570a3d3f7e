use std::io::{self, Write};
use std::path::{Component, Path, PathBuf};
use std::process::ExitCode;

use anyhow::Result;
use cyrus::cli::{CliArgs, Command, OutputFormat, parse_cli, print_entries, print_settings};
use cyrus::settings::{self, Diagnostic, Settings};
use cyrus::{ModuleResourceIndex, UserError, logging};
use tracing::{debug, warn};

fn main() -> ExitCode {
	let cli = parse_cli();
	match run(cli) {
		Ok(()) => ExitCode::SUCCESS,
		Err(err) => match err.downcast_ref::<UserError>() {
			Some(user) => {
				warn!(debug = %user.debug, "{}", user.message);
				eprintln!("warning: {}", user.message);
				ExitCode::from(2)
			}
			None => {
				eprintln!("error: {err:#}");
				ExitCode::FAILURE
			}
		},
	}
}

fn run(cli: CliArgs) -> Result<()> {
	let (settings, diagnostics) = settings::load(&cli).into_parts();
	start_logging(&settings, &diagnostics, &mut io::stderr().lock())?;
	debug!(config_file = ?settings.config_file(), "configuration resolved");

	match cli.command.unwrap_or(Command::Config) {
		Command::Config => print_settings(&settings, cli.output),
		Command::Static { sub_dir, disk_path } => {
			list_static(&settings, sub_dir.unwrap_or_default(), disk_path, cli.output)
		}
	}
}

/// Install logging and report load diagnostics through it.
///
/// When logging cannot be installed the diagnostics are written to `fallback`
/// before the error is returned.
fn start_logging(settings: &Settings, diagnostics: &[Diagnostic], fallback: &mut impl Write) -> Result<()> {
	if let Err(err) = logging::initialize(settings) {
		for diagnostic in diagnostics {
			writeln!(fallback, "warning: {diagnostic}")?;
		}
		return Err(err);
	}
	for diagnostic in diagnostics {
		warn!("{diagnostic}");
	}
	Ok(())
}

/// List static files of every configured module under `sub_dir`.
fn list_static(settings: &Settings, sub_dir: PathBuf, disk_path: bool, format: OutputFormat) -> Result<()> {
	validate_sub_dir(&sub_dir)?;

	let index = ModuleResourceIndex::from_settings(settings);
	let entries = index.entries(&sub_dir);
	let paths: Vec<String> = entries
		.iter()
		.map(|entry| {
			if disk_path {
				entry.disk_path(index.resource_dir()).to_string_lossy().into_owned()
			} else {
				entry.relative_path.clone()
			}
		})
		.collect();
	debug!(modules = ?index.modules(), count = paths.len(), "listed static files");

	print_entries(&entries, &paths, format)
}

/// Reject subdirectories that would leave the module's static tree.
fn validate_sub_dir(sub_dir: &Path) -> Result<(), UserError> {
	let escapes = sub_dir.components().any(|component| {
		matches!(
			component,
			Component::ParentDir | Component::RootDir | Component::Prefix(_)
		)
	});
	if escapes {
		return Err(UserError::new(
			"The resource subdirectory must stay inside the module's static directory",
			format!("rejected subdirectory `{}`", sub_dir.display()),
		));
	}
	Ok(())
}
