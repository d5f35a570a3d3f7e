use std::path::PathBuf;

use clap::{CommandFactory, FromArgMatches, Parser};

use super::{CliArgs, Command, OutputFormat};
use crate::settings::{ConfigValue, keys};

#[test]
fn command_definition_is_consistent() {
	CliArgs::command().debug_assert();
}

#[test]
fn parse_cli_accepts_default_arguments() {
	let command = CliArgs::command();
	let mut matches = command.get_matches_from(vec!["cyrus"]);
	let parsed = CliArgs::from_arg_matches_mut(&mut matches).expect("parses");
	assert_eq!(parsed.output, OutputFormat::Plain);
	assert!(parsed.command.is_none());
}

#[test]
fn unpassed_flags_produce_no_command_line_values() {
	let cli = CliArgs::parse_from(["cyrus"]);
	assert!(cli.command_line_values().is_empty());
}

#[test]
fn passed_flags_map_to_their_keys() {
	let cli = CliArgs::parse_from([
		"cyrus",
		"-m",
		"sales,stock",
		"-m",
		"web",
		"-L",
		"debug",
		"--db-ssl-mode",
		"require",
		"--debug",
		"--demo=false",
		"-o",
	]);
	let values = cli.command_line_values();
	let get = |key: &str| {
		values
			.iter()
			.find(|(name, _)| *name == key)
			.map(|(_, value)| value.clone())
	};

	assert_eq!(
		get(keys::MODULES),
		Some(ConfigValue::List(vec!["sales".into(), "stock".into(), "web".into()]))
	);
	assert_eq!(get(keys::LOG_LEVEL), Some(ConfigValue::from("debug")));
	assert_eq!(get(keys::DB_SSL_MODE), Some(ConfigValue::from("require")));
	assert_eq!(get(keys::DEBUG), Some(ConfigValue::Bool(true)));
	assert_eq!(get(keys::DEMO), Some(ConfigValue::Bool(false)));
	assert_eq!(get(keys::LOG_STDOUT), Some(ConfigValue::Bool(true)));
	assert_eq!(get(keys::DB_NAME), None);
	assert_eq!(values.len(), 6);
}

#[test]
fn flags_are_accepted_after_subcommand() {
	let cli = CliArgs::parse_from(["cyrus", "static", "js", "--disk-path", "--resource-dir", "/srv/res"]);
	assert_eq!(
		cli.command,
		Some(Command::Static {
			sub_dir: Some(PathBuf::from("js")),
			disk_path: true,
		})
	);
	assert_eq!(cli.resource_dir.as_deref(), Some("/srv/res"));
}

#[test]
fn bare_boolean_flag_does_not_swallow_subcommand() {
	let cli = CliArgs::parse_from(["cyrus", "--debug", "config"]);
	assert_eq!(cli.debug, Some(true));
	assert_eq!(cli.command, Some(Command::Config));
}
