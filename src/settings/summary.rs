use std::io::{self, Write};

use super::keys;
use super::resolved::Settings;

/// Print the effective configuration, one key per line with its origin.
pub fn print_summary(settings: &Settings) -> io::Result<()> {
	let stdout = io::stdout();
	write_summary(&mut stdout.lock(), settings)
}

pub(super) fn write_summary(out: &mut impl Write, settings: &Settings) -> io::Result<()> {
	writeln!(out, "Effective configuration:")?;
	match settings.config_file() {
		Some(path) => writeln!(out, "  Config file: {}", path.display())?,
		None => writeln!(out, "  Config file: (none)")?,
	}
	for key in settings.keys() {
		let Some((value, source)) = settings.resolve(&key) else {
			continue;
		};
		let shown = if is_secret(&key) && !value.to_string_value().is_empty() {
			"********".to_string()
		} else {
			value.to_string()
		};
		writeln!(out, "  {key}: {} ({source})", display_or_empty(&shown))?;
	}
	Ok(())
}

fn is_secret(key: &str) -> bool {
	key == keys::DB_PASSWORD
}

fn display_or_empty(value: &str) -> &str {
	if value.is_empty() { "(empty)" } else { value }
}

#[cfg(test)]
mod tests {
	use std::collections::HashMap;

	use super::*;
	use crate::settings::SettingsBuilder;

	fn render(settings: &Settings) -> String {
		let mut buffer = Vec::new();
		write_summary(&mut buffer, settings).unwrap();
		String::from_utf8(buffer).unwrap()
	}

	#[test]
	fn summary_shows_value_and_origin() {
		let settings = SettingsBuilder::with_env(HashMap::from([(
			"CYRUS_DB_PORT".to_string(),
			"6432".to_string(),
		)]))
		.register_default(keys::DB_PORT, "5432")
		.register_default(keys::LOG_FILE, "")
		.bind_environment(keys::DB_PORT, keys::ENV_PREFIX)
		.build()
		.value;

		let text = render(&settings);
		assert!(text.contains("Config file: (none)"));
		assert!(text.contains("DB.Port: 6432 (environment)"));
		assert!(text.contains("LogFile: (empty) (default)"));
	}

	#[test]
	fn summary_masks_database_password() {
		let settings = SettingsBuilder::with_env(HashMap::new())
			.bind_command_line(keys::DB_PASSWORD, Some("hunter2"))
			.build()
			.value;

		let text = render(&settings);
		assert!(!text.contains("hunter2"));
		assert!(text.contains("DB.Password: ******** (command line)"));
	}

	struct ClosedPipe;

	impl Write for ClosedPipe {
		fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
			Err(io::Error::from(io::ErrorKind::BrokenPipe))
		}

		fn flush(&mut self) -> io::Result<()> {
			Ok(())
		}
	}

	#[test]
	fn write_errors_are_returned() {
		let settings = SettingsBuilder::with_env(HashMap::new())
			.register_default(keys::DB_NAME, "hexya")
			.build()
			.value;

		let err = write_summary(&mut ClosedPipe, &settings).unwrap_err();
		assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
	}
}
