use anyhow::Result;
use serde_json::json;

use crate::resources::ResourceEntry;
use crate::settings::{Settings, print_summary};

use super::OutputFormat;

/// Print resolved settings in the chosen format.
pub fn print_settings(settings: &Settings, format: OutputFormat) -> Result<()> {
	match format {
		OutputFormat::Plain => print_summary(settings)?,
		OutputFormat::Json => println!("{}", format_settings_json(settings)?),
	}
	Ok(())
}

/// Format resolved settings as a JSON document.
pub fn format_settings_json(settings: &Settings) -> Result<String> {
	let payload = json!({
		"config_file": settings.config_file().map(|path| path.display().to_string()),
		"settings": settings.entries(),
	});
	Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print static resource paths, one per line, or as JSON.
pub fn print_entries(entries: &[ResourceEntry], paths: &[String], format: OutputFormat) -> Result<()> {
	match format {
		OutputFormat::Plain => {
			for path in paths {
				println!("{path}");
			}
		}
		OutputFormat::Json => println!("{}", format_entries_json(entries, paths)?),
	}
	Ok(())
}

/// Format static resources as a JSON array of `{path, module}` objects.
pub fn format_entries_json(entries: &[ResourceEntry], paths: &[String]) -> Result<String> {
	let payload: Vec<_> = entries
		.iter()
		.zip(paths)
		.map(|(entry, path)| {
			json!({
				"path": path,
				"module": entry.source_module,
			})
		})
		.collect();
	Ok(serde_json::to_string_pretty(&payload)?)
}
