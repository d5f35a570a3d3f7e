use std::collections::HashMap;
use std::path::{Path, PathBuf};

use config::{Config, File, FileFormat, FileStoredFormat, Value, ValueKind};
use tracing::debug;

use super::diagnostics::Diagnostic;
use super::value::ConfigValue;

/// Where to look for the configuration file and how to parse it.
#[derive(Debug, Clone)]
pub struct ConfigSearch {
	/// Candidate directories, consulted in order.
	pub dirs: Vec<PathBuf>,
	/// File name without extension.
	pub base_name: String,
	pub format: FileFormat,
	/// A file given explicitly by the user; replaces the directory search.
	pub explicit: Option<PathBuf>,
}

impl ConfigSearch {
	pub fn new(base_name: impl Into<String>, format: FileFormat) -> Self {
		Self {
			dirs: Vec::new(),
			base_name: base_name.into(),
			format,
			explicit: None,
		}
	}

	pub fn dir(mut self, dir: impl Into<PathBuf>) -> Self {
		self.dirs.push(dir.into());
		self
	}

	pub fn explicit(mut self, path: Option<PathBuf>) -> Self {
		self.explicit = path;
		self
	}

	/// Full paths that will be probed, in order.
	pub fn candidates(&self) -> Vec<PathBuf> {
		if let Some(path) = &self.explicit {
			return vec![path.clone()];
		}
		let file_name = format!("{}.{}", self.base_name, extension(self.format));
		self.dirs.iter().map(|dir| dir.join(&file_name)).collect()
	}

	/// Return the first candidate that exists on disk.
	pub fn find(&self) -> Option<PathBuf> {
		self.candidates().into_iter().find(|path| path.is_file())
	}
}

fn extension(format: FileFormat) -> &'static str {
	format.file_extensions().first().copied().unwrap_or("toml")
}

/// Locate and parse the configuration file described by `search`.
///
/// On success returns the file path and its values flattened to dotted keys.
pub(super) fn load(search: &ConfigSearch) -> Result<(PathBuf, Vec<(String, ConfigValue)>), Diagnostic> {
	let Some(path) = search.find() else {
		return Err(Diagnostic::ConfigFileNotFound {
			name: search.base_name.clone(),
			searched: search.candidates(),
		});
	};

	let values = parse(&path, search.format).map_err(|reason| Diagnostic::ConfigFileInvalid {
		path: path.clone(),
		reason,
	})?;
	debug!(path = %path.display(), keys = values.len(), "loaded configuration file");
	Ok((path, values))
}

fn parse(path: &Path, format: FileFormat) -> Result<Vec<(String, ConfigValue)>, String> {
	let table = Config::builder()
		.add_source(File::from(path).format(format).required(true))
		.build()
		.and_then(|config| config.try_deserialize::<HashMap<String, Value>>())
		.map_err(|err| err.to_string())?;

	let mut values = Vec::new();
	for (key, value) in table {
		flatten(key, value, &mut values);
	}
	Ok(values)
}

/// Turn nested tables into `parent.child` keys.
fn flatten(prefix: String, value: Value, out: &mut Vec<(String, ConfigValue)>) {
	match value.kind {
		ValueKind::Table(table) => {
			for (key, nested) in table {
				flatten(format!("{prefix}.{key}"), nested, out);
			}
		}
		ValueKind::Nil => {}
		other => {
			if let Some(scalar) = convert(other) {
				out.push((prefix, scalar));
			}
		}
	}
}

fn convert(kind: ValueKind) -> Option<ConfigValue> {
	let value = match kind {
		ValueKind::Nil | ValueKind::Table(_) => return None,
		ValueKind::Boolean(value) => ConfigValue::Bool(value),
		ValueKind::I64(value) => ConfigValue::Int(value),
		ValueKind::I128(value) => int_or_string(i64::try_from(value), value),
		ValueKind::U64(value) => int_or_string(i64::try_from(value), value),
		ValueKind::U128(value) => int_or_string(i64::try_from(value), value),
		ValueKind::Float(value) => ConfigValue::String(value.to_string()),
		ValueKind::String(value) => ConfigValue::String(value),
		ValueKind::Array(items) => ConfigValue::List(
			items
				.into_iter()
				.filter_map(|item| convert(item.kind))
				.map(|item| item.to_string_value())
				.collect(),
		),
	};
	Some(value)
}

fn int_or_string<E, T: ToString>(converted: Result<i64, E>, original: T) -> ConfigValue {
	match converted {
		Ok(value) => ConfigValue::Int(value),
		Err(_) => ConfigValue::String(original.to_string()),
	}
}
