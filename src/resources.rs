//! Static resource discovery across module directories.
//!
//! Each module ships its static files under
//! `<resource_dir>/static/<module>/<sub_dir>/`. Listing walks the modules in
//! the configured order and concatenates their files. Modules are additive: a
//! file name provided by two modules is listed once for each of them.

use std::fs;
use std::path::{Component, Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use crate::settings::{Settings, keys};

/// Top-level directory under the resource root that holds module files.
pub const STATIC_DIR: &str = "static";

/// A static file contributed by one module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceEntry {
	/// Servable path, always `static/<module>/<sub_dir>/<file>` with `/`
	/// separators.
	pub relative_path: String,
	pub source_module: String,
}

impl ResourceEntry {
	/// Location of the file on disk under `resource_dir`.
	pub fn disk_path(&self, resource_dir: &Path) -> PathBuf {
		resource_dir.join(&self.relative_path)
	}
}

/// The ordered module list and resource root used to answer static file
/// listings. Holds no cached state: every call reads the filesystem.
#[derive(Debug, Clone)]
pub struct ModuleResourceIndex {
	resource_dir: PathBuf,
	modules: Vec<String>,
}

impl ModuleResourceIndex {
	pub fn new(resource_dir: impl Into<PathBuf>, modules: Vec<String>) -> Self {
		Self {
			resource_dir: resource_dir.into(),
			modules,
		}
	}

	/// Build an index from the resolved `ResourceDir` and `Modules` settings.
	pub fn from_settings(settings: &Settings) -> Self {
		Self::new(
			settings.get_string(keys::RESOURCE_DIR),
			settings.get_string_slice(keys::MODULES),
		)
	}

	pub fn resource_dir(&self) -> &Path {
		&self.resource_dir
	}

	pub fn modules(&self) -> &[String] {
		&self.modules
	}

	/// Every file directly inside `sub_dir` of each module, in module order.
	///
	/// Within a module files are sorted by name. Subdirectories are skipped.
	/// A module whose directory is missing or unreadable contributes nothing,
	/// as does one whose identifier or `sub_dir` is absolute or contains `..`.
	pub fn entries(&self, sub_dir: impl AsRef<Path>) -> Vec<ResourceEntry> {
		let sub_dir = sub_dir.as_ref();
		self.modules
			.iter()
			.flat_map(|module| module_entries(&self.resource_dir, module, sub_dir))
			.collect()
	}

	/// Paths of [`entries`](Self::entries), either servable or, with
	/// `disk_path`, prefixed with the resource directory.
	pub fn list_static_files(&self, sub_dir: impl AsRef<Path>, disk_path: bool) -> Vec<String> {
		self.entries(sub_dir)
			.into_iter()
			.map(|entry| {
				if disk_path {
					entry.disk_path(&self.resource_dir).to_string_lossy().into_owned()
				} else {
					entry.relative_path
				}
			})
			.collect()
	}
}

/// List static files under `sub_dir` across `modules`.
///
/// See [`ModuleResourceIndex::list_static_files`].
pub fn list_static_files(
	resource_dir: &Path,
	sub_dir: &Path,
	modules: &[String],
	disk_path: bool,
) -> Vec<String> {
	ModuleResourceIndex::new(resource_dir, modules.to_vec()).list_static_files(sub_dir, disk_path)
}

fn module_entries(resource_dir: &Path, module: &str, sub_dir: &Path) -> Vec<ResourceEntry> {
	let (Some(module_parts), Some(sub_dir_parts)) =
		(relative_parts(Path::new(module)), relative_parts(sub_dir))
	else {
		debug!(module, sub_dir = %sub_dir.display(), "path leaves the module directory, skipping");
		return Vec::new();
	};
	let mut relative = vec![STATIC_DIR.to_string()];
	relative.extend(module_parts);
	relative.extend(sub_dir_parts);

	let dir = relative
		.iter()
		.fold(resource_dir.to_path_buf(), |dir, part| dir.join(part));
	let read_dir = match fs::read_dir(&dir) {
		Ok(read_dir) => read_dir,
		Err(err) => {
			debug!(module, dir = %dir.display(), error = %err, "module provides no static files here");
			return Vec::new();
		}
	};

	let mut names: Vec<String> = read_dir
		.filter_map(|entry| entry.ok())
		.filter(|entry| {
			entry
				.file_type()
				.map(|file_type| !file_type.is_dir())
				.unwrap_or(false)
		})
		.map(|entry| entry.file_name().to_string_lossy().into_owned())
		.collect();
	names.sort();

	let prefix = relative.join("/");
	names
		.into_iter()
		.map(|name| ResourceEntry {
			relative_path: format!("{prefix}/{name}"),
			source_module: module.to_string(),
		})
		.collect()
}

/// Normal components of `path`, or `None` when it is absolute or climbs out
/// with `..`.
fn relative_parts(path: &Path) -> Option<Vec<String>> {
	path.components().try_fold(Vec::new(), |mut parts, component| {
		match component {
			Component::Normal(part) => parts.push(part.to_string_lossy().into_owned()),
			Component::CurDir => {}
			Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
		}
		Some(parts)
	})
}
