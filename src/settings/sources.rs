use std::path::{Path, PathBuf};

use config::FileFormat;

use super::file::ConfigSearch;
use super::keys;

/// Build the configuration file search for the given home data directory.
///
/// On non-Windows platforms the working directory is probed first, then the
/// per-user data directory when it is known, then the working directory and
/// its `cyrus` subdirectory. An explicit file replaces the whole search.
pub(super) fn default_search(home_data_dir: Option<&Path>, explicit: Option<PathBuf>) -> ConfigSearch {
	let mut search = ConfigSearch::new(keys::CONFIG_BASE_NAME, FileFormat::Toml);

	if !cfg!(windows) {
		search = search.dir("./");
	}
	if let Some(dir) = home_data_dir {
		search = search.dir(dir);
	}
	search
		.dir(".")
		.dir(Path::new(".").join(keys::CONFIG_BASE_NAME))
		.explicit(explicit)
}
