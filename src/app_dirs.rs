//! Resolve the per-user data directory for `cyrus`.
//!
//! The home directory comes from the `directories` crate; the data directory
//! is `<home>/.cyrus`. Callers treat a failure as advisory.

use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};
use directories::BaseDirs;

use crate::settings::keys::HOME_DATA_DIR_NAME;

/// Return the home directory of the current user.
pub fn home_dir() -> Result<PathBuf> {
	BaseDirs::new()
		.map(|dirs| dirs.home_dir().to_path_buf())
		.ok_or_else(|| anyhow!("unable to determine the home directory of the current user"))
}

/// Return the directory where Cyrus keeps its data by default.
pub fn home_data_dir() -> Result<PathBuf> {
	Ok(data_dir_under(&home_dir()?))
}

fn data_dir_under(home: &Path) -> PathBuf {
	home.join(HOME_DATA_DIR_NAME)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn data_dir_is_hidden_directory_under_home() {
		assert_eq!(
			data_dir_under(Path::new("/home/erp")),
			PathBuf::from("/home/erp/.cyrus")
		);
	}
}
