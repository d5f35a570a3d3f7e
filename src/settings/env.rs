use std::collections::HashMap;
use std::env;

/// Read access to environment variables.
///
/// The process environment is the production source; tests hand in a plain
/// map so they never race on global state.
pub trait EnvSource {
	fn var(&self, name: &str) -> Option<String>;
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
	fn var(&self, name: &str) -> Option<String> {
		env::var(name).ok()
	}
}

impl EnvSource for HashMap<String, String> {
	fn var(&self, name: &str) -> Option<String> {
		self.get(name).cloned()
	}
}

impl<T: EnvSource + ?Sized> EnvSource for &T {
	fn var(&self, name: &str) -> Option<String> {
		(**self).var(name)
	}
}

/// Map a configuration key to its environment variable name.
///
/// `DB.SSLMode` with prefix `cyrus` becomes `CYRUS_DB_SSLMODE`. Keys must not
/// contain `_` themselves, otherwise two keys can share one variable.
pub fn env_var_name(prefix: &str, key: &str) -> String {
	let key = key.replace('.', "_");
	if prefix.is_empty() {
		key.to_uppercase()
	} else {
		format!("{prefix}_{key}").to_uppercase()
	}
}
