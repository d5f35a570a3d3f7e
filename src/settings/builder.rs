use std::path::PathBuf;

use tracing::debug;

use super::diagnostics::{Diagnostic, Loaded};
use super::env::{EnvSource, ProcessEnv, env_var_name};
use super::file::{self, ConfigSearch};
use super::resolved::Settings;
use super::store::TieredStore;
use super::tier::SourceTier;
use super::value::ConfigValue;

/// Collects values from every source before freezing them into [`Settings`].
///
/// Environment variables are read when a key is bound, so the finished
/// snapshot never observes later changes to the process environment.
pub struct SettingsBuilder {
	store: TieredStore,
	env: Box<dyn EnvSource>,
	config_file: Option<PathBuf>,
	diagnostics: Vec<Diagnostic>,
}

impl Default for SettingsBuilder {
	fn default() -> Self {
		Self::new()
	}
}

impl SettingsBuilder {
	/// Start a builder that reads the process environment.
	pub fn new() -> Self {
		Self::with_env(ProcessEnv)
	}

	/// Start a builder reading environment variables from `env`.
	pub fn with_env(env: impl EnvSource + 'static) -> Self {
		Self {
			store: TieredStore::new(),
			env: Box::new(env),
			config_file: None,
			diagnostics: Vec::new(),
		}
	}

	pub fn register_default(mut self, key: &str, value: impl Into<ConfigValue>) -> Self {
		self.store.set(SourceTier::Default, key, value.into());
		self
	}

	/// Bind `key` to the environment variable derived from `prefix`.
	///
	/// An unset or empty variable leaves the key undefined at the environment
	/// tier, so lower tiers keep answering.
	pub fn bind_environment(mut self, key: &str, prefix: &str) -> Self {
		let name = env_var_name(prefix, key);
		if let Some(value) = self.env.var(&name).filter(|value| !value.is_empty()) {
			debug!(key, variable = %name, "configuration value taken from environment");
			self.store.set(SourceTier::Environment, key, ConfigValue::String(value));
		}
		self
	}

	/// Bind `key` to a command-line flag.
	///
	/// `flag` is `Some` only when the user actually passed the flag. The flag's
	/// own default belongs at the default tier and must not be passed here.
	pub fn bind_command_line<V: Into<ConfigValue>>(mut self, key: &str, flag: Option<V>) -> Self {
		if let Some(value) = flag {
			self.store.set(SourceTier::CommandLine, key, value.into());
		}
		self
	}

	/// Load the first configuration file matched by `search` into the config
	/// file tier.
	///
	/// A missing or unparsable file is recorded as a diagnostic and leaves the
	/// tier empty.
	pub fn load_config_file(mut self, search: &ConfigSearch) -> Self {
		self.store.clear(SourceTier::ConfigFile);
		self.config_file = None;
		match file::load(search) {
			Ok((path, values)) => {
				for (key, value) in values {
					self.store.set(SourceTier::ConfigFile, &key, value);
				}
				self.config_file = Some(path);
			}
			Err(diagnostic) => self.diagnostics.push(diagnostic),
		}
		self
	}

	/// Record a diagnostic raised by the caller while assembling sources.
	pub fn report(mut self, diagnostic: Diagnostic) -> Self {
		self.diagnostics.push(diagnostic);
		self
	}

	/// Resolve `key` against the sources collected so far.
	///
	/// Used during bootstrap when one setting decides how the rest are loaded.
	pub fn peek(&self, key: &str) -> Option<&ConfigValue> {
		self.store.resolve(key).map(|(value, _)| value)
	}

	/// Freeze the collected sources into an immutable snapshot.
	pub fn build(self) -> Loaded<Settings> {
		Loaded::new(
			Settings::from_parts(self.store, self.config_file),
			self.diagnostics,
		)
	}
}
