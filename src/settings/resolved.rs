use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Serialize;

use super::store::TieredStore;
use super::tier::SourceTier;
use super::value::ConfigValue;

/// Immutable configuration snapshot shared by every consumer.
///
/// Cloning is cheap and the snapshot may be read from any thread. Typed
/// getters return the zero value of their type for keys no source defined.
#[derive(Debug, Clone)]
pub struct Settings {
	inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
	store: TieredStore,
	config_file: Option<PathBuf>,
}

/// One resolved key, as rendered by `--output json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedEntry {
	pub key: String,
	pub value: ConfigValue,
	pub source: SourceTier,
}

impl Settings {
	pub(super) fn from_parts(store: TieredStore, config_file: Option<PathBuf>) -> Self {
		Self {
			inner: Arc::new(Inner { store, config_file }),
		}
	}

	/// Resolve `key` to its value and the tier it came from.
	pub fn resolve(&self, key: &str) -> Option<(&ConfigValue, SourceTier)> {
		self.inner.store.resolve(key)
	}

	pub fn source_of(&self, key: &str) -> Option<SourceTier> {
		self.resolve(key).map(|(_, tier)| tier)
	}

	pub fn is_set(&self, key: &str) -> bool {
		self.resolve(key).is_some()
	}

	/// Value recorded for `key` at exactly `tier`, ignoring precedence.
	pub fn tier_value(&self, tier: SourceTier, key: &str) -> Option<&ConfigValue> {
		self.inner.store.get(tier, key)
	}

	pub fn get_string(&self, key: &str) -> String {
		self.resolve(key)
			.map(|(value, _)| value.to_string_value())
			.unwrap_or_default()
	}

	pub fn get_bool(&self, key: &str) -> bool {
		self.resolve(key)
			.map(|(value, _)| value.to_bool())
			.unwrap_or_default()
	}

	pub fn get_int(&self, key: &str) -> i64 {
		self.resolve(key)
			.map(|(value, _)| value.to_int())
			.unwrap_or_default()
	}

	pub fn get_string_slice(&self, key: &str) -> Vec<String> {
		self.resolve(key)
			.map(|(value, _)| value.to_string_slice())
			.unwrap_or_default()
	}

	/// The configuration file that fed the config file tier, if one was loaded.
	pub fn config_file(&self) -> Option<&Path> {
		self.inner.config_file.as_deref()
	}

	/// Every key defined by at least one source, sorted.
	pub fn keys(&self) -> Vec<String> {
		self.inner.store.keys().into_iter().collect()
	}

	/// Every defined key with its winning value and tier.
	pub fn entries(&self) -> Vec<ResolvedEntry> {
		self.keys()
			.into_iter()
			.filter_map(|key| {
				let (value, source) = self.resolve(&key)?;
				Some(ResolvedEntry {
					value: value.clone(),
					source,
					key,
				})
			})
			.collect()
	}
}

#[cfg(test)]
mod tests {
	use std::thread;

	use super::*;

	fn settings(entries: &[(SourceTier, &str, ConfigValue)]) -> Settings {
		let mut store = TieredStore::new();
		for (tier, key, value) in entries {
			store.set(*tier, key, value.clone());
		}
		Settings::from_parts(store, None)
	}

	#[test]
	fn unset_keys_yield_zero_values() {
		let settings = settings(&[]);
		assert_eq!(settings.get_string("DB.Host"), "");
		assert!(!settings.get_bool("Debug"));
		assert_eq!(settings.get_int("DB.Port"), 0);
		assert!(settings.get_string_slice("Modules").is_empty());
		assert!(!settings.is_set("DB.Host"));
		assert_eq!(settings.source_of("DB.Host"), None);
	}

	#[test]
	fn getters_coerce_environment_strings() {
		let settings = settings(&[
			(SourceTier::Environment, "DB.Port", "6432".into()),
			(SourceTier::Environment, "Debug", "true".into()),
			(SourceTier::Environment, "Modules", "web,base".into()),
		]);
		assert_eq!(settings.get_int("DB.Port"), 6432);
		assert!(settings.get_bool("Debug"));
		assert_eq!(settings.get_string_slice("Modules"), vec!["web", "base"]);
	}

	#[test]
	fn tier_value_ignores_precedence() {
		let settings = settings(&[
			(SourceTier::Default, "DB.Name", "hexya".into()),
			(SourceTier::CommandLine, "DB.Name", "erp".into()),
		]);
		assert_eq!(settings.get_string("DB.Name"), "erp");
		assert_eq!(
			settings.tier_value(SourceTier::Default, "DB.Name"),
			Some(&ConfigValue::from("hexya"))
		);
	}

	#[test]
	fn entries_report_winning_tier() {
		let settings = settings(&[
			(SourceTier::Default, "Demo", false.into()),
			(SourceTier::CommandLine, "Demo", true.into()),
			(SourceTier::Default, "LogLevel", "info".into()),
		]);
		assert_eq!(
			settings.entries(),
			vec![
				ResolvedEntry {
					key: "Demo".into(),
					value: ConfigValue::Bool(true),
					source: SourceTier::CommandLine,
				},
				ResolvedEntry {
					key: "LogLevel".into(),
					value: "info".into(),
					source: SourceTier::Default,
				},
			]
		);
	}

	#[test]
	fn snapshot_is_readable_across_threads() {
		let settings = settings(&[(SourceTier::Default, "DB.Name", "hexya".into())]);
		let handles: Vec<_> = (0..4)
			.map(|_| {
				let settings = settings.clone();
				thread::spawn(move || settings.get_string("DB.Name"))
			})
			.collect();
		for handle in handles {
			assert_eq!(handle.join().unwrap(), "hexya");
		}
	}
}
