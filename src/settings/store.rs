use std::borrow::Cow;
use std::collections::{BTreeSet, HashMap};

use super::tier::SourceTier;
use super::value::ConfigValue;

/// Key/value layers for every [`SourceTier`], merged on lookup.
///
/// The store knows nothing about flags, environment variables or files; it
/// only records which tier set which key. Config file keys are folded to
/// lowercase on insert and lookup so `[db] host` and `[DB] Host` are the same
/// key. The other tiers compare keys exactly.
#[derive(Debug, Clone, Default)]
pub struct TieredStore {
	layers: HashMap<SourceTier, HashMap<String, ConfigValue>>,
}

impl TieredStore {
	pub fn new() -> Self {
		Self::default()
	}

	/// Set `key` at `tier`, replacing any earlier value at the same tier.
	pub fn set(&mut self, tier: SourceTier, key: &str, value: ConfigValue) {
		self.layers
			.entry(tier)
			.or_default()
			.insert(layer_key(tier, key).into_owned(), value);
	}

	/// Drop every value recorded for `tier`.
	pub fn clear(&mut self, tier: SourceTier) {
		self.layers.remove(&tier);
	}

	/// Return the value from the highest tier that set `key`, with that tier.
	pub fn resolve(&self, key: &str) -> Option<(&ConfigValue, SourceTier)> {
		SourceTier::BY_PRECEDENCE.into_iter().find_map(|tier| {
			self.layers
				.get(&tier)
				.and_then(|layer| layer.get(&*layer_key(tier, key)))
				.map(|value| (value, tier))
		})
	}

	pub fn get(&self, tier: SourceTier, key: &str) -> Option<&ConfigValue> {
		self.layers
			.get(&tier)
			.and_then(|layer| layer.get(&*layer_key(tier, key)))
	}

	/// Every key set at any tier, sorted. File keys appear in lowercase unless
	/// another tier also sets them.
	pub fn keys(&self) -> BTreeSet<String> {
		let mut exact: BTreeSet<String> = BTreeSet::new();
		for (tier, layer) in &self.layers {
			if *tier != SourceTier::ConfigFile {
				exact.extend(layer.keys().cloned());
			}
		}

		let folded: BTreeSet<String> = exact.iter().map(|key| key.to_lowercase()).collect();
		if let Some(file_layer) = self.layers.get(&SourceTier::ConfigFile) {
			for key in file_layer.keys() {
				if !folded.contains(key) {
					exact.insert(key.clone());
				}
			}
		}
		exact
	}
}

fn layer_key(tier: SourceTier, key: &str) -> Cow<'_, str> {
	match tier {
		SourceTier::ConfigFile => Cow::Owned(key.to_lowercase()),
		_ => Cow::Borrowed(key),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn store_with(entries: &[(SourceTier, &str, &str)]) -> TieredStore {
		let mut store = TieredStore::new();
		for (tier, key, value) in entries {
			store.set(*tier, key, ConfigValue::from(*value));
		}
		store
	}

	#[test]
	fn environment_beats_default_in_any_insertion_order() {
		let forward = store_with(&[
			(SourceTier::Default, "DB.Host", "default"),
			(SourceTier::Environment, "DB.Host", "env"),
		]);
		let backward = store_with(&[
			(SourceTier::Environment, "DB.Host", "env"),
			(SourceTier::Default, "DB.Host", "default"),
		]);

		for store in [forward, backward] {
			let (value, tier) = store.resolve("DB.Host").expect("resolved");
			assert_eq!(value, &ConfigValue::from("env"));
			assert_eq!(tier, SourceTier::Environment);
		}
	}

	#[test]
	fn each_tier_overrides_the_one_below() {
		let mut store = TieredStore::new();
		let expectations = [
			(SourceTier::Default, "d"),
			(SourceTier::ConfigFile, "f"),
			(SourceTier::Environment, "e"),
			(SourceTier::CommandLine, "c"),
		];

		for (tier, value) in expectations {
			store.set(tier, "LogLevel", ConfigValue::from(value));
			assert_eq!(
				store.resolve("LogLevel"),
				Some((&ConfigValue::from(value), tier))
			);
		}
	}

	#[test]
	fn lower_tier_never_overrides_higher_tier() {
		let store = store_with(&[
			(SourceTier::CommandLine, "Debug", "true"),
			(SourceTier::ConfigFile, "Debug", "false"),
		]);
		assert_eq!(store.resolve("Debug").map(|(_, tier)| tier), Some(SourceTier::CommandLine));
	}

	#[test]
	fn unknown_keys_resolve_to_nothing() {
		let store = store_with(&[(SourceTier::Default, "DB.Port", "5432")]);
		assert!(store.resolve("DB.Name").is_none());
	}

	#[test]
	fn file_tier_is_case_insensitive_while_others_are_exact() {
		let store = store_with(&[
			(SourceTier::ConfigFile, "db.sslmode", "require"),
			(SourceTier::Environment, "DB.Name", "erp"),
		]);

		assert_eq!(
			store.resolve("DB.SSLMode"),
			Some((&ConfigValue::from("require"), SourceTier::ConfigFile))
		);
		assert!(store.resolve("db.name").is_none());
	}

	#[test]
	fn keys_merge_file_keys_with_exact_keys() {
		let store = store_with(&[
			(SourceTier::Default, "DB.Host", "x"),
			(SourceTier::ConfigFile, "DB.Host", "y"),
			(SourceTier::ConfigFile, "Extra.Key", "z"),
		]);
		let keys: Vec<_> = store.keys().into_iter().collect();
		assert_eq!(keys, vec!["DB.Host".to_string(), "extra.key".to_string()]);
	}

	#[test]
	fn clearing_a_tier_falls_back_to_lower_tiers() {
		let mut store = store_with(&[
			(SourceTier::Default, "DB.Name", "hexya"),
			(SourceTier::ConfigFile, "DB.Name", "erp"),
		]);
		store.clear(SourceTier::ConfigFile);
		assert_eq!(
			store.resolve("DB.Name"),
			Some((&ConfigValue::from("hexya"), SourceTier::Default))
		);
	}
}
