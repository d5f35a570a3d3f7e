use std::fmt;

use serde::Serialize;

/// A single configuration value as stored by one source tier.
///
/// Accessors on [`Settings`](super::Settings) coerce between variants, so a
/// port read from the environment as a string can still be requested as an
/// integer. Failed coercions fall back to the zero value of the target type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ConfigValue {
	String(String),
	Bool(bool),
	Int(i64),
	List(Vec<String>),
}

impl ConfigValue {
	pub fn to_string_value(&self) -> String {
		match self {
			Self::String(value) => value.clone(),
			Self::Bool(value) => value.to_string(),
			Self::Int(value) => value.to_string(),
			Self::List(items) => items.join(","),
		}
	}

	pub fn to_bool(&self) -> bool {
		match self {
			Self::String(value) => parse_bool(value),
			Self::Bool(value) => *value,
			Self::Int(value) => *value != 0,
			Self::List(_) => false,
		}
	}

	pub fn to_int(&self) -> i64 {
		match self {
			Self::String(value) => value.trim().parse().unwrap_or(0),
			Self::Bool(value) => i64::from(*value),
			Self::Int(value) => *value,
			Self::List(_) => 0,
		}
	}

	pub fn to_string_slice(&self) -> Vec<String> {
		match self {
			Self::String(value) => split_list(value),
			Self::Bool(_) | Self::Int(_) => vec![self.to_string_value()],
			Self::List(items) => items.clone(),
		}
	}
}

fn parse_bool(value: &str) -> bool {
	matches!(value.trim(), "1" | "t" | "T" | "TRUE" | "true" | "True")
}

/// Split a scalar list representation on commas and whitespace.
fn split_list(value: &str) -> Vec<String> {
	value
		.split(|c: char| c == ',' || c.is_whitespace())
		.filter(|item| !item.is_empty())
		.map(str::to_string)
		.collect()
}

impl fmt::Display for ConfigValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::List(items) => write!(f, "[{}]", items.join(", ")),
			other => f.write_str(&other.to_string_value()),
		}
	}
}

impl From<String> for ConfigValue {
	fn from(value: String) -> Self {
		Self::String(value)
	}
}

impl From<&str> for ConfigValue {
	fn from(value: &str) -> Self {
		Self::String(value.to_string())
	}
}

impl From<bool> for ConfigValue {
	fn from(value: bool) -> Self {
		Self::Bool(value)
	}
}

impl From<i64> for ConfigValue {
	fn from(value: i64) -> Self {
		Self::Int(value)
	}
}

impl From<Vec<String>> for ConfigValue {
	fn from(value: Vec<String>) -> Self {
		Self::List(value)
	}
}

impl From<&[&str]> for ConfigValue {
	fn from(value: &[&str]) -> Self {
		Self::List(value.iter().map(|item| item.to_string()).collect())
	}
}
