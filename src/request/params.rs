//! Query parameter values accepted by endpoint methods.

// self
use crate::_prelude::*;

/// Single query parameter value.
#[derive(Clone, Debug, PartialEq)]
pub enum ParamValue {
	/// Free-form text.
	Str(String),
	/// Integer value.
	Int(i64),
	/// Floating point value (coordinates, prices).
	Float(f64),
	/// Boolean flag, rendered as `true`/`false`.
	Bool(bool),
}
impl ParamValue {
	/// Returns the boolean when the value is a flag.
	pub fn as_bool(&self) -> Option<bool> {
		match self {
			Self::Bool(flag) => Some(*flag),
			_ => None,
		}
	}
}
impl Display for ParamValue {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		match self {
			Self::Str(value) => f.write_str(value),
			Self::Int(value) => Display::fmt(value, f),
			Self::Float(value) => Display::fmt(value, f),
			Self::Bool(value) => f.write_str(if *value { "true" } else { "false" }),
		}
	}
}
impl From<&str> for ParamValue {
	fn from(value: &str) -> Self {
		Self::Str(value.to_owned())
	}
}
impl From<String> for ParamValue {
	fn from(value: String) -> Self {
		Self::Str(value)
	}
}
impl From<&String> for ParamValue {
	fn from(value: &String) -> Self {
		Self::Str(value.clone())
	}
}
impl From<i32> for ParamValue {
	fn from(value: i32) -> Self {
		Self::Int(value.into())
	}
}
impl From<u32> for ParamValue {
	fn from(value: u32) -> Self {
		Self::Int(value.into())
	}
}
impl From<i64> for ParamValue {
	fn from(value: i64) -> Self {
		Self::Int(value)
	}
}
impl From<f64> for ParamValue {
	fn from(value: f64) -> Self {
		Self::Float(value)
	}
}
impl From<bool> for ParamValue {
	fn from(value: bool) -> Self {
		Self::Bool(value)
	}
}

/// Ordered parameter map; keys follow the vendor's camelCase names.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Params(BTreeMap<String, ParamValue>);
impl Params {
	/// Creates an empty map.
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds a parameter and returns the map, for chained construction.
	pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
		self.0.insert(key.into(), value.into());

		self
	}

	/// Inserts a parameter, returning the previous value.
	pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Option<ParamValue> {
		self.0.insert(key.into(), value.into())
	}

	/// Returns the value stored under `key`.
	pub fn get(&self, key: &str) -> Option<&ParamValue> {
		self.0.get(key)
	}

	/// Removes and returns the value stored under `key`.
	pub fn remove(&mut self, key: &str) -> Option<ParamValue> {
		self.0.remove(key)
	}

	/// Returns true when `key` is present.
	pub fn contains(&self, key: &str) -> bool {
		self.0.contains_key(key)
	}

	/// Number of parameters.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns true when no parameters are set.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Iterates over parameters in key order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
		self.0.iter().map(|(key, value)| (key.as_str(), value))
	}

	/// Renders every parameter as a query pair.
	pub fn to_pairs(&self) -> Vec<(String, String)> {
		self.0.iter().map(|(key, value)| (key.clone(), value.to_string())).collect()
	}
}
impl<K, V> FromIterator<(K, V)> for Params
where
	K: Into<String>,
	V: Into<ParamValue>,
{
	fn from_iter<I>(iter: I) -> Self
	where
		I: IntoIterator<Item = (K, V)>,
	{
		Self(iter.into_iter().map(|(key, value)| (key.into(), value.into())).collect())
	}
}
impl IntoIterator for Params {
	type IntoIter = std::collections::btree_map::IntoIter<String, ParamValue>;
	type Item = (String, ParamValue);

	fn into_iter(self) -> Self::IntoIter {
		self.0.into_iter()
	}
}
