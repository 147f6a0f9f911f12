//! Recursive JSON wrapper with name and subscript access.

// std
use std::ops::Index;
// crates.io
use serde::de::DeserializeOwned;
// self
use crate::{_prelude::*, response::text};

static ABSENT: Node = Node::Absent;

/// One position in a wrapped response tree.
///
/// Objects are wrapped recursively, arrays hold wrapped elements, and scalars pass through
/// untouched. [`Node::Absent`] is the marker returned for fields the payload does not contain;
/// it carries no fields of its own, so navigating further from it fails.
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
	/// Wrapped JSON object.
	Object(WalmartResponse),
	/// JSON array with wrapped elements.
	Array(Vec<Node>),
	/// Scalar (string, number, bool, or null).
	Value(Value),
	/// Field missing from the payload.
	Absent,
}
impl Node {
	/// Stable label for the node's shape.
	pub fn kind(&self) -> &'static str {
		match self {
			Self::Object(_) => "object",
			Self::Array(_) => "array",
			Self::Value(Value::Null) => "null",
			Self::Value(Value::Bool(_)) => "bool",
			Self::Value(Value::Number(_)) => "number",
			Self::Value(Value::String(_)) => "string",
			Self::Value(_) => "value",
			Self::Absent => "absent",
		}
	}

	/// Returns true for the missing-field marker.
	pub fn is_absent(&self) -> bool {
		matches!(self, Self::Absent)
	}

	/// Returns true for an explicit JSON `null`.
	pub fn is_null(&self) -> bool {
		matches!(self, Self::Value(Value::Null))
	}

	/// Looks up `key` on an object node.
	///
	/// A missing key yields [`Node::Absent`]; any non-object receiver, including the absent
	/// marker itself, is an [`Error::UnexpectedResponseShape`].
	pub fn try_get(&self, key: &str) -> Result<&Node> {
		self.object().map(|object| &object[key])
	}

	/// Borrows the wrapped object, if this node is one.
	pub fn as_object(&self) -> Option<&WalmartResponse> {
		match self {
			Self::Object(object) => Some(object),
			_ => None,
		}
	}

	/// Borrows the wrapped object or reports the shape mismatch.
	pub fn object(&self) -> Result<&WalmartResponse> {
		self.as_object().ok_or_else(|| self.shape_error("object"))
	}

	/// Borrows the array elements, if this node is an array.
	pub fn as_array(&self) -> Option<&[Node]> {
		match self {
			Self::Array(items) => Some(items),
			_ => None,
		}
	}

	/// Borrows the array elements or reports the shape mismatch.
	pub fn array(&self) -> Result<&[Node]> {
		self.as_array().ok_or_else(|| self.shape_error("array"))
	}

	/// Borrows the scalar value, if this node is one.
	pub fn as_value(&self) -> Option<&Value> {
		match self {
			Self::Value(value) => Some(value),
			_ => None,
		}
	}

	/// Borrows a string scalar.
	pub fn as_str(&self) -> Option<&str> {
		self.as_value().and_then(Value::as_str)
	}

	/// Reads a boolean scalar.
	pub fn as_bool(&self) -> Option<bool> {
		self.as_value().and_then(Value::as_bool)
	}

	/// Reads an integer, accepting numeric strings and truncating fractional numbers.
	pub fn as_i64(&self) -> Option<i64> {
		match self.as_value()? {
			Value::Number(number) =>
				number.as_i64().or_else(|| number.as_f64().map(|float| float.trunc() as i64)),
			Value::String(raw) => raw.trim().parse().ok(),
			_ => None,
		}
	}

	/// Reads a float, accepting numeric strings.
	pub fn as_f64(&self) -> Option<f64> {
		match self.as_value()? {
			Value::Number(number) => number.as_f64(),
			Value::String(raw) => raw.trim().parse().ok(),
			_ => None,
		}
	}

	/// Reads a string with HTML entities decoded.
	pub fn as_text(&self) -> Option<String> {
		self.as_str().map(text::unescape_html)
	}

	/// Unwraps the node back into plain JSON; [`Node::Absent`] becomes `null`.
	pub fn to_value(&self) -> Value {
		match self {
			Self::Object(object) => object.to_value(),
			Self::Array(items) => Value::Array(items.iter().map(Node::to_value).collect()),
			Self::Value(value) => value.clone(),
			Self::Absent => Value::Null,
		}
	}

	fn shape_error(&self, expected: &'static str) -> Error {
		Error::UnexpectedResponseShape { expected, found: self.kind() }
	}
}
impl From<Value> for Node {
	fn from(value: Value) -> Self {
		match value {
			Value::Object(map) => Self::Object(WalmartResponse {
				fields: map.into_iter().map(|(key, value)| (key, Node::from(value))).collect(),
			}),
			Value::Array(items) => Self::Array(items.into_iter().map(Node::from).collect()),
			scalar => Self::Value(scalar),
		}
	}
}
impl Index<&str> for Node {
	type Output = Node;

	fn index(&self, key: &str) -> &Self::Output {
		match self {
			Self::Object(object) => &object[key],
			other => panic!("Cannot look up `{key}` on a {} node.", other.kind()),
		}
	}
}
impl Index<usize> for Node {
	type Output = Node;

	fn index(&self, idx: usize) -> &Self::Output {
		match self {
			Self::Array(items) => items.get(idx).unwrap_or(&ABSENT),
			other => panic!("Cannot index position {idx} on a {} node.", other.kind()),
		}
	}
}
impl Display for Node {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		Display::fmt(&self.to_value(), f)
	}
}

/// Read-only wrapper around one decoded JSON object.
///
/// [`get`](Self::get) is the name-style accessor and returns `None` for missing fields;
/// `response["field"]` is the subscript accessor and returns [`Node::Absent`] instead. Both read
/// the same map, so any present field yields the same node either way.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WalmartResponse {
	fields: BTreeMap<String, Node>,
}
impl WalmartResponse {
	/// Wraps a JSON object; other shapes are rejected.
	pub fn from_value(value: Value) -> Result<Self> {
		match Node::from(value) {
			Node::Object(object) => Ok(object),
			other => Err(other.shape_error("object")),
		}
	}

	/// Looks up a field by name.
	pub fn get(&self, key: &str) -> Option<&Node> {
		self.fields.get(key)
	}

	/// Returns true when the payload carries `key`.
	pub fn contains_key(&self, key: &str) -> bool {
		self.fields.contains_key(key)
	}

	/// Field names in key order.
	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.fields.keys().map(String::as_str)
	}

	/// Field values in key order.
	pub fn values(&self) -> impl Iterator<Item = &Node> {
		self.fields.values()
	}

	/// Field name/value pairs in key order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &Node)> {
		self.fields.iter().map(|(key, node)| (key.as_str(), node))
	}

	/// Number of fields.
	pub fn len(&self) -> usize {
		self.fields.len()
	}

	/// Returns true when the object has no fields.
	pub fn is_empty(&self) -> bool {
		self.fields.is_empty()
	}

	/// Unwraps back into a JSON object.
	pub fn to_value(&self) -> Value {
		Value::Object(self.fields.iter().map(|(key, node)| (key.clone(), node.to_value())).collect())
	}

	/// Deserializes the object into a caller-defined type, reporting the failing path.
	pub fn deserialize<T>(&self) -> Result<T>
	where
		T: DeserializeOwned,
	{
		serde_path_to_error::deserialize(self.to_value())
			.map_err(|source| Error::Decode { source, status: None })
	}
}
impl Index<&str> for WalmartResponse {
	type Output = Node;

	fn index(&self, key: &str) -> &Self::Output {
		self.fields.get(key).unwrap_or(&ABSENT)
	}
}
impl Display for WalmartResponse {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		Display::fmt(&self.to_value(), f)
	}
}
impl<'a> IntoIterator for &'a WalmartResponse {
	type IntoIter = std::collections::btree_map::Iter<'a, String, Node>;
	type Item = (&'a String, &'a Node);

	fn into_iter(self) -> Self::IntoIter {
		self.fields.iter()
	}
}
