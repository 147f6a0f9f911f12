//! Schema-agnostic response wrapping.
//!
//! Payloads are decoded into [`serde_json::Value`] and then wrapped recursively into [`Node`]
//! trees. No schema is enforced: fields the vendor adds later are reachable the same way as the
//! documented ones. Typed views in [`view`] layer named accessors on top.

pub mod node;
pub mod view;

mod text;

pub use node::*;
pub use text::unescape_html;
pub use view::*;

// self
use crate::_prelude::*;

/// Wraps decoded JSON into a read-only tree.
pub fn wrap(value: Value) -> Node {
	Node::from(value)
}

/// Decodes a raw response body into JSON, keeping the failing path on error.
pub fn decode(status: u16, body: &[u8]) -> Result<Value> {
	let mut deserializer = serde_json::Deserializer::from_slice(body);

	serde_path_to_error::deserialize(&mut deserializer)
		.map_err(|source| Error::Decode { source, status: Some(status) })
}

/// Extracts products from the `items` field of an object payload.
///
/// A success body without `items` (an error envelope, for instance) is a shape error, not an empty
/// result.
pub fn items(node: Node) -> Result<Vec<Product>> {
	let object = node.object()?;
	let items = &object["items"];

	items.array()?;

	Ok(view::objects(items))
}

/// Converts a top-level array payload into views.
pub fn list<V>(node: Node) -> Result<Vec<V>>
where
	V: From<WalmartResponse>,
{
	node.array()?;

	Ok(view::objects(&node))
}

/// Converts a top-level object payload into a view.
pub fn object<V>(node: Node) -> Result<V>
where
	V: From<WalmartResponse>,
{
	match node {
		Node::Object(object) => Ok(V::from(object)),
		other => Err(Error::UnexpectedResponseShape { expected: "object", found: other.kind() }),
	}
}

#[cfg(test)]
mod tests {
	// crates.io
	use serde_json::json;
	// self
	use super::*;

	#[test]
	fn decode_reports_status_and_position() {
		let err = decode(200, b"{\"items\": [1, }").expect_err("Body is malformed.");

		assert!(matches!(err, Error::Decode { status: Some(200), .. }));
		assert_eq!(decode(200, b"[1,2]").expect("Body is valid."), json!([1, 2]));
	}

	#[test]
	fn items_requires_an_items_array() {
		let products = items(wrap(json!({ "items": [{ "itemId": 1 }, { "itemId": 2 }] })))
			.expect("Items are present.");

		assert_eq!(products.len(), 2);
		assert!(items(wrap(json!({ "items": [] }))).expect("Empty items array.").is_empty());
		assert!(matches!(
			items(wrap(json!({ "errors": [{ "message": "boom" }] }))),
			Err(Error::UnexpectedResponseShape { expected: "array", found: "absent" })
		));
		assert!(items(wrap(json!({ "items": "nope" }))).is_err());
		assert!(items(wrap(json!([]))).is_err());
	}

	#[test]
	fn list_and_object_check_top_level_shape() {
		let stores: Vec<Store> = list(wrap(json!([{ "no": 1 }, { "no": 2 }]))).expect("Array payload.");

		assert_eq!(stores[1].no(), Some(2));
		assert!(list::<Store>(wrap(json!({ "no": 1 }))).is_err());
		assert!(object::<Taxonomy>(wrap(json!({ "categories": [] }))).is_ok());
		assert!(matches!(
			object::<Taxonomy>(wrap(json!(null))),
			Err(Error::UnexpectedResponseShape { expected: "object", found: "null" })
		));
	}
}
