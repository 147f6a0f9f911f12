//! Shared fixtures for integration tests.

#![allow(dead_code)]

// std
use std::path::PathBuf;
// crates.io
use serde_json::{Value, json};
// self
use walmart_io::auth::Credentials;

pub const CONSUMER_ID: &str = "d8b9f4c2-7a1e-4f3b-9c6d-2e5a8b1f0c37";
pub const BASE_PATH: &str = "/api-proxy/service";
pub const ITEMS_PATH: &str = "/api-proxy/service/affil/product/v2/items";

pub fn fixture(name: &str) -> PathBuf {
	PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name)
}

pub fn credentials() -> Credentials {
	Credentials::from_key_file(CONSUMER_ID, "1", fixture("test_key.pem"))
		.expect("Fixture credentials should load.")
}

pub fn product(id: u64) -> Value {
	json!({
		"itemId": id,
		"parentItemId": id,
		"name": format!("Item &amp; {id}"),
		"salePrice": 9.97,
		"upc": format!("0{id:011}"),
		"categoryPath": "Electronics/Audio",
		"stock": "Available",
		"availableOnline": true,
		"imageEntities": [{ "entityType": "PRIMARY", "thumbnailImage": format!("https://i5.walmartimages.com/{id}.jpeg") }],
		"giftOptions": {}
	})
}

pub fn items_body(ids: impl IntoIterator<Item = u64>) -> Value {
	json!({ "items": ids.into_iter().map(product).collect::<Vec<_>>() })
}

pub fn joined(ids: impl IntoIterator<Item = u64>) -> String {
	ids.into_iter().map(|id| id.to_string()).collect::<Vec<_>>().join(",")
}
