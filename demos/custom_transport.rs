//! Plugs a custom [`BlockingTransport`] into the client.
//!
//! 1. Implement [`BlockingTransport::execute`] to move the signed [`HttpRequest`] over any HTTP
//!    stack (here: an in-memory fixture table).
//! 2. Hand the transport to [`BlockingClient::with_transport`].
//! 3. Every endpoint method now runs through it, including signing and status handling.

// crates.io
use color_eyre::Result;
use serde_json::json;
// self
use walmart_io::{
	auth::Credentials,
	client::BlockingClient,
	error::TransportError,
	http::{BlockingTransport, HttpRequest, HttpResponse},
	request::Params,
};

#[derive(Debug)]
struct Fixtures;
impl BlockingTransport for Fixtures {
	fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
		println!("{} {}", request.method, request.url.path());

		for (name, value) in &request.headers {
			println!("  {name}: {}", if name == "WM_SEC.AUTH_SIGNATURE" { "<redacted>" } else { value.as_str() });
		}

		let body = match request.url.path().rsplit('/').next() {
			Some("trends") => json!({ "items": [{ "itemId": 1, "name": "Trending &amp; hot" }] }),
			Some("stores") => json!([{ "no": 100, "city": "Bentonville" }]),
			_ => return Ok(HttpResponse::new(404, "")),
		};

		Ok(HttpResponse::new(200, body.to_string()))
	}
}

fn main() -> Result<()> {
	color_eyre::install()?;

	let key = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/test_key.pem");
	let credentials =
		Credentials::from_key_file("00000000-0000-0000-0000-000000000000", "1", key)?;
	let client = BlockingClient::with_transport(credentials, Fixtures);

	for product in client.trending(&Params::new())? {
		println!("trending: {}", product.name().unwrap_or_default());
	}
	for store in client.stores(&Params::new().with("zip", "72712"))? {
		println!("store #{} in {}", store["no"], store.city().unwrap_or_default());
	}

	if let Err(e) = client.taxonomy(&Params::new()) {
		println!("taxonomy failed as expected: {e}");
	}

	Ok(())
}
