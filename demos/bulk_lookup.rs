//! Streams a large id list through the async client, one chunk at a time.
//!
//! Failed chunks are skipped and logged; run with a `tracing` subscriber attached to see them.
//! Requires `WALMART_CONSUMER_ID` and `WALMART_KEY_FILE`.

// std
use std::env;
// crates.io
use color_eyre::{Result, eyre::WrapErr};
use futures::StreamExt;
// self
use walmart_io::{auth::Credentials, client::AsyncWalmartIo, request::Params};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let credentials = Credentials::from_key_file(
		env::var("WALMART_CONSUMER_ID").wrap_err("WALMART_CONSUMER_ID is not set")?,
		env::var("WALMART_KEY_VERSION").unwrap_or_else(|_| "1".into()),
		env::var("WALMART_KEY_FILE").wrap_err("WALMART_KEY_FILE is not set")?,
	)?;
	let client = AsyncWalmartIo::new(credentials);
	let ids = env::args().skip(1).collect::<Vec<_>>();
	let mut chunks = client.bulk_product_lookup(ids, 10, &Params::new())?;
	let mut total = 0;

	while let Some(products) = chunks.next().await {
		total += products.len();

		for product in &products {
			println!("{}\t{}", product.item_id().unwrap_or_default(), product.stock().unwrap_or("?"));
		}
	}

	println!("{total} products fetched");

	Ok(())
}
