//! Looks up a few products and searches the catalog with the blocking client.
//!
//! Requires `WALMART_CONSUMER_ID` and `WALMART_KEY_FILE`; `WALMART_KEY_VERSION` defaults to `1`.
//!
//! ```sh
//! cargo run --example product_lookup -- 33093101,54518466
//! ```

// std
use std::env;
// crates.io
use color_eyre::{Result, eyre::WrapErr};
// self
use walmart_io::{auth::Credentials, client::WalmartIo, request::Params};

fn main() -> Result<()> {
	color_eyre::install()?;

	let credentials = Credentials::from_key_file(
		env::var("WALMART_CONSUMER_ID").wrap_err("WALMART_CONSUMER_ID is not set")?,
		env::var("WALMART_KEY_VERSION").unwrap_or_else(|_| "1".into()),
		env::var("WALMART_KEY_FILE").wrap_err("WALMART_KEY_FILE is not set")?,
	)?;
	let client = WalmartIo::new(credentials);
	let ids = env::args().nth(1).unwrap_or_else(|| "33093101".into());

	for product in client.product_lookup(ids.as_str(), &Params::new())? {
		println!(
			"{:>10}  {:<60}  {}",
			product.item_id().unwrap_or_default(),
			product.name().unwrap_or_default(),
			product.sale_price().map(|price| format!("${price:.2}")).unwrap_or_else(|| "n/a".into()),
		);
	}

	let search = client.search("ipod", &Params::new().with("numItems", 5).with("facet", true))?;

	println!("\n{} results for `ipod`", search.total_results().unwrap_or_default());

	for product in search.items() {
		println!("  {}", product["name"]);
	}

	Ok(())
}
