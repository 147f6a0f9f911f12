//! Client that blocks the calling thread for each request.

// std
use std::vec::IntoIter;
// self
#[cfg(feature = "blocking")] use crate::http::ReqwestBlockingTransport;
use crate::{
	_prelude::*,
	auth::{Credentials, PublisherId},
	client::{Core, skip_chunk},
	config::ClientConfig,
	endpoint::{self, Call, ItemIds, MAX_IDS_PER_CALL},
	http::BlockingTransport,
	obs::{self, CallScope},
	request::Params,
	response::{self, Catalog, Node, Product, ReviewResponse, Search, Store, Taxonomy},
};

/// Blocking client backed by reqwest's blocking HTTP client.
#[cfg(feature = "blocking")]
pub type WalmartIo = BlockingClient<ReqwestBlockingTransport>;

/// Affiliate API client for callers that block on each request.
#[derive(Clone, Debug)]
pub struct BlockingClient<T>
where
	T: BlockingTransport,
{
	core: Core,
	transport: T,
}
#[cfg(feature = "blocking")]
impl BlockingClient<ReqwestBlockingTransport> {
	/// Creates a client with the default reqwest blocking transport.
	pub fn new(credentials: Credentials) -> Self {
		Self::with_transport(credentials, ReqwestBlockingTransport::default())
	}
}
impl<T> BlockingClient<T>
where
	T: BlockingTransport,
{
	/// Creates a client over a caller-supplied transport.
	pub fn with_transport(credentials: Credentials, transport: T) -> Self {
		Self::with_config(credentials, ClientConfig::default(), transport)
	}

	/// Creates a client with explicit defaults.
	pub fn with_config(credentials: Credentials, config: ClientConfig, transport: T) -> Self {
		obs::client_ready("blocking", &credentials.consumer_id);

		Self { core: Core::new(&credentials, config), transport }
	}

	/// Injects `publisher_id` into every query that does not carry one.
	pub fn with_publisher_id(mut self, publisher_id: PublisherId) -> Self {
		self.core.set_publisher_id(publisher_id);

		self
	}

	/// Points the client at another API origin.
	pub fn with_base_url(mut self, base_url: impl AsRef<str>) -> Result<Self> {
		self.core.set_base_url(base_url.as_ref())?;

		Ok(self)
	}

	/// Client defaults.
	pub fn config(&self) -> &ClientConfig {
		self.core.config()
	}

	/// Underlying transport.
	pub fn transport(&self) -> &T {
		&self.transport
	}

	/// Signs and sends one call, returning the wrapped payload.
	pub fn call(&self, call: &Call) -> Result<Node> {
		CallScope::open(call.endpoint, "blocking").run(|| {
			let request = self.core.prepare(call)?;
			let response = self.transport.execute(request)?;

			self.core.finish(call, response)
		})
	}

	/// Looks up products by id, 20 ids per request; the first failing request aborts the lookup.
	pub fn product_lookup(&self, ids: impl Into<ItemIds>, params: &Params) -> Result<Vec<Product>> {
		let mut products = Vec::new();

		for call in endpoint::product_lookup(&ids.into(), MAX_IDS_PER_CALL, params)? {
			products.extend(response::items(self.call(&call)?)?);
		}

		Ok(products)
	}

	/// Lazily looks up products `amount` ids at a time (clamped to `1..=20`).
	///
	/// Each call to [`Iterator::next`] performs at most the requests needed to yield one chunk.
	/// Failed chunks are logged and skipped. Call again to restart.
	pub fn bulk_product_lookup(
		&self,
		ids: impl Into<ItemIds>,
		amount: usize,
		params: &Params,
	) -> Result<BulkLookup<'_, T>> {
		let calls = endpoint::product_lookup(&ids.into(), amount, params)?;

		Ok(BulkLookup { client: self, calls: calls.into_iter(), chunk: 0 })
	}

	/// Full-text catalog search.
	pub fn search(&self, query: &str, params: &Params) -> Result<Search> {
		response::object(self.call(&endpoint::search(query, params)?)?)
	}

	/// Customer reviews for one item.
	pub fn reviews(&self, item_id: &str, params: &Params) -> Result<ReviewResponse> {
		response::object(self.call(&endpoint::reviews(item_id, params)?)?)
	}

	/// Stores near a coordinate pair or zip code.
	pub fn stores(&self, params: &Params) -> Result<Vec<Store>> {
		response::list(self.call(&endpoint::stores(params)?)?)
	}

	/// Category taxonomy.
	pub fn taxonomy(&self, params: &Params) -> Result<Taxonomy> {
		response::object(self.call(&endpoint::taxonomy(params))?)
	}

	/// Currently trending items.
	pub fn trending(&self, params: &Params) -> Result<Vec<Product>> {
		response::items(self.call(&endpoint::trending(params))?)
	}

	/// Items recommended alongside `item_id`.
	pub fn product_recommendation(&self, item_id: &str) -> Result<Vec<Product>> {
		response::list(self.call(&endpoint::product_recommendation(item_id)?)?)
	}

	/// Items recommended from a browsing history anchored on `item_id`.
	pub fn post_browsed_products(&self, item_id: &str) -> Result<Vec<Product>> {
		response::list(self.call(&endpoint::post_browsed_products(item_id)?)?)
	}

	/// One page of the paginated catalog; pass [`Catalog::next_page`] back as `nextPage`.
	pub fn catalog_product(&self, params: &Params) -> Result<Catalog> {
		let call = endpoint::catalog_product(params, self.config().base_path())?;

		response::object(self.call(&call)?)
	}
}

/// Lazy chunked product lookup returned by [`BlockingClient::bulk_product_lookup`].
#[derive(Debug)]
pub struct BulkLookup<'a, T>
where
	T: BlockingTransport,
{
	client: &'a BlockingClient<T>,
	calls: IntoIter<Call>,
	chunk: usize,
}
impl<T> BulkLookup<'_, T>
where
	T: BlockingTransport,
{
	/// Number of chunks not yet requested.
	pub fn remaining(&self) -> usize {
		self.calls.len()
	}
}
impl<T> Iterator for BulkLookup<'_, T>
where
	T: BlockingTransport,
{
	type Item = Vec<Product>;

	fn next(&mut self) -> Option<Self::Item> {
		for call in self.calls.by_ref() {
			let chunk = self.chunk;

			self.chunk += 1;

			match self.client.call(&call).and_then(response::items) {
				Ok(products) => return Some(products),
				Err(e) => skip_chunk(&call, chunk, &e),
			}
		}

		None
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		(0, Some(self.calls.len()))
	}
}
