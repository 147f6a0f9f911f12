//! Client whose calls suspend at the network boundary.

// crates.io
use futures::stream::{self, Stream};
// self
#[cfg(feature = "reqwest")] use crate::http::ReqwestTransport;
use crate::{
	_prelude::*,
	auth::{Credentials, PublisherId},
	client::{Core, skip_chunk},
	config::ClientConfig,
	endpoint::{self, Call, ItemIds, MAX_IDS_PER_CALL},
	http::AsyncTransport,
	obs::{self, CallScope},
	request::Params,
	response::{self, Catalog, Node, Product, ReviewResponse, Search, Store, Taxonomy},
};

/// Async client backed by reqwest.
#[cfg(feature = "reqwest")]
pub type AsyncWalmartIo = AsyncClient<ReqwestTransport>;

/// Stream returned by [`AsyncClient::bulk_product_lookup`]; each item is one chunk of products.
pub type BulkStream<'a> = Pin<Box<dyn Stream<Item = Vec<Product>> + Send + 'a>>;

/// Affiliate API client for async callers.
#[derive(Clone, Debug)]
pub struct AsyncClient<T>
where
	T: AsyncTransport,
{
	core: Core,
	transport: T,
}
#[cfg(feature = "reqwest")]
impl AsyncClient<ReqwestTransport> {
	/// Creates a client with the default reqwest transport.
	pub fn new(credentials: Credentials) -> Self {
		Self::with_transport(credentials, ReqwestTransport::default())
	}
}
impl<T> AsyncClient<T>
where
	T: AsyncTransport,
{
	/// Creates a client over a caller-supplied transport.
	pub fn with_transport(credentials: Credentials, transport: T) -> Self {
		Self::with_config(credentials, ClientConfig::default(), transport)
	}

	/// Creates a client with explicit defaults.
	pub fn with_config(credentials: Credentials, config: ClientConfig, transport: T) -> Self {
		obs::client_ready("async", &credentials.consumer_id);

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
	pub async fn call(&self, call: &Call) -> Result<Node> {
		CallScope::open(call.endpoint, "async")
			.run_async(async {
				let request = self.core.prepare(call)?;
				let response = self.transport.execute(request).await?;

				self.core.finish(call, response)
			})
			.await
	}

	/// Looks up products by id, 20 ids per request; the first failing request aborts the lookup.
	pub async fn product_lookup(
		&self,
		ids: impl Into<ItemIds>,
		params: &Params,
	) -> Result<Vec<Product>> {
		let mut products = Vec::new();

		for call in endpoint::product_lookup(&ids.into(), MAX_IDS_PER_CALL, params)? {
			products.extend(response::items(self.call(&call).await?)?);
		}

		Ok(products)
	}

	/// Lazily looks up products `amount` ids at a time (clamped to `1..=20`).
	///
	/// The stream suspends once per chunk. Failed chunks are logged and skipped. Call again to
	/// restart.
	pub fn bulk_product_lookup(
		&self,
		ids: impl Into<ItemIds>,
		amount: usize,
		params: &Params,
	) -> Result<BulkStream<'_>> {
		let calls = endpoint::product_lookup(&ids.into(), amount, params)?;
		let chunks = stream::unfold((calls.into_iter(), 0_usize), move |(mut calls, mut chunk)| async move {
			while let Some(call) = calls.next() {
				let current = chunk;

				chunk += 1;

				match self.call(&call).await.and_then(response::items) {
					Ok(products) => return Some((products, (calls, chunk))),
					Err(e) => skip_chunk(&call, current, &e),
				}
			}

			None
		});

		Ok(Box::pin(chunks))
	}

	/// Full-text catalog search.
	pub async fn search(&self, query: &str, params: &Params) -> Result<Search> {
		response::object(self.call(&endpoint::search(query, params)?).await?)
	}

	/// Customer reviews for one item.
	pub async fn reviews(&self, item_id: &str, params: &Params) -> Result<ReviewResponse> {
		response::object(self.call(&endpoint::reviews(item_id, params)?).await?)
	}

	/// Stores near a coordinate pair or zip code.
	pub async fn stores(&self, params: &Params) -> Result<Vec<Store>> {
		response::list(self.call(&endpoint::stores(params)?).await?)
	}

	/// Category taxonomy.
	pub async fn taxonomy(&self, params: &Params) -> Result<Taxonomy> {
		response::object(self.call(&endpoint::taxonomy(params)).await?)
	}

	/// Currently trending items.
	pub async fn trending(&self, params: &Params) -> Result<Vec<Product>> {
		response::items(self.call(&endpoint::trending(params)).await?)
	}

	/// Items recommended alongside `item_id`.
	pub async fn product_recommendation(&self, item_id: &str) -> Result<Vec<Product>> {
		response::list(self.call(&endpoint::product_recommendation(item_id)?).await?)
	}

	/// Items recommended from a browsing history anchored on `item_id`.
	pub async fn post_browsed_products(&self, item_id: &str) -> Result<Vec<Product>> {
		response::list(self.call(&endpoint::post_browsed_products(item_id)?).await?)
	}

	/// One page of the paginated catalog; pass [`Catalog::next_page`] back as `nextPage`.
	pub async fn catalog_product(&self, params: &Params) -> Result<Catalog> {
		let call = endpoint::catalog_product(params, self.config().base_path())?;

		response::object(self.call(&call).await?)
	}
}
