//! Vendor endpoint catalog and per-endpoint call construction.
//!
//! Every client method funnels through one of the constructors below. They validate required
//! inputs, rename vendor-specific parameters, and return a [`Call`] that the request builder signs.
//! Constructors never touch the network, so both clients share them verbatim.

// std
use std::collections::HashSet;
// crates.io
use serde_json::json;
// self
use crate::{_prelude::*, http::HttpMethod, request::Params};

/// Upper bound on ids per product lookup request.
pub const MAX_IDS_PER_CALL: usize = 20;

/// Affiliate API endpoints exposed by the clients.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Endpoint {
	/// `GET /affil/product/v2/items`.
	ProductLookup,
	/// `GET /affil/product/v2/search`.
	Search,
	/// `GET /affil/product/v2/reviews/{item_id}`.
	Reviews,
	/// `GET /affil/product/v2/stores`.
	Stores,
	/// `GET /affil/product/v2/taxonomy`.
	Taxonomy,
	/// `GET /affil/product/v2/trends`.
	Trending,
	/// `GET /affil/product/v2/nbp`.
	Recommendation,
	/// `POST /affil/product/v2/postbrowse`.
	BrowsedProducts,
	/// `GET /affil/product/v2/paginated/items`.
	Catalog,
}
impl Endpoint {
	/// HTTP verb used by the endpoint.
	pub const fn method(self) -> HttpMethod {
		match self {
			Endpoint::BrowsedProducts => HttpMethod::Post,
			_ => HttpMethod::Get,
		}
	}

	/// Path relative to the base URL; reviews append the item id.
	pub const fn path(self) -> &'static str {
		match self {
			Endpoint::ProductLookup => "/affil/product/v2/items",
			Endpoint::Search => "/affil/product/v2/search",
			Endpoint::Reviews => "/affil/product/v2/reviews",
			Endpoint::Stores => "/affil/product/v2/stores",
			Endpoint::Taxonomy => "/affil/product/v2/taxonomy",
			Endpoint::Trending => "/affil/product/v2/trends",
			Endpoint::Recommendation => "/affil/product/v2/nbp",
			Endpoint::BrowsedProducts => "/affil/product/v2/postbrowse",
			Endpoint::Catalog => "/affil/product/v2/paginated/items",
		}
	}

	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			Endpoint::ProductLookup => "product_lookup",
			Endpoint::Search => "search",
			Endpoint::Reviews => "reviews",
			Endpoint::Stores => "stores",
			Endpoint::Taxonomy => "taxonomy",
			Endpoint::Trending => "trending",
			Endpoint::Recommendation => "product_recommendation",
			Endpoint::BrowsedProducts => "post_browsed_products",
			Endpoint::Catalog => "catalog_product",
		}
	}
}
impl Display for Endpoint {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// One unsigned endpoint invocation.
#[derive(Clone, Debug, PartialEq)]
pub struct Call {
	/// Target endpoint.
	pub endpoint: Endpoint,
	/// Path relative to the base URL.
	pub path: String,
	/// Caller parameters after endpoint-specific renaming.
	pub params: Params,
	/// JSON body for POST endpoints.
	pub body: Option<Value>,
}
impl Call {
	/// Creates a call against the endpoint's default path.
	pub fn new(endpoint: Endpoint, params: Params) -> Self {
		Self { endpoint, path: endpoint.path().to_owned(), params, body: None }
	}

	/// Replaces the path.
	pub fn with_path(mut self, path: impl Into<String>) -> Self {
		self.path = path.into();

		self
	}

	/// Attaches a JSON body.
	pub fn with_body(mut self, body: Value) -> Self {
		self.body = Some(body);

		self
	}
}

/// Normalized item id list.
///
/// Accepts a comma separated string or any list of strings. Entries are trimmed, blanks dropped,
/// and duplicates removed while keeping the first occurrence order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ItemIds(Vec<String>);
impl ItemIds {
	/// Splits a comma separated id string.
	pub fn parse(raw: &str) -> Self {
		Self::from_list(raw.split(','))
	}

	/// Normalizes a list of ids.
	pub fn from_list<I, S>(ids: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let mut seen = HashSet::new();
		let ids = ids
			.into_iter()
			.filter_map(|id| {
				let id = id.as_ref().trim();

				(!id.is_empty() && seen.insert(id.to_owned())).then(|| id.to_owned())
			})
			.collect();

		Self(ids)
	}

	/// Normalized ids in request order.
	pub fn as_slice(&self) -> &[String] {
		&self.0
	}

	/// Number of distinct ids.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns true when no ids survived normalization.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}
impl From<&str> for ItemIds {
	fn from(raw: &str) -> Self {
		Self::parse(raw)
	}
}
impl From<String> for ItemIds {
	fn from(raw: String) -> Self {
		Self::parse(&raw)
	}
}
impl From<Vec<String>> for ItemIds {
	fn from(ids: Vec<String>) -> Self {
		Self::from_list(ids)
	}
}
impl From<Vec<&str>> for ItemIds {
	fn from(ids: Vec<&str>) -> Self {
		Self::from_list(ids)
	}
}
impl From<&[&str]> for ItemIds {
	fn from(ids: &[&str]) -> Self {
		Self::from_list(ids)
	}
}
impl<const N: usize> From<[&str; N]> for ItemIds {
	fn from(ids: [&str; N]) -> Self {
		Self::from_list(ids)
	}
}

/// Clamps a caller-supplied bulk chunk size into `[1, MAX_IDS_PER_CALL]`.
pub fn clamp_chunk_size(amount: usize) -> usize {
	amount.clamp(1, MAX_IDS_PER_CALL)
}

/// Splits a product lookup into one call per id chunk.
///
/// An empty id list is only accepted when the caller looks up by `upc`, in which case a single
/// call without `ids` is produced.
pub fn product_lookup(ids: &ItemIds, chunk_size: usize, params: &Params) -> Result<Vec<Call>> {
	if ids.is_empty() {
		if params.contains("upc") {
			return Ok(vec![Call::new(Endpoint::ProductLookup, params.clone())]);
		}

		return Err(Error::invalid_parameter("product lookup requires at least one item id or `upc`"));
	}

	let calls = ids
		.as_slice()
		.chunks(clamp_chunk_size(chunk_size))
		.map(|chunk| {
			let mut params = params.clone();

			params.insert("ids", chunk.join(","));

			Call::new(Endpoint::ProductLookup, params)
		})
		.collect();

	Ok(calls)
}

/// Builds a search call, mapping the facet shorthands onto the vendor names.
pub fn search(query: &str, params: &Params) -> Result<Call> {
	let query = query.trim();

	if query.is_empty() {
		return Err(Error::invalid_parameter("search requires a non-empty `query`"));
	}

	let mut params = params.clone();

	if let Some(flag) = params.get("facet").and_then(|value| value.as_bool()) {
		params.insert("facet", if flag { "on" } else { "off" });
	}
	if let Some(range) = params.remove("range") {
		params.insert("facet.range", range);
		params.insert("facet", "on");
	}
	if let Some(filter) = params.remove("filter") {
		params.insert("facet.filter", filter);
		params.insert("facet", "on");
	}

	params.insert("query", query);

	Ok(Call::new(Endpoint::Search, params))
}

/// Builds a reviews call for one item.
///
/// A `nextPage` value from a previous response (`/reviews/{id}?page=N`) is reduced to `page=N`.
pub fn reviews(item_id: &str, params: &Params) -> Result<Call> {
	let item_id = path_segment(item_id)?;
	let mut params = params.clone();

	if let Some(next_page) = params.remove("nextPage") {
		let next_page = next_page.to_string();
		let page = next_page
			.split_once("page=")
			.map(|(_, rest)| rest.split('&').next().unwrap_or_default())
			.filter(|page| !page.is_empty())
			.ok_or_else(|| {
				Error::invalid_parameter(format!("`nextPage` has no page number: {next_page}"))
			})?;

		params.insert("page", page);
	}

	let path = format!("{}/{item_id}", Endpoint::Reviews.path());

	Ok(Call::new(Endpoint::Reviews, params).with_path(path))
}

/// Builds a store locator call; needs `lat` and `lon`, or `zip`.
pub fn stores(params: &Params) -> Result<Call> {
	let has_coordinates = params.contains("lat") && params.contains("lon");

	if !has_coordinates && !params.contains("zip") {
		return Err(Error::invalid_parameter("store locator requires `lat` and `lon`, or `zip`"));
	}

	Ok(Call::new(Endpoint::Stores, params.clone()))
}

/// Builds a taxonomy call.
pub fn taxonomy(params: &Params) -> Call {
	Call::new(Endpoint::Taxonomy, params.clone())
}

/// Builds a trending items call.
pub fn trending(params: &Params) -> Call {
	Call::new(Endpoint::Trending, params.clone())
}

/// Builds a recommendation call anchored on one item.
pub fn product_recommendation(item_id: &str) -> Result<Call> {
	let item_id = required_item_id(item_id)?;

	Ok(Call::new(Endpoint::Recommendation, Params::new().with("itemId", item_id)))
}

/// Builds a browsed-products call; the item id travels in the query and the JSON body.
pub fn post_browsed_products(item_id: &str) -> Result<Call> {
	let item_id = required_item_id(item_id)?;

	Ok(Call::new(Endpoint::BrowsedProducts, Params::new().with("itemId", item_id))
		.with_body(json!({ "itemId": item_id })))
}

/// Builds a paginated catalog call.
///
/// `nextPage` (path plus query, as returned by a previous catalog page) replaces the default path;
/// its query pairs take precedence over caller parameters. `base_path` is the service prefix the
/// vendor includes in `nextPage`, stripped before the path is reattached to the configured base.
pub fn catalog_product(params: &Params, base_path: &str) -> Result<Call> {
	let mut params = params.clone();
	let Some(next_page) = params.remove("nextPage") else {
		return Ok(Call::new(Endpoint::Catalog, params));
	};
	let next_page = next_page.to_string();
	let (path, query) = next_page.split_once('?').unwrap_or((next_page.as_str(), ""));
	let path = path.strip_prefix(base_path).unwrap_or(path);

	if !path.starts_with(Endpoint::Catalog.path()) {
		return Err(Error::invalid_parameter(format!(
			"`nextPage` does not point at the catalog endpoint: {next_page}"
		)));
	}

	for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
		if crate::request::RESERVED_PARAMS.contains(&&*key) {
			continue;
		}

		params.insert(key.into_owned(), value.into_owned());
	}

	Ok(Call::new(Endpoint::Catalog, params).with_path(path))
}

fn required_item_id(item_id: &str) -> Result<&str> {
	let item_id = item_id.trim();

	if item_id.is_empty() {
		return Err(Error::invalid_parameter("`item_id` must not be empty"));
	}

	Ok(item_id)
}

fn path_segment(item_id: &str) -> Result<&str> {
	let item_id = required_item_id(item_id)?;

	if item_id.chars().any(|c| c.is_whitespace() || matches!(c, '/' | '?' | '#' | '%')) {
		return Err(Error::invalid_parameter(format!(
			"`item_id` cannot be used as a path segment: {item_id}"
		)));
	}

	Ok(item_id)
}
