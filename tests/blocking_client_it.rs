#![cfg(feature = "blocking")]

mod common;

// crates.io
use httpmock::prelude::*;
use serde_json::json;
// self
use common::*;
use walmart_io::{
	auth::PublisherId,
	client::WalmartIo,
	error::Error,
	request::Params,
};

fn client(server: &MockServer) -> WalmartIo {
	WalmartIo::new(credentials())
		.with_base_url(server.url(BASE_PATH))
		.expect("Mock server URL should be a valid base.")
}

#[test]
fn product_lookup_signs_and_wraps_items() {
	let server = MockServer::start();
	let mock = server.mock(|when, then| {
		when.method(GET)
			.path(ITEMS_PATH)
			.query_param("ids", "1,2,3")
			.query_param("consumerId", CONSUMER_ID)
			.query_param("richAttributes", "true")
			.query_param_exists("signature")
			.query_param_exists("timestamp");
		then.status(200).header("content-type", "application/json").json_body(items_body(1..=3));
	});
	let products = client(&server)
		.product_lookup("1, 2,3,2", &Params::new().with("format", "xml"))
		.expect("Lookup should succeed.");

	mock.assert_calls(1);

	assert_eq!(products.len(), 3);

	for product in &products {
		assert_eq!(product.get("itemId"), Some(&product["itemId"]));
		assert_eq!(product.get("imageEntities"), Some(&product["imageEntities"]));
	}

	assert_eq!(products[0].item_id(), Some(1));
	assert_eq!(products[0].name().as_deref(), Some("Item & 1"));
	assert!(products[0]["msrp"].is_absent());
	assert!(products[0].get("msrp").is_none());
}

#[test]
fn product_lookup_chunks_and_concatenates() {
	let server = MockServer::start();
	let mocks = [(1..=20), (21..=40), (41..=45)].map(|ids| {
		server.mock(|when, then| {
			when.method(GET).path(ITEMS_PATH).query_param("ids", joined(ids.clone()));
			then.status(200).json_body(items_body(ids));
		})
	});
	let ids: Vec<String> = (1..=45).map(|id: u64| id.to_string()).collect();
	let products = client(&server).product_lookup(ids, &Params::new()).expect("Lookup should succeed.");

	for mock in &mocks {
		mock.assert_calls(1);
	}

	assert_eq!(products.len(), 45);
	assert_eq!(products[44].item_id(), Some(45));
}

#[test]
fn product_lookup_propagates_http_errors() {
	let server = MockServer::start();

	server.mock(|when, then| {
		when.method(GET).path(ITEMS_PATH);
		then.status(400).json_body(json!({ "errors": [{ "code": 4002, "message": "Invalid itemId" }] }));
	});

	let err = client(&server).product_lookup("999", &Params::new()).expect_err("400 must propagate.");

	match &err {
		Error::Http { status, reason, detail, .. } => {
			assert_eq!(*status, 400);
			assert_eq!(*reason, "Bad Request");
			assert_eq!(detail.as_deref(), Some("Invalid itemId"));
		},
		other => panic!("Unexpected error: {other:?}."),
	}

	assert_eq!(
		err.to_string(),
		"Walmart server answered with the following error: Bad Request - Invalid itemId. Status code: 400.",
	);
}

#[test]
fn error_envelope_with_success_status_is_not_an_empty_result() {
	let server = MockServer::start();
	let mock = server.mock(|when, then| {
		when.method(GET).path(ITEMS_PATH).query_param("ids", "33093101");
		then.status(200).json_body(json!({ "errors": [{ "message": "boom" }] }));
	});
	let client = client(&server);

	assert!(matches!(
		client.product_lookup("33093101", &Params::new()),
		Err(Error::UnexpectedResponseShape { expected: "array", found: "absent" })
	));

	let chunks: Vec<_> = client
		.bulk_product_lookup("33093101", 20, &Params::new())
		.expect("Ids are present.")
		.collect();

	assert!(chunks.is_empty());

	mock.assert_calls(2);
}

#[test]
fn bulk_lookup_single_chunk_for_few_ids() {
	let server = MockServer::start();
	let mock = server.mock(|when, then| {
		when.method(GET).path(ITEMS_PATH).query_param("ids", "7,8,9");
		then.status(200).json_body(items_body(7..=9));
	});
	let client = client(&server);
	let mut bulk = client.bulk_product_lookup(["7", "8", "9"], 20, &Params::new()).expect("Ids are present.");

	mock.assert_calls(0);

	let first = bulk.next().expect("One chunk should be yielded.");

	assert_eq!(first.len(), 3);
	assert!(bulk.next().is_none());

	mock.assert_calls(1);
}

#[test]
fn bulk_lookup_skips_failed_chunk() {
	let server = MockServer::start();
	let first = server.mock(|when, then| {
		when.method(GET).path(ITEMS_PATH).query_param("ids", joined(1..=20));
		then.status(200).json_body(items_body(1..=20));
	});
	let failing = server.mock(|when, then| {
		when.method(GET).path(ITEMS_PATH).query_param("ids", joined(21..=40));
		then.status(500).body("upstream exploded");
	});
	let last = server.mock(|when, then| {
		when.method(GET).path(ITEMS_PATH).query_param("ids", joined(41..=45));
		then.status(200).json_body(items_body(41..=45));
	});
	let client = client(&server);
	let ids = joined(1..=45);
	let chunks: Vec<_> = client
		.bulk_product_lookup(ids.as_str(), 20, &Params::new())
		.expect("Ids are present.")
		.collect();

	first.assert_calls(1);
	failing.assert_calls(1);
	last.assert_calls(1);

	assert_eq!(chunks.len(), 2);
	assert_eq!(chunks[0].len(), 20);
	assert_eq!(chunks[1].len(), 5);
	assert_eq!(chunks[1][0].item_id(), Some(41));
}

#[test]
fn bulk_lookup_clamps_amount() {
	let server = MockServer::start();
	let mock = server.mock(|when, then| {
		when.method(GET).path(ITEMS_PATH);
		then.status(200).json_body(items_body(1..=1));
	});
	let client = client(&server);
	let bulk = client.bulk_product_lookup("1,2,3", 0, &Params::new()).expect("Ids are present.");

	assert_eq!(bulk.remaining(), 3);
	assert_eq!(bulk.count(), 3);

	mock.assert_calls(3);
	assert!(matches!(
		client.bulk_product_lookup(" , ", 5, &Params::new()),
		Err(Error::InvalidParameter { .. })
	));
}

#[test]
fn search_maps_facets_on_the_wire() {
	let server = MockServer::start();
	let mock = server.mock(|when, then| {
		when.method(GET)
			.path("/api-proxy/service/affil/product/v2/search")
			.query_param("query", "ipod")
			.query_param("facet", "on")
			.query_param("facet.filter", "brand:Apple")
			.query_param("publisherId", "pub-1");
		then.status(200).json_body(json!({
			"query": "ipod",
			"totalResults": "1",
			"numItems": 1,
			"items": [{ "itemId": 42 }],
			"facets": []
		}));
	});
	let search = client(&server)
		.with_publisher_id(PublisherId::new("pub-1").expect("Publisher should be valid."))
		.search("ipod", &Params::new().with("filter", "brand:Apple"))
		.expect("Search should succeed.");

	mock.assert_calls(1);

	assert_eq!(search.total_results(), Some(1));
	assert_eq!(search.items()[0].item_id(), Some(42));
}

#[test]
fn reviews_follow_next_page() {
	let server = MockServer::start();
	let mock = server.mock(|when, then| {
		when.method(GET)
			.path("/api-proxy/service/affil/product/v2/reviews/33093101")
			.query_param("page", "2");
		then.status(200).json_body(json!({
			"itemId": 33093101,
			"reviews": [{ "reviewer": "kim", "title": "Great &amp; cheap" }],
			"nextPage": "/reviews/33093101?page=3"
		}));
	});
	let response = client(&server)
		.reviews("33093101", &Params::new().with("nextPage", "/reviews/33093101?page=2"))
		.expect("Reviews should succeed.");

	mock.assert_calls(1);

	assert_eq!(response.reviews()[0].title().as_deref(), Some("Great & cheap"));
	assert_eq!(response.next_page(), Some("/reviews/33093101?page=3"));
}

#[test]
fn stores_require_location() {
	let server = MockServer::start();
	let mock = server.mock(|when, then| {
		when.method(GET).path("/api-proxy/service/affil/product/v2/stores").query_param("zip", "72712");
		then.status(200).json_body(json!([{ "no": 100, "name": "Bentonville Supercenter", "zip": "72712" }]));
	});
	let client = client(&server);
	let stores = client.stores(&Params::new().with("zip", "72712")).expect("Stores should succeed.");

	assert_eq!(stores.len(), 1);
	assert_eq!(stores[0].name(), Some("Bentonville Supercenter"));
	assert!(matches!(client.stores(&Params::new()), Err(Error::InvalidParameter { .. })));

	mock.assert_calls(1);
}

#[test]
fn browsed_products_post_item_id() {
	let server = MockServer::start();
	let mock = server.mock(|when, then| {
		when.method(POST)
			.path("/api-proxy/service/affil/product/v2/postbrowse")
			.query_param("itemId", "54321")
			.json_body(json!({ "itemId": "54321" }));
		then.status(200).json_body(json!([product(1), product(2)]));
	});
	let products = client(&server).post_browsed_products("54321").expect("Call should succeed.");

	mock.assert_calls(1);

	assert_eq!(products.len(), 2);
}

#[test]
fn catalog_pages_round_trip() {
	let server = MockServer::start();
	let page_two = server.mock(|when, then| {
		when.method(GET)
			.path("/api-proxy/service/affil/product/v2/paginated/items")
			.query_param("category", "3944")
			.query_param("maxId", "20");
		then.status(200).json_body(json!({ "category": "3944", "nextPageExist": false, "items": [product(21)] }));
	});
	let page_one = server.mock(|when, then| {
		when.method(GET)
			.path("/api-proxy/service/affil/product/v2/paginated/items")
			.query_param("category", "3944")
			.query_param("count", "1");
		then.status(200).json_body(json!({
			"category": "3944",
			"nextPage": "/api-proxy/service/affil/product/v2/paginated/items?category=3944&maxId=20",
			"nextPageExist": true,
			"items": [product(20)]
		}));
	});
	let client = client(&server);
	let first = client
		.catalog_product(&Params::new().with("category", "3944").with("count", 1))
		.expect("First page.");

	assert!(first.next_page_exist());

	let next_page = first.next_page().expect("Next page link should be present.");
	let second =
		client.catalog_product(&Params::new().with("nextPage", next_page)).expect("Second page.");

	page_one.assert_calls(1);
	page_two.assert_calls(1);

	assert!(!second.next_page_exist());
	assert_eq!(second.items()[0].item_id(), Some(21));
}

#[test]
fn taxonomy_and_trending_decode() {
	let server = MockServer::start();

	server.mock(|when, then| {
		when.method(GET).path("/api-proxy/service/affil/product/v2/taxonomy");
		then.status(200).json_body(json!({ "categories": [{ "id": "0", "name": "Root", "children": [] }] }));
	});
	server.mock(|when, then| {
		when.method(GET).path("/api-proxy/service/affil/product/v2/trends");
		then.status(200).json_body(items_body([5, 6]));
	});

	let client = client(&server);
	let taxonomy = client.taxonomy(&Params::new()).expect("Taxonomy should succeed.");
	let trending = client.trending(&Params::new()).expect("Trending should succeed.");

	assert_eq!(taxonomy.categories()[0].name(), Some("Root"));
	assert_eq!(trending.len(), 2);
}

#[test]
fn unexpected_shapes_and_bad_json_are_errors() {
	let server = MockServer::start();

	server.mock(|when, then| {
		when.method(GET).path("/api-proxy/service/affil/product/v2/nbp");
		then.status(200).json_body(json!({ "items": [] }));
	});
	server.mock(|when, then| {
		when.method(GET).path("/api-proxy/service/affil/product/v2/trends");
		then.status(200).body("<html>maintenance</html>");
	});

	let client = client(&server);

	assert!(matches!(
		client.product_recommendation("1"),
		Err(Error::UnexpectedResponseShape { expected: "array", found: "object" })
	));
	assert!(matches!(client.trending(&Params::new()), Err(Error::Decode { status: Some(200), .. })));
}
