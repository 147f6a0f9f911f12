//! Typed views over [`WalmartResponse`] for the documented payloads.
//!
//! Views are thin newtypes: they deref to the generic wrapper, so every field stays reachable by
//! name or subscript, and add accessors for the fields the vendor documents. Accessors return
//! `None` when the field is missing or has an unexpected type.

// std
use std::ops::Deref;
// self
use crate::{
	_prelude::*,
	response::{Node, WalmartResponse},
};

macro_rules! def_view {
	($(#[$doc:meta])+ $name:ident) => {
		$(#[$doc])+
		#[derive(Clone, Debug, Default, PartialEq)]
		pub struct $name(WalmartResponse);
		impl $name {
			/// Wraps an already decoded object.
			pub fn new(inner: WalmartResponse) -> Self {
				Self(inner)
			}

			/// Returns the generic wrapper.
			pub fn into_inner(self) -> WalmartResponse {
				self.0
			}
		}
		impl Deref for $name {
			type Target = WalmartResponse;

			fn deref(&self) -> &Self::Target {
				&self.0
			}
		}
		impl From<WalmartResponse> for $name {
			fn from(inner: WalmartResponse) -> Self {
				Self(inner)
			}
		}
		impl TryFrom<Node> for $name {
			type Error = Error;

			fn try_from(node: Node) -> Result<Self> {
				match node {
					Node::Object(inner) => Ok(Self(inner)),
					other => Err(Error::UnexpectedResponseShape { expected: "object", found: other.kind() }),
				}
			}
		}
		impl Display for $name {
			fn fmt(&self, f: &mut Formatter) -> FmtResult {
				Display::fmt(&self.0, f)
			}
		}
	};
}

def_view! {
	/// Item returned by product lookup, search, trending, and recommendation endpoints.
	Product
}
impl Product {
	/// Walmart item id.
	pub fn item_id(&self) -> Option<i64> {
		self["itemId"].as_i64()
	}

	/// Item id of the base product for variants.
	pub fn parent_item_id(&self) -> Option<i64> {
		self["parentItemId"].as_i64()
	}

	/// Display name with HTML entities decoded.
	pub fn name(&self) -> Option<String> {
		self["name"].as_text()
	}

	/// Manufacturer suggested retail price.
	pub fn msrp(&self) -> Option<f64> {
		self["msrp"].as_f64()
	}

	/// Selling price.
	pub fn sale_price(&self) -> Option<f64> {
		self["salePrice"].as_f64()
	}

	/// Universal product code.
	pub fn upc(&self) -> Option<&str> {
		self["upc"].as_str()
	}

	/// Breadcrumb path, e.g. `Electronics/iPods and MP3 Players`.
	pub fn category_path(&self) -> Option<&str> {
		self["categoryPath"].as_str()
	}

	/// Reporting hierarchy ids, matching taxonomy ids.
	pub fn category_node(&self) -> Option<&str> {
		self["categoryNode"].as_str()
	}

	/// Short description with HTML entities decoded.
	pub fn short_description(&self) -> Option<String> {
		self["shortDescription"].as_text()
	}

	/// Long description with HTML entities decoded.
	pub fn long_description(&self) -> Option<String> {
		self["longDescription"].as_text()
	}

	/// Brand.
	pub fn brand_name(&self) -> Option<&str> {
		self["brandName"].as_str()
	}

	/// Small image URL.
	pub fn thumbnail_image(&self) -> Option<&str> {
		self["thumbnailImage"].as_str()
	}

	/// Medium image URL.
	pub fn medium_image(&self) -> Option<&str> {
		self["mediumImage"].as_str()
	}

	/// Large image URL.
	pub fn large_image(&self) -> Option<&str> {
		self["largeImage"].as_str()
	}

	/// Deep-linked product page URL carrying the affiliate tracking ids.
	pub fn product_tracking_url(&self) -> Option<&str> {
		self["productTrackingUrl"].as_str()
	}

	/// Affiliate add-to-cart URL.
	pub fn affiliate_add_to_cart_url(&self) -> Option<&str> {
		self["affiliateAddToCartUrl"].as_str()
	}

	/// Standard shipping rate.
	pub fn standard_ship_rate(&self) -> Option<f64> {
		self["standardShipRate"].as_f64()
	}

	/// Whether the item is sold by a marketplace seller.
	pub fn marketplace(&self) -> Option<bool> {
		self["marketplace"].as_bool()
	}

	/// Marketplace seller name.
	pub fn seller_info(&self) -> Option<&str> {
		self["sellerInfo"].as_str()
	}

	/// Manufacturer model number.
	pub fn model_number(&self) -> Option<&str> {
		self["modelNumber"].as_str()
	}

	/// Whether the item can be bought online.
	pub fn available_online(&self) -> Option<bool> {
		self["availableOnline"].as_bool()
	}

	/// Stock indicator (`Available`, `Limited Supply`, `Last few items`, `Not available`).
	pub fn stock(&self) -> Option<&str> {
		self["stock"].as_str()
	}

	/// Average customer rating.
	pub fn customer_rating(&self) -> Option<f64> {
		self["customerRating"].as_f64()
	}

	/// Number of reviews.
	pub fn num_reviews(&self) -> Option<i64> {
		self["numReviews"].as_i64()
	}

	/// Whether the item is on clearance.
	pub fn clearance(&self) -> Option<bool> {
		self["clearance"].as_bool()
	}

	/// Offer type (`ONLINE_ONLY`, `ONLINE_AND_STORE`, ...).
	pub fn offer_type(&self) -> Option<&str> {
		self["offerType"].as_str()
	}

	/// Whether the item ships in two days.
	pub fn is_two_day_shipping_eligible(&self) -> Option<bool> {
		self["isTwoDayShippingEligible"].as_bool()
	}

	/// Image set entries.
	pub fn image_entities(&self) -> &[Node] {
		self["imageEntities"].as_array().unwrap_or_default()
	}

	/// Lowest marketplace offer.
	pub fn best_marketplace_price(&self) -> Option<&WalmartResponse> {
		self["bestMarketplacePrice"].as_object()
	}

	/// Variant item ids.
	pub fn variants(&self) -> Vec<i64> {
		self["variants"].as_array().unwrap_or_default().iter().filter_map(Node::as_i64).collect()
	}
}

def_view! {
	/// One page of the paginated catalog.
	Catalog
}
impl Catalog {
	/// Category filter echoed by the server.
	pub fn category(&self) -> Option<&str> {
		self["category"].as_str()
	}

	/// Path and query of the next page; pass it back as the `nextPage` parameter.
	pub fn next_page(&self) -> Option<&str> {
		self["nextPage"].as_str().filter(|page| !page.is_empty())
	}

	/// Whether another page exists.
	pub fn next_page_exist(&self) -> bool {
		self["nextPageExist"].as_bool().unwrap_or(false)
	}

	/// Number of pages matching the filters.
	pub fn total_pages(&self) -> Option<i64> {
		self["totalPages"].as_i64()
	}

	/// Items on this page.
	pub fn items(&self) -> Vec<Product> {
		objects(&self["items"])
	}
}

def_view! {
	/// Search result page.
	Search
}
impl Search {
	/// Query echoed by the server.
	pub fn query(&self) -> Option<&str> {
		self["query"].as_str()
	}

	/// Applied sort.
	pub fn sort(&self) -> Option<&str> {
		self["sort"].as_str()
	}

	/// Response group (`base` or `full`).
	pub fn response_group(&self) -> Option<&str> {
		self["responseGroup"].as_str()
	}

	/// Total number of matches.
	pub fn total_results(&self) -> Option<i64> {
		self["totalResults"].as_i64()
	}

	/// Position of the first returned item.
	pub fn start(&self) -> Option<i64> {
		self["start"].as_i64()
	}

	/// Number of returned items.
	pub fn num_items(&self) -> Option<i64> {
		self["numItems"].as_i64()
	}

	/// Returned items.
	pub fn items(&self) -> Vec<Product> {
		objects(&self["items"])
	}

	/// Facets, when requested.
	pub fn facets(&self) -> &Node {
		&self["facets"]
	}
}

def_view! {
	/// Reviews page for one item.
	ReviewResponse
}
impl ReviewResponse {
	/// Reviewed item id.
	pub fn item_id(&self) -> Option<i64> {
		self["itemId"].as_i64()
	}

	/// Item name with HTML entities decoded.
	pub fn name(&self) -> Option<String> {
		self["name"].as_text()
	}

	/// Selling price.
	pub fn sale_price(&self) -> Option<f64> {
		self["salePrice"].as_f64()
	}

	/// Universal product code.
	pub fn upc(&self) -> Option<&str> {
		self["upc"].as_str()
	}

	/// Breadcrumb path.
	pub fn category_path(&self) -> Option<&str> {
		self["categoryPath"].as_str()
	}

	/// Reporting hierarchy ids.
	pub fn category_node(&self) -> Option<&str> {
		self["categoryNode"].as_str()
	}

	/// Brand.
	pub fn brand_name(&self) -> Option<&str> {
		self["brandName"].as_str()
	}

	/// Product page URL reviews must link back to.
	pub fn product_tracking_url(&self) -> Option<&str> {
		self["productTrackingUrl"].as_str()
	}

	/// Whether the item can be bought online.
	pub fn available_online(&self) -> Option<bool> {
		self["availableOnline"].as_bool()
	}

	/// Reviews on this page.
	pub fn reviews(&self) -> Vec<Review> {
		objects(&self["reviews"])
	}

	/// Aggregated review statistics.
	pub fn review_statistics(&self) -> Option<ReviewStatistics> {
		self["reviewStatistics"].as_object().cloned().map(ReviewStatistics)
	}

	/// Link to the next page; pass it back as the `nextPage` parameter.
	pub fn next_page(&self) -> Option<&str> {
		self["nextPage"].as_str().filter(|page| !page.is_empty())
	}
}

def_view! {
	/// Single customer review.
	Review
}
impl Review {
	/// Item name.
	pub fn name(&self) -> Option<String> {
		self["name"].as_text()
	}

	/// Reviewer's rating.
	pub fn overall_rating(&self) -> Option<OverallRating> {
		self["overallRating"].as_object().cloned().map(OverallRating)
	}

	/// Reviewer's display name.
	pub fn reviewer(&self) -> Option<&str> {
		self["reviewer"].as_str()
	}

	/// Review body with HTML entities decoded.
	pub fn review_text(&self) -> Option<String> {
		self["reviewText"].as_text()
	}

	/// Submission time as sent by the server.
	pub fn submission_time(&self) -> Option<&str> {
		self["submissionTime"].as_str()
	}

	/// Review title with HTML entities decoded.
	pub fn title(&self) -> Option<String> {
		self["title"].as_text()
	}

	/// Helpful votes.
	pub fn up_votes(&self) -> Option<i64> {
		self["upVotes"].as_i64()
	}

	/// Unhelpful votes.
	pub fn down_votes(&self) -> Option<i64> {
		self["downVotes"].as_i64()
	}
}

def_view! {
	/// Rating attached to one review.
	OverallRating
}
impl OverallRating {
	/// Rating label.
	pub fn label(&self) -> Option<&str> {
		self["label"].as_str()
	}

	/// Numeric rating.
	pub fn rating(&self) -> Option<f64> {
		self["rating"].as_f64()
	}
}

def_view! {
	/// Review count for one star value.
	RatingDistribution
}
impl RatingDistribution {
	/// Star value.
	pub fn rating_value(&self) -> Option<i64> {
		self["ratingValue"].as_i64()
	}

	/// Number of reviews with this value.
	pub fn count(&self) -> Option<i64> {
		self["count"].as_i64()
	}
}

def_view! {
	/// Aggregated review statistics for one item.
	ReviewStatistics
}
impl ReviewStatistics {
	/// Mean rating.
	pub fn average_overall_rating(&self) -> Option<f64> {
		self["averageOverallRating"].as_f64()
	}

	/// Upper bound of the rating scale.
	pub fn overall_rating_range(&self) -> Option<i64> {
		self["overallRatingRange"].as_i64()
	}

	/// Per-star breakdown.
	pub fn rating_distributions(&self) -> Vec<RatingDistribution> {
		objects(&self["ratingDistributions"])
	}

	/// Total number of reviews.
	pub fn total_review_count(&self) -> Option<i64> {
		self["totalReviewCount"].as_i64()
	}
}

def_view! {
	/// Store returned by the store locator.
	Store
}
impl Store {
	/// Store number.
	pub fn no(&self) -> Option<i64> {
		self["no"].as_i64()
	}

	/// Store name.
	pub fn name(&self) -> Option<&str> {
		self["name"].as_str()
	}

	/// Country code.
	pub fn country(&self) -> Option<&str> {
		self["country"].as_str()
	}

	/// `[longitude, latitude]` pair.
	pub fn coordinates(&self) -> Vec<f64> {
		self["coordinates"].as_array().unwrap_or_default().iter().filter_map(Node::as_f64).collect()
	}

	/// Street address.
	pub fn street_address(&self) -> Option<&str> {
		self["streetAddress"].as_str()
	}

	/// City.
	pub fn city(&self) -> Option<&str> {
		self["city"].as_str()
	}

	/// State or province code.
	pub fn state_prov_code(&self) -> Option<&str> {
		self["stateProvCode"].as_str()
	}

	/// Postal code.
	pub fn zip(&self) -> Option<&str> {
		self["zip"].as_str()
	}

	/// Phone number.
	pub fn phone_number(&self) -> Option<&str> {
		self["phoneNumber"].as_str()
	}
}

def_view! {
	/// Category tree node; the top-level response lists root nodes under `categories`.
	Taxonomy
}
impl Taxonomy {
	/// Category id, usable as the `categoryId`/`category` parameter.
	pub fn id(&self) -> Option<&str> {
		self["id"].as_str()
	}

	/// Category name.
	pub fn name(&self) -> Option<&str> {
		self["name"].as_str()
	}

	/// Category path.
	pub fn path(&self) -> Option<&str> {
		self["path"].as_str()
	}

	/// Root categories of a taxonomy response.
	pub fn categories(&self) -> Vec<Taxonomy> {
		objects(&self["categories"])
	}

	/// Child categories.
	pub fn children(&self) -> Vec<Taxonomy> {
		objects(&self["children"])
	}
}

/// Collects the object elements of an array node into views; other elements are skipped.
pub fn objects<V>(node: &Node) -> Vec<V>
where
	V: From<WalmartResponse>,
{
	node.as_array()
		.unwrap_or_default()
		.iter()
		.filter_map(Node::as_object)
		.cloned()
		.map(V::from)
		.collect()
}
