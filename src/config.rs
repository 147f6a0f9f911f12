//! Client-wide configuration shared by the blocking and async clients.

// self
use crate::{_prelude::*, auth::PublisherId, error::ConfigError};

/// Fixed origin of Walmart's affiliate API proxy.
pub const DEFAULT_BASE_URL: &str = "https://developer.api.walmart.com/api-proxy/service";

/// Request defaults applied to every call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
	/// API origin plus service prefix; endpoint paths are appended to it.
	pub base_url: Url,
	/// Publisher id injected into every query unless the caller passes one.
	pub publisher_id: Option<PublisherId>,
	/// Default for the `richAttributes` parameter.
	pub rich_attributes: bool,
}
impl ClientConfig {
	/// Overrides the API origin, e.g. to point at a mock server.
	pub fn with_base_url(mut self, base_url: impl AsRef<str>) -> Result<Self, ConfigError> {
		self.base_url = parse_base_url(base_url.as_ref())?;

		Ok(self)
	}

	/// Sets the publisher id injected into every query.
	pub fn with_publisher_id(mut self, publisher_id: PublisherId) -> Self {
		self.publisher_id = Some(publisher_id);

		self
	}

	/// Overrides the default `richAttributes` value.
	pub fn with_rich_attributes(mut self, enabled: bool) -> Self {
		self.rich_attributes = enabled;

		self
	}

	/// Joins an endpoint path (starting with `/`) onto the base URL.
	pub fn endpoint_url(&self, path: &str) -> Result<Url, ConfigError> {
		let joined = format!("{}{path}", self.base_url.as_str().trim_end_matches('/'));

		Url::parse(&joined).map_err(|source| ConfigError::InvalidUrl { url: joined, source })
	}

	/// Path prefix of the base URL, without a trailing slash.
	pub fn base_path(&self) -> &str {
		self.base_url.path().trim_end_matches('/')
	}
}
impl Default for ClientConfig {
	fn default() -> Self {
		Self {
			base_url: Url::parse(DEFAULT_BASE_URL).expect("Default base URL must parse."),
			publisher_id: None,
			rich_attributes: true,
		}
	}
}

fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
	let url = Url::parse(raw)
		.map_err(|source| ConfigError::InvalidUrl { url: raw.to_owned(), source })?;

	if url.cannot_be_a_base() || url.query().is_some() {
		return Err(ConfigError::CannotBeABase { url: raw.to_owned() });
	}

	Ok(url)
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn default_points_at_affiliate_proxy() {
		let config = ClientConfig::default();

		assert_eq!(config.base_path(), "/api-proxy/service");
		assert!(config.rich_attributes);
		assert_eq!(
			config.endpoint_url("/affil/product/v2/items").expect("Endpoint URL should join.").as_str(),
			"https://developer.api.walmart.com/api-proxy/service/affil/product/v2/items",
		);
	}

	#[test]
	fn base_url_override_tolerates_trailing_slash() {
		let config = ClientConfig::default()
			.with_base_url("http://127.0.0.1:8080/proxy/")
			.expect("Override should parse.");

		assert_eq!(config.base_path(), "/proxy");
		assert_eq!(
			config.endpoint_url("/affil/product/v2/trends").expect("Endpoint URL should join.").as_str(),
			"http://127.0.0.1:8080/proxy/affil/product/v2/trends",
		);
	}

	#[test]
	fn invalid_base_urls_are_rejected() {
		assert!(matches!(
			ClientConfig::default().with_base_url("not a url"),
			Err(ConfigError::InvalidUrl { .. })
		));
		assert!(matches!(
			ClientConfig::default().with_base_url("mailto:someone@example.com"),
			Err(ConfigError::CannotBeABase { .. })
		));
		assert!(matches!(
			ClientConfig::default().with_base_url("https://example.com/api?x=1"),
			Err(ConfigError::CannotBeABase { .. })
		));
	}
}
