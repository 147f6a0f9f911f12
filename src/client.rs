//! Endpoint clients.
//!
//! [`BlockingClient`] and [`AsyncClient`] expose the same endpoint methods and differ only in the
//! transport seam they drive. Both delegate request signing, status checks, and response wrapping
//! to one shared [`Core`], so the two modes cannot drift apart.

pub mod blocking;
pub mod nonblocking;

pub use blocking::*;
pub use nonblocking::*;

// self
use crate::{
	_prelude::*,
	auth::{Credentials, PublisherId},
	config::ClientConfig,
	endpoint::Call,
	http::{HttpRequest, HttpResponse},
	obs,
	request::RequestBuilder,
	response::{self, Node},
};

/// Transport-independent half of a client.
#[derive(Clone, Debug)]
pub struct Core {
	builder: Arc<RequestBuilder>,
}
impl Core {
	/// Creates a core for one credential set.
	pub fn new(credentials: &Credentials, config: ClientConfig) -> Self {
		Self { builder: Arc::new(RequestBuilder::new(credentials, config)) }
	}

	/// Client defaults.
	pub fn config(&self) -> &ClientConfig {
		self.builder.config()
	}

	/// Request builder shared by clones of this core.
	pub fn builder(&self) -> &RequestBuilder {
		&self.builder
	}

	/// Sets the default publisher id.
	pub fn set_publisher_id(&mut self, publisher_id: PublisherId) {
		Arc::make_mut(&mut self.builder).config_mut().publisher_id = Some(publisher_id);
	}

	/// Points the core at another API origin.
	pub fn set_base_url(&mut self, base_url: &str) -> Result<()> {
		let config = self.config().clone().with_base_url(base_url)?;

		*Arc::make_mut(&mut self.builder).config_mut() = config;

		Ok(())
	}

	/// Signs `call` and resolves it into a transport request.
	pub fn prepare(&self, call: &Call) -> Result<HttpRequest> {
		let signed = self.builder.build(call)?;

		obs::request_started(call.endpoint, signed.method, &signed.path);

		signed.into_http(self.config())
	}

	/// Checks the status and wraps the decoded body.
	///
	/// Any non-2xx status becomes [`Error::Http`]; the body is never decoded in that case.
	pub fn finish(&self, call: &Call, response: HttpResponse) -> Result<Node> {
		obs::response_received(call.endpoint, response.status);

		if !response.is_success() {
			return Err(Error::http(response.status, response.body_text()));
		}

		response::decode(response.status, &response.body).map(response::wrap)
	}
}

fn skip_chunk(call: &Call, chunk: usize, error: &Error) {
	let ids = call.params.get("ids").map(ToString::to_string).unwrap_or_default();

	obs::chunk_skipped(chunk, &ids, error);
}
