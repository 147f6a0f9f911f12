//! Walmart affiliate API client with RSA-signed requests over blocking or async transports.
//!
//! Responses are kept schema-agnostic: every payload is wrapped into a tree that mirrors the JSON
//! exactly, with thin typed views on top.
//!
//! # Layout
//!
//! - [`auth`] loads the private key and produces the per-request signature.
//! - [`request`] merges caller parameters with the signing parameters into a [`SignedRequest`].
//! - [`config`] holds the API origin, default query parameters, and the injected publisher id.
//! - [`endpoint`] describes each vendor endpoint and validates its parameters into [`Call`]s.
//! - [`http`] defines the [`BlockingTransport`] and [`AsyncTransport`] seams plus the reqwest
//!   implementations.
//! - [`response`] wraps arbitrary JSON into [`WalmartResponse`] trees and typed views.
//! - [`client`] exposes one method per vendor endpoint on [`BlockingClient`] and [`AsyncClient`].
//! - [`obs`] emits tracing spans and metrics counters when the matching features are enabled.
//!
//! [`Call`]: endpoint::Call
//! [`SignedRequest`]: request::SignedRequest
//! [`BlockingTransport`]: http::BlockingTransport
//! [`AsyncTransport`]: http::AsyncTransport
//! [`WalmartResponse`]: response::WalmartResponse
//! [`BlockingClient`]: client::BlockingClient
//! [`AsyncClient`]: client::AsyncClient

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod client;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod http;
pub mod obs;
pub mod request;
pub mod response;

mod _prelude {
	pub use std::{
		collections::BTreeMap,
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		path::{Path, PathBuf},
		pin::Pin,
		str::FromStr,
		sync::Arc,
	};

	pub use serde::{Deserialize, Serialize};
	pub use serde_json::Value;
	pub use thiserror::Error as ThisError;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

#[cfg(feature = "reqwest")] pub use reqwest;
pub use url;
#[cfg(test)] use {color_eyre as _, httpmock as _, tokio as _};
