//! RSA private key loading with redacted formatting.

// crates.io
use base64::{Engine as _, engine::general_purpose::STANDARD};
use rsa::{RsaPrivateKey, pkcs1::DecodeRsaPrivateKey, pkcs8::DecodePrivateKey};
// self
use crate::{_prelude::*, error::KeyLoadError};

const MEMORY_SOURCE: &str = "<memory>";

/// RSA private key used to sign every request, held for the client's lifetime.
///
/// Accepted encodings: PKCS#8 PEM, PKCS#1 PEM, PKCS#8/PKCS#1 DER, and the bare base64 body of a
/// DER key as printed by Walmart's key tutorial.
#[derive(Clone)]
pub struct PrivateKey(RsaPrivateKey);
impl PrivateKey {
	/// Reads and parses the key stored at `path`.
	pub fn from_file(path: impl AsRef<Path>) -> Result<Self, KeyLoadError> {
		let path = path.as_ref();
		let bytes = std::fs::read(path)
			.map_err(|source| KeyLoadError::Io { path: path.to_path_buf(), source })?;

		Self::parse(&bytes, &path.display().to_string())
	}

	/// Parses a PEM document (PKCS#8 or PKCS#1).
	pub fn from_pem(pem: &str) -> Result<Self, KeyLoadError> {
		parse_pem(pem).map(Self).map_err(|reason| parse_error(MEMORY_SOURCE, reason))
	}

	/// Parses DER bytes (PKCS#8 or PKCS#1).
	pub fn from_der(der: &[u8]) -> Result<Self, KeyLoadError> {
		parse_der(der).map(Self).map_err(|reason| parse_error(MEMORY_SOURCE, reason))
	}

	/// Parses raw key material in any accepted encoding.
	pub fn from_bytes(bytes: &[u8]) -> Result<Self, KeyLoadError> {
		Self::parse(bytes, MEMORY_SOURCE)
	}

	pub(crate) fn into_inner(self) -> RsaPrivateKey {
		self.0
	}

	fn parse(bytes: &[u8], source_name: &str) -> Result<Self, KeyLoadError> {
		let parsed = match std::str::from_utf8(bytes) {
			Ok(text) if text.contains("-----BEGIN") => parse_pem(text),
			Ok(text) => {
				let compact = text.split_whitespace().collect::<String>();

				match STANDARD.decode(compact.as_bytes()) {
					Ok(der) => parse_der(&der),
					Err(_) => parse_der(bytes),
				}
			},
			Err(_) => parse_der(bytes),
		};

		parsed.map(Self).map_err(|reason| parse_error(source_name, reason))
	}
}
impl Debug for PrivateKey {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("PrivateKey").field(&"<redacted>").finish()
	}
}

fn parse_pem(pem: &str) -> Result<RsaPrivateKey, String> {
	match RsaPrivateKey::from_pkcs8_pem(pem) {
		Ok(key) => Ok(key),
		Err(pkcs8_err) =>
			RsaPrivateKey::from_pkcs1_pem(pem).map_err(|pkcs1_err| {
				format!("PKCS#8 parse failed ({pkcs8_err}); PKCS#1 parse failed ({pkcs1_err})")
			}),
	}
}

fn parse_der(der: &[u8]) -> Result<RsaPrivateKey, String> {
	match RsaPrivateKey::from_pkcs8_der(der) {
		Ok(key) => Ok(key),
		Err(pkcs8_err) =>
			RsaPrivateKey::from_pkcs1_der(der).map_err(|pkcs1_err| {
				format!("PKCS#8 parse failed ({pkcs8_err}); PKCS#1 parse failed ({pkcs1_err})")
			}),
	}
}

fn parse_error(source_name: &str, reason: String) -> KeyLoadError {
	KeyLoadError::Parse { source_name: source_name.to_owned(), reason }
}
