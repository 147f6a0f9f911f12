//! Credential bundle issued by the Walmart developer portal.

// self
use crate::{
	_prelude::*,
	auth::{ConsumerId, KeyVersion, PrivateKey},
};

/// Consumer id, key version, and private key; immutable once the client is built.
#[derive(Clone, Debug)]
pub struct Credentials {
	/// Consumer id assigned to the application.
	pub consumer_id: ConsumerId,
	/// Version of the public key registered with Walmart.
	pub key_version: KeyVersion,
	/// Private key matching the registered public key.
	pub private_key: PrivateKey,
}
impl Credentials {
	/// Bundles already-loaded credential parts.
	pub fn new(consumer_id: ConsumerId, key_version: KeyVersion, private_key: PrivateKey) -> Self {
		Self { consumer_id, key_version, private_key }
	}

	/// Validates the identifiers and reads the key file once.
	pub fn from_key_file(
		consumer_id: impl AsRef<str>,
		key_version: impl AsRef<str>,
		private_key_path: impl AsRef<Path>,
	) -> Result<Self> {
		let consumer_id = ConsumerId::new(consumer_id)?;
		let key_version = KeyVersion::new(key_version)?;
		let private_key = PrivateKey::from_file(private_key_path)?;

		Ok(Self { consumer_id, key_version, private_key })
	}
}
