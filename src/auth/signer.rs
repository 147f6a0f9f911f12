//! Request signature generation.
//!
//! Walmart's API proxy authenticates every call with an RSA PKCS#1 v1.5 signature over
//! `"{consumer_id}\n{timestamp}\n{key_version}\n"` (SHA-256 digest), base64 encoded. The
//! proxy rejects signatures older than 180 seconds, so a fresh [`Timestamp`] is taken per call.

// crates.io
use base64::{Engine as _, engine::general_purpose::STANDARD};
use rsa::{
	pkcs1v15::SigningKey,
	signature::{SignatureEncoding, Signer as _},
};
use sha2::Sha256;
use time::OffsetDateTime;
// self
use crate::{
	_prelude::*,
	auth::{ConsumerId, Credentials, KeyVersion},
	error::SigningError,
};

/// Milliseconds since the Unix epoch, as sent in the `timestamp` parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(i64);
impl Timestamp {
	/// Captures the current wall-clock time.
	pub fn now() -> Self {
		let millis = OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000;

		Self(i64::try_from(millis).unwrap_or(i64::MAX))
	}

	/// Wraps a caller-provided millisecond value.
	pub const fn from_millis(millis: i64) -> Self {
		Self(millis)
	}

	/// Returns the millisecond value.
	pub const fn as_millis(self) -> i64 {
		self.0
	}
}
impl Display for Timestamp {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		Display::fmt(&self.0, f)
	}
}

/// Base64-encoded request signature.
#[derive(Clone, PartialEq, Eq)]
pub struct Signature(String);
impl Signature {
	/// Returns the encoded value. Callers must avoid logging this string.
	pub fn expose(&self) -> &str {
		&self.0
	}
}
impl Debug for Signature {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("Signature").field(&"<redacted>").finish()
	}
}

/// Signs canonical strings on behalf of one set of credentials.
#[derive(Clone)]
pub struct Signer {
	consumer_id: ConsumerId,
	key_version: KeyVersion,
	key: SigningKey<Sha256>,
}
impl Signer {
	/// Builds a signer from loaded credentials.
	pub fn new(credentials: &Credentials) -> Self {
		Self {
			consumer_id: credentials.consumer_id.clone(),
			key_version: credentials.key_version.clone(),
			key: SigningKey::<Sha256>::new(credentials.private_key.clone().into_inner()),
		}
	}

	/// Consumer id the signer signs for.
	pub fn consumer_id(&self) -> &ConsumerId {
		&self.consumer_id
	}

	/// Key version the signer signs for.
	pub fn key_version(&self) -> &KeyVersion {
		&self.key_version
	}

	/// Canonical string covered by the signature.
	pub fn canonical_string(&self, timestamp: Timestamp) -> String {
		format!("{}\n{timestamp}\n{}\n", self.consumer_id, self.key_version)
	}

	/// Signs the canonical string for `timestamp`.
	///
	/// Deterministic: identical credentials and timestamp always produce the same signature.
	pub fn sign(&self, timestamp: Timestamp) -> Result<Signature, SigningError> {
		let canonical = self.canonical_string(timestamp);
		let signature = self.key.try_sign(canonical.as_bytes()).map_err(SigningError::new)?;

		Ok(Signature(STANDARD.encode(signature.to_bytes())))
	}
}
impl Debug for Signer {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Signer")
			.field("consumer_id", &self.consumer_id)
			.field("key_version", &self.key_version)
			.finish_non_exhaustive()
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::auth::PrivateKey;

	const CONSUMER_ID: &str = "d8b9f4c2-7a1e-4f3b-9c6d-2e5a8b1f0c37";
	// `printf '<consumer>\n1700000000000\n1\n' | openssl dgst -sha256 -sign test_key.pem | base64`
	const GOLDEN_SIGNATURE: &str = "jm6XJVrC3iSD04r+U1OhbDT/ot10jZmeVr/D5rctgcB/BgSaCebkm7tUTR1/yWKZPiKcGorlakDxNWLQISC+zUAom+n/IceGHos0WyzwUdwAfUlz8YpJgBLMoJWnsw7NYlRS67FNOBDHPy5ZeMP0DV6XDkWEdxoMqqgtEla+enjEXxfzKHkTRWkstErKgboMovvTcTFQBb9a+CLFJaf2zs7yDQkAskgBsxfuuf332Eyew2gz8pXAN1ZTIFjb/1oM3Ih5HdDzpdkzQYLPX6hO/oHQfbChnunXpaQ1e6Kn4qk2zh8lXJZnf+0LrK2w74SDqx9XhFrnNEY/eOWdJjvDPg==";

	fn signer(fixture: &str) -> Signer {
		let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(fixture);
		let credentials = Credentials::new(
			ConsumerId::new(CONSUMER_ID).expect("Consumer fixture should be valid."),
			KeyVersion::default(),
			PrivateKey::from_file(path).expect("Key fixture should load."),
		);

		Signer::new(&credentials)
	}

	#[test]
	fn canonical_string_matches_vendor_layout() {
		let signer = signer("test_key.pem");

		assert_eq!(
			signer.canonical_string(Timestamp::from_millis(1_700_000_000_000)),
			format!("{CONSUMER_ID}\n1700000000000\n1\n"),
		);
	}

	#[test]
	fn signature_matches_openssl_vector() {
		let timestamp = Timestamp::from_millis(1_700_000_000_000);

		for fixture in ["test_key.pem", "test_key_rsa.pem", "test_key.b64"] {
			let signature = signer(fixture).sign(timestamp).expect("Signing should succeed.");

			assert_eq!(signature.expose(), GOLDEN_SIGNATURE, "Fixture {fixture} diverged.");
		}
	}

	#[test]
	fn signing_is_deterministic() {
		let signer = signer("test_key.pem");
		let timestamp = Timestamp::from_millis(1_712_345_678_901);
		let first = signer.sign(timestamp).expect("First signature should succeed.");
		let second = signer.sign(timestamp).expect("Second signature should succeed.");

		assert_eq!(first, second);
		assert_ne!(
			first,
			signer.sign(Timestamp::from_millis(1_712_345_678_902)).expect("Signing should succeed."),
		);
	}

	#[test]
	fn timestamp_is_in_milliseconds() {
		let now = Timestamp::now();

		// 2020-01-01T00:00:00Z in milliseconds.
		assert!(now.as_millis() > 1_577_836_800_000);
		assert_eq!(Timestamp::from_millis(42).to_string(), "42");
	}

	#[test]
	fn signature_debug_is_redacted() {
		let signature = signer("test_key.pem")
			.sign(Timestamp::from_millis(1))
			.expect("Signing should succeed.");

		assert_eq!(format!("{signature:?}"), "Signature(\"<redacted>\")");
	}
}
