//! Strongly typed identifiers carried by every signed request.

// std
use std::{borrow::Borrow, ops::Deref};
// self
use crate::_prelude::*;

macro_rules! def_id {
	($name:ident, $doc:literal, $kind:literal) => {
		#[doc = $doc]
		#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
		#[serde(try_from = "String", into = "String")]
		pub struct $name(String);
		impl $name {
			/// Creates a new identifier after validation.
			pub fn new(value: impl AsRef<str>) -> Result<Self, IdentifierError> {
				let view = value.as_ref();

				validate_view($kind, view)?;

				Ok(Self(view.to_owned()))
			}
		}
		impl Deref for $name {
			type Target = str;

			fn deref(&self) -> &Self::Target {
				&self.0
			}
		}
		impl AsRef<str> for $name {
			fn as_ref(&self) -> &str {
				&self.0
			}
		}
		impl From<$name> for String {
			fn from(value: $name) -> Self {
				value.0
			}
		}
		impl TryFrom<String> for $name {
			type Error = IdentifierError;

			fn try_from(value: String) -> Result<Self, Self::Error> {
				validate_view($kind, &value)?;

				Ok(Self(value))
			}
		}
		impl TryFrom<&str> for $name {
			type Error = IdentifierError;

			fn try_from(value: &str) -> Result<Self, Self::Error> {
				Self::new(value)
			}
		}
		impl Borrow<str> for $name {
			fn borrow(&self) -> &str {
				&self.0
			}
		}
		impl Debug for $name {
			fn fmt(&self, f: &mut Formatter) -> FmtResult {
				write!(f, concat!($kind, "({})"), self.0)
			}
		}
		impl Display for $name {
			fn fmt(&self, f: &mut Formatter) -> FmtResult {
				f.write_str(&self.0)
			}
		}
		impl FromStr for $name {
			type Err = IdentifierError;

			fn from_str(s: &str) -> Result<Self, Self::Err> {
				Self::new(s)
			}
		}
	};
}

const IDENTIFIER_MAX_LEN: usize = 128;

/// Error returned when identifier validation fails.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, ThisError)]
pub enum IdentifierError {
	/// The identifier was empty.
	#[error("{kind} identifier cannot be empty.")]
	Empty {
		/// Kind of identifier (consumer, key version, publisher).
		kind: &'static str,
	},
	/// The identifier contains whitespace characters.
	#[error("{kind} identifier contains whitespace.")]
	ContainsWhitespace {
		/// Kind of identifier (consumer, key version, publisher).
		kind: &'static str,
	},
	/// The identifier exceeded the allowed character count.
	#[error("{kind} identifier exceeds {max} characters.")]
	TooLong {
		/// Kind of identifier (consumer, key version, publisher).
		kind: &'static str,
		/// Maximum permitted character count.
		max: usize,
	},
}
impl From<IdentifierError> for Error {
	fn from(e: IdentifierError) -> Self {
		Error::invalid_parameter(e.to_string().trim_end_matches('.'))
	}
}

def_id! { ConsumerId, "Consumer id (UUID) Walmart issues to the client application.", "Consumer" }
def_id! { KeyVersion, "Version of the uploaded public key the signature is checked against.", "KeyVersion" }
def_id! { PublisherId, "Impact Radius publisher id injected into affiliate links.", "Publisher" }

impl ConsumerId {
	/// Returns the last six characters, safe to print in logs.
	pub fn tail(&self) -> &str {
		let start = self.0.char_indices().rev().nth(5).map(|(idx, _)| idx).unwrap_or(0);

		&self.0[start..]
	}
}

impl Default for KeyVersion {
	fn default() -> Self {
		Self("1".into())
	}
}

fn validate_view(kind: &'static str, view: &str) -> Result<(), IdentifierError> {
	if view.is_empty() {
		return Err(IdentifierError::Empty { kind });
	}
	if view.chars().any(char::is_whitespace) {
		return Err(IdentifierError::ContainsWhitespace { kind });
	}
	if view.len() > IDENTIFIER_MAX_LEN {
		return Err(IdentifierError::TooLong { kind, max: IDENTIFIER_MAX_LEN });
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	// std
	use std::collections::HashMap;
	// self
	use super::*;

	#[test]
	fn identifiers_reject_whitespace_and_empty_values() {
		assert!(ConsumerId::new(" 0e6b3a4c").is_err(), "Leading whitespace must be rejected.");
		assert!(ConsumerId::new("0e6b3a4c ").is_err(), "Trailing whitespace must be rejected.");

		let consumer = ConsumerId::new("d8b9f4c2-7a1e-4f3b-9c6d-2e5a8b1f0c37")
			.expect("Consumer fixture should be considered valid.");

		assert_eq!(consumer.as_ref(), "d8b9f4c2-7a1e-4f3b-9c6d-2e5a8b1f0c37");
		assert!(KeyVersion::new("").is_err());
		assert!(PublisherId::new("with space").is_err());
	}

	#[test]
	fn serde_round_trip_enforces_validation() {
		let payload = "\"2\"";
		let version: KeyVersion =
			serde_json::from_str(payload).expect("Key version should deserialize successfully.");

		assert_eq!(version.as_ref(), "2");
		assert!(serde_json::from_str::<KeyVersion>("\"with space\"").is_err());
		assert!(serde_json::from_str::<ConsumerId>("\"\"").is_err());
	}

	#[test]
	fn length_limit_is_enforced() {
		let exact = "a".repeat(IDENTIFIER_MAX_LEN);

		ConsumerId::new(&exact).expect("Exact length should succeed.");

		let too_long = "a".repeat(IDENTIFIER_MAX_LEN + 1);

		assert!(ConsumerId::new(&too_long).is_err());
	}

	#[test]
	fn tail_keeps_last_six_characters() {
		let consumer = ConsumerId::new("d8b9f4c2-7a1e-4f3b-9c6d-2e5a8b1f0c37")
			.expect("Consumer fixture should be considered valid.");

		assert_eq!(consumer.tail(), "1f0c37");
		assert_eq!(ConsumerId::new("abc").expect("Short consumer id should be valid.").tail(), "abc");
	}

	#[test]
	fn key_version_defaults_to_one() {
		assert_eq!(KeyVersion::default().as_ref(), "1");
	}

	#[test]
	fn borrow_supports_fast_lookup() {
		let map: HashMap<PublisherId, u8> = HashMap::from_iter([(
			PublisherId::new("pub-123").expect("Publisher used for lookup should be valid."),
			7_u8,
		)]);

		assert_eq!(map.get("pub-123"), Some(&7));
	}
}
