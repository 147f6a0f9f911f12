//! Credentials, private key loading, and request signing.

pub mod credentials;
pub mod id;
pub mod key;
pub mod signer;

pub use credentials::*;
pub use id::*;
pub use key::*;
pub use signer::*;
