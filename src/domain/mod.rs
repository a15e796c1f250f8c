//! Domain Types.

mod error;
mod user;

pub use error::*;
pub use user::*;

pub type SecretString = secrecy::SecretString;
pub use secrecy::ExposeSecret;
