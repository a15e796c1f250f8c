//! Typed call specifications.
//!
//! A [`CallSpecBuilder`] collects the http method, a path template, path and query parameters
//! and the extractors used to decode the response. [`CallSpecBuilder::build`] validates all of
//! it before any network activity and freezes the result into a [`CallSpec`], which can be
//! executed any number of times against a [`ClientSync`](crate::http::ClientSync) or
//! [`ClientAsync`](crate::http::ClientAsync) engine.

mod builder;
mod call;
mod error;
pub mod extract;
pub mod params;
pub mod path;

pub use builder::*;
pub use call::*;
pub use error::*;
pub use params::ParamValue;
