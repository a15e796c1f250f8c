// Enable clippy if our Cargo.toml file asked us to do so.
#![cfg_attr(feature = "clippy", feature(plugin))]
#![cfg_attr(feature = "clippy", plugin(clippy))]
// Enable as many useful Rust and Clippy warnings as we can stand.
#![warn(
    trivial_numeric_casts,
    unused_extern_crates,
    unused_import_braces,
    trivial_casts,
    unused_qualifications
)]
#![cfg_attr(feature = "clippy", warn(cast_possible_truncation))]
#![cfg_attr(feature = "clippy", warn(cast_possible_wrap))]
#![cfg_attr(feature = "clippy", warn(cast_precision_loss))]
#![cfg_attr(feature = "clippy", warn(cast_sign_loss))]
#![cfg_attr(feature = "clippy", warn(missing_docs_in_private_items))]
#![cfg_attr(feature = "clippy", warn(mut_mut))]
// Disallow `println!`. Use `debug!` for debug output
// (which is provided by the `log` crate).
#![cfg_attr(feature = "clippy", warn(print_stdout))]
#![cfg_attr(all(not(test), feature = "clippy"), warn(result_unwrap_used))]
#![cfg_attr(feature = "clippy", warn(unseparated_literal_suffix))]
#![cfg_attr(feature = "clippy", warn(wrong_pub_self_convention))]

//! Unofficial Rust bindings for the [XING](https://dev.xing.com/docs) REST API.
//!
//! Every endpoint is described by a [`spec::CallSpec`]: an immutable value holding the http
//! method, the resolved path and query, and the extractors which turn the json response into a
//! typed value or a typed error. Building a spec never touches the network; executing it does,
//! every time it is executed.
//!
//! # Getting Started
//!
//! Fetch the profile of the authorizing user synchronously:
//! ```
//! use xing_api_rs::{http, resources::user_profiles, XingApi};
//!
//! fn example<T: http::ClientSync + TryFrom<http::ClientBuilder, Error = anyhow::Error>>() {
//!     let client = http::ClientBuilder::new()
//!         .user_agent("MyUserAgent/0.0.0")
//!         .build::<T>()
//!         .unwrap();
//!     let api = XingApi::new(client);
//!
//!     let spec = user_profiles::get_own_profile().unwrap();
//!     let me = api.execute(&spec).unwrap();
//!     println!("{:?}", me.display_name);
//! }
//! ```
//!
//! The same spec can be executed asynchronously:
//! ```
//! use xing_api_rs::{http, resources::user_profiles, XingApi};
//!
//! async fn example<T: http::ClientAsync>(api: &XingApi<T>) {
//!     let spec = user_profiles::find_users_by_email(&["ann@example.com"]).unwrap();
//!     for user in api.execute_async(&spec).await.unwrap() {
//!         println!("{:?}", user.map(|u| u.id));
//!     }
//! }
//! ```
//!
//! Describing a new endpoint:
//! ```
//! use xing_api_rs::domain::{HttpError, XingUser};
//! use xing_api_rs::spec::extract::{body, list, single};
//! use xing_api_rs::spec::{CallSpec, CallSpecBuilder};
//!
//! let spec: CallSpec<Vec<Option<XingUser>>, HttpError> =
//!     CallSpecBuilder::get("/v1/users/{user_id}/contacts")
//!         .path_param("user_id", "me")
//!         .query_param("limit", 10u32)
//!         .response_as(list(single(&[]), &["contacts", "users"]))
//!         .error_as(body())
//!         .build()
//!         .unwrap();
//!
//! assert_eq!(spec.url(), "/v1/users/me/contacts?limit=10");
//! ```

mod api;
pub mod domain;
pub mod http;
pub mod resources;
pub mod spec;

pub use api::*;

// Re-export log.
pub use log;
