//! API resources. Each resource is a set of free functions returning ready to execute
//! [`CallSpec`](crate::spec::CallSpec)s.

pub mod user_profiles;

use crate::domain::HttpError;
use crate::spec::extract::body;
use crate::spec::CallSpecBuilder;

/// Start a GET spec which decodes error responses as [`HttpError`].
pub(crate) fn new_get_spec<T>(path: &str) -> CallSpecBuilder<T, HttpError> {
    CallSpecBuilder::get(path).error_as(body())
}
