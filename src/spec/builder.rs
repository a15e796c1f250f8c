use super::call::{render_url, CallSpec};
use super::error::{BuildError, ParamKind};
use super::extract::Extractor;
use super::params::{ParamValue, Params};
use super::path;
use crate::http::Method;
use serde::Serialize;
use std::sync::Arc;

/// Fluent accumulator for a [`CallSpec`].
///
/// Configuration methods never fail. The first problem encountered is remembered and reported
/// by [`build`](Self::build), which consumes the builder.
///
/// ```
/// use xing_api_rs::domain::{HttpError, XingUser};
/// use xing_api_rs::spec::extract::{body, first};
/// use xing_api_rs::spec::CallSpecBuilder;
///
/// let spec = CallSpecBuilder::<XingUser, HttpError>::get("/v1/users/{id}")
///     .path_param("id", "me")
///     .query_param("fields", ["id", "display_name"])
///     .response_as(first(&["users"]))
///     .error_as(body())
///     .build()
///     .unwrap();
///
/// assert_eq!(spec.url(), "/v1/users/me?fields=id,display_name");
/// ```
pub struct CallSpecBuilder<T, E> {
    method: Option<Method>,
    path: Option<String>,
    path_params: Params,
    query_params: Params,
    headers: Vec<(String, String)>,
    body: Option<Vec<u8>>,
    response: Option<Arc<dyn Extractor<Output = T>>>,
    error: Option<Arc<dyn Extractor<Output = E>>>,
    experimental: bool,
    failure: Option<BuildError>,
}

impl<T, E> Default for CallSpecBuilder<T, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, E> CallSpecBuilder<T, E> {
    pub fn new() -> Self {
        Self {
            method: None,
            path: None,
            path_params: Params::new(ParamKind::Path),
            query_params: Params::new(ParamKind::Query),
            headers: Vec::new(),
            body: None,
            response: None,
            error: None,
            experimental: false,
            failure: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new().method(Method::Get).path(path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new().method(Method::Post).path(path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new().method(Method::Put).path(path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new().method(Method::Delete).path(path)
    }

    pub fn patch(path: impl Into<String>) -> Self {
        Self::new().method(Method::Patch).path(path)
    }

    pub fn method(mut self, method: Method) -> Self {
        self.method = Some(method);
        self
    }

    /// Path template, e.g. `/v1/users/{id}`.
    pub fn path(mut self, template: impl Into<String>) -> Self {
        self.path = Some(template.into());
        self
    }

    /// Bind the `{name}` placeholder of the path. Lists are joined with `,`. Empty values, and
    /// lists holding an empty value, are rejected.
    pub fn path_param(mut self, name: &str, value: impl Into<ParamValue>) -> Self {
        let value = value.into();
        if value.is_blank() {
            self.fail(BuildError::EmptyParameter {
                kind: ParamKind::Path,
                name: name.to_string(),
            });
            return self;
        }

        if let Err(e) = self.path_params.insert(name, value) {
            self.fail(e);
        }
        self
    }

    /// Add a query parameter. Empty lists are omitted from the request.
    pub fn query_param(mut self, name: &str, value: impl Into<ParamValue>) -> Self {
        let value = value.into();
        if matches!(&value, ParamValue::List(v) if v.is_empty()) {
            return self;
        }

        if let Err(e) = self.query_params.insert(name, value) {
            self.fail(e);
        }
        self
    }

    /// Add a query parameter when `value` is `Some`.
    pub fn query_param_opt<V: Into<ParamValue>>(self, name: &str, value: Option<V>) -> Self {
        match value {
            Some(v) => self.query_param(name, v),
            None => self,
        }
    }

    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((key.into(), value.into()));
        self
    }

    /// Serialize `value` as the json request body.
    pub fn json_body(mut self, value: &impl Serialize) -> Self {
        match serde_json::to_vec(value) {
            Ok(bytes) => self.body = Some(bytes),
            Err(e) => self.fail(BuildError::Body(e)),
        }
        self
    }

    /// Extractor applied to the body of 2xx responses.
    pub fn response_as<X: Extractor<Output = T> + 'static>(mut self, extractor: X) -> Self {
        self.response = Some(Arc::new(extractor));
        self
    }

    /// Extractor applied to the body of non-2xx responses.
    pub fn error_as<X: Extractor<Output = E> + 'static>(mut self, extractor: X) -> Self {
        self.error = Some(Arc::new(extractor));
        self
    }

    /// Flag the call as unstable. This is metadata only and does not change execution.
    pub fn experimental(mut self) -> Self {
        self.experimental = true;
        self
    }

    fn fail(&mut self, error: BuildError) {
        if self.failure.is_none() {
            self.failure = Some(error);
        }
    }

    /// Validate the configuration and freeze it into a [`CallSpec`].
    pub fn build(self) -> Result<CallSpec<T, E>, BuildError> {
        if let Some(e) = self.failure {
            return Err(e);
        }

        let method = self.method.ok_or(BuildError::MissingField("method"))?;
        let template = self.path.ok_or(BuildError::MissingField("path"))?;
        let response = self
            .response
            .ok_or(BuildError::MissingField("response extractor"))?;

        let path = path::resolve(&template, &self.path_params)?;
        let url = render_url(&path, &self.query_params);

        Ok(CallSpec {
            method,
            path,
            query: self.query_params,
            url,
            headers: self.headers,
            body: self.body,
            response,
            error: self.error,
            response_type: std::any::type_name::<T>(),
            experimental: self.experimental,
        })
    }
}
