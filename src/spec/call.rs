use super::error::{BuildError, CallError, ExtractionError};
use super::extract::Extractor;
use super::params::{ParamValue, Params};
use crate::http::{
    ClientAsync, ClientSync, DefaultRequestFactory, Method, RequestData, RequestFactory, Response,
};
use std::fmt::{Debug, Formatter};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// An immutable, reusable description of one typed API call.
///
/// Every execution dispatches a fresh request; nothing is cached between executions. Cloning is
/// cheap, the extractors are shared.
pub struct CallSpec<T, E> {
    pub(super) method: Method,
    pub(super) path: String,
    pub(super) query: Params,
    pub(super) url: String,
    pub(super) headers: Vec<(String, String)>,
    pub(super) body: Option<Vec<u8>>,
    pub(super) response: Arc<dyn Extractor<Output = T>>,
    pub(super) error: Option<Arc<dyn Extractor<Output = E>>>,
    pub(super) response_type: &'static str,
    pub(super) experimental: bool,
}

impl<T, E> Clone for CallSpec<T, E> {
    fn clone(&self) -> Self {
        Self {
            method: self.method,
            path: self.path.clone(),
            query: self.query.clone(),
            url: self.url.clone(),
            headers: self.headers.clone(),
            body: self.body.clone(),
            response: Arc::clone(&self.response),
            error: self.error.clone(),
            response_type: self.response_type,
            experimental: self.experimental,
        }
    }
}

impl<T, E> Debug for CallSpec<T, E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallSpec")
            .field("method", &self.method)
            .field("url", &self.url)
            .field("response_type", &self.response_type)
            .field("experimental", &self.experimental)
            .finish()
    }
}

/// Resolved `path` followed by the rendered `query`, if any.
pub(super) fn render_url(path: &str, query: &Params) -> String {
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{path}?{}", query.to_query_string())
    }
}

impl<T, E> CallSpec<T, E> {
    pub fn method(&self) -> Method {
        self.method
    }

    /// Resolved path and query.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Name of the type produced on success.
    pub fn response_type(&self) -> &'static str {
        self.response_type
    }

    /// Whether the endpoint is flagged as unstable.
    pub fn is_experimental(&self) -> bool {
        self.experimental
    }

    /// A new spec with one more query parameter, following the rules of
    /// [`CallSpecBuilder::query_param`](super::CallSpecBuilder::query_param). A name which is
    /// already set is rejected.
    ///
    /// ```
    /// use xing_api_rs::resources::user_profiles;
    ///
    /// let spec = user_profiles::find_users_by_email(&["ann@example.com"])
    ///     .and_then(|s| s.query_param("user_fields", ["id", "display_name"]))
    ///     .unwrap();
    ///
    /// assert_eq!(
    ///     spec.url(),
    ///     "/v1/users/find_by_emails?emails=ann%40example.com&user_fields=id,display_name"
    /// );
    /// ```
    pub fn query_param(
        mut self,
        name: &str,
        value: impl Into<ParamValue>,
    ) -> Result<Self, BuildError> {
        let value = value.into();
        if matches!(&value, ParamValue::List(v) if v.is_empty()) {
            return Ok(self);
        }

        self.query.insert(name, value)?;
        self.url = render_url(&self.path, &self.query);
        Ok(self)
    }

    /// Add a query parameter when `value` is `Some`.
    pub fn query_param_opt<V: Into<ParamValue>>(
        self,
        name: &str,
        value: Option<V>,
    ) -> Result<Self, BuildError> {
        match value {
            Some(v) => self.query_param(name, v),
            None => Ok(self),
        }
    }

    /// Create the request through `factory`, which may add headers such as authorization.
    pub fn request(&self, factory: &dyn RequestFactory) -> RequestData {
        let mut request = factory.new_request(self.method, &self.url);
        for (key, value) in &self.headers {
            request = request.header(key.as_str(), value.as_str());
        }

        match &self.body {
            Some(body) => request.json_bytes(body.clone()),
            None => request,
        }
    }

    /// The request this spec would send, without any factory decoration.
    pub fn raw_request(&self) -> RequestData {
        self.request(&DefaultRequestFactory {})
    }

    /// Apply the configured extractors to `response`.
    pub fn parse_response(&self, response: Response) -> Result<T, CallError<E>> {
        if response.is_success() {
            let document = response
                .as_json_value()
                .map_err(ExtractionError::MalformedBody)?;

            return self.response.extract(&document).map_err(|e| {
                log::warn!(
                    "Failed to extract {} from {} {}: {e}",
                    self.response_type,
                    self.method,
                    self.url
                );
                CallError::Extraction(e)
            });
        }

        log::debug!(
            "{} {} failed with http status {}",
            self.method,
            self.url,
            response.status()
        );

        let error = match (&self.error, response.as_json_value()) {
            (Some(extractor), Ok(document)) => extractor.extract(&document).ok(),
            _ => None,
        };

        Err(CallError::Api {
            status: response.status(),
            error,
        })
    }

    pub fn execute_sync<C: ClientSync>(
        &self,
        client: &C,
        factory: &dyn RequestFactory,
    ) -> Result<T, CallError<E>> {
        let request = self.request(factory);
        log::debug!("Executing {} {}", request.method, request.url);
        let response = client.execute(&request)?;
        self.parse_response(response)
    }

    /// Asynchronous execution. Dropping the returned future before completion aborts the
    /// request and the extractors are never run.
    pub fn execute_async<'a, C: ClientAsync>(
        &'a self,
        client: &'a C,
        factory: &dyn RequestFactory,
    ) -> Pin<Box<dyn Future<Output = Result<T, CallError<E>>> + Send + 'a>>
    where
        T: Send + 'a,
        E: Send + 'a,
    {
        let request = self.request(factory);
        log::debug!("Executing {} {}", request.method, request.url);
        let response = client.execute_async(&request);
        Box::pin(async move {
            let response = response.await?;
            self.parse_response(response)
        })
    }
}
