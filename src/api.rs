//! Executor pairing an http engine with a request factory.

use crate::http::{ClientAsync, ClientSync, DefaultRequestFactory, RequestFactory};
use crate::spec::{CallError, CallSpec};
use std::future::Future;
use std::pin::Pin;

/// Executes [`CallSpec`]s with a fixed engine and request factory.
///
/// Resource functions only build specs; handing them to a `XingApi` is what sends them.
pub struct XingApi<C> {
    client: C,
    factory: Box<dyn RequestFactory + Send + Sync>,
}

impl<C: std::fmt::Debug> std::fmt::Debug for XingApi<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("XingApi")
            .field("client", &self.client)
            .finish_non_exhaustive()
    }
}

impl<C> XingApi<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            factory: Box::new(DefaultRequestFactory {}),
        }
    }

    /// Replace the request factory, e.g. with one that signs every request.
    pub fn with_request_factory(
        mut self,
        factory: impl RequestFactory + Send + Sync + 'static,
    ) -> Self {
        self.factory = Box::new(factory);
        self
    }

    pub fn client(&self) -> &C {
        &self.client
    }
}

impl<C: ClientSync> XingApi<C> {
    pub fn execute<T, E>(&self, spec: &CallSpec<T, E>) -> Result<T, CallError<E>> {
        spec.execute_sync(&self.client, self.factory.as_ref())
    }
}

impl<C: ClientAsync> XingApi<C> {
    pub fn execute_async<'a, T: Send + 'a, E: Send + 'a>(
        &'a self,
        spec: &'a CallSpec<T, E>,
    ) -> Pin<Box<dyn Future<Output = Result<T, CallError<E>>> + Send + 'a>> {
        spec.execute_async(&self.client, self.factory.as_ref())
    }
}
