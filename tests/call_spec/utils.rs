use log::LevelFilter;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::sync::OnceLock;
use xing_api_rs::http;
use xing_api_rs::http::{RequestData, Response};

static LOG_CELL: OnceLock<()> = OnceLock::new();

pub fn init_log() {
    LOG_CELL.get_or_init(|| {
        let _ = env_logger::builder()
            .filter_level(LevelFilter::Debug)
            .is_test(true)
            .try_init();
    });
}

/// Engine replying with queued responses in order. The last response is repeated once the queue
/// runs dry.
pub struct CannedClient {
    responses: Mutex<VecDeque<(u16, String)>>,
    requests: Mutex<Vec<RequestData>>,
}

impl CannedClient {
    pub fn new(status: u16, body: &str) -> Self {
        init_log();
        Self {
            responses: Mutex::new(VecDeque::from([(status, body.to_string())])),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn then(self, status: u16, body: &str) -> Self {
        self.responses.lock().push_back((status, body.to_string()));
        self
    }

    pub fn requests(&self) -> Vec<RequestData> {
        self.requests.lock().clone()
    }

    fn next(&self, request: &RequestData) -> Response {
        self.requests.lock().push(request.clone());
        let mut responses = self.responses.lock();
        let (status, body) = if responses.len() > 1 {
            responses.pop_front().unwrap_or_default()
        } else {
            responses.front().cloned().unwrap_or_default()
        };
        Response::new(status, Some(body.into_bytes()))
    }
}

impl http::ClientSync for CannedClient {
    fn execute(&self, request: &RequestData) -> http::Result<Response> {
        Ok(self.next(request))
    }
}

impl http::ClientAsync for CannedClient {
    fn execute_async(
        &self,
        request: &RequestData,
    ) -> Pin<Box<dyn Future<Output = http::Result<Response>> + Send>> {
        let response = self.next(request);
        Box::pin(async move { Ok(response) })
    }
}

/// Engine whose requests never complete.
pub struct HangingClient;

impl http::ClientAsync for HangingClient {
    fn execute_async(
        &self,
        _: &RequestData,
    ) -> Pin<Box<dyn Future<Output = http::Result<Response>> + Send>> {
        Box::pin(std::future::pending())
    }
}

/// Engine which cannot reach the server.
pub struct UnreachableClient;

impl http::ClientSync for UnreachableClient {
    fn execute(&self, _: &RequestData) -> http::Result<Response> {
        Err(http::Error::Timeout(anyhow::anyhow!("timed out")))
    }
}
