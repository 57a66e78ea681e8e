//! Tokio runtime and wiremock server shared by the BDD scenarios.
//!
//! `rstest-bdd` steps are synchronous, so each scenario owns a runtime and
//! blocks on it for every async call.

use std::io;
use std::rc::Rc;

use rmbs_desk::{ApiError, HttpMortgageGateway};
use rmbs_desk::api::DEFAULT_TIMEOUT;
use rstest_bdd::Slot;
use tokio::runtime::Runtime;
use wiremock::{Mock, MockServer, Request};

/// A runtime paired with the mock mortgage service it drives.
#[derive(Clone)]
pub struct ServiceHarness {
    runtime: Rc<Runtime>,
    server: Rc<MockServer>,
}

impl ServiceHarness {
    /// Starts a runtime and a mock server on it.
    ///
    /// # Errors
    ///
    /// Returns an error if the Tokio runtime cannot be created.
    pub fn start() -> Result<Self, io::Error> {
        let runtime = Runtime::new()?;
        let server = runtime.block_on(MockServer::start());
        Ok(Self {
            runtime: Rc::new(runtime),
            server: Rc::new(server),
        })
    }

    /// Runs `future` to completion on the scenario runtime.
    pub fn block_on<F: std::future::Future>(&self, future: F) -> F::Output {
        self.runtime.block_on(future)
    }

    /// Registers `mock` on the server.
    pub fn mount(&self, mock: Mock) {
        self.block_on(mock.mount(&self.server));
    }

    /// Builds a gateway pointed at the mock server.
    ///
    /// # Errors
    ///
    /// Returns an error if the server URI cannot be used as a base URL.
    pub fn gateway(&self) -> Result<HttpMortgageGateway, ApiError> {
        HttpMortgageGateway::new(&self.server.uri(), DEFAULT_TIMEOUT)
    }

    /// Counts requests received with the given method and path.
    pub fn request_count(&self, method: &str, path: &str) -> usize {
        self.count_matching(|request| {
            request.method.as_str() == method && request.url.path() == path
        })
    }

    /// Counts requests received with the given method on any path.
    pub fn method_count(&self, method: &str) -> usize {
        self.count_matching(|request| request.method.as_str() == method)
    }

    fn count_matching(&self, predicate: impl Fn(&Request) -> bool) -> usize {
        self.block_on(self.server.received_requests())
            .unwrap_or_default()
            .iter()
            .filter(|request| predicate(request))
            .count()
    }
}

/// Returns the scenario's harness, starting it on first use.
///
/// # Errors
///
/// Returns an error if the harness cannot be started.
pub fn ensure_harness(slot: &Slot<ServiceHarness>) -> Result<ServiceHarness, io::Error> {
    if let Some(harness) = slot.get() {
        return Ok(harness);
    }
    let harness = ServiceHarness::start()?;
    slot.set(harness.clone());
    Ok(harness)
}
