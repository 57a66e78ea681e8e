//! Shared test utilities for CLI tests.

use std::sync::Mutex;

use async_trait::async_trait;
use rmbs_desk::api::{
    ApiError, MortgageFields, MortgageGateway, MortgageId, MortgageRecord, MutationReceipt,
    PortfolioRating, Rating,
};

/// A read-only gateway that records which calls were made and returns
/// preconfigured responses.
#[derive(Debug)]
pub struct StubGateway {
    records: Result<Vec<MortgageRecord>, ApiError>,
    rating: Rating,
    calls: Mutex<Vec<&'static str>>,
}

impl StubGateway {
    /// Serves `records` and the portfolio rating `rating`.
    #[must_use]
    pub fn with_records(records: Vec<MortgageRecord>, rating: &str) -> Self {
        Self {
            records: Ok(records),
            rating: Rating::new(rating),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Fails every list request with `error`.
    #[must_use]
    pub fn failing(error: ApiError) -> Self {
        Self {
            records: Err(error),
            rating: Rating::unavailable(),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Returns the names of the calls made so far.
    #[must_use]
    pub fn calls(&self) -> Vec<&'static str> {
        self.calls
            .lock()
            .expect("calls mutex should be available")
            .clone()
    }

    fn record_call(&self, name: &'static str) {
        self.calls
            .lock()
            .expect("calls mutex should be available")
            .push(name);
    }
}

#[async_trait]
impl MortgageGateway for StubGateway {
    async fn list_mortgages(&self) -> Result<Vec<MortgageRecord>, ApiError> {
        self.record_call("list_mortgages");
        self.records.clone()
    }

    async fn portfolio_rating(&self) -> Result<PortfolioRating, ApiError> {
        self.record_call("portfolio_rating");
        Ok(PortfolioRating {
            rating: self.rating.clone(),
            message: None,
        })
    }

    async fn create_mortgage(
        &self,
        _fields: &MortgageFields,
    ) -> Result<MutationReceipt, ApiError> {
        panic!("summary mode must not create records")
    }

    async fn update_mortgage(
        &self,
        _id: MortgageId,
        _fields: &MortgageFields,
    ) -> Result<MutationReceipt, ApiError> {
        panic!("summary mode must not update records")
    }

    async fn delete_mortgage(&self, _id: MortgageId) -> Result<(), ApiError> {
        panic!("summary mode must not delete records")
    }
}
