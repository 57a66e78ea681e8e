//! Gateways for talking to the mortgage-records service.
//!
//! The trait-based design enables mocking in tests while the `reqwest`
//! implementation handles real HTTP requests.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use url::Url;

use super::error::ApiError;
use super::models::{
    ApiMortgage, ApiMutationReceipt, ApiPortfolioRating, MortgageFields, MortgageId,
    MortgageRecord, MutationReceipt, PortfolioRating,
};

mod error_mapping;

use error_mapping::{extract_error_message, map_transport_error};

/// Default request timeout when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);

/// Gateway that can read and mutate mortgage records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MortgageGateway: Send + Sync {
    /// Fetch every mortgage record.
    async fn list_mortgages(&self) -> Result<Vec<MortgageRecord>, ApiError>;

    /// Fetch the portfolio-level RMBS rating.
    async fn portfolio_rating(&self) -> Result<PortfolioRating, ApiError>;

    /// Create a new record from the given fields.
    async fn create_mortgage(&self, fields: &MortgageFields)
    -> Result<MutationReceipt, ApiError>;

    /// Replace the editable fields of an existing record.
    async fn update_mortgage(
        &self,
        id: MortgageId,
        fields: &MortgageFields,
    ) -> Result<MutationReceipt, ApiError>;

    /// Delete a record.
    async fn delete_mortgage(&self, id: MortgageId) -> Result<(), ApiError>;
}

/// `reqwest`-backed gateway.
#[derive(Debug, Clone)]
pub struct HttpMortgageGateway {
    client: Client,
    base_url: Url,
}

impl HttpMortgageGateway {
    /// Builds a gateway for the service rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidUrl`] when `base_url` cannot be parsed or is
    /// not an HTTP(S) URL, and [`ApiError::Configuration`] when the HTTP
    /// client cannot be constructed.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let root = parse_base_url(base_url)?;
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|error| ApiError::Configuration {
                message: format!("failed to configure HTTP client: {error}"),
            })?;

        Ok(Self {
            client,
            base_url: root,
        })
    }

    /// Returns the normalised base URL.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path)
            .map_err(|error| ApiError::InvalidUrl(format!("{path}: {error}")))
    }

    /// Sends a request and converts non-success statuses into
    /// [`ApiError::Server`].
    async fn execute(&self, operation: &str, request: RequestBuilder) -> Result<Response, ApiError> {
        tracing::debug!("{operation}: sending request");
        let response = request
            .send()
            .await
            .map_err(|error| map_transport_error(operation, &error))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.ok();
        let message = body.as_deref().and_then(extract_error_message);
        tracing::warn!("{operation} failed with status {status}");
        Err(ApiError::Server {
            operation: operation.to_owned(),
            status: status.as_u16(),
            message,
        })
    }
}

/// Parses the configured base URL and ensures it ends with `/` so relative
/// endpoint paths are appended rather than replacing the last segment.
fn parse_base_url(raw: &str) -> Result<Url, ApiError> {
    let mut url = Url::parse(raw.trim())
        .map_err(|error| ApiError::InvalidUrl(format!("{raw}: {error}")))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ApiError::InvalidUrl(format!(
            "{raw}: scheme must be http or https"
        )));
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }

    Ok(url)
}

async fn decode<T: DeserializeOwned>(operation: &str, response: Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|error| ApiError::Decode {
            operation: operation.to_owned(),
            message: error.to_string(),
        })
}

/// Decodes an optional acknowledgement body; an empty body yields a default
/// receipt.
async fn decode_receipt(operation: &str, response: Response) -> Result<MutationReceipt, ApiError> {
    let body = response
        .text()
        .await
        .map_err(|error| map_transport_error(operation, &error))?;

    if body.trim().is_empty() {
        return Ok(MutationReceipt::default());
    }

    serde_json::from_str::<ApiMutationReceipt>(&body)
        .map(MutationReceipt::from)
        .map_err(|error| ApiError::Decode {
            operation: operation.to_owned(),
            message: error.to_string(),
        })
}

#[async_trait]
impl MortgageGateway for HttpMortgageGateway {
    async fn list_mortgages(&self) -> Result<Vec<MortgageRecord>, ApiError> {
        const OPERATION: &str = "list mortgages";
        let url = self.endpoint("mortgages")?;
        let response = self.execute(OPERATION, self.client.get(url)).await?;
        let records: Vec<ApiMortgage> = decode(OPERATION, response).await?;
        tracing::debug!("{OPERATION}: received {} records", records.len());
        Ok(records.into_iter().map(MortgageRecord::from).collect())
    }

    async fn portfolio_rating(&self) -> Result<PortfolioRating, ApiError> {
        const OPERATION: &str = "fetch RMBS rating";
        let url = self.endpoint("get_rmbs_rating")?;
        let response = self.execute(OPERATION, self.client.get(url)).await?;
        decode::<ApiPortfolioRating>(OPERATION, response)
            .await
            .map(PortfolioRating::from)
    }

    async fn create_mortgage(
        &self,
        fields: &MortgageFields,
    ) -> Result<MutationReceipt, ApiError> {
        const OPERATION: &str = "create mortgage";
        let url = self.endpoint("add_mortgage")?;
        let response = self
            .execute(OPERATION, self.client.post(url).json(fields))
            .await?;
        decode_receipt(OPERATION, response).await
    }

    async fn update_mortgage(
        &self,
        id: MortgageId,
        fields: &MortgageFields,
    ) -> Result<MutationReceipt, ApiError> {
        const OPERATION: &str = "update mortgage";
        let url = self.endpoint(&format!("update_mortgage/{id}"))?;
        let response = self
            .execute(OPERATION, self.client.put(url).json(fields))
            .await?;
        decode_receipt(OPERATION, response).await
    }

    async fn delete_mortgage(&self, id: MortgageId) -> Result<(), ApiError> {
        const OPERATION: &str = "delete mortgage";
        let url = self.endpoint(&format!("delete_mortgage/{id}"))?;
        self.execute(OPERATION, self.client.delete(url)).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::bare_host("http://localhost:5000", "http://localhost:5000/mortgages")]
    #[case::trailing_slash("http://localhost:5000/", "http://localhost:5000/mortgages")]
    #[case::nested_path("https://example.com/api", "https://example.com/api/mortgages")]
    fn endpoints_append_to_base_path(#[case] base: &str, #[case] expected: &str) {
        let gateway =
            HttpMortgageGateway::new(base, DEFAULT_TIMEOUT).expect("gateway should build");
        let url = gateway.endpoint("mortgages").expect("endpoint should join");

        assert_eq!(url.as_str(), expected);
    }

    #[rstest]
    #[case::not_a_url("not a url")]
    #[case::wrong_scheme("ftp://example.com")]
    fn invalid_base_urls_are_rejected(#[case] base: &str) {
        let result = HttpMortgageGateway::new(base, DEFAULT_TIMEOUT);

        assert!(
            matches!(result, Err(ApiError::InvalidUrl(_))),
            "expected InvalidUrl for {base}, got {result:?}"
        );
    }
}
