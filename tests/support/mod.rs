//! Shared fixtures for the mock mortgage service.

use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

pub mod runtime;

/// JSON body of a stored mortgage record.
pub fn mortgage_json(id: u64, rating: &str) -> Value {
    json!({
        "id": id,
        "credit_score": 720,
        "loan_amount": 250_000.0,
        "property_value": 400_000.0,
        "annual_income": 95_000.0,
        "debt_amount": 12_000.0,
        "loan_type": "fixed",
        "property_type": "single_family",
        "risk_score": 3,
        "rating": rating
    })
}

/// Serves `records` from `GET /mortgages`.
pub fn list_mock(records: &[Value]) -> Mock {
    Mock::given(method("GET"))
        .and(path("/mortgages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(records))
}

/// Serves `rating` from `GET /get_rmbs_rating`.
pub fn rating_mock(rating: &str) -> Mock {
    Mock::given(method("GET"))
        .and(path("/get_rmbs_rating"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "rating": rating })))
}

/// Answers `method_name path_name` with `status` and an `error` body.
pub fn error_mock(method_name: &str, path_name: &str, status: u16, message: &str) -> Mock {
    Mock::given(method(method_name))
        .and(path(path_name))
        .respond_with(ResponseTemplate::new(status).set_body_json(json!({ "error": message })))
}
