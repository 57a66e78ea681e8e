//! Data models for mortgage records and portfolio ratings.
//!
//! Types prefixed with `Api` are internal deserialisation targets that
//! convert into the public domain types. Ratings are always produced by the
//! service; the client only carries them for display.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

/// Server-assigned mortgage identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MortgageId(u64);

impl MortgageId {
    /// Wraps a raw identifier.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw identifier.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for MortgageId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, formatter)
    }
}

/// An enumerated value did not match any known wire name.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown {kind} '{value}'")]
pub struct UnknownVariant {
    /// The kind of value being parsed (e.g. `loan type`).
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
}

/// Interest structure of a loan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoanType {
    /// Fixed-rate loan.
    #[default]
    Fixed,
    /// Adjustable-rate loan.
    Adjustable,
}

impl LoanType {
    /// Wire name used by the service.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fixed => "fixed",
            Self::Adjustable => "adjustable",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Fixed => "Fixed",
            Self::Adjustable => "Adjustable",
        }
    }

    /// Returns the other variant.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Fixed => Self::Adjustable,
            Self::Adjustable => Self::Fixed,
        }
    }
}

impl FromStr for LoanType {
    type Err = UnknownVariant;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "fixed" => Ok(Self::Fixed),
            "adjustable" => Ok(Self::Adjustable),
            other => Err(UnknownVariant {
                kind: "loan type",
                value: other.to_owned(),
            }),
        }
    }
}

/// Kind of property securing the loan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyType {
    /// Detached single-family home.
    #[default]
    SingleFamily,
    /// Condominium unit.
    Condo,
}

impl PropertyType {
    /// Wire name used by the service.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SingleFamily => "single_family",
            Self::Condo => "condo",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::SingleFamily => "Single Family",
            Self::Condo => "Condo",
        }
    }

    /// Returns the other variant.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::SingleFamily => Self::Condo,
            Self::Condo => Self::SingleFamily,
        }
    }
}

impl FromStr for PropertyType {
    type Err = UnknownVariant;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "single_family" => Ok(Self::SingleFamily),
            "condo" => Ok(Self::Condo),
            other => Err(UnknownVariant {
                kind: "property type",
                value: other.to_owned(),
            }),
        }
    }
}

/// Categorical credit grade computed by the service (e.g. `AAA`, `BBB`, `C`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rating(String);

/// Placeholder shown when no rating is available.
const UNAVAILABLE_RATING: &str = "N/A";

impl Rating {
    /// Wraps a rating string as returned by the service.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The `N/A` placeholder used before the first fetch and for empty
    /// portfolios.
    #[must_use]
    pub fn unavailable() -> Self {
        Self(UNAVAILABLE_RATING.to_owned())
    }

    /// Returns the rating text.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Default for Rating {
    fn default() -> Self {
        Self::unavailable()
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.pad(&self.0)
    }
}

/// Editable mortgage fields sent when creating or updating a record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MortgageFields {
    /// Borrower credit score (300–850).
    pub credit_score: u32,
    /// Principal amount of the loan.
    pub loan_amount: f64,
    /// Appraised value of the property.
    pub property_value: f64,
    /// Borrower's annual income.
    pub annual_income: f64,
    /// Borrower's outstanding debt.
    pub debt_amount: f64,
    /// Interest structure.
    pub loan_type: LoanType,
    /// Kind of property.
    pub property_type: PropertyType,
}

/// A mortgage record as stored by the service.
#[derive(Debug, Clone, PartialEq)]
pub struct MortgageRecord {
    /// Server-assigned identifier.
    pub id: MortgageId,
    /// Editable fields.
    pub fields: MortgageFields,
    /// Numeric risk score reported by the service, if any.
    pub risk_score: Option<i64>,
    /// Server-computed rating.
    pub rating: Rating,
}

/// Portfolio-level RMBS rating.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PortfolioRating {
    /// Aggregate grade for the whole portfolio.
    pub rating: Rating,
    /// Optional explanatory message (e.g. `No mortgages available`).
    pub message: Option<String>,
}

/// Acknowledgement returned by create and update calls.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MutationReceipt {
    /// Confirmation text from the service.
    pub message: Option<String>,
    /// Identifier of the created record (create only).
    pub id: Option<MortgageId>,
    /// Risk score computed for the submitted fields.
    pub risk_score: Option<i64>,
    /// Rating computed for the submitted fields.
    pub rating: Option<Rating>,
}

// --- Deserialisation targets ---

#[derive(Debug, Deserialize)]
pub(crate) struct ApiMortgage {
    id: MortgageId,
    #[serde(flatten)]
    fields: MortgageFields,
    #[serde(default)]
    risk_score: Option<i64>,
    #[serde(default)]
    rating: Option<Rating>,
}

impl From<ApiMortgage> for MortgageRecord {
    fn from(value: ApiMortgage) -> Self {
        Self {
            id: value.id,
            fields: value.fields,
            risk_score: value.risk_score,
            rating: value.rating.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiPortfolioRating {
    #[serde(default)]
    rating: Option<Rating>,
    #[serde(default)]
    message: Option<String>,
}

impl From<ApiPortfolioRating> for PortfolioRating {
    fn from(value: ApiPortfolioRating) -> Self {
        Self {
            rating: value.rating.unwrap_or_default(),
            message: value.message,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ApiMutationReceipt {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    id: Option<MortgageId>,
    #[serde(default)]
    risk_score: Option<i64>,
    #[serde(default)]
    rating: Option<Rating>,
}

impl From<ApiMutationReceipt> for MutationReceipt {
    fn from(value: ApiMutationReceipt) -> Self {
        Self {
            message: value.message,
            id: value.id,
            risk_score: value.risk_score,
            rating: value.rating,
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    #[test]
    fn api_mortgage_converts_into_record() {
        let payload = json!({
            "id": 7,
            "credit_score": 720,
            "loan_amount": 250_000.0,
            "property_value": 400_000,
            "annual_income": 95_000.5,
            "debt_amount": 0,
            "loan_type": "adjustable",
            "property_type": "condo",
            "risk_score": 2,
            "rating": "AAA"
        });

        let api: ApiMortgage = serde_json::from_value(payload).expect("record should decode");
        let record = MortgageRecord::from(api);

        assert_eq!(record.id, MortgageId::new(7));
        assert_eq!(record.fields.credit_score, 720);
        assert_eq!(record.fields.loan_type, LoanType::Adjustable);
        assert_eq!(record.fields.property_type, PropertyType::Condo);
        assert_eq!(record.risk_score, Some(2));
        assert_eq!(record.rating.as_str(), "AAA");
    }

    #[test]
    fn missing_portfolio_rating_defaults_to_unavailable() {
        let api: ApiPortfolioRating =
            serde_json::from_value(json!({})).expect("empty rating body should decode");

        assert_eq!(PortfolioRating::from(api).rating, Rating::unavailable());
    }

    #[test]
    fn fields_serialise_with_wire_names() {
        let fields = test_support::sample_fields();
        let value = serde_json::to_value(&fields).expect("fields should serialise");

        assert_eq!(value["loan_type"], "fixed");
        assert_eq!(value["property_type"], "single_family");
        assert_eq!(value["credit_score"], 720);
        assert!(value.get("id").is_none());
        assert!(value.get("rating").is_none());
    }

    #[rstest]
    #[case::fixed("fixed", Ok(LoanType::Fixed))]
    #[case::adjustable(" adjustable ", Ok(LoanType::Adjustable))]
    #[case::unknown("balloon", Err("unknown loan type 'balloon'"))]
    fn loan_type_parses_wire_names(
        #[case] input: &str,
        #[case] expected: Result<LoanType, &str>,
    ) {
        let parsed = input.parse::<LoanType>().map_err(|error| error.to_string());
        assert_eq!(parsed, expected.map_err(ToOwned::to_owned));
    }

    #[test]
    fn property_type_toggles_between_variants() {
        assert_eq!(PropertyType::SingleFamily.toggled(), PropertyType::Condo);
        assert_eq!(PropertyType::Condo.toggled(), PropertyType::SingleFamily);
        assert_eq!("condo".parse::<PropertyType>(), Ok(PropertyType::Condo));
    }
}
