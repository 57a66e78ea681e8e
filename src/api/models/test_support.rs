//! Test helpers for constructing mortgage fixtures.
//!
//! # Examples
//!
//! ```
//! use rmbs_desk::api::models::test_support::sample_record;
//!
//! let record = sample_record(3, "BBB");
//! assert_eq!(record.id.get(), 3);
//! assert_eq!(record.rating.as_str(), "BBB");
//! ```

use super::{LoanType, MortgageFields, MortgageId, MortgageRecord, PropertyType, Rating};

/// Returns a valid set of mortgage fields.
#[must_use]
pub const fn sample_fields() -> MortgageFields {
    MortgageFields {
        credit_score: 720,
        loan_amount: 250_000.0,
        property_value: 400_000.0,
        annual_income: 95_000.0,
        debt_amount: 12_000.0,
        loan_type: LoanType::Fixed,
        property_type: PropertyType::SingleFamily,
    }
}

/// Constructs a record with [`sample_fields`], the given id, and rating.
#[must_use]
pub fn sample_record(id: u64, rating: &str) -> MortgageRecord {
    MortgageRecord {
        id: MortgageId::new(id),
        fields: sample_fields(),
        risk_score: None,
        rating: Rating::new(rating),
    }
}
