//! Draft record state and input validation.
//!
//! The draft mirrors what the user has typed: numeric inputs are coerced to
//! numbers on every change, or to empty when the text is cleared. Validation
//! turns a complete draft into [`MortgageFields`] ready for submission.

use std::str::FromStr;

use thiserror::Error;

use crate::api::models::{LoanType, MortgageFields, PropertyType, UnknownVariant};

/// Lowest accepted credit score.
pub const MIN_CREDIT_SCORE: i64 = 300;
/// Highest accepted credit score.
pub const MAX_CREDIT_SCORE: i64 = 850;

/// Editable form fields, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    /// Borrower credit score.
    CreditScore,
    /// Loan principal.
    LoanAmount,
    /// Property value.
    PropertyValue,
    /// Annual income.
    AnnualIncome,
    /// Outstanding debt.
    DebtAmount,
    /// Fixed or adjustable.
    LoanType,
    /// Single family or condo.
    PropertyType,
}

impl FormField {
    /// Every field in display order.
    pub const ALL: [Self; 7] = [
        Self::CreditScore,
        Self::LoanAmount,
        Self::PropertyValue,
        Self::AnnualIncome,
        Self::DebtAmount,
        Self::LoanType,
        Self::PropertyType,
    ];

    /// Wire name of the field.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::CreditScore => "credit_score",
            Self::LoanAmount => "loan_amount",
            Self::PropertyValue => "property_value",
            Self::AnnualIncome => "annual_income",
            Self::DebtAmount => "debt_amount",
            Self::LoanType => "loan_type",
            Self::PropertyType => "property_type",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::CreditScore => "Credit Score",
            Self::LoanAmount => "Loan Amount",
            Self::PropertyValue => "Property Value",
            Self::AnnualIncome => "Annual Income",
            Self::DebtAmount => "Debt Amount",
            Self::LoanType => "Loan Type",
            Self::PropertyType => "Property Type",
        }
    }

    /// Whether the field holds a number (as opposed to an enumerated value).
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        !matches!(self, Self::LoanType | Self::PropertyType)
    }

    /// Looks a field up by its wire name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.name() == name)
    }

    /// The next field, wrapping around.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::CreditScore => Self::LoanAmount,
            Self::LoanAmount => Self::PropertyValue,
            Self::PropertyValue => Self::AnnualIncome,
            Self::AnnualIncome => Self::DebtAmount,
            Self::DebtAmount => Self::LoanType,
            Self::LoanType => Self::PropertyType,
            Self::PropertyType => Self::CreditScore,
        }
    }

    /// The previous field, wrapping around.
    #[must_use]
    pub const fn previous(self) -> Self {
        match self {
            Self::CreditScore => Self::PropertyType,
            Self::LoanAmount => Self::CreditScore,
            Self::PropertyValue => Self::LoanAmount,
            Self::AnnualIncome => Self::PropertyValue,
            Self::DebtAmount => Self::AnnualIncome,
            Self::LoanType => Self::DebtAmount,
            Self::PropertyType => Self::LoanType,
        }
    }
}

/// A numeric input after coercion.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Entry<T> {
    /// Nothing typed.
    #[default]
    Empty,
    /// Text parsed as a number.
    Value(T),
    /// Text that is not a number, kept verbatim.
    Malformed(String),
}

impl<T: FromStr> Entry<T> {
    /// Coerces raw input text: blank text becomes [`Entry::Empty`].
    #[must_use]
    pub fn coerce(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Self::Empty;
        }
        trimmed
            .parse::<T>()
            .map_or_else(|_| Self::Malformed(trimmed.to_owned()), Self::Value)
    }
}

impl Entry<f64> {
    /// Coerces an amount, treating non-finite values (`inf`, `NaN`) as
    /// malformed.
    #[must_use]
    pub fn coerce_amount(raw: &str) -> Self {
        match Self::coerce(raw) {
            Self::Value(value) if !value.is_finite() => Self::Malformed(raw.trim().to_owned()),
            other => other,
        }
    }
}

impl<T: ToString> Entry<T> {
    /// Text to show in an input box for this entry.
    #[must_use]
    pub fn input_text(&self) -> String {
        match self {
            Self::Empty => String::new(),
            Self::Value(value) => value.to_string(),
            Self::Malformed(raw) => raw.clone(),
        }
    }
}

/// Errors raised while applying a field change.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DraftError {
    /// An enumerated field received an unknown value.
    #[error(transparent)]
    UnknownOption(#[from] UnknownVariant),
}

/// Reasons a draft cannot be submitted. Each variant displays the single
/// message shown to the user.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// At least one numeric field is blank.
    #[error("All fields are required.")]
    MissingFields,
    /// A numeric field holds text that is not a number.
    #[error("{label} must be a number.")]
    NotANumber {
        /// Label of the offending field.
        label: &'static str,
    },
    /// Credit score outside 300–850.
    #[error("Credit score must be between 300 and 850.")]
    CreditScoreOutOfRange,
    /// Loan amount, property value, or income is zero or negative.
    #[error("Amounts must be positive.")]
    NonPositiveAmount,
    /// Debt amount is negative.
    #[error("Debt amount cannot be negative.")]
    NegativeDebt,
}

/// The form's in-progress, not-yet-submitted record.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MortgageDraft {
    /// Credit score input.
    pub credit_score: Entry<i64>,
    /// Loan amount input.
    pub loan_amount: Entry<f64>,
    /// Property value input.
    pub property_value: Entry<f64>,
    /// Annual income input.
    pub annual_income: Entry<f64>,
    /// Debt amount input.
    pub debt_amount: Entry<f64>,
    /// Selected loan type.
    pub loan_type: LoanType,
    /// Selected property type.
    pub property_type: PropertyType,
}

impl MortgageDraft {
    /// Builds a draft pre-filled from existing record fields.
    #[must_use]
    pub fn from_fields(fields: &MortgageFields) -> Self {
        Self {
            credit_score: Entry::Value(i64::from(fields.credit_score)),
            loan_amount: Entry::Value(fields.loan_amount),
            property_value: Entry::Value(fields.property_value),
            annual_income: Entry::Value(fields.annual_income),
            debt_amount: Entry::Value(fields.debt_amount),
            loan_type: fields.loan_type,
            property_type: fields.property_type,
        }
    }

    /// Applies raw input text to a field, coercing numeric fields.
    ///
    /// # Errors
    ///
    /// Returns [`DraftError::UnknownOption`] when an enumerated field
    /// receives a value other than its wire names. The draft is unchanged in
    /// that case.
    pub fn set_field(&mut self, field: FormField, raw: &str) -> Result<(), DraftError> {
        match field {
            FormField::CreditScore => self.credit_score = Entry::coerce(raw),
            FormField::LoanAmount => self.loan_amount = Entry::coerce_amount(raw),
            FormField::PropertyValue => self.property_value = Entry::coerce_amount(raw),
            FormField::AnnualIncome => self.annual_income = Entry::coerce_amount(raw),
            FormField::DebtAmount => self.debt_amount = Entry::coerce_amount(raw),
            FormField::LoanType => self.loan_type = raw.parse()?,
            FormField::PropertyType => self.property_type = raw.parse()?,
        }
        Ok(())
    }

    /// Returns the text representation of a field's current value.
    #[must_use]
    pub fn field_text(&self, field: FormField) -> String {
        match field {
            FormField::CreditScore => self.credit_score.input_text(),
            FormField::LoanAmount => self.loan_amount.input_text(),
            FormField::PropertyValue => self.property_value.input_text(),
            FormField::AnnualIncome => self.annual_income.input_text(),
            FormField::DebtAmount => self.debt_amount.input_text(),
            FormField::LoanType => self.loan_type.as_str().to_owned(),
            FormField::PropertyType => self.property_type.as_str().to_owned(),
        }
    }

    /// Checks the draft and returns the fields to submit.
    ///
    /// Checks run in a fixed order and only the first failure is reported:
    /// blank fields, non-numeric text, credit score range, positive amounts,
    /// then non-negative debt.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] that applies.
    pub fn validate(&self) -> Result<MortgageFields, ValidationError> {
        let score_entry = required(&self.credit_score, FormField::CreditScore);
        let loan_entry = required(&self.loan_amount, FormField::LoanAmount);
        let property_entry = required(&self.property_value, FormField::PropertyValue);
        let income_entry = required(&self.annual_income, FormField::AnnualIncome);
        let debt_entry = required(&self.debt_amount, FormField::DebtAmount);

        let inputs = [
            score_entry.map(|_| ()),
            loan_entry.map(|_| ()),
            property_entry.map(|_| ()),
            income_entry.map(|_| ()),
            debt_entry.map(|_| ()),
        ];
        if inputs.contains(&Err(ValidationError::MissingFields)) {
            return Err(ValidationError::MissingFields);
        }

        let score = score_entry?;
        let loan_amount = loan_entry?;
        let property_value = property_entry?;
        let annual_income = income_entry?;
        let debt_amount = debt_entry?;

        if !(MIN_CREDIT_SCORE..=MAX_CREDIT_SCORE).contains(&score) {
            return Err(ValidationError::CreditScoreOutOfRange);
        }
        if [loan_amount, property_value, annual_income]
            .iter()
            .any(|amount| *amount <= 0.0)
        {
            return Err(ValidationError::NonPositiveAmount);
        }
        if debt_amount < 0.0 {
            return Err(ValidationError::NegativeDebt);
        }

        let credit_score =
            u32::try_from(score).map_err(|_| ValidationError::CreditScoreOutOfRange)?;

        Ok(MortgageFields {
            credit_score,
            loan_amount,
            property_value,
            annual_income,
            debt_amount,
            loan_type: self.loan_type,
            property_type: self.property_type,
        })
    }
}

const fn required<T: Copy>(entry: &Entry<T>, field: FormField) -> Result<T, ValidationError> {
    match entry {
        Entry::Empty => Err(ValidationError::MissingFields),
        Entry::Value(value) => Ok(*value),
        Entry::Malformed(_) => Err(ValidationError::NotANumber {
            label: field.label(),
        }),
    }
}
