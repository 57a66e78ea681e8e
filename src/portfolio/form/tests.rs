//! Tests for draft validation and the submit cycle.

use rstest::{fixture, rstest};

use super::*;
use crate::api::gateway::MockMortgageGateway;
use crate::api::models::test_support::sample_record;
use crate::api::{LoanType, PropertyType, Rating};

/// Draft text for every numeric field of a valid submission.
const VALID_INPUT: [(FormField, &str); 5] = [
    (FormField::CreditScore, "720"),
    (FormField::LoanAmount, "250000"),
    (FormField::PropertyValue, "400000"),
    (FormField::AnnualIncome, "95000"),
    (FormField::DebtAmount, "12000"),
];

fn valid_form() -> FormController {
    let mut form = FormController::new();
    for (field, raw) in VALID_INPUT {
        form.on_field_change(field, raw)
            .expect("numeric fields should accept input");
    }
    form
}

#[fixture]
fn filled_form() -> FormController {
    valid_form()
}

fn form_with(field: FormField, raw: &str) -> FormController {
    let mut form = valid_form();
    form.on_field_change(field, raw)
        .expect("numeric fields should accept input");
    form
}

#[test]
fn new_form_has_default_draft() {
    let form = FormController::new();

    assert_eq!(form.draft().credit_score, Entry::Empty);
    assert_eq!(form.draft().loan_type, LoanType::Fixed);
    assert_eq!(form.draft().property_type, PropertyType::SingleFamily);
    assert!(!form.is_editing());
}

#[rstest]
#[case::below_minimum("299", Err(ValidationError::CreditScoreOutOfRange))]
#[case::minimum("300", Ok(()))]
#[case::maximum("850", Ok(()))]
#[case::above_maximum("851", Err(ValidationError::CreditScoreOutOfRange))]
#[case::negative("-5", Err(ValidationError::CreditScoreOutOfRange))]
fn credit_score_range_is_enforced(
    #[case] raw: &str,
    #[case] expected: Result<(), ValidationError>,
) {
    let form = form_with(FormField::CreditScore, raw);
    assert_eq!(form.validate().map(|_| ()), expected);
}

#[rstest]
#[case::loan_zero(FormField::LoanAmount, "0")]
#[case::loan_negative(FormField::LoanAmount, "-1")]
#[case::property_zero(FormField::PropertyValue, "0")]
#[case::property_negative(FormField::PropertyValue, "-250000")]
#[case::income_zero(FormField::AnnualIncome, "0")]
#[case::income_negative(FormField::AnnualIncome, "-0.01")]
fn non_positive_amounts_are_rejected(#[case] field: FormField, #[case] raw: &str) {
    let form = form_with(field, raw);
    assert_eq!(form.validate(), Err(ValidationError::NonPositiveAmount));
}

#[rstest]
#[case::loan(FormField::LoanAmount, "0.01")]
#[case::property(FormField::PropertyValue, "1")]
#[case::income(FormField::AnnualIncome, "1000000000")]
fn positive_amounts_are_accepted(#[case] field: FormField, #[case] raw: &str) {
    assert!(form_with(field, raw).validate().is_ok());
}

#[rstest]
#[case::negative("-1", Err(ValidationError::NegativeDebt))]
#[case::zero("0", Ok(()))]
#[case::positive("500.25", Ok(()))]
fn debt_amount_must_not_be_negative(
    #[case] raw: &str,
    #[case] expected: Result<(), ValidationError>,
) {
    let form = form_with(FormField::DebtAmount, raw);
    assert_eq!(form.validate().map(|_| ()), expected);
}

#[rstest]
#[case::credit_score(FormField::CreditScore)]
#[case::debt_amount(FormField::DebtAmount)]
fn blank_fields_are_required(#[case] field: FormField) {
    let form = form_with(field, "");
    let error = form.validate().expect_err("blank field should fail");

    assert_eq!(error, ValidationError::MissingFields);
    assert_eq!(error.to_string(), "All fields are required.");
}

#[test]
fn malformed_numbers_name_the_field() {
    let form = form_with(FormField::AnnualIncome, "lots");

    assert_eq!(
        form.validate().map_err(|error| error.to_string()),
        Err("Annual Income must be a number.".to_owned())
    );
}

#[test]
fn missing_fields_take_priority_over_range_errors() {
    let mut form = form_with(FormField::CreditScore, "900");
    form.on_field_change(FormField::LoanAmount, "")
        .expect("blank input should be accepted");

    assert_eq!(form.validate(), Err(ValidationError::MissingFields));
}

#[rstest]
#[case::credit_score(FormField::CreditScore, "Credit score must be between 300 and 850.")]
#[case::loan_amount(FormField::LoanAmount, "Amounts must be positive.")]
#[case::annual_income(FormField::AnnualIncome, "Amounts must be positive.")]
fn zero_is_a_value_not_a_blank(#[case] field: FormField, #[case] expected: &str) {
    let error = form_with(field, "0")
        .validate()
        .expect_err("zero should fail its range check");

    assert_ne!(error, ValidationError::MissingFields);
    assert_eq!(error.to_string(), expected);
}

#[test]
fn valid_draft_yields_typed_fields() {
    let fields = valid_form().validate().expect("valid draft should pass");

    assert_eq!(
        fields,
        MortgageFields {
            credit_score: 720,
            loan_amount: 250_000.0,
            property_value: 400_000.0,
            annual_income: 95_000.0,
            debt_amount: 12_000.0,
            loan_type: LoanType::Fixed,
            property_type: PropertyType::SingleFamily,
        }
    );
}

#[test]
fn unknown_enumerated_value_leaves_draft_unchanged() {
    let mut form = valid_form();
    let before = form.draft().clone();

    let result = form.on_field_change(FormField::LoanType, "balloon");

    assert!(matches!(result, Err(DraftError::UnknownOption(_))));
    assert_eq!(form.draft(), &before);
}

#[test]
fn begin_edit_copies_record_fields() {
    let mut form = FormController::new();
    let record = sample_record(9, "BBB");

    form.begin_edit(&record);

    assert_eq!(form.editing_id(), Some(MortgageId::new(9)));
    assert_eq!(form.validate(), Ok(record.fields));
}

#[test]
fn cancel_edit_discards_draft() {
    let mut form = FormController::new();
    form.begin_edit(&sample_record(9, "BBB"));

    form.cancel_edit();

    assert!(!form.is_editing());
    assert_eq!(form.draft(), &MortgageDraft::default());
}

#[rstest]
#[tokio::test]
async fn submit_without_edit_calls_create(mut filled_form: FormController) {
    let mut gateway = MockMortgageGateway::new();
    gateway
        .expect_create_mortgage()
        .withf(|fields| fields.credit_score == 720)
        .times(1)
        .returning(|_| {
            Ok(MutationReceipt {
                id: Some(MortgageId::new(1)),
                rating: Some(Rating::new("AAA")),
                ..MutationReceipt::default()
            })
        });
    gateway.expect_update_mortgage().never();

    let receipt = filled_form
        .submit(&gateway)
        .await
        .expect("create should succeed");

    assert_eq!(receipt.id, Some(MortgageId::new(1)));
    assert_eq!(filled_form.draft(), &MortgageDraft::default());
}

#[tokio::test]
async fn submit_after_begin_edit_calls_update_with_original_id() {
    let mut form = FormController::new();
    form.begin_edit(&sample_record(42, "C"));
    form.on_field_change(FormField::CreditScore, "800")
        .expect("credit score should accept input");

    let mut gateway = MockMortgageGateway::new();
    gateway.expect_create_mortgage().never();
    gateway
        .expect_update_mortgage()
        .withf(|id, fields| *id == MortgageId::new(42) && fields.credit_score == 800)
        .times(1)
        .returning(|_, _| Ok(MutationReceipt::default()));

    form.submit(&gateway).await.expect("update should succeed");

    assert!(!form.is_editing());
    assert_eq!(form.draft(), &MortgageDraft::default());
}

#[tokio::test]
async fn invalid_draft_never_reaches_gateway() {
    let mut form = form_with(FormField::CreditScore, "299");
    let mut gateway = MockMortgageGateway::new();
    gateway.expect_create_mortgage().never();
    gateway.expect_update_mortgage().never();

    let result = form.submit(&gateway).await;

    assert_eq!(
        result,
        Err(SubmitError::Invalid(ValidationError::CreditScoreOutOfRange))
    );
}

#[rstest]
#[case::server_message(
    Some("Failed to add mortgage: duplicate entry"),
    "Failed to add mortgage: duplicate entry"
)]
#[case::no_server_message(None, CREATE_FAILED)]
#[tokio::test]
async fn failed_create_keeps_draft_and_reports_message(
    #[case] server_message: Option<&'static str>,
    #[case] expected: &str,
) {
    let mut form = valid_form();
    let before = form.draft().clone();
    let mut gateway = MockMortgageGateway::new();
    gateway.expect_create_mortgage().times(1).returning(move |_| {
        Err(ApiError::Server {
            operation: "create mortgage".to_owned(),
            status: 500,
            message: server_message.map(ToOwned::to_owned),
        })
    });

    let error = form
        .submit(&gateway)
        .await
        .expect_err("create should fail");

    assert_eq!(error.to_string(), expected);
    assert_eq!(form.draft(), &before);
}

#[tokio::test]
async fn failed_update_stays_in_edit_mode() {
    let mut form = FormController::new();
    form.begin_edit(&sample_record(5, "AAA"));
    let mut gateway = MockMortgageGateway::new();
    gateway.expect_update_mortgage().times(1).returning(|_, _| {
        Err(ApiError::Network {
            message: "connection refused".to_owned(),
        })
    });

    let error = form
        .submit(&gateway)
        .await
        .expect_err("update should fail");

    assert_eq!(error.to_string(), UPDATE_FAILED);
    assert_eq!(form.editing_id(), Some(MortgageId::new(5)));
}
