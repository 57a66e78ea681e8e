//! Behavioural tests for creating and updating mortgages through the form.

mod support;

use rmbs_desk::api::models::test_support::sample_record;
use rmbs_desk::api::MutationReceipt;
use rmbs_desk::portfolio::form::Entry;
use rmbs_desk::portfolio::{FormController, FormField, MortgageDraft, SubmitError};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};
use serde_json::json;
use support::error_mock;
use support::runtime::{ServiceHarness, ensure_harness};
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

#[derive(ScenarioState, Default)]
struct FormState {
    harness: Slot<ServiceHarness>,
    controller: Slot<FormController>,
    outcome: Slot<Result<MutationReceipt, SubmitError>>,
}

#[fixture]
fn form_state() -> FormState {
    FormState::default()
}

fn harness(form_state: &FormState) -> ServiceHarness {
    ensure_harness(&form_state.harness)
        .unwrap_or_else(|error| panic!("failed to start mock service: {error}"))
}

fn controller(form_state: &FormState) -> FormController {
    form_state.controller.get().unwrap_or_default()
}

fn set_field(controller: &mut FormController, field: FormField, raw: &str) {
    controller
        .on_field_change(field, raw)
        .unwrap_or_else(|error| panic!("{} rejected {raw}: {error}", field.name()));
}

#[given("a mortgage service that accepts new mortgages")]
fn accepting_service(form_state: &FormState) {
    harness(form_state).mount(
        Mock::given(method("POST"))
            .and(path("/add_mortgage"))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "message": "Mortgage added successfully",
                "id": 1
            }))),
    );
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "rstest-bdd passes owned step arguments"
)]
#[given("a mortgage service that rejects new mortgages with {message}")]
fn rejecting_service(form_state: &FormState, message: String) {
    harness(form_state).mount(error_mock(
        "POST",
        "/add_mortgage",
        400,
        message.trim_matches('"'),
    ));
}

#[given("a mortgage service that accepts updates to mortgage {id:u64}")]
fn accepting_updates(form_state: &FormState, id: u64) {
    harness(form_state).mount(
        Mock::given(method("PUT"))
            .and(path(format!("/update_mortgage/{id}")))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "message": "Mortgage updated successfully" })),
            ),
    );
}

#[given("a form filled with credit score {score:u32}")]
fn fill_form(form_state: &FormState, score: u32) {
    let mut form = controller(form_state);
    set_field(&mut form, FormField::CreditScore, &score.to_string());
    set_field(&mut form, FormField::LoanAmount, "250000");
    set_field(&mut form, FormField::PropertyValue, "400000");
    set_field(&mut form, FormField::AnnualIncome, "95000");
    set_field(&mut form, FormField::DebtAmount, "12000");
    set_field(&mut form, FormField::LoanType, "fixed");
    set_field(&mut form, FormField::PropertyType, "condo");
    form_state.controller.set(form);
}

#[given("the form is editing mortgage {id:u64}")]
fn begin_editing(form_state: &FormState, id: u64) {
    let mut form = controller(form_state);
    form.begin_edit(&sample_record(id, "AAA"));
    form_state.controller.set(form);
}

#[given("the credit score is changed to {score:u32}")]
fn change_credit_score(form_state: &FormState, score: u32) {
    let mut form = controller(form_state);
    set_field(&mut form, FormField::CreditScore, &score.to_string());
    form_state.controller.set(form);
}

#[when("the form is submitted")]
fn submit_form(form_state: &FormState) {
    let service = harness(form_state);
    let gateway = service
        .gateway()
        .unwrap_or_else(|error| panic!("gateway should build: {error}"));
    let mut form = controller(form_state);

    let outcome = service.block_on(form.submit(&gateway));

    form_state.controller.set(form);
    form_state.outcome.set(outcome);
}

#[then("the service received {count:usize} create calls")]
fn assert_create_calls(form_state: &FormState, count: usize) {
    assert_eq!(harness(form_state).request_count("POST", "/add_mortgage"), count);
}

#[then("the service received {count:usize} update calls")]
fn assert_update_calls(form_state: &FormState, count: usize) {
    assert_eq!(harness(form_state).method_count("PUT"), count);
}

#[then("the service received {count:usize} update calls for mortgage {id:u64}")]
fn assert_update_calls_for(form_state: &FormState, count: usize, id: u64) {
    assert_eq!(
        harness(form_state).request_count("PUT", &format!("/update_mortgage/{id}")),
        count
    );
}

#[then("the form is reset")]
fn assert_form_reset(form_state: &FormState) {
    let form = controller(form_state);
    assert!(
        matches!(form_state.outcome.get(), Some(Ok(_))),
        "submission should succeed"
    );
    assert_eq!(form.draft(), &MortgageDraft::default());
    assert!(!form.is_editing());
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "rstest-bdd passes owned step arguments"
)]
#[then("the submission fails with {message}")]
fn assert_submission_failed(form_state: &FormState, message: String) {
    let outcome = form_state
        .outcome
        .get()
        .unwrap_or_else(|| panic!("form was not submitted"));
    let Err(error) = outcome else {
        panic!("submission should fail");
    };
    assert_eq!(error.to_string(), message.trim_matches('"'));
}

#[then("the draft credit score is {score:i64}")]
fn assert_draft_kept(form_state: &FormState, score: i64) {
    assert_eq!(controller(form_state).draft().credit_score, Entry::Value(score));
}

#[then("the form is no longer editing")]
fn assert_not_editing(form_state: &FormState) {
    assert!(
        matches!(form_state.outcome.get(), Some(Ok(_))),
        "update should succeed"
    );
    assert!(!controller(form_state).is_editing());
}

#[scenario(path = "tests/features/mortgage_form.feature", index = 0)]
fn submit_new_mortgage(form_state: FormState) {
    let _ = form_state;
}

#[scenario(path = "tests/features/mortgage_form.feature", index = 1)]
fn rejected_mortgage_keeps_draft(form_state: FormState) {
    let _ = form_state;
}

#[scenario(path = "tests/features/mortgage_form.feature", index = 2)]
fn out_of_range_credit_score(form_state: FormState) {
    let _ = form_state;
}

#[scenario(path = "tests/features/mortgage_form.feature", index = 3)]
fn edit_updates_in_place(form_state: FormState) {
    let _ = form_state;
}
