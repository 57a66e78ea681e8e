//! Form controller for creating and editing mortgage records.
//!
//! The controller owns the draft and the edit target. Submission is split
//! into three steps so an event loop can run the network call without
//! holding the controller: [`FormController::prepare_submission`] validates
//! and builds a [`Submission`], [`Submission::send`] performs the request,
//! and [`FormController::submission_succeeded`] or
//! [`FormController::submission_failed`] applies the result.
//! [`FormController::submit`] composes the three for callers that can await
//! in place.

use thiserror::Error;

use crate::api::{
    ApiError, MortgageFields, MortgageGateway, MortgageId, MortgageRecord, MutationReceipt,
};

mod draft;

pub use draft::{
    DraftError, Entry, FormField, MAX_CREDIT_SCORE, MIN_CREDIT_SCORE, MortgageDraft,
    ValidationError,
};

/// Message shown when a create fails without a service-provided reason.
pub const CREATE_FAILED: &str = "Failed to add mortgage.";
/// Message shown when an update fails without a service-provided reason.
pub const UPDATE_FAILED: &str = "Failed to update mortgage.";

/// Which request a submission issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionTarget {
    /// Create a new record.
    Create,
    /// Replace the fields of an existing record.
    Update(MortgageId),
}

/// A validated request ready to send.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    target: SubmissionTarget,
    fields: MortgageFields,
}

impl Submission {
    /// Returns the request kind.
    #[must_use]
    pub const fn target(&self) -> SubmissionTarget {
        self.target
    }

    /// Returns the validated fields.
    #[must_use]
    pub const fn fields(&self) -> &MortgageFields {
        &self.fields
    }

    /// Message used when the service gives no reason for a failure.
    #[must_use]
    pub const fn failure_fallback(&self) -> &'static str {
        match self.target {
            SubmissionTarget::Create => CREATE_FAILED,
            SubmissionTarget::Update(_) => UPDATE_FAILED,
        }
    }

    /// Sends the submission through the gateway.
    ///
    /// # Errors
    ///
    /// Returns the gateway's [`ApiError`] unchanged.
    pub async fn send(&self, gateway: &dyn MortgageGateway) -> Result<MutationReceipt, ApiError> {
        match self.target {
            SubmissionTarget::Create => gateway.create_mortgage(&self.fields).await,
            SubmissionTarget::Update(id) => gateway.update_mortgage(id, &self.fields).await,
        }
    }
}

/// Failure of a complete submit cycle.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SubmitError {
    /// The draft failed validation; nothing was sent.
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    /// The service rejected the request or could not be reached.
    #[error("{message}")]
    Rejected {
        /// User-facing message (service text or generic fallback).
        message: String,
        /// Underlying gateway failure.
        source: ApiError,
    },
}

/// Holds the draft record and the current edit target.
#[derive(Debug, Clone, Default)]
pub struct FormController {
    draft: MortgageDraft,
    editing: Option<MortgageId>,
}

impl FormController {
    /// Creates a controller with an empty draft and no edit in progress.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current draft.
    #[must_use]
    pub const fn draft(&self) -> &MortgageDraft {
        &self.draft
    }

    /// Returns the id being edited, if any.
    #[must_use]
    pub const fn editing_id(&self) -> Option<MortgageId> {
        self.editing
    }

    /// Whether an existing record is being edited.
    #[must_use]
    pub const fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    /// Applies raw input to a draft field.
    ///
    /// # Errors
    ///
    /// Returns [`DraftError`] when an enumerated field receives an unknown
    /// value.
    pub fn on_field_change(&mut self, field: FormField, raw: &str) -> Result<(), DraftError> {
        self.draft.set_field(field, raw)
    }

    /// Validates the draft without sending anything.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] that applies.
    pub fn validate(&self) -> Result<MortgageFields, ValidationError> {
        self.draft.validate()
    }

    /// Copies a record into the draft and enters edit mode for its id.
    pub fn begin_edit(&mut self, record: &MortgageRecord) {
        self.draft = MortgageDraft::from_fields(&record.fields);
        self.editing = Some(record.id);
    }

    /// Discards the draft and leaves edit mode.
    pub fn cancel_edit(&mut self) {
        self.reset();
    }

    fn reset(&mut self) {
        self.draft = MortgageDraft::default();
        self.editing = None;
    }

    /// Validates the draft and builds the request to send.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] when the draft is incomplete or out of
    /// range; no request is built in that case.
    pub fn prepare_submission(&self) -> Result<Submission, ValidationError> {
        let fields = self.draft.validate()?;
        let target = self
            .editing
            .map_or(SubmissionTarget::Create, SubmissionTarget::Update);
        Ok(Submission { target, fields })
    }

    /// Clears the draft and edit mode after the service accepted a
    /// submission.
    pub fn submission_succeeded(&mut self, submission: &Submission) {
        tracing::info!("mortgage submission accepted: {:?}", submission.target());
        self.reset();
    }

    /// Leaves the draft intact and returns the message to show.
    #[must_use]
    pub fn submission_failed(&self, submission: &Submission, error: &ApiError) -> String {
        tracing::warn!("mortgage submission failed: {error}");
        error.user_message(submission.failure_fallback())
    }

    /// Validates, sends, and applies the result of a submission.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError::Invalid`] without calling the gateway when
    /// validation fails, or [`SubmitError::Rejected`] with the draft left
    /// intact when the gateway call fails.
    pub async fn submit(
        &mut self,
        gateway: &dyn MortgageGateway,
    ) -> Result<MutationReceipt, SubmitError> {
        let submission = self.prepare_submission()?;
        match submission.send(gateway).await {
            Ok(receipt) => {
                self.submission_succeeded(&submission);
                Ok(receipt)
            }
            Err(error) => Err(SubmitError::Rejected {
                message: self.submission_failed(&submission, &error),
                source: error,
            }),
        }
    }
}

#[cfg(test)]
mod tests;
