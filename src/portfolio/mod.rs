//! Client-side mortgage portfolio logic.
//!
//! - [`form`]: draft state, validation, and create/update submission
//! - [`list`]: fetched records, aggregate rating, and delete confirmation
//! - [`inflight`]: request tickets for discarding stale responses
//! - [`badge`]: badge tones keyed by rating value

pub mod badge;
pub mod form;
pub mod inflight;
pub mod list;

pub use badge::{BadgeTone, portfolio_tone, record_tone};
pub use form::{
    DraftError, FormController, FormField, MortgageDraft, Submission, SubmissionTarget,
    SubmitError, ValidationError,
};
pub use inflight::{InFlightTracker, RequestKind, RequestTicket};
pub use list::{DeleteResolution, ListError, PortfolioSnapshot, PortfolioState};
