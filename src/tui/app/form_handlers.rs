//! Form editing and create/update submission handlers.
//!
//! Typed characters go into the raw input buffers first and are then handed
//! to the form controller, which coerces them into the draft. Submission
//! validates locally, then runs the request and the follow-up refetch as one
//! command.

use std::any::Any;
use std::sync::Arc;

use bubbletea_rs::Cmd;

use super::{Focus, MortgageApp};
use crate::api::{ApiError, MortgageGateway, MutationReceipt};
use crate::portfolio::list::fetch_snapshot;
use crate::portfolio::{
    FormField, ListError, PortfolioSnapshot, RequestKind, RequestTicket, Submission,
    SubmissionTarget,
};
use crate::telemetry::TelemetryEvent;
use crate::tui::messages::AppMsg;

impl MortgageApp {
    /// Dispatches form messages to their handlers.
    pub(super) fn handle_form_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::StartNew => self.handle_start_new(),
            AppMsg::EditSelected => self.handle_edit_selected(),
            AppMsg::FocusNextField => {
                self.inputs.focus_next();
                None
            }
            AppMsg::FocusPreviousField => {
                self.inputs.focus_previous();
                None
            }
            AppMsg::InsertChar(ch) => self.handle_insert_char(*ch),
            AppMsg::DeleteChar => self.handle_delete_char(),
            AppMsg::ToggleOption => self.handle_toggle_option(),
            AppMsg::SubmitForm => self.handle_submit(),
            AppMsg::CancelForm => self.handle_cancel_form(),
            _ => {
                debug_assert!(false, "non-form message routed to handle_form_msg");
                None
            }
        }
    }

    /// Focuses the form for a new record, abandoning any edit in progress.
    fn handle_start_new(&mut self) -> Option<Cmd> {
        if self.form.is_editing() {
            self.form.cancel_edit();
            self.inputs.reset();
        }
        self.focus = Focus::Form;
        self.error = None;
        None
    }

    /// Loads the selected record into the form.
    fn handle_edit_selected(&mut self) -> Option<Cmd> {
        let record = self.portfolio.selected()?.clone();
        self.form.begin_edit(&record);
        self.inputs.load(self.form.draft());
        self.inputs.focus(FormField::CreditScore);
        self.focus = Focus::Form;
        self.error = None;
        self.notice = None;
        None
    }

    fn handle_insert_char(&mut self, ch: char) -> Option<Cmd> {
        let field = self.inputs.focused();
        let text = self.inputs.push_char(ch)?.to_owned();
        self.apply_field_change(field, &text);
        None
    }

    fn handle_delete_char(&mut self) -> Option<Cmd> {
        let field = self.inputs.focused();
        let text = self.inputs.pop_char()?.to_owned();
        self.apply_field_change(field, &text);
        None
    }

    /// Flips the focused enumerated field between its two values.
    fn handle_toggle_option(&mut self) -> Option<Cmd> {
        let field = self.inputs.focused();
        let draft = self.form.draft();
        let value = match field {
            FormField::LoanType => draft.loan_type.toggled().as_str(),
            FormField::PropertyType => draft.property_type.toggled().as_str(),
            _ => return None,
        };
        self.apply_field_change(field, value);
        None
    }

    fn apply_field_change(&mut self, field: FormField, raw: &str) {
        if let Err(error) = self.form.on_field_change(field, raw) {
            self.error = Some(error.to_string());
        }
    }

    /// Cancels an edit, or leaves the form when creating.
    fn handle_cancel_form(&mut self) -> Option<Cmd> {
        if self.form.is_editing() {
            self.form.cancel_edit();
            self.inputs.reset();
            self.error = None;
        }
        self.focus = Focus::List;
        None
    }

    /// Validates the draft and issues the create or update request.
    fn handle_submit(&mut self) -> Option<Cmd> {
        let submission = match self.form.prepare_submission() {
            Ok(submission) => submission,
            Err(error) => {
                self.error = Some(error.to_string());
                return None;
            }
        };
        let gateway = self.require_gateway()?;

        let ticket = self.in_flight.begin(RequestKind::Submit);
        self.error = None;
        self.notice = None;
        Some(submit_cmd(gateway, ticket, submission))
    }

    /// Applies the result of a create or update.
    pub(super) fn handle_submit_finished(
        &mut self,
        ticket: RequestTicket,
        submission: &Submission,
        result: &Result<MutationReceipt, ApiError>,
        refreshed: Option<&Result<PortfolioSnapshot, ListError>>,
    ) -> Option<Cmd> {
        if !self.accept_response(ticket) {
            return None;
        }

        let operation = operation_label(submission.target());
        match result {
            Ok(receipt) => {
                self.form.submission_succeeded(submission);
                self.inputs.reset();
                self.focus = Focus::List;
                self.error = None;
                self.notice = Some(success_notice(submission.target(), receipt));
                self.record_telemetry(TelemetryEvent::MutationCompleted {
                    operation: operation.to_owned(),
                    succeeded: true,
                });
                if let Some(snapshot) = refreshed {
                    self.apply_refresh_result(snapshot);
                }
            }
            Err(error) => {
                self.error = Some(self.form.submission_failed(submission, error));
                self.record_telemetry(TelemetryEvent::MutationCompleted {
                    operation: operation.to_owned(),
                    succeeded: false,
                });
            }
        }
        None
    }
}

const fn operation_label(target: SubmissionTarget) -> &'static str {
    match target {
        SubmissionTarget::Create => "create",
        SubmissionTarget::Update(_) => "update",
    }
}

fn success_notice(target: SubmissionTarget, receipt: &MutationReceipt) -> String {
    if let Some(message) = receipt.message.as_deref() {
        return message.to_owned();
    }
    match target {
        SubmissionTarget::Create => receipt.id.map_or_else(
            || "Mortgage added.".to_owned(),
            |id| format!("Mortgage #{id} added."),
        ),
        SubmissionTarget::Update(id) => format!("Mortgage #{id} updated."),
    }
}

/// Sends `submission` and refetches the portfolio when it succeeds.
fn submit_cmd(
    gateway: Arc<dyn MortgageGateway>,
    ticket: RequestTicket,
    submission: Submission,
) -> Cmd {
    Box::pin(async move {
        let result = submission.send(gateway.as_ref()).await;
        let refreshed = match result {
            Ok(_) => Some(fetch_snapshot(gateway.as_ref()).await),
            Err(_) => None,
        };
        Some(Box::new(AppMsg::SubmitFinished {
            ticket,
            submission,
            result,
            refreshed,
        }) as Box<dyn Any + Send>)
    })
}
