//! Message types for the TUI update loop.
//!
//! This module defines all message types that can be sent to the application's
//! update function. Messages represent user actions, async command results,
//! and system events.

use crate::api::{ApiError, MortgageId, MutationReceipt};
use crate::portfolio::{ListError, PortfolioSnapshot, RequestTicket, Submission};

/// Messages for the mortgage portfolio TUI application.
#[derive(Debug, Clone)]
pub enum AppMsg {
    // Navigation
    /// Move cursor up one row.
    CursorUp,
    /// Move cursor down one row.
    CursorDown,
    /// Move cursor to the first row.
    Home,
    /// Move cursor to the last row.
    End,

    // Form editing
    /// Focus the form for a new record.
    StartNew,
    /// Load the selected record into the form for editing.
    EditSelected,
    /// Focus the next form field.
    FocusNextField,
    /// Focus the previous form field.
    FocusPreviousField,
    /// Type a character into the focused field.
    InsertChar(char),
    /// Delete the last character of the focused field.
    DeleteChar,
    /// Flip the value of the focused enumerated field.
    ToggleOption,
    /// Validate and submit the draft.
    SubmitForm,
    /// Cancel the edit, or leave the form when not editing.
    CancelForm,

    // Delete flow
    /// Ask to delete the selected record.
    DeleteRequested,
    /// Answer the pending delete confirmation.
    ConfirmDelete(bool),

    // Data loading
    /// Refetch records and the portfolio rating.
    RefreshRequested,
    /// A refresh finished.
    RefreshFinished {
        /// Ticket the request was issued under.
        ticket: RequestTicket,
        /// Time from request start to response, in milliseconds.
        latency_ms: u64,
        /// Fetched snapshot or the failure.
        result: Result<PortfolioSnapshot, ListError>,
    },
    /// A create or update finished.
    SubmitFinished {
        /// Ticket the request was issued under.
        ticket: RequestTicket,
        /// The submission that was sent.
        submission: Submission,
        /// Service receipt or the failure.
        result: Result<MutationReceipt, ApiError>,
        /// Refetch issued after a successful mutation.
        refreshed: Option<Result<PortfolioSnapshot, ListError>>,
    },
    /// A delete finished.
    DeleteFinished {
        /// Ticket the request was issued under.
        ticket: RequestTicket,
        /// Record that was deleted.
        id: MortgageId,
        /// Refetched snapshot or the failure.
        result: Result<PortfolioSnapshot, ListError>,
    },

    // Application lifecycle
    /// Synthetic startup event that triggers the first fetch.
    Initialized,
    /// Quit the application.
    Quit,
    /// Toggle help overlay.
    ToggleHelp,

    // Window events
    /// Terminal window was resized.
    WindowResized {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },
}

impl AppMsg {
    /// Whether the message moves the table cursor.
    #[must_use]
    pub const fn is_navigation(&self) -> bool {
        matches!(
            self,
            Self::CursorUp | Self::CursorDown | Self::Home | Self::End
        )
    }

    /// Whether the message edits or submits the form.
    #[must_use]
    pub const fn is_form(&self) -> bool {
        matches!(
            self,
            Self::StartNew
                | Self::EditSelected
                | Self::FocusNextField
                | Self::FocusPreviousField
                | Self::InsertChar(_)
                | Self::DeleteChar
                | Self::ToggleOption
                | Self::SubmitForm
                | Self::CancelForm
        )
    }

    /// Whether the message belongs to the delete confirmation flow.
    #[must_use]
    pub const fn is_delete(&self) -> bool {
        matches!(self, Self::DeleteRequested | Self::ConfirmDelete(_))
    }

    /// Whether the message requests or delivers network data.
    #[must_use]
    pub const fn is_data(&self) -> bool {
        matches!(
            self,
            Self::RefreshRequested
                | Self::RefreshFinished { .. }
                | Self::SubmitFinished { .. }
                | Self::DeleteFinished { .. }
        )
    }

    /// Whether the message is a user action blocked while a request is in
    /// flight.
    #[must_use]
    pub const fn is_blocked_while_busy(&self) -> bool {
        self.is_navigation() || self.is_form() || self.is_delete()
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::AppMsg;

    #[rstest]
    #[case::cursor(AppMsg::CursorDown, true)]
    #[case::typing(AppMsg::InsertChar('7'), true)]
    #[case::confirm(AppMsg::ConfirmDelete(true), true)]
    #[case::quit(AppMsg::Quit, false)]
    #[case::help(AppMsg::ToggleHelp, false)]
    #[case::refresh(AppMsg::RefreshRequested, false)]
    fn user_actions_are_blocked_while_busy(#[case] msg: AppMsg, #[case] blocked: bool) {
        assert_eq!(msg.is_blocked_while_busy(), blocked);
    }

    #[test]
    fn categories_do_not_overlap() {
        let msg = AppMsg::SubmitForm;

        assert!(msg.is_form());
        assert!(!msg.is_navigation());
        assert!(!msg.is_delete());
        assert!(!msg.is_data());
    }
}
