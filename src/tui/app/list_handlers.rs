//! Refresh and delete handlers for the portfolio TUI.
//!
//! Every fetch replaces the portfolio wholesale. Responses are matched
//! against the in-flight ticket first, so a response for a superseded
//! request never touches state.

use std::any::Any;
use std::sync::Arc;
use std::time::Instant;

use bubbletea_rs::Cmd;

use super::MortgageApp;
use crate::api::{MortgageGateway, MortgageId};
use crate::portfolio::list::{delete_and_refresh, fetch_snapshot};
use crate::portfolio::{ListError, PortfolioSnapshot, RequestKind, RequestTicket};
use crate::telemetry::TelemetryEvent;
use crate::tui::messages::AppMsg;

impl MortgageApp {
    /// Dispatches data loading messages to their handlers.
    pub(super) fn handle_data_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::RefreshRequested => self.handle_refresh_requested(),
            AppMsg::RefreshFinished {
                ticket,
                latency_ms,
                result,
            } => self.handle_refresh_finished(*ticket, *latency_ms, result),
            AppMsg::SubmitFinished {
                ticket,
                submission,
                result,
                refreshed,
            } => self.handle_submit_finished(*ticket, submission, result, refreshed.as_ref()),
            AppMsg::DeleteFinished { ticket, id, result } => {
                self.handle_delete_finished(*ticket, *id, result)
            }
            _ => {
                // Unreachable: caller filters to data messages.
                None
            }
        }
    }

    /// Dispatches delete confirmation messages to their handlers.
    pub(super) fn handle_delete_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::DeleteRequested => self.handle_delete_requested(),
            AppMsg::ConfirmDelete(confirmed) => self.handle_confirm_delete(*confirmed),
            _ => {
                debug_assert!(false, "non-delete message routed to handle_delete_msg");
                None
            }
        }
    }

    /// Starts a refresh.
    ///
    /// While another refresh is in flight the new one supersedes it; any
    /// other operation in flight makes this a no-op.
    fn handle_refresh_requested(&mut self) -> Option<Cmd> {
        match self.in_flight.current_kind() {
            None | Some(RequestKind::Refresh) => self.start_refresh(),
            Some(kind) => {
                tracing::debug!("refresh ignored while {} is in flight", kind.label());
                None
            }
        }
    }

    /// Issues a refresh command under a new ticket.
    pub(super) fn start_refresh(&mut self) -> Option<Cmd> {
        let gateway = self.require_gateway()?;
        let ticket = self.in_flight.begin(RequestKind::Refresh);
        self.error = None;
        Some(refresh_cmd(gateway, ticket))
    }

    fn handle_refresh_finished(
        &mut self,
        ticket: RequestTicket,
        latency_ms: u64,
        result: &Result<PortfolioSnapshot, ListError>,
    ) -> Option<Cmd> {
        if !self.accept_response(ticket) {
            return None;
        }
        if let Ok(snapshot) = result {
            self.record_telemetry(TelemetryEvent::PortfolioRefreshed {
                record_count: snapshot.records.len(),
                latency_ms,
            });
        }
        self.apply_refresh_result(result);
        None
    }

    /// Replaces the portfolio from a fetch result, or reports the failure
    /// and keeps the previous records.
    pub(super) fn apply_refresh_result(&mut self, result: &Result<PortfolioSnapshot, ListError>) {
        match result {
            Ok(snapshot) => {
                let warning = self.portfolio.apply_snapshot(snapshot.clone());
                self.error = warning.map(ToOwned::to_owned);
                self.adjust_scroll_to_cursor();
            }
            Err(error) => {
                self.error = Some(error.to_string());
            }
        }
    }

    /// Asks for confirmation before deleting the selected record.
    fn handle_delete_requested(&mut self) -> Option<Cmd> {
        let id = self.portfolio.selected()?.id;
        if self.portfolio.request_delete(id) {
            self.error = None;
            self.notice = None;
        }
        None
    }

    /// Answers the confirmation prompt. Declining never reaches the network.
    fn handle_confirm_delete(&mut self, confirmed: bool) -> Option<Cmd> {
        let pending = self.portfolio.pending_delete();
        let Some(id) = self.portfolio.take_confirmed_delete(confirmed) else {
            if let Some(declined) = pending {
                tracing::debug!("delete of mortgage {declined} declined");
            }
            return None;
        };

        let gateway = self.require_gateway()?;
        let ticket = self.in_flight.begin(RequestKind::Delete);
        self.error = None;
        Some(delete_cmd(gateway, ticket, id))
    }

    fn handle_delete_finished(
        &mut self,
        ticket: RequestTicket,
        id: MortgageId,
        result: &Result<PortfolioSnapshot, ListError>,
    ) -> Option<Cmd> {
        if !self.accept_response(ticket) {
            return None;
        }

        let succeeded = !matches!(result, Err(ListError::Delete { .. }));
        self.record_telemetry(TelemetryEvent::MutationCompleted {
            operation: RequestKind::Delete.label().to_owned(),
            succeeded,
        });
        if succeeded {
            self.notice = Some(format!("Mortgage #{id} deleted."));
        }
        self.apply_refresh_result(result);
        None
    }

    /// Marks `ticket` finished, recording telemetry when it is stale.
    ///
    /// Returns `false` when the response must be discarded.
    pub(super) fn accept_response(&mut self, ticket: RequestTicket) -> bool {
        if self.in_flight.finish(ticket) {
            return true;
        }
        self.record_telemetry(TelemetryEvent::StaleResponseDiscarded {
            request: ticket.kind().label().to_owned(),
        });
        false
    }
}

fn refresh_cmd(gateway: Arc<dyn MortgageGateway>, ticket: RequestTicket) -> Cmd {
    Box::pin(async move {
        let start = Instant::now();
        let result = fetch_snapshot(gateway.as_ref()).await;
        let latency_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
        Some(Box::new(AppMsg::RefreshFinished {
            ticket,
            latency_ms,
            result,
        }) as Box<dyn Any + Send>)
    })
}

fn delete_cmd(gateway: Arc<dyn MortgageGateway>, ticket: RequestTicket, id: MortgageId) -> Cmd {
    Box::pin(async move {
        let result = delete_and_refresh(gateway.as_ref(), id).await;
        Some(Box::new(AppMsg::DeleteFinished { ticket, id, result }) as Box<dyn Any + Send>)
    })
}
