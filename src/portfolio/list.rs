//! Portfolio list state: the fetched records, the aggregate rating, the
//! selected row, and delete confirmation.
//!
//! Local state is only ever replaced wholesale from a [`PortfolioSnapshot`];
//! mutations are followed by a full refetch rather than patched in.

use thiserror::Error;

use crate::api::{ApiError, MortgageGateway, MortgageId, MortgageRecord, PortfolioRating, Rating};

/// Message shown when the record collection cannot be fetched.
pub const FETCH_RECORDS_FAILED: &str = "Failed to fetch mortgages. Please try again.";
/// Message shown when only the portfolio rating cannot be fetched.
pub const FETCH_RATING_FAILED: &str = "Failed to fetch RMBS rating.";
/// Message shown when a delete fails without a service-provided reason.
pub const DELETE_FAILED: &str = "Failed to delete mortgage.";

/// Result of fetching the collection and the aggregate rating.
#[derive(Debug, Clone, PartialEq)]
pub struct PortfolioSnapshot {
    /// Every record, in service order.
    pub records: Vec<MortgageRecord>,
    /// Aggregate rating, or the failure that prevented fetching it.
    pub rating: Result<PortfolioRating, ApiError>,
}

/// Failures of list operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ListError {
    /// The record collection could not be fetched.
    #[error("Failed to fetch mortgages. Please try again.")]
    Fetch(#[source] ApiError),
    /// The delete request failed.
    #[error("{message}")]
    Delete {
        /// User-facing message (service text or generic fallback).
        message: String,
        /// Underlying gateway failure.
        source: ApiError,
    },
}

/// Outcome of answering a delete confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteResolution {
    /// No delete was awaiting confirmation.
    NothingPending,
    /// The user declined; nothing was sent.
    Declined(MortgageId),
    /// The record was deleted and the list refreshed.
    Deleted(MortgageId),
}

/// Fetches the record collection followed by the aggregate rating.
///
/// # Errors
///
/// Returns [`ListError::Fetch`] when the collection cannot be fetched. A
/// rating failure is carried inside the snapshot instead, so records still
/// update.
pub async fn fetch_snapshot(gateway: &dyn MortgageGateway) -> Result<PortfolioSnapshot, ListError> {
    let records = gateway.list_mortgages().await.map_err(|error| {
        tracing::warn!("fetching mortgages failed: {error}");
        ListError::Fetch(error)
    })?;
    let rating = gateway.portfolio_rating().await;
    if let Err(error) = &rating {
        tracing::warn!("fetching RMBS rating failed: {error}");
    }
    Ok(PortfolioSnapshot { records, rating })
}

/// Deletes a record and refetches the portfolio.
///
/// # Errors
///
/// Returns [`ListError::Delete`] when the delete fails (no refetch is
/// attempted) or [`ListError::Fetch`] when the refetch fails.
pub async fn delete_and_refresh(
    gateway: &dyn MortgageGateway,
    id: MortgageId,
) -> Result<PortfolioSnapshot, ListError> {
    gateway
        .delete_mortgage(id)
        .await
        .map_err(|error| ListError::Delete {
            message: error.user_message(DELETE_FAILED),
            source: error,
        })?;
    tracing::info!("deleted mortgage {id}");
    fetch_snapshot(gateway).await
}

/// Records, rating, cursor, and pending delete confirmation.
#[derive(Debug, Clone, Default)]
pub struct PortfolioState {
    records: Vec<MortgageRecord>,
    rating: Rating,
    cursor: usize,
    pending_delete: Option<MortgageId>,
}

impl PortfolioState {
    /// Creates an empty state with an unavailable rating.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a state pre-populated with records.
    #[must_use]
    pub fn with_records(records: Vec<MortgageRecord>) -> Self {
        Self {
            records,
            ..Self::default()
        }
    }

    /// Returns the records from the last successful fetch.
    #[must_use]
    pub fn records(&self) -> &[MortgageRecord] {
        &self.records
    }

    /// Returns the aggregate rating from the last successful fetch.
    #[must_use]
    pub const fn rating(&self) -> &Rating {
        &self.rating
    }

    /// Whether the collection is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the selected row index.
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns the record under the cursor.
    #[must_use]
    pub fn selected(&self) -> Option<&MortgageRecord> {
        self.records.get(self.cursor)
    }

    /// Returns the record with the given id.
    #[must_use]
    pub fn find(&self, id: MortgageId) -> Option<&MortgageRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    /// Moves the cursor up one row.
    pub const fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Moves the cursor down one row, stopping at the last record.
    pub const fn cursor_down(&mut self) {
        if self.cursor.saturating_add(1) < self.records.len() {
            self.cursor = self.cursor.saturating_add(1);
        }
    }

    /// Moves the cursor to the first row.
    pub const fn cursor_home(&mut self) {
        self.cursor = 0;
    }

    /// Moves the cursor to the last row.
    pub const fn cursor_end(&mut self) {
        self.cursor = self.records.len().saturating_sub(1);
    }

    /// Replaces records (and the rating when it was fetched) with a
    /// snapshot.
    ///
    /// The cursor follows the previously selected record when it survives,
    /// and is clamped otherwise. Returns a warning message when the rating
    /// could not be fetched.
    pub fn apply_snapshot(&mut self, snapshot: PortfolioSnapshot) -> Option<&'static str> {
        let selected_id = self.selected().map(|record| record.id);

        self.records = snapshot.records;
        self.cursor = selected_id
            .and_then(|id| self.records.iter().position(|record| record.id == id))
            .unwrap_or(self.cursor)
            .min(self.records.len().saturating_sub(1));

        if self
            .pending_delete
            .is_some_and(|id| self.find(id).is_none())
        {
            self.pending_delete = None;
        }

        match snapshot.rating {
            Ok(portfolio) => {
                self.rating = portfolio.rating;
                None
            }
            Err(_) => Some(FETCH_RATING_FAILED),
        }
    }

    /// Asks for confirmation before deleting `id`.
    ///
    /// Returns `false` when no record with that id is loaded.
    pub fn request_delete(&mut self, id: MortgageId) -> bool {
        if self.find(id).is_none() {
            return false;
        }
        self.pending_delete = Some(id);
        true
    }

    /// Returns the id awaiting delete confirmation.
    #[must_use]
    pub const fn pending_delete(&self) -> Option<MortgageId> {
        self.pending_delete
    }

    /// Consumes the pending confirmation, returning the id to delete only
    /// when `confirmed` is true.
    pub const fn take_confirmed_delete(&mut self, confirmed: bool) -> Option<MortgageId> {
        let pending = self.pending_delete.take();
        if confirmed { pending } else { None }
    }

    /// Fetches the collection and rating and replaces local state.
    ///
    /// Returns the rating warning, if any.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::Fetch`] and leaves records untouched when the
    /// collection cannot be fetched.
    pub async fn refresh(
        &mut self,
        gateway: &dyn MortgageGateway,
    ) -> Result<Option<&'static str>, ListError> {
        let snapshot = fetch_snapshot(gateway).await?;
        Ok(self.apply_snapshot(snapshot))
    }

    /// Answers the pending delete confirmation.
    ///
    /// Declining clears the confirmation without touching the network.
    /// Confirming deletes the record and refreshes the list.
    ///
    /// # Errors
    ///
    /// Returns [`ListError`] when the delete or the refetch fails; local
    /// records are left as they were.
    pub async fn resolve_delete(
        &mut self,
        gateway: &dyn MortgageGateway,
        confirmed: bool,
    ) -> Result<DeleteResolution, ListError> {
        let Some(pending) = self.pending_delete else {
            return Ok(DeleteResolution::NothingPending);
        };
        let Some(id) = self.take_confirmed_delete(confirmed) else {
            return Ok(DeleteResolution::Declined(pending));
        };

        let snapshot = delete_and_refresh(gateway, id).await?;
        // Rating failures after a successful delete are not fatal here.
        let _warning = self.apply_snapshot(snapshot);
        Ok(DeleteResolution::Deleted(id))
    }
}

#[cfg(test)]
#[path = "list_tests.rs"]
mod tests;
