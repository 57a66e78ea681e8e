//! Client for the mortgage-records REST API.
//!
//! This module provides:
//!
//! - [`models`]: Records, fields, and ratings exchanged with the service
//! - [`gateway`]: The [`MortgageGateway`] trait and its `reqwest` implementation
//! - [`error`]: The [`ApiError`] type shared by every call

pub mod error;
pub mod gateway;
pub mod models;

pub use error::ApiError;
pub use gateway::{DEFAULT_TIMEOUT, HttpMortgageGateway, MortgageGateway};
pub use models::{
    LoanType, MortgageFields, MortgageId, MortgageRecord, MutationReceipt, PortfolioRating,
    PropertyType, Rating, UnknownVariant,
};
