//! State management for the mortgage portfolio TUI.
//!
//! Portfolio records and the draft itself live in [`crate::portfolio`];
//! this module holds what only the terminal needs: the raw text typed into
//! each input and which input has focus.

mod form_inputs;

pub use form_inputs::{FormInputs, MAX_INPUT_LENGTH};
