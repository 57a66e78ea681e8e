//! Unit tests for configuration loading, accessors, and validation.

mod helpers;
