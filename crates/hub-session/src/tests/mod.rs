//! Unit tests for the session core.
//!
//! These tests can access crate internals via `use crate::`.

mod storage;
