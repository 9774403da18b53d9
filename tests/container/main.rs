//! Integration tests for bedwars game logs.
//!
//! Unit tests in crates/core and crates/codec cover varints, the pool,
//! records and the container layout in isolation. These suites drive the
//! public API end to end: build a log, move it through bytes or a file, and
//! parse it back.

#[path = "../common/mod.rs"]
mod common;

mod corruption;
mod file_roundtrip;
mod scenario;
