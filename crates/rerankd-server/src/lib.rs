//! Rerankd server library (HTTP gateway for the scoring service).
//!
//! This crate is primarily used by the `rerankd` server binary and the
//! integration tests.

pub mod gateway;
