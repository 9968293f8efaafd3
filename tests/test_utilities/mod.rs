//! Shared helpers for the integration test binaries
#![allow(dead_code)]

pub mod fake_npm;
pub mod mocks;
