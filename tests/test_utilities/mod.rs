//! Shared helpers for integration and end-to-end tests
#![allow(dead_code)]

pub mod mocks;
pub mod stub_backend;
