//! Test fixtures for oracle-path and integration testing.

pub mod llm_integration;
pub mod llm_mocks;
