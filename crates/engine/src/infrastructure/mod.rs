//! Infrastructure - external dependency ports and their adapters.

pub mod clock;
pub mod ollama;
pub mod ports;
pub mod roster_source;
