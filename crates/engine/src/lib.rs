//! SquadBldr Engine library.
//!
//! Core of the team-composition workflow: the authoritative roster, the
//! selection set, the generation orchestrator that delegates balancing to an
//! external LLM oracle, and the saved-team-set store.
//!
//! ## Structure
//!
//! - `stores/` - In-memory session state (roster, selection, saved sets)
//! - `use_cases/` - User story orchestration across stores and ports
//! - `infrastructure/` - External dependency ports and adapters
//! - `app` - Application composition
//!
//! The presentation layer is an external collaborator: a UI or server
//! composes [`App`] and drives these use cases in response to user actions.

pub mod app;
pub mod infrastructure;
pub mod stores;
pub mod use_cases;

/// Test fixtures for oracle-path and integration testing.
#[cfg(test)]
pub mod test_fixtures;

pub use app::App;
