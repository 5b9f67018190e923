//! Use cases - User story orchestration.
//!
//! Each module contains use cases for a specific area. Use cases orchestrate
//! across stores and ports to fulfill user stories.

pub mod roster;
pub mod selection;
pub mod teams;
pub mod views;

// Re-export main types
pub use roster::{AdminCapability, RosterAdmin};
pub use selection::SelectionUseCases;
pub use teams::{TeamGenError, TeamUseCases};
pub use views::{FactionFilter, RosterView, SortOrder};
