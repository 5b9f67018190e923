//! In-memory session state storage modules.
//!
//! Stores manage runtime state for the current interactive session:
//! - `RosterStore` - the authoritative character collection
//! - `SelectionStore` - character ids chosen for team generation
//! - `SavedTeamSetStore` - named snapshots of past generation results

pub mod roster;
pub mod saved_teams;
pub mod selection;

// Re-export store types
pub use roster::RosterStore;
pub use saved_teams::SavedTeamSetStore;
pub use selection::SelectionStore;
