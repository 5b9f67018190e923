//! SquadBldr domain types.
//!
//! Core entities for the team-composition workflow: characters, teams, and
//! saved team sets, plus the typed IDs and errors shared across the engine.

extern crate self as squadbldr_domain;

pub mod entities;
pub mod error;
pub mod ids;

pub use entities::{Character, SavedTeamSet, Team};
pub use error::DomainError;
pub use ids::{CharacterId, SavedTeamSetId};
