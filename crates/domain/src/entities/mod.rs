//! Domain entities - Core business objects with identity

mod character;
mod team;

pub use character::Character;
pub use team::{SavedTeamSet, Team};
