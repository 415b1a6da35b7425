//! # Character Rules
//!
//! The "World Bible" crate - contains the shared character definitions for the Forge:
//! attribute sets, equipment, skills, and the finished `Character` record.
//! This crate is the single source of truth for character data and does not contain
//! any assembly logic.

pub mod entities;
pub mod items;

pub use entities::*;
pub use items::*;
