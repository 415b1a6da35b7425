//! # Assembly Core (The Forge)
//!
//! The assembly pipeline of the Forge. This crate reads a pool of reusable
//! component records, samples from it under constraints, and assembles fully
//! populated characters through interchangeable builder strategies.
//!
//! ## Core Components
//!
//! - **pool**: the immutable component pool and its loading
//! - **sampler**: duplicate-free random subset draws and attribute rolls
//! - **builder**: the `CharacterBuilder` trait and its archetype implementations
//! - **director**: orchestrates one assembly over any builder
//! - **roster**: the append-only registry of finished characters
//!
//! ## Design Philosophy
//!
//! - **Data-Driven**: all sampled content comes from the loaded pool, never from code
//! - **Strategy-Injected**: the director works against the builder trait, not a concrete archetype
//! - **Explicit Failure**: pool and builder misuse surface as `Result` values, never as panics

pub mod builder;
pub mod director;
pub mod pool;
pub mod roster;
pub mod sampler;

pub use builder::*;
pub use director::*;
pub use pool::*;
pub use roster::*;
pub use sampler::*;
