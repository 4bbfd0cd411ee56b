//! Hero domain module.
//!
//! # Module Structure
//!
//! - `model`: the `Hero` entity, its `HeroId`, and the `NewHero` create payload
//! - `repository`: the `HeroRepository` trait implemented by transports
//!
//! # Usage
//!
//! ```ignore
//! use heroes_core::hero::{Hero, HeroId, NewHero, HeroRepository};
//! ```

mod model;
pub mod repository;

// Re-export public API
pub use model::{Hero, HeroId, NewHero};
pub use repository::HeroRepository;
