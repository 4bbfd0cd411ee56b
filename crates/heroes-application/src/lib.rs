//! Application layer for heroes.
//!
//! Provides the data-access service the UI layer calls: every operation hits
//! the repository once, records the outcome in the message log, and turns
//! failures into fallback values.

pub mod hero_service;

pub use hero_service::HeroService;
