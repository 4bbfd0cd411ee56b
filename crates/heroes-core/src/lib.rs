pub mod config;
pub mod error;
pub mod hero;
pub mod message;

// Re-export common types
pub use config::ClientConfig;
pub use error::{HeroError, Result};
pub use hero::{Hero, HeroId, HeroRepository, NewHero};
pub use message::MessageLog;
