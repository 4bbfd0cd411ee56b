//! Hero repository trait.
//!
//! Defines the interface the data-access service talks to. The HTTP
//! implementation lives in `heroes-infrastructure`.

use super::model::{Hero, HeroId, NewHero};
use crate::error::Result;
use async_trait::async_trait;

/// An abstract repository over the `api/heroes` collection.
///
/// Every method maps to exactly one request against the backend. Errors are
/// returned unchanged; deciding on fallbacks is the caller's concern.
#[async_trait]
pub trait HeroRepository: Send + Sync {
    /// Lists every hero in the collection.
    async fn list_all(&self) -> Result<Vec<Hero>>;

    /// Fetches a single hero.
    ///
    /// # Returns
    ///
    /// - `Ok(Hero)`: Hero found
    /// - `Err(_)`: Hero missing (the backend answers 404) or the request failed
    async fn find_by_id(&self, id: HeroId) -> Result<Hero>;

    /// Queries the collection filtered by id.
    ///
    /// Unlike [`find_by_id`](Self::find_by_id), a missing hero yields
    /// `Ok(vec![])` rather than an error.
    async fn find_all_by_id(&self, id: HeroId) -> Result<Vec<Hero>>;

    /// Replaces the stored hero carrying the same id.
    async fn update(&self, hero: &Hero) -> Result<()>;

    /// Creates a hero and returns it with its server-assigned id.
    async fn create(&self, hero: &NewHero) -> Result<Hero>;

    /// Deletes a hero and returns the removed record.
    async fn delete(&self, id: HeroId) -> Result<Hero>;

    /// Queries the collection filtered by name.
    ///
    /// The term is sent as-is; matching semantics belong to the server.
    async fn search_by_name(&self, term: &str) -> Result<Vec<Hero>>;
}
