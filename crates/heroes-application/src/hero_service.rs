//! Hero data-access service.

use heroes_core::{Hero, HeroError, HeroId, HeroRepository, MessageLog, NewHero};
use std::fmt::Display;
use std::sync::Arc;

const LOG_PREFIX: &str = "HeroService";

/// Data-access facade over a [`HeroRepository`].
///
/// Never returns an error. Each call appends exactly one entry to the
/// message log (the blank search short-circuit appends none) and a failed
/// call resolves to its fallback: an empty vec or `None`.
#[derive(Clone)]
pub struct HeroService {
    repository: Arc<dyn HeroRepository>,
    messages: MessageLog,
}

impl HeroService {
    pub fn new(repository: Arc<dyn HeroRepository>, messages: MessageLog) -> Self {
        Self {
            repository,
            messages,
        }
    }

    /// The log this service writes to.
    pub fn messages(&self) -> &MessageLog {
        &self.messages
    }

    /// GET the whole collection.
    pub async fn list_heroes(&self) -> Vec<Hero> {
        match self.repository.list_all().await {
            Ok(heroes) => {
                self.log("fetched heroes").await;
                heroes
            }
            Err(e) => self.handle_error("list_heroes", e, Vec::new()).await,
        }
    }

    /// GET a single hero. A 404 counts as a failure.
    pub async fn get_hero(&self, id: impl Into<HeroId>) -> Option<Hero> {
        let id = id.into();
        match self.repository.find_by_id(id).await {
            Ok(hero) => {
                self.log(format!("fetched hero id={id}")).await;
                Some(hero)
            }
            Err(e) => self.handle_error(format!("get_hero id={id}"), e, None).await,
        }
    }

    /// Look a hero up through the filtered collection, where "no match" is
    /// an ordinary outcome rather than an error.
    pub async fn get_hero_no_404(&self, id: impl Into<HeroId>) -> Option<Hero> {
        let id = id.into();
        match self.repository.find_all_by_id(id).await {
            Ok(heroes) => {
                let hero = heroes.into_iter().next();
                let outcome = if hero.is_some() { "fetched" } else { "did not find" };
                self.log(format!("{outcome} hero id={id}")).await;
                hero
            }
            Err(e) => self.handle_error(format!("get_hero id={id}"), e, None).await,
        }
    }

    /// PUT the full hero resource.
    pub async fn update_hero(&self, hero: &Hero) -> Option<()> {
        match self.repository.update(hero).await {
            Ok(()) => {
                self.log(format!("updated hero id={}", hero.id)).await;
                Some(())
            }
            Err(e) => self.handle_error("update_hero", e, None).await,
        }
    }

    /// POST a new hero; the returned hero carries the server-assigned id.
    pub async fn add_hero(&self, hero: &NewHero) -> Option<Hero> {
        match self.repository.create(hero).await {
            Ok(created) => {
                self.log(format!("added hero w/ id={}", created.id)).await;
                Some(created)
            }
            Err(e) => self.handle_error("add_hero", e, None).await,
        }
    }

    /// DELETE a hero, given either the hero itself or its bare id.
    pub async fn delete_hero(&self, hero: impl Into<HeroId>) -> Option<Hero> {
        let id = hero.into();
        match self.repository.delete(id).await {
            Ok(deleted) => {
                self.log(format!("deleted hero id={id}")).await;
                Some(deleted)
            }
            Err(e) => self.handle_error("delete_hero", e, None).await,
        }
    }

    /// GET heroes whose name matches `term`.
    ///
    /// A blank term resolves to an empty vec without touching the network
    /// or the log.
    pub async fn search_heroes(&self, term: &str) -> Vec<Hero> {
        let term = term.trim();
        if term.is_empty() {
            return Vec::new();
        }

        match self.repository.search_by_name(term).await {
            Ok(heroes) => {
                if heroes.is_empty() {
                    self.log(format!("no heroes matching \"{term}\"")).await;
                } else {
                    self.log(format!("found heroes matching \"{term}\"")).await;
                }
                heroes
            }
            Err(e) => self.handle_error("search_heroes", e, Vec::new()).await,
        }
    }

    async fn log(&self, message: impl Display) {
        tracing::debug!("{}: {}", LOG_PREFIX, message);
        self.messages.add(format!("{LOG_PREFIX}: {message}")).await;
    }

    /// Records a failed operation and hands back the fallback in its place.
    async fn handle_error<T>(&self, operation: impl Display, error: HeroError, fallback: T) -> T {
        tracing::error!(%operation, %error, "hero operation failed");
        self.log(format!("{operation} failed: {error}")).await;
        fallback
    }
}
