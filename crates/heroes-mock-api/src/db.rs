use crate::seed::default_heroes;
use heroes_core::{Hero, HeroId, NewHero};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Id handed to the first hero created in an empty table.
const FIRST_ID: i64 = 11;

/// Lock-protected hero table shared by every request handler.
#[derive(Debug, Clone)]
pub struct InMemoryHeroDb {
    heroes: Arc<RwLock<Vec<Hero>>>,
}

impl Default for InMemoryHeroDb {
    fn default() -> Self {
        Self::with_heroes(default_heroes())
    }
}

impl InMemoryHeroDb {
    /// Creates a table seeded with the default roster.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_heroes(heroes: Vec<Hero>) -> Self {
        Self {
            heroes: Arc::new(RwLock::new(heroes)),
        }
    }

    pub async fn all(&self) -> Vec<Hero> {
        self.heroes.read().await.clone()
    }

    /// Heroes whose name contains `name` (case-insensitive) and whose id equals `id`.
    /// Absent filters match everything.
    pub async fn filter(&self, name: Option<&str>, id: Option<HeroId>) -> Vec<Hero> {
        let needle = name.map(str::to_lowercase);
        self.heroes
            .read()
            .await
            .iter()
            .filter(|hero| id.is_none_or(|id| hero.id == id))
            .filter(|hero| {
                needle
                    .as_deref()
                    .is_none_or(|needle| hero.name.to_lowercase().contains(needle))
            })
            .cloned()
            .collect()
    }

    pub async fn get(&self, id: HeroId) -> Option<Hero> {
        self.heroes
            .read()
            .await
            .iter()
            .find(|hero| hero.id == id)
            .cloned()
    }

    /// Replaces the stored hero with the same id. Returns `false` when absent.
    pub async fn update(&self, hero: Hero) -> bool {
        let mut heroes = self.heroes.write().await;
        match heroes.iter_mut().find(|stored| stored.id == hero.id) {
            Some(stored) => {
                *stored = hero;
                true
            }
            None => false,
        }
    }

    pub async fn insert(&self, new_hero: NewHero) -> Hero {
        let mut heroes = self.heroes.write().await;
        let id = heroes
            .iter()
            .map(|hero| hero.id.0)
            .max()
            .map_or(FIRST_ID, |max| max + 1);
        let hero = Hero::new(id, new_hero.name);
        heroes.push(hero.clone());
        hero
    }

    pub async fn remove(&self, id: HeroId) -> Option<Hero> {
        let mut heroes = self.heroes.write().await;
        let index = heroes.iter().position(|hero| hero.id == id)?;
        Some(heroes.remove(index))
    }
}
