//! Hero domain model.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Server-assigned identifier of a hero.
///
/// Serializes as a bare JSON integer so `{"id": 12, "name": "Dr. Nice"}`
/// round-trips unchanged. No range check is made; ids are whatever the
/// server hands out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HeroId(pub i64);

impl fmt::Display for HeroId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for HeroId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<&Hero> for HeroId {
    fn from(hero: &Hero) -> Self {
        hero.id
    }
}

impl From<Hero> for HeroId {
    fn from(hero: Hero) -> Self {
        hero.id
    }
}

/// An identified, named record. The only entity in the system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    pub id: HeroId,
    pub name: String,
}

impl Hero {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id: HeroId(id),
            name: name.into(),
        }
    }
}

/// Payload for creating a hero. Carries no id; the server assigns one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewHero {
    pub name: String,
}

impl NewHero {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hero_wire_shape() {
        let hero = Hero::new(12, "Dr. Nice");
        let json = serde_json::to_value(&hero).unwrap();
        assert_eq!(json, serde_json::json!({ "id": 12, "name": "Dr. Nice" }));
    }

    #[test]
    fn test_new_hero_has_no_id() {
        let json = serde_json::to_value(NewHero::new("Zed")).unwrap();
        assert_eq!(json, serde_json::json!({ "name": "Zed" }));
    }

    #[test]
    fn test_hero_and_bare_id_convert_to_same_id() {
        let hero = Hero::new(15, "Magneta");
        assert_eq!(HeroId::from(&hero), HeroId::from(15_i64));
    }
}
