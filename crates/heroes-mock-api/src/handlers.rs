use crate::db::InMemoryHeroDb;
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use heroes_core::{Hero, HeroId, NewHero};
use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct HeroQuery {
    name: Option<String>,
    id: Option<i64>,
}

// GET /api/heroes, GET /api/heroes/?name=..&id=..
pub async fn list_heroes(
    State(db): State<InMemoryHeroDb>,
    Query(query): Query<HeroQuery>,
) -> Json<Vec<Hero>> {
    tracing::debug!(?query, "list heroes");
    let heroes = db
        .filter(query.name.as_deref(), query.id.map(HeroId))
        .await;
    Json(heroes)
}

// GET /api/heroes/:id
pub async fn get_hero(State(db): State<InMemoryHeroDb>, Path(id): Path<i64>) -> Response {
    match db.get(HeroId(id)).await {
        Some(hero) => Json(hero).into_response(),
        None => not_found(id),
    }
}

// PUT /api/heroes
pub async fn update_hero(State(db): State<InMemoryHeroDb>, Json(hero): Json<Hero>) -> Response {
    let id = hero.id;
    if db.update(hero).await {
        tracing::debug!(%id, "updated hero");
        StatusCode::NO_CONTENT.into_response()
    } else {
        not_found(id.0)
    }
}

// POST /api/heroes
pub async fn create_hero(
    State(db): State<InMemoryHeroDb>,
    Json(new_hero): Json<NewHero>,
) -> (StatusCode, Json<Hero>) {
    let hero = db.insert(new_hero).await;
    tracing::debug!(id = %hero.id, "created hero");
    (StatusCode::CREATED, Json(hero))
}

// DELETE /api/heroes/:id
pub async fn delete_hero(State(db): State<InMemoryHeroDb>, Path(id): Path<i64>) -> Response {
    match db.remove(HeroId(id)).await {
        Some(hero) => {
            tracing::debug!(id, "deleted hero");
            Json(hero).into_response()
        }
        None => not_found(id),
    }
}

fn not_found(id: i64) -> Response {
    tracing::debug!(id, "hero not found");
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({ "error": format!("hero {} not found", id) })),
    )
        .into_response()
}
