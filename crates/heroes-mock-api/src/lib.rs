//! In-memory backend serving the `api/heroes` contract over HTTP.
//!
//! Stands in for the real server during development and integration tests:
//! a lock-protected hero table behind an axum router.

mod db;
mod handlers;
mod seed;

pub use db::InMemoryHeroDb;
pub use seed::default_heroes;

use axum::{Router, routing::get};
use std::io;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Builds the router for the collection endpoint.
pub fn router(db: InMemoryHeroDb) -> Router {
    Router::new()
        .route(
            "/api/heroes",
            get(handlers::list_heroes)
                .post(handlers::create_hero)
                .put(handlers::update_hero),
        )
        .route("/api/heroes/", get(handlers::list_heroes))
        .route(
            "/api/heroes/:id",
            get(handlers::get_hero).delete(handlers::delete_hero),
        )
        .with_state(db)
}

/// A running mock backend.
pub struct MockServer {
    pub addr: SocketAddr,
    pub db: InMemoryHeroDb,
    handle: JoinHandle<()>,
}

impl MockServer {
    /// Base URL to hand to a client, e.g. `http://127.0.0.1:41234`.
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Stops serving. Connections still in flight are dropped.
    pub fn shutdown(self) {
        self.handle.abort();
    }
}

/// Binds `addr` and serves `db` on a background task.
///
/// Port 0 picks a free port; the bound address is reported back.
pub async fn spawn(addr: SocketAddr, db: InMemoryHeroDb) -> io::Result<MockServer> {
    let listener = TcpListener::bind(addr).await?;
    let addr = listener.local_addr()?;
    let app = router(db.clone());

    tracing::info!(%addr, "mock heroes api listening");
    let handle = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app.into_make_service()).await {
            tracing::error!("mock heroes api stopped: {}", e);
        }
    });

    Ok(MockServer { addr, db, handle })
}

/// Binds `addr` and serves until the process is interrupted.
pub async fn serve(addr: SocketAddr, db: InMemoryHeroDb) -> io::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(addr = %listener.local_addr()?, "mock heroes api listening");
    axum::serve(listener, router(db).into_make_service())
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("shutdown signal received");
        })
        .await
}
