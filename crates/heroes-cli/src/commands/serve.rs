use anyhow::{Context, Result};
use heroes_mock_api::InMemoryHeroDb;
use std::net::SocketAddr;

pub async fn run(addr: SocketAddr) -> Result<()> {
    heroes_mock_api::serve(addr, InMemoryHeroDb::new())
        .await
        .with_context(|| format!("mock backend failed on {}", addr))
}
