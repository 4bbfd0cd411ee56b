//! reqwest-based HeroRepository implementation.

use async_trait::async_trait;
use heroes_core::{
    ClientConfig, Hero, HeroId, HeroRepository, NewHero,
    error::{HeroError, Result},
};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;

/// Talks to the `api/heroes` collection over HTTP.
///
/// Endpoints:
/// ```text
/// GET    {heroes_url}              list
/// GET    {heroes_url}/{id}         single hero
/// GET    {heroes_url}/?name={term} search
/// GET    {heroes_url}/?id={id}     lookup without 404
/// PUT    {heroes_url}              update (body: Hero)
/// POST   {heroes_url}              create (body: NewHero)
/// DELETE {heroes_url}/{id}         delete
/// ```
#[derive(Clone, Debug)]
pub struct HttpHeroRepository {
    client: Client,
    heroes_url: String,
}

impl HttpHeroRepository {
    /// Creates a repository for the collection described by `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be built.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        config.validate()?;

        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| HeroError::config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self::with_client(client, config.heroes_url()))
    }

    /// Creates a repository around an existing client (shared connection pool).
    pub fn with_client(client: Client, heroes_url: impl Into<String>) -> Self {
        Self {
            client,
            heroes_url: heroes_url.into(),
        }
    }

    pub fn heroes_url(&self) -> &str {
        &self.heroes_url
    }

    /// URL of a single hero: `{heroes_url}/{id}`.
    pub fn hero_url(&self, id: HeroId) -> String {
        format!("{}/{}", self.heroes_url, id)
    }

    /// URL used for filtered collection queries: `{heroes_url}/`.
    fn query_url(&self) -> String {
        format!("{}/", self.heroes_url)
    }

    /// Marks a mutating request as carrying JSON.
    fn json_request(request: RequestBuilder) -> RequestBuilder {
        request.header(reqwest::header::CONTENT_TYPE, "application/json")
    }

    fn update_request(&self, hero: &Hero) -> RequestBuilder {
        Self::json_request(self.client.put(&self.heroes_url)).json(hero)
    }

    fn create_request(&self, hero: &NewHero) -> RequestBuilder {
        Self::json_request(self.client.post(&self.heroes_url)).json(hero)
    }

    fn delete_request(&self, id: HeroId) -> RequestBuilder {
        Self::json_request(self.client.delete(self.hero_url(id)))
    }

    async fn send(request: RequestBuilder, url: &str) -> Result<Response> {
        let response = request.send().await.map_err(|e| {
            tracing::debug!("request to {} failed: {}", url, e);
            HeroError::Transport(format!("Http failure during request to {}: {}", url, e))
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!("{} answered {}", url, status);
            return Err(HeroError::http(
                status.as_u16(),
                status.canonical_reason().unwrap_or_default(),
                url,
            ));
        }
        Ok(response)
    }

    async fn get_json<T: DeserializeOwned>(request: RequestBuilder, url: &str) -> Result<T> {
        let response = Self::send(request, url).await?;
        response.json::<T>().await.map_err(|e| HeroError::Serialization {
            format: "JSON".to_string(),
            message: format!("Failed to parse response from {}: {}", url, e),
        })
    }
}

#[async_trait]
impl HeroRepository for HttpHeroRepository {
    async fn list_all(&self) -> Result<Vec<Hero>> {
        let url = &self.heroes_url;
        Self::get_json(self.client.get(url), url).await
    }

    async fn find_by_id(&self, id: HeroId) -> Result<Hero> {
        let url = self.hero_url(id);
        match Self::get_json(self.client.get(&url), &url).await {
            Err(err) if err.status() == Some(StatusCode::NOT_FOUND.as_u16()) => {
                Err(HeroError::not_found("hero", id))
            }
            other => other,
        }
    }

    async fn find_all_by_id(&self, id: HeroId) -> Result<Vec<Hero>> {
        let url = self.query_url();
        let request = self.client.get(&url).query(&[("id", id.0)]);
        Self::get_json(request, &url).await
    }

    async fn update(&self, hero: &Hero) -> Result<()> {
        Self::send(self.update_request(hero), &self.heroes_url).await?;
        Ok(())
    }

    async fn create(&self, hero: &NewHero) -> Result<Hero> {
        Self::get_json(self.create_request(hero), &self.heroes_url).await
    }

    async fn delete(&self, id: HeroId) -> Result<Hero> {
        Self::get_json(self.delete_request(id), &self.hero_url(id)).await
    }

    async fn search_by_name(&self, term: &str) -> Result<Vec<Hero>> {
        let url = self.query_url();
        let request = self.client.get(&url).query(&[("name", term)]);
        Self::get_json(request, &url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo() -> HttpHeroRepository {
        HttpHeroRepository::new(&ClientConfig::default()).unwrap()
    }

    #[test]
    fn test_hero_url() {
        assert_eq!(
            repo().hero_url(HeroId(12)),
            "http://localhost:8080/api/heroes/12"
        );
    }

    #[test]
    fn test_mutating_requests_carry_json_content_type() {
        let repo = repo();
        let hero = Hero::new(13, "Bombasto");
        let requests = [
            repo.update_request(&hero).build().unwrap(),
            repo.create_request(&NewHero::new("Zed")).build().unwrap(),
            repo.delete_request(hero.id).build().unwrap(),
        ];

        for request in requests {
            assert_eq!(
                request.headers()[reqwest::header::CONTENT_TYPE],
                "application/json",
                "{} {}",
                request.method(),
                request.url()
            );
        }
    }

    #[test]
    fn test_delete_by_hero_or_id_targets_same_path() {
        let repo = repo();
        let hero = Hero::new(16, "RubberMan");
        let by_hero = repo.delete_request((&hero).into()).build().unwrap();
        let by_id = repo.delete_request(HeroId(16)).build().unwrap();
        assert_eq!(by_hero.url(), by_id.url());
        assert_eq!(by_id.url().path(), "/api/heroes/16");
    }

    #[test]
    fn test_rejects_invalid_config() {
        let config = ClientConfig::default().with_base_url("");
        assert!(HttpHeroRepository::new(&config).is_err());
    }
}
