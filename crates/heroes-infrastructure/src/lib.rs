pub mod config_service;
pub mod http_hero_repository;

pub use crate::config_service::ConfigService;
pub use crate::http_hero_repository::HttpHeroRepository;
