use async_trait::async_trait;

use crate::domain::entities::{Genre, Movie, MovieGenre, ProductionCompany};
use crate::shared::errors::AppResult;

/// Port over read-only catalog reference data.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    async fn find_movie(&self, movie_id: i32) -> AppResult<Option<Movie>>;
    async fn list_movies(&self) -> AppResult<Vec<Movie>>;
    async fn list_genres(&self) -> AppResult<Vec<Genre>>;
    async fn list_movie_genres(&self) -> AppResult<Vec<MovieGenre>>;
    async fn list_production_companies(&self) -> AppResult<Vec<ProductionCompany>>;
}
