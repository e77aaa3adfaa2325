use crate::domain::{
    entities::{Genre, Movie, MovieGenre, ProductionCompany},
    repositories::CatalogRepository,
};
use crate::shared::errors::{AppError, AppResult};
use std::sync::Arc;

/// Read-only access to catalog reference data.
pub struct CatalogService {
    catalog_repo: Arc<dyn CatalogRepository>,
}

impl CatalogService {
    pub fn new(catalog_repo: Arc<dyn CatalogRepository>) -> Self {
        Self { catalog_repo }
    }

    pub async fn get_movie(&self, movie_id: i32) -> AppResult<Movie> {
        self.catalog_repo
            .find_movie(movie_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Movie {} not found", movie_id)))
    }

    pub async fn list_movies(&self) -> AppResult<Vec<Movie>> {
        self.catalog_repo.list_movies().await
    }

    pub async fn list_genres(&self) -> AppResult<Vec<Genre>> {
        self.catalog_repo.list_genres().await
    }

    pub async fn list_movie_genres(&self) -> AppResult<Vec<MovieGenre>> {
        self.catalog_repo.list_movie_genres().await
    }

    pub async fn list_production_companies(&self) -> AppResult<Vec<ProductionCompany>> {
        self.catalog_repo.list_production_companies().await
    }
}
