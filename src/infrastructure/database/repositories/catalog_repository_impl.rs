use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use tokio::task;

use crate::domain::{
    entities::{Genre, Movie, MovieGenre, ProductionCompany},
    repositories::CatalogRepository,
};
use crate::infrastructure::database::{
    connection::Database,
    models::{GenreModel, MovieModel, ProductionCompanyModel},
    schema::{genres, movie_genres, movies, production_companies},
};
use crate::shared::errors::AppResult;

pub struct CatalogRepositoryImpl {
    db: Arc<Database>,
}

impl CatalogRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CatalogRepository for CatalogRepositoryImpl {
    async fn find_movie(&self, movie_id: i32) -> AppResult<Option<Movie>> {
        let db = Arc::clone(&self.db);

        let model = task::spawn_blocking(move || -> AppResult<Option<MovieModel>> {
            let mut conn = db.get_connection()?;
            let m = movies::table
                .filter(movies::movie_id.eq(movie_id))
                .first::<MovieModel>(&mut conn)
                .optional()?;
            Ok(m)
        })
        .await??;

        Ok(model.map(Movie::from))
    }

    async fn list_movies(&self) -> AppResult<Vec<Movie>> {
        let db = Arc::clone(&self.db);

        let models = task::spawn_blocking(move || -> AppResult<Vec<MovieModel>> {
            let mut conn = db.get_connection()?;
            let rows = movies::table
                .order(movies::movie_id.asc())
                .load::<MovieModel>(&mut conn)?;
            Ok(rows)
        })
        .await??;

        Ok(models.into_iter().map(Movie::from).collect())
    }

    async fn list_genres(&self) -> AppResult<Vec<Genre>> {
        let db = Arc::clone(&self.db);

        let models = task::spawn_blocking(move || -> AppResult<Vec<GenreModel>> {
            let mut conn = db.get_connection()?;
            let rows = genres::table
                .order(genres::genre_id.asc())
                .load::<GenreModel>(&mut conn)?;
            Ok(rows)
        })
        .await??;

        Ok(models.into_iter().map(Genre::from).collect())
    }

    async fn list_movie_genres(&self) -> AppResult<Vec<MovieGenre>> {
        let db = Arc::clone(&self.db);

        let rows = task::spawn_blocking(move || -> AppResult<Vec<(i32, String)>> {
            let mut conn = db.get_connection()?;
            let rows = movie_genres::table
                .inner_join(genres::table)
                .select((movie_genres::movie_id, genres::genre_name))
                .order(movie_genres::movie_id.asc())
                .load::<(i32, String)>(&mut conn)?;
            Ok(rows)
        })
        .await??;

        Ok(rows
            .into_iter()
            .map(|(movie_id, genre_name)| MovieGenre {
                movie_id,
                genre_name,
            })
            .collect())
    }

    async fn list_production_companies(&self) -> AppResult<Vec<ProductionCompany>> {
        let db = Arc::clone(&self.db);

        let models = task::spawn_blocking(move || -> AppResult<Vec<ProductionCompanyModel>> {
            let mut conn = db.get_connection()?;
            let rows = production_companies::table
                .order(production_companies::company_id.asc())
                .load::<ProductionCompanyModel>(&mut conn)?;
            Ok(rows)
        })
        .await??;

        Ok(models.into_iter().map(ProductionCompany::from).collect())
    }
}
