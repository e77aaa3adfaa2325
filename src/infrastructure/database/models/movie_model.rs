use crate::domain::entities::Movie;
use crate::infrastructure::database::schema::movies;
use chrono::NaiveDate;
use diesel::prelude::*;

#[derive(Queryable, Identifiable, Debug, Clone)]
#[diesel(table_name = movies, primary_key(movie_id))]
pub struct MovieModel {
    pub movie_id: i32,
    pub title: String,
    pub release_date: Option<NaiveDate>,
    pub runtime: Option<i32>,
    pub vote_average: Option<f32>,
    pub vote_count: Option<i32>,
    pub adult: bool,
    pub original_language: Option<String>,
    pub overview: Option<String>,
    pub popularity: Option<f32>,
    pub tagline: Option<String>,
}

impl From<MovieModel> for Movie {
    fn from(model: MovieModel) -> Self {
        Movie {
            movie_id: model.movie_id,
            title: model.title,
            release_date: model.release_date,
            runtime: model.runtime,
            vote_average: model.vote_average,
            vote_count: model.vote_count,
            adult: model.adult,
            original_language: model.original_language,
            overview: model.overview,
            popularity: model.popularity,
            tagline: model.tagline,
        }
    }
}
