use crate::domain::entities::{NewRating, Rating};
use crate::infrastructure::database::schema::ratings;
use diesel::prelude::*;

#[derive(Queryable, Identifiable, Debug, Clone)]
#[diesel(table_name = ratings, primary_key(rating_id))]
pub struct RatingModel {
    pub rating_id: i32,
    pub user_id: i32,
    pub movie_id: i32,
    pub rating_value: i32,
    pub review: String,
}

impl From<RatingModel> for Rating {
    fn from(model: RatingModel) -> Self {
        Rating {
            rating_id: model.rating_id,
            user_id: model.user_id,
            movie_id: model.movie_id,
            rating_value: model.rating_value,
            review: model.review,
        }
    }
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = ratings)]
pub struct NewRatingRow {
    pub user_id: i32,
    pub movie_id: i32,
    pub rating_value: i32,
    pub review: String,
}

impl From<&NewRating> for NewRatingRow {
    fn from(rating: &NewRating) -> Self {
        NewRatingRow {
            user_id: rating.user_id,
            movie_id: rating.movie_id,
            rating_value: rating.rating_value,
            review: rating.review.clone(),
        }
    }
}
