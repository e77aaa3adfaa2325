use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Genre {
    pub genre_id: i32,
    pub genre_name: String,
}

impl std::fmt::Display for Genre {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.genre_name)
    }
}

/// One row of the movie/genre association, already joined with the
/// genre name for catalog listings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MovieGenre {
    pub movie_id: i32,
    pub genre_name: String,
}
