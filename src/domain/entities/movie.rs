use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Catalog reference data. Immutable from the ledger's point of view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Movie {
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

impl std::fmt::Display for Movie {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title)
    }
}
