//! Shared test fixtures: in-memory stands-ins for the ledger, catalog
//! and user stores, with the same conflict semantics as the Postgres
//! implementations (uniqueness checked atomically with the insert).

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};

use reelhouse::application::services::{
    AccountService, CatalogService, RatingService, RentalHistoryService, RentalService,
};
use reelhouse::domain::entities::{
    Genre, Movie, MovieGenre, NewRating, NewRental, NewUser, ProductionCompany, ProfileUpdate,
    Rating, Rental, RentalHistoryRow, User,
};
use reelhouse::domain::repositories::{CatalogRepository, LedgerRepository, UserRepository};
use reelhouse::domain::value_objects::UserRole;
use reelhouse::shared::errors::{AppError, AppResult};

pub fn t(hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, hour, 0, 0).unwrap()
}

pub fn seed_movies() -> Vec<Movie> {
    vec![
        Movie {
            movie_id: 42,
            title: "The Seventh Seal".to_string(),
            release_date: None,
            runtime: Some(96),
            vote_average: Some(8.1),
            vote_count: Some(176_000),
            adult: false,
            original_language: Some("sv".to_string()),
            overview: None,
            popularity: Some(23.5),
            tagline: None,
        },
        Movie {
            movie_id: 43,
            title: "Stalker".to_string(),
            release_date: None,
            runtime: Some(162),
            vote_average: Some(8.0),
            vote_count: Some(140_000),
            adult: false,
            original_language: Some("ru".to_string()),
            overview: None,
            popularity: Some(19.2),
            tagline: None,
        },
    ]
}

fn seed_users() -> Vec<(User, String)> {
    vec![
        (
            User {
                user_id: 1,
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
                age: 30,
                role: UserRole::Member,
            },
            "s3cret".to_string(),
        ),
        (
            User {
                user_id: 2,
                name: "Grace".to_string(),
                email: "grace@example.com".to_string(),
                age: 45,
                role: UserRole::Admin,
            },
            "hopper".to_string(),
        ),
    ]
}

// ------------------------------------------------------------------
// Ledger fake
// ------------------------------------------------------------------

struct LedgerState {
    rentals: Vec<Rental>,
    ratings: Vec<Rating>,
    next_rental_id: i32,
    next_rating_id: i32,
}

pub struct InMemoryLedger {
    movies: Vec<Movie>,
    state: Mutex<LedgerState>,
}

impl InMemoryLedger {
    pub fn new(movies: Vec<Movie>) -> Self {
        Self {
            movies,
            state: Mutex::new(LedgerState {
                rentals: Vec::new(),
                ratings: Vec::new(),
                next_rental_id: 1,
                next_rating_id: 1,
            }),
        }
    }

    fn lock(&self) -> AppResult<std::sync::MutexGuard<'_, LedgerState>> {
        self.state
            .lock()
            .map_err(|_| AppError::InternalError("Ledger lock poisoned".to_string()))
    }
}

#[async_trait]
impl LedgerRepository for InMemoryLedger {
    async fn insert_rental(&self, rental: &NewRental) -> AppResult<Rental> {
        let mut state = self.lock()?;
        // Check and insert under one lock, like the partial unique
        // index does in Postgres.
        let duplicate = state.rentals.iter().any(|r| {
            r.user_id == rental.user_id && r.movie_id == rental.movie_id && r.end_date.is_none()
        });
        if duplicate {
            return Err(AppError::Conflict(
                "An active rental already exists for this user and movie".to_string(),
            ));
        }
        let created = Rental {
            rental_id: state.next_rental_id,
            user_id: rental.user_id,
            movie_id: rental.movie_id,
            rental_date: rental.rental_date,
            end_date: None,
        };
        state.next_rental_id += 1;
        state.rentals.push(created.clone());
        Ok(created)
    }

    async fn close_rental(&self, rental_id: i32, end_date: DateTime<Utc>) -> AppResult<Rental> {
        let mut state = self.lock()?;
        let rental = state
            .rentals
            .iter_mut()
            .find(|r| r.rental_id == rental_id)
            .ok_or_else(|| AppError::NotFound(format!("Rental {} not found", rental_id)))?;
        if rental.end_date.is_some() {
            return Err(AppError::Conflict(format!(
                "Rental {} is already closed",
                rental_id
            )));
        }
        rental.end_date = Some(end_date);
        Ok(rental.clone())
    }

    async fn find_rental(&self, rental_id: i32) -> AppResult<Option<Rental>> {
        let state = self.lock()?;
        Ok(state
            .rentals
            .iter()
            .find(|r| r.rental_id == rental_id)
            .cloned())
    }

    async fn find_active_rental(&self, user_id: i32, movie_id: i32) -> AppResult<Option<Rental>> {
        let state = self.lock()?;
        Ok(state
            .rentals
            .iter()
            .find(|r| r.user_id == user_id && r.movie_id == movie_id && r.end_date.is_none())
            .cloned())
    }

    async fn rental_exists(&self, user_id: i32, movie_id: i32) -> AppResult<bool> {
        let state = self.lock()?;
        Ok(state
            .rentals
            .iter()
            .any(|r| r.user_id == user_id && r.movie_id == movie_id))
    }

    async fn insert_rating(&self, rating: &NewRating) -> AppResult<Rating> {
        let mut state = self.lock()?;
        let duplicate = state
            .ratings
            .iter()
            .any(|r| r.user_id == rating.user_id && r.movie_id == rating.movie_id);
        if duplicate {
            return Err(AppError::Conflict(
                "This user has already rated this movie".to_string(),
            ));
        }
        let created = Rating {
            rating_id: state.next_rating_id,
            user_id: rating.user_id,
            movie_id: rating.movie_id,
            rating_value: rating.rating_value,
            review: rating.review.clone(),
        };
        state.next_rating_id += 1;
        state.ratings.push(created.clone());
        Ok(created)
    }

    async fn find_rating(&self, user_id: i32, movie_id: i32) -> AppResult<Option<Rating>> {
        let state = self.lock()?;
        Ok(state
            .ratings
            .iter()
            .find(|r| r.user_id == user_id && r.movie_id == movie_id)
            .cloned())
    }

    async fn list_ratings(&self) -> AppResult<Vec<Rating>> {
        let state = self.lock()?;
        Ok(state.ratings.clone())
    }

    async fn list_rentals_for_user(&self, user_id: i32) -> AppResult<Vec<RentalHistoryRow>> {
        let state = self.lock()?;
        let mut rows: Vec<RentalHistoryRow> = state
            .rentals
            .iter()
            .filter(|r| r.user_id == user_id)
            .map(|r| {
                let movie = self
                    .movies
                    .iter()
                    .find(|m| m.movie_id == r.movie_id)
                    .expect("rental references a seeded movie");
                let rating = state
                    .ratings
                    .iter()
                    .find(|rt| rt.user_id == r.user_id && rt.movie_id == r.movie_id);
                RentalHistoryRow {
                    rental_id: r.rental_id,
                    rental_date: r.rental_date,
                    end_date: r.end_date,
                    user_id: r.user_id,
                    movie_id: r.movie_id,
                    movie_title: movie.title.clone(),
                    movie_duration: movie.runtime,
                    movie_rating: rating.map(|rt| rt.rating_value),
                    movie_review: rating.map(|rt| rt.review.clone()),
                }
            })
            .collect();
        rows.sort_by(|a, b| {
            b.rental_date
                .cmp(&a.rental_date)
                .then(b.rental_id.cmp(&a.rental_id))
        });
        Ok(rows)
    }
}

// ------------------------------------------------------------------
// Catalog fake
// ------------------------------------------------------------------

pub struct InMemoryCatalog {
    movies: Vec<Movie>,
}

impl InMemoryCatalog {
    pub fn new(movies: Vec<Movie>) -> Self {
        Self { movies }
    }
}

#[async_trait]
impl CatalogRepository for InMemoryCatalog {
    async fn find_movie(&self, movie_id: i32) -> AppResult<Option<Movie>> {
        Ok(self
            .movies
            .iter()
            .find(|m| m.movie_id == movie_id)
            .cloned())
    }

    async fn list_movies(&self) -> AppResult<Vec<Movie>> {
        Ok(self.movies.clone())
    }

    async fn list_genres(&self) -> AppResult<Vec<Genre>> {
        Ok(vec![Genre {
            genre_id: 1,
            genre_name: "Drama".to_string(),
        }])
    }

    async fn list_movie_genres(&self) -> AppResult<Vec<MovieGenre>> {
        Ok(self
            .movies
            .iter()
            .map(|m| MovieGenre {
                movie_id: m.movie_id,
                genre_name: "Drama".to_string(),
            })
            .collect())
    }

    async fn list_production_companies(&self) -> AppResult<Vec<ProductionCompany>> {
        Ok(vec![ProductionCompany {
            company_id: 1,
            name: "Svensk Filmindustri".to_string(),
        }])
    }
}

// ------------------------------------------------------------------
// User store fake
// ------------------------------------------------------------------

pub struct InMemoryUsers {
    state: Mutex<Vec<(User, String)>>,
    next_id: Mutex<i32>,
}

impl InMemoryUsers {
    pub fn new(users: Vec<(User, String)>) -> Self {
        let next = users.iter().map(|(u, _)| u.user_id).max().unwrap_or(0) + 1;
        Self {
            state: Mutex::new(users),
            next_id: Mutex::new(next),
        }
    }

    fn lock(&self) -> AppResult<std::sync::MutexGuard<'_, Vec<(User, String)>>> {
        self.state
            .lock()
            .map_err(|_| AppError::InternalError("User lock poisoned".to_string()))
    }
}

#[async_trait]
impl UserRepository for InMemoryUsers {
    async fn insert_user(&self, user: &NewUser) -> AppResult<User> {
        let mut state = self.lock()?;
        if state.iter().any(|(u, _)| u.email == user.email) {
            return Err(AppError::Conflict("Email already exists".to_string()));
        }
        let mut next_id = self
            .next_id
            .lock()
            .map_err(|_| AppError::InternalError("User id lock poisoned".to_string()))?;
        let created = User {
            user_id: *next_id,
            name: user.name.clone(),
            email: user.email.clone(),
            age: user.age,
            role: user.role,
        };
        *next_id += 1;
        state.push((created.clone(), user.secret.clone()));
        Ok(created)
    }

    async fn find_by_id(&self, user_id: i32) -> AppResult<Option<User>> {
        let state = self.lock()?;
        Ok(state
            .iter()
            .find(|(u, _)| u.user_id == user_id)
            .map(|(u, _)| u.clone()))
    }

    async fn find_by_credentials(&self, email: &str, secret: &str) -> AppResult<Option<User>> {
        let state = self.lock()?;
        Ok(state
            .iter()
            .find(|(u, s)| u.email == email && s == secret)
            .map(|(u, _)| u.clone()))
    }

    async fn email_exists(&self, email: &str) -> AppResult<bool> {
        let state = self.lock()?;
        Ok(state.iter().any(|(u, _)| u.email == email))
    }

    async fn update_profile(&self, user_id: i32, update: &ProfileUpdate) -> AppResult<User> {
        let mut state = self.lock()?;
        if state
            .iter()
            .any(|(u, _)| u.user_id != user_id && u.email == update.email)
        {
            return Err(AppError::Conflict("Email already exists".to_string()));
        }
        let entry = state
            .iter_mut()
            .find(|(u, _)| u.user_id == user_id)
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", user_id)))?;
        entry.0.name = update.name.clone();
        entry.0.email = update.email.clone();
        entry.0.age = update.age;
        Ok(entry.0.clone())
    }

    async fn delete(&self, user_id: i32) -> AppResult<()> {
        let mut state = self.lock()?;
        let before = state.len();
        state.retain(|(u, _)| u.user_id != user_id);
        if state.len() == before {
            return Err(AppError::NotFound(format!("User {} not found", user_id)));
        }
        Ok(())
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        let state = self.lock()?;
        Ok(state.iter().map(|(u, _)| u.clone()).collect())
    }
}

// ------------------------------------------------------------------
// Wired services over the fakes
// ------------------------------------------------------------------

pub struct TestServices {
    pub rental_service: Arc<RentalService>,
    pub rating_service: Arc<RatingService>,
    pub rental_history_service: Arc<RentalHistoryService>,
    pub catalog_service: Arc<CatalogService>,
    pub account_service: Arc<AccountService>,
}

pub fn build_test_services() -> TestServices {
    let movies = seed_movies();
    let ledger: Arc<dyn LedgerRepository> = Arc::new(InMemoryLedger::new(movies.clone()));
    let catalog: Arc<dyn CatalogRepository> = Arc::new(InMemoryCatalog::new(movies));
    let users: Arc<dyn UserRepository> = Arc::new(InMemoryUsers::new(seed_users()));

    TestServices {
        rental_service: Arc::new(RentalService::new(
            ledger.clone(),
            catalog.clone(),
            users.clone(),
        )),
        rating_service: Arc::new(RatingService::new(ledger.clone())),
        rental_history_service: Arc::new(RentalHistoryService::new(ledger)),
        catalog_service: Arc::new(CatalogService::new(catalog)),
        account_service: Arc::new(AccountService::new(users)),
    }
}
