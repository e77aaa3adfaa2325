use crate::domain::entities::{Genre, ProductionCompany};
use crate::infrastructure::database::schema::{genres, production_companies};
use diesel::prelude::*;

#[derive(Queryable, Identifiable, Debug, Clone)]
#[diesel(table_name = genres, primary_key(genre_id))]
pub struct GenreModel {
    pub genre_id: i32,
    pub genre_name: String,
}

impl From<GenreModel> for Genre {
    fn from(model: GenreModel) -> Self {
        Genre {
            genre_id: model.genre_id,
            genre_name: model.genre_name,
        }
    }
}

#[derive(Queryable, Identifiable, Debug, Clone)]
#[diesel(table_name = production_companies, primary_key(company_id))]
pub struct ProductionCompanyModel {
    pub company_id: i32,
    pub name: String,
}

impl From<ProductionCompanyModel> for ProductionCompany {
    fn from(model: ProductionCompanyModel) -> Self {
        ProductionCompany {
            company_id: model.company_id,
            name: model.name,
        }
    }
}
