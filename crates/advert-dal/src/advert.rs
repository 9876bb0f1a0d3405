use crate::{Error, Order, PAGE_SIZE, error::Result};
use serde::{Deserialize, Serialize};
use sqlx::Pool;
use tracing::debug;

const ADVERTS_TABLE: &str = "adverts";

/// Input shape for a new advert. `pictures` is a comma-separated list of
/// picture references.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CreateAdvert {
    pub name: String,
    pub description: String,
    pub price: i64,
    pub pictures: String,
}

/// Full record as fetched by id.
#[derive(Debug, Serialize, Deserialize, Clone, sqlx::FromRow)]
pub struct Advert {
    pub name: String,
    pub description: String,
    pub price: i64,
    pub pictures: String,
}

/// Listing row. Description is never selected for listings.
#[derive(Debug, Serialize, Deserialize, Clone, sqlx::FromRow)]
pub struct AdvertSummary {
    pub name: String,
    pub price: i64,
    pub pictures: String,
}

pub type AdvertRepository = AdvertRepositoryImpl<Pool<crate::ChosenDB>>;

pub struct AdvertRepositoryImpl<E> {
    executor: E,
}

impl<'c, E> AdvertRepositoryImpl<E>
where
    for<'a> &'a E: sqlx::Executor<'c, Database = crate::ChosenDB>,
{
    pub fn new(executor: E) -> Self {
        Self { executor }
    }

    pub async fn create(&self, payload: CreateAdvert) -> Result<i64> {
        let query = format!(
            "INSERT INTO {ADVERTS_TABLE} (name, description, price, pictures) VALUES (?, ?, ?, ?)"
        );
        let result = sqlx::query(&query)
            .bind(&payload.name)
            .bind(&payload.description)
            .bind(payload.price)
            .bind(&payload.pictures)
            .execute(&self.executor)
            .await?;

        let id = result.last_insert_rowid();
        debug!("created advert {}", id);
        Ok(id)
    }

    pub async fn get(&self, id: i64) -> Result<Advert> {
        let query =
            format!("SELECT name, description, price, pictures FROM {ADVERTS_TABLE} WHERE id = ?");
        let record = sqlx::query_as::<_, Advert>(&query)
            .bind(id)
            .fetch_optional(&self.executor)
            .await?
            .ok_or(Error::RecordNotFound("advertisement"))?;
        Ok(record)
    }

    /// Fetches one page of listing rows. Pages are 1-based; the caller is
    /// responsible for normalizing page numbers below 1. A page past the end
    /// of the table yields an empty vec.
    pub async fn list(&self, page: i64, order: Order) -> Result<Vec<AdvertSummary>> {
        let offset = page.saturating_sub(1).saturating_mul(PAGE_SIZE);
        let query = format!(
            "SELECT name, price, pictures FROM {ADVERTS_TABLE} ORDER BY {order} LIMIT ? OFFSET ?"
        );
        let records = sqlx::query_as::<_, AdvertSummary>(&query)
            .bind(PAGE_SIZE)
            .bind(offset)
            .fetch_all(&self.executor)
            .await?;
        Ok(records)
    }
}
