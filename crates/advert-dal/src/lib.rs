pub mod advert;
pub mod error;

use std::fmt::Display;

pub use error::Error;
pub use sqlx::Error as SqlxError;
use sqlx::sqlite::SqlitePoolOptions;

use crate::error::Result;

pub type ChosenDB = sqlx::Sqlite;
pub type Pool = sqlx::Pool<ChosenDB>;

/// Fixed number of adverts per listing page.
pub const PAGE_SIZE: i64 = 10;

pub async fn new_pool(database_url: &str) -> Result<Pool, Error> {
    let pool = SqlitePoolOptions::new()
        .max_connections(50)
        .connect(database_url)
        .await?;
    Ok(pool)
}

/// Column a listing can be ordered by. Only these two ever reach SQL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderField {
    Price,
    CreatedAt,
}

impl OrderField {
    pub fn column(self) -> &'static str {
        match self {
            OrderField::Price => "price",
            OrderField::CreatedAt => "created_at",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    Asc(OrderField),
    Desc(OrderField),
}

impl Display for Order {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Order::Asc(field) => write!(f, "{}", field.column()),
            Order::Desc(field) => write!(f, "{} DESC", field.column()),
        }
    }
}
