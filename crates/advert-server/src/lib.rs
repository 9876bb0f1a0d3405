pub mod config;
pub mod error;
pub mod run;

use advert_app::state::AppState;
use config::ServerConfig;
pub use error::{Error, Result};

pub async fn build_state(config: &ServerConfig) -> Result<AppState> {
    let pool = advert_dal::new_pool(&config.database_url).await?;
    sqlx::migrate!("../../migrations").run(&pool).await?;
    Ok(AppState::new(pool))
}
