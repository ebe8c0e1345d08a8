use diesel::r2d2::{self, ConnectionManager};
use diesel::MysqlConnection;
use eyre::Result;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;

use crate::config::{AppConfig, DbInfo};

pub type DbPool = r2d2::Pool<ConnectionManager<MysqlConnection>>;

#[derive(Clone)]
pub struct AppState {
    pub db: DbPool,
    pub http_client: Client,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(db: DbPool, config: AppConfig) -> Result<Arc<Self>> {
        let http = Client::builder().timeout(Duration::from_secs(10)).build()?;

        Ok(Arc::new(Self {
            db,
            http_client: http,
            config,
        }))
    }
}

pub fn build_pool(db: &DbInfo) -> Result<DbPool> {
    let manager = ConnectionManager::<MysqlConnection>::new(db.url());
    let pool = r2d2::Pool::builder().max_size(10).build(manager)?;
    Ok(pool)
}
