use sea_orm::DatabaseConnection;

use crate::server::cache::RedisCache;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub cache: RedisCache,
}
