use sea_orm::DatabaseConnection;
use tower_sessions::SessionManagerLayer;
use tower_sessions_redis_store::RedisStore;

use crate::server::{cache::RedisCache, config::Config, error::Error};

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Connect to Valkey/Redis and configure session management
pub async fn connect_to_session(
    config: &Config,
) -> Result<SessionManagerLayer<RedisStore<tower_sessions_redis_store::fred::prelude::Pool>>, Error>
{
    use time::Duration;
    use tower_sessions::{cookie::SameSite, Expiry};
    use tower_sessions_redis_store::fred::prelude::{ClientLike, Config as RedisConfig, Pool};

    let redis_config = RedisConfig::from_url(&config.valkey_url)?;
    let pool = Pool::new(redis_config, None, None, None, 6)?;

    pool.connect();
    pool.wait_for_connect().await?;

    let session_store = RedisStore::new(pool);

    // Set secure based on build mode: in development (debug) use false, otherwise true.
    let development_mode = cfg!(debug_assertions);
    let secure_cookies = !development_mode;

    let session = SessionManagerLayer::new(session_store)
        .with_secure(secure_cookies)
        .with_same_site(SameSite::Lax)
        .with_http_only(true)
        .with_expiry(Expiry::OnInactivity(Duration::days(7)));

    Ok(session)
}

/// Connect to Valkey/Redis for the debt cache
///
/// A failed initial connection is not fatal: the pool keeps reconnecting
/// with exponential backoff and the cache reports not ready until it
/// succeeds, so reads pass through to the database in the meantime.
pub async fn connect_to_cache(config: &Config) -> Result<RedisCache, Error> {
    use fred::prelude::{ClientLike, Config as RedisConfig, Pool, ReconnectPolicy};

    let redis_config = RedisConfig::from_url(&config.valkey_url)?;
    let policy = ReconnectPolicy::new_exponential(0, 500, 60_000, 2);
    let pool = Pool::new(redis_config, None, None, Some(policy), 6)?;

    pool.connect();
    if let Err(err) = pool.wait_for_connect().await {
        tracing::warn!("Cache connection failed, continuing without cache: {}", err);
    }

    Ok(RedisCache::new(pool))
}
