//! Configuración de conexión a SQLite
//!
//! Este módulo crea el pool, aplica las migraciones embebidas y expone el
//! extractor `DbConnection`, que toma una conexión del pool por request.

use anyhow::{Context, Result};
use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use sqlx::{
    pool::PoolConnection,
    sqlite::{Sqlite, SqliteConnection, SqlitePool},
};
use std::ops::{Deref, DerefMut};
use tracing::info;

use crate::config::database::DatabaseConfig;
use crate::utils::errors::AppError;

/// Crear el pool de conexiones y dejar el schema al día
pub async fn create_pool(config: &DatabaseConfig) -> Result<SqlitePool> {
    info!("🗄️ Conectando a la base de datos {}", config.url);

    let pool = config
        .create_pool()
        .await
        .with_context(|| format!("Error conectando a {}", config.url))?;

    run_migrations(&pool).await?;

    Ok(pool)
}

/// Ejecutar migraciones de la base de datos
pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .context("Error ejecutando migraciones")?;

    info!("✅ Migraciones aplicadas");
    Ok(())
}

/// Conexión tomada del pool durante la vida de un request.
///
/// Se devuelve al pool al hacer drop, tanto si el handler termina bien como
/// si sale antes con un error.
pub struct DbConnection(pub PoolConnection<Sqlite>);

#[async_trait]
impl<S> FromRequestParts<S> for DbConnection
where
    SqlitePool: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let pool = SqlitePool::from_ref(state);
        let conn = pool.acquire().await?;
        Ok(Self(conn))
    }
}

impl Deref for DbConnection {
    type Target = SqliteConnection;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for DbConnection {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_migrations_create_vehicles_table() {
        let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();

        let (count,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'vehicles'",
        )
        .fetch_one(&pool)
        .await
        .unwrap();
        assert_eq!(count, 1);

        // Volver a aplicarlas no debe fallar
        run_migrations(&pool).await.unwrap();
    }

    #[tokio::test]
    async fn test_connection_returns_to_pool_on_drop() {
        let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();

        let conn = DbConnection(pool.acquire().await.unwrap());
        drop(conn);

        // Con max_connections = 1 esto solo funciona si la conexión volvió
        let mut again = DbConnection(pool.acquire().await.unwrap());
        let (one,): (i64,) = sqlx::query_as("SELECT 1")
            .fetch_one(&mut *again)
            .await
            .unwrap();
        assert_eq!(one, 1);
    }
}
