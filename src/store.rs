//! Database bootstrap: ensure the database and the `customer` table exist.

use sqlx::{ConnectOptions, PgPool};
use std::str::FromStr;

/// Ensure the database in `database_url` exists; create it if not. Connects
/// to the default `postgres` database to run CREATE DATABASE. Call before
/// creating the main pool.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), sqlx::Error> {
    let (admin_url, db_name) = parse_db_name_from_url(database_url)?;
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    let opts = sqlx::postgres::PgConnectOptions::from_str(&admin_url)?;
    let mut conn: sqlx::PgConnection = opts.connect().await?;
    let exists: (bool,) =
        sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
            .bind(&db_name)
            .fetch_one(&mut conn)
            .await?;
    if !exists.0 {
        let quoted = quote_ident(&db_name);
        sqlx::query(&format!("CREATE DATABASE {}", quoted))
            .execute(&mut conn)
            .await?;
        tracing::info!(database = %db_name, "created database");
    }
    Ok(())
}

/// Idempotent DDL for the `customer` table. Text widths match the limits in
/// [`crate::validation`].
pub async fn ensure_customer_table(pool: &PgPool) -> Result<(), sqlx::Error> {
    const DDL: &str = r#"
        CREATE TABLE IF NOT EXISTS customer (
            customer_id BIGSERIAL PRIMARY KEY,
            address VARCHAR(200) NOT NULL DEFAULT '',
            city VARCHAR(100) NOT NULL DEFAULT '',
            state VARCHAR(50) NOT NULL DEFAULT '',
            company_name VARCHAR(150) NOT NULL DEFAULT '',
            intro_date TIMESTAMPTZ NOT NULL,
            credit_limit NUMERIC(18, 2) NOT NULL DEFAULT 0
        )
    "#;
    sqlx::query(DDL).execute(pool).await?;
    Ok(())
}

fn parse_db_name_from_url(url: &str) -> Result<(String, String), sqlx::Error> {
    let path_start = url
        .rfind('/')
        .ok_or_else(|| sqlx::Error::Configuration("DATABASE_URL: no path".into()))?
        + 1;
    let path_and_query = url.get(path_start..).unwrap_or("");
    let db_name = path_and_query.split('?').next().unwrap_or("").trim();
    let base = url.get(..path_start).unwrap_or(url);
    let admin_url = format!("{}postgres", base);
    Ok((admin_url, db_name.to_string()))
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('\\', "\\\\").replace('"', "\\\""))
}
