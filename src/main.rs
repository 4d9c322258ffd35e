//! Server bootstrap: env config, pool, DDL, routes.

use axum::Router;
use customer_api::{
    common_routes, customer_routes, ensure_customer_table, ensure_database_exists, AppState,
    CustomerService, PgCustomerRepository,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("customer_api=info".parse()?))
        .init();

    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| "postgres://localhost/customers".into());
    ensure_database_exists(&database_url).await?;
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await?;
    ensure_customer_table(&pool).await?;

    let service = CustomerService::new(Arc::new(PgCustomerRepository::new(pool)));
    let state = AppState { service };

    let app = Router::new()
        .merge(common_routes(state.clone()))
        .merge(customer_routes(state));

    let bind = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());
    let listener = TcpListener::bind(&bind).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
