use buzon::configuration::{get_configuration, DatabaseSettings};
use buzon::startup::run;
use buzon::telemetry::{get_subscriber, init_subscriber};
use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};
use sqlx::PgPool;
use std::io::{Error, ErrorKind};
use std::net::TcpListener;
use std::time::Duration;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let subscriber = get_subscriber("buzon".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    let settings = get_configuration().map_err(|err| startup_error("read configuration", err))?;
    let pg_pool = connect(&settings.database).await?;

    let address = format!("{}:{}", settings.app_host, settings.app_port);
    let listener =
        TcpListener::bind(&address).map_err(|err| startup_error(&format!("bind {}", address), err))?;
    tracing::info!("Serving storefront API at {}", address);

    run(listener, pg_pool, settings).await?.await
}

async fn connect(database: &DatabaseSettings) -> std::io::Result<PgPool> {
    tracing::info!(
        db_host = %database.host,
        db_port = database.port,
        db_name = %database.database_name,
        "Connecting to PostgreSQL"
    );

    let connect_options = PgConnectOptions::new()
        .host(&database.host)
        .port(database.port)
        .username(&database.username)
        .password(&database.password)
        .database(&database.database_name)
        .ssl_mode(PgSslMode::Disable);

    let pg_pool = PgPoolOptions::new()
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(30))
        .connect_with(connect_options)
        .await
        .map_err(|err| startup_error("connect to PostgreSQL", err))?;

    sqlx::migrate!("./migrations")
        .run(&pg_pool)
        .await
        .map_err(|err| startup_error("run database migrations", err))?;

    Ok(pg_pool)
}

/// Logs the failure and turns it into the error `main` exits with.
fn startup_error(action: &str, err: impl std::fmt::Display) -> Error {
    tracing::error!("Failed to {}: {}", action, err);
    Error::new(ErrorKind::Other, format!("failed to {}: {}", action, err))
}
