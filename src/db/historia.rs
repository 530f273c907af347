use crate::models;
use sqlx::PgPool;
use tracing::Instrument;

pub async fn fetch(pool: &PgPool) -> Result<Option<String>, String> {
    let query_span = tracing::info_span!("Fetch historia.");
    sqlx::query_as::<_, models::ConfigEntry>(
        "SELECT clave, valor FROM configuracion WHERE clave = $1 LIMIT 1",
    )
    .bind(models::HISTORIA_KEY)
    .fetch_optional(pool)
    .instrument(query_span)
    .await
    .map(|entry| entry.map(|entry| entry.valor))
    .map_err(|err| {
        tracing::error!("Failed to fetch historia, error: {:?}", err);
        "Error al obtener la historia".to_string()
    })
}

/// Inserts the entry on first use, replaces the text afterwards.
pub async fn upsert(pool: &PgPool, valor: &str) -> Result<(), String> {
    let query_span = tracing::info_span!("Saving historia into the database");
    sqlx::query(
        r#"
        INSERT INTO configuracion (clave, valor)
        VALUES ($1, $2)
        ON CONFLICT (clave) DO UPDATE SET valor = EXCLUDED.valor
        "#,
    )
    .bind(models::HISTORIA_KEY)
    .bind(valor)
    .execute(pool)
    .instrument(query_span)
    .await
    .map(|_| ())
    .map_err(|err| {
        tracing::error!("Failed to save historia, error: {:?}", err);
        "Error al guardar la historia".to_string()
    })
}
