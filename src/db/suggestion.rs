use crate::models;
use sqlx::PgPool;
use tracing::Instrument;

pub async fn fetch_all(pool: &PgPool) -> Result<Vec<models::SuggestionRow>, String> {
    let query_span = tracing::info_span!("Fetch suggestions, newest first.");
    sqlx::query_as::<_, models::SuggestionRow>(
        r#"
        SELECT id, nombre, mensaje, titulo, rating, fecha
        FROM sugerencias
        ORDER BY fecha DESC, id DESC
        "#,
    )
    .fetch_all(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to fetch suggestions, error: {:?}", err);
        "Error al obtener sugerencias".to_string()
    })
}

pub async fn insert(
    pool: &PgPool,
    nombre: &str,
    mensaje: &str,
    titulo: Option<&str>,
    rating: i16,
) -> Result<i32, String> {
    let query_span = tracing::info_span!("Saving new suggestion into the database");
    sqlx::query_scalar::<_, i32>(
        r#"
        INSERT INTO sugerencias (nombre, mensaje, titulo, rating, fecha)
        VALUES ($1, $2, $3, $4, NOW())
        RETURNING id
        "#,
    )
    .bind(nombre)
    .bind(mensaje)
    .bind(titulo)
    .bind(rating)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to insert suggestion, error: {:?}", err);
        "Error al guardar la sugerencia".to_string()
    })
}

/// `false` when no row had that id.
pub async fn delete(pool: &PgPool, id: i32) -> Result<bool, String> {
    tracing::info!("Delete suggestion {}", id);
    sqlx::query("DELETE FROM sugerencias WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await
        .map(|result| result.rows_affected() > 0)
        .map_err(|err| {
            tracing::error!("Failed to delete suggestion {}, error: {:?}", id, err);
            "Error al eliminar la sugerencia".to_string()
        })
}
