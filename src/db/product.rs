use crate::forms;
use crate::models;
use sqlx::PgPool;
use tracing::Instrument;

pub async fn fetch_all(pool: &PgPool) -> Result<Vec<models::ProductRow>, String> {
    let query_span = tracing::info_span!("Fetch products.");
    sqlx::query_as::<_, models::ProductRow>(
        r#"
        SELECT id, nombre, descripcion, precio, imagen, stock
        FROM productos
        ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to fetch products, error: {:?}", err);
        "Error al obtener productos".to_string()
    })
}

pub async fn insert(pool: &PgPool, form: &forms::ProductForm) -> Result<i32, String> {
    let stock = i32::try_from(form.stock).map_err(|_| {
        tracing::error!("Product stock {} does not fit the stock column", form.stock);
        "Stock fuera de rango".to_string()
    })?;
    let query_span = tracing::info_span!("Saving new product into the database");
    sqlx::query_scalar::<_, i32>(
        r#"
        INSERT INTO productos (nombre, descripcion, precio, imagen, stock)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id
        "#,
    )
    .bind(&form.name)
    .bind(&form.description)
    .bind(form.price)
    .bind(&form.image)
    .bind(stock)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to insert product, error: {:?}", err);
        "Error al guardar el producto".to_string()
    })
}

pub async fn delete(pool: &PgPool, id: i32) -> Result<bool, String> {
    tracing::info!("Delete product {}", id);
    sqlx::query("DELETE FROM productos WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await
        .map(|result| result.rows_affected() > 0)
        .map_err(|err| {
            tracing::error!("Failed to delete product {}, error: {:?}", id, err);
            "Error al eliminar el producto".to_string()
        })
}
