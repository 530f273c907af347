use crate::db;
use crate::helpers::JsonResponse;
use actix_web::{delete, web, Responder, Result};
use sqlx::PgPool;

#[tracing::instrument(name = "Delete product.", skip(pg_pool))]
#[delete("/{id}")]
pub async fn delete_handler(
    path: web::Path<(i32,)>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let (id,) = path.into_inner();

    db::product::delete(pg_pool.get_ref(), id)
        .await
        .map_err(|err| JsonResponse::build().internal_server_error(err))
        .and_then(|deleted| match deleted {
            true => Ok(JsonResponse::build().ok("")),
            false => Err(JsonResponse::build().not_found("Producto no encontrado")),
        })
}
