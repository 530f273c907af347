use crate::db;
use crate::helpers::JsonResponse;
use actix_web::{get, web, Responder, Result};
use sqlx::PgPool;

/// Flat array of rows, newest first. The storefront front-end reads it as is.
#[tracing::instrument(name = "Get all suggestions.", skip(pg_pool))]
#[get("")]
pub async fn list_handler(pg_pool: web::Data<PgPool>) -> Result<impl Responder> {
    db::suggestion::fetch_all(pg_pool.get_ref())
        .await
        .map(web::Json)
        .map_err(|err| JsonResponse::build().internal_server_error(err))
}
