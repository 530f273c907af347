use crate::db;
use crate::helpers::JsonResponse;
use actix_web::{get, web, Responder, Result};
use sqlx::PgPool;

#[tracing::instrument(name = "Get all products.", skip(pg_pool))]
#[get("")]
pub async fn list_handler(pg_pool: web::Data<PgPool>) -> Result<impl Responder> {
    db::product::fetch_all(pg_pool.get_ref())
        .await
        .map(web::Json)
        .map_err(|err| JsonResponse::build().internal_server_error(err))
}
