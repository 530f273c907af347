use crate::db;
use crate::forms;
use crate::helpers::JsonResponse;
use actix_web::{get, put, web, Responder, Result};
use serde_valid::Validate;
use sqlx::PgPool;

#[tracing::instrument(name = "Get historia.", skip(pg_pool))]
#[get("")]
pub async fn get_handler(pg_pool: web::Data<PgPool>) -> Result<impl Responder> {
    db::historia::fetch(pg_pool.get_ref())
        .await
        .map(|valor| {
            web::Json(forms::Historia {
                valor: valor.unwrap_or_default(),
            })
        })
        .map_err(|err| JsonResponse::build().internal_server_error(err))
}

#[tracing::instrument(name = "Update historia.", skip(form, pg_pool))]
#[put("")]
pub async fn update_handler(
    form: web::Json<forms::Historia>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    if let Err(errors) = form.validate() {
        return Err(JsonResponse::build().form_error(errors.to_string()));
    }

    db::historia::upsert(pg_pool.get_ref(), &form.valor)
        .await
        .map(|_| JsonResponse::build().ok(""))
        .map_err(|err| JsonResponse::build().internal_server_error(err))
}
