use crate::db;
use crate::forms;
use crate::helpers::JsonResponse;
use actix_web::{post, web, Responder, Result};
use serde_valid::Validate;
use sqlx::PgPool;

#[tracing::instrument(name = "Add product.", skip(pg_pool))]
#[post("")]
pub async fn add_handler(
    form: web::Json<forms::ProductForm>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let form = form.into_inner().trimmed();
    if let Err(errors) = form.validate() {
        return Err(JsonResponse::build().form_error(errors.to_string()));
    }

    db::product::insert(pg_pool.get_ref(), &form)
        .await
        .map(|id| {
            tracing::info!("New product {} have been saved to database", id);
            JsonResponse::build()
                .set_id(id)
                .ok("Producto guardado correctamente")
        })
        .map_err(|err| JsonResponse::build().internal_server_error(err))
}
