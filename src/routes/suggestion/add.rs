use crate::db;
use crate::forms;
use crate::helpers::JsonResponse;
use actix_web::{post, web, Responder, Result};
use serde_valid::Validate;
use sqlx::PgPool;

#[tracing::instrument(name = "Add suggestion.", skip(pg_pool))]
#[post("")]
pub async fn add_handler(
    form: web::Json<forms::AddSuggestion>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    if let Err(errors) = form.validate() {
        return Err(JsonResponse::build().form_error(errors.to_string()));
    }

    let (nombre, mensaje) = form
        .required_fields()
        .ok_or_else(|| JsonResponse::build().bad_request("Faltan datos (nombre o mensaje)"))?;

    db::suggestion::insert(
        pg_pool.get_ref(),
        nombre,
        mensaje,
        form.title(),
        form.rating.unwrap_or(0),
    )
    .await
    .map(|id| {
        tracing::info!("New suggestion {} have been saved to database", id);
        JsonResponse::build()
            .set_id(id)
            .ok("Sugerencia guardada correctamente")
    })
    .map_err(|err| JsonResponse::build().internal_server_error(err))
}
