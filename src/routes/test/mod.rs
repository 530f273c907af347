use actix_web::{get, web, Responder, Result};
use serde_json::json;

#[tracing::instrument(name = "Test connection.")]
#[get("")]
pub async fn handler() -> Result<impl Responder> {
    Ok(web::Json(json!({ "message": "API Conectada y funcionando" })))
}
