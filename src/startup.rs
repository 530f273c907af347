use crate::configuration::Settings;
use crate::helpers::JsonError;
use crate::routes;
use actix_cors::Cors;
use actix_web::{dev::Server, error, http, web, App, HttpServer};
use sqlx::{Pool, Postgres};
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

pub async fn run(
    listener: TcpListener,
    pg_pool: Pool<Postgres>,
    settings: Settings,
) -> Result<Server, std::io::Error> {
    let settings = web::Data::new(settings);
    let pg_pool = web::Data::new(pg_pool);

    let json_config = web::JsonConfig::default().error_handler(|err, _req| {
        let msg = match &err {
            error::JsonPayloadError::Deserialize(err) => format!(
                "Invalid JSON at line {}, column {}: {}",
                err.line(),
                err.column(),
                err
            ),
            _ => err.to_string(),
        };
        JsonError::new(http::StatusCode::BAD_REQUEST, msg, "Invalid JSON").into()
    });

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(Cors::permissive())
            .service(web::scope("/health_check").service(routes::health_check))
            .service(
                web::scope("/api")
                    .service(web::scope("/test").service(routes::test::handler))
                    .service(
                        web::scope("/sugerencias")
                            .service(routes::suggestion::list_handler)
                            .service(routes::suggestion::add_handler)
                            .service(routes::suggestion::delete_handler),
                    )
                    .service(
                        web::scope("/productos")
                            .service(routes::product::list_handler)
                            .service(routes::product::add_handler)
                            .service(routes::product::delete_handler),
                    )
                    .service(
                        web::scope("/config")
                            .service(routes::historia::get_handler)
                            .service(routes::historia::update_handler),
                    ),
            )
            .app_data(json_config.clone())
            .app_data(pg_pool.clone())
            .app_data(settings.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
