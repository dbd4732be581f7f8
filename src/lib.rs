use actix_web::{http, web, App, HttpServer};
use actix_web::dev::Server;
use tracing_actix_web::TracingLogger;
use sqlx::PgPool;
use std::net::TcpListener;
use actix_cors::Cors;

pub mod config;
pub mod error;
mod routes;
mod handlers;
pub mod models;
pub mod db;
pub mod league;
pub mod telemetry;
use crate::routes::init_routes;

pub fn run(
    listener: TcpListener,
    db_pool: PgPool,
    allowed_origins: Vec<String>,
) -> Result<Server, std::io::Error> {
    // Wrap using web::Data, which boils down to an Arc smart pointer
    let db_pool_data = web::Data::new(db_pool);

    let server = HttpServer::new(move || {
        let cors = allowed_origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
            .allowed_methods(vec!["GET", "POST", "PUT"])
            .allowed_headers(vec![
                http::header::AUTHORIZATION,
                http::header::ACCEPT,
                http::header::CONTENT_TYPE,
            ])
            .max_age(3600);

        App::new()
            .wrap(TracingLogger::default())
            .wrap(cors)
            // Get a pointer copy and attach it to the application state
            .app_data(db_pool_data.clone())
            .configure(init_routes)
    })
    .listen(listener)?
    .run();

    Ok(server)
}
