use actix_web::{dev::Server, web, App, HttpServer};
use sqlx::PgPool;
use tera::Tera;
use tracing_actix_web::TracingLogger;

pub mod configuration;
pub mod domain;
pub mod password;
pub mod routes;
pub mod startup;
pub mod store;
pub mod telemetry;

pub fn run(
    listener: std::net::TcpListener,
    database: PgPool,
    templates: Tera,
) -> Result<Server, std::io::Error> {
    let database = web::Data::new(database);
    let tera = web::Data::new(templates);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .route("/healthz", web::get().to(routes::healthz))
            .route("/register", web::get().to(routes::register_form))
            .route("/register", web::post().to(routes::register))
            .route("/admin/status", web::get().to(routes::status_form))
            .route("/admin/status", web::post().to(routes::update_status))
            .app_data(database.clone())
            .app_data(tera.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
