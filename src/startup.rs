use std::net::TcpListener;

use actix_web::dev::Server;
use sqlx::postgres::{PgPool, PgPoolOptions};
use tera::Tera;

use crate::{
    configuration::{DatabaseSettings, Settings},
    run,
};

pub struct Application {
    pub port: u16,
    pub server: Server,
}

impl Application {
    pub async fn build(config: Settings) -> Result<Self, anyhow::Error> {
        let address = (config.application.host, config.application.port);
        let connection_pool = PgPoolOptions::new().connect_lazy_with(config.database.with_db());
        let templates = load_templates()?;

        let listener = TcpListener::bind(address)?;
        let port = listener.local_addr()?.port();

        let server = run(listener, connection_pool, templates)?;

        Ok(Self { port, server })
    }
}

pub fn get_connection_pool(config: &DatabaseSettings) -> PgPool {
    PgPoolOptions::new().connect_lazy_with(config.with_db())
}

pub fn load_templates() -> Result<Tera, tera::Error> {
    Tera::new("templates/*.html")
}
