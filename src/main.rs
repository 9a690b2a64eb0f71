mod config;
mod errors;
mod log;
mod models;
mod routes;
#[cfg(test)]
mod tests;
mod utils;
use actix_cors::Cors;
use actix_web::{get, middleware::Logger, web::Data, App, HttpResponse, HttpServer, Responder};
use config::AppConfig;
use models::ServiceInfo;
use std::io;
use tracing::info;
use utils::exchange_rate::ExchangeRateApi;

pub const SERVICE_NAME: &str = "Currency Converter API";

#[get("/")]
async fn home() -> impl Responder {
    HttpResponse::Ok().json(ServiceInfo {
        name: SERVICE_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    log::init_logging();

    let config =
        AppConfig::from_env().map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    info!(
        provider = %config.exchange_rate_api_url,
        timeout = ?config.exchange_rate_api_timeout,
        "Starting {} on {}:{}",
        SERVICE_NAME,
        config.host,
        config.port
    );

    let api_data = Data::new(ExchangeRateApi::new(
        &config.exchange_rate_api_url,
        config.exchange_rate_api_timeout,
    ));
    let server = HttpServer::new(move || {
        App::new()
            .app_data(api_data.clone())
            .wrap(Cors::permissive())
            .wrap(Logger::default())
            .service(home)
            .configure(routes::rates::init)
    })
    .bind((config.host.as_str(), config.port))?
    .run();

    server.await?;

    Ok(())
}
