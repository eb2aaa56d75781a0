//! # BlogSpace Server
//!
//! The posts REST API, built on Actix-web.

use std::net::TcpListener;

use actix_web::dev::Server;
use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod state;
pub mod telemetry;

use state::AppState;

/// Bind the API to an already-open listener. The returned server must be awaited.
pub fn run(listener: TcpListener, state: AppState) -> std::io::Result<Server> {
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(state.clone()))
            .app_data(handlers::json_config())
            .configure(handlers::configure_routes)
    })
    .listen(listener)?
    .run();

    Ok(server)
}
