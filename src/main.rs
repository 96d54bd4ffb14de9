use actix_cors::Cors;
use actix_web::middleware::{Compress, DefaultHeaders};
use actix_web::{App, HttpServer, web};
use dotenv::dotenv;
use human_panic::setup_panic;
use std::time::Duration;
use tracing::{debug, warn};

use classy_portal::config::AppConfig;
use classy_portal::routes;
use classy_portal::runtime::{lifetime, logging};
use classy_portal::utils::{json_error_handler, path_error_handler, query_error_handler};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    setup_panic!();
    let started = std::time::Instant::now();

    AppConfig::init().expect("Failed to initialize configuration");
    let config = AppConfig::get();
    let _log_guard = logging::init_tracing(config);

    warn!(
        "Starting {} v{} ({})",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        config.app.system_name
    );

    let startup = lifetime::startup::prepare_server_startup(config).await;
    let storage = web::Data::new(startup.storage);
    let github = web::Data::new(startup.github);
    debug!("Startup completed in {} ms", started.elapsed().as_millis());

    let bind_address = config.server_bind_address();
    warn!(
        "Listening on http://{} with {} workers",
        bind_address, config.server.workers
    );

    let server = HttpServer::new(move || {
        App::new()
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(config.cors.max_age),
            )
            .wrap(Compress::default())
            .wrap(DefaultHeaders::new().add(("Cache-Control", "no-store")))
            .app_data(web::QueryConfig::default().error_handler(query_error_handler))
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .app_data(web::PathConfig::default().error_handler(path_error_handler))
            .app_data(web::PayloadConfig::new(config.server.limits.max_payload_size))
            .app_data(storage.clone())
            .app_data(github.clone())
            .configure(routes::configure_api)
    })
    .keep_alive(Duration::from_secs(config.server.timeouts.keep_alive))
    .client_request_timeout(Duration::from_millis(config.server.timeouts.client_request))
    .client_disconnect_timeout(Duration::from_millis(
        config.server.timeouts.client_disconnect,
    ))
    .workers(config.server.workers)
    .bind(bind_address)?
    .run();

    tokio::select! {
        res = server => res?,
        _ = lifetime::shutdown::listen_for_shutdown() => {
            warn!("Graceful shutdown: all tasks completed");
        }
    }

    Ok(())
}
