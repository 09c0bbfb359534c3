use crate::config::AppConfig;
use crate::predict::HttpPredictor;
use crate::responses::error_to_response;
use crate::router::{handle, AppState};
use astra::Server;
use tracing::{error, info};

mod config;
mod errors;
mod form;
mod predict;
mod responses;
mod router;
mod telemetry;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    // 1️⃣ Configuration and logging
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Configuration error: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = telemetry::init(&config.telemetry) {
        eprintln!("❌ Logging setup failed: {e}");
        std::process::exit(1);
    }

    // 2️⃣ Prediction client
    let predictor = match HttpPredictor::new(&config.predict.origin, config.predict.timeout) {
        Ok(predictor) => predictor,
        Err(e) => {
            error!(error = %e, "prediction client setup failed");
            std::process::exit(1);
        }
    };

    let addr = match config.server.socket_addr() {
        Ok(addr) => addr,
        Err(e) => {
            error!(error = %e, "invalid bind address");
            std::process::exit(1);
        }
    };

    info!(
        %addr,
        endpoint = predictor.endpoint(),
        numeric_policy = config.form.numeric_policy.as_str(),
        "Starting server at http://{addr}"
    );

    let state = AppState {
        predictor,
        policy: config.form.numeric_policy,
    };

    // 3️⃣ Serve requests
    let server = Server::bind(&addr).max_workers(config.server.max_workers);

    let result = server.serve(move |req, _info| match handle(req, &state) {
        Ok(resp) => resp,
        Err(err) => error_to_response(err),
    });

    if let Err(e) = result {
        error!(error = %e, "server ended with error");
    }

    info!("Server shut down cleanly.");
}
