// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Handrank HTTP server entry point.
use actix_cors::Cors;
use actix_web::{App, HttpResponse, HttpServer, middleware::Logger, web};
use anyhow::{Result, anyhow};
use log::info;
use std::time::Instant;

use crate::{
    error::TipError,
    metadata::Metadata,
    tip::{self, Rankings, Tip, TipRequest},
};

/// Preflight requests cache lifetime in seconds.
const CORS_MAX_AGE: usize = 86_400;

/// Server config.
#[derive(Debug)]
pub struct Config {
    /// The server listening address.
    pub address: String,
    /// The server listening port.
    pub port: u16,
    /// The Texas Hold'em ranking simulation config.
    pub holdem: handrank_eval::Config,
    /// The Omaha Hold'em ranking simulation config.
    pub omaha: handrank_eval::Config,
}

/// Server entry point.
pub async fn run(config: Config) -> Result<()> {
    let Config {
        address,
        port,
        holdem,
        omaha,
    } = config;

    info!("Building rankings {holdem:?} {omaha:?}");
    let now = Instant::now();
    let rankings = tokio::task::spawn_blocking(move || Rankings::new(holdem, omaha)).await??;
    info!("Rankings built in {:.3}s", now.elapsed().as_secs_f64());

    let rankings = web::Data::new(rankings);
    let addr = format!("{address}:{port}");
    info!("Starting server listening on {addr}");

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(cors())
            .app_data(rankings.clone())
            .configure(routes)
    })
    .bind(&addr)
    .map_err(|e| anyhow!("Http listener bind error: {e}"))?
    .run()
    .await
    .map_err(|e| anyhow!("Http server error: {e}"))
}

/// Cross origin policy, browser extensions call from any origin.
pub fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .send_wildcard()
        .allow_any_method()
        .allow_any_header()
        .max_age(CORS_MAX_AGE)
}

/// Registers the service routes.
///
/// Requires a `web::Data<Rankings>` in the application data.
pub fn routes(cfg: &mut web::ServiceConfig) {
    let json_config =
        web::JsonConfig::default().error_handler(|err, _req| TipError::internal(err).into());

    cfg.app_data(json_config)
        .route("/", web::post().to(tip))
        .route("/", web::get().to(metadata));
}

/// Handles a tip request.
async fn tip(
    rankings: web::Data<Rankings>,
    req: web::Json<TipRequest>,
) -> Result<HttpResponse, TipError> {
    let TipRequest {
        game,
        seats,
        community,
    } = req.into_inner();

    let tip = blocking(move || tip::generate_tip(&rankings, &game, &seats, &community)).await?;
    Ok(HttpResponse::Ok().json(tip))
}

/// Runs a tip generation on the blocking thread pool, a panic in the task is
/// an internal error.
async fn blocking<F>(f: F) -> Result<Tip, TipError>
where
    F: FnOnce() -> Result<Tip, TipError> + Send + 'static,
{
    web::block(f).await.map_err(TipError::internal)?
}

/// Returns the service metadata.
async fn metadata() -> HttpResponse {
    HttpResponse::Ok().json(Metadata::default())
}
