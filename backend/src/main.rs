//! Gateway entry-point: loads settings, wires the remote transport and
//! serves the REST API.

mod server;

use std::ffi::OsString;
use std::sync::Arc;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use marketplace::inbound::http::health::HealthState;
use marketplace::outbound::remote::HttpRemoteTransport;
use server::{AppSettings, ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load_from_iter(std::env::args_os().collect::<Vec<OsString>>())
        .map_err(|err| std::io::Error::other(format!("failed to load settings: {err}")))?;
    let base_url = settings.remote_base_url().map_err(std::io::Error::other)?;
    let timeout = settings.remote_timeout().map_err(std::io::Error::other)?;
    let transport = HttpRemoteTransport::new(base_url, timeout)
        .map_err(|err| std::io::Error::other(format!("remote transport: {err}")))?;
    info!(
        host = settings.host(),
        port = settings.port(),
        remote = %transport.base_url(),
        "starting marketplace gateway"
    );

    let config = ServerConfig::new(settings.host(), settings.port(), Arc::new(transport));
    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, config)?;
    server.await
}
