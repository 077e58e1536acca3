// Server module entry point
// Accept loop for the demo server

pub mod connection;
pub mod listener;

use std::net::SocketAddr;
use std::sync::Arc;

use fetch_helper::logger;

use crate::config::Config;

use connection::handle_connection;
use listener::create_listener;

/// Accept connections until Ctrl-C
pub async fn run(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = config.get_socket_addr()?;
    let listener = create_listener(addr)?;
    log_server_start(&addr, &config);

    let config = Arc::new(config);
    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            accepted = listener.accept() => match accepted {
                Ok((stream, peer_addr)) => handle_connection(stream, peer_addr, Arc::clone(&config)),
                Err(e) => logger::log_error(&format!("Failed to accept connection: {e}")),
            },
            result = &mut shutdown => {
                if let Err(e) = result {
                    logger::log_error(&format!("Failed to listen for shutdown signal: {e}"));
                }
                logger::log_server_stop();
                return Ok(());
            }
        }
    }
}

fn log_server_start(addr: &SocketAddr, config: &Config) {
    logger::log_info(&format!("fetch_helper demo server listening on http://{addr}"));
    logger::log_info(&format!("Public directory: {}", config.resources.public_dir));
    if let Some(workers) = config.server.workers {
        logger::log_info(&format!("Worker threads: {workers}"));
    }
    if let Some(ref path) = config.logging.access_log_file {
        logger::log_info(&format!("Access log: {path}"));
    }
    if let Some(ref path) = config.logging.error_log_file {
        logger::log_info(&format!("Error log: {path}"));
    }
}
