// Connection handling module
// Serves one accepted TCP connection with the demo handler

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;

use fetch_helper::logger;

use crate::config::Config;
use crate::handler;

/// Handle a single connection in a spawned task.
///
/// This function:
/// 1. Wraps the TCP stream in `TokioIo`
/// 2. Serves HTTP/1.1 with keep-alive, one `ResponseHelper` per request
/// 3. Bounds the whole connection by `server.connection_timeout`
pub fn handle_connection(stream: tokio::net::TcpStream, peer_addr: SocketAddr, config: Arc<Config>) {
    tokio::spawn(async move {
        let io = TokioIo::new(stream);
        let timeout_duration = Duration::from_secs(config.server.connection_timeout);

        let mut builder = http1::Builder::new();
        builder.keep_alive(true);

        let conn = builder.serve_connection(
            io,
            service_fn(move |req| {
                let config = Arc::clone(&config);
                async move { handler::handle_request(req, peer_addr, config).await }
            }),
        );

        match tokio::time::timeout(timeout_duration, conn).await {
            Ok(Ok(())) => {}
            Ok(Err(err)) => logger::log_connection_error(&err),
            Err(_) => {
                logger::log_warning(&format!(
                    "Connection from {peer_addr} timed out after {} seconds",
                    timeout_duration.as_secs()
                ));
            }
        }
    });
}
