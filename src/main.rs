use fetch_helper::logger;

mod config;
mod handler;
mod server;

use config::Config;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // First argument overrides the config file (without extension)
    let cfg = match std::env::args().nth(1) {
        Some(path) => Config::load_from(&path)?,
        None => Config::load()?,
    };
    logger::init(
        cfg.logging.access_log_file.as_deref(),
        cfg.logging.error_log_file.as_deref(),
    )?;

    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();

    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
        logger::log_info(&format!("Using {workers} worker threads"));
    } else {
        logger::log_info("Using default worker threads (CPU cores)");
    }

    let runtime = runtime_builder.build()?;

    runtime.block_on(server::run(cfg))
}
