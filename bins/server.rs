use std::process::ExitCode;

use common::utils::logging::{init_logging, LogFormat};
use configs::AppConfig;
use dotenvy::dotenv;
use tracing::{error, info, warn};
use uuid::Uuid;

/// config.toml first, then plain environment variables. The second value is
/// why the file was skipped, logged once tracing is up.
fn load_config() -> anyhow::Result<(AppConfig, Option<String>)> {
    match AppConfig::load_and_validate() {
        Ok(cfg) => Ok((cfg, None)),
        Err(file_err) => Ok((AppConfig::from_env()?, Some(file_err.to_string()))),
    }
}

fn main() -> ExitCode {
    // .env must be loaded before RUST_LOG / DATABASE_URL are read
    dotenv().ok();

    let cfg = load_config();
    let format = cfg
        .as_ref()
        .ok()
        .and_then(|(c, _)| c.logging.format.parse::<LogFormat>().ok())
        .unwrap_or_default();
    init_logging(format);

    let cfg = match cfg {
        Ok((cfg, skipped)) => {
            if let Some(reason) = skipped {
                warn!(error = %reason, "config file unusable, configured from environment");
            }
            cfg
        }
        Err(e) => {
            error!(service = "server", event = "config_invalid", error = %e, "no usable configuration");
            return ExitCode::FAILURE;
        }
    };

    let service_id = Uuid::new_v4();
    let pid = std::process::id();
    let version = env!("CARGO_PKG_VERSION");

    std::panic::set_hook(Box::new(move |info| {
        error!(service = "server", event = "panic", %service_id, pid, message = %info, "unhandled panic occurred");
    }));

    let worker_threads = cfg.server.worker_threads;
    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();
    if let Some(w) = worker_threads { builder.worker_threads(w); }

    let rt = match builder.build() {
        Ok(rt) => rt,
        Err(e) => {
            error!(service = "server", event = "runtime_build_failed", error = %e, "failed to build tokio runtime");
            return ExitCode::FAILURE;
        }
    };

    info!(
        service = "server",
        event = "start",
        %service_id,
        pid,
        version,
        threads = worker_threads.unwrap_or_default(),
        "server service starting"
    );

    // server::run handles Ctrl+C itself and returns after draining connections
    rt.block_on(async move {
        match server::run(cfg).await {
            Ok(()) => {
                info!(service = "server", event = "stop", %service_id, pid, "server stopped normally");
                ExitCode::SUCCESS
            }
            Err(e) => {
                error!(service = "server", event = "run_failed", error = %e, "server::run returned error");
                ExitCode::FAILURE
            }
        }
    })
}
