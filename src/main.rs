use mimalloc::MiMalloc;
use pgseed::config::{Config, EnvFile};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn init_tracing(loglevel: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(loglevel));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_level(true)
                .with_target(false),
        )
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let cfg = match EnvFile::from_process_env().and_then(|env_file| Config::load(&env_file)) {
        Ok(cfg) => cfg,
        Err(e) => {
            init_tracing(&Config::default().loglevel);
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&cfg.loglevel);
    info!(
        conn_str = %cfg.redacted_conn_str(),
        developer = %cfg.developer,
        loglevel = %cfg.loglevel
    );

    match pgseed::app::run(&cfg, std::io::stdout().lock()).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
