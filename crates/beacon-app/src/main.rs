mod cli;
mod publisher;

use tokio::io::AsyncWrite;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use beacon_common::{BeaconError, Result};
use beacon_config::BeaconConfig;
use beacon_host::{FileHostSource, HostStateReader};
use beacon_sync::{PresenceLoop, SyncConfig};

use publisher::NdjsonPublisher;

#[tokio::main]
async fn main() {
    let args = cli::parse();

    // Config is loaded before logging so its filter can seed the
    // subscriber; load problems are reported right after init.
    let (config, config_err) = match &args.config {
        Some(path) => match beacon_config::load_from_path(path) {
            Ok(config) => (config, None),
            Err(e) => (BeaconConfig::default(), Some(e)),
        },
        None => match beacon_config::load_default() {
            Ok(config) => (config, None),
            Err(e) => (BeaconConfig::default(), Some(e)),
        },
    };

    let directive = args
        .log_level
        .clone()
        .unwrap_or_else(|| config.logging.filter.clone());
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                directive
                    .parse()
                    .unwrap_or_else(|_| "beacon=info".parse().unwrap()),
            ),
        )
        .init();

    info!("beacon v{} starting", env!("CARGO_PKG_VERSION"));
    if let Some(e) = config_err {
        warn!("config load failed, using defaults: {e}");
    }

    if let Err(e) = run(args, config).await {
        error!("fatal: {e}");
        std::process::exit(1);
    }
    info!("shutdown complete");
}

async fn run(args: cli::Args, config: BeaconConfig) -> Result<()> {
    let state_file = match args.state_file.or(config.host.state_file.clone()) {
        Some(path) => path,
        None => FileHostSource::default_path()?,
    };
    info!("watching host state at {}", state_file.display());
    let reader = HostStateReader::new(FileHostSource::new(state_file));

    let sync_config = SyncConfig {
        interval_ms: config.sync.interval_ms,
        application_id: config.sync.application_id.clone(),
        large_image_key: config.sync.large_image_key.clone(),
        ..Default::default()
    };

    match &args.socket {
        #[cfg(unix)]
        Some(path) => {
            let stream = tokio::net::UnixStream::connect(path).await?;
            info!("publishing to {}", path.display());
            run_loop(stream, reader, sync_config).await
        }
        #[cfg(not(unix))]
        Some(path) => {
            warn!(
                "socket transport unsupported on this platform, ignoring {}",
                path.display()
            );
            run_loop(tokio::io::stdout(), reader, sync_config).await
        }
        None => {
            info!("publishing to stdout");
            run_loop(tokio::io::stdout(), reader, sync_config).await
        }
    }
}

async fn run_loop<W>(
    writer: W,
    reader: HostStateReader<FileHostSource>,
    config: SyncConfig,
) -> Result<()>
where
    W: AsyncWrite + Unpin + Send + 'static,
{
    let publisher = NdjsonPublisher::new(writer);
    let mut sync = PresenceLoop::new(reader, publisher, config);
    sync.start().map_err(BeaconError::from)?;
    info!("presence sync running, Ctrl-C to stop");

    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("signal listener failed: {e}");
    }
    sync.request_stop();
    sync.join().await;
    Ok(())
}
