// Standard library
use std::error::Error;
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;

// 3rd party crates
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{filter::Directive, filter::LevelFilter, EnvFilter};

// Project modules
mod checker;
mod server;
mod settings;
mod utility;

// Project imports
use crate::checker::Checker;
use crate::server::AppState;
use crate::settings::ValidatedSettings;
use crate::utility::ip_fetcher::HttpAddressFetcher;

/// Dependencies whose logs are capped at error level.
const QUIET_TARGETS: [&str; 3] = ["hyper_util=error", "hyper=error", "reqwest=error"];

/// Entry point for the public address checker.
///
/// Periodically asks one echo endpoint per address family for the caller's public
/// IPv4 and IPv6 addresses, tracks how healthy each family is, and serves the latest
/// results over HTTP as an HTML page and as JSON.
#[tokio::main]
async fn main() {
    // loads the .env file from the current directory or parents.
    dotenvy::dotenv().ok();

    let settings: ValidatedSettings = match ValidatedSettings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    init_logging(&settings.log_level);
    info!("⚙️ Settings have been loaded.");

    if let Err(e) = run(settings).await {
        error!("Application error: {}", e);
        std::process::exit(1);
    }

    info!("Shutdown complete.");
}

fn init_logging(log_level: &str) {
    let filter: EnvFilter = QUIET_TARGETS
        .iter()
        .filter_map(|target| target.parse::<Directive>().ok())
        .fold(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::ERROR.into())
                .parse_lossy(log_level),
            EnvFilter::add_directive,
        );

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_level(true)
        .init();
}

/// Starts the checker, then serves HTTP until a shutdown signal arrives.
///
/// The first check cycle completes before the listener accepts connections, so the
/// first responses already carry real data.
async fn run(settings: ValidatedSettings) -> Result<(), Box<dyn Error>> {
    info!(
        "Checking {}://{} and {}://{} with a {:?} timeout",
        settings.protocol,
        settings.ipv4_host,
        settings.protocol,
        settings.ipv6_host,
        settings.timeout
    );

    let fetcher = HttpAddressFetcher::new(&settings)?;
    let checker: Arc<Checker> = Arc::new(Checker::new(Arc::new(fetcher), settings.interval));

    let listener: TcpListener =
        TcpListener::bind(SocketAddr::from((Ipv4Addr::UNSPECIFIED, settings.port))).await?;

    checker.start().await;
    info!("Checker started");

    let app = server::router(AppState {
        checker: Arc::clone(&checker),
        refresh_secs: settings.refresh_secs(),
    });
    let served = server::serve(listener, app, shutdown_signal()).await;

    checker.stop();
    served?;
    Ok(())
}

/// Resolves on Ctrl+C, or on SIGTERM where available.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Received shutdown signal, initiating graceful shutdown...");
}
