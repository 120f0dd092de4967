//! Rerankd HTTP server entrypoint.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};

use mimalloc::MiMalloc;
use tokio::net::TcpListener;
use tokio::signal;

use rerankd::config::Config;
use rerankd::model::{CrossEncoderConfig, INFERENCE_THREADS, init_inference_threads};
use rerankd::scoring::RelevanceScorer;
use rerankd_server::gateway::{HandlerState, create_router_with_state};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    println!(
        r#"
                                 _         _
 _ __   ___  _ __   __ _  _ __  | | __  __| |
| '__| / _ \| '__| / _` || '_ \ | |/ / / _` |
| |   |  __/| |   | (_| || | | ||   < | (_| |
|_|    \___||_|    \__,_||_| |_||_|\_\ \__,_|

        SCORE. DON'T SORT.
                                     AGPL-3.0
"#
    );

    if std::env::args().any(|arg| arg == "--health-check") {
        std::process::exit(run_health_check());
    }

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;
    config.validate()?;
    let addr: SocketAddr = config.socket_addr().parse()?;

    tracing::info!(
        bind_addr = %config.bind_addr,
        port = config.port,
        model = %config.model_repo,
        "Rerankd starting"
    );

    init_inference_threads(INFERENCE_THREADS);

    let model_config = if config.stub_model {
        tracing::warn!("RERANKD_STUB_MODEL set, scoring with the lexical stub");
        CrossEncoderConfig::stub()
    } else if let Some(path) = &config.model_path {
        CrossEncoderConfig::local(path.clone())
    } else {
        CrossEncoderConfig::new(config.model_repo.clone())
    };

    // Any load failure aborts startup here; the listener never binds.
    let load_start = Instant::now();
    let scorer = Arc::new(RelevanceScorer::new(model_config)?);
    tracing::info!(
        elapsed_ms = load_start.elapsed().as_millis() as u64,
        "Scorer ready"
    );

    let state = HandlerState::new(scorer);
    let app = create_router_with_state(state);

    let listener = TcpListener::bind(addr).await?;
    tracing::info!(addr = %addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Rerankd shutdown complete");
    Ok(())
}

/// Container-probe mode: query `/health` on the configured port and exit
/// 0 or 1. Never panics; any failure is an unhealthy verdict.
fn run_health_check() -> i32 {
    let port = Config::from_env().map(|c| c.port).unwrap_or(8080);
    let url = format!("http://127.0.0.1:{port}/health");

    let Ok(rt) = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    else {
        return 1;
    };

    rt.block_on(async {
        let Ok(client) = reqwest::Client::builder()
            .timeout(Duration::from_secs(1))
            .build()
        else {
            return 1;
        };

        match client.get(&url).send().await {
            Ok(res) if res.status().is_success() => 0,
            _ => 1,
        }
    })
}

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        let mut sigterm = signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler");

        tokio::select! {
            _ = signal::ctrl_c() => tracing::info!("Received Ctrl+C, initiating graceful shutdown"),
            _ = sigterm.recv() => tracing::info!("Received SIGTERM, initiating graceful shutdown"),
        }
    }

    #[cfg(not(unix))]
    {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
        tracing::info!("Received Ctrl+C, initiating graceful shutdown");
    }
}
