use anyhow::Result;
use axum::{middleware, routing::get, Router};
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::trace::TraceLayer;
use tracing::{info, warn, Level};
use tracing_subscriber::fmt::format::FmtSpan;

use trusttok_gateway::{
    api::{cors_layer, create_web_router, security_headers_middleware, WebApiState},
    demo_feed, FeedAggregator, GatewayConfig, LedgerClient, SubmissionRouter, TrustScoreProvider,
    WalletSession,
};

#[tokio::main]
async fn main() -> Result<()> {
    let config = GatewayConfig::from_env().map_err(|e| {
        eprintln!("Configuration error: {}", e);
        e
    })?;

    init_logging(&config)?;

    info!("Starting TrustTok trust gateway");

    // Trust score provider over the injected known-address table
    let mut provider = TrustScoreProvider::new(config.trust.known_scores.clone());
    if let Some(ref upstream_url) = config.trust.upstream_url {
        provider = provider.with_upstream(upstream_url.clone(), config.trust.timeout_secs)?;
        info!(upstream = %upstream_url, "Remote trust scorer configured");
    }
    let provider = Arc::new(provider);

    // The feed is the only shared mutable state in the gateway
    let feed = Arc::new(RwLock::new(FeedAggregator::new()));
    if config.feed.seed_demo {
        let mut guard = feed.write().await;
        for item in demo_feed() {
            guard.prepend(item);
        }
        info!(items = guard.len(), "Feed seeded with demo posts");
    }

    // Optional on-chain path through the ledger gateway
    let mut submissions = SubmissionRouter::new(provider.clone(), feed.clone());
    if config.ledger.enabled {
        let client = LedgerClient::new(config.ledger.to_client_config())?;
        match client.connect().await {
            Ok(true) => info!("On-chain submission path enabled"),
            _ => warn!("Ledger gateway unreachable; on-chain submissions will fail until it recovers"),
        }
        submissions = submissions.with_wallet(Arc::new(client) as Arc<dyn WalletSession>);
    } else {
        info!("Ledger disabled; gateway runs off-chain only");
    }

    let app = Router::new()
        .nest(
            "/api",
            create_web_router(WebApiState {
                provider,
                feed,
                submissions: Arc::new(submissions),
            }),
        )
        .route("/health", get(|| async { "OK" }))
        .layer(middleware::from_fn(security_headers_middleware))
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http());

    let bind_addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind to {}: {}", bind_addr, e))?;

    info!("TrustTok gateway listening on {}", bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

fn init_logging(config: &GatewayConfig) -> Result<()> {
    let log_level = match config.logging.level.to_lowercase().as_str() {
        "error" => Level::ERROR,
        "warn" => Level::WARN,
        "info" => Level::INFO,
        "debug" => Level::DEBUG,
        "trace" => Level::TRACE,
        _ => Level::INFO,
    };

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_span_events(if config.logging.log_requests {
            FmtSpan::NEW | FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        })
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to set logging subscriber: {}", e))?;

    Ok(())
}
