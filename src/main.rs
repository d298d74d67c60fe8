use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use anyhow::Context;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pix_relay::config::{mask_secret, Config, LogFormat};
use pix_relay::gateways::{GhostClient, PixGateway};
use pix_relay::modules::health;
use pix_relay::orders::{InMemoryOrderStore, OrderStore};
use pix_relay::payments::{self, PaymentService};
use pix_relay::tracking::{TrackingClient, TrackingNotifier};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    config.validate().context("Configuration validation failed")?;

    init_tracing(config.app.log_format);

    tracing::info!("Starting PIX relay");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Server binding to: {}", config.server.bind_address());
    tracing::info!(
        gateway_url = %config.gateway.base_url,
        secret_key = %mask_secret(&config.gateway.secret_key),
        "Gateway configured"
    );

    let gateway: Arc<dyn PixGateway> =
        Arc::new(GhostClient::new(&config.gateway).context("Failed to build gateway client")?);

    let store: Arc<dyn OrderStore> = Arc::new(InMemoryOrderStore::from_config(&config.store));
    tracing::info!(
        max_entries = config.store.max_entries,
        ttl_secs = config.store.ttl.as_secs(),
        "Order store initialized"
    );

    let notifier = TrackingClient::from_config(&config.tracking)
        .context("Failed to build tracking client")?
        .map(|client| Arc::new(client) as Arc<dyn TrackingNotifier>);
    tracing::info!(enabled = notifier.is_some(), "Tracking notifications");

    let service = web::Data::new(PaymentService::new(gateway, store, notifier));

    // Start HTTP server
    let bind_address = config.server.bind_address();
    let base_path = config.server.base_path.clone();
    tracing::info!(
        "Serving {}/api/gerar-pix and {}/api/check-payment",
        base_path,
        base_path
    );

    let server = HttpServer::new(move || {
        let base_path = base_path.clone();
        App::new()
            .wrap(Cors::permissive())
            .wrap(TracingLogger::default())
            .app_data(service.clone())
            .configure(health::configure)
            .configure(move |cfg| payments::configure(cfg, &base_path))
    })
    .bind(&bind_address)
    .with_context(|| format!("Failed to bind {}", bind_address))?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await.context("Server terminated with an error")
}

fn init_tracing(format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "pix_relay=debug,actix_web=info".into());

    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}
