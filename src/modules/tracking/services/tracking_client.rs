use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use tracing::{debug, info};

use super::super::models::{TrackingContext, TrackingOrder, TrackingStatus};
use crate::config::TrackingConfig;
use crate::core::{AppError, Result};
use crate::modules::orders::Order;

/// Sink for order lifecycle notifications
///
/// Callers treat every error as non-fatal: it is logged and dropped.
#[async_trait]
pub trait TrackingNotifier: Send + Sync {
    async fn notify(
        &self,
        order_id: &str,
        order: &Order,
        status: TrackingStatus,
        approved_at: Option<DateTime<Utc>>,
    ) -> Result<()>;
}

/// HTTP client for the attribution ingestion endpoint
pub struct TrackingClient {
    client: Client,
    api_url: String,
    api_token: String,
    context: TrackingContext,
}

impl TrackingClient {
    pub fn new(
        api_url: String,
        api_token: String,
        context: TrackingContext,
        timeout: std::time::Duration,
    ) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            api_url,
            api_token,
            context,
        })
    }

    /// Build the client when the tracking toggle is on; `None` otherwise
    pub fn from_config(config: &TrackingConfig) -> Result<Option<Self>> {
        if !config.enabled {
            return Ok(None);
        }

        let token = config.api_token.clone().ok_or_else(|| {
            AppError::Configuration("TRACKING_API_TOKEN not set".to_string())
        })?;

        Self::new(
            config.api_url.clone(),
            token,
            TrackingContext {
                platform: config.platform.clone(),
                is_test: config.is_test,
            },
            config.timeout,
        )
        .map(Some)
    }
}

#[async_trait]
impl TrackingNotifier for TrackingClient {
    async fn notify(
        &self,
        order_id: &str,
        order: &Order,
        status: TrackingStatus,
        approved_at: Option<DateTime<Utc>>,
    ) -> Result<()> {
        let payload = TrackingOrder::build(order_id, order, status, approved_at, &self.context);

        debug!(order_id, status = %status, "Sending tracking notification");

        let response = self
            .client
            .post(&self.api_url)
            .header("x-api-token", &self.api_token)
            .json(&payload)
            .send()
            .await?;

        let http_status = response.status();
        if !http_status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Tracking(format!(
                "tracking service returned {}: {}",
                http_status, body
            )));
        }

        info!(order_id, status = %status, "Tracking notification accepted");
        Ok(())
    }
}
