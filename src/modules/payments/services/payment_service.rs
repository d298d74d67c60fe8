use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{error, info, warn};

use super::super::models::{
    CHECK_PAYMENT_FAILED_MESSAGE, GENERATE_PIX_FAILED_MESSAGE, MISSING_TRANSACTION_ID_MESSAGE,
};
use crate::core::{AppError, Result};
use crate::modules::gateways::{GatewayReply, PaymentReport, PixCharge, PixGateway};
use crate::modules::orders::{GeneratePixRequest, Order, OrderStore};
use crate::modules::tracking::{TrackingNotifier, TrackingStatus};

/// Relays storefront payment calls to the PIX gateway
///
/// Tracking is optional: with no notifier configured, orders are still
/// recorded but no lookups or notifications happen on status checks.
#[derive(Clone)]
pub struct PaymentService {
    gateway: Arc<dyn PixGateway>,
    store: Arc<dyn OrderStore>,
    notifier: Option<Arc<dyn TrackingNotifier>>,
}

impl PaymentService {
    pub fn new(
        gateway: Arc<dyn PixGateway>,
        store: Arc<dyn OrderStore>,
        notifier: Option<Arc<dyn TrackingNotifier>>,
    ) -> Self {
        Self {
            gateway,
            store,
            notifier,
        }
    }

    pub fn tracking_enabled(&self) -> bool {
        self.notifier.is_some()
    }

    /// Validate the order, request a PIX charge and remember the order under
    /// the gateway transaction id
    ///
    /// # Returns
    /// * `Ok(PixCharge)` - Charge created by the gateway
    /// * `Err(AppError::Validation)` - Required field missing; gateway not contacted
    /// * `Err(AppError::Upstream)` - Gateway rejected the charge
    #[tracing::instrument(skip_all, fields(gateway = self.gateway.name()))]
    pub async fn generate_pix(&self, request: GeneratePixRequest) -> Result<PixCharge> {
        let order = request.into_order()?;

        info!(
            amount = order.amount,
            items = order.items.len(),
            "Generating PIX"
        );

        let charge = match self.gateway.create_pix(&order).await? {
            GatewayReply::Accepted(charge) => charge,
            GatewayReply::Rejected { status, message } => {
                return Err(AppError::upstream(
                    status,
                    message.unwrap_or_else(|| GENERATE_PIX_FAILED_MESSAGE.to_string()),
                ));
            }
        };

        info!(transaction_id = %charge.transaction_id, "PIX generated");

        self.store
            .put(charge.transaction_id.clone(), order.clone())
            .await;

        self.dispatch_tracking(
            charge.transaction_id.clone(),
            order,
            TrackingStatus::WaitingPayment,
            None,
        );

        Ok(charge)
    }

    /// Fetch the transaction status; an approved payment is reported to the
    /// tracking service when tracking is enabled
    ///
    /// With tracking disabled the order lookup is skipped, so an approved
    /// status for an unknown transaction is returned as-is.
    ///
    /// # Returns
    /// * `Ok(PaymentReport)` - Status as reported by the gateway
    /// * `Err(AppError::DataIntegrity)` - Approved transaction with no recorded order
    #[tracing::instrument(skip_all, fields(gateway = self.gateway.name()))]
    pub async fn check_payment(&self, transaction_id: Option<String>) -> Result<PaymentReport> {
        let transaction_id = transaction_id
            .filter(|id| !id.trim().is_empty())
            .ok_or_else(|| AppError::validation(MISSING_TRANSACTION_ID_MESSAGE))?;

        info!(transaction_id = %transaction_id, "Checking payment status");

        let report = match self.gateway.get_payment(&transaction_id).await? {
            GatewayReply::Accepted(report) => report,
            GatewayReply::Rejected { status, message } => {
                return Err(AppError::upstream(
                    status,
                    message.unwrap_or_else(|| CHECK_PAYMENT_FAILED_MESSAGE.to_string()),
                ));
            }
        };

        info!(transaction_id = %transaction_id, status = %report.status, "Payment status fetched");

        if report.is_approved() && self.tracking_enabled() {
            let order = self.store.get(&transaction_id).await.ok_or_else(|| {
                error!(
                    transaction_id = %transaction_id,
                    "Approved transaction has no recorded order"
                );
                AppError::data_integrity(format!(
                    "no order recorded for approved transaction {}",
                    transaction_id
                ))
            })?;

            self.dispatch_tracking(
                transaction_id,
                order,
                TrackingStatus::Approved,
                Some(Utc::now()),
            );
        }

        Ok(report)
    }

    /// Send a tracking notification on a background task
    ///
    /// The response to the storefront never waits on it; failures are logged.
    fn dispatch_tracking(
        &self,
        order_id: String,
        order: Order,
        status: TrackingStatus,
        approved_at: Option<DateTime<Utc>>,
    ) {
        let Some(notifier) = self.notifier.clone() else {
            return;
        };

        tokio::spawn(async move {
            if let Err(e) = notifier
                .notify(&order_id, &order, status, approved_at)
                .await
            {
                warn!(
                    order_id = %order_id,
                    status = %status,
                    error = %e,
                    "Tracking notification failed"
                );
            }
        });
    }
}
