use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::timestamp::format_tracking;
use crate::modules::orders::{Order, TrackingParameters};

/// Order lifecycle events reported to the tracking service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackingStatus {
    /// PIX generated, customer has not paid yet
    WaitingPayment,
    Approved,
}

impl TrackingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrackingStatus::WaitingPayment => "waiting_payment",
            TrackingStatus::Approved => "approved",
        }
    }
}

impl std::fmt::Display for TrackingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Order payload accepted by the tracking service (upsert by `orderId`)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingOrder {
    pub order_id: String,
    pub platform: String,
    pub payment_method: String,
    pub status: TrackingStatus,
    pub created_at: String,
    pub approved_date: Option<String>,
    pub refunded_at: Option<String>,
    pub customer: TrackingCustomer,
    pub products: Vec<TrackingProduct>,
    pub tracking_parameters: TrackingParameters,
    pub commission: TrackingCommission,
    pub is_test: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackingCustomer {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub document: String,
    pub country: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingProduct {
    pub id: String,
    pub name: String,
    pub plan_id: Option<String>,
    pub plan_name: Option<String>,
    pub quantity: u32,
    pub price_in_cents: i64,
}

/// The whole amount is attributed as commission; the gateway fee is not known here
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingCommission {
    pub total_price_in_cents: i64,
    pub gateway_fee_in_cents: i64,
    pub user_commission_in_cents: i64,
}

/// Static fields every notification carries
#[derive(Debug, Clone)]
pub struct TrackingContext {
    pub platform: String,
    pub is_test: bool,
}

impl TrackingOrder {
    /// Reshape a stored order into the tracking payload
    ///
    /// `approved_at` is only reported for approved notifications.
    pub fn build(
        order_id: &str,
        order: &Order,
        status: TrackingStatus,
        approved_at: Option<DateTime<Utc>>,
        context: &TrackingContext,
    ) -> Self {
        let approved_date = match status {
            TrackingStatus::Approved => approved_at.map(format_tracking),
            TrackingStatus::WaitingPayment => None,
        };

        let products = order
            .items
            .iter()
            .enumerate()
            .map(|(idx, item)| TrackingProduct {
                id: format!("item-{}", idx + 1),
                name: item.title.clone(),
                plan_id: None,
                plan_name: None,
                quantity: item.quantity,
                price_in_cents: item.unit_price,
            })
            .collect();

        Self {
            order_id: order_id.to_string(),
            platform: context.platform.clone(),
            payment_method: "pix".to_string(),
            status,
            created_at: format_tracking(order.created_at),
            approved_date,
            refunded_at: None,
            customer: TrackingCustomer {
                name: order.name.clone(),
                email: order.email.clone(),
                phone: order.phone.clone(),
                document: order.cpf.clone(),
                country: "BR".to_string(),
            },
            products,
            tracking_parameters: order.tracking_parameters.clone(),
            commission: TrackingCommission {
                total_price_in_cents: order.amount,
                gateway_fee_in_cents: 0,
                user_commission_in_cents: order.amount,
            },
            is_test: context.is_test,
        }
    }
}
