use crate::core::Result;
use crate::modules::orders::Order;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Exact status string the gateway reports for a settled PIX payment
pub const APPROVED_STATUS: &str = "APPROVED";

/// PIX payment gateway trait
#[async_trait]
pub trait PixGateway: Send + Sync {
    /// Request a PIX charge for an order
    async fn create_pix(&self, order: &Order) -> Result<GatewayReply<PixCharge>>;

    /// Look up the current status of a transaction
    async fn get_payment(&self, transaction_id: &str) -> Result<GatewayReply<PaymentReport>>;

    /// Get gateway name
    fn name(&self) -> &str;
}

/// Parsed gateway answer
///
/// Transport failures and unparseable bodies are errors; a well-formed error
/// body from the gateway is a `Rejected` reply that the caller forwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayReply<T> {
    Accepted(T),
    Rejected {
        status: u16,
        message: Option<String>,
    },
}

/// PIX charge created by the gateway
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixCharge {
    /// Gateway transaction reference
    pub transaction_id: String,

    /// QR code payload (usually a base64 image)
    pub pix_qr_code: Option<String>,

    /// Copy-and-paste PIX code
    pub pix_code: Option<String>,
}

/// Payment status as reported by the gateway
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentReport {
    pub status: String,
}

impl PaymentReport {
    pub fn is_approved(&self) -> bool {
        self.status == APPROVED_STATUS
    }
}
