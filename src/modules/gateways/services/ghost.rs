use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, error, info};

use super::gateway_trait::{GatewayReply, PaymentReport, PixCharge, PixGateway};
use crate::config::{mask_secret, GatewayConfig};
use crate::core::{AppError, Result};
use crate::modules::orders::{Item, Order};

/// Ghost payment gateway client
///
/// Every call authenticates with the raw secret key in the `Authorization`
/// header and answers JSON on both success and failure.
pub struct GhostClient {
    client: Client,
    secret_key: String,
    base_url: String,
}

/// Body of `transaction.purchase`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchasePayload<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub cpf: &'a str,
    pub phone: &'a str,
    pub payment_method: &'static str,
    pub amount: i64,
    pub traceable: bool,
    pub items: &'a [Item],
}

impl<'a> PurchasePayload<'a> {
    pub fn from_order(order: &'a Order) -> Self {
        Self {
            name: &order.name,
            email: &order.email,
            cpf: &order.cpf,
            phone: &order.phone,
            payment_method: "PIX",
            amount: order.amount,
            traceable: true,
            items: &order.items,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PurchaseResponse {
    id: Value,
    #[serde(default)]
    pix_qr_code: Option<String>,
    #[serde(default)]
    pix_code: Option<String>,
}

impl GhostClient {
    /// Create a new Ghost client
    ///
    /// # Arguments
    /// * `config` - Base URL, secret key and request timeout
    pub fn new(config: &GatewayConfig) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            client,
            secret_key: config.secret_key.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Read the body as text and parse it as JSON, keeping the raw text out of
    /// the error returned to callers
    async fn read_json(&self, response: reqwest::Response) -> Result<(u16, Value)> {
        let status = response.status();
        info!(gateway = self.name(), status = %status, "Gateway responded");

        let body = response.text().await?;
        debug!(gateway = self.name(), raw_body = %body, "Gateway raw response");

        match serde_json::from_str::<Value>(&body) {
            Ok(value) => Ok((status.as_u16(), value)),
            Err(e) => {
                error!(
                    gateway = self.name(),
                    status = %status,
                    error = %e,
                    raw_body = %body,
                    "Failed to parse gateway response as JSON"
                );
                Err(AppError::MalformedUpstream(e.to_string()))
            }
        }
    }
}

#[async_trait]
impl PixGateway for GhostClient {
    async fn create_pix(&self, order: &Order) -> Result<GatewayReply<PixCharge>> {
        let url = format!("{}/transaction.purchase", self.base_url);
        let payload = PurchasePayload::from_order(order);

        info!(
            gateway = self.name(),
            url = %url,
            amount = order.amount,
            items = order.items.len(),
            secret_key = %mask_secret(&self.secret_key),
            "Requesting PIX charge"
        );

        let response = self
            .client
            .post(&url)
            .header("Authorization", &self.secret_key)
            .json(&payload)
            .send()
            .await?;

        let (status, body) = self.read_json(response).await?;

        if !(200..300).contains(&status) {
            return Ok(rejected(status, &body));
        }

        let parsed: PurchaseResponse = serde_json::from_value(body).map_err(|e| {
            error!(gateway = self.name(), error = %e, "Gateway success body lacks transaction data");
            AppError::MalformedUpstream(e.to_string())
        })?;

        let transaction_id = id_to_string(&parsed.id).ok_or_else(|| {
            AppError::MalformedUpstream(format!("unsupported transaction id {}", parsed.id))
        })?;

        Ok(GatewayReply::Accepted(PixCharge {
            transaction_id,
            pix_qr_code: parsed.pix_qr_code,
            pix_code: parsed.pix_code,
        }))
    }

    async fn get_payment(&self, transaction_id: &str) -> Result<GatewayReply<PaymentReport>> {
        let url = format!("{}/transaction.getPayment", self.base_url);

        info!(gateway = self.name(), transaction_id, "Requesting payment status");

        let response = self
            .client
            .get(&url)
            .query(&[("id", transaction_id)])
            .header("Authorization", &self.secret_key)
            .header("Content-Type", "application/json")
            .send()
            .await?;

        let (status, body) = self.read_json(response).await?;

        if !(200..300).contains(&status) {
            return Ok(rejected(status, &body));
        }

        // The storefront only needs the raw status; a missing one is reported as-is.
        let status_text = match body.get("status") {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Null) | None => String::new(),
            Some(other) => other.to_string(),
        };

        Ok(GatewayReply::Accepted(PaymentReport {
            status: status_text,
        }))
    }

    fn name(&self) -> &str {
        "ghost"
    }
}

fn rejected<T>(status: u16, body: &Value) -> GatewayReply<T> {
    let message = body
        .get("message")
        .and_then(Value::as_str)
        .filter(|m| !m.is_empty())
        .map(String::from);

    error!(status, body = %body, "Gateway rejected request");

    GatewayReply::Rejected { status, message }
}

fn id_to_string(id: &Value) -> Option<String> {
    match id {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
