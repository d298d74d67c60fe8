// Order intake and the transient order record kept per gateway transaction.
//
// An order is created from a storefront PIX request once every required
// customer field is present, and is remembered under the transaction id the
// gateway assigns so later status checks can report it to the tracking service.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::{AppError, Result};

/// Message returned when the storefront omits customer, amount or item data
pub const MISSING_ORDER_FIELDS_MESSAGE: &str = "Dados do cliente ou valor/itens ausentes.";

/// A single purchased product
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub title: String,
    pub quantity: u32,
    /// Price per unit in cents
    pub unit_price: i64,
}

/// Campaign attribution tags captured by the storefront
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackingParameters {
    #[serde(default, alias = "source")]
    pub utm_source: Option<String>,
    #[serde(default, alias = "medium")]
    pub utm_medium: Option<String>,
    #[serde(default, alias = "campaign")]
    pub utm_campaign: Option<String>,
    #[serde(default, alias = "term")]
    pub utm_term: Option<String>,
    #[serde(default, alias = "content")]
    pub utm_content: Option<String>,
    #[serde(default, alias = "id")]
    pub utm_id: Option<String>,
}

/// Body of `POST /api/gerar-pix`
///
/// Every field is optional at the wire level so that absence is reported with
/// the storefront-facing message instead of a deserializer error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratePixRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub cpf: Option<String>,
    pub phone: Option<String>,
    /// Amount in cents
    pub amount: Option<i64>,
    pub items: Option<Vec<Item>>,
    pub tracking_parameters: Option<TrackingParameters>,
}

/// Order accepted for PIX generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub name: String,
    pub email: String,
    pub cpf: String,
    pub phone: String,
    pub amount: i64,
    pub items: Vec<Item>,
    pub tracking_parameters: TrackingParameters,
    pub created_at: DateTime<Utc>,
}

impl GeneratePixRequest {
    /// Check presence of every required field and build the order
    ///
    /// Empty strings and a zero amount count as missing.
    pub fn into_order(self) -> Result<Order> {
        self.into_order_at(Utc::now())
    }

    pub fn into_order_at(self, created_at: DateTime<Utc>) -> Result<Order> {
        let missing = || AppError::validation(MISSING_ORDER_FIELDS_MESSAGE);

        let name = present(self.name).ok_or_else(missing)?;
        let email = present(self.email).ok_or_else(missing)?;
        let cpf = present(self.cpf).ok_or_else(missing)?;
        let phone = present(self.phone).ok_or_else(missing)?;
        let amount = self.amount.filter(|a| *a != 0).ok_or_else(missing)?;
        let items = self
            .items
            .filter(|items| !items.is_empty())
            .ok_or_else(missing)?;

        Ok(Order {
            name,
            email,
            cpf,
            phone,
            amount,
            items,
            tracking_parameters: self.tracking_parameters.unwrap_or_default(),
            created_at,
        })
    }
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
