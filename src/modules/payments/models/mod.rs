use serde::{Deserialize, Serialize};

use crate::modules::gateways::{PaymentReport, PixCharge};

pub const PIX_GENERATED_MESSAGE: &str = "PIX gerado com sucesso!";
pub const PAYMENT_STATUS_MESSAGE: &str = "Status do pagamento obtido com sucesso.";
pub const MISSING_TRANSACTION_ID_MESSAGE: &str = "ID da transação é obrigatório.";
pub const GENERATE_PIX_FAILED_MESSAGE: &str = "Erro ao gerar PIX na API externa.";
pub const CHECK_PAYMENT_FAILED_MESSAGE: &str =
    "Erro ao verificar status do pagamento na API externa.";

/// Response of `POST /api/gerar-pix`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratePixResponse {
    pub pix_qr_code: Option<String>,
    pub pix_code: Option<String>,
    pub transaction_id: String,
    pub message: String,
}

impl From<PixCharge> for GeneratePixResponse {
    fn from(charge: PixCharge) -> Self {
        Self {
            pix_qr_code: charge.pix_qr_code,
            pix_code: charge.pix_code,
            transaction_id: charge.transaction_id,
            message: PIX_GENERATED_MESSAGE.to_string(),
        }
    }
}

/// Query of `GET /api/check-payment`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CheckPaymentQuery {
    pub id: Option<String>,
}

/// Response of `GET /api/check-payment`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckPaymentResponse {
    pub status: String,
    pub message: String,
}

impl From<PaymentReport> for CheckPaymentResponse {
    fn from(report: PaymentReport) -> Self {
        Self {
            status: report.status,
            message: PAYMENT_STATUS_MESSAGE.to_string(),
        }
    }
}
